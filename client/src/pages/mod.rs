//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, filters, form state)
//! and delegates rendering details to `components`. Business rules live in
//! the `api` crate so they stay testable without a browser.

pub mod collection_details;
pub mod collection_form;
pub mod collections;
pub mod dashboard;
pub mod data_source_form;
pub mod data_sources;
pub mod forgot_password;
pub mod login;
pub mod models;
pub mod query;
