//! Application-wide reactive state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` wraps each state struct in an `RwSignal` and provides it through
//! Leptos context. Page-scoped state (form fields, list filters) lives in the
//! page components themselves.

pub mod notice;
pub mod session;
pub mod ui;
