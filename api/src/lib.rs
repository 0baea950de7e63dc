//! Shared REST client, domain models, and page logic for Delfos.
//!
//! This crate owns everything that does not touch the DOM: the HTTP client
//! and its error decoding, the raw backend records (`dto`), the display
//! models (`model`) and the single mapping layer between them, the resource
//! services, the query workflow state machine, and the pure helpers behind
//! list filtering, pagination, form validation, and result tables.
//!
//! It compiles for both the browser (`client`) and native targets (`cli`);
//! each embedder supplies its own [`transport::Transport`] and
//! [`session::SessionStore`].

pub mod cancel;
pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod filter;
pub mod mapping;
pub mod model;
pub mod pagination;
pub mod query;
pub mod relative_time;
pub mod results;
pub mod services;
pub mod session;
pub mod theme;
pub mod transport;
pub mod validation;

#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
