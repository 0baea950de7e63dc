//! Construction of the browser API client.
//!
//! `ApiClient` holds an `Rc` session handle and is not `Send`, so it never
//! lives in reactive context. Handlers build one per action inside their
//! `spawn_local` task; construction is a couple of small allocations.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::rc::Rc;

use api::{ApiClient, ApiConfig};

use super::session_store::LocalStorageStore;
use super::transport::BrowserTransport;

pub type Api = ApiClient<BrowserTransport>;

/// Backend settings baked in at build time from `DELFOS_API_BASE_URL` and
/// `DELFOS_REQUEST_TIMEOUT_SECS`.
pub fn config() -> ApiConfig {
    ApiConfig::from_values(option_env!("DELFOS_API_BASE_URL"), option_env!("DELFOS_REQUEST_TIMEOUT_SECS"))
}

pub fn api_client() -> Api {
    ApiClient::new(BrowserTransport, config(), Rc::new(LocalStorageStore))
}
