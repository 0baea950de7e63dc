//! Browser plumbing for the shared `api` crate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never call `gloo-net` or `localStorage` directly. They build a
//! client with [`client::api_client`], which wires the fetch transport and
//! the `localStorage` session store into `api::ApiClient`.

pub mod client;
pub mod session_store;
pub mod transport;
