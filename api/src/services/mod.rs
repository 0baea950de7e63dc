//! Resource services over [`ApiClient`].
//!
//! Each service borrows the client, calls one REST resource, and hands back
//! display models built by [`crate::mapping`]. Obtain them through the
//! accessor methods: `api.collections().list(..)`.

pub mod auth;
pub mod collections;
pub mod data_sources;
pub mod models;
pub mod queries;

use serde::Deserialize;
use serde_json::Value;

use crate::client::{ApiClient, Auth};
use crate::dto::RawPage;
use crate::error::ApiError;
use crate::transport::{Method, Transport};

pub use auth::AuthService;
pub use collections::{CollectionsService, ListQuery};
pub use data_sources::DataSourcesService;
pub use models::{ModelQuery, ModelsService};
pub use queries::QueriesService;

impl<T: Transport> ApiClient<T> {
    pub fn auth(&self) -> AuthService<'_, T> {
        AuthService::new(self)
    }

    pub fn collections(&self) -> CollectionsService<'_, T> {
        CollectionsService::new(self)
    }

    pub fn data_sources(&self) -> DataSourcesService<'_, T> {
        DataSourcesService::new(self)
    }

    pub fn models(&self) -> ModelsService<'_, T> {
        ModelsService::new(self)
    }

    pub fn queries(&self) -> QueriesService<'_, T> {
        QueriesService::new(self)
    }
}

/// Nested list endpoints answer with either a bare array or a page envelope.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RawList<R> {
    Items(Vec<R>),
    Page(RawPage<R>),
}

impl<R> RawList<R> {
    pub(crate) fn into_items(self) -> Vec<R> {
        match self {
            Self::Items(items) | Self::Page(RawPage { items, .. }) => items,
        }
    }
}

/// Turn a 404 into `Ok(None)` for single-record reads.
pub(crate) fn not_found_as_none<R>(result: Result<R, ApiError>) -> Result<Option<R>, ApiError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

/// `page`/`limit`/`search` query parameters shared by paged list endpoints.
pub(crate) fn page_params(page: Option<u32>, limit: Option<u32>, search: Option<&str>) -> Vec<(&'static str, Option<String>)> {
    vec![
        ("page", page.map(|p| p.to_string())),
        ("limit", limit.map(|l| l.to_string())),
        ("search", search.map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned)),
    ]
}

/// `POST path` with no body for action endpoints that may answer with a
/// JSON summary or nothing at all.
pub(crate) async fn post_action_summary<T: Transport>(api: &ApiClient<T>, path: &str) -> Result<Option<Value>, ApiError> {
    let body = api.execute(Method::Post, path, None, Auth::Bearer).await?;
    body.map(|raw| serde_json::from_str(&raw).map_err(|e| ApiError::Decode(e.to_string())))
        .transpose()
}
