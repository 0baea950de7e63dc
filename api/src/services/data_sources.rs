//! `/api/data-sources`: CRUD, schema extraction, and snapshots.
//!
//! List and single reads resolve the owning collection's display name. The
//! list fetches the full collection list concurrently with the page and
//! joins through an id → name lookup; ids with no match read `"Unknown"`.

#[cfg(test)]
#[path = "data_sources_test.rs"]
mod data_sources_test;

use serde_json::Value;

use super::{ListQuery, RawList, not_found_as_none, page_params, post_action_summary};
use crate::client::ApiClient;
use crate::dto::{DataSourceInput, RawDataSource, RawPage, RawSchemaSnapshot};
use crate::error::ApiError;
use crate::mapping::{self, CollectionNames};
use crate::model::{DataSource, Page, SchemaSnapshot};
use crate::transport::Transport;
use crate::validation::is_valid_uri;

const BASE: &str = "/api/data-sources";

pub const CONNECTION_OK: &str = "Connection successful";
pub const CONNECTION_INVALID_URI: &str = "Invalid URI format";

/// Outcome of the local connection check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionTest {
    pub success: bool,
    pub message: String,
}

/// Check that `uri` parses as a URI. No network traffic.
#[must_use]
pub fn test_connection(uri: &str) -> ConnectionTest {
    if is_valid_uri(uri) {
        ConnectionTest { success: true, message: CONNECTION_OK.to_owned() }
    } else {
        ConnectionTest { success: false, message: CONNECTION_INVALID_URI.to_owned() }
    }
}

pub struct DataSourcesService<'a, T> {
    api: &'a ApiClient<T>,
}

impl<'a, T: Transport> DataSourcesService<'a, T> {
    pub(crate) fn new(api: &'a ApiClient<T>) -> Self {
        Self { api }
    }

    /// One page of data sources, each labelled with its collection's name.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] from either request.
    pub async fn list(&self, query: &ListQuery) -> Result<Page<DataSource>, ApiError> {
        let params = page_params(query.page, query.limit, query.search.as_deref());
        let page = self.api.get::<RawPage<RawDataSource>>(BASE, &params);
        let collections_service = self.api.collections();
        let collections = collections_service.all();
        let (page, collections) = futures::try_join!(page, collections)?;
        let names = mapping::collection_names(&collections);
        let total = page.total.unwrap_or(page.items.len() as u64);
        Ok(Page { items: mapping::data_sources(page.items, &names, self.api.now()), total })
    }

    /// # Errors
    ///
    /// Any [`ApiError`] other than 404, which is `Ok(None)`.
    pub async fn get(&self, id: &str) -> Result<Option<DataSource>, ApiError> {
        let raw = not_found_as_none(self.api.get::<RawDataSource>(&format!("{BASE}/{id}"), &[]).await)?;
        match raw {
            Some(raw) => Ok(Some(self.label(raw).await)),
            None => Ok(None),
        }
    }

    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn create(&self, input: &DataSourceInput) -> Result<DataSource, ApiError> {
        let raw: RawDataSource = self.api.post(BASE, input).await?;
        log::info!("created data source {} in collection {}", raw.id, raw.collection_id);
        Ok(self.label(raw).await)
    }

    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn update(&self, id: &str, input: &DataSourceInput) -> Result<DataSource, ApiError> {
        let raw: RawDataSource = self.api.put(&format!("{BASE}/{id}"), input).await?;
        Ok(self.label(raw).await)
    }

    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("{BASE}/{id}")).await?;
        log::info!("deleted data source {id}");
        Ok(())
    }

    /// Start schema extraction. Returns the backend's summary, if any.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn extract_schema(&self, id: &str) -> Result<Option<Value>, ApiError> {
        post_action_summary(self.api, &format!("{BASE}/{id}/extract-schema")).await
    }

    /// Re-scan the source. Returns the backend's summary, if any.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn rescan(&self, id: &str) -> Result<Option<Value>, ApiError> {
        post_action_summary(self.api, &format!("{BASE}/{id}/rescan")).await
    }

    /// The latest extracted schema document.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn schema(&self, id: &str) -> Result<Value, ApiError> {
        self.api.get(&format!("{BASE}/{id}/schema"), &[]).await
    }

    /// Schema history, newest first as the backend orders it.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn snapshots(&self, id: &str) -> Result<Vec<SchemaSnapshot>, ApiError> {
        let raw: RawList<RawSchemaSnapshot> = self.api.get(&format!("{BASE}/{id}/snapshots"), &[]).await?;
        let now = self.api.now();
        Ok(raw.into_items().into_iter().map(|s| mapping::schema_snapshot(s, now)).collect())
    }

    #[must_use]
    pub fn test_connection(&self, uri: &str) -> ConnectionTest {
        test_connection(uri)
    }

    /// Map one record, resolving its collection name with a single lookup.
    /// The write has already happened by the time this runs, so a failed
    /// lookup only costs the label.
    async fn label(&self, raw: RawDataSource) -> DataSource {
        let mut names = CollectionNames::new();
        match self.api.collections().get(&raw.collection_id).await {
            Ok(Some(collection)) => {
                names.insert(collection.id, collection.name);
            }
            Ok(None) => {}
            Err(err) => log::warn!("collection lookup for data source {} failed: {err}", raw.id),
        }
        mapping::data_source(raw, &names, self.api.now())
    }
}
