//! `/api/collections` and its data-source associations.

#[cfg(test)]
#[path = "collections_test.rs"]
mod collections_test;

use serde_json::Value;

use super::{RawList, not_found_as_none, page_params, post_action_summary};
use crate::client::{ApiClient, Auth};
use crate::dto::{AssociateDataSourceRequest, CollectionInput, CollectionUpdate, RawCollection, RawDataSource, RawPage};
use crate::error::ApiError;
use crate::mapping;
use crate::model::{Collection, DataSource, Page};
use crate::transport::Transport;

const BASE: &str = "/api/collections";

/// Page size used when a caller needs every collection, e.g. to resolve
/// data-source collection names.
pub const ALL_LIMIT: u32 = 1000;

/// Paging and search parameters for list endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
}

impl ListQuery {
    #[must_use]
    pub fn page(page: u32, limit: u32) -> Self {
        Self { page: Some(page), limit: Some(limit), search: None }
    }
}

pub struct CollectionsService<'a, T> {
    api: &'a ApiClient<T>,
}

impl<'a, T: Transport> CollectionsService<'a, T> {
    pub(crate) fn new(api: &'a ApiClient<T>) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Any [`ApiError`] from the request or decoding.
    pub async fn list(&self, query: &ListQuery) -> Result<Page<Collection>, ApiError> {
        let params = page_params(query.page, query.limit, query.search.as_deref());
        let raw: RawPage<RawCollection> = self.api.get(BASE, &params).await?;
        let total = raw.total.unwrap_or(raw.items.len() as u64);
        Ok(Page { items: mapping::collections(raw.items, self.api.now()), total })
    }

    /// Every collection the user can see, fetched [`ALL_LIMIT`] at a time
    /// until the reported total is reached or a short page comes back.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] from a request or decoding.
    pub async fn all(&self) -> Result<Vec<Collection>, ApiError> {
        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let batch = self.list(&ListQuery::page(page, ALL_LIMIT)).await?;
            let fetched = batch.items.len();
            items.extend(batch.items);
            if fetched < ALL_LIMIT as usize || items.len() as u64 >= batch.total {
                if (items.len() as u64) < batch.total {
                    log::warn!("collections listing stopped at {} of {} reported", items.len(), batch.total);
                }
                return Ok(items);
            }
            page += 1;
        }
    }

    /// # Errors
    ///
    /// Any [`ApiError`] other than 404, which is `Ok(None)`.
    pub async fn get(&self, id: &str) -> Result<Option<Collection>, ApiError> {
        let raw = not_found_as_none(self.api.get::<RawCollection>(&format!("{BASE}/{id}"), &[]).await)?;
        Ok(raw.map(|raw| mapping::collection(raw, self.api.now())))
    }

    /// # Errors
    ///
    /// Any [`ApiError`]; validation failures come back as 400 `Status`.
    pub async fn create(&self, input: &CollectionInput) -> Result<Collection, ApiError> {
        let raw: RawCollection = self.api.post(BASE, input).await?;
        log::info!("created collection {}", raw.id);
        Ok(mapping::collection(raw, self.api.now()))
    }

    /// Replaces name and description. A `None` description is sent as `""`
    /// so clearing the field clears it on the server.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn update(&self, id: &str, input: &CollectionInput) -> Result<Collection, ApiError> {
        let body = CollectionUpdate::from(input);
        let raw: RawCollection = self.api.put(&format!("{BASE}/{id}"), &body).await?;
        Ok(mapping::collection(raw, self.api.now()))
    }

    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("{BASE}/{id}")).await?;
        log::info!("deleted collection {id}");
        Ok(())
    }

    /// Ask the backend to infer relationships between the collection's data
    /// sources. Returns whatever summary the backend sends back.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn discover_relationships(&self, id: &str) -> Result<Option<Value>, ApiError> {
        post_action_summary(self.api, &format!("{BASE}/{id}/discover-relationships")).await
    }

    /// Data sources attached to `collection`, labelled with its name.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn data_sources(&self, collection: &Collection) -> Result<Vec<DataSource>, ApiError> {
        let path = format!("{BASE}/{}/datasources", collection.id);
        let raw: RawList<RawDataSource> = self.api.get(&path, &[]).await?;
        let names = mapping::collection_names([collection]);
        Ok(mapping::data_sources(raw.into_items(), &names, self.api.now()))
    }

    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn add_data_source(&self, id: &str, data_source_id: &str) -> Result<(), ApiError> {
        let body = AssociateDataSourceRequest { data_source_id: data_source_id.to_owned() };
        let _: Option<Value> = self
            .api
            .post_optional(&format!("{BASE}/{id}/datasources"), &body, Auth::Bearer)
            .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn remove_data_source(&self, id: &str, data_source_id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("{BASE}/{id}/datasources/{data_source_id}")).await
    }
}
