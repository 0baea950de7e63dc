//! `/api/models` plus the pure helpers the Models screen uses to slice the
//! list.

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

use std::collections::BTreeMap;

use super::not_found_as_none;
use crate::client::ApiClient;
use crate::dto::{RawModel, RawModelList};
use crate::error::ApiError;
use crate::mapping;
use crate::model::{Model, ModelList, ModelOrigin};
use crate::transport::Transport;

const BASE: &str = "/api/models";

/// Provider label for identifiers without a `provider/` prefix.
pub const UNKNOWN_PROVIDER: &str = "unknown";

/// Server-side filters for the model list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelQuery {
    pub origin: Option<ModelOrigin>,
    pub search: Option<String>,
}

pub struct ModelsService<'a, T> {
    api: &'a ApiClient<T>,
}

impl<'a, T: Transport> ModelsService<'a, T> {
    pub(crate) fn new(api: &'a ApiClient<T>) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn list(&self, query: &ModelQuery) -> Result<ModelList, ApiError> {
        let params = [
            ("origin", query.origin.map(|o| o.as_str().to_owned())),
            ("search", query.search.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned)),
        ];
        let raw: RawModelList = self.api.get(BASE, &params).await?;
        let total = raw.total.unwrap_or(raw.models.len() as u64);
        Ok(ModelList { models: raw.models.into_iter().map(mapping::model).collect(), total })
    }

    /// # Errors
    ///
    /// Any [`ApiError`] other than 404, which is `Ok(None)`.
    pub async fn get(&self, id: &str) -> Result<Option<Model>, ApiError> {
        let raw = not_found_as_none(self.api.get::<RawModel>(&format!("{BASE}/{id}"), &[]).await)?;
        Ok(raw.map(mapping::model))
    }
}

/// `"openai/gpt-4"` → `"openai"`; no prefix → `"unknown"`.
#[must_use]
pub fn provider_from_identifier(identifier: &str) -> &str {
    match identifier.split_once('/') {
        Some((provider, _)) if !provider.is_empty() => provider,
        _ => UNKNOWN_PROVIDER,
    }
}

/// Models keyed by provider, providers in alphabetical order, models in
/// input order within each group.
#[must_use]
pub fn group_by_provider(models: &[Model]) -> BTreeMap<String, Vec<Model>> {
    let mut groups: BTreeMap<String, Vec<Model>> = BTreeMap::new();
    for model in models {
        groups
            .entry(provider_from_identifier(&model.identifier).to_owned())
            .or_default()
            .push(model.clone());
    }
    groups
}

#[must_use]
pub fn filter_by_origin(models: &[Model], origin: ModelOrigin) -> Vec<Model> {
    models.iter().filter(|m| m.origin == origin).cloned().collect()
}

#[must_use]
pub fn filter_active(models: &[Model]) -> Vec<Model> {
    models.iter().filter(|m| m.is_active).cloned().collect()
}

/// Case-insensitive sort by display name. The sort is stable, so equal
/// names keep their input order.
#[must_use]
pub fn sort_by_name(models: &[Model], ascending: bool) -> Vec<Model> {
    let mut sorted = models.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = a.name.to_lowercase().cmp(&b.name.to_lowercase());
        if ascending { ordering } else { ordering.reverse() }
    });
    sorted
}
