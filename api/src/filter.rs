//! In-memory filter chains for the list screens.
//!
//! Every filter is an intersection: a blank search and any `None` facet
//! ("All" in the UI) pass everything through. Name search is a
//! case-insensitive substring match.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::collections::BTreeSet;

use crate::model::{Collection, CollectionStatus, DataSource, DataSourceStatus, DataSourceType, Model, ModelOrigin};
use crate::services::models::sort_by_name;

/// Select value meaning "no filter".
pub const ALL: &str = "all";

/// Read a select value: `"all"` or blank is `None`.
#[must_use]
pub fn choice(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case(ALL) { None } else { Some(raw.to_owned()) }
}

fn matches_search(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

fn normalized(search: &str) -> String {
    search.trim().to_lowercase()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectionFilter {
    pub search: String,
    pub status: Option<CollectionStatus>,
    pub owner: Option<String>,
}

impl CollectionFilter {
    #[must_use]
    pub fn apply(&self, collections: &[Collection]) -> Vec<Collection> {
        let needle = normalized(&self.search);
        collections
            .iter()
            .filter(|c| matches_search(&c.name, &needle))
            .filter(|c| self.status.is_none_or(|s| c.status == s))
            .filter(|c| self.owner.as_deref().is_none_or(|o| c.owner == o))
            .cloned()
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSourceFilter {
    pub search: String,
    pub kind: Option<DataSourceType>,
    /// Collection display name.
    pub collection: Option<String>,
    pub status: Option<DataSourceStatus>,
}

impl DataSourceFilter {
    #[must_use]
    pub fn apply(&self, sources: &[DataSource]) -> Vec<DataSource> {
        let needle = normalized(&self.search);
        sources
            .iter()
            .filter(|d| matches_search(&d.name, &needle))
            .filter(|d| self.kind.is_none_or(|k| d.kind == k))
            .filter(|d| self.collection.as_deref().is_none_or(|c| d.collection == c))
            .filter(|d| self.status.is_none_or(|s| d.status == s))
            .cloned()
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelFilter {
    /// Matched against name, identifier, and description.
    pub search: String,
    pub origin: Option<ModelOrigin>,
}

impl ModelFilter {
    /// Filter, then sort by name ascending.
    #[must_use]
    pub fn apply(&self, models: &[Model]) -> Vec<Model> {
        let needle = normalized(&self.search);
        let filtered: Vec<Model> = models
            .iter()
            .filter(|m| {
                matches_search(&m.name, &needle)
                    || matches_search(&m.identifier, &needle)
                    || m.description.as_deref().is_some_and(|d| matches_search(d, &needle))
            })
            .filter(|m| self.origin.is_none_or(|o| m.origin == o))
            .cloned()
            .collect();
        sort_by_name(&filtered, true)
    }
}

/// Owner names for the owner dropdown, sorted and deduplicated.
#[must_use]
pub fn distinct_owners(collections: &[Collection]) -> Vec<String> {
    collections.iter().map(|c| c.owner.clone()).collect::<BTreeSet<_>>().into_iter().collect()
}

/// Collection names for the data-source collection dropdown.
#[must_use]
pub fn distinct_collections(sources: &[DataSource]) -> Vec<String> {
    sources.iter().map(|d| d.collection.clone()).collect::<BTreeSet<_>>().into_iter().collect()
}
