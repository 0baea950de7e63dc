//! The single DTO → display-model mapping layer.
//!
//! Every derived display field is computed here and nowhere else:
//! collection status and owner, data-source status and collection name,
//! relative scan labels, model provider. `now` is passed in so labels are
//! deterministic under test.

#[cfg(test)]
#[path = "mapping_test.rs"]
mod mapping_test;

use std::collections::HashMap;

use time::OffsetDateTime;

use crate::dto::{RawCollection, RawDataSource, RawModel, RawSchemaSnapshot, RawUser};
use crate::model::{
    Collection, CollectionStatus, DataSource, DataSourceStatus, Model, SchemaSnapshot, UNKNOWN_LABEL, User,
};
use crate::relative_time::{format_relative_or_never, parse_timestamp};

/// Collection id → collection name, built once per data-source page.
pub type CollectionNames = HashMap<String, String>;

#[must_use]
pub fn user(raw: RawUser) -> User {
    let username = raw.username.unwrap_or_default();
    let email = raw.email.unwrap_or_default();
    User { id: raw.id, username, email, name: raw.name }
}

/// Owner label for a collection: the nested user's display name or
/// `"Unknown"`.
#[must_use]
pub fn owner_label(owner: Option<&RawUser>) -> String {
    owner
        .map(|raw| user(raw.clone()))
        .map(|u| u.display_name().to_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_owned())
}

#[must_use]
pub fn collection(raw: RawCollection, now: OffsetDateTime) -> Collection {
    let owner = owner_label(raw.owner.as_ref());
    let owner_id = raw.owner_id.or_else(|| raw.owner.as_ref().map(|o| o.id.clone()));
    let created_at = raw.created_at.as_deref().and_then(parse_timestamp);
    let updated_at = raw.updated_at.as_deref().and_then(parse_timestamp);
    Collection {
        id: raw.id,
        name: raw.name,
        description: raw.description.filter(|d| !d.trim().is_empty()),
        owner_id,
        owner,
        is_active: raw.is_active,
        status: CollectionStatus::from_active(raw.is_active),
        data_sources_count: raw.data_sources_count.unwrap_or(0),
        created_at,
        updated_at,
        last_scan: format_relative_or_never(updated_at, now),
    }
}

#[must_use]
pub fn collections(raws: Vec<RawCollection>, now: OffsetDateTime) -> Vec<Collection> {
    raws.into_iter().map(|raw| collection(raw, now)).collect()
}

/// Build the id → name lookup used to label data sources.
#[must_use]
pub fn collection_names<'a, I>(collections: I) -> CollectionNames
where
    I: IntoIterator<Item = &'a Collection>,
{
    collections.into_iter().map(|c| (c.id.clone(), c.name.clone())).collect()
}

#[must_use]
pub fn data_source(raw: RawDataSource, names: &CollectionNames, now: OffsetDateTime) -> DataSource {
    let collection = names
        .get(&raw.collection_id)
        .cloned()
        .unwrap_or_else(|| UNKNOWN_LABEL.to_owned());
    let last_scanned_at = raw.last_scanned_at.as_deref().and_then(parse_timestamp);
    DataSource {
        id: raw.id,
        collection_id: raw.collection_id,
        collection,
        name: raw.name,
        kind: raw.kind,
        connection_uri: raw.connection_uri,
        metadata: raw.metadata,
        last_scanned_at,
        last_scan: format_relative_or_never(last_scanned_at, now),
        is_active: raw.is_active,
        status: DataSourceStatus::from_active(raw.is_active),
        created_at: raw.created_at.as_deref().and_then(parse_timestamp),
        updated_at: raw.updated_at.as_deref().and_then(parse_timestamp),
    }
}

#[must_use]
pub fn data_sources(raws: Vec<RawDataSource>, names: &CollectionNames, now: OffsetDateTime) -> Vec<DataSource> {
    raws.into_iter().map(|raw| data_source(raw, names, now)).collect()
}

#[must_use]
pub fn model(raw: RawModel) -> Model {
    Model {
        id: raw.id,
        name: raw.name,
        identifier: raw.identifier,
        description: raw.description.filter(|d| !d.trim().is_empty()),
        origin: raw.origin,
        is_active: raw.is_active,
        created_at: raw.created_at.as_deref().and_then(parse_timestamp),
        updated_at: raw.updated_at.as_deref().and_then(parse_timestamp),
    }
}

#[must_use]
pub fn schema_snapshot(raw: RawSchemaSnapshot, now: OffsetDateTime) -> SchemaSnapshot {
    let captured_at = raw.created_at.as_deref().and_then(parse_timestamp);
    SchemaSnapshot {
        id: raw.id,
        data_source_id: raw.data_source_id,
        captured_at,
        captured: format_relative_or_never(captured_at, now),
        schema: raw.schema,
    }
}
