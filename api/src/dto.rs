//! Raw backend records and request bodies.
//!
//! DESIGN
//! ======
//! These types mirror the REST payloads exactly and stay private to the
//! service boundary; pages only ever see [`crate::model`] values. Fields the
//! backend may omit are `Option` or `#[serde(default)]` so a sparse record
//! still decodes.

#[cfg(test)]
#[path = "dto_test.rs"]
mod dto_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::model::{DataSourceType, ModelOrigin, QueryRow};

/// Accept identifiers encoded either as strings or integers.
fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or integer id, got {other}"))),
    }
}

fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected string or integer id, got {other}"))),
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUser {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "displayName", alias = "fullName")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCollection {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de_opt_id", alias = "userId")]
    pub owner_id: Option<String>,
    #[serde(default, alias = "user")]
    pub owner: Option<RawUser>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, alias = "dataSourceCount")]
    pub data_sources_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDataSource {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(deserialize_with = "de_id")]
    pub collection_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DataSourceType,
    #[serde(default)]
    pub connection_uri: Option<String>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
    #[serde(default, alias = "lastScanAt")]
    pub last_scanned_at: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawModel {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    pub identifier: String,
    #[serde(default)]
    pub description: Option<String>,
    pub origin: ModelOrigin,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSchemaSnapshot {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub data_source_id: Option<String>,
    #[serde(default, alias = "capturedAt")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub schema: Value,
}

/// Paged list envelope. Some endpoints call the array `data`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawPage<T> {
    #[serde(alias = "data")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawModelList {
    pub models: Vec<RawModel>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: RawUser,
}

/// Rows from `/api/queries/execute`: a bare array or wrapped in an object.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawQueryResponse {
    Rows(Vec<QueryRow>),
    Wrapped(WrappedRows),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WrappedRows {
    #[serde(alias = "results", alias = "data")]
    pub rows: Vec<QueryRow>,
}

impl RawQueryResponse {
    #[must_use]
    pub fn into_rows(self) -> Vec<QueryRow> {
        match self {
            Self::Rows(rows) | Self::Wrapped(WrappedRows { rows }) => rows,
        }
    }
}

// =============================================================================
// REQUEST BODIES
// =============================================================================

/// Body for `POST /api/auth/login`. The single username-or-email field is
/// sent under both keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    #[must_use]
    pub fn new(username_or_email: &str, password: &str) -> Self {
        Self {
            username: username_or_email.to_owned(),
            email: username_or_email.to_owned(),
            password: password.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CollectionInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// PUT body for a collection. Unlike create, the description is always
/// present; an absent key would leave the stored one untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CollectionUpdate<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a CollectionInput> for CollectionUpdate<'a> {
    fn from(input: &'a CollectionInput) -> Self {
        Self { name: &input.name, description: input.description.as_deref().unwrap_or_default() }
    }
}

/// Body for data-source create/update. `connection_uri` and `credentials`
/// are write-only; the backend never returns them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceInput {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DataSourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub collection_id: String,
    pub model_id: String,
    pub query: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociateDataSourceRequest {
    pub data_source_id: String,
}
