//! Display models handed to pages and the CLI.
//!
//! DESIGN
//! ======
//! These are never deserialized from the wire. Every value here is produced
//! by [`crate::mapping`] from a raw [`crate::dto`] record, so derived fields
//! (`status`, `owner`, `last_scan`, `collection`) are always populated.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;

/// Fallback label for missing owners and unresolved collections.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// The logged-in user as persisted in the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Optional human display name; falls back to `username`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ if !self.username.is_empty() => &self.username,
            _ => &self.email,
        }
    }
}

/// Collection health shown in cards and filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollectionStatus {
    Active,
    Error,
}

impl CollectionStatus {
    pub const ALL: [Self; 2] = [Self::Active, Self::Error];

    #[must_use]
    pub fn from_active(is_active: bool) -> Self {
        if is_active { Self::Active } else { Self::Error }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Error => "Error",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Data-source availability shown in the list badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataSourceStatus {
    Active,
    Disabled,
}

impl DataSourceStatus {
    pub const ALL: [Self; 2] = [Self::Active, Self::Disabled];

    #[must_use]
    pub fn from_active(is_active: bool) -> Self {
        if is_active { Self::Active } else { Self::Disabled }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Disabled => "disabled",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Disabled => "Disabled",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Supported database engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DataSourceType {
    #[serde(rename = "PostgreSQL", alias = "postgresql", alias = "postgres")]
    PostgreSql,
    #[serde(rename = "MongoDB", alias = "mongodb", alias = "mongo")]
    MongoDb,
}

impl DataSourceType {
    pub const ALL: [Self; 2] = [Self::PostgreSql, Self::MongoDb];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PostgreSql => "PostgreSQL",
            Self::MongoDb => "MongoDB",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "postgresql" | "postgres" => Some(Self::PostgreSql),
            "mongodb" | "mongo" => Some(Self::MongoDb),
            _ => None,
        }
    }
}

/// Provenance of an AI model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelOrigin {
    #[serde(rename = "OpenRouter", alias = "openrouter")]
    OpenRouter,
    #[serde(rename = "Internal", alias = "internal")]
    Internal,
}

impl ModelOrigin {
    pub const ALL: [Self; 2] = [Self::OpenRouter, Self::Internal];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenRouter => "OpenRouter",
            Self::Internal => "Internal",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: Option<String>,
    /// Owner display name, `"Unknown"` when the backend omits it.
    pub owner: String,
    pub is_active: bool,
    pub status: CollectionStatus,
    pub data_sources_count: u32,
    pub created_at: Option<OffsetDateTime>,
    pub updated_at: Option<OffsetDateTime>,
    /// Relative time since `updated_at`, or `"Never"`.
    pub last_scan: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataSource {
    pub id: String,
    pub collection_id: String,
    /// Name of the owning collection, `"Unknown"` when unresolved.
    pub collection: String,
    pub name: String,
    pub kind: DataSourceType,
    /// Never carries credentials; the backend strips them.
    pub connection_uri: Option<String>,
    pub metadata: Option<Map<String, Value>>,
    pub last_scanned_at: Option<OffsetDateTime>,
    /// Relative time since `last_scanned_at`, or `"Never"`.
    pub last_scan: String,
    pub is_active: bool,
    pub status: DataSourceStatus,
    pub created_at: Option<OffsetDateTime>,
    pub updated_at: Option<OffsetDateTime>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub id: String,
    pub name: String,
    /// Provider-prefixed machine id, e.g. `openai/gpt-4`.
    pub identifier: String,
    pub description: Option<String>,
    pub origin: ModelOrigin,
    pub is_active: bool,
    pub created_at: Option<OffsetDateTime>,
    pub updated_at: Option<OffsetDateTime>,
}

/// One captured version of a data source's schema.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaSnapshot {
    pub id: String,
    pub data_source_id: Option<String>,
    pub captured_at: Option<OffsetDateTime>,
    pub captured: String,
    pub schema: Value,
}

/// One page of a server-paginated list.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { items: Vec::new(), total: 0 }
    }
}

/// Model list plus the server-reported total.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelList {
    pub models: Vec<Model>,
    pub total: u64,
}

/// A single result row: column name to scalar value, in server order.
pub type QueryRow = Map<String, Value>;
