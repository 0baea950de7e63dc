use time::Duration;

use super::*;
use crate::model::{DataSourceType, ModelOrigin};

fn now() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(1_800_000_000).unwrap()
}

fn iso(t: OffsetDateTime) -> String {
    t.format(&time::format_description::well_known::Rfc3339).unwrap()
}

fn raw_collection(id: &str, active: bool) -> RawCollection {
    RawCollection {
        id: id.to_owned(),
        name: format!("Collection {id}"),
        description: None,
        owner_id: None,
        owner: None,
        is_active: active,
        data_sources_count: None,
        created_at: None,
        updated_at: None,
    }
}

fn raw_data_source(id: &str, collection_id: &str, active: bool) -> RawDataSource {
    RawDataSource {
        id: id.to_owned(),
        collection_id: collection_id.to_owned(),
        name: format!("Source {id}"),
        kind: DataSourceType::PostgreSql,
        connection_uri: None,
        metadata: None,
        last_scanned_at: None,
        is_active: active,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn collection_status_follows_active_flag() {
    assert_eq!(collection(raw_collection("1", true), now()).status, CollectionStatus::Active);
    assert_eq!(collection(raw_collection("2", false), now()).status, CollectionStatus::Error);
}

#[test]
fn collection_owner_defaults_to_unknown() {
    let c = collection(raw_collection("1", true), now());
    assert_eq!(c.owner, "Unknown");
    assert_eq!(c.last_scan, "Never");
    assert_eq!(c.data_sources_count, 0);
}

#[test]
fn collection_owner_uses_nested_display_name() {
    let mut raw = raw_collection("1", true);
    raw.owner = Some(RawUser {
        id: "9".to_owned(),
        username: Some("achen".to_owned()),
        email: None,
        name: Some("Alex Chen".to_owned()),
    });
    raw.updated_at = Some(iso(now() - Duration::hours(2)));
    let c = collection(raw, now());
    assert_eq!(c.owner, "Alex Chen");
    assert_eq!(c.owner_id.as_deref(), Some("9"));
    assert_eq!(c.last_scan, "2 hours ago");
}

#[test]
fn blank_description_becomes_none() {
    let mut raw = raw_collection("1", true);
    raw.description = Some("   ".to_owned());
    assert_eq!(collection(raw, now()).description, None);
}

#[test]
fn data_source_status_and_collection_join() {
    let cols = collections(vec![raw_collection("c1", true), raw_collection("c2", true)], now());
    let names = collection_names(&cols);
    let mapped = data_sources(
        vec![raw_data_source("d1", "c2", true), raw_data_source("d2", "missing", false)],
        &names,
        now(),
    );
    assert_eq!(mapped[0].collection, "Collection c2");
    assert_eq!(mapped[0].status, DataSourceStatus::Active);
    assert_eq!(mapped[1].collection, "Unknown");
    assert_eq!(mapped[1].status, DataSourceStatus::Disabled);
}

#[test]
fn data_source_last_scan_label() {
    let mut raw = raw_data_source("d1", "c1", true);
    raw.last_scanned_at = Some(iso(now() - Duration::minutes(1)));
    assert_eq!(data_source(raw, &CollectionNames::new(), now()).last_scan, "1 minute ago");
}

#[test]
fn unparsable_timestamp_reads_never() {
    let mut raw = raw_data_source("d1", "c1", true);
    raw.last_scanned_at = Some("not a date".to_owned());
    let ds = data_source(raw, &CollectionNames::new(), now());
    assert_eq!(ds.last_scanned_at, None);
    assert_eq!(ds.last_scan, "Never");
}

#[test]
fn model_maps_fields() {
    let m = model(RawModel {
        id: "m1".to_owned(),
        name: "GPT-4".to_owned(),
        identifier: "openai/gpt-4".to_owned(),
        description: Some(String::new()),
        origin: ModelOrigin::Internal,
        is_active: false,
        created_at: None,
        updated_at: None,
    });
    assert_eq!(m.identifier, "openai/gpt-4");
    assert_eq!(m.description, None);
    assert!(!m.is_active);
}

#[test]
fn snapshot_captured_label() {
    let snap = schema_snapshot(
        RawSchemaSnapshot {
            id: "s1".to_owned(),
            data_source_id: Some("d1".to_owned()),
            created_at: Some(iso(now() - Duration::days(3))),
            schema: serde_json::json!({ "tables": [] }),
        },
        now(),
    );
    assert_eq!(snap.captured, "3 days ago");
}
