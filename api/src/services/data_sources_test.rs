use std::rc::Rc;

use futures::executor::block_on;
use serde_json::json;
use time::OffsetDateTime;

use super::*;
use crate::config::ApiConfig;
use crate::mock::MockTransport;
use crate::model::{DataSourceStatus, DataSourceType};
use crate::session::MemoryStore;
use crate::transport::Method;

fn fixed_now() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(1_800_000_000).unwrap()
}

fn client(mock: MockTransport) -> ApiClient<MockTransport> {
    ApiClient::new(mock, ApiConfig::new("http://api.test"), Rc::new(MemoryStore::new())).with_clock(fixed_now)
}

fn raw_source(id: u32, collection_id: u32, active: bool) -> serde_json::Value {
    json!({
        "id": id,
        "collectionId": collection_id,
        "name": format!("source-{id}"),
        "type": "PostgreSQL",
        "isActive": active,
        "lastScannedAt": "2027-01-15T08:00:00Z",
    })
}

fn collections_page() -> serde_json::Value {
    json!({ "items": [{ "id": 1, "name": "Core Services", "isActive": true }], "total": 1 })
}

#[test]
fn list_joins_collection_names() {
    let mock = MockTransport::new()
        .with_json(Method::Get, BASE, 200, &json!({ "items": [raw_source(10, 1, true), raw_source(11, 99, false)], "total": 21 }))
        .with_json(Method::Get, "/api/collections", 200, &collections_page());
    let api = client(mock);
    let page = block_on(api.data_sources().list(&ListQuery::page(3, 10))).unwrap();
    assert_eq!(page.total, 21);
    assert_eq!(page.items[0].collection, "Core Services");
    assert_eq!(page.items[0].status, DataSourceStatus::Active);
    assert_eq!(page.items[1].collection, "Unknown");
    assert_eq!(page.items[1].status, DataSourceStatus::Disabled);
    assert_eq!(page.items[0].kind, DataSourceType::PostgreSql);

    let collection_requests = api.transport().requests_to("/api/collections");
    assert_eq!(collection_requests.len(), 1);
    assert!(collection_requests[0].url.contains("limit=1000"));
}

#[test]
fn list_fails_when_collection_lookup_fails() {
    let mock = MockTransport::new()
        .with_json(Method::Get, BASE, 200, &json!({ "items": [], "total": 0 }))
        .with_json(Method::Get, "/api/collections", 500, &json!({ "message": "boom" }));
    let err = block_on(client(mock).data_sources().list(&ListQuery::default())).unwrap_err();
    assert_eq!(err.to_string(), "boom");
}

#[test]
fn get_resolves_single_collection() {
    let mock = MockTransport::new()
        .with_json(Method::Get, "/api/data-sources/10", 200, &raw_source(10, 1, true))
        .with_json(Method::Get, "/api/collections/1", 200, &json!({ "id": 1, "name": "Core Services" }));
    let ds = block_on(client(mock).data_sources().get("10")).unwrap().unwrap();
    assert_eq!(ds.collection, "Core Services");
    assert_eq!(ds.collection_id, "1");
}

#[test]
fn get_missing_is_none() {
    assert_eq!(block_on(client(MockTransport::new()).data_sources().get("10")).unwrap(), None);
}

#[test]
fn create_succeeds_when_collection_lookup_fails() {
    let mock = MockTransport::new()
        .with_json(Method::Post, BASE, 201, &raw_source(5, 1, true))
        .with_error(Method::Get, "/api/collections/1", ApiError::Network("connection reset".to_owned()));
    let api = client(mock);
    let input = DataSourceInput {
        name: "source-5".to_owned(),
        kind: DataSourceType::PostgreSql,
        collection_id: Some("1".to_owned()),
        connection_uri: Some("postgres://db.internal/app".to_owned()),
        credentials: None,
    };
    let created = block_on(api.data_sources().create(&input)).unwrap();
    assert_eq!(created.id, "5");
    assert_eq!(created.collection, "Unknown");
    assert_eq!(api.transport().requests_to(BASE).len(), 1);
}

#[test]
fn update_succeeds_when_collection_is_gone() {
    let mock = MockTransport::new().with_json(Method::Put, "/api/data-sources/5", 200, &raw_source(5, 1, false));
    let api = client(mock);
    let input = DataSourceInput {
        name: "source-5".to_owned(),
        kind: DataSourceType::PostgreSql,
        collection_id: Some("1".to_owned()),
        connection_uri: Some("postgres://db.internal/app".to_owned()),
        credentials: None,
    };
    let updated = block_on(api.data_sources().update("5", &input)).unwrap();
    assert_eq!(updated.collection, "Unknown");
}

#[test]
fn create_serializes_write_only_fields() {
    let mock = MockTransport::new()
        .with_json(Method::Post, BASE, 201, &raw_source(12, 1, true))
        .with_json(Method::Get, "/api/collections/1", 200, &json!({ "id": 1, "name": "Core Services" }));
    let api = client(mock);
    let input = DataSourceInput {
        name: "source-12".to_owned(),
        kind: DataSourceType::MongoDb,
        collection_id: Some("1".to_owned()),
        connection_uri: Some("mongodb://db:27017".to_owned()),
        credentials: None,
    };
    let ds = block_on(api.data_sources().create(&input)).unwrap();
    assert_eq!(ds.id, "12");
    let body: serde_json::Value = serde_json::from_str(api.transport().requests()[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(
        body,
        json!({ "name": "source-12", "type": "MongoDB", "collectionId": "1", "connectionUri": "mongodb://db:27017" })
    );
}

#[test]
fn schema_actions_and_snapshots() {
    let mock = MockTransport::new()
        .with_raw(Method::Post, "/api/data-sources/10/extract-schema", 202, "")
        .with_json(Method::Post, "/api/data-sources/10/rescan", 200, &json!({ "status": "queued" }))
        .with_json(Method::Get, "/api/data-sources/10/schema", 200, &json!({ "tables": ["users"] }))
        .with_json(
            Method::Get,
            "/api/data-sources/10/snapshots",
            200,
            &json!([{ "id": "s1", "dataSourceId": 10, "createdAt": "2027-01-15T06:00:00Z", "schema": {} }]),
        );
    let api = client(mock);
    assert_eq!(block_on(api.data_sources().extract_schema("10")).unwrap(), None);
    assert_eq!(block_on(api.data_sources().rescan("10")).unwrap(), Some(json!({ "status": "queued" })));
    assert_eq!(block_on(api.data_sources().schema("10")).unwrap(), json!({ "tables": ["users"] }));
    let snaps = block_on(api.data_sources().snapshots("10")).unwrap();
    assert_eq!(snaps.len(), 1);
    assert_eq!(snaps[0].data_source_id.as_deref(), Some("10"));
}

#[test]
fn connection_test_checks_uri_locally() {
    let ok = test_connection("postgresql://user:pw@db.internal:5432/app");
    assert!(ok.success);
    assert_eq!(ok.message, CONNECTION_OK);

    let bad = test_connection("not a uri");
    assert!(!bad.success);
    assert_eq!(bad.message, CONNECTION_INVALID_URI);
}
