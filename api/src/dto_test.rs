use super::*;

#[test]
fn raw_collection_decodes_sparse_record() {
    let raw: RawCollection = serde_json::from_value(serde_json::json!({
        "id": 7,
        "name": "Marketing Analytics Q3"
    }))
    .unwrap();
    assert_eq!(raw.id, "7");
    assert!(!raw.is_active);
    assert!(raw.owner.is_none());
    assert!(raw.updated_at.is_none());
}

#[test]
fn raw_collection_decodes_nested_owner() {
    let raw: RawCollection = serde_json::from_value(serde_json::json!({
        "id": "c1",
        "name": "Logs",
        "ownerId": 3,
        "user": { "id": 3, "username": "maria", "name": "Maria Garcia" },
        "isActive": true,
        "dataSourcesCount": 12,
        "updatedAt": "2026-10-16T10:00:00Z"
    }))
    .unwrap();
    assert_eq!(raw.owner_id.as_deref(), Some("3"));
    assert_eq!(raw.owner.unwrap().name.as_deref(), Some("Maria Garcia"));
    assert_eq!(raw.data_sources_count, Some(12));
}

#[test]
fn raw_data_source_reads_type_field() {
    let raw: RawDataSource = serde_json::from_value(serde_json::json!({
        "id": "ds1",
        "collectionId": "c1",
        "name": "Production PostgreSQL DB",
        "type": "PostgreSQL",
        "isActive": false,
        "metadata": { "schemaCount": 4 }
    }))
    .unwrap();
    assert_eq!(raw.kind, DataSourceType::PostgreSql);
    assert_eq!(raw.metadata.unwrap()["schemaCount"], 4);
}

#[test]
fn raw_data_source_rejects_unknown_type() {
    let res = serde_json::from_value::<RawDataSource>(serde_json::json!({
        "id": "ds1",
        "collectionId": "c1",
        "name": "Kafka",
        "type": "Kafka"
    }));
    assert!(res.is_err());
}

#[test]
fn raw_id_rejects_boolean() {
    let res = serde_json::from_value::<RawUser>(serde_json::json!({ "id": true }));
    assert!(res.is_err());
}

#[test]
fn raw_model_defaults_active() {
    let raw: RawModel = serde_json::from_value(serde_json::json!({
        "id": "m1",
        "name": "GPT-4",
        "identifier": "openai/gpt-4",
        "origin": "OpenRouter"
    }))
    .unwrap();
    assert!(raw.is_active);
    assert_eq!(raw.origin, ModelOrigin::OpenRouter);
}

#[test]
fn page_accepts_items_or_data() {
    let items: RawPage<Value> = serde_json::from_str(r#"{"items":[1,2],"total":9}"#).unwrap();
    assert_eq!(items.items.len(), 2);
    assert_eq!(items.total, Some(9));
    let data: RawPage<Value> = serde_json::from_str(r#"{"data":[1]}"#).unwrap();
    assert_eq!(data.items.len(), 1);
    assert_eq!(data.total, None);
}

#[test]
fn query_response_accepts_bare_and_wrapped_rows() {
    let bare: RawQueryResponse = serde_json::from_str(r#"[{"a":1}]"#).unwrap();
    assert_eq!(bare.into_rows().len(), 1);
    for key in ["rows", "results", "data"] {
        let body = format!(r#"{{"{key}":[{{"a":1}},{{"a":2}}]}}"#);
        let wrapped: RawQueryResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(wrapped.into_rows().len(), 2, "key {key}");
    }
}

#[test]
fn query_rows_preserve_column_order() {
    let rows = serde_json::from_str::<RawQueryResponse>(r#"[{"zeta":1,"alpha":2,"mid":3}]"#)
        .unwrap()
        .into_rows();
    let keys: Vec<&str> = rows[0].keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn login_request_duplicates_identifier() {
    let body = serde_json::to_value(LoginRequest::new("alex", "pw")).unwrap();
    assert_eq!(body, serde_json::json!({ "username": "alex", "email": "alex", "password": "pw" }));
}

#[test]
fn data_source_input_omits_absent_fields() {
    let input = DataSourceInput {
        name: "Mongo".to_owned(),
        kind: DataSourceType::MongoDb,
        collection_id: None,
        connection_uri: Some("mongodb://db:27017".to_owned()),
        credentials: None,
    };
    assert_eq!(
        serde_json::to_value(input).unwrap(),
        serde_json::json!({ "name": "Mongo", "type": "MongoDB", "connectionUri": "mongodb://db:27017" })
    );
}

#[test]
fn query_request_is_camel_case() {
    let req = QueryRequest { collection_id: "c1".to_owned(), model_id: "m1".to_owned(), query: "q".to_owned() };
    assert_eq!(
        serde_json::to_value(req).unwrap(),
        serde_json::json!({ "collectionId": "c1", "modelId": "m1", "query": "q" })
    );
}
