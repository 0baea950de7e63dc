use std::time::Duration;

use futures::executor::block_on;
use serde_json::{Value, json};

use super::*;
use crate::mock::MockTransport;
use crate::session::{MemoryStore, Session};

const BASE: &str = "http://api.test";

fn client(mock: MockTransport, token: Option<&str>) -> ApiClient<MockTransport> {
    let store = match token {
        Some(t) => MemoryStore::with_session(Session { token: t.to_owned(), user: None }),
        None => MemoryStore::new(),
    };
    ApiClient::new(mock, ApiConfig::new(BASE), Rc::new(store))
}

#[test]
fn bearer_header_injected_when_token_present() {
    let api = client(MockTransport::new().with_json(Method::Get, "/api/models", 200, &json!({})), Some("tok-1"));
    let _: Value = block_on(api.get("/api/models", &[])).unwrap();
    let req = &api.transport().requests()[0];
    assert_eq!(req.header("authorization"), Some("Bearer tok-1"));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.header("Accept"), Some("application/json"));
    assert_eq!(req.url, "http://api.test/api/models");
}

#[test]
fn bearer_header_omitted_without_token() {
    let api = client(MockTransport::new().with_json(Method::Get, "/api/models", 200, &json!({})), None);
    let _: Value = block_on(api.get("/api/models", &[])).unwrap();
    assert_eq!(api.transport().requests()[0].header("Authorization"), None);
}

#[test]
fn anonymous_requests_skip_bearer() {
    let api = client(MockTransport::new().with_json(Method::Post, "/api/auth/login", 200, &json!({})), Some("tok"));
    let out: Option<Value> = block_on(api.post_optional("/api/auth/login", &json!({}), Auth::Anonymous)).unwrap();
    assert!(out.is_some());
    assert_eq!(api.transport().requests()[0].header("Authorization"), None);
}

#[test]
fn request_carries_configured_deadline() {
    let mock = MockTransport::new().with_json(Method::Get, "/x", 200, &json!(1));
    let api = ApiClient::new(
        mock,
        ApiConfig::new(BASE).with_timeout(Some(Duration::from_secs(5))),
        Rc::new(MemoryStore::new()),
    );
    let _: Value = block_on(api.get("/x", &[])).unwrap();
    assert_eq!(api.transport().requests()[0].timeout, Some(Duration::from_secs(5)));
}

#[test]
fn structured_error_message_is_raised() {
    let mock = MockTransport::new().with_json(
        Method::Put,
        "/api/collections/1",
        422,
        &json!({ "error": { "code": "E_VALIDATION", "message": "Name is too long" } }),
    );
    let api = client(mock, Some("t"));
    let err = block_on(api.put::<_, Value>("/api/collections/1", &json!({ "name": "x" }))).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 422, message: "Name is too long".to_owned() });
}

#[test]
fn unstructured_error_synthesizes_message() {
    let mock = MockTransport::new().with_raw(Method::Get, "/api/collections", 500, "boom");
    let api = client(mock, None);
    let err = block_on(api.get::<Value>("/api/collections", &[])).unwrap_err();
    assert_eq!(err.to_string(), "Error 500: Internal Server Error");
}

#[test]
fn no_content_returns_absence_sentinel() {
    let mock = MockTransport::new().with_raw(Method::Post, "/api/auth/logout", 204, "");
    let api = client(mock, Some("t"));
    let out: Option<Value> = block_on(api.post_optional("/api/auth/logout", &json!({}), Auth::Bearer)).unwrap();
    assert!(out.is_none());
}

#[test]
fn required_body_missing_is_decode_error() {
    let mock = MockTransport::new().with_raw(Method::Get, "/api/models", 204, "");
    let api = client(mock, None);
    let err = block_on(api.get::<Value>("/api/models", &[])).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn delete_ignores_body() {
    let mock = MockTransport::new().with_raw(Method::Delete, "/api/data-sources/9", 200, "{\"deleted\":true}");
    let api = client(mock, Some("t"));
    block_on(api.delete("/api/data-sources/9")).unwrap();
    assert_eq!(api.transport().requests()[0].method, Method::Delete);
}

#[test]
fn network_error_passes_through() {
    let mock = MockTransport::new().with_error(Method::Get, "/api/models", ApiError::Network("offline".to_owned()));
    let api = client(mock, None);
    let err = block_on(api.get::<Value>("/api/models", &[])).unwrap_err();
    assert_eq!(err.to_string(), "offline");
}

#[test]
fn post_serializes_body() {
    let mock = MockTransport::new().with_json(Method::Post, "/api/collections", 201, &json!({ "id": "1" }));
    let api = client(mock, Some("t"));
    let _: Value = block_on(api.post("/api/collections", &json!({ "name": "Logs" }))).unwrap();
    assert_eq!(api.transport().requests()[0].body.as_deref(), Some(r#"{"name":"Logs"}"#));
}

#[test]
fn with_query_skips_absent_values_and_encodes() {
    let path = with_query(
        "/api/models",
        &[("origin", Some("OpenRouter".to_owned())), ("search", None), ("q", Some("a b&c".to_owned()))],
    );
    assert_eq!(path, "/api/models?origin=OpenRouter&q=a+b%26c");
    assert_eq!(with_query("/api/models", &[("search", None)]), "/api/models");
}
