use std::future::pending;
use std::rc::Rc;

use api::ApiConfig;
use api::mock::MockTransport;
use api::session::{MemoryStore, Session, SessionStore};
use api::transport::Method;
use serde_json::json;

use super::*;
use crate::args::CollectionsCommand;

fn client(mock: MockTransport, store: Rc<MemoryStore>) -> ApiClient<MockTransport> {
    ApiClient::new(mock, ApiConfig::new("http://api.test"), store)
}

fn logged_in() -> Rc<MemoryStore> {
    Rc::new(MemoryStore::with_session(Session { token: "jwt".to_owned(), user: None }))
}

fn draft() -> QueryDraft {
    QueryDraft {
        question: "total sales?".to_owned(),
        collection_id: Some("c1".to_owned()),
        model_id: Some("m1".to_owned()),
    }
}

// =============================================================
// Auth
// =============================================================

#[tokio::test]
async fn login_persists_session() {
    let store = Rc::new(MemoryStore::new());
    let mock = MockTransport::new().with_json(
        Method::Post,
        "/api/auth/login",
        200,
        &json!({ "token": "jwt", "user": { "id": 1, "username": "achen", "email": "a@example.com" } }),
    );
    let api = client(mock, Rc::clone(&store));
    let out = run(&api, Command::Login { username: "achen".to_owned(), password: "pw".to_owned() }).await.unwrap();
    assert!(out.starts_with("Logged in as achen"));
    assert_eq!(store.token().as_deref(), Some("jwt"));
}

#[tokio::test]
async fn login_with_blank_password_sends_nothing() {
    let api = client(MockTransport::new(), Rc::new(MemoryStore::new()));
    let err = run(&api, Command::Login { username: "achen".to_owned(), password: String::new() }).await.unwrap_err();
    assert!(matches!(err, CliError::Invalid(_)));
    assert_eq!(api.transport().request_count(), 0);
}

#[tokio::test]
async fn whoami_requires_session() {
    let api = client(MockTransport::new(), Rc::new(MemoryStore::new()));
    assert!(matches!(run(&api, Command::Whoami).await, Err(CliError::NotLoggedIn)));
}

// =============================================================
// Collections
// =============================================================

#[tokio::test]
async fn collection_get_missing_is_not_found() {
    let api = client(MockTransport::new(), logged_in());
    let command = Command::Collections(CollectionsCommand { command: CollectionsSubcommand::Get { id: "9".to_owned() } });
    let err = run(&api, command).await.unwrap_err();
    assert_eq!(err.to_string(), "collection 9 not found");
}

#[tokio::test]
async fn collection_list_pages_with_fixed_size() {
    let mock = MockTransport::new().with_json(
        Method::Get,
        "/api/collections",
        200,
        &json!({ "items": [{ "id": 1, "name": "Sales", "isActive": true }], "total": 11 }),
    );
    let api = client(mock, logged_in());
    let list = CollectionsSubcommand::List(ListArgs { page: 2, search: None });
    let out = run(&api, Command::Collections(CollectionsCommand { command: list })).await.unwrap();
    assert!(out.ends_with("Showing 11 to 11 of 11 results"));
    assert_eq!(api.transport().requests()[0].url, "http://api.test/api/collections?page=2&limit=10");
}

#[tokio::test]
async fn collection_create_validates_name() {
    let api = client(MockTransport::new(), logged_in());
    let create = CollectionsSubcommand::Create { name: "  ".to_owned(), description: None };
    let err = run(&api, Command::Collections(CollectionsCommand { command: create })).await.unwrap_err();
    assert!(err.to_string().starts_with("invalid input: name:"));
}

// =============================================================
// Query
// =============================================================

#[tokio::test]
async fn query_renders_rows() {
    let mock =
        MockTransport::new().with_json(Method::Post, "/api/queries/execute", 200, &json!([{ "product": "A", "total": 3 }]));
    let api = client(mock, logged_in());
    let out = query(&api, &draft(), pending::<()>()).await.unwrap();
    assert_eq!(out, "product\ttotal\nA\t3\nShowing 1 rows");
}

#[tokio::test]
async fn query_failure_carries_server_message() {
    let mock = MockTransport::new().with_json(
        Method::Post,
        "/api/queries/execute",
        500,
        &json!({ "message": "model unavailable" }),
    );
    let api = client(mock, logged_in());
    let err = query(&api, &draft(), pending::<()>()).await.unwrap_err();
    assert_eq!(err.to_string(), "query failed: model unavailable");
}

#[tokio::test]
async fn incomplete_query_issues_no_request() {
    let api = client(MockTransport::new(), logged_in());
    let incomplete = QueryDraft { model_id: None, ..draft() };
    assert!(matches!(query(&api, &incomplete, pending::<()>()).await, Err(CliError::Invalid(_))));
    assert_eq!(api.transport().request_count(), 0);
}
