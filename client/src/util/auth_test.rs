use api::model::User;
use api::session::{MemoryStore, Session};

use super::*;

#[test]
fn should_redirect_unauth_when_loaded_without_token() {
    let state = SessionState::from_store(&MemoryStore::new());
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&SessionState::pending()));
}

#[test]
fn should_not_redirect_when_token_exists() {
    let store = MemoryStore::with_session(Session {
        token: "t0k".to_owned(),
        user: Some(User {
            id: "u1".to_owned(),
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            name: None,
        }),
    });
    assert!(!should_redirect_unauth(&SessionState::from_store(&store)));
}
