use api::session::{MemoryStore, Session};

use super::*;

fn user(name: Option<&str>) -> User {
    User {
        id: "u1".to_owned(),
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        name: name.map(str::to_owned),
    }
}

// =============================================================
// Loading from the store
// =============================================================

#[test]
fn pending_state_never_asks_for_login() {
    let state = SessionState::pending();
    assert!(state.loading);
    assert!(!state.needs_login());
}

#[test]
fn empty_store_needs_login() {
    let state = SessionState::from_store(&MemoryStore::new());
    assert!(!state.is_authenticated());
    assert!(state.needs_login());
    assert_eq!(state.display_name(), "Guest");
}

#[test]
fn stored_session_is_authenticated() {
    let store = MemoryStore::with_session(Session { token: "t0k".to_owned(), user: Some(user(None)) });
    let state = SessionState::from_store(&store);
    assert_eq!(state.token(), Some("t0k"));
    assert_eq!(state.user().map(|u| u.id.as_str()), Some("u1"));
    assert!(!state.needs_login());
}

#[test]
fn blank_token_is_not_a_session() {
    let store = MemoryStore::with_session(Session { token: String::new(), user: None });
    assert!(!SessionState::from_store(&store).is_authenticated());
}

// =============================================================
// Display helpers
// =============================================================

#[test]
fn initials_take_first_two_words() {
    let store = MemoryStore::with_session(Session { token: "t".to_owned(), user: Some(user(Some("ada lovelace byron"))) });
    assert_eq!(SessionState::from_store(&store).initials(), "AL");
}

#[test]
fn initials_fall_back_to_username() {
    let store = MemoryStore::with_session(Session { token: "t".to_owned(), user: Some(user(None)) });
    assert_eq!(SessionState::from_store(&store).initials(), "A");
}
