use super::*;

fn alice() -> User {
    User {
        id: "u1".to_owned(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        name: None,
    }
}

#[test]
fn empty_store_is_not_authenticated() {
    let store = MemoryStore::new();
    assert!(!store.is_authenticated());
    assert!(store.load().is_none());
}

#[test]
fn saved_session_is_authenticated() {
    let store = MemoryStore::new();
    store.save(&Session { token: "tok".to_owned(), user: Some(alice()) }).unwrap();
    assert!(store.is_authenticated());
    assert_eq!(store.token().as_deref(), Some("tok"));
    assert_eq!(store.user(), Some(alice()));
}

#[test]
fn empty_token_is_not_authenticated() {
    let store = MemoryStore::with_session(Session { token: String::new(), user: None });
    assert!(!store.is_authenticated());
}

#[test]
fn clear_removes_everything() {
    let store = MemoryStore::with_session(Session { token: "tok".to_owned(), user: Some(alice()) });
    store.clear();
    assert!(store.token().is_none());
    assert!(store.user().is_none());
}
