//! Authenticated session and its persistence seam.
//!
//! DESIGN
//! ======
//! The bearer token and user record are only reachable through a
//! [`SessionStore`]. The browser keeps them in `localStorage`, the CLI in a
//! JSON file, tests in memory; nothing else reads storage keys directly.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::model::User;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-encoded user record.
pub const USER_KEY: &str = "user";

/// A logged-in session: the bearer token plus the user it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: Option<User>,
}

/// Persistence for the current session.
///
/// Methods take `&self`; implementations use interior mutability since
/// the backing storage (browser `localStorage`, a file) is shared anyway.
pub trait SessionStore {
    /// Current bearer token, if any.
    fn token(&self) -> Option<String>;

    /// Current user record, if any.
    fn user(&self) -> Option<User>;

    /// Persist a fresh session, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] when the backing storage rejects the write.
    fn save(&self, session: &Session) -> Result<(), ApiError>;

    /// Remove token and user. Never fails; missing entries are ignored.
    fn clear(&self);

    /// Token and user together, when a token is present.
    fn load(&self) -> Option<Session> {
        self.token().map(|token| Session { token, user: self.user() })
    }

    fn is_authenticated(&self) -> bool {
        self.token().is_some_and(|token| !token.is_empty())
    }
}

/// In-process store used by tests and short-lived tools.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RefCell<Option<Session>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self { inner: RefCell::new(Some(session)) }
    }
}

impl SessionStore for MemoryStore {
    fn token(&self) -> Option<String> {
        self.inner.borrow().as_ref().map(|s| s.token.clone())
    }

    fn user(&self) -> Option<User> {
        self.inner.borrow().as_ref().and_then(|s| s.user.clone())
    }

    fn save(&self, session: &Session) -> Result<(), ApiError> {
        *self.inner.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) {
        *self.inner.borrow_mut() = None;
    }
}
