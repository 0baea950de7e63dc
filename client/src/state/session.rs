//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors what the `SessionStore` holds so route guards and the sidebar can
//! react to login and logout. The store stays the source of truth; this
//! signal is refreshed from it after every auth action.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use api::model::User;
use api::session::SessionStore;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    token: Option<String>,
    user: Option<User>,
    /// `true` until the store has been read once in the browser.
    pub loading: bool,
}

impl SessionState {
    /// Initial state before hydration has read storage.
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn from_store(store: &dyn SessionStore) -> Self {
        Self {
            token: store.token().filter(|t| !t.is_empty()),
            user: store.user(),
            loading: false,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Storage has been read and holds no token.
    pub fn needs_login(&self) -> bool {
        !self.loading && !self.is_authenticated()
    }

    pub fn display_name(&self) -> String {
        self.user.as_ref().map_or_else(|| "Guest".to_owned(), |u| u.display_name().to_owned())
    }

    /// Up to two uppercase initials for the avatar badge.
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}
