//! `SessionStore` backed by browser `localStorage`.
//!
//! The token lives under `token` as a plain string and the user record under
//! `user` as JSON. Under SSR nothing is stored, so every render is anonymous.

use api::ApiError;
use api::model::User;
use api::session::{Session, SessionStore, TOKEN_KEY, USER_KEY};

use crate::util::storage;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl SessionStore for LocalStorageStore {
    fn token(&self) -> Option<String> {
        storage::read(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    fn user(&self) -> Option<User> {
        storage::load_json(USER_KEY)
    }

    fn save(&self, session: &Session) -> Result<(), ApiError> {
        if !storage::write(TOKEN_KEY, &session.token) {
            return Err(ApiError::Storage("localStorage unavailable".to_owned()));
        }
        match &session.user {
            Some(user) => {
                if !storage::save_json(USER_KEY, user) {
                    return Err(ApiError::Storage("failed to persist user".to_owned()));
                }
            }
            None => storage::remove(USER_KEY),
        }
        Ok(())
    }

    fn clear(&self) {
        storage::remove(TOKEN_KEY);
        storage::remove(USER_KEY);
    }
}
