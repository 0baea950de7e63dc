//! Login, logout, and current-user lookups.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Deserialize;

use crate::client::{ApiClient, Auth};
use crate::dto::{AuthResponse, LoginRequest, RawUser};
use crate::error::ApiError;
use crate::mapping;
use crate::model::User;
use crate::session::Session;
use crate::transport::Transport;

/// Message raised when a failed login carries no usable server message.
pub const LOGIN_FAILED: &str = "Invalid credentials";

const LOGIN_PATH: &str = "/api/auth/login";
const LOGOUT_PATH: &str = "/api/auth/logout";
const ME_PATH: &str = "/api/auth/me";

/// `/api/auth/me` answers with the user or `{ "user": .. }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum MeResponse {
    Wrapped { user: RawUser },
    Bare(RawUser),
}

pub struct AuthService<'a, T> {
    api: &'a ApiClient<T>,
}

impl<'a, T: Transport> AuthService<'a, T> {
    pub(crate) fn new(api: &'a ApiClient<T>) -> Self {
        Self { api }
    }

    /// Exchange credentials for a token and persist the session.
    ///
    /// The request goes out without a bearer header even if a stale token
    /// is stored.
    ///
    /// # Errors
    ///
    /// A non-success status carries the server's message, or
    /// [`LOGIN_FAILED`] when it sent none. Storage failures surface as
    /// [`ApiError::Storage`].
    pub async fn login(&self, username_or_email: &str, password: &str) -> Result<User, ApiError> {
        let request = LoginRequest::new(username_or_email.trim(), password);
        let response: Option<AuthResponse> = self
            .api
            .post_optional(LOGIN_PATH, &request, Auth::Anonymous)
            .await
            .map_err(login_error)?;
        let response = response.ok_or_else(|| ApiError::Decode("empty login response".to_owned()))?;
        let user = mapping::user(response.user);
        self.api.session().save(&Session { token: response.token, user: Some(user.clone()) })?;
        log::info!("logged in as {}", user.display_name());
        Ok(user)
    }

    /// Best-effort server logout, then always clear the local session.
    pub async fn logout(&self) {
        if let Err(err) = self.api.post_action(LOGOUT_PATH).await {
            log::warn!("logout request failed: {err}");
        }
        self.api.session().clear();
    }

    /// Fetch the user the current token belongs to.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; an expired token is a 401 `Status`.
    pub async fn me(&self) -> Result<User, ApiError> {
        let response: MeResponse = self.api.get(ME_PATH, &[]).await?;
        let raw = match response {
            MeResponse::Wrapped { user } | MeResponse::Bare(user) => user,
        };
        Ok(mapping::user(raw))
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.api.session().is_authenticated()
    }

    /// The user persisted at login, without a network call.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.api.session().user()
    }
}

/// Replace a synthesized status message with [`LOGIN_FAILED`].
fn login_error(err: ApiError) -> ApiError {
    match err {
        ApiError::Status { status, message } if message.starts_with(&format!("Error {status}:")) => {
            ApiError::Status { status, message: LOGIN_FAILED.to_owned() }
        }
        other => other,
    }
}
