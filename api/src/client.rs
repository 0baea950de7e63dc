//! Authenticated JSON client for the Delfos REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Services call `get`/`post`/`put`/`delete` with API paths; this module
//! resolves the URL, injects the bearer token from the session store, applies
//! the request deadline, and turns every non-success response into one
//! [`ApiError`] carrying the best available message.
//!
//! ERROR HANDLING
//! ==============
//! A 204 or empty success body is an absence sentinel (`None`), never a
//! decode error. Verbs that require a body map that sentinel to
//! [`ApiError::Decode`].

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use time::OffsetDateTime;

use crate::config::ApiConfig;
use crate::error::{ApiError, decode_error_message};
use crate::session::SessionStore;
use crate::transport::{HttpRequest, Method, Transport};

/// Whether the request should carry the session's bearer token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Auth {
    Bearer,
    Anonymous,
}

/// Source of "now" for relative-time labels.
pub type Clock = fn() -> OffsetDateTime;

pub struct ApiClient<T> {
    transport: T,
    config: ApiConfig,
    session: Rc<dyn SessionStore>,
    clock: Clock,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: ApiConfig, session: Rc<dyn SessionStore>) -> Self {
        Self { transport, config, session, clock: OffsetDateTime::now_utc }
    }

    /// Replace the wall clock, e.g. with a fixed instant under test.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn now(&self) -> OffsetDateTime {
        (self.clock)()
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &Rc<dyn SessionStore> {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET path?params`. Absent param values are skipped.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; an empty success body is [`ApiError::Decode`].
    pub async fn get<R: DeserializeOwned>(&self, path: &str, params: &[(&str, Option<String>)]) -> Result<R, ApiError> {
        let path = with_query(path, params);
        let body = self.execute(Method::Get, &path, None, Auth::Bearer).await?;
        decode_required(body)
    }

    /// `POST path` with a JSON body, decoding the JSON response.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; an empty success body is [`ApiError::Decode`].
    pub async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let body = Some(encode(body)?);
        decode_required(self.execute(Method::Post, path, body, Auth::Bearer).await?)
    }

    /// `POST path` for action endpoints whose response body is not needed.
    ///
    /// # Errors
    ///
    /// Any transport or status [`ApiError`].
    pub async fn post_action(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::Post, path, None, Auth::Bearer).await.map(|_| ())
    }

    /// `POST path` with a body, returning the raw absence sentinel.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn post_optional<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<Option<R>, ApiError> {
        let body = Some(encode(body)?);
        decode_optional(self.execute(Method::Post, path, body, auth).await?)
    }

    /// `PUT path` with a JSON body, decoding the JSON response.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; an empty success body is [`ApiError::Decode`].
    pub async fn put<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let body = Some(encode(body)?);
        decode_required(self.execute(Method::Put, path, body, Auth::Bearer).await?)
    }

    /// `DELETE path`. Any success body is ignored.
    ///
    /// # Errors
    ///
    /// Any transport or status [`ApiError`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::Delete, path, None, Auth::Bearer).await.map(|_| ())
    }

    /// Send one request and return the success body, or `None` for 204 and
    /// empty bodies.
    ///
    /// # Errors
    ///
    /// Transport errors pass through; non-success statuses become
    /// [`ApiError::Status`] with a decoded message.
    pub async fn execute(&self, method: Method, path: &str, body: Option<String>, auth: Auth) -> Result<Option<String>, ApiError> {
        let request = self.build_request(method, path, body, auth);
        log::debug!("{} {}", method.as_str(), request.url);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            let message = decode_error_message(response.status, &response.status_text, &response.body);
            log::debug!("{} {} failed: {} {message}", method.as_str(), path, response.status);
            return Err(ApiError::Status { status: response.status, message });
        }
        if response.status == 204 || response.body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(response.body))
    }

    fn build_request(&self, method: Method, path: &str, body: Option<String>, auth: Auth) -> HttpRequest {
        let mut headers = vec![
            ("Content-Type".to_owned(), "application/json".to_owned()),
            ("Accept".to_owned(), "application/json".to_owned()),
        ];
        if auth == Auth::Bearer {
            if let Some(token) = self.session.token().filter(|t| !t.is_empty()) {
                headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
            }
        }
        HttpRequest {
            method,
            url: self.config.url(path),
            headers,
            body,
            timeout: self.config.timeout,
        }
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode_optional<R: DeserializeOwned>(body: Option<String>) -> Result<Option<R>, ApiError> {
    body.map(|raw| serde_json::from_str(&raw).map_err(|e| ApiError::Decode(e.to_string())))
        .transpose()
}

fn decode_required<R: DeserializeOwned>(body: Option<String>) -> Result<R, ApiError> {
    decode_optional(body)?.ok_or_else(|| ApiError::Decode("empty response body".to_owned()))
}

/// Append URL-encoded query parameters, skipping `None` values.
#[must_use]
pub fn with_query(path: &str, params: &[(&str, Option<String>)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in params {
        if let Some(value) = value {
            serializer.append_pair(key, value);
            any = true;
        }
    }
    if !any {
        return path.to_owned();
    }
    let sep = if path.contains('?') { '&' } else { '?' };
    format!("{path}{sep}{}", serializer.finish())
}
