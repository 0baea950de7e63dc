//! Error value raised by every API call.
//!
//! DESIGN
//! ======
//! Transport failures and non-success responses collapse into one enum whose
//! `Display` is the human-readable message. Callers match on the variant only
//! when they need a category (not-found redirects, cancellation).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Fallback status text when the server sends none.
pub const UNKNOWN_STATUS_TEXT: &str = "Unknown error";

/// Errors produced by the HTTP client and the services built on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection reset, CORS).
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A success body could not be decoded into the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The request deadline elapsed before a response arrived.
    #[error("request timed out")]
    Timeout,

    /// The caller cancelled the request.
    #[error("request cancelled")]
    Cancelled,

    /// The session store could not be read or written.
    #[error("session storage failed: {0}")]
    Storage(String),
}

impl ApiError {
    /// HTTP status code, when the error came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Message to surface to the user, with `fallback` for blank messages.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() { fallback.to_owned() } else { message }
    }
}

#[derive(Deserialize)]
struct NestedErrorBody {
    error: NestedError,
}

#[derive(Deserialize)]
struct NestedError {
    message: Option<String>,
}

#[derive(Deserialize)]
struct FlatErrorBody {
    message: Option<String>,
}

/// Pick the best message for a non-success response.
///
/// Precedence: `{error: {message}}`, then `{message}`, then a bare JSON
/// string body, then `"Error <status>: <statusText>"`.
#[must_use]
pub fn decode_error_message(status: u16, status_text: &str, body: &str) -> String {
    if let Ok(NestedErrorBody { error: NestedError { message: Some(message) } }) = serde_json::from_str(body) {
        if !message.is_empty() {
            return message;
        }
    }
    if let Ok(FlatErrorBody { message: Some(message) }) = serde_json::from_str(body) {
        if !message.is_empty() {
            return message;
        }
    }
    if let Ok(message) = serde_json::from_str::<String>(body) {
        if !message.is_empty() {
            return message;
        }
    }
    let status_text = if status_text.trim().is_empty() { UNKNOWN_STATUS_TEXT } else { status_text };
    format!("Error {status}: {status_text}")
}
