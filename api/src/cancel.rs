//! Cancellation tokens for in-flight API calls.
//!
//! A [`CancelHandle`] is kept by whoever may abandon the call (a page that
//! starts a newer submission, a CLI Ctrl-C handler); the matching
//! [`CancelSignal`] wraps the future. Cancelling drops the wrapped future at
//! its next poll, which in the browser also drops the pending fetch.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::future::Future;

use futures::future::{AbortHandle, AbortRegistration, Abortable};

use crate::error::ApiError;

/// Owner side of a cancellation pair. Cheap to clone.
#[derive(Clone, Debug)]
pub struct CancelHandle {
    inner: AbortHandle,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.inner.abort();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.is_aborted()
    }
}

/// Future side of a cancellation pair. Consumed by [`CancelSignal::run`].
#[derive(Debug)]
pub struct CancelSignal {
    registration: AbortRegistration,
}

impl CancelSignal {
    /// Drive `fut` to completion unless the paired handle cancels first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Cancelled`] when cancelled, otherwise whatever
    /// `fut` returns.
    pub async fn run<T, F>(self, fut: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        Abortable::new(fut, self.registration).await.unwrap_or(Err(ApiError::Cancelled))
    }
}

/// Create a linked handle/signal pair.
#[must_use]
pub fn cancel_pair() -> (CancelHandle, CancelSignal) {
    let (inner, registration) = AbortHandle::new_pair();
    (CancelHandle { inner }, CancelSignal { registration })
}
