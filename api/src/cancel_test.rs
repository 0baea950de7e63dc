use futures::executor::block_on;

use super::*;

#[test]
fn uncancelled_future_completes() {
    let (_handle, signal) = cancel_pair();
    let out = block_on(signal.run(async { Ok::<_, ApiError>(7) }));
    assert_eq!(out, Ok(7));
}

#[test]
fn cancel_before_poll_yields_cancelled() {
    let (handle, signal) = cancel_pair();
    handle.cancel();
    assert!(handle.is_cancelled());
    let out = block_on(signal.run(async { Ok::<_, ApiError>(7) }));
    assert_eq!(out, Err(ApiError::Cancelled));
}

#[test]
fn inner_error_passes_through() {
    let (_handle, signal) = cancel_pair();
    let out: Result<(), ApiError> = block_on(signal.run(async { Err(ApiError::Timeout) }));
    assert_eq!(out, Err(ApiError::Timeout));
}

#[test]
fn cancel_while_pending_aborts() {
    let (handle, signal) = cancel_pair();
    let pending = signal.run(futures::future::pending::<Result<(), ApiError>>());
    handle.cancel();
    assert_eq!(block_on(pending), Err(ApiError::Cancelled));
}
