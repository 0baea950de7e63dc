//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior, and
//! login/logout refresh the session signal the same way.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;
use crate::util::task::{hard_redirect, spawn};

pub const LOGIN_PATH: &str = "/login";
/// Landing route after a successful login.
pub const HOME_PATH: &str = "/dashboard";

pub fn should_redirect_unauth(state: &SessionState) -> bool {
    state.needs_login()
}

/// Redirect to `/login` whenever the session has loaded without a token.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Re-read the session store into the session signal.
pub fn refresh_session(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    session.set(SessionState::from_store(&crate::net::session_store::LocalStorageStore));
    #[cfg(not(feature = "hydrate"))]
    let _ = session;
}

/// Best-effort backend logout, then clear local state and go to login.
pub fn logout(session: RwSignal<SessionState>) {
    spawn(async move {
        crate::net::client::api_client().auth().logout().await;
        refresh_session(session);
        hard_redirect(LOGIN_PATH);
    });
}
