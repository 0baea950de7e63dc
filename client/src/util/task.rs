//! Browser task spawning.

use std::future::Future;

use leptos::prelude::*;

use crate::state::notice::NoticeState;

/// Run `fut` on the browser event loop. Server renders never issue API
/// calls, so under SSR the future is dropped unpolled.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}

/// Log a failed call and surface it as an error notice.
pub fn report(notices: RwSignal<NoticeState>, context: &str, err: &api::ApiError, fallback: &str) {
    notices.update(|n| {
        n.error(context, err, fallback);
    });
}

pub fn notify_success(notices: RwSignal<NoticeState>, message: &str) {
    notices.update(|n| {
        n.success(message);
    });
}

/// Full page navigation, used after login and logout so every signal
/// starts fresh.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Navigate whenever `target` is set, then clear it. Async tasks write the
/// signal instead of holding a navigate handle.
pub fn install_navigation(target: RwSignal<Option<String>>) {
    let navigate = leptos_router::hooks::use_navigate();
    Effect::new(move || {
        if let Some(path) = target.get() {
            target.set(None);
            navigate(&path, leptos_router::NavigateOptions::default());
        }
    });
}
