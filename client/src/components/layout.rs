//! Authenticated page frame: sidebar, top bar, and content area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders inside `AppLayout`, which owns the
//! unauthenticated redirect. Pages therefore assume a session exists.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::notices::Notices;
use crate::components::sidebar::Sidebar;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::auth::{install_unauth_redirect, logout};

#[component]
pub fn AppLayout(#[prop(into)] title: String, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_unauth_redirect(session, use_navigate());

    let children = StoredValue::new(children);

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="app-loading">
                        <p>{move || if session.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="app-shell">
                <Sidebar/>
                <div class="app-shell__main">
                    <header class="topbar">
                        <button
                            class="btn topbar__menu"
                            title="Menu"
                            on:click=move |_| ui.update(UiState::toggle_sidebar)
                        >
                            "☰"
                        </button>
                        <h1 class="topbar__title">{title.clone()}</h1>
                        <span class="topbar__spacer"></span>
                        <ThemeToggle/>
                        <span class="topbar__avatar" title=move || session.get().display_name()>
                            {move || session.get().initials()}
                        </span>
                        <span class="topbar__user">{move || session.get().display_name()}</span>
                        <button class="btn topbar__logout" on:click=move |_| logout(session) title="Logout">
                            "Logout"
                        </button>
                    </header>
                    <main class="app-shell__content">{children.with_value(|children| children())}</main>
                </div>
            </div>
        </Show>
        <Notices/>
    }
}
