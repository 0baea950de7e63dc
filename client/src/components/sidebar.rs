//! Primary navigation sidebar.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;

/// `(label, route)` in display order.
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("Dashboard", "/dashboard"),
    ("Data Collections", "/collections"),
    ("Data Sources", "/data-sources"),
    ("Models", "/models"),
    ("Query", "/query"),
];

/// A nav entry is active on its own route and on any nested route.
pub fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href || current_path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    view! {
        <aside class="sidebar" class:sidebar--open=move || ui.get().sidebar_open>
            <a class="sidebar__brand" href="/dashboard">
                "Delfos"
            </a>
            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(label, href)| {
                        view! {
                            <a
                                class="sidebar__link"
                                class:sidebar__link--active=move || is_active(&location.pathname.get(), href)
                                href=href
                                on:click=move |_| ui.update(UiState::close_sidebar)
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </aside>
    }
}
