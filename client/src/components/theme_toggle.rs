//! Light/dark toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="btn theme-toggle"
            title="Toggle dark mode"
            on:click=move |_| {
                let next = crate::util::theme::toggle(ui.get().theme);
                ui.update(|u| u.theme = next);
            }
        >
            {move || if ui.get().theme.is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
