//! Inline validation message under a form input.

use api::validation::FieldErrors;
use leptos::prelude::*;

#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    view! {
        <Show when=move || errors.with(|e| e.get(field).is_some())>
            <p class="field__error">{move || errors.with(|e| e.get(field).unwrap_or_default())}</p>
        </Show>
    }
}
