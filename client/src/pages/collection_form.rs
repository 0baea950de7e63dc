//! Create and edit form for a data collection.
//!
//! Mounted at `/collections/new` and `/collections/:id/edit`; the presence
//! of the `id` route param selects edit mode.

use api::validation::{CollectionForm, FieldErrors};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::field_error::FieldError;
use crate::components::layout::AppLayout;
use crate::state::notice::NoticeState;
use crate::util::task::{install_navigation, notify_success, report, spawn};

const LIST_PATH: &str = "/collections";

#[component]
pub fn CollectionFormPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let params = use_params_map();
    let goto = RwSignal::new(None::<String>);
    install_navigation(goto);
    let edit_id = params.with_untracked(|p| p.get("id"));
    let is_edit = edit_id.is_some();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    if let Some(id) = edit_id.clone() {
        busy.set(true);
        spawn(async move {
            match crate::net::client::api_client().collections().get(&id).await {
                Ok(Some(existing)) => {
                    name.set(existing.name);
                    description.set(existing.description.unwrap_or_default());
                    busy.set(false);
                }
                Ok(None) => {
                    log::warn!("collection {id} not found");
                    goto.set(Some(LIST_PATH.to_owned()));
                }
                Err(err) => {
                    report(notices, "load collection", &err, "Failed to load collection");
                    goto.set(Some(LIST_PATH.to_owned()));
                }
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = CollectionForm { name: name.get(), description: description.get() };
        let input = match form.validate() {
            Ok(input) => input,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);
        let edit_id = edit_id.clone();
        spawn(async move {
            let api = crate::net::client::api_client();
            let service = api.collections();
            let saved = match &edit_id {
                Some(id) => service.update(id, &input).await,
                None => service.create(&input).await,
            };
            match saved {
                Ok(collection) => {
                    notify_success(notices, &format!("Saved \"{}\"", collection.name));
                    goto.set(Some(LIST_PATH.to_owned()));
                }
                Err(err) => {
                    report(notices, "save collection", &err, "Failed to save collection");
                    busy.set(false);
                }
            }
        });
    };

    let title = if is_edit { "Edit Collection" } else { "Create New Collection" };

    view! {
        <AppLayout title=title>
            <form class="form-card" on:submit=on_submit.clone() novalidate=true>
                <p class="form-card__subtitle">"Define the name and purpose of this data collection."</p>
                <label class="field">
                    <span class="field__label">"Collection Name"</span>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="e.g., Q3 Sales Data"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            name.set(event_target_value(&ev));
                            errors.update(|e| e.clear("name"));
                        }
                    />
                    <FieldError errors=errors field="name"/>
                </label>
                <label class="field">
                    <span class="field__label">"Description"</span>
                    <textarea
                        class="field__input"
                        rows="4"
                        placeholder="Describe what this collection contains"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="form-card__actions">
                    <a class="btn" href=LIST_PATH>
                        "Cancel"
                    </a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else if is_edit { "Save Changes" } else { "Create Collection" }}
                    </button>
                </div>
            </form>
        </AppLayout>
    }
}
