//! Create and edit form for a data source.
//!
//! Mounted at `/data-sources/new` (optionally `?collectionId=..` to
//! pre-select the owning collection) and `/data-sources/:id/edit`.
//! Stored credentials are never shown; leaving the field blank on edit keeps
//! them.

#[cfg(test)]
#[path = "data_source_form_test.rs"]
mod data_source_form_test;

use api::dto::DataSourceInput;
use api::model::{Collection, DataSourceType};
use api::services::data_sources::{ConnectionTest, test_connection};
use api::validation::{DataSourceForm, FieldErrors};
use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::components::field_error::FieldError;
use crate::components::layout::AppLayout;
use crate::state::notice::NoticeState;
use crate::util::task::{install_navigation, notify_success, report, spawn};

const LIST_PATH: &str = "/data-sources";
const COLLECTION_REQUIRED: &str = "Collection is required";

/// Where to land after a successful save.
pub fn redirect_after_save(collection_id: Option<&str>) -> String {
    match collection_id.filter(|id| !id.is_empty()) {
        Some(id) => format!("/collections/{id}"),
        None => LIST_PATH.to_owned(),
    }
}

/// Validate the form; new data sources must belong to a collection.
///
/// # Errors
///
/// Field errors keyed as in `DataSourceForm`, plus `collectionId` on create.
pub fn validate_form(form: &DataSourceForm, is_edit: bool) -> Result<DataSourceInput, FieldErrors> {
    let missing_collection = !is_edit && form.collection_id.as_deref().is_none_or(str::is_empty);
    match (form.validate(), missing_collection) {
        (Ok(input), false) => Ok(input),
        (Ok(_), true) => {
            let mut errors = FieldErrors::new();
            errors.insert("collectionId", COLLECTION_REQUIRED);
            Err(errors)
        }
        (Err(mut errors), missing) => {
            if missing {
                errors.insert("collectionId", COLLECTION_REQUIRED);
            }
            Err(errors)
        }
    }
}

#[component]
pub fn DataSourceFormPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let params = use_params_map();
    let query = use_query_map();
    let goto = RwSignal::new(None::<String>);
    install_navigation(goto);

    let edit_id = params.with_untracked(|p| p.get("id"));
    let is_edit = edit_id.is_some();
    let preselected = query.with_untracked(|q| q.get("collectionId")).filter(|id| !id.is_empty());
    let cancel_href = if is_edit { LIST_PATH.to_owned() } else { redirect_after_save(preselected.as_deref()) };

    let name = RwSignal::new(String::new());
    let kind = RwSignal::new(String::new());
    let collection_id = RwSignal::new(preselected.clone().unwrap_or_default());
    let connection_uri = RwSignal::new(String::new());
    let credentials = RwSignal::new(String::new());
    let show_credentials = RwSignal::new(false);
    let connection = RwSignal::new(None::<ConnectionTest>);
    let collections = RwSignal::new(Vec::<Collection>::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    spawn(async move {
        match crate::net::client::api_client().collections().all().await {
            Ok(all) => collections.set(all),
            Err(err) => report(notices, "load collections", &err, "Failed to load collections"),
        }
    });

    if let Some(id) = edit_id.clone() {
        busy.set(true);
        spawn(async move {
            match crate::net::client::api_client().data_sources().get(&id).await {
                Ok(Some(existing)) => {
                    name.set(existing.name);
                    kind.set(existing.kind.as_str().to_owned());
                    collection_id.set(existing.collection_id);
                    connection_uri.set(existing.connection_uri.unwrap_or_default());
                    busy.set(false);
                }
                Ok(None) => {
                    log::warn!("data source {id} not found");
                    goto.set(Some(LIST_PATH.to_owned()));
                }
                Err(err) => {
                    report(notices, "load data source", &err, "Failed to load data source");
                    goto.set(Some(LIST_PATH.to_owned()));
                }
            }
        });
    }

    let on_test = move |_: leptos::ev::MouseEvent| {
        let result = test_connection(connection_uri.get_untracked().trim());
        connection.set(Some(result));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = DataSourceForm {
            name: name.get(),
            kind: kind.get(),
            collection_id: Some(collection_id.get()),
            connection_uri: connection_uri.get(),
            credentials: credentials.get(),
        };
        let input = match validate_form(&form, is_edit) {
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
            let service = api.data_sources();
            let saved = match &edit_id {
                Some(id) => service.update(id, &input).await,
                None => service.create(&input).await,
            };
            match saved {
                Ok(source) => {
                    notify_success(notices, &format!("Saved \"{}\"", source.name));
                    goto.set(Some(redirect_after_save(input.collection_id.as_deref())));
                }
                Err(err) => {
                    report(notices, "save data source", &err, "Failed to save data source");
                    busy.set(false);
                }
            }
        });
    };

    let title = if is_edit { "Edit Data Source" } else { "Create New Data Source" };

    view! {
        <AppLayout title=title>
            <form class="form-card" on:submit=on_submit novalidate=true>
                <p class="form-card__subtitle">"Connect a database so its schema can be queried."</p>
                <label class="field">
                    <span class="field__label">"Data Source Name"</span>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="e.g., Production Orders DB"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            name.set(event_target_value(&ev));
                            errors.update(|e| e.clear("name"));
                        }
                    />
                    <FieldError errors=errors field="name"/>
                </label>
                <label class="field">
                    <span class="field__label">"Type"</span>
                    <select
                        class="field__input"
                        prop:value=move || kind.get()
                        on:change=move |ev| {
                            kind.set(event_target_value(&ev));
                            errors.update(|e| e.clear("type"));
                        }
                    >
                        <option value="">"Select a type"</option>
                        {DataSourceType::ALL
                            .into_iter()
                            .map(|k| view! { <option value=k.as_str()>{k.as_str()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <FieldError errors=errors field="type"/>
                </label>
                <label class="field">
                    <span class="field__label">"Collection"</span>
                    <select
                        class="field__input"
                        disabled=is_edit
                        prop:value=move || collection_id.get()
                        on:change=move |ev| {
                            collection_id.set(event_target_value(&ev));
                            errors.update(|e| e.clear("collectionId"));
                        }
                    >
                        <option value="">"Select a collection"</option>
                        {move || {
                            collections
                                .get()
                                .into_iter()
                                .map(|c| view! { <option value=c.id.clone()>{c.name}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                    <FieldError errors=errors field="collectionId"/>
                </label>
                <label class="field">
                    <span class="field__label">"Connection URI"</span>
                    <input
                        class="field__input"
                        type="text"
                        placeholder="postgresql://host:5432/database"
                        prop:value=move || connection_uri.get()
                        on:input=move |ev| {
                            connection_uri.set(event_target_value(&ev));
                            connection.set(None);
                            errors.update(|e| e.clear("connectionUri"));
                        }
                    />
                    <FieldError errors=errors field="connectionUri"/>
                </label>
                <label class="field">
                    <span class="field__label">"Credentials"</span>
                    <div class="field__row">
                        <input
                            class="field__input"
                            type=move || if show_credentials.get() { "text" } else { "password" }
                            placeholder={if is_edit { "Leave blank to keep current credentials" } else { "Password or access token" }}
                            prop:value=move || credentials.get()
                            on:input=move |ev| credentials.set(event_target_value(&ev))
                        />
                        <button class="btn" type="button" on:click=move |_| show_credentials.update(|s| *s = !*s)>
                            {move || if show_credentials.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                </label>
                <div class="field__row">
                    <button class="btn" type="button" on:click=on_test>
                        "Test Connection"
                    </button>
                    {move || {
                        connection
                            .get()
                            .map(|result| {
                                let class = if result.success { "alert alert--success" } else { "alert alert--error" };
                                view! { <span class=class>{result.message}</span> }
                            })
                    }}
                </div>
                <div class="form-card__actions">
                    <a class="btn" href=cancel_href>
                        "Cancel"
                    </a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else if is_edit { "Save Changes" } else { "Create Data Source" }}
                    </button>
                </div>
            </form>
        </AppLayout>
    }
}
