//! Collection detail page with tabbed sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/collections/:id`. Loads the collection and its associated
//! data sources independently; a missing collection sends the user back to
//! the list.

#[cfg(test)]
#[path = "collection_details_test.rs"]
mod collection_details_test;

use api::client::with_query;
use api::model::{Collection, DataSource};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;
use serde_json::Value;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::layout::AppLayout;
use crate::components::status_badge::{CollectionStatusBadge, DataSourceStatusBadge};
use crate::state::notice::NoticeState;
use crate::util::task::{install_navigation, notify_success, report, spawn};

const LIST_PATH: &str = "/collections";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailTab {
    General,
    #[default]
    DataSources,
    Relationships,
    ModelPreferences,
}

impl DetailTab {
    pub const ALL: [Self; 4] = [Self::General, Self::DataSources, Self::Relationships, Self::ModelPreferences];

    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General Info",
            Self::DataSources => "Data Sources",
            Self::Relationships => "Relationships",
            Self::ModelPreferences => "Model Preferences",
        }
    }
}

/// Route for adding a data source pre-bound to `collection_id`.
pub fn add_data_source_href(collection_id: &str) -> String {
    with_query("/data-sources/new", &[("collectionId", Some(collection_id.to_owned()))])
}

/// Pretty-printed relationship summary, or a hint when none was returned.
pub fn relationships_text(summary: Option<&Value>) -> String {
    match summary {
        Some(value) => serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
        None => "Relationship discovery started. Results will appear once the backend finishes.".to_owned(),
    }
}

#[component]
pub fn CollectionDetailsPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let params = use_params_map();
    let goto = RwSignal::new(None::<String>);
    install_navigation(goto);
    let id = params.with_untracked(|p| p.get("id")).unwrap_or_default();

    let collection = RwSignal::new(None::<Collection>);
    let sources = RwSignal::new(Vec::<DataSource>::new());
    let sources_loading = RwSignal::new(true);
    let tab = RwSignal::new(DetailTab::default());
    let relationships = RwSignal::new(None::<String>);
    let discovering = RwSignal::new(false);
    let confirm_delete = RwSignal::new(false);
    let pending_remove = RwSignal::new(None::<DataSource>);
    let busy = RwSignal::new(false);

    {
        let id = id.clone();
        spawn(async move {
            let api = crate::net::client::api_client();
            match api.collections().get(&id).await {
                Ok(Some(found)) => {
                    load_sources(found.clone(), sources, sources_loading, notices);
                    collection.set(Some(found));
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

    let on_discover = {
        let id = id.clone();
        move |_| {
            if discovering.get() {
                return;
            }
            discovering.set(true);
            let id = id.clone();
            spawn(async move {
                match crate::net::client::api_client().collections().discover_relationships(&id).await {
                    Ok(summary) => {
                        relationships.set(Some(relationships_text(summary.as_ref())));
                        tab.set(DetailTab::Relationships);
                    }
                    Err(err) => report(notices, "discover relationships", &err, "Failed to discover relationships"),
                }
                discovering.set(false);
            });
        }
    };

    let on_delete_confirm = Callback::new({
        let id = id.clone();
        move |()| {
            busy.set(true);
            let id = id.clone();
            spawn(async move {
                match crate::net::client::api_client().collections().delete(&id).await {
                    Ok(()) => {
                        notify_success(notices, "Collection deleted");
                        goto.set(Some(LIST_PATH.to_owned()));
                    }
                    Err(err) => report(notices, "delete collection", &err, "Failed to delete collection"),
                }
                busy.set(false);
                confirm_delete.set(false);
            });
        }
    });

    let on_remove_confirm = Callback::new({
        let id = id.clone();
        move |()| {
            let Some(source) = pending_remove.get_untracked() else {
                return;
            };
            busy.set(true);
            let id = id.clone();
            spawn(async move {
                let api = crate::net::client::api_client();
                match api.collections().remove_data_source(&id, &source.id).await {
                    Ok(()) => {
                        notify_success(notices, &format!("Removed \"{}\"", source.name));
                        sources.update(|list| list.retain(|s| s.id != source.id));
                    }
                    Err(err) => report(notices, "remove data source", &err, "Failed to remove data source"),
                }
                busy.set(false);
                pending_remove.set(None);
            });
        }
    });

    let edit_href = format!("/collections/{id}/edit");
    let add_href = add_data_source_href(&id);
    let title = move || collection.get().map_or_else(|| "Collection".to_owned(), |c| c.name);

    view! {
        <AppLayout title="Data Collection">
            <Show when=move || collection.get().is_some() fallback=|| view! { <p>"Loading collection..."</p> }>
                <nav class="breadcrumb">
                    <a href="/dashboard">"Home"</a>
                    " / "
                    <a href=LIST_PATH>"Data Collections"</a>
                    " / "
                    <span>{title}</span>
                </nav>
                <header class="detail__header">
                    <div>
                        <h2>{title}</h2>
                        <p class="detail__subtitle">
                            {move || {
                                collection
                                    .get()
                                    .and_then(|c| c.description)
                                    .unwrap_or_else(|| "View and manage the details of this data collection.".to_owned())
                            }}
                        </p>
                    </div>
                    <div class="detail__actions">
                        <a class="btn" href=edit_href.clone()>
                            "Edit Collection"
                        </a>
                        <button class="btn btn--danger" on:click=move |_| confirm_delete.set(true)>
                            "Delete Collection"
                        </button>
                        <button class="btn btn--primary" on:click=on_discover.clone() disabled=move || discovering.get()>
                            {move || if discovering.get() { "Discovering..." } else { "Discover Relationships" }}
                        </button>
                    </div>
                </header>
                <div class="tabs" role="tablist">
                    {DetailTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    role="tab"
                                    class:tabs__tab--active=move || tab.get() == t
                                    on:click=move |_| tab.set(t)
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="tabs__panel">
                    {
                        let add_href = add_href.clone();
                        move || match tab.get() {
                            DetailTab::General => {
                                collection.get().map(|c| view! { <GeneralTab collection=c/> }.into_any()).unwrap_or_else(|| ().into_any())
                            }
                            DetailTab::DataSources => {
                                view! {
                                    <DataSourcesTab
                                        sources=sources
                                        loading=sources_loading
                                        add_href=add_href.clone()
                                        on_remove=Callback::new(move |s: DataSource| pending_remove.set(Some(s)))
                                    />
                                }
                                    .into_any()
                            }
                            DetailTab::Relationships => {
                                view! {
                                    <pre class="detail__relationships">
                                        {move || {
                                            relationships
                                                .get()
                                                .unwrap_or_else(|| "Run \"Discover Relationships\" to infer links between data sources.".to_owned())
                                        }}
                                    </pre>
                                }
                                    .into_any()
                            }
                            DetailTab::ModelPreferences => {
                                view! {
                                    <p class="detail__placeholder">
                                        "Model preferences for this collection are configured on the Query page."
                                    </p>
                                }
                                    .into_any()
                            }
                        }
                    }
                </div>
            </Show>
            <Show when=move || confirm_delete.get()>
                <ConfirmDialog
                    title="Delete Collection"
                    message={
                        collection
                            .get_untracked()
                            .map_or_else(
                                || "Are you sure you want to delete this collection?".to_owned(),
                                |c| format!("Are you sure you want to delete \"{}\"? This action cannot be undone.", c.name),
                            )
                    }
                    on_confirm=on_delete_confirm
                    on_cancel=Callback::new(move |()| confirm_delete.set(false))
                    busy=busy
                />
            </Show>
            <Show when=move || pending_remove.get().is_some()>
                <ConfirmDialog
                    title="Remove Data Source"
                    message="Remove this data source from the collection?"
                    confirm_label="Remove"
                    on_confirm=on_remove_confirm
                    on_cancel=Callback::new(move |()| pending_remove.set(None))
                    busy=busy
                />
            </Show>
        </AppLayout>
    }
}

fn load_sources(
    collection: Collection,
    sources: RwSignal<Vec<DataSource>>,
    loading: RwSignal<bool>,
    notices: RwSignal<NoticeState>,
) {
    spawn(async move {
        match crate::net::client::api_client().collections().data_sources(&collection).await {
            Ok(list) => sources.set(list),
            Err(err) => report(notices, "load collection data sources", &err, "Failed to load data sources"),
        }
        loading.set(false);
    });
}

#[component]
fn GeneralTab(collection: Collection) -> impl IntoView {
    let created = collection.created_at.map_or_else(|| "-".to_owned(), |t| t.date().to_string());
    view! {
        <dl class="detail__general">
            <dt>"Name"</dt>
            <dd>{collection.name.clone()}</dd>
            <dt>"Status"</dt>
            <dd>
                <CollectionStatusBadge status=collection.status/>
            </dd>
            <dt>"Owner"</dt>
            <dd>{collection.owner.clone()}</dd>
            <dt>"Created"</dt>
            <dd>{created}</dd>
            <dt>"Last scan"</dt>
            <dd>{collection.last_scan.clone()}</dd>
            <dt>"Description"</dt>
            <dd>{collection.description.clone().unwrap_or_else(|| "No description provided.".to_owned())}</dd>
        </dl>
    }
}

#[component]
fn DataSourcesTab(
    sources: RwSignal<Vec<DataSource>>,
    loading: RwSignal<bool>,
    add_href: String,
    on_remove: Callback<DataSource>,
) -> impl IntoView {
    view! {
        <div class="detail__sources">
            <div class="detail__sources-header">
                <p>"Manage the data sources linked to this collection."</p>
                <a class="btn btn--primary" href=add_href>
                    "Add Data Source"
                </a>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading data sources..."</p> }>
                <Show
                    when=move || !sources.with(Vec::is_empty)
                    fallback=|| view! { <p class="list-page__empty">"No data sources linked yet."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Type"</th>
                                <th>"Status"</th>
                                <th>"Last scan"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                sources
                                    .get()
                                    .into_iter()
                                    .map(|source| {
                                        let manage_href = format!("/data-sources/{}/edit", source.id);
                                        let target = source.clone();
                                        view! {
                                            <tr>
                                                <td>{source.name.clone()}</td>
                                                <td>{source.kind.as_str()}</td>
                                                <td>
                                                    <DataSourceStatusBadge status=source.status/>
                                                </td>
                                                <td>{source.last_scan.clone()}</td>
                                                <td class="table__actions">
                                                    <a class="btn" href=manage_href>
                                                        "Manage"
                                                    </a>
                                                    <button class="btn btn--danger" on:click=move |_| on_remove.run(target.clone())>
                                                        "Remove"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}
