//! Data collections list: card grid with search, status, and owner filters.

#[cfg(test)]
#[path = "collections_test.rs"]
mod collections_test;

use api::filter::{ALL, CollectionFilter, choice, distinct_owners};
use api::model::{Collection, CollectionStatus};
use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::layout::AppLayout;
use crate::components::status_badge::CollectionStatusBadge;
use crate::state::notice::NoticeState;
use crate::util::task::{notify_success, report, spawn};

/// Build the filter from raw input and select values.
pub fn collection_filter(search: String, status: &str, owner: &str) -> CollectionFilter {
    CollectionFilter {
        search,
        status: choice(status).and_then(|s| CollectionStatus::parse(&s)),
        owner: choice(owner),
    }
}

fn load(items: RwSignal<Vec<Collection>>, loading: RwSignal<bool>, notices: RwSignal<NoticeState>) {
    loading.set(true);
    spawn(async move {
        match crate::net::client::api_client().collections().all().await {
            Ok(all) => items.set(all),
            Err(err) => report(notices, "load collections", &err, "Failed to load collections"),
        }
        loading.set(false);
    });
}

#[component]
pub fn CollectionsPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let items = RwSignal::new(Vec::<Collection>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(ALL.to_owned());
    let owner = RwSignal::new(ALL.to_owned());
    let pending_delete = RwSignal::new(None::<Collection>);
    let deleting = RwSignal::new(false);

    load(items, loading, notices);

    let visible = Memo::new(move |_| {
        let filter = collection_filter(search.get(), &status.get(), &owner.get());
        items.with(|all| filter.apply(all))
    });
    let owners = Memo::new(move |_| items.with(|all| distinct_owners(all)));

    let on_delete_confirm = Callback::new(move |()| {
        let Some(target) = pending_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        spawn(async move {
            match crate::net::client::api_client().collections().delete(&target.id).await {
                Ok(()) => {
                    notify_success(notices, &format!("Deleted \"{}\"", target.name));
                    load(items, loading, notices);
                }
                Err(err) => report(notices, "delete collection", &err, "Failed to delete collection"),
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    });
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_request = Callback::new(move |c: Collection| pending_delete.set(Some(c)));

    view! {
        <AppLayout title="Data Collections">
            <section class="list-page">
                <header class="list-page__header">
                    <p class="list-page__subtitle">"Manage, monitor, and query your data collections."</p>
                    <a class="btn btn--primary" href="/collections/new">
                        "+ Create Collection"
                    </a>
                </header>
                <div class="filters">
                    <input
                        class="filters__search"
                        type="search"
                        placeholder="Search collections by name..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <select class="filters__select" on:change=move |ev| status.set(event_target_value(&ev))>
                        <option value=ALL>"Status: All"</option>
                        {CollectionStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <select class="filters__select" on:change=move |ev| owner.set(event_target_value(&ev))>
                        <option value=ALL>"Owner: All"</option>
                        {move || {
                            owners
                                .get()
                                .into_iter()
                                .map(|o| view! { <option value=o.clone()>{o}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </div>
                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading collections..."</p> }>
                    <Show
                        when=move || !visible.with(Vec::is_empty)
                        fallback=|| view! { <p class="list-page__empty">"No collections found."</p> }
                    >
                        <div class="card-grid">
                            {move || {
                                visible
                                    .get()
                                    .into_iter()
                                    .map(|collection| {
                                        view! { <CollectionCard collection=collection on_delete=on_delete_request/> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </section>
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete Collection"
                    message="Are you sure you want to delete this collection? This action cannot be undone."
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                    busy=deleting
                />
            </Show>
        </AppLayout>
    }
}

#[component]
fn CollectionCard(collection: Collection, on_delete: Callback<Collection>) -> impl IntoView {
    let view_href = format!("/collections/{}", collection.id);
    let edit_href = format!("/collections/{}/edit", collection.id);
    let description = collection.description.clone().unwrap_or_else(|| "No description provided.".to_owned());
    let sources = match collection.data_sources_count {
        1 => "1 data source".to_owned(),
        n => format!("{n} data sources"),
    };
    let target = collection.clone();

    view! {
        <article class="collection-card">
            <header class="collection-card__header">
                <a class="collection-card__name" href=view_href.clone()>
                    {collection.name.clone()}
                </a>
                <CollectionStatusBadge status=collection.status/>
            </header>
            <p class="collection-card__description">{description}</p>
            <dl class="collection-card__meta">
                <dt>"Owner"</dt>
                <dd>{collection.owner.clone()}</dd>
                <dt>"Sources"</dt>
                <dd>{sources}</dd>
                <dt>"Last scan"</dt>
                <dd>{collection.last_scan.clone()}</dd>
            </dl>
            <div class="collection-card__actions">
                <a class="btn" href=view_href>
                    "View"
                </a>
                <a class="btn" href=edit_href>
                    "Edit"
                </a>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(target.clone())>
                    "Delete"
                </button>
            </div>
        </article>
    }
}
