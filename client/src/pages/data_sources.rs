//! Data sources list: server-paged table with in-page filters.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page number drives the request; the search/type/collection/status
//! filters narrow the rows of the loaded page only.

#[cfg(test)]
#[path = "data_sources_test.rs"]
mod data_sources_test;

use api::filter::{ALL, DataSourceFilter, choice, distinct_collections};
use api::model::{DataSource, DataSourceStatus, DataSourceType};
use api::pagination::{PAGE_SIZE, Pagination};
use api::services::ListQuery;
use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::layout::AppLayout;
use crate::components::pager::Pager;
use crate::components::status_badge::DataSourceStatusBadge;
use crate::state::notice::NoticeState;
use crate::util::task::{notify_success, report, spawn};

/// Raw filter inputs as bound to the search box and selects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterInputs {
    pub search: String,
    pub kind: String,
    pub collection: String,
    pub status: String,
}

impl Default for FilterInputs {
    fn default() -> Self {
        Self { search: String::new(), kind: ALL.to_owned(), collection: ALL.to_owned(), status: ALL.to_owned() }
    }
}

impl FilterInputs {
    pub fn filter(&self) -> DataSourceFilter {
        DataSourceFilter {
            search: self.search.clone(),
            kind: choice(&self.kind).and_then(|k| DataSourceType::parse(&k)),
            collection: choice(&self.collection),
            status: choice(&self.status).and_then(|s| DataSourceStatus::parse(&s)),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Listing {
    items: Vec<DataSource>,
    total: u64,
}

fn load(page: u32, listing: RwSignal<Listing>, loading: RwSignal<bool>, notices: RwSignal<NoticeState>) {
    loading.set(true);
    spawn(async move {
        let query = ListQuery::page(page, PAGE_SIZE);
        match crate::net::client::api_client().data_sources().list(&query).await {
            Ok(result) => listing.set(Listing { items: result.items, total: result.total }),
            Err(err) => report(notices, "load data sources", &err, "Failed to load data sources"),
        }
        loading.set(false);
    });
}

#[component]
pub fn DataSourcesPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let listing = RwSignal::new(Listing::default());
    let loading = RwSignal::new(true);
    let page = RwSignal::new(1_u32);
    let inputs = RwSignal::new(FilterInputs::default());
    let pending_delete = RwSignal::new(None::<DataSource>);
    let busy = RwSignal::new(false);

    Effect::new(move || load(page.get(), listing, loading, notices));

    let visible = Memo::new(move |_| {
        let filter = inputs.with(FilterInputs::filter);
        listing.with(|l| filter.apply(&l.items))
    });
    let collection_names = Memo::new(move |_| listing.with(|l| distinct_collections(&l.items)));
    let pagination = Signal::derive(move || Pagination::new(page.get(), listing.with(|l| l.total)));

    let on_rescan = Callback::new(move |source: DataSource| {
        spawn(async move {
            match crate::net::client::api_client().data_sources().rescan(&source.id).await {
                Ok(_) => {
                    notify_success(notices, &format!("Rescan started for \"{}\"", source.name));
                    load(page.get_untracked(), listing, loading, notices);
                }
                Err(err) => report(notices, "rescan data source", &err, "Failed to rescan data source"),
            }
        });
    });

    let on_delete_confirm = Callback::new(move |()| {
        let Some(target) = pending_delete.get_untracked() else {
            return;
        };
        busy.set(true);
        spawn(async move {
            match crate::net::client::api_client().data_sources().delete(&target.id).await {
                Ok(()) => {
                    notify_success(notices, &format!("Deleted \"{}\"", target.name));
                    load(page.get_untracked(), listing, loading, notices);
                }
                Err(err) => report(notices, "delete data source", &err, "Failed to delete data source"),
            }
            busy.set(false);
            pending_delete.set(None);
        });
    });

    view! {
        <AppLayout title="Data Sources">
            <section class="list-page">
                <header class="list-page__header">
                    <p class="list-page__subtitle">"Connect and manage the databases behind your collections."</p>
                    <a class="btn btn--primary" href="/data-sources/new">
                        "+ Add Data Source"
                    </a>
                </header>
                <div class="filters">
                    <input
                        class="filters__search"
                        type="search"
                        placeholder="Search data sources by name..."
                        prop:value=move || inputs.with(|i| i.search.clone())
                        on:input=move |ev| inputs.update(|i| i.search = event_target_value(&ev))
                    />
                    <select
                        class="filters__select"
                        prop:value=move || inputs.with(|i| i.kind.clone())
                        on:change=move |ev| inputs.update(|i| i.kind = event_target_value(&ev))
                    >
                        <option value=ALL>"Type: All"</option>
                        {DataSourceType::ALL
                            .into_iter()
                            .map(|k| view! { <option value=k.as_str()>{k.as_str()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <select
                        class="filters__select"
                        prop:value=move || inputs.with(|i| i.collection.clone())
                        on:change=move |ev| inputs.update(|i| i.collection = event_target_value(&ev))
                    >
                        <option value=ALL>"Collection: All"</option>
                        {move || {
                            collection_names
                                .get()
                                .into_iter()
                                .map(|name| view! { <option value=name.clone()>{name}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                    <select
                        class="filters__select"
                        prop:value=move || inputs.with(|i| i.status.clone())
                        on:change=move |ev| inputs.update(|i| i.status = event_target_value(&ev))
                    >
                        <option value=ALL>"Status: All"</option>
                        {DataSourceStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <Show when=move || !inputs.with(FilterInputs::is_default)>
                        <button class="btn filters__clear" on:click=move |_| inputs.set(FilterInputs::default())>
                            "Clear filters"
                        </button>
                    </Show>
                </div>
                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading data sources..."</p> }>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Type"</th>
                                <th>"Collection"</th>
                                <th>"Status"</th>
                                <th>"Last scan"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || visible.with(Vec::is_empty)>
                                <tr>
                                    <td class="table__empty" colspan="6">
                                        "No data sources found."
                                    </td>
                                </tr>
                            </Show>
                            {move || {
                                visible
                                    .get()
                                    .into_iter()
                                    .map(|source| {
                                        view! {
                                            <DataSourceRow
                                                source=source
                                                on_rescan=on_rescan
                                                on_delete=Callback::new(move |s: DataSource| pending_delete.set(Some(s)))
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
                <Pager pagination=pagination on_page=Callback::new(move |p: u32| page.set(p))/>
            </section>
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete Data Source"
                    message="Are you sure you want to delete this data source?"
                    on_confirm=on_delete_confirm
                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                    busy=busy
                />
            </Show>
        </AppLayout>
    }
}

#[component]
fn DataSourceRow(source: DataSource, on_rescan: Callback<DataSource>, on_delete: Callback<DataSource>) -> impl IntoView {
    let edit_href = format!("/data-sources/{}/edit", source.id);
    let collection_href = format!("/collections/{}", source.collection_id);
    let rescan_target = source.clone();
    let delete_target = source.clone();

    view! {
        <tr>
            <td>{source.name.clone()}</td>
            <td>{source.kind.as_str()}</td>
            <td>
                <a href=collection_href>{source.collection.clone()}</a>
            </td>
            <td>
                <DataSourceStatusBadge status=source.status/>
            </td>
            <td>{source.last_scan.clone()}</td>
            <td class="table__actions">
                <a class="btn" href=edit_href>
                    "Edit"
                </a>
                <button class="btn" on:click=move |_| on_rescan.run(rescan_target.clone())>
                    "Rescan"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(delete_target.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
