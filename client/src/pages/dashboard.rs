//! Dashboard page: authenticated landing with inventory counts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each count comes from its own request so one slow endpoint never holds
//! back the others.

use api::services::{ListQuery, ModelQuery};
use leptos::prelude::*;

use crate::components::layout::AppLayout;
use crate::state::notice::NoticeState;
use crate::state::session::SessionState;
use crate::util::task::{report, spawn};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let collections = RwSignal::new(None::<u64>);
    let data_sources = RwSignal::new(None::<u64>);
    let models = RwSignal::new(None::<u64>);

    let count_query = ListQuery::page(1, 1);
    spawn(async move {
        match crate::net::client::api_client().collections().list(&count_query).await {
            Ok(page) => collections.set(Some(page.total)),
            Err(err) => report(notices, "load collection count", &err, "Failed to load collections"),
        }
    });
    let count_query = ListQuery::page(1, 1);
    spawn(async move {
        match crate::net::client::api_client().data_sources().list(&count_query).await {
            Ok(page) => data_sources.set(Some(page.total)),
            Err(err) => report(notices, "load data source count", &err, "Failed to load data sources"),
        }
    });
    spawn(async move {
        match crate::net::client::api_client().models().list(&ModelQuery::default()).await {
            Ok(list) => models.set(Some(list.total)),
            Err(err) => report(notices, "load model count", &err, "Failed to load models"),
        }
    });

    view! {
        <AppLayout title="Dashboard">
            <section class="dashboard">
                <p class="dashboard__greeting">
                    "Welcome back, " {move || session.get().display_name()}
                </p>
                <div class="dashboard__cards">
                    <DashboardCard label="Data Collections" href="/collections" count=collections/>
                    <DashboardCard label="Data Sources" href="/data-sources" count=data_sources/>
                    <DashboardCard label="AI Models" href="/models" count=models/>
                </div>
                <a class="btn btn--primary" href="/query">
                    "Ask a question"
                </a>
            </section>
        </AppLayout>
    }
}

#[component]
fn DashboardCard(label: &'static str, href: &'static str, count: RwSignal<Option<u64>>) -> impl IntoView {
    view! {
        <a class="dashboard-card" href=href>
            <span class="dashboard-card__count">
                {move || count.get().map_or_else(|| "…".to_owned(), |n| n.to_string())}
            </span>
            <span class="dashboard-card__label">{label}</span>
        </a>
    }
}
