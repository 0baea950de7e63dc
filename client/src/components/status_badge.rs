//! Colored status pill for collections and data sources.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use api::model::{CollectionStatus, DataSourceStatus};
use leptos::prelude::*;

pub fn collection_badge_class(status: CollectionStatus) -> &'static str {
    match status {
        CollectionStatus::Active => "badge badge--ok",
        CollectionStatus::Error => "badge badge--error",
    }
}

pub fn data_source_badge_class(status: DataSourceStatus) -> &'static str {
    match status {
        DataSourceStatus::Active => "badge badge--ok",
        DataSourceStatus::Disabled => "badge badge--muted",
    }
}

#[component]
pub fn StatusBadge(label: &'static str, class: &'static str) -> impl IntoView {
    view! { <span class=class>{label}</span> }
}

#[component]
pub fn CollectionStatusBadge(status: CollectionStatus) -> impl IntoView {
    view! { <StatusBadge label=status.label() class=collection_badge_class(status)/> }
}

#[component]
pub fn DataSourceStatusBadge(status: DataSourceStatus) -> impl IntoView {
    view! { <StatusBadge label=status.label() class=data_source_badge_class(status)/> }
}
