//! AI model catalogue with search and origin filtering.

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

use api::filter::{ALL, ModelFilter, choice};
use api::model::{Model, ModelOrigin};
use api::services::ModelQuery;
use api::services::models::provider_from_identifier;
use leptos::prelude::*;

use crate::components::layout::AppLayout;
use crate::state::notice::NoticeState;
use crate::util::task::{report, spawn};

pub fn model_filter(search: &str, origin: &str) -> ModelFilter {
    ModelFilter { search: search.to_owned(), origin: choice(origin).and_then(|o| ModelOrigin::parse(&o)) }
}

/// `"3 models"`, `"1 model"`.
pub fn count_label(total: u64) -> String {
    if total == 1 { "1 model".to_owned() } else { format!("{total} models") }
}

fn origin_badge_class(origin: ModelOrigin) -> &'static str {
    match origin {
        ModelOrigin::OpenRouter => "badge badge--info",
        ModelOrigin::Internal => "badge badge--neutral",
    }
}

#[component]
pub fn ModelsPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let models = RwSignal::new(Vec::<Model>::new());
    let total = RwSignal::new(0_u64);
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let origin = RwSignal::new(ALL.to_owned());

    let load = move || {
        loading.set(true);
        spawn(async move {
            match crate::net::client::api_client().models().list(&ModelQuery::default()).await {
                Ok(list) => {
                    total.set(list.total);
                    models.set(list.models);
                }
                Err(err) => report(notices, "load models", &err, "Failed to load models"),
            }
            loading.set(false);
        });
    };
    load();

    let visible = Memo::new(move |_| {
        let filter = model_filter(&search.get(), &origin.get());
        models.with(|m| filter.apply(m))
    });

    view! {
        <AppLayout title="Models">
            <section class="list-page">
                <header class="list-page__header">
                    <p class="list-page__subtitle">{move || count_label(total.get())}</p>
                    <button class="btn" disabled=move || loading.get() on:click=move |_| load()>
                        {move || if loading.get() { "Refreshing..." } else { "Refresh" }}
                    </button>
                </header>
                <div class="filters">
                    <input
                        class="filters__search"
                        type="search"
                        placeholder="Search by name, identifier, or description..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <select
                        class="filters__select"
                        prop:value=move || origin.get()
                        on:change=move |ev| origin.set(event_target_value(&ev))
                    >
                        <option value=ALL>"Origin: All"</option>
                        {ModelOrigin::ALL
                            .into_iter()
                            .map(|o| view! { <option value=o.as_str()>{o.as_str()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading models..."</p> }>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Identifier"</th>
                                <th>"Provider"</th>
                                <th>"Origin"</th>
                                <th>"Active"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || visible.with(Vec::is_empty)>
                                <tr>
                                    <td class="table__empty" colspan="5">
                                        "No models found."
                                    </td>
                                </tr>
                            </Show>
                            {move || visible.get().into_iter().map(model_row).collect::<Vec<_>>()}
                        </tbody>
                    </table>
                </Show>
            </section>
        </AppLayout>
    }
}

fn model_row(model: Model) -> impl IntoView {
    let provider = provider_from_identifier(&model.identifier).to_owned();
    view! {
        <tr>
            <td>
                <div class="table__primary">{model.name}</div>
                <div class="table__secondary">{model.description.unwrap_or_default()}</div>
            </td>
            <td>
                <code>{model.identifier}</code>
            </td>
            <td>{provider}</td>
            <td>
                <span class=origin_badge_class(model.origin)>{model.origin.as_str()}</span>
            </td>
            <td>{if model.is_active { "Yes" } else { "No" }}</td>
        </tr>
    }
}
