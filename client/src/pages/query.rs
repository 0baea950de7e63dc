//! Natural-language query screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns one `QueryWorkflow` in a signal. A new submission cancels
//! the previous one; leaving the page cancels whatever is still running.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use api::filter::choice;
use api::model::{Collection, Model};
use api::query::{QueryDraft, QueryStatus, QueryWorkflow};
use api::services::ModelQuery;
use api::services::models::filter_active;
use leptos::prelude::*;

use crate::components::layout::AppLayout;
use crate::components::results_table::ResultsTable;
use crate::state::notice::NoticeState;
use crate::util::task::{report, spawn};

const PLACEHOLDER: &str = "e.g., 'What were the total sales by product category last quarter?'";
const RESULTS_HINT: &str = "Your query results will appear here.";

/// Build the draft from the raw textarea and select values.
pub fn draft(question: &str, collection: &str, model: &str) -> QueryDraft {
    QueryDraft { question: question.to_owned(), collection_id: choice(collection), model_id: choice(model) }
}

fn status_class(status: QueryStatus) -> &'static str {
    match status {
        QueryStatus::Idle => "query-status",
        QueryStatus::Generating | QueryStatus::Executing => "query-status query-status--busy",
        QueryStatus::Completed => "query-status query-status--done",
        QueryStatus::Error => "query-status query-status--error",
    }
}

#[component]
pub fn QueryPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let workflow = RwSignal::new(QueryWorkflow::new());
    let collections = RwSignal::new(Vec::<Collection>::new());
    let models = RwSignal::new(Vec::<Model>::new());
    let question = RwSignal::new(String::new());
    let collection_id = RwSignal::new(String::new());
    let model_id = RwSignal::new(String::new());

    spawn(async move {
        match crate::net::client::api_client().collections().all().await {
            Ok(all) => collections.set(all),
            Err(err) => report(notices, "load collections", &err, "Failed to load collections"),
        }
    });
    spawn(async move {
        match crate::net::client::api_client().models().list(&ModelQuery::default()).await {
            Ok(list) => models.set(filter_active(&list.models)),
            Err(err) => report(notices, "load models", &err, "Failed to load models"),
        }
    });

    on_cleanup(move || {
        workflow.try_update(QueryWorkflow::reset);
    });

    let status = Memo::new(move |_| workflow.with(QueryWorkflow::status));
    let rows = Signal::derive(move || workflow.with(|w| w.rows().to_vec()));
    let error = Memo::new(move |_| workflow.with(|w| w.error().map(str::to_owned)));
    let submittable = Memo::new(move |_| draft(&question.get(), &collection_id.get(), &model_id.get()).is_submittable());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft(&question.get_untracked(), &collection_id.get_untracked(), &model_id.get_untracked());
        let Some(submission) = workflow.try_update(|w| w.begin(&current)).flatten() else {
            return;
        };
        spawn(async move {
            workflow.update(|w| {
                w.mark_executing(submission.generation);
            });
            let api = crate::net::client::api_client();
            let (generation, outcome) = api::query::execute(&api, submission).await;
            workflow.try_update(|w| w.finish(generation, outcome));
        });
    };

    view! {
        <AppLayout title="Query">
            <form class="query" on:submit=on_submit>
                <div class="query__selectors">
                    <label class="field">
                        <span class="field__label">"Collection"</span>
                        <select
                            class="field__input"
                            prop:value=move || collection_id.get()
                            on:change=move |ev| collection_id.set(event_target_value(&ev))
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
                    </label>
                    <label class="field">
                        <span class="field__label">"Model"</span>
                        <select
                            class="field__input"
                            prop:value=move || model_id.get()
                            on:change=move |ev| model_id.set(event_target_value(&ev))
                        >
                            <option value="">"Select a model"</option>
                            {move || {
                                models
                                    .get()
                                    .into_iter()
                                    .map(|m| view! { <option value=m.id.clone()>{m.name}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                </div>
                <label class="field">
                    <span class="field__label">"Ask a question about your data"</span>
                    <textarea
                        class="field__input"
                        rows="4"
                        placeholder=PLACEHOLDER
                        prop:value=move || question.get()
                        on:input=move |ev| question.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="query__actions">
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled={move || !submittable.get() || status.get().is_busy()}
                    >
                        "Generate & Execute"
                    </button>
                    <Show when=move || status.get() != QueryStatus::Idle>
                        <button class="btn" type="button" on:click=move |_| workflow.update(QueryWorkflow::reset)>
                            {move || if status.get().is_busy() { "Cancel" } else { "Clear" }}
                        </button>
                    </Show>
                </div>
            </form>
            <section class="query__status">
                <span class=move || status_class(status.get())>{move || status.get().label()}</span>
                {move || error.get().map(|message| view! { <div class="alert alert--error">{message}</div> })}
            </section>
            <section class="query__results">
                <Show
                    when=move || status.get() == QueryStatus::Completed
                    fallback=|| view! { <p class="results__hint">{RESULTS_HINT}</p> }
                >
                    <ResultsTable rows=rows/>
                </Show>
            </section>
        </AppLayout>
    }
}
