//! Query results table.

use api::model::QueryRow;
use api::results::{NO_RESULTS, ResultsView, render};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

/// Renders rows as a table with a row-count footer, or the empty placeholder.
#[component]
pub fn ResultsTable(#[prop(into)] rows: Signal<Vec<QueryRow>>) -> impl IntoView {
    move || match render(&rows.get()) {
        ResultsView::Empty => view! { <p class="results__empty">{NO_RESULTS}</p> }.into_any(),
        ResultsView::Table(table) => {
            let footer = table.footer();
            view! {
                <div class="results">
                    <div class="results__scroll">
                        <table class="table">
                            <thead>
                                <tr>
                                    {table.columns.into_iter().map(|c| view! { <th>{c}</th> }).collect::<Vec<_>>()}
                                </tr>
                            </thead>
                            <tbody>
                                {table
                                    .rows
                                    .into_iter()
                                    .map(|cells| {
                                        view! {
                                            <tr>
                                                {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect::<Vec<_>>()}
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    </div>
                    <p class="results__footer">{footer}</p>
                </div>
            }
                .into_any()
        }
    }
}
