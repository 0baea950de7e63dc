//! Numbered pagination bar under paged tables.
//!
//! The window math lives in `api::pagination`; this component only renders
//! it and reports page changes.

use api::pagination::{PageItem, Pagination};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

#[component]
pub fn Pager(#[prop(into)] pagination: Signal<Pagination>, on_page: Callback<u32>) -> impl IntoView {
    let go = move |page: u32| {
        let current = pagination.get_untracked();
        let target = current.go_to(page);
        if target.current != current.current {
            on_page.run(target.current);
        }
    };

    view! {
        <Show when=move || pagination.get().total_items > 0>
            <nav class="pager" aria-label="Pagination">
                <span class="pager__summary">{move || pagination.get().summary()}</span>
                <div class="pager__pages">
                    <button
                        class="btn pager__prev"
                        disabled=move || !pagination.get().has_previous()
                        on:click=move |_| go(pagination.get_untracked().current.saturating_sub(1))
                    >
                        "Previous"
                    </button>
                    {move || {
                        let state = pagination.get();
                        state
                            .window()
                            .into_iter()
                            .map(|item| match item {
                                PageItem::Page(page) => {
                                    view! {
                                        <button
                                            class="btn pager__page"
                                            class:pager__page--current={page == state.current}
                                            on:click=move |_| go(page)
                                        >
                                            {page}
                                        </button>
                                    }
                                        .into_any()
                                }
                                PageItem::Ellipsis => view! { <span class="pager__ellipsis">"…"</span> }.into_any(),
                            })
                            .collect::<Vec<_>>()
                    }}
                    <button
                        class="btn pager__next"
                        disabled=move || !pagination.get().has_next()
                        on:click=move |_| go(pagination.get_untracked().current + 1)
                    >
                        "Next"
                    </button>
                </div>
            </nav>
        </Show>
    }
}
