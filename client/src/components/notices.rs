//! Corner stack rendering queued notifications.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[component]
pub fn Notices() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notices" aria-live="polite">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        view! {
                            <div class=notice.kind.class() role="status">
                                <span class="notice__message">{notice.message}</span>
                                <button
                                    class="notice__dismiss"
                                    title="Dismiss"
                                    on:click=move |_| notices.update(|n| n.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
