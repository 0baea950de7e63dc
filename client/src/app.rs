//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{
    collection_details::CollectionDetailsPage, collection_form::CollectionFormPage, collections::CollectionsPage,
    dashboard::DashboardPage, data_source_form::DataSourceFormPage, data_sources::DataSourcesPage,
    forgot_password::ForgotPasswordPage, login::LoginPage, models::ModelsPage, query::QueryPage,
};
use crate::state::{notice::NoticeState, session::SessionState, ui::UiState};
use crate::util::{auth::refresh_session, theme};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=theme::head_script()></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, UI, and notice contexts, then reads the stored
/// session and theme once the app is running in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::pending());
    let ui = RwSignal::new(UiState::default());
    let notices = RwSignal::new(NoticeState::default());

    provide_context(session);
    provide_context(ui);
    provide_context(notices);

    // Effects only run after hydration, so SSR always renders the pending state.
    Effect::new(move || {
        refresh_session(session);
        let preference = theme::read_preference();
        theme::apply(preference);
        ui.set(UiState::with_theme(preference));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/delfos.css"/>
        <Title text="Delfos"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("collections") view=CollectionsPage/>
                <Route path=(StaticSegment("collections"), StaticSegment("new")) view=CollectionFormPage/>
                <Route path=(StaticSegment("collections"), ParamSegment("id")) view=CollectionDetailsPage/>
                <Route
                    path=(StaticSegment("collections"), ParamSegment("id"), StaticSegment("edit"))
                    view=CollectionFormPage
                />
                <Route path=StaticSegment("data-sources") view=DataSourcesPage/>
                <Route path=(StaticSegment("data-sources"), StaticSegment("new")) view=DataSourceFormPage/>
                <Route
                    path=(StaticSegment("data-sources"), ParamSegment("id"), StaticSegment("edit"))
                    view=DataSourceFormPage
                />
                <Route path=StaticSegment("models") view=ModelsPage/>
                <Route path=StaticSegment("query") view=QueryPage/>
            </Routes>
        </Router>
    }
}
