//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, results::ResultsPage};
use crate::state::{chat::ChatState, results::ResultsState, submission::SubmissionState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
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
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let submission = RwSignal::new(SubmissionState::default());
    let chat = RwSignal::new(ChatState::default());
    let results = RwSignal::new(ResultsState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(submission);
    provide_context(chat);
    provide_context(results);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/legalease-ui.css"/>
        <Title text="LegalEase"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("results") view=ResultsPage/>
            </Routes>
        </Router>
    }
}
