//! Results page: summary, severity chart, risk list, and document chat.

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::components::risk_list::RiskList;
use crate::components::severity_chart::SeverityChart;
use crate::components::summary_tools::SummaryTools;
use crate::state::results::ResultsState;

#[component]
pub fn ResultsPage() -> impl IntoView {
    let results = expect_context::<RwSignal<ResultsState>>();

    // Fetch the report once, after hydration, so the first client render
    // matches the server-rendered placeholder.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        if results.with_untracked(|r| r.loading || r.report.is_some()) {
            return;
        }
        results.update(ResultsState::start_loading);
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_risk_report().await;
            if let Err(e) = &outcome {
                leptos::logging::error!("risk report fetch failed: {e}");
            }
            results.update(|r| r.finish_loading(outcome));
        });
    });

    let document_text = move || results.with(ResultsState::document_text);

    view! {
        <div class="results-page">
            <header class="results-page__header">
                <h1>"Your results"</h1>
                <a class="btn btn--link" href="/">"Analyze another document"</a>
            </header>
            {move || {
                let (pending, error) = results.with(|r| (r.is_pending(), r.error.clone()));
                if let Some(error) = error {
                    return view! {
                        <p class="results-page__error">{format!("Could not load results: {error}")}</p>
                    }
                        .into_any();
                }
                if pending {
                    return view! { <p class="results-page__loading">"Loading results..."</p> }.into_any();
                }
                view! {
                    <SummaryTools/>
                    <div class="results-page__grid">
                        <SeverityChart/>
                        <RiskList/>
                    </div>
                }
                    .into_any()
            }}
            <ChatWidget document_text=document_text/>
        </div>
    }
}
