//! Risk filter plus accordion of identified risks.

use leptos::prelude::*;

use crate::net::types::{RiskItem, Severity};
use crate::state::results::{ResultsState, RiskFilter};
use crate::util::i18n;

#[component]
pub fn RiskList() -> impl IntoView {
    let results = expect_context::<RwSignal<ResultsState>>();

    let language = move || {
        results.with(|r| r.report.as_ref().and_then(|report| report.language.clone()).unwrap_or_default())
    };

    view! {
        <section class="risk-list">
            <div class="risk-list__header">
                <h2>"Identified risks"</h2>
                <RiskFilterSelect/>
            </div>
            {move || {
                let visible = results.with(ResultsState::visible_risks);
                if visible.is_empty() {
                    return view! { <p class="risk-list__empty">"No risks match this filter."</p> }.into_any();
                }
                let lang = language();
                visible
                    .into_iter()
                    .map(|(idx, risk)| risk_row(results, idx, risk, &lang))
                    .collect_view()
                    .into_any()
            }}
        </section>
    }
}

#[component]
fn RiskFilterSelect() -> impl IntoView {
    let results = expect_context::<RwSignal<ResultsState>>();

    let on_change = move |ev| {
        let filter = RiskFilter::from_value(&event_target_value(&ev));
        results.update(|r| r.filter = filter);
    };

    view! {
        <select
            class="risk-list__filter"
            prop:value=move || results.with(|r| r.filter.to_value())
            on:change=on_change
        >
            <option value=RiskFilter::All.to_value()>"All risks"</option>
            {Severity::ALL
                .into_iter()
                .map(|sev| {
                    let label = i18n::severity_badge(sev, "");
                    view! { <option value=RiskFilter::Severity(sev).to_value()>{label}</option> }
                })
                .collect_view()}
            {move || {
                results
                    .with(ResultsState::type_options)
                    .into_iter()
                    .map(|name| {
                        let value = RiskFilter::Type(name.clone()).to_value();
                        view! { <option value=value>{name}</option> }
                    })
                    .collect_view()
            }}
        </select>
    }
}

fn risk_row(results: RwSignal<ResultsState>, idx: usize, risk: RiskItem, language: &str) -> impl IntoView + use<> {
    let is_open = move || results.with(|r| r.is_expanded(idx));
    let badge = i18n::severity_badge(risk.severity, language);
    let (issue_label, suggestion_label) = i18n::field_labels(language);
    let badge_class = format!("risk-item__badge risk-item__badge--{}", risk.severity.as_str());

    view! {
        <div class="risk-item" class:risk-item--open=is_open>
            <button
                type="button"
                class="risk-item__header"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| results.update(|r| r.toggle_expanded(idx))
            >
                <span class=badge_class>{badge}</span>
                <span class="risk-item__clause">{risk.clause}</span>
                <span class="risk-item__type">{risk.risk_type}</span>
            </button>
            <Show when=is_open>
                <div class="risk-item__body">
                    <p><strong>{issue_label}": "</strong>{risk.issue.clone()}</p>
                    {(!risk.worst_case.trim().is_empty())
                        .then(|| view! { <p class="risk-item__worst-case">{risk.worst_case.clone()}</p> })}
                    <p><strong>{suggestion_label}": "</strong>{risk.suggestion.clone()}</p>
                </div>
            </Show>
        </div>
    }
}
