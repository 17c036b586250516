//! Severity doughnut and per-type breakdown for the results page.

use leptos::prelude::*;

use crate::state::results::ResultsState;
use crate::util::chart::{RING_RADIUS, severity_color, severity_slices};
use crate::util::dom_ids::Handle;

#[component]
pub fn SeverityChart() -> impl IntoView {
    let results = expect_context::<RwSignal<ResultsState>>();

    let counts = move || {
        results.with(|r| r.report.as_ref().map(|report| report.stats.severity).unwrap_or_default())
    };

    view! {
        <section class="severity-chart" id={Handle::SeverityChart.id()}>
            <h2>"Risk severity"</h2>
            {move || {
                let slices = severity_slices(&counts());
                if slices.is_empty() {
                    return view! { <p class="severity-chart__empty">"No risks were found in this document."</p> }
                        .into_any();
                }
                let legend = slices.clone();
                view! {
                    <svg class="severity-chart__ring" viewBox="0 0 42 42" role="img" aria-label="Risk severity distribution">
                        <circle cx="21" cy="21" r=RING_RADIUS.to_string() fill="transparent" stroke="#e9ecef" stroke-width="6"></circle>
                        {slices
                            .into_iter()
                            .filter(|slice| slice.count > 0)
                            .map(|slice| {
                                view! {
                                    <circle
                                        cx="21"
                                        cy="21"
                                        r=RING_RADIUS.to_string()
                                        fill="transparent"
                                        stroke=severity_color(slice.severity)
                                        stroke-width="6"
                                        stroke-dasharray=slice.dash_array()
                                        stroke-dashoffset=format!("{:.3}", slice.offset)
                                    ></circle>
                                }
                            })
                            .collect_view()}
                    </svg>
                    <ul class="severity-chart__legend">
                        {legend
                            .into_iter()
                            .map(|slice| {
                                view! {
                                    <li>
                                        <span class="severity-chart__swatch" style:background-color=severity_color(slice.severity)></span>
                                        {format!("{}: {} ({:.0}%)", slice.severity.as_str(), slice.count, slice.percent)}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                    .into_any()
            }}
            <TypeBreakdown/>
        </section>
    }
}

/// Risk counts per category.
#[component]
fn TypeBreakdown() -> impl IntoView {
    let results = expect_context::<RwSignal<ResultsState>>();
    let rows = move || {
        results.with(|r| {
            r.report
                .as_ref()
                .map(|report| report.stats.by_type.iter().map(|(k, v)| (k.clone(), *v)).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=move || !rows().is_empty()>
            <ul class="type-breakdown">
                {move || {
                    rows()
                        .into_iter()
                        .map(|(name, count)| {
                            view! {
                                <li>
                                    <span class="type-breakdown__name">{name}</span>
                                    <span class="type-breakdown__count">{count}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </Show>
    }
}
