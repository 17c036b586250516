//! Verdict modal for the upload pre-check.
//!
//! DESIGN
//! ======
//! Renders straight from `SubmissionState::phase`: a blocked notice offers a
//! single "choose another file" action, a decision offers Continue/Cancel.
//! Button handlers call the state transitions and only touch the DOM when the
//! transition says so, so repeated clicks cannot submit twice.

use leptos::prelude::*;

use crate::net::types::{DetectedLogo, ScoreBreakdown};
use crate::state::submission::{BlockedNotice, DecisionView, LogoBreakdown, SubmissionPhase, SubmissionState};
use crate::util::browser;
use crate::util::dom_ids::Handle;

#[component]
pub fn PrecheckModal() -> impl IntoView {
    let submission = expect_context::<RwSignal<SubmissionState>>();

    let acknowledge = Callback::new(move |()| {
        if submission.try_update(SubmissionState::acknowledge_block).unwrap_or(false) {
            browser::reset_file_input();
        }
    });
    let proceed = Callback::new(move |()| {
        if submission.try_update(SubmissionState::confirm).unwrap_or(false) && !browser::submit_upload_form() {
            submission.update(SubmissionState::submission_failed);
        }
    });
    let cancel = Callback::new(move |()| submission.update(SubmissionState::cancel));

    move || match submission.with(|s| s.phase.clone()) {
        SubmissionPhase::Blocked(notice) => blocked_dialog(notice, acknowledge).into_any(),
        SubmissionPhase::Decision(decision) => decision_dialog(decision, proceed, cancel).into_any(),
        SubmissionPhase::Idle | SubmissionPhase::Checking | SubmissionPhase::Submitting => ().into_any(),
    }
}

fn blocked_dialog(notice: BlockedNotice, on_ack: Callback<()>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" || ev.key() == "Enter" {
            ev.prevent_default();
            on_ack.run(());
        }
    };

    let (title, body) = match notice {
        BlockedNotice::Blurry { message } => (
            "Document too blurry",
            view! { <p class="precheck__summary">{message}</p> }.into_any(),
        ),
        BlockedNotice::PageLimit { page_count, max_pages, recommendation } => (
            "Page limit exceeded",
            view! {
                <p class="precheck__pages">
                    {format!("This document has {page_count} pages. The maximum is {max_pages}.")}
                </p>
                {recommendation.map(|text| view! { <p class="precheck__summary">{text}</p> })}
            }
            .into_any(),
        ),
    };

    view! {
        <div class="dialog-backdrop">
            <div
                class="dialog precheck precheck--blocked"
                id={Handle::PrecheckModal.id()}
                role="alertdialog"
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>{title}</h2>
                {body}
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_ack.run(())>
                        "Choose another file"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn decision_dialog(decision: DecisionView, on_continue: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };
    let tag_class = format!("precheck__tag {}", decision.tone.css_modifier());

    view! {
        <div class="dialog-backdrop">
            <div
                class="dialog precheck"
                id={Handle::PrecheckModal.id()}
                role="dialog"
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>"Authenticity check"</h2>
                <span class=tag_class>{decision.verdict.label()}</span>
                {decision.document_type.map(|kind| view! { <p class="precheck__doc-type">{kind}</p> })}
                <p class="precheck__summary">{decision.summary}</p>
                {decision.confidence.map(|pct| view! { <p class="precheck__confidence">{format!("Confidence: {pct}%")}</p> })}
                {decision.score_breakdown.map(score_rows)}
                {decision.logos.map(logo_section)}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_continue.run(())>
                        "Continue"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn score_rows(scores: ScoreBreakdown) -> impl IntoView {
    let rows = [
        ("Pre-check", scores.precheck_score),
        ("Authenticity", scores.authenticity_score),
        ("Consistency", scores.consistency_score),
        ("Credibility", scores.credibility_score),
    ];
    view! {
        <dl class="precheck__scores">
            {rows
                .into_iter()
                .filter_map(|(label, score)| score.map(|s| (label, s)))
                .map(|(label, score)| {
                    view! {
                        <dt>{label}</dt>
                        <dd>{format!("{score:.0}")}</dd>
                    }
                })
                .collect_view()}
        </dl>
    }
}

fn logo_section(logos: LogoBreakdown) -> impl IntoView {
    let counts = format!(
        "{} detected: {} authentic, {} suspicious, {} unknown",
        logos.total_detected,
        logos.authentic_count(),
        logos.suspicious_count(),
        logos.unknown_count(),
    );

    view! {
        <section class="precheck__logos">
            <h3>"Logo analysis"</h3>
            <p>{counts}</p>
            {logos.score.map(|score| view! { <p class="precheck__logo-score">{format!("Logo score: {score}/100")}</p> })}
            {logo_list("Authentic", logos.authentic)}
            {logo_list("Suspicious", logos.suspicious)}
            {logo_list("Unknown", logos.unknown)}
            {(!logos.risk_factors.is_empty())
                .then(|| {
                    view! {
                        <h4>"Risk factors"</h4>
                        <ul class="precheck__risk-factors">
                            {logos.risk_factors.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
                        </ul>
                    }
                })}
        </section>
    }
}

fn logo_list(heading: &'static str, entries: Vec<DetectedLogo>) -> impl IntoView {
    (!entries.is_empty()).then(|| {
        view! {
            <h4>{heading}</h4>
            <ul class="precheck__logo-list">
                {entries
                    .into_iter()
                    .map(|logo| {
                        let text = match logo.company {
                            Some(company) if !company.trim().is_empty() => format!("{} ({company})", logo.name),
                            _ => logo.name,
                        };
                        view! { <li>{text}</li> }
                    })
                    .collect_view()}
            </ul>
        }
    })
}
