use super::*;
use crate::net::types::RiskStats;

fn risk(severity: Severity, risk_type: &str) -> RiskItem {
    RiskItem {
        clause: format!("{risk_type} clause"),
        severity,
        risk_type: risk_type.to_owned(),
        ..RiskItem::default()
    }
}

fn loaded() -> ResultsState {
    let mut state = ResultsState::default();
    state.start_loading();
    state.finish_loading(Ok(RiskReport {
        risks: vec![
            risk(Severity::High, "Liability"),
            risk(Severity::Low, "Payment"),
            risk(Severity::High, "payment"),
        ],
        summary: Some("  A services agreement.  ".to_owned()),
        ..RiskReport::default()
    }));
    state
}

// =============================================================
// Loading
// =============================================================

#[test]
fn finish_loading_stores_report() {
    let state = loaded();
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.risks().len(), 3);
    assert_eq!(state.summary(), Some("A services agreement."));
}

#[test]
fn finish_loading_records_error() {
    let mut state = ResultsState::default();
    state.start_loading();
    state.finish_loading(Err(ApiError::Status(404)));
    assert!(!state.loading);
    assert!(state.report.is_none());
    assert_eq!(state.error.as_deref(), Some("backend responded with status 404"));
    assert!(state.risks().is_empty());
}

#[test]
fn fresh_state_is_pending_until_loaded() {
    let mut state = ResultsState::default();
    assert!(state.is_pending());
    state.start_loading();
    assert!(state.is_pending());
    state.finish_loading(Ok(RiskReport::default()));
    assert!(!state.is_pending());
}

#[test]
fn failed_load_is_not_pending() {
    let mut state = ResultsState::default();
    state.start_loading();
    state.finish_loading(Err(ApiError::Transport("offline".to_owned())));
    assert!(!state.is_pending());
}

// =============================================================
// Filter
// =============================================================

#[test]
fn all_filter_matches_everything() {
    let state = loaded();
    assert_eq!(state.visible_risks().len(), 3);
}

#[test]
fn severity_filter_keeps_only_that_severity() {
    let mut state = loaded();
    state.filter = RiskFilter::Severity(Severity::High);
    let indices: Vec<usize> = state.visible_risks().into_iter().map(|(i, _)| i).collect();
    assert_eq!(indices, vec![0, 2]);
}

#[test]
fn type_filter_is_case_insensitive() {
    let mut state = loaded();
    state.filter = RiskFilter::Type("PAYMENT".to_owned());
    let indices: Vec<usize> = state.visible_risks().into_iter().map(|(i, _)| i).collect();
    assert_eq!(indices, vec![1, 2]);
}

#[test]
fn filter_value_encoding_round_trips() {
    for filter in [
        RiskFilter::All,
        RiskFilter::Severity(Severity::Low),
        RiskFilter::Type("Termination".to_owned()),
    ] {
        assert_eq!(RiskFilter::from_value(&filter.to_value()), filter);
    }
    assert_eq!(RiskFilter::from_value("bogus"), RiskFilter::All);
}

#[test]
fn type_options_merge_stats_and_risks() {
    let mut state = loaded();
    if let Some(report) = state.report.as_mut() {
        report.stats = RiskStats { by_type: [("IP".to_owned(), 1)].into_iter().collect(), ..RiskStats::default() };
    }
    assert_eq!(state.type_options(), vec!["IP", "Liability", "Payment", "payment"]);
}

// =============================================================
// Accordion
// =============================================================

#[test]
fn toggle_expanded_opens_and_closes() {
    let mut state = loaded();
    state.toggle_expanded(1);
    assert!(state.is_expanded(1));
    state.toggle_expanded(2);
    assert!(state.is_expanded(1) && state.is_expanded(2));
    state.toggle_expanded(1);
    assert!(!state.is_expanded(1));
}

#[test]
fn expansion_survives_filter_changes() {
    let mut state = loaded();
    state.toggle_expanded(0);
    state.filter = RiskFilter::Severity(Severity::Low);
    state.filter = RiskFilter::All;
    assert!(state.is_expanded(0));
}
