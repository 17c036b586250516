//! Result-page state: the loaded risk report plus accordion, filter, and
//! summary-highlight controls.
//!
//! DESIGN
//! ======
//! Risks are addressed by their index in `report.risks` so accordion state
//! survives filter changes: hiding a risk does not collapse it.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use std::collections::BTreeSet;

use crate::net::api::ApiError;
use crate::net::types::{RiskItem, RiskReport, Severity};

/// Which risks the list shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RiskFilter {
    #[default]
    All,
    Severity(Severity),
    /// Category name, compared case-insensitively.
    Type(String),
}

impl RiskFilter {
    pub fn matches(&self, risk: &RiskItem) -> bool {
        match self {
            Self::All => true,
            Self::Severity(severity) => risk.severity == *severity,
            Self::Type(name) => risk.risk_type.trim().eq_ignore_ascii_case(name.trim()),
        }
    }

    /// Encode for a `<select>` value.
    pub fn to_value(&self) -> String {
        match self {
            Self::All => "all".to_owned(),
            Self::Severity(severity) => format!("severity:{}", severity.as_str()),
            Self::Type(name) => format!("type:{name}"),
        }
    }

    /// Inverse of `to_value`; anything unrecognized shows everything.
    pub fn from_value(value: &str) -> Self {
        if let Some(severity) = value.strip_prefix("severity:") {
            return Self::Severity(Severity::parse(severity));
        }
        if let Some(name) = value.strip_prefix("type:") {
            return Self::Type(name.to_owned());
        }
        Self::All
    }
}

/// State for the `/results` page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultsState {
    pub report: Option<RiskReport>,
    pub loading: bool,
    pub error: Option<String>,
    pub filter: RiskFilter,
    pub expanded: BTreeSet<usize>,
    pub highlight_key_terms: bool,
    pub highlight_query: String,
}

impl ResultsState {
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_loading(&mut self, outcome: Result<RiskReport, ApiError>) {
        self.loading = false;
        match outcome {
            Ok(report) => {
                self.report = Some(report);
                self.expanded.clear();
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Nothing to show yet: a fetch is running or has not started.
    ///
    /// The server render and the first client render both see this state.
    pub fn is_pending(&self) -> bool {
        self.error.is_none() && (self.loading || self.report.is_none())
    }

    pub fn risks(&self) -> &[RiskItem] {
        self.report.as_ref().map(|r| r.risks.as_slice()).unwrap_or_default()
    }

    /// Risks passing the active filter, paired with their stable index.
    pub fn visible_risks(&self) -> Vec<(usize, RiskItem)> {
        self.risks()
            .iter()
            .enumerate()
            .filter(|(_, risk)| self.filter.matches(risk))
            .map(|(idx, risk)| (idx, risk.clone()))
            .collect()
    }

    /// Header click: open a collapsed risk or close an open one.
    pub fn toggle_expanded(&mut self, idx: usize) {
        if !self.expanded.remove(&idx) {
            self.expanded.insert(idx);
        }
    }

    pub fn is_expanded(&self, idx: usize) -> bool {
        self.expanded.contains(&idx)
    }

    /// Distinct risk categories, sorted, for the type filter.
    pub fn type_options(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        if let Some(report) = &self.report {
            seen.extend(report.stats.by_type.keys().cloned());
        }
        seen.extend(
            self.risks()
                .iter()
                .map(|r| r.risk_type.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_owned),
        );
        seen.into_iter().collect()
    }

    /// Summary text with surrounding whitespace removed, if any.
    pub fn summary(&self) -> Option<&str> {
        self.report
            .as_ref()
            .and_then(|r| r.summary.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn document_text(&self) -> String {
        self.report
            .as_ref()
            .and_then(|r| r.document_text.clone())
            .unwrap_or_default()
    }
}
