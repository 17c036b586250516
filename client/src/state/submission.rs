//! Upload pre-check coordinator.
//!
//! ARCHITECTURE
//! ============
//! A submission moves through
//! `Idle -> Checking -> {Blocked, Decision} -> {Submitting | Idle}`.
//! Components never mutate the phase directly. They call the transition
//! methods here and perform the side effect the method reports: start the
//! precheck request, or run the native form submission. Keeping the machine a
//! plain struct lets every transition be tested without a browser.
//!
//! INVARIANTS
//! ==========
//! - At most one modal (`Blocked` or `Decision`) is open at a time.
//! - `begin` is rejected while a precheck or the final submission is in
//!   flight, so a double click cannot start a second round-trip.
//! - The native submission is released at most once per accepted decision.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use crate::net::api::ApiError;
use crate::net::types::{DetectedLogo, LogoAnalysis, PrecheckReport, ScoreBreakdown, Verdict};
use crate::state::upload::UploadSelection;

pub const CHECKING_MESSAGE: &str = "Checking document authenticity...";
pub const ANALYZING_MESSAGE: &str = "Analyzing your document...";
pub const BLURRY_FALLBACK_MESSAGE: &str =
    "The uploaded document is too blurry to read reliably. Please upload a clearer scan or photo.";
pub const PRECHECK_FAILED_ALERT: &str =
    "We couldn't check your document right now. Please try again in a moment.";
pub const EMPTY_SUBMISSION_ALERT: &str = "Please upload a PDF or paste some text first.";
pub const SUBMIT_FAILED_ALERT: &str = "We couldn't send your document for analysis. Please try again.";
pub const DEFAULT_MAX_PAGES: u32 = 15;

/// Why a submission attempt was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A precheck or the final submission is already running.
    InFlight,
    /// A verdict modal is still waiting for the user.
    ModalOpen,
    /// Neither a file nor pasted text was provided.
    Empty,
}

/// Side effect the caller must run after an accepted `begin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStep {
    /// Send the form to the precheck endpoint, then call `resolve_precheck`.
    Precheck,
    /// Submit the form natively right away (text-only submissions).
    Submit,
}

/// Verdicts that stop the submission with a single "choose another file" action.
#[derive(Clone, Debug, PartialEq)]
pub enum BlockedNotice {
    Blurry { message: String },
    PageLimit { page_count: u32, max_pages: u32, recommendation: Option<String> },
}

/// Visual treatment of a verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerdictTone {
    Authentic,
    Caution,
    Danger,
    Neutral,
}

impl VerdictTone {
    pub fn for_verdict(verdict: &Verdict) -> Self {
        match verdict {
            Verdict::Real => Self::Authentic,
            Verdict::Suspicious | Verdict::PageLimitExceeded => Self::Caution,
            Verdict::Fake | Verdict::Blurry => Self::Danger,
            Verdict::Unknown(_) => Self::Neutral,
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Authentic => "verdict--real",
            Self::Caution => "verdict--suspicious",
            Self::Danger => "verdict--fake",
            Self::Neutral => "verdict--unknown",
        }
    }
}

/// Logo section of the decision modal. Only built when logos were detected.
#[derive(Clone, Debug, PartialEq)]
pub struct LogoBreakdown {
    pub total_detected: u32,
    pub authentic: Vec<DetectedLogo>,
    pub suspicious: Vec<DetectedLogo>,
    pub unknown: Vec<DetectedLogo>,
    pub risk_factors: Vec<String>,
    /// Rounded and clamped to 0-100.
    pub score: Option<u8>,
}

impl LogoBreakdown {
    /// `None` when the analysis is absent or reports zero detected logos.
    pub fn from_analysis(analysis: Option<&LogoAnalysis>) -> Option<Self> {
        let analysis = analysis?;
        let total_detected = analysis.total_logos_detected.filter(|n| *n > 0)?;
        Some(Self {
            total_detected,
            authentic: analysis.authentic_logos.clone(),
            suspicious: analysis.suspicious_logos.clone(),
            unknown: analysis.unknown_logos.clone(),
            risk_factors: analysis.risk_factors.clone(),
            score: analysis.logo_score.map(clamp_percent),
        })
    }

    pub fn authentic_count(&self) -> usize {
        self.authentic.len()
    }

    pub fn suspicious_count(&self) -> usize {
        self.suspicious.len()
    }

    pub fn unknown_count(&self) -> usize {
        self.unknown.len()
    }
}

/// Everything the decision modal renders for a non-blocking verdict.
#[derive(Clone, Debug, PartialEq)]
pub struct DecisionView {
    pub verdict: Verdict,
    pub tone: VerdictTone,
    pub summary: String,
    pub document_type: Option<String>,
    pub confidence: Option<u8>,
    pub score_breakdown: Option<ScoreBreakdown>,
    pub logos: Option<LogoBreakdown>,
}

/// Lifecycle position of the current submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Checking,
    Blocked(BlockedNotice),
    Decision(DecisionView),
    Submitting,
}

/// Upload form plus pre-check coordinator state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmissionState {
    pub upload: UploadSelection,
    pub phase: SubmissionPhase,
    /// Loader overlay message, `None` when hidden.
    pub loader: Option<&'static str>,
    /// Blocking alert text, `None` when dismissed.
    pub alert: Option<String>,
}

impl SubmissionState {
    /// A request is running and the submit control should be disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Checking | SubmissionPhase::Submitting)
    }

    /// Handle a form submit. The browser's default submission is always cancelled
    /// by the caller; the returned step says what to do instead.
    ///
    /// # Errors
    ///
    /// Returns `SubmitRejected` when a request is in flight, a modal is open,
    /// or the form is empty. An empty form also raises the alert.
    pub fn begin(&mut self) -> Result<SubmitStep, SubmitRejected> {
        match self.phase {
            SubmissionPhase::Checking | SubmissionPhase::Submitting => return Err(SubmitRejected::InFlight),
            SubmissionPhase::Blocked(_) | SubmissionPhase::Decision(_) => return Err(SubmitRejected::ModalOpen),
            SubmissionPhase::Idle => {}
        }

        if self.upload.has_file() {
            self.phase = SubmissionPhase::Checking;
            self.loader = Some(CHECKING_MESSAGE);
            self.alert = None;
            Ok(SubmitStep::Precheck)
        } else if self.upload.has_text {
            self.phase = SubmissionPhase::Submitting;
            self.loader = Some(ANALYZING_MESSAGE);
            self.alert = None;
            Ok(SubmitStep::Submit)
        } else {
            self.alert = Some(EMPTY_SUBMISSION_ALERT.to_owned());
            Err(SubmitRejected::Empty)
        }
    }

    /// Apply the precheck outcome. Ignored unless a precheck is running.
    pub fn resolve_precheck(&mut self, outcome: Result<PrecheckReport, ApiError>) {
        if !matches!(self.phase, SubmissionPhase::Checking) {
            return;
        }
        self.loader = None;

        let report = match outcome {
            Ok(report) => report,
            Err(_) => {
                self.phase = SubmissionPhase::Idle;
                self.alert = Some(PRECHECK_FAILED_ALERT.to_owned());
                return;
            }
        };

        self.phase = match report.verdict {
            Verdict::Blurry => SubmissionPhase::Blocked(BlockedNotice::Blurry {
                message: non_empty(report.summary).unwrap_or_else(|| BLURRY_FALLBACK_MESSAGE.to_owned()),
            }),
            Verdict::PageLimitExceeded => {
                let details = report.page_details.unwrap_or_default();
                SubmissionPhase::Blocked(BlockedNotice::PageLimit {
                    page_count: details.page_count,
                    max_pages: details.max_pages.unwrap_or(DEFAULT_MAX_PAGES),
                    recommendation: non_empty(details.recommendation).or_else(|| non_empty(report.summary)),
                })
            }
            Verdict::Real | Verdict::Suspicious | Verdict::Fake | Verdict::Unknown(_) => {
                SubmissionPhase::Decision(DecisionView {
                    tone: VerdictTone::for_verdict(&report.verdict),
                    logos: LogoBreakdown::from_analysis(report.logo_analysis.as_ref()),
                    summary: report.summary.unwrap_or_default(),
                    document_type: non_empty(report.document_type),
                    confidence: report.confidence_score.map(clamp_percent),
                    score_breakdown: report.score_breakdown,
                    verdict: report.verdict,
                })
            }
        };
    }

    /// "Continue" from a decision. Returns `true` exactly when the caller must
    /// now submit the original form.
    pub fn confirm(&mut self) -> bool {
        if !matches!(self.phase, SubmissionPhase::Decision(_)) {
            return false;
        }
        self.phase = SubmissionPhase::Submitting;
        self.loader = Some(ANALYZING_MESSAGE);
        true
    }

    /// "Cancel" from a decision. The file selection is kept.
    pub fn cancel(&mut self) {
        if matches!(self.phase, SubmissionPhase::Decision(_)) {
            self.phase = SubmissionPhase::Idle;
        }
    }

    /// Close a blocked notice. The rejected file is cleared so a new one can be picked.
    /// Returns `true` when the caller must also reset the file input element.
    pub fn acknowledge_block(&mut self) -> bool {
        if !matches!(self.phase, SubmissionPhase::Blocked(_)) {
            return false;
        }
        self.phase = SubmissionPhase::Idle;
        self.upload.clear_file();
        true
    }

    /// The native submission could not be started. Back to `Idle` with the
    /// selection kept so the user can retry.
    pub fn submission_failed(&mut self) {
        if !matches!(self.phase, SubmissionPhase::Submitting) {
            return;
        }
        self.phase = SubmissionPhase::Idle;
        self.loader = None;
        self.alert = Some(SUBMIT_FAILED_ALERT.to_owned());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}
