//! Wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! The backend is an external collaborator, so every optional field here is
//! `#[serde(default)]` and enum-like strings are parsed leniently into closed
//! Rust enums. A surprising payload degrades to an explicit fallback variant
//! instead of a decode failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// PRECHECK
// =============================================================================

/// Backend-assigned classification of an uploaded document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Real,
    Suspicious,
    Fake,
    /// Scan too blurry to analyze. Accepts both `BLURRY` and `BLURRED`.
    Blurry,
    PageLimitExceeded,
    /// Any verdict string this client does not know, kept verbatim.
    Unknown(String),
}

impl Default for Verdict {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl Verdict {
    /// Parse a backend verdict string. Case and surrounding whitespace are ignored.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "REAL" => Self::Real,
            "SUSPICIOUS" => Self::Suspicious,
            "FAKE" => Self::Fake,
            "BLURRY" | "BLURRED" => Self::Blurry,
            "PAGE_LIMIT_EXCEEDED" => Self::PageLimitExceeded,
            _ => Self::Unknown(trimmed.to_owned()),
        }
    }

    /// Verdicts that stop the submission outright instead of asking the user.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Blurry | Self::PageLimitExceeded)
    }

    /// Short user-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Real => "Authentic",
            Self::Suspicious => "Suspicious",
            Self::Fake => "Likely Fake",
            Self::Blurry => "Too Blurry",
            Self::PageLimitExceeded => "Page Limit Exceeded",
            Self::Unknown(_) => "Unverified",
        }
    }
}

impl<'de> Deserialize<'de> for Verdict {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Result of `POST /check-authenticity`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PrecheckReport {
    #[serde(default)]
    pub verdict: Verdict,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub document_type: Option<String>,
    /// Fused confidence, 0-100.
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub score_breakdown: Option<ScoreBreakdown>,
    #[serde(default)]
    pub logo_analysis: Option<LogoAnalysis>,
    #[serde(default)]
    pub page_details: Option<PageDetails>,
}

/// Per-signal scores behind the fused confidence value.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(default)]
    pub precheck_score: Option<f64>,
    #[serde(default)]
    pub authenticity_score: Option<f64>,
    #[serde(default)]
    pub consistency_score: Option<f64>,
    #[serde(default)]
    pub credibility_score: Option<f64>,
}

/// Logo detection results attached to a precheck report.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LogoAnalysis {
    #[serde(default)]
    pub total_logos_detected: Option<u32>,
    #[serde(default)]
    pub authentic_logos: Vec<DetectedLogo>,
    #[serde(default)]
    pub suspicious_logos: Vec<DetectedLogo>,
    #[serde(default)]
    pub unknown_logos: Vec<DetectedLogo>,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    /// Overall logo authenticity score, nominally 0-100.
    #[serde(default, alias = "overall_score", alias = "score")]
    pub logo_score: Option<f64>,
}

/// A single detected logo. Unknown logos usually carry no company.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DetectedLogo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
}

/// Page counts reported alongside a `PAGE_LIMIT_EXCEEDED` verdict.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PageDetails {
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub max_pages: Option<u32>,
    #[serde(default)]
    pub recommendation: Option<String>,
}

// =============================================================================
// CHAT
// =============================================================================

/// Author of a chat transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One transcript entry, as sent in the chat history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Body of `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub history: Vec<ChatMessage>,
    pub document_text: String,
}

/// Response of `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

// =============================================================================
// RISKS
// =============================================================================

/// Risk severity. Anything the backend sends outside low/medium/high counts as medium.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    High,
    #[default]
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Self::High,
            "low" => Self::Low,
            _ => Self::Medium,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// One risk extracted from the analyzed document.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RiskItem {
    #[serde(default)]
    pub clause: String,
    #[serde(default)]
    pub issue: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default, rename = "type")]
    pub risk_type: String,
    #[serde(default)]
    pub worst_case: String,
    #[serde(default)]
    pub suggestion: String,
}

/// High/medium/low distribution used by the severity chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SeverityCounts {
    #[serde(default)]
    pub high: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub low: u32,
}

impl SeverityCounts {
    /// Widened so counts near `u32::MAX` cannot overflow.
    pub fn total(&self) -> u64 {
        u64::from(self.high) + u64::from(self.medium) + u64::from(self.low)
    }

    pub fn get(&self, severity: Severity) -> u32 {
        match severity {
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}

/// Aggregate counts for the result page charts.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RiskStats {
    #[serde(default)]
    pub severity: SeverityCounts,
    #[serde(default, rename = "type")]
    pub by_type: BTreeMap<String, u32>,
}

/// Response of `GET /risks.json`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RiskReport {
    #[serde(default)]
    pub stats: RiskStats,
    #[serde(default)]
    pub risks: Vec<RiskItem>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub document_text: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}
