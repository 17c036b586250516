//! Localized risk badge labels for the backend's output languages.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use crate::net::types::Severity;

struct Labels {
    high: &'static str,
    medium: &'static str,
    low: &'static str,
    risk: &'static str,
    issue: &'static str,
    suggestion: &'static str,
}

const ENGLISH: Labels = Labels {
    high: "High",
    medium: "Medium",
    low: "Low",
    risk: "Risk",
    issue: "Issue",
    suggestion: "Suggestion",
};

fn labels(language: &str) -> Labels {
    let lang = language.trim().to_lowercase();
    if lang.starts_with("spanish") || lang.starts_with("espa") {
        Labels { high: "Alto", medium: "Medio", low: "Bajo", risk: "Riesgo", issue: "Problema", suggestion: "Sugerencia" }
    } else if lang.starts_with("french") || lang.starts_with("fran") {
        Labels { high: "Élevé", medium: "Moyen", low: "Faible", risk: "Risque", issue: "Problème", suggestion: "Suggestion" }
    } else if lang.starts_with("german") || lang.starts_with("deut") {
        Labels { high: "Hoch", medium: "Mittel", low: "Niedrig", risk: "Risiko", issue: "Problem", suggestion: "Empfehlung" }
    } else if lang.starts_with("hindi") || lang.contains("हिन्दी") {
        Labels { high: "उच्च", medium: "मध्यम", low: "निम्न", risk: "जोखिम", issue: "मुद्दा", suggestion: "सुझाव" }
    } else if lang.starts_with("marathi") || lang.contains("मराठी") {
        Labels { high: "उच्च", medium: "मध्यम", low: "कमी", risk: "जोखीम", issue: "मुद्दा", suggestion: "सूचना" }
    } else {
        ENGLISH
    }
}

/// Badge text such as "High Risk" or "Alto Riesgo".
pub fn severity_badge(severity: Severity, language: &str) -> String {
    let l = labels(language);
    let level = match severity {
        Severity::High => l.high,
        Severity::Medium => l.medium,
        Severity::Low => l.low,
    };
    format!("{level} {}", l.risk)
}

/// Field captions for the risk body: (issue, suggestion).
pub fn field_labels(language: &str) -> (&'static str, &'static str) {
    let l = labels(language);
    (l.issue, l.suggestion)
}
