use super::*;

// =============================================================
// Verdict
// =============================================================

#[test]
fn verdict_parses_known_values() {
    assert_eq!(Verdict::parse("REAL"), Verdict::Real);
    assert_eq!(Verdict::parse("SUSPICIOUS"), Verdict::Suspicious);
    assert_eq!(Verdict::parse("FAKE"), Verdict::Fake);
    assert_eq!(Verdict::parse("PAGE_LIMIT_EXCEEDED"), Verdict::PageLimitExceeded);
}

#[test]
fn verdict_blurry_and_blurred_are_the_same_variant() {
    assert_eq!(Verdict::parse("BLURRY"), Verdict::Blurry);
    assert_eq!(Verdict::parse("BLURRED"), Verdict::Blurry);
}

#[test]
fn verdict_parse_ignores_case_and_whitespace() {
    assert_eq!(Verdict::parse("  real \n"), Verdict::Real);
    assert_eq!(Verdict::parse("Blurred"), Verdict::Blurry);
}

#[test]
fn verdict_unrecognized_string_is_kept() {
    assert_eq!(Verdict::parse(" MAYBE "), Verdict::Unknown("MAYBE".to_owned()));
    assert_eq!(Verdict::parse("MAYBE").label(), "Unverified");
}

#[test]
fn verdict_blocking_set_is_blur_and_page_limit() {
    assert!(Verdict::Blurry.is_blocking());
    assert!(Verdict::PageLimitExceeded.is_blocking());
    assert!(!Verdict::Real.is_blocking());
    assert!(!Verdict::Suspicious.is_blocking());
    assert!(!Verdict::Fake.is_blocking());
    assert!(!Verdict::Unknown(String::new()).is_blocking());
}

// =============================================================
// PrecheckReport
// =============================================================

#[test]
fn precheck_report_decodes_full_payload() {
    let raw = r#"{
        "verdict": "SUSPICIOUS",
        "summary": "Signature block looks edited.",
        "document_type": "Contractual Documents",
        "confidence_score": 58,
        "score_breakdown": {"precheck_score": 60, "authenticity_score": 55, "consistency_score": 62, "credibility_score": 50},
        "logo_analysis": {
            "total_logos_detected": 3,
            "authentic_logos": [{"name": "Acme", "company": "Acme Corp"}],
            "suspicious_logos": [{"name": "Globex", "company": "Globex Inc"}],
            "unknown_logos": [{"name": "seal"}],
            "risk_factors": ["Low resolution logo"],
            "overall_score": 61.5
        }
    }"#;
    let report: PrecheckReport = serde_json::from_str(raw).unwrap();
    assert_eq!(report.verdict, Verdict::Suspicious);
    assert_eq!(report.summary.as_deref(), Some("Signature block looks edited."));
    assert_eq!(report.document_type.as_deref(), Some("Contractual Documents"));
    assert_eq!(report.confidence_score, Some(58.0));
    assert_eq!(report.score_breakdown.unwrap().consistency_score, Some(62.0));

    let logos = report.logo_analysis.unwrap();
    assert_eq!(logos.total_logos_detected, Some(3));
    assert_eq!(logos.authentic_logos[0].company.as_deref(), Some("Acme Corp"));
    assert!(logos.unknown_logos[0].company.is_none());
    assert_eq!(logos.logo_score, Some(61.5));
    assert_eq!(logos.risk_factors, vec!["Low resolution logo".to_owned()]);
}

#[test]
fn precheck_report_minimal_payload_defaults_optional_fields() {
    let report: PrecheckReport = serde_json::from_str(r#"{"verdict":"REAL"}"#).unwrap();
    assert_eq!(report.verdict, Verdict::Real);
    assert!(report.summary.is_none());
    assert!(report.logo_analysis.is_none());
    assert!(report.page_details.is_none());
}

#[test]
fn precheck_report_missing_verdict_is_unknown() {
    let report: PrecheckReport = serde_json::from_str(r#"{"summary":"?"}"#).unwrap();
    assert_eq!(report.verdict, Verdict::Unknown(String::new()));
}

#[test]
fn page_details_max_pages_is_optional() {
    let raw = r#"{"verdict":"PAGE_LIMIT_EXCEEDED","page_details":{"page_count":22}}"#;
    let report: PrecheckReport = serde_json::from_str(raw).unwrap();
    let details = report.page_details.unwrap();
    assert_eq!(details.page_count, 22);
    assert!(details.max_pages.is_none());
}

// =============================================================
// Chat
// =============================================================

#[test]
fn chat_request_serializes_lowercase_roles() {
    let request = ChatRequest {
        history: vec![
            ChatMessage { role: ChatRole::User, text: "Hi".to_owned() },
            ChatMessage { role: ChatRole::Model, text: "Hello".to_owned() },
        ],
        document_text: "doc".to_owned(),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "history": [{"role": "user", "text": "Hi"}, {"role": "model", "text": "Hello"}],
            "document_text": "doc"
        })
    );
}

// =============================================================
// Risks
// =============================================================

#[test]
fn severity_unknown_values_count_as_medium() {
    assert_eq!(Severity::parse("HIGH"), Severity::High);
    assert_eq!(Severity::parse("low"), Severity::Low);
    assert_eq!(Severity::parse("critical"), Severity::Medium);
    assert_eq!(Severity::parse(""), Severity::Medium);
}

#[test]
fn risk_report_decodes_stats_only_payload() {
    let raw = r#"{"stats":{"severity":{"high":2,"medium":1,"low":0},"type":{"Payment":2,"IP":1}}}"#;
    let report: RiskReport = serde_json::from_str(raw).unwrap();
    assert_eq!(report.stats.severity, SeverityCounts { high: 2, medium: 1, low: 0 });
    assert_eq!(report.stats.severity.total(), 3);
    assert_eq!(report.stats.by_type.get("Payment"), Some(&2));
    assert!(report.risks.is_empty());
}

#[test]
fn risk_report_decodes_risk_items() {
    let raw = r#"{"risks":[{"clause":"7.1","issue":"Unlimited liability","severity":"HIGH","type":"Liability","worst_case":"You pay everything","suggestion":"Negotiate a cap"}]}"#;
    let report: RiskReport = serde_json::from_str(raw).unwrap();
    let risk = &report.risks[0];
    assert_eq!(risk.severity, Severity::High);
    assert_eq!(risk.risk_type, "Liability");
    assert_eq!(report.stats, RiskStats::default());
}

#[test]
fn risk_report_empty_object_is_valid() {
    let report: RiskReport = serde_json::from_str("{}").unwrap();
    assert_eq!(report, RiskReport::default());
}
