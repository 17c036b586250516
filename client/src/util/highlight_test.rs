use super::*;

fn joined(segments: &[HighlightSegment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

#[test]
fn no_terms_yields_single_plain_segment() {
    let segments = highlight_segments::<&str>("Plain text.", &[]);
    assert_eq!(segments, vec![HighlightSegment { text: "Plain text.".to_owned(), highlighted: false }]);
}

#[test]
fn empty_text_yields_no_segments() {
    assert!(highlight_segments("", &["payment"]).is_empty());
}

#[test]
fn matches_are_case_insensitive() {
    let segments = highlight_segments("Late PAYMENT incurs a penalty.", &["payment", "penalty"]);
    let highlighted: Vec<&str> = segments.iter().filter(|s| s.highlighted).map(|s| s.text.as_str()).collect();
    assert_eq!(highlighted, vec!["PAYMENT", "penalty"]);
}

#[test]
fn segments_concatenate_to_original() {
    let text = "Termination requires notice; liability is capped. Terminated early? No payment.";
    let segments = highlight_segments(text, KEY_TERMS);
    assert_eq!(joined(&segments), text);
    assert!(segments.iter().any(|s| s.highlighted && s.text == "Terminat"));
}

#[test]
fn longest_term_wins_at_same_position() {
    let segments = highlight_segments("penalties apply", &["penalt", "penalties"]);
    assert_eq!(segments[0], HighlightSegment { text: "penalties".to_owned(), highlighted: true });
}

#[test]
fn non_ascii_text_is_handled() {
    let text = "Pago atrasado — payment due ünd später.";
    let segments = highlight_segments(text, &["payment", "später"]);
    assert_eq!(joined(&segments), text);
    assert_eq!(segments.iter().filter(|s| s.highlighted).count(), 2);
}

#[test]
fn active_terms_combine_toggle_and_query() {
    assert!(active_terms(false, "  ").is_empty());
    assert_eq!(active_terms(false, " notice "), vec!["notice".to_owned()]);
    let terms = active_terms(true, "notice");
    assert_eq!(terms.len(), KEY_TERMS.len() + 1);
    assert_eq!(terms.last().map(String::as_str), Some("notice"));
}
