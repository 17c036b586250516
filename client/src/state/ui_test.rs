use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_shows_upload_tab() {
    let state = UiState::default();
    assert_eq!(state.input_tab, InputTab::Upload);
    assert!(!state.docs_open);
}

// =============================================================
// InputTab
// =============================================================

#[test]
fn input_tab_variants_are_distinct() {
    assert_ne!(InputTab::Upload, InputTab::Paste);
    assert_ne!(InputTab::Upload.label(), InputTab::Paste.label());
}

#[test]
fn english_is_the_first_target_language() {
    assert_eq!(TARGET_LANGUAGES.first(), Some(&"English"));
}
