use super::*;

#[test]
fn default_selection_shows_prompt_copy() {
    let upload = UploadSelection::default();
    assert!(upload.is_empty());
    assert_eq!(upload.heading(), DEFAULT_UPLOAD_HEADING);
    assert_eq!(upload.hint(), DEFAULT_UPLOAD_HINT);
}

#[test]
fn selecting_a_file_shows_its_name() {
    let mut upload = UploadSelection::default();
    upload.select_file(Some("lease.pdf".to_owned()));
    assert_eq!(upload.heading(), "lease.pdf");
    assert_eq!(upload.hint(), FILE_SELECTED_HINT);
    assert!(!upload.is_empty());
}

#[test]
fn selecting_nothing_clears_the_file() {
    let mut upload = UploadSelection::default();
    upload.select_file(Some("lease.pdf".to_owned()));
    upload.select_file(None);
    assert!(!upload.has_file());
    upload.select_file(Some("   ".to_owned()));
    assert!(!upload.has_file());
}

#[test]
fn clear_file_resets_copy_but_keeps_text() {
    let mut upload = UploadSelection::default();
    upload.select_file(Some("nda.pdf".to_owned()));
    upload.set_text("Some clause");
    upload.clear_file();
    assert_eq!(upload.heading(), DEFAULT_UPLOAD_HEADING);
    assert_eq!(upload.hint(), DEFAULT_UPLOAD_HINT);
    assert!(upload.has_text);
}

#[test]
fn whitespace_text_does_not_count() {
    let mut upload = UploadSelection::default();
    upload.set_text("  \n\t ");
    assert!(upload.is_empty());
}
