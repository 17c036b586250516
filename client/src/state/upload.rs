//! Upload-area selection state.
//!
//! Tracks what the user has queued for analysis (a picked file, pasted text,
//! or both) and derives the upload box copy from it.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

pub const DEFAULT_UPLOAD_HEADING: &str = "Upload your document";
pub const DEFAULT_UPLOAD_HINT: &str = "Click here to choose a PDF file";
pub const FILE_SELECTED_HINT: &str = "File selected. Ready to simplify!";

/// Current contents of the upload form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadSelection {
    pub file_name: Option<String>,
    pub has_text: bool,
}

impl UploadSelection {
    /// Record a file picker change. An empty file list clears the selection.
    pub fn select_file(&mut self, name: Option<String>) {
        self.file_name = name.filter(|n| !n.trim().is_empty());
    }

    pub fn clear_file(&mut self) {
        self.file_name = None;
    }

    pub fn set_text(&mut self, text: &str) {
        self.has_text = !text.trim().is_empty();
    }

    pub fn has_file(&self) -> bool {
        self.file_name.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_file() && !self.has_text
    }

    /// Upload box heading: the file name once one is picked.
    pub fn heading(&self) -> &str {
        self.file_name.as_deref().unwrap_or(DEFAULT_UPLOAD_HEADING)
    }

    pub fn hint(&self) -> &'static str {
        if self.has_file() { FILE_SELECTED_HINT } else { DEFAULT_UPLOAD_HINT }
    }
}
