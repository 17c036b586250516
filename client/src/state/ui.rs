//! Local UI chrome state (input tabs, documentation modal).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the submission and chat
//! state so rendering controls can evolve independently of request flow.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Input panels on the home page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputTab {
    #[default]
    Upload,
    Paste,
}

impl InputTab {
    pub const ALL: [InputTab; 2] = [InputTab::Upload, InputTab::Paste];

    pub fn label(self) -> &'static str {
        match self {
            Self::Upload => "Upload PDF",
            Self::Paste => "Paste Text",
        }
    }
}

/// Output languages offered to the backend.
pub const TARGET_LANGUAGES: &[&str] = &["English", "Spanish", "French", "German", "Hindi", "Marathi"];

/// UI state for tabs and the documentation modal.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub input_tab: InputTab,
    pub docs_open: bool,
}
