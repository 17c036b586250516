//! Logical element roles mapped to DOM ids.
//!
//! Views bind `id=Handle::X.id()` instead of scattering string literals, and
//! browser helpers look elements up through the same table.

#[cfg(test)]
#[path = "dom_ids_test.rs"]
mod dom_ids_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handle {
    UploadForm,
    FileInput,
    UploadBox,
    LegalText,
    Loader,
    PrecheckModal,
    DocsModal,
    ChatWindow,
    ChatBody,
    ChatInput,
    SeverityChart,
    Summary,
}

impl Handle {
    pub const ALL: [Handle; 12] = [
        Handle::UploadForm,
        Handle::FileInput,
        Handle::UploadBox,
        Handle::LegalText,
        Handle::Loader,
        Handle::PrecheckModal,
        Handle::DocsModal,
        Handle::ChatWindow,
        Handle::ChatBody,
        Handle::ChatInput,
        Handle::SeverityChart,
        Handle::Summary,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Self::UploadForm => "upload-form",
            Self::FileInput => "file-input",
            Self::UploadBox => "upload-box",
            Self::LegalText => "legal-text",
            Self::Loader => "loader",
            Self::PrecheckModal => "precheck-modal",
            Self::DocsModal => "docs-modal",
            Self::ChatWindow => "chat-window",
            Self::ChatBody => "chat-body",
            Self::ChatInput => "chat-input",
            Self::SeverityChart => "severity-chart",
            Self::Summary => "summary-text",
        }
    }
}
