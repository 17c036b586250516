//! Clickable upload area wrapping the hidden PDF file input.

use leptos::prelude::*;

use crate::state::submission::SubmissionState;
use crate::util::browser;
use crate::util::dom_ids::Handle;

/// Multipart field name the backend reads the PDF from.
pub const FILE_FIELD: &str = "pdf_file";

#[component]
pub fn UploadBox() -> impl IntoView {
    let submission = expect_context::<RwSignal<SubmissionState>>();

    let on_change = move |_| {
        let name = browser::selected_file_name();
        submission.update(|s| s.upload.select_file(name));
    };

    view! {
        <div
            class="upload-box"
            class:upload-box--selected=move || submission.with(|s| s.upload.has_file())
            id=Handle::UploadBox.id()
            on:click=move |_| browser::open_file_picker()
        >
            <h3>{move || submission.with(|s| s.upload.heading().to_owned())}</h3>
            <p>{move || submission.with(|s| s.upload.hint())}</p>
            <input
                type="file"
                accept=".pdf,application/pdf"
                name=FILE_FIELD
                id=Handle::FileInput.id()
                hidden
                on:click=move |ev| ev.stop_propagation()
                on:change=on_change
            />
        </div>
    }
}
