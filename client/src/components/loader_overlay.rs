//! Fullscreen spinner shown while a request is in flight.

use leptos::prelude::*;

use crate::state::submission::SubmissionState;
use crate::util::dom_ids::Handle;

#[component]
pub fn LoaderOverlay() -> impl IntoView {
    let submission = expect_context::<RwSignal<SubmissionState>>();
    let message = move || submission.with(|s| s.loader);

    view! {
        <Show when=move || message().is_some()>
            <div class="loader-overlay" id=Handle::Loader.id() role="status" aria-live="polite">
                <div class="loader-overlay__spinner"></div>
                <p class="loader-overlay__message">{move || message().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
