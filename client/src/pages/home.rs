//! Home page: document input form and the upload pre-check flow.
//!
//! The form posts natively to `/analyze`. Its `submit` event is always
//! intercepted; `SubmissionState::begin` decides whether to run the precheck
//! first, submit right away, or refuse.

use leptos::prelude::*;

use crate::components::docs_modal::DocsModal;
use crate::components::input_tabs::InputTabs;
use crate::components::loader_overlay::LoaderOverlay;
use crate::components::precheck_modal::PrecheckModal;
use crate::components::upload_box::UploadBox;
use crate::net::api::ANALYZE_ENDPOINT;
use crate::state::submission::{SubmissionState, SubmitStep};
use crate::state::ui::{InputTab, TARGET_LANGUAGES, UiState};
use crate::util::browser;
use crate::util::dom_ids::Handle;

#[component]
pub fn HomePage() -> impl IntoView {
    let submission = expect_context::<RwSignal<SubmissionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    Effect::new(move || {
        let Some(message) = submission.with(|s| s.alert.clone()) else {
            return;
        };
        browser::alert(&message);
        submission.update(SubmissionState::dismiss_alert);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(step) = submission.try_update(SubmissionState::begin) else {
            return;
        };
        match step {
            Ok(SubmitStep::Precheck) => start_precheck(submission),
            Ok(SubmitStep::Submit) => {
                if !browser::submit_upload_form() {
                    submission.update(SubmissionState::submission_failed);
                }
            }
            Err(rejected) => leptos::logging::log!("submission refused: {rejected:?}"),
        }
    };

    let on_text_input = move |ev| {
        let text = event_target_value(&ev);
        submission.update(|s| s.upload.set_text(&text));
    };

    let tab_hidden = move |tab: InputTab| move || ui.with(|u| u.input_tab != tab);
    let close_docs = Callback::new(move |()| ui.update(|u| u.docs_open = false));

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"LegalEase"</h1>
                <p class="home-page__tagline">"Legal documents, in plain language."</p>
                <button type="button" class="btn btn--link" on:click=move |_| ui.update(|u| u.docs_open = true)>
                    "Why LegalEase?"
                </button>
            </header>

            <form
                class="upload-form"
                id={Handle::UploadForm.id()}
                action=ANALYZE_ENDPOINT
                method="post"
                enctype="multipart/form-data"
                on:submit=on_submit
            >
                <InputTabs/>
                <div class="input-panel" hidden=tab_hidden(InputTab::Upload)>
                    <UploadBox/>
                </div>
                <div class="input-panel" hidden=tab_hidden(InputTab::Paste)>
                    <textarea
                        class="input-panel__text"
                        name="legal_text"
                        id={Handle::LegalText.id()}
                        rows="12"
                        placeholder="Paste the text of your contract here..."
                        on:input=on_text_input
                    ></textarea>
                </div>
                <label class="upload-form__language">
                    "Output language"
                    <select name="target_language">
                        {TARGET_LANGUAGES
                            .iter()
                            .map(|lang| view! { <option value=*lang>{*lang}</option> })
                            .collect_view()}
                    </select>
                </label>
                <button
                    type="submit"
                    class="btn btn--primary upload-form__submit"
                    disabled=move || submission.with(SubmissionState::is_busy)
                >
                    "Simplify"
                </button>
            </form>

            <LoaderOverlay/>
            <PrecheckModal/>
            <Show when=move || ui.with(|u| u.docs_open)>
                <DocsModal on_close=close_docs/>
            </Show>
        </div>
    }
}

/// Send the form to the precheck endpoint and feed the outcome back.
fn start_precheck(submission: RwSignal<SubmissionState>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(form) = browser::upload_form_data() else {
            let missing = crate::net::api::ApiError::Transport("upload form unavailable".to_owned());
            submission.update(|s| s.resolve_precheck(Err(missing)));
            return;
        };
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::check_authenticity(form).await;
            if let Err(e) = &outcome {
                leptos::logging::warn!("authenticity precheck failed: {e}");
            }
            submission.update(|s| s.resolve_precheck(outcome));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submission;
    }
}
