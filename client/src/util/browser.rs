//! Browser glue for the upload form, clipboard, and alerts.
//!
//! SYSTEM CONTEXT
//! ==============
//! The submission state machine decides *what* happens; these helpers do it
//! against the live DOM. Every function is a no-op outside the hydrated
//! client so server rendering never touches `web_sys`.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

#[cfg(feature = "hydrate")]
use crate::util::dom_ids::Handle;

#[cfg(feature = "hydrate")]
fn element_by_handle<T: JsCast>(handle: Handle) -> Option<T> {
    web_sys::window()?
        .document()?
        .get_element_by_id(handle.id())?
        .dyn_into::<T>()
        .ok()
}

/// Snapshot the upload form as multipart data for the precheck request.
#[cfg(feature = "hydrate")]
pub fn upload_form_data() -> Option<web_sys::FormData> {
    let form = element_by_handle::<web_sys::HtmlFormElement>(Handle::UploadForm)?;
    web_sys::FormData::new_with_form(&form).ok()
}

/// Run the native form submission. Does not fire another `submit` event.
///
/// Returns `false` when the form is missing or the browser refused to submit.
pub fn submit_upload_form() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(form) = element_by_handle::<web_sys::HtmlFormElement>(Handle::UploadForm) else {
            log::warn!("upload form missing; native submission skipped");
            return false;
        };
        if let Err(e) = form.submit() {
            log::error!("native form submission failed: {e:?}");
            return false;
        }
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Clear the file picker so the same file can be chosen again.
pub fn reset_file_input() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(input) = element_by_handle::<web_sys::HtmlInputElement>(Handle::FileInput) {
            input.set_value("");
        }
    }
}

/// Name of the first picked file, if any.
pub fn selected_file_name() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let input = element_by_handle::<web_sys::HtmlInputElement>(Handle::FileInput)?;
        input.files()?.get(0).map(|f| f.name())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Open the file picker.
pub fn open_file_picker() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(input) = element_by_handle::<web_sys::HtmlElement>(Handle::FileInput) {
            input.click();
        }
    }
}

/// Best-effort clipboard write.
pub fn copy_to_clipboard(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(text);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
