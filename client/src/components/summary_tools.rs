//! Summary panel with copy and highlight utilities.

use leptos::prelude::*;

use crate::state::results::ResultsState;
use crate::util::browser;
use crate::util::dom_ids::Handle;
use crate::util::highlight::{active_terms, highlight_segments};

#[cfg(feature = "hydrate")]
const COPIED_RESET_MS: u32 = 2000;

#[component]
pub fn SummaryTools() -> impl IntoView {
    let results = expect_context::<RwSignal<ResultsState>>();
    let copied = RwSignal::new(false);

    let on_copy = move |_| {
        let Some(text) = results.with_untracked(|r| r.summary().map(str::to_owned)) else {
            return;
        };
        browser::copy_to_clipboard(&text);
        copied.set(true);

        #[cfg(feature = "hydrate")]
        gloo_timers::callback::Timeout::new(COPIED_RESET_MS, move || copied.set(false)).forget();
    };

    let segments = move || {
        results.with(|r| {
            let text = r.summary().unwrap_or_default();
            let terms = active_terms(r.highlight_key_terms, &r.highlight_query);
            highlight_segments(text, &terms)
        })
    };

    view! {
        <section class="summary">
            <div class="summary__toolbar">
                <h2>"Summary"</h2>
                <button type="button" class="btn summary__copy" on:click=on_copy>
                    {move || if copied.get() { "Copied!" } else { "Copy" }}
                </button>
                <label class="summary__toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || results.with(|r| r.highlight_key_terms)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            results.update(|r| r.highlight_key_terms = checked);
                        }
                    />
                    "Highlight key terms"
                </label>
                <input
                    class="summary__query"
                    type="search"
                    placeholder="Highlight a word..."
                    prop:value=move || results.with(|r| r.highlight_query.clone())
                    on:input=move |ev| {
                        let query = event_target_value(&ev);
                        results.update(|r| r.highlight_query = query);
                    }
                />
            </div>
            <div class="summary__text" id={Handle::Summary.id()}>
                {move || {
                    segments()
                        .into_iter()
                        .map(|seg| {
                            if seg.highlighted {
                                view! { <mark>{seg.text}</mark> }.into_any()
                            } else {
                                seg.text.into_any()
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
