//! "Why LegalEase?" documentation modal.

use leptos::prelude::*;

use crate::util::dom_ids::Handle;

struct DocSection {
    title: &'static str,
    body: &'static str,
}

const SECTIONS: &[DocSection] = &[
    DocSection {
        title: "Plain-language summaries",
        body: "Upload a contract or paste its text and get a short summary of what it actually says, without the legalese.",
    },
    DocSection {
        title: "Risk spotting",
        body: "Every clause that could cost you is flagged with a severity, the worst case, and a suggested fix.",
    },
    DocSection {
        title: "Authenticity pre-check",
        body: "Uploaded PDFs are checked for blur, page count, and signs of tampering before any analysis runs.",
    },
    DocSection {
        title: "Ask follow-up questions",
        body: "The chat assistant answers questions grounded in the document you submitted.",
    },
    DocSection {
        title: "Your language",
        body: "Results can be produced in English, Spanish, French, German, Hindi, or Marathi.",
    },
];

/// Modal overlay. Closes on the close button, a backdrop click, or Escape.
#[component]
pub fn DocsModal(on_close: Callback<()>) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--docs"
                id=Handle::DocsModal.id()
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="dialog__header">
                    <h2>"Why LegalEase?"</h2>
                    <button class="dialog__close" on:click=on_close_click title="Close">
                        "✕"
                    </button>
                </div>
                {SECTIONS
                    .iter()
                    .map(|section| {
                        view! {
                            <section class="dialog__section">
                                <h3>{section.title}</h3>
                                <p>{section.body}</p>
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
