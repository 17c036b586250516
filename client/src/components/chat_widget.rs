//! Floating document chat: toggle button plus message window.

use leptos::prelude::*;

use crate::net::types::ChatRole;
use crate::state::chat::{CHAT_GREETING, ChatState};
use crate::util::dom_ids::Handle;

/// Chat window grounded on `document_text`, which is read at send time.
#[component]
pub fn ChatWidget(#[prop(into)] document_text: Signal<String>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let body_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = body_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let context = document_text.get_untracked();
        let Some(request) = chat.try_update(|c| c.submit_user_message(&text, &context)).flatten() else {
            return;
        };
        input.set(String::new());

        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::send_chat(&request).await;
            if let Err(e) = &outcome {
                leptos::logging::error!("chat request failed: {e}");
            }
            chat.update(|c| c.resolve_reply(outcome));
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let is_open = move || chat.with(|c| c.open);

    view! {
        <button
            type="button"
            class="chat-toggle"
            class:chat-toggle--open=is_open
            title="Ask about your document"
            on:click=move |_| chat.update(ChatState::toggle)
        >
            "💬"
        </button>
        <div class="chat-window" class:chat-window--open=is_open id={Handle::ChatWindow.id()}>
            <div class="chat-window__header">
                <span>"Ask LegalEase"</span>
                <button type="button" class="chat-window__close" title="Close chat" on:click=move |_| chat.update(ChatState::close)>
                    "✕"
                </button>
            </div>
            <div class="chat-window__body" id={Handle::ChatBody.id()} node_ref=body_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! { <div class="chat-message chat-message--model">{CHAT_GREETING}</div> }.into_any();
                    }
                    messages
                        .into_iter()
                        .map(|msg| {
                            let is_user = msg.role == ChatRole::User;
                            view! {
                                <div class="chat-message" class:chat-message--user=is_user class:chat-message--model=!is_user>
                                    {msg.text}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
                <Show when=move || chat.with(ChatState::is_waiting)>
                    <div class="chat-message chat-message--model chat-message--typing">"..."</div>
                </Show>
            </div>
            <div class="chat-window__input-row">
                <input
                    class="chat-window__input"
                    id={Handle::ChatInput.id()}
                    type="text"
                    placeholder="Type your question..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    type="button"
                    class="btn btn--primary chat-window__send"
                    on:click=move |_| do_send()
                    disabled=move || input.get().trim().is_empty()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
