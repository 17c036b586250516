//! Chat widget state.
//!
//! The visible transcript is the conversation history: every send snapshots
//! the transcript (including the message just typed) into the request, so
//! there is no separate history store to drift out of sync.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::api::ApiError;
use crate::net::types::{ChatMessage, ChatRequest, ChatRole};

pub const CHAT_FALLBACK_MESSAGE: &str = "Sorry, I couldn't get a response right now.";
/// Shown in an empty transcript only. Never part of the history sent to `/chat`.
pub const CHAT_GREETING: &str = "Hi! Ask me anything about your document.";

/// State for the floating chat window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
    /// Replies still outstanding.
    pub pending: usize,
}

impl ChatState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Append the user's message and build the request for it.
    ///
    /// Returns `None` for blank input, which is not sent.
    pub fn submit_user_message(&mut self, input: &str, document_text: &str) -> Option<ChatRequest> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage { role: ChatRole::User, text: text.to_owned() });
        self.pending += 1;
        Some(ChatRequest { history: self.messages.clone(), document_text: document_text.to_owned() })
    }

    /// Append the model reply, or the fallback apology when the round-trip failed.
    pub fn resolve_reply(&mut self, outcome: Result<String, ApiError>) {
        self.pending = self.pending.saturating_sub(1);
        let text = outcome.unwrap_or_else(|_| CHAT_FALLBACK_MESSAGE.to_owned());
        self.messages.push(ChatMessage { role: ChatRole::Model, text });
    }

    pub fn is_waiting(&self) -> bool {
        self.pending > 0
    }
}
