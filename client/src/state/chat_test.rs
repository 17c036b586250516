use super::*;

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_is_closed_and_empty() {
    let state = ChatState::default();
    assert!(!state.open);
    assert!(state.messages.is_empty());
    assert!(!state.is_waiting());
}

#[test]
fn toggle_and_close_control_visibility() {
    let mut state = ChatState::default();
    state.toggle();
    assert!(state.open);
    state.toggle();
    assert!(!state.open);
    state.toggle();
    state.close();
    assert!(!state.open);
}

// =============================================================
// Round-trip
// =============================================================

#[test]
fn blank_input_is_not_sent() {
    let mut state = ChatState::default();
    assert!(state.submit_user_message("   ", "doc").is_none());
    assert!(state.messages.is_empty());
    assert!(!state.is_waiting());
}

#[test]
fn request_history_includes_the_new_message() {
    let mut state = ChatState::default();
    let request = state.submit_user_message("  Hi ", "The lease runs 12 months.").unwrap();
    assert_eq!(request.history, vec![ChatMessage { role: ChatRole::User, text: "Hi".to_owned() }]);
    assert_eq!(request.document_text, "The lease runs 12 months.");
    assert!(state.is_waiting());
}

#[test]
fn successful_reply_is_appended_as_model_message() {
    let mut state = ChatState::default();
    state.submit_user_message("Hi", "").unwrap();
    state.resolve_reply(Ok("Hello".to_owned()));
    assert_eq!(
        state.messages.last(),
        Some(&ChatMessage { role: ChatRole::Model, text: "Hello".to_owned() })
    );
    assert!(!state.is_waiting());
}

#[test]
fn failed_reply_appends_fallback_text() {
    let mut state = ChatState::default();
    state.submit_user_message("Hi", "").unwrap();
    state.resolve_reply(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(
        state.messages.last(),
        Some(&ChatMessage { role: ChatRole::Model, text: CHAT_FALLBACK_MESSAGE.to_owned() })
    );
}

#[test]
fn later_requests_carry_the_whole_transcript() {
    let mut state = ChatState::default();
    state.submit_user_message("What is the notice period?", "").unwrap();
    state.resolve_reply(Ok("30 days.".to_owned()));
    let request = state.submit_user_message("And the penalty?", "").unwrap();
    let roles: Vec<ChatRole> = request.history.iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![ChatRole::User, ChatRole::Model, ChatRole::User]);
}
