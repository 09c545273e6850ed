use std::cell::Cell;

use super::*;

fn sample_conversation() -> ConversationState {
    ConversationState {
        id: Some("c-1".to_owned()),
        name: Some("Quarterly report".to_owned()),
        messages: vec![ChatMessage { id: "m-1".to_owned(), role: "user".to_owned(), text: "hi".to_owned() }],
    }
}

// =============================================================
// ConversationState
// =============================================================

#[test]
fn conversation_state_default_is_empty() {
    assert!(ConversationState::default().is_empty());
}

#[test]
fn reset_clears_messages_and_identity() {
    let mut state = sample_conversation();
    assert!(!state.is_empty());
    state.reset();
    assert!(state.is_empty());
    assert_eq!(state.name, None);
}

// =============================================================
// ConversationResetGuard
// =============================================================

#[test]
fn guard_does_not_reset_while_alive() {
    let calls = Cell::new(0);
    let guard = ConversationResetGuard::new(|| calls.set(calls.get() + 1));
    assert_eq!(calls.get(), 0);
    drop(guard);
    assert_eq!(calls.get(), 1);
}

#[test]
fn guard_resets_exactly_once_regardless_of_render_count() {
    let calls = Cell::new(0);
    let mut state = sample_conversation();
    {
        let _guard = ConversationResetGuard::new(|| calls.set(calls.get() + 1));
        // Re-renders touch the state repeatedly while mounted.
        for n in 0..5 {
            state.messages.push(ChatMessage { id: format!("m-{n}"), role: "user".to_owned(), text: String::new() });
        }
        assert_eq!(calls.get(), 0);
    }
    assert_eq!(calls.get(), 1);
}

#[test]
fn guard_applies_reset_to_state() {
    let state = std::cell::RefCell::new(sample_conversation());
    drop(ConversationResetGuard::new(|| state.borrow_mut().reset()));
    assert!(state.borrow().is_empty());
}
