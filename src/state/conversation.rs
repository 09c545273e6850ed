//! Active conversation state and its teardown guard.
//!
//! DESIGN
//! ======
//! The chat layout must clear the conversation exactly once when it goes
//! away. `ConversationResetGuard` owns the reset as an `FnOnce` and runs it
//! on drop, so the "exactly once" rule holds by construction rather than by
//! bookkeeping in the component.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

/// A single chat message in the active conversation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: String,
    pub text: String,
}

/// Conversation currently shown in the chat view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConversationState {
    pub id: Option<String>,
    pub name: Option<String>,
    pub messages: Vec<ChatMessage>,
}

impl ConversationState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.messages.is_empty()
    }
}

/// Runs a reset action once, when the guard is dropped.
pub struct ConversationResetGuard<F: FnOnce()> {
    reset: Option<F>,
}

impl<F: FnOnce()> ConversationResetGuard<F> {
    pub fn new(reset: F) -> Self {
        Self { reset: Some(reset) }
    }
}

impl<F: FnOnce()> Drop for ConversationResetGuard<F> {
    fn drop(&mut self) {
        if let Some(reset) = self.reset.take() {
            reset();
        }
    }
}
