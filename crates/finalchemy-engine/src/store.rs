//! Conversation store: the append-only message list and typing flag.
//!
//! All mutation goes through [`ConversationStore::apply`], a
//! reducer-style update function. The named methods (`submit`,
//! `deliver`, `set_feedback`) are thin wrappers that build the
//! corresponding [`StoreEvent`].

use crate::message::{Feedback, Message};

/// Events that mutate the conversation store.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// Text was submitted from the input form (or a suggested prompt).
    Submitted { text: String },
    /// A deferred assistant reply arrived.
    ReplyDelivered { reply: Message },
    /// Feedback was given on a message.
    FeedbackSet { id: String, value: Feedback },
}

/// In-memory conversation state.
///
/// The message list is append-only for the lifetime of the session;
/// only the per-message `feedback` field is mutable after insertion.
/// Ordering is strict insertion order.
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    messages: Vec<Message>,
    typing: bool,
}

impl ConversationStore {
    /// Create an empty store (session start: no messages, not typing).
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Whether an assistant reply is pending.
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Whether the conversation has not started yet. The welcome panel
    /// and suggested prompts are shown only while this holds.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Look up a message by id.
    pub fn get(&self, id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Apply an event to the store.
    pub fn apply(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::Submitted { text } => {
                // Whitespace-only submissions are silently ignored;
                // anything else is stored exactly as typed.
                if text.trim().is_empty() {
                    return;
                }
                tracing::debug!(len = self.messages.len() + 1, "user message appended");
                self.messages.push(Message::user(text));
                self.typing = true;
            }
            StoreEvent::ReplyDelivered { reply } => {
                tracing::debug!(id = %reply.id, "assistant reply delivered");
                self.messages.push(reply);
                // Every delivery clears the flag, including when other
                // replies are still in flight (last-writer-wins).
                self.typing = false;
            }
            StoreEvent::FeedbackSet { id, value } => {
                match self.messages.iter_mut().find(|m| m.id == id) {
                    Some(msg) => msg.feedback = Some(value),
                    None => tracing::debug!(%id, "feedback for unknown message ignored"),
                }
            }
        }
    }

    /// Submit user input. Returns the appended message when the input
    /// was nonempty, so the caller can schedule the deferred reply;
    /// whitespace-only input is a silent no-op returning `None`.
    pub fn submit(&mut self, text: impl Into<String>) -> Option<Message> {
        let before = self.messages.len();
        self.apply(StoreEvent::Submitted { text: text.into() });
        if self.messages.len() > before {
            self.messages.last().cloned()
        } else {
            None
        }
    }

    /// Deliver an assistant reply.
    pub fn deliver(&mut self, reply: Message) {
        self.apply(StoreEvent::ReplyDelivered { reply });
    }

    /// Set feedback on a message. Unknown ids are silently ignored;
    /// setting the same value twice leaves it set (no toggle-off).
    pub fn set_feedback(&mut self, id: impl Into<String>, value: Feedback) {
        self.apply(StoreEvent::FeedbackSet {
            id: id.into(),
            value,
        });
    }
}
