//! Message data model for conversations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Typed (or prompted) by the person at the keyboard.
    User,
    /// Produced by the assistant backend.
    Assistant,
}

/// Optional tag describing what an assistant message contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Plain,
    Chart,
    Insight,
    Recommendation,
}

/// Reader reaction to an assistant message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    Up,
    Down,
}

/// A single turn in the conversation.
///
/// Messages are append-only: once in the store, only the `feedback`
/// field ever changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique id for the session (uuid v4).
    pub id: String,
    /// Message body. Never empty; whitespace-only input is rejected
    /// before a `Message` is constructed.
    pub text: String,
    /// Who authored the message.
    pub sender: Sender,
    /// Creation time.
    pub timestamp: DateTime<Utc>,
    /// Content tag, set on some assistant messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<MessageKind>,
    /// Reader reaction; starts unset and is never cleared once set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
}

impl Message {
    /// Create a new user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            kind: None,
            feedback: None,
        }
    }

    /// Create a new assistant message with a content tag.
    pub fn assistant(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            sender: Sender::Assistant,
            timestamp: Utc::now(),
            kind: Some(kind),
            feedback: None,
        }
    }

    /// Whether this message was authored by the assistant.
    pub fn is_assistant(&self) -> bool {
        self.sender == Sender::Assistant
    }
}
