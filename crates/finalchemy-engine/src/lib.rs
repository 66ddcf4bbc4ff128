//! finalchemy-engine: Headless conversation state machine
//!
//! This crate provides the core state for the FINAlchemy chat
//! prototype, including:
//! - The message data model (sender, kind, feedback)
//! - The append-only conversation store with a reducer-style update
//! - The stubbed assistant backend (fixed-delay canned reply)

pub mod assistant;
pub mod message;
pub mod store;

// Re-export commonly used types
pub use assistant::{canned_reply, deliver_reply, AssistantError, CANNED_REPLY_TEXT, REPLY_DELAY};
pub use message::{Feedback, Message, MessageKind, Sender};
pub use store::{ConversationStore, StoreEvent};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
