//! Assistant backend boundary.
//!
//! The real collaborator this prototype stands in for would take the
//! full prior message sequence and asynchronously return a reply.
//! [`deliver_reply`] has that shape; the current implementation ignores
//! its input, waits a fixed delay, and returns a canned insight.

use crate::message::{Message, MessageKind};
use std::time::Duration;
use tokio::time::sleep;

/// Fixed delay before the stubbed reply is produced.
pub const REPLY_DELAY: Duration = Duration::from_millis(1500);

/// Reply text the stub always produces.
pub const CANNED_REPLY_TEXT: &str = "Here's your analysis based on current market data...";

/// Errors from the assistant backend.
///
/// The canned stub never fails; the variants describe the failures a
/// real backend would surface through the same signature.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    /// The backend rejected or could not process the request.
    #[error("assistant backend error: {0}")]
    Backend(String),

    /// The backend did not respond in time.
    #[error("assistant timed out after {0:?}")]
    Timeout(Duration),
}

/// Build the canned assistant reply (no delay).
pub fn canned_reply() -> Message {
    Message::assistant(CANNED_REPLY_TEXT, MessageKind::Insight)
}

/// Produce the deferred reply for one submission.
///
/// Waits [`REPLY_DELAY`], then resolves with the canned reply. Each
/// submission schedules its own independent call; there is no
/// cancellation or coalescing across overlapping submissions. The
/// history parameter is what a real backend would consume; the stub
/// ignores it.
pub async fn deliver_reply(history: Vec<Message>) -> Result<Message, AssistantError> {
    tracing::debug!(turns = history.len(), "reply scheduled");
    sleep(REPLY_DELAY).await;
    Ok(canned_reply())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, timeout};

    #[test]
    fn test_canned_reply_shape() {
        let reply = canned_reply();
        assert!(reply.is_assistant());
        assert_eq!(reply.text, CANNED_REPLY_TEXT);
        assert_eq!(reply.kind, Some(MessageKind::Insight));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_resolves_after_fixed_delay() {
        let mut task = std::pin::pin!(deliver_reply(Vec::new()));

        // First poll arms the timer; not resolved before the delay.
        let early = timeout(Duration::from_millis(0), task.as_mut()).await;
        assert!(early.is_err(), "reply resolved too early");

        advance(Duration::from_millis(1499)).await;
        let early = timeout(Duration::from_millis(0), task.as_mut()).await;
        assert!(early.is_err(), "reply resolved before the full delay");

        advance(Duration::from_millis(1)).await;
        let reply = task.await.unwrap();
        assert_eq!(reply.text, CANNED_REPLY_TEXT);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_ignores_history() {
        let history = vec![Message::user("Compare tech stocks")];
        let task = tokio::spawn(deliver_reply(history));
        advance(REPLY_DELAY).await;
        let reply = task.await.unwrap().unwrap();
        assert_eq!(reply.kind, Some(MessageKind::Insight));
        assert_eq!(reply.text, CANNED_REPLY_TEXT);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_replies_resolve_in_submission_order() {
        let first = tokio::spawn(deliver_reply(Vec::new()));
        tokio::task::yield_now().await; // let the task arm its timer
        advance(Duration::from_millis(100)).await;
        let second = tokio::spawn(deliver_reply(Vec::new()));
        tokio::task::yield_now().await;

        advance(Duration::from_millis(1400)).await;
        tokio::task::yield_now().await;
        assert!(first.is_finished());
        assert!(!second.is_finished());

        advance(Duration::from_millis(100)).await;
        tokio::task::yield_now().await;
        assert!(second.is_finished());
    }
}
