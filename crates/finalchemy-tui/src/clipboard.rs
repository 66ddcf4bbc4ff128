//! Best-effort clipboard export.
//!
//! Clipboard failures are logged, never surfaced: the copy action is
//! fire-and-forget from the UI's point of view.

/// Copy text to the system clipboard. Returns whether the write
/// succeeded, so the caller can pick a notification message.
pub fn copy_text(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text.to_owned()) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("clipboard write failed: {e}");
                false
            }
        },
        Err(e) => {
            tracing::warn!("clipboard unavailable: {e}");
            false
        }
    }
}
