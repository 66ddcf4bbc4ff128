//! finalchemy-tui: Terminal UI for the FINAlchemy chat prototype
//!
//! This crate provides the presentation layer, including:
//! - Collapsible navigation sidebar with expandable sections
//! - Message transcript with welcome panel and suggested prompts
//! - Input bar and deferred-reply scheduling
//! - Clipboard export and feedback shortcuts

mod app;
mod clipboard;
mod event;
pub mod nav;
pub mod prompts;
#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod ui;

pub use app::{App, Focus};
pub use event::{key_to_action, Action, Event, EventHandler};
pub use finalchemy_engine;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use finalchemy_engine::{deliver_reply, AssistantError, Message, MessageKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tokio::task::JoinHandle;

/// In-flight deferred reply tasks, oldest first.
type ReplyHandles = Vec<JoinHandle<Result<Message, AssistantError>>>;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_tui() -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    // 4 Hz tick rate drives the typing animation and notifications
    let mut events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut reply_handles: ReplyHandles = Vec::new();

    loop {
        terminal.draw(|frame| ui::render(app, frame))?;

        deliver_finished_replies(app, &mut reply_handles).await;

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => handle_key_event(app, key, &mut reply_handles),
                Event::Mouse(mouse) => {
                    use crossterm::event::MouseEventKind;
                    match mouse.kind {
                        MouseEventKind::ScrollUp => app.handle_action(Action::Up),
                        MouseEventKind::ScrollDown => app.handle_action(Action::Down),
                        _ => {}
                    }
                }
                Event::Tick => app.tick(),
                Event::Resize(_, _) => {
                    // Terminal will handle resize automatically
                }
            }
        }

        if app.should_quit {
            // Pending replies are simply discarded on teardown.
            for handle in &reply_handles {
                handle.abort();
            }
            break;
        }
    }

    Ok(())
}

/// Deliver completed reply tasks to the store.
///
/// Only the head of the queue is drained, so replies always land in
/// submission order (all tasks share the same fixed delay).
async fn deliver_finished_replies(app: &mut App, handles: &mut ReplyHandles) {
    while !handles.is_empty() && handles[0].is_finished() {
        let handle = handles.remove(0);
        match handle.await {
            Ok(Ok(reply)) => app.deliver(reply),
            Ok(Err(e)) => {
                // The canned stub never fails; a real backend would.
                app.deliver(Message::assistant(format!("Error: {e}"), MessageKind::Plain));
            }
            Err(_) => {} // task aborted during teardown
        }
    }
}

/// Route one key event: input-bar editing first when the chat pane is
/// focused, otherwise by action.
fn handle_key_event(app: &mut App, key: crossterm::event::KeyEvent, handles: &mut ReplyHandles) {
    if app.focus == Focus::Chat && !app.show_help && handle_chat_key(app, key, handles) {
        return;
    }

    match key_to_action(key) {
        // Suggested prompts share the submit path, and are only
        // offered while the conversation is empty. With the help
        // overlay open the key closes the overlay like any other.
        Action::Prompt(i) if !app.show_help && app.store.is_empty() => {
            if let Some(prompt) = prompts::SUGGESTED_PROMPTS.get(i) {
                schedule_submit(app, prompt.text.to_string(), handles);
            }
        }
        action => app.handle_action(action),
    }
}

/// Submit text and schedule its deferred reply task.
fn schedule_submit(app: &mut App, text: String, handles: &mut ReplyHandles) {
    if let Some(history) = app.submit_text(text) {
        handles.push(tokio::spawn(deliver_reply(history)));
    }
}

/// Handle key input for the input bar.
/// Returns true if the key was handled (should not be processed as action).
fn handle_chat_key(
    app: &mut App,
    key: crossterm::event::KeyEvent,
    handles: &mut ReplyHandles,
) -> bool {
    use crossterm::event::{KeyCode, KeyModifiers};

    // Ctrl and Alt combinations are chat-level shortcuts, not text.
    if key.modifiers.contains(KeyModifiers::CONTROL)
        || key.modifiers.contains(KeyModifiers::ALT)
    {
        return false;
    }

    match key.code {
        // Keys that should be handled as actions
        KeyCode::Tab | KeyCode::Up | KeyCode::Down | KeyCode::F(_) => false,

        // Esc discards a draft; with an empty input it falls through
        // (and quits via the action).
        KeyCode::Esc => {
            if app.input.is_empty() {
                return false;
            }
            app.input.take();
            true
        }

        // Enter sends the message
        KeyCode::Enter => {
            if let Some(history) = app.submit_input() {
                handles.push(tokio::spawn(deliver_reply(history)));
            }
            true
        }

        // Text input
        KeyCode::Char(c) => {
            app.input.insert(c);
            true
        }
        KeyCode::Backspace => {
            app.input.backspace();
            true
        }
        KeyCode::Delete => {
            app.input.delete();
            true
        }
        KeyCode::Left => {
            app.input.move_left();
            true
        }
        KeyCode::Right => {
            app.input.move_right();
            true
        }
        KeyCode::Home => {
            app.input.move_home();
            true
        }
        KeyCode::End => {
            app.input.move_end();
            true
        }

        _ => false,
    }
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_version() {
        let version = tui_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}

/// End-to-end flow tests driving the key routing and reply scheduling.
#[cfg(test)]
mod flow_tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use finalchemy_engine::{MessageKind, Sender, REPLY_DELAY};
    use tokio::time::advance;

    fn press(app: &mut App, handles: &mut ReplyHandles, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE), handles);
    }

    fn type_text(app: &mut App, handles: &mut ReplyHandles, text: &str) {
        for c in text.chars() {
            press(app, handles, KeyCode::Char(c));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_typed_submit_then_deferred_reply() {
        let mut app = App::new();
        let mut handles = ReplyHandles::new();

        type_text(&mut app, &mut handles, "Analyze my portfolio risk");
        press(&mut app, &mut handles, KeyCode::Enter);

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.messages()[0].text, "Analyze my portfolio risk");
        assert!(app.store.is_typing());
        assert!(app.input.is_empty());
        assert_eq!(handles.len(), 1);

        tokio::task::yield_now().await;
        advance(REPLY_DELAY).await;
        tokio::task::yield_now().await;

        deliver_finished_replies(&mut app, &mut handles).await;
        assert_eq!(app.store.len(), 2);
        assert!(!app.store.is_typing());
        assert_eq!(app.store.messages()[1].kind, Some(MessageKind::Insight));
        assert!(handles.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_on_empty_input_schedules_nothing() {
        let mut app = App::new();
        let mut handles = ReplyHandles::new();
        press(&mut app, &mut handles, KeyCode::Enter);
        assert_eq!(app.store.len(), 0);
        assert!(handles.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_whitespace_draft_survives_rejected_submit() {
        let mut app = App::new();
        let mut handles = ReplyHandles::new();
        type_text(&mut app, &mut handles, "   ");
        press(&mut app, &mut handles, KeyCode::Enter);
        assert_eq!(app.store.len(), 0);
        assert!(handles.is_empty());
        assert_eq!(app.input.content(), "   ");
    }

    #[tokio::test(start_paused = true)]
    async fn test_prompt_key_closes_help_instead_of_submitting() {
        let mut app = App::new();
        let mut handles = ReplyHandles::new();
        app.handle_action(Action::Help);
        assert!(app.show_help);

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('1'), KeyModifiers::ALT),
            &mut handles,
        );

        assert!(!app.show_help);
        assert_eq!(app.store.len(), 0);
        assert!(handles.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_prompt_shortcut_shares_submit_path() {
        let mut app = App::new();
        let mut handles = ReplyHandles::new();

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('1'), KeyModifiers::ALT),
            &mut handles,
        );

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.messages()[0].sender, Sender::User);
        assert_eq!(
            app.store.messages()[0].text,
            prompts::SUGGESTED_PROMPTS[0].text
        );
        assert!(app.store.is_typing());
        assert_eq!(handles.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_prompt_shortcut_inert_once_conversation_started() {
        let mut app = App::new();
        let mut handles = ReplyHandles::new();

        type_text(&mut app, &mut handles, "hello");
        press(&mut app, &mut handles, KeyCode::Enter);
        assert_eq!(app.store.len(), 1);

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('2'), KeyModifiers::ALT),
            &mut handles,
        );
        assert_eq!(app.store.len(), 1);
        assert_eq!(handles.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_submits_deliver_in_order() {
        let mut app = App::new();
        let mut handles = ReplyHandles::new();

        type_text(&mut app, &mut handles, "first");
        press(&mut app, &mut handles, KeyCode::Enter);
        tokio::task::yield_now().await;
        advance(std::time::Duration::from_millis(500)).await;

        type_text(&mut app, &mut handles, "second");
        press(&mut app, &mut handles, KeyCode::Enter);
        tokio::task::yield_now().await;

        assert_eq!(handles.len(), 2);
        assert!(app.store.is_typing());

        // First reply is due; the second is still pending.
        advance(std::time::Duration::from_millis(1000)).await;
        tokio::task::yield_now().await;
        deliver_finished_replies(&mut app, &mut handles).await;
        assert_eq!(app.store.len(), 3);
        assert_eq!(handles.len(), 1);
        // Typing cleared by the first delivery even with one in flight.
        assert!(!app.store.is_typing());

        advance(std::time::Duration::from_millis(500)).await;
        tokio::task::yield_now().await;
        deliver_finished_replies(&mut app, &mut handles).await;
        assert_eq!(app.store.len(), 4);
        assert!(handles.is_empty());

        let senders: Vec<Sender> = app.store.messages().iter().map(|m| m.sender).collect();
        assert_eq!(
            senders,
            vec![
                Sender::User,
                Sender::User,
                Sender::Assistant,
                Sender::Assistant
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_esc_discards_draft_then_quits() {
        let mut app = App::new();
        let mut handles = ReplyHandles::new();

        type_text(&mut app, &mut handles, "draft");
        press(&mut app, &mut handles, KeyCode::Esc);
        assert!(app.input.is_empty());
        assert!(!app.should_quit);

        press(&mut app, &mut handles, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_chars_type_while_reply_pending() {
        let mut app = App::new();
        let mut handles = ReplyHandles::new();

        type_text(&mut app, &mut handles, "first");
        press(&mut app, &mut handles, KeyCode::Enter);
        assert!(app.store.is_typing());

        // Input stays usable while the reply is in flight.
        type_text(&mut app, &mut handles, "second");
        assert_eq!(app.input.content(), "second");
    }
}

/// Render tests for the composed frame.
#[cfg(test)]
mod render_tests {
    use super::*;
    use crate::test_utils::{create_test_app, render_app_to_string};
    use finalchemy_engine::canned_reply;

    #[test]
    fn test_welcome_panel_shown_only_while_empty() {
        let mut app = create_test_app();
        let out = render_app_to_string(&app);
        assert!(out.contains("Welcome to FINAlchemy!"));
        assert!(out.contains("Analyze my portfolio risk"));

        app.submit_text("hello");
        let out = render_app_to_string(&app);
        assert!(!out.contains("Welcome to FINAlchemy!"));
        assert!(out.contains("hello"));
    }

    #[test]
    fn test_frame_shows_sidebar_input_and_hints() {
        let app = create_test_app();
        let out = render_app_to_string(&app);
        assert!(out.contains("FINAlchemy"));
        assert!(out.contains("News & Updates"));
        assert!(out.contains("Ask about market trends"));
        assert!(out.contains("F1"));
    }

    #[test]
    fn test_typing_indicator_in_full_frame() {
        let mut app = create_test_app();
        app.submit_text("Show market trends this week");
        let out = render_app_to_string(&app);
        assert!(out.contains("FINAlchemy is thinking"));

        app.deliver(canned_reply());
        let out = render_app_to_string(&app);
        assert!(!out.contains("is thinking"));
        assert!(out.contains("Here's your analysis"));
    }

    #[test]
    fn test_collapsed_sidebar_frame() {
        let mut app = create_test_app();
        app.handle_action(Action::ToggleSidebar);
        let out = render_app_to_string(&app);
        assert!(!out.contains("News & Updates"));
    }

    #[test]
    fn test_help_overlay_renders() {
        let mut app = create_test_app();
        app.handle_action(Action::Help);
        let out = render_app_to_string(&app);
        assert!(out.contains("Help"));
        assert!(out.contains("Collapse/expand sidebar"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = create_test_app();
        app.submit_text("hello");
        let _ = crate::test_utils::render_app_to_string_sized(&app, 20, 6);
    }
}
