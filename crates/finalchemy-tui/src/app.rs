//! Application state and update logic for the FINAlchemy TUI.

use finalchemy_engine::{ConversationStore, Feedback, Message};

use crate::clipboard;
use crate::event::Action;
use crate::nav::NavState;
use crate::theme::Theme;
use crate::ui::widgets::TextInputState;

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Sidebar,
    #[default]
    Chat,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// Pane with keyboard focus.
    pub focus: Focus,

    /// Sidebar navigation state.
    pub nav: NavState,

    /// Conversation store (messages + typing flag).
    pub store: ConversationStore,

    /// Text input state for the input bar.
    pub input: TextInputState,

    /// Message selection cursor (for feedback/copy).
    pub selected: Option<usize>,

    /// Scroll offset for the transcript pane.
    pub transcript_scroll: usize,

    /// Tick counter for animations.
    pub tick: usize,

    /// Color palette.
    pub theme: Theme,

    /// Notification message (displayed temporarily, cleared after some ticks).
    pub notification: Option<String>,

    /// Ticks remaining until notification is cleared.
    notification_ttl: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new app instance: empty conversation, sidebar
    /// expanded, chat focused.
    pub fn new() -> Self {
        Self {
            should_quit: false,
            show_help: false,
            focus: Focus::default(),
            nav: NavState::new(),
            store: ConversationStore::new(),
            input: TextInputState::new(),
            selected: None,
            transcript_scroll: 0,
            tick: 0,
            theme: Theme::default(),
            notification: None,
            notification_ttl: 0,
        }
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        // Global actions
        match action {
            Action::Quit => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            Action::Help => {
                self.show_help = !self.show_help;
                return;
            }
            _ => {}
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return;
        }

        match action {
            Action::ToggleSidebar => self.nav.toggle_collapsed(),
            Action::FocusNext => {
                self.focus = match self.focus {
                    Focus::Sidebar => Focus::Chat,
                    Focus::Chat => Focus::Sidebar,
                };
            }
            Action::CopyMessage => self.copy_selected(),
            Action::FeedbackUp => self.feedback_selected(Feedback::Up),
            Action::FeedbackDown => self.feedback_selected(Feedback::Down),
            Action::SelectPrev => self.select_prev(),
            Action::SelectNext => self.select_next(),
            Action::Up => match self.focus {
                Focus::Sidebar => self.nav.move_up(),
                Focus::Chat => self.transcript_scroll = self.transcript_scroll.saturating_sub(1),
            },
            Action::Down => match self.focus {
                Focus::Sidebar => self.nav.move_down(),
                // Rendering clamps to content length.
                Focus::Chat => self.transcript_scroll = self.transcript_scroll.saturating_add(1),
            },
            Action::Select => {
                if self.focus == Focus::Sidebar {
                    self.nav.activate();
                }
            }
            Action::Back => match self.focus {
                Focus::Sidebar => self.focus = Focus::Chat,
                Focus::Chat => self.should_quit = true,
            },
            // Prompt(..) is routed by the event loop (it schedules a
            // reply task); Quit/Help handled above.
            Action::Prompt(_) | Action::Quit | Action::Help | Action::None => {}
        }
    }

    /// Submit text through the conversation store. Returns the full
    /// history snapshot when a message was appended, so the caller can
    /// schedule the deferred reply; whitespace-only input yields
    /// `None` and leaves everything untouched.
    pub fn submit_text(&mut self, text: impl Into<String>) -> Option<Vec<Message>> {
        self.store.submit(text)?;
        self.scroll_to_bottom();
        Some(self.store.messages().to_vec())
    }

    /// Submit the current input bar content. The buffer is only
    /// cleared when a message was actually appended; a whitespace-only
    /// draft stays in place.
    pub fn submit_input(&mut self) -> Option<Vec<Message>> {
        if self.input.content().trim().is_empty() {
            return None;
        }
        let text = self.input.take();
        self.submit_text(text)
    }

    /// Deliver an assistant reply into the store.
    pub fn deliver(&mut self, reply: Message) {
        self.store.deliver(reply);
        self.scroll_to_bottom();
    }

    /// Move the message selection cursor to the previous message,
    /// starting from the newest when nothing is selected.
    pub fn select_prev(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => self.store.len() - 1,
            Some(i) => i.saturating_sub(1),
        });
    }

    /// Move the message selection cursor to the next message.
    pub fn select_next(&mut self) {
        if self.store.is_empty() {
            return;
        }
        let last = self.store.len() - 1;
        self.selected = Some(match self.selected {
            None => last,
            Some(i) => (i + 1).min(last),
        });
    }

    /// Copy the selected message's text to the clipboard. Failure is
    /// logged, never surfaced beyond the notification text.
    fn copy_selected(&mut self) {
        let Some(idx) = self.selected else {
            return;
        };
        let Some(msg) = self.store.messages().get(idx) else {
            return;
        };
        if clipboard::copy_text(&msg.text) {
            self.set_notification("Copied to clipboard".to_string());
        } else {
            self.set_notification("Clipboard unavailable".to_string());
        }
    }

    /// Set feedback on the selected message. Only assistant messages
    /// take feedback; on a user message this is inert.
    fn feedback_selected(&mut self, value: Feedback) {
        let Some(idx) = self.selected else {
            return;
        };
        let Some(msg) = self.store.messages().get(idx) else {
            return;
        };
        if !msg.is_assistant() {
            return;
        }
        let id = msg.id.clone();
        self.store.set_feedback(id, value);
        self.set_notification("Feedback recorded".to_string());
    }

    /// Scroll transcript to show the latest messages.
    ///
    /// Rough estimate of three lines per message; rendering clamps to
    /// the real content height.
    fn scroll_to_bottom(&mut self) {
        self.transcript_scroll = self.store.len() * 3;
    }

    /// Set a temporary notification message.
    pub fn set_notification(&mut self, msg: String) {
        self.notification = Some(msg);
        // ~3 seconds at the 250ms tick rate
        self.notification_ttl = 12;
    }

    /// Increment tick counter and update time-based state.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        if self.notification_ttl > 0 {
            self.notification_ttl -= 1;
            if self.notification_ttl == 0 {
                self.notification = None;
            }
        }
    }
}
