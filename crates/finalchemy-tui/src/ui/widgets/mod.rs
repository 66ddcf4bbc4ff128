//! Widgets for the FINAlchemy TUI.

mod input_bar;
mod sidebar;
mod status_bar;
mod text_input;
mod transcript;
mod welcome;

pub use input_bar::InputBar;
pub use sidebar::Sidebar;
pub use status_bar::{KeyHint, StatusBar};
pub use text_input::TextInputState;
pub use transcript::Transcript;
pub use welcome::WelcomePanel;
