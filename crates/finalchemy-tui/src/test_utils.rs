//! Shared helpers for render tests.

use crate::app::App;
use crate::ui;
use ratatui::{backend::TestBackend, Terminal};

pub fn create_test_app() -> App {
    App::new()
}

/// Render the full frame into a plain string at a typical terminal size.
pub fn render_app_to_string(app: &App) -> String {
    render_app_to_string_sized(app, 100, 30)
}

pub fn render_app_to_string_sized(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(app, frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
