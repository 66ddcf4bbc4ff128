//! UI composition for the FINAlchemy TUI.

pub mod layout;
pub mod widgets;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};

use crate::app::{App, Focus};
use widgets::{InputBar, KeyHint, Sidebar, StatusBar, Transcript, WelcomePanel};

/// Render one frame of the application.
pub fn render(app: &App, frame: &mut Frame<'_>) {
    let area = frame.area();
    let buf = frame.buffer_mut();

    let (sidebar_area, main_area) = layout::shell(area, app.nav.collapsed);
    let (chat_area, input_area, status_area) = layout::main_columns(main_area);

    Sidebar::new(&app.nav, &app.theme)
        .focused(app.focus == Focus::Sidebar)
        .render(sidebar_area, buf);

    // The welcome panel replaces the transcript until the first
    // message exists; it never comes back afterwards.
    if app.store.is_empty() {
        WelcomePanel::new(&app.theme).render(chat_area, buf);
    } else {
        Transcript::new(&app.store, &app.theme)
            .selected(app.selected)
            .scroll(app.transcript_scroll)
            .tick(app.tick)
            .focused(app.focus == Focus::Chat)
            .render(chat_area, buf);
    }

    InputBar::new(&app.input, &app.theme)
        .focused(app.focus == Focus::Chat)
        .render(input_area, buf);

    let hints = status_hints(app);
    let mut status = StatusBar::new(&hints, &app.theme);
    if let Some(notification) = &app.notification {
        status = status.right(notification);
    }
    status.render(status_area, buf);

    if app.show_help {
        render_help_overlay(&app.theme, area, buf);
    }
}

/// Key hints for the current focus.
fn status_hints(app: &App) -> Vec<KeyHint> {
    let mut hints = vec![
        KeyHint::new("Tab", "Focus"),
        KeyHint::new("C-b", "Sidebar"),
    ];
    match app.focus {
        Focus::Sidebar => {
            hints.push(KeyHint::new("↑↓", "Move"));
            hints.push(KeyHint::new("Enter", "Expand"));
        }
        Focus::Chat => {
            hints.push(KeyHint::new("Enter", "Send"));
            if !app.store.is_empty() {
                hints.push(KeyHint::new("C-p/n", "Select"));
                hints.push(KeyHint::new("C-y", "Copy"));
                hints.push(KeyHint::new("C-u/d", "Rate"));
            }
        }
    }
    hints.push(KeyHint::new("F1", "Help"));
    hints
}

/// Render the help overlay.
pub fn render_help_overlay(theme: &crate::theme::Theme, area: Rect, buf: &mut Buffer) {
    let help_text = "
  Chat
    Enter             Send message
    Alt+1..6          Suggested prompt (empty chat)
    Ctrl+P / Ctrl+N   Select prev/next message
    Ctrl+Y            Copy selected message
    Ctrl+U / Ctrl+D   Rate selected reply up/down

  Navigation
    Tab               Switch pane focus
    Ctrl+B            Collapse/expand sidebar
    Up/Down, Enter    Move and toggle sections
    Ctrl+C / Esc      Quit

  [Press any key to close]
";

    let width = 56.min(area.width.saturating_sub(4));
    let height = 18.min(area.height.saturating_sub(2));
    let overlay_area = layout::centered_fixed(width, height, area);

    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.surface));

    Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(theme.text))
        .render(overlay_area, buf);
}
