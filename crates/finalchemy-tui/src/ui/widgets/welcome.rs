//! Welcome panel with the suggested prompt cards.
//!
//! Rendered in place of the transcript while the conversation is
//! empty. Once any message exists the panel is gone for the rest of
//! the session — nothing clears the message list.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::prompts::SUGGESTED_PROMPTS;
use crate::theme::Theme;

/// Welcome panel widget.
pub struct WelcomePanel<'a> {
    theme: &'a Theme,
}

impl<'a> WelcomePanel<'a> {
    /// Create a new welcome panel.
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for WelcomePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Chat ")
            .title_style(Style::default().fg(self.theme.text))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .style(Style::default().bg(self.theme.base));

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Welcome to FINAlchemy!",
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(
                "Your AI-powered financial assistant is ready to help.",
                Style::default().fg(self.theme.subtext),
            ))
            .alignment(Alignment::Center),
            Line::from(""),
        ];

        for (i, prompt) in SUGGESTED_PROMPTS.iter().enumerate() {
            lines.push(
                Line::from(vec![
                    Span::styled(
                        format!("[Alt+{}] ", i + 1),
                        Style::default().fg(self.theme.secondary),
                    ),
                    Span::styled(prompt.text, Style::default().fg(self.theme.text)),
                    Span::styled(
                        format!("  ({})", prompt.category),
                        Style::default().fg(self.theme.muted),
                    ),
                ])
                .alignment(Alignment::Center),
            );
            lines.push(Line::from(""));
        }

        lines.push(
            Line::from(Span::styled(
                "...or just start typing below.",
                Style::default().fg(self.theme.muted),
            ))
            .alignment(Alignment::Center),
        );

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_welcome_panel_lists_all_prompts() {
        let theme = Theme::default();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(WelcomePanel::new(&theme), frame.area()))
            .unwrap();
        let out: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();

        assert!(out.contains("Welcome to FINAlchemy!"));
        for prompt in &SUGGESTED_PROMPTS {
            assert!(out.contains(prompt.text), "missing prompt {}", prompt.text);
        }
    }
}
