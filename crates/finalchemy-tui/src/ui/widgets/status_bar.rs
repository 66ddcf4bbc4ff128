//! Single-line status bar with key hints and transient notifications.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// A key hint displayed in the status bar (e.g. `Tab Focus`).
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Status bar widget.
pub struct StatusBar<'a> {
    hints: &'a [KeyHint],
    right: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar with the given hints.
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self {
            hints,
            right: None,
            theme,
        }
    }

    /// Set right-aligned text (notification slot).
    #[must_use]
    pub fn right(mut self, text: &'a str) -> Self {
        self.right = Some(text);
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    " │ ",
                    Style::default().fg(self.theme.muted),
                ));
            }
            spans.push(Span::styled(
                hint.key,
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                hint.label,
                Style::default().fg(self.theme.subtext),
            ));
        }

        // Pad so the notification lands at the right edge.
        if let Some(right) = self.right {
            let left_width: usize = spans.iter().map(|s| s.content.width()).sum();
            let pad = (area.width as usize)
                .saturating_sub(left_width + right.width() + 1);
            spans.push(Span::raw(" ".repeat(pad)));
            spans.push(Span::styled(
                right,
                Style::default().fg(self.theme.warning),
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(self.theme.surface))
            .render(area, buf);
    }
}
