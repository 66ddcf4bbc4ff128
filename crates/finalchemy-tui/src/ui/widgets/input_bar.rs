//! Full-width input bar at the bottom of the chat column.
//!
//! The bar stays usable while a reply is pending, so overlapping
//! submissions remain possible.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use unicode_width::UnicodeWidthStr;

use super::text_input::TextInputState;
use crate::theme::Theme;

/// Placeholder shown while the input is empty.
const PLACEHOLDER: &str = "Ask about market trends, portfolio analysis, or investment strategies...";

/// Input bar widget.
pub struct InputBar<'a> {
    input: &'a TextInputState,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> InputBar<'a> {
    /// Create a new input bar widget.
    pub fn new(input: &'a TextInputState, theme: &'a Theme) -> Self {
        Self {
            input,
            theme,
            focused: false,
        }
    }

    /// Set whether the input bar is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn content_line(&self) -> Line<'static> {
        let prompt = Span::styled("> ".to_string(), Style::default().fg(self.theme.primary));

        if self.input.is_empty() {
            let mut spans = vec![prompt];
            if self.focused {
                spans.push(Span::styled(
                    "█".to_string(),
                    Style::default().fg(self.theme.text),
                ));
            }
            spans.push(Span::styled(
                PLACEHOLDER.to_string(),
                Style::default().fg(self.theme.muted),
            ));
            return Line::from(spans);
        }

        let chars: Vec<char> = self.input.content().chars().collect();
        let cursor = self.input.cursor.min(chars.len());
        let before: String = chars[..cursor].iter().collect();
        let after: String = chars[cursor..].iter().collect();

        let mut spans = vec![
            prompt,
            Span::styled(before, Style::default().fg(self.theme.text)),
        ];
        if self.focused {
            spans.push(Span::styled(
                "█".to_string(),
                Style::default().fg(self.theme.text),
            ));
        }
        spans.push(Span::styled(after, Style::default().fg(self.theme.text)));
        Line::from(spans)
    }
}

impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(self.theme.border_focused)
        } else {
            Style::default().fg(self.theme.border)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        // Keep the cursor in view when the content outgrows the bar.
        // Columns are display width, not char count, so wide glyphs
        // scroll correctly.
        let inner_width = area.width.saturating_sub(2) as usize;
        let prompt_width = 2;
        let before: String = self
            .input
            .content()
            .chars()
            .take(self.input.cursor)
            .collect();
        let cursor_col = prompt_width + before.width();
        let scroll = cursor_col.saturating_sub(inner_width.saturating_sub(1));

        #[allow(clippy::cast_possible_truncation)]
        let paragraph = Paragraph::new(vec![self.content_line()])
            .block(block)
            .scroll((0, scroll as u16));

        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_string(bar: InputBar<'_>) -> String {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(bar, frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_empty_input_shows_placeholder() {
        let input = TextInputState::new();
        let theme = Theme::default();
        let out = render_to_string(InputBar::new(&input, &theme));
        assert!(out.contains("Ask about market trends"));
    }

    #[test]
    fn test_typed_content_replaces_placeholder() {
        let mut input = TextInputState::new();
        input.insert_str("Compare tech stocks");
        let theme = Theme::default();
        let out = render_to_string(InputBar::new(&input, &theme).focused(true));
        assert!(out.contains("Compare tech stocks"));
        assert!(!out.contains("Ask about market trends"));
    }

    #[test]
    fn test_wide_glyph_overflow_keeps_cursor_visible() {
        let mut input = TextInputState::new();
        // 30 double-width glyphs (60 columns) in a 20-column bar.
        input.insert_str(&"漢".repeat(30));
        let theme = Theme::default();

        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(InputBar::new(&input, &theme).focused(true), frame.area());
            })
            .unwrap();
        let out: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();

        assert!(out.contains('█'));
        assert!(out.contains('漢'));
    }
}
