//! Scrollable message transcript.
//!
//! User messages sit on the right, assistant messages on the left with
//! their kind tag, timestamp, and feedback marker. While a reply is
//! pending a typing indicator line is appended below the last message.

use finalchemy_engine::{ConversationStore, Feedback, Message, MessageKind, Sender};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::Theme;

/// Dot phases for the typing indicator, advanced by the UI tick.
const TYPING_FRAMES: &[&str] = &["·  ", "·· ", "···", "   "];

/// Transcript widget.
pub struct Transcript<'a> {
    store: &'a ConversationStore,
    theme: &'a Theme,
    selected: Option<usize>,
    scroll: usize,
    tick: usize,
    focused: bool,
}

impl<'a> Transcript<'a> {
    /// Create a new transcript widget.
    pub fn new(store: &'a ConversationStore, theme: &'a Theme) -> Self {
        Self {
            store,
            theme,
            selected: None,
            scroll: 0,
            tick: 0,
            focused: false,
        }
    }

    /// Set the message selection cursor.
    #[must_use]
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// Set the scroll offset (clamped to the content during render).
    #[must_use]
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    /// Set the tick counter driving the typing animation.
    #[must_use]
    pub fn tick(mut self, tick: usize) -> Self {
        self.tick = tick;
        self
    }

    /// Set whether the chat pane is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn header_line(&self, idx: usize, msg: &Message) -> Line<'static> {
        let time = msg.timestamp.format("%H:%M:%S").to_string();
        let is_selected = self.selected == Some(idx);

        let name_style = if is_selected {
            Style::default()
                .fg(self.theme.base)
                .bg(self.theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            match msg.sender {
                Sender::User => Style::default().fg(self.theme.secondary),
                Sender::Assistant => Style::default().fg(self.theme.primary),
            }
        };
        let dim = Style::default().fg(self.theme.muted);

        let mut spans = Vec::new();
        match msg.sender {
            Sender::User => {
                spans.push(Span::styled(time, dim));
                spans.push(Span::styled(" · ".to_string(), dim));
                spans.push(Span::styled("You".to_string(), name_style));
            }
            Sender::Assistant => {
                spans.push(Span::styled("FINAlchemy".to_string(), name_style));
                if let Some(kind) = msg.kind {
                    spans.push(Span::styled(
                        format!(" [{}]", kind_label(kind)),
                        Style::default().fg(self.theme.secondary),
                    ));
                }
                spans.push(Span::styled(" · ".to_string(), dim));
                spans.push(Span::styled(time, dim));
                match msg.feedback {
                    Some(Feedback::Up) => {
                        spans.push(Span::styled(
                            " ▲".to_string(),
                            Style::default().fg(self.theme.success),
                        ));
                    }
                    Some(Feedback::Down) => {
                        spans.push(Span::styled(
                            " ▼".to_string(),
                            Style::default().fg(self.theme.error),
                        ));
                    }
                    None => {}
                }
            }
        }

        let alignment = match msg.sender {
            Sender::User => Alignment::Right,
            Sender::Assistant => Alignment::Left,
        };
        Line::from(spans).alignment(alignment)
    }

    fn build_lines(&self, width: usize) -> Vec<Line<'static>> {
        let wrap_width = (width * 7 / 10).max(16);
        let mut lines = Vec::new();

        for (idx, msg) in self.store.messages().iter().enumerate() {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(self.header_line(idx, msg));

            let (style, alignment) = match msg.sender {
                Sender::User => (
                    Style::default().fg(self.theme.user),
                    Alignment::Right,
                ),
                Sender::Assistant => (
                    Style::default().fg(self.theme.assistant),
                    Alignment::Left,
                ),
            };
            for wrapped in textwrap::wrap(&msg.text, wrap_width) {
                lines.push(
                    Line::from(Span::styled(wrapped.into_owned(), style)).alignment(alignment),
                );
            }
        }

        if self.store.is_typing() {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            let frame = TYPING_FRAMES[self.tick % TYPING_FRAMES.len()];
            lines.push(Line::from(vec![
                Span::styled("✦ ".to_string(), Style::default().fg(self.theme.primary)),
                Span::styled(
                    format!("FINAlchemy is thinking{frame}"),
                    Style::default().fg(self.theme.muted),
                ),
            ]));
        }

        lines
    }
}

impl Widget for Transcript<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(self.theme.border_focused)
        } else {
            Style::default().fg(self.theme.border)
        };

        let block = Block::default()
            .title(" Chat ")
            .title_style(Style::default().fg(self.theme.text))
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(self.theme.base));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height < 1 {
            return;
        }

        let lines = self.build_lines(inner.width as usize);
        let max_scroll = lines.len().saturating_sub(inner.height as usize);
        let offset = self.scroll.min(max_scroll);

        #[allow(clippy::cast_possible_truncation)]
        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(inner, buf);
    }
}

fn kind_label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Plain => "plain",
        MessageKind::Chart => "chart",
        MessageKind::Insight => "insight",
        MessageKind::Recommendation => "recommendation",
    }
}
