//! Collapsible navigation sidebar.
//!
//! Sections expand to show their leaf items; the items themselves are
//! decorative destinations. Collapsed mode drops the labels and keeps
//! one placeholder glyph per section (no icon assets in a terminal).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::nav::{NavRow, NavState, SECTIONS};
use crate::theme::Theme;

/// Static profile footer labels.
const PROFILE_NAME: &str = "John Doe";
const PROFILE_PLAN: &str = "Premium Plan";

/// Sidebar widget.
pub struct Sidebar<'a> {
    nav: &'a NavState,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> Sidebar<'a> {
    /// Create a new sidebar widget.
    pub fn new(nav: &'a NavState, theme: &'a Theme) -> Self {
        Self {
            nav,
            theme,
            focused: false,
        }
    }

    /// Set whether the sidebar has keyboard focus.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn section_lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for (row_idx, row) in self.nav.rows().into_iter().enumerate() {
            let under_cursor = self.focused && row_idx == self.nav.cursor;
            let row_style = if under_cursor {
                Style::default()
                    .fg(self.theme.base)
                    .bg(self.theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.subtext)
            };

            match row {
                NavRow::Section(si) => {
                    let section = &SECTIONS[si];
                    if self.nav.collapsed {
                        let glyph: String =
                            section.title.chars().take(1).collect();
                        lines.push(Line::from(Span::styled(format!(" {glyph}"), row_style)));
                        continue;
                    }
                    let marker = if self.nav.expanded == Some(section.title) {
                        "▾"
                    } else {
                        "▸"
                    };
                    let label = truncate_label(section.title, width.saturating_sub(4));
                    lines.push(Line::from(Span::styled(
                        format!(" {marker} {label}"),
                        row_style,
                    )));
                }
                NavRow::Item(si, ii) => {
                    if self.nav.collapsed {
                        continue;
                    }
                    let item = SECTIONS[si].items[ii];
                    let label = truncate_label(item, width.saturating_sub(6));
                    let style = if under_cursor {
                        row_style
                    } else {
                        Style::default().fg(self.theme.muted)
                    };
                    lines.push(Line::from(Span::styled(format!("    • {label}"), style)));
                }
            }
        }

        lines
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(self.theme.border_focused)
        } else {
            Style::default().fg(self.theme.border)
        };

        let title = if self.nav.collapsed { " F " } else { " FINAlchemy " };
        let block = Block::default()
            .title(title)
            .title_style(
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(self.theme.base));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 1 {
            return;
        }

        // Reserve the bottom rows for the profile footer.
        let footer_height: u16 = if self.nav.collapsed { 0 } else { 2 };
        let nav_height = inner.height.saturating_sub(footer_height);
        let nav_area = Rect::new(inner.x, inner.y, inner.width, nav_height);

        let lines = self.section_lines(inner.width as usize);
        Paragraph::new(lines).render(nav_area, buf);

        if footer_height > 0 && inner.height > footer_height {
            let footer_area = Rect::new(
                inner.x,
                inner.y + inner.height - footer_height,
                inner.width,
                footer_height,
            );
            let footer = vec![
                Line::from(Span::styled(
                    format!(" {PROFILE_NAME}"),
                    Style::default().fg(self.theme.text),
                )),
                Line::from(Span::styled(
                    format!(" {PROFILE_PLAN}"),
                    Style::default().fg(self.theme.muted),
                )),
            ];
            Paragraph::new(footer).render(footer_area, buf);
        }
    }
}

/// Truncate a label to the given display width, appending an ellipsis.
fn truncate_label(label: &str, max_width: usize) -> String {
    if label.width() <= max_width {
        return label.to_string();
    }
    let mut out = String::new();
    for ch in label.chars() {
        if out.width() + 2 > max_width {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}
