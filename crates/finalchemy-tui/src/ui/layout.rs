//! Layout helpers for the FINAlchemy TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Sidebar width while expanded.
pub const SIDEBAR_WIDTH: u16 = 24;
/// Sidebar width while collapsed (placeholder glyphs only).
pub const SIDEBAR_WIDTH_COLLAPSED: u16 = 4;

/// Split the screen into sidebar and main column.
pub fn shell(area: Rect, sidebar_collapsed: bool) -> (Rect, Rect) {
    let width = if sidebar_collapsed {
        SIDEBAR_WIDTH_COLLAPSED
    } else {
        SIDEBAR_WIDTH
    };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(width), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Split the main column into transcript, input bar, and status line.
pub fn main_columns(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Transcript (expands)
            Constraint::Length(3), // Input bar
            Constraint::Length(1), // Status line
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Create a centered rect with fixed dimensions.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_widths() {
        let area = Rect::new(0, 0, 100, 30);
        let (sidebar, main) = shell(area, false);
        assert_eq!(sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(main.width, 100 - SIDEBAR_WIDTH);

        let (sidebar, _) = shell(area, true);
        assert_eq!(sidebar.width, SIDEBAR_WIDTH_COLLAPSED);
    }

    #[test]
    fn test_main_columns_heights() {
        let area = Rect::new(0, 0, 80, 24);
        let (transcript, input, status) = main_columns(area);
        assert_eq!(input.height, 3);
        assert_eq!(status.height, 1);
        assert_eq!(transcript.height, 24 - 4);
    }

    #[test]
    fn test_centered_fixed_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_fixed(40, 10, area);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.x, 20);
    }
}
