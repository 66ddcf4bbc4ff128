//! Color palette for the TUI.
//!
//! The default palette keeps the indigo accent of the original product
//! styling on a dark neutral background.

use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,
    pub secondary: Color,

    // Semantic
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Message attribution
    pub user: Color,
    pub assistant: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::indigo()
    }
}

impl Theme {
    /// Dark theme with the indigo accent (default).
    pub fn indigo() -> Self {
        Self {
            base: Color::Rgb(17, 24, 39),       // #111827
            surface: Color::Rgb(31, 41, 55),    // #1f2937

            text: Color::Rgb(249, 250, 251),    // #f9fafb
            subtext: Color::Rgb(209, 213, 219), // #d1d5db
            muted: Color::Rgb(107, 114, 128),   // #6b7280

            primary: Color::Rgb(129, 140, 248),   // #818cf8 (indigo)
            secondary: Color::Rgb(165, 180, 252), // #a5b4fc

            success: Color::Rgb(74, 222, 128),  // #4ade80
            warning: Color::Rgb(250, 204, 21),  // #facc15
            error: Color::Rgb(248, 113, 113),   // #f87171

            user: Color::Rgb(99, 102, 241),      // #6366f1 (indigo bubble)
            assistant: Color::Rgb(229, 231, 235), // #e5e7eb

            border: Color::Rgb(55, 65, 81),            // #374151
            border_focused: Color::Rgb(129, 140, 248), // #818cf8
        }
    }

    /// Light theme for bright terminals.
    pub fn light() -> Self {
        Self {
            base: Color::Rgb(249, 250, 251),
            surface: Color::Rgb(229, 231, 235),

            text: Color::Rgb(31, 41, 55),
            subtext: Color::Rgb(75, 85, 99),
            muted: Color::Rgb(156, 163, 175),

            primary: Color::Rgb(79, 70, 229),   // #4f46e5
            secondary: Color::Rgb(99, 102, 241),

            success: Color::Rgb(22, 163, 74),
            warning: Color::Rgb(202, 138, 4),
            error: Color::Rgb(220, 38, 38),

            user: Color::Rgb(79, 70, 229),
            assistant: Color::Rgb(55, 65, 81),

            border: Color::Rgb(209, 213, 219),
            border_focused: Color::Rgb(79, 70, 229),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_indigo() {
        let theme = Theme::default();
        assert!(matches!(theme.base, Color::Rgb(17, 24, 39)));
    }

    #[test]
    fn test_light_theme_creates() {
        let theme = Theme::light();
        assert!(matches!(theme.base, Color::Rgb(249, 250, 251)));
    }
}
