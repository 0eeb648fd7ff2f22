//! Terminal colors for each [`Theme`].

use ratatui::style::Color;

use crate::Theme;

/// Concrete colors used by every component for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    /// Borders, hints, secondary text.
    pub muted: Color,
    /// Titles, links, the selected card.
    pub accent: Color,
    /// Background of the highlighted card.
    pub highlight_bg: Color,
    pub success: Color,
    pub error: Color,
    /// Inline code foreground/background.
    pub code_fg: Color,
    pub code_bg: Color,
    /// Name of the syntect theme for fenced code.
    pub syntax_theme: &'static str,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                fg: Color::Gray,
                bg: Color::Reset,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                highlight_bg: Color::Rgb(30, 40, 55),
                success: Color::Green,
                error: Color::Red,
                code_fg: Color::White,
                code_bg: Color::DarkGray,
                syntax_theme: "base16-ocean.dark",
            },
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                muted: Color::Gray,
                accent: Color::Blue,
                highlight_bg: Color::Rgb(220, 232, 250),
                success: Color::Rgb(0, 120, 40),
                error: Color::Rgb(180, 0, 0),
                code_fg: Color::Black,
                code_bg: Color::Rgb(230, 230, 230),
                syntax_theme: "InspiredGitHub",
            },
        }
    }
}
