//! # TitleBar Component
//!
//! Top line of the screen: academy name, greeting, theme and status.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"🚀 Survival Code Academy · Hi, Ada · dark │ Course complete: Python"`
//! 2. **Default**: `"🚀 Survival Code Academy · Hi, Ada · dark"`
//!
//! Status messages are styled by [`StatusKind`] so rejections stand out.
//! The bar is stateless: every field is a prop set by the parent each frame.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub const ACADEMY_NAME: &str = "🚀 Survival Code Academy";

/// How a status message should be colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Info,
    Success,
    Error,
}

pub struct TitleBar<'a> {
    pub username: &'a str,
    pub theme_label: &'a str,
    pub status_message: &'a str,
    pub status_kind: StatusKind,
    pub palette: Palette,
}

impl<'a> TitleBar<'a> {
    pub fn new(username: &'a str, theme_label: &'a str, palette: Palette) -> Self {
        Self {
            username,
            theme_label,
            status_message: "",
            status_kind: StatusKind::Info,
            palette,
        }
    }

    pub fn status(mut self, message: &'a str, kind: StatusKind) -> Self {
        self.status_message = message;
        self.status_kind = kind;
        self
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let muted = Style::default().fg(self.palette.muted);
        let mut spans = vec![
            Span::styled(
                ACADEMY_NAME,
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" · ", muted),
            Span::styled(
                format!("Hi, {}", self.username),
                Style::default().fg(self.palette.fg),
            ),
            Span::styled(" · ", muted),
            Span::styled(self.theme_label.to_string(), muted),
        ];

        if !self.status_message.is_empty() {
            let color = match self.status_kind {
                StatusKind::Info => self.palette.fg,
                StatusKind::Success => self.palette.success,
                StatusKind::Error => self.palette.error,
            };
            spans.push(Span::styled(" │ ", muted));
            spans.push(Span::styled(
                self.status_message.to_string(),
                Style::default().fg(color),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("Ada", "dark", Palette::for_theme(Theme::Dark));
        let text = render_to_string(&mut title_bar);

        assert!(text.contains("Survival Code Academy"));
        assert!(text.contains("Hi, Ada"));
        assert!(text.contains("dark"));
        assert!(!text.contains('│'));
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new("Guest", "light", Palette::for_theme(Theme::Light))
            .status("Course complete: Python", StatusKind::Success);
        let text = render_to_string(&mut title_bar);

        assert!(text.contains("Hi, Guest"));
        assert!(text.contains("light"));
        assert!(text.contains("Course complete: Python"));
    }

    #[test]
    fn test_status_kind_sets_color() {
        let palette = Palette::for_theme(Theme::Dark);
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut title_bar =
            TitleBar::new("Ada", "dark", palette).status("unknown course: rust", StatusKind::Error);
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let error_cell = buffer
            .content()
            .iter()
            .find(|c| c.symbol() == "u" && c.fg == palette.error);
        assert!(error_cell.is_some(), "status text should use the error color");
    }
}
