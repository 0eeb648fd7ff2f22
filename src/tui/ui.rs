use crate::core::navigation::NavigationController;
use crate::core::state::NavigationState;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CourseGrid, LessonView, TitleBar};
use crate::tui::theme::Palette;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};

pub fn draw_ui(frame: &mut Frame, nav: &NavigationController, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let palette = Palette::for_theme(tui.theme);

    frame.render_widget(
        Block::default().style(Style::default().fg(palette.fg).bg(palette.bg)),
        frame.area(),
    );

    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    TitleBar::new(&tui.username, tui.theme.label(), palette)
        .status(&tui.status_message, tui.status_kind)
        .render(frame, title_area);

    match nav.current_state() {
        NavigationState::Home => {
            CourseGrid::new(&mut tui.course_grid, nav.catalog(), palette).render(frame, main_area);
        }
        NavigationState::InLesson { lesson_index, .. } => match nav.current_course() {
            Some((_, course)) => {
                LessonView::new(&mut tui.lesson, course, *lesson_index, palette)
                    .render(frame, main_area);
            }
            None => draw_missing_course(frame, main_area, palette),
        },
    }
}

// Unreachable through the controller, which validates every course id.
fn draw_missing_course(frame: &mut Frame, area: Rect, palette: Palette) {
    let paragraph = Paragraph::new("Course not found. Press Esc to return to the course list.")
        .style(Style::default().fg(palette.error))
        .block(Block::bordered().title("ERROR"))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_controller;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(nav: &NavigationController, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, nav, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_home() {
        let nav = test_controller();
        let mut tui = TuiState::new("Ada", crate::Theme::Dark, nav.catalog());
        let text = draw(&nav, &mut tui);
        assert!(text.contains("Hi, Ada"));
        assert!(text.contains("Courses"));
        assert!(text.contains("Short Course"));
    }

    #[test]
    fn test_draw_lesson() {
        let mut nav = test_controller();
        update(&mut nav, Action::SelectCourse("short".to_string()));
        update(&mut nav, Action::NextLesson);
        let mut tui = TuiState::new("Ada", crate::Theme::Light, nav.catalog());
        let text = draw(&nav, &mut tui);
        assert!(text.contains("Lesson 2 of 3"));
        assert!(text.contains("light"));
        assert!(!text.contains("Three quick lessons"));
    }
}
