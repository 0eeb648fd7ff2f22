//! # LessonView Component
//!
//! Full-screen view of the active lesson.
//!
//! ```text
//! 🐍 Python · Lesson 3 of 20: Operators and expressions
//! ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━───────────────────────────  15%
//! ╭───────────────────────────────────────────────────────────────────╮
//! │ Arithmetic + - * / // % **; comparisons == != > < >= <=.          │
//! │                                                                   │
//! │ ╭── python ──                                                     │
//! │ │ a = 7                                                           │
//! │ ╰──                                                               │
//! ╰───────────────────────────────────────────────────────────────────╯
//!  Esc Courses                                ← Previous    Next →
//! ```
//!
//! `LessonView` is a transient component (created each frame) that wraps
//! `&'a mut LessonViewState` (scroll position) and the course as props.
//! The body is laid out once per frame into a `ScrollView` canvas sized to the
//! wrapped height of the lesson.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, LineGauge, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::Course;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::markdown;
use crate::tui::theme::Palette;

/// Scroll state for the lesson body. Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct LessonViewState {
    pub scroll_state: ScrollViewState,
    /// Wrapped height of the current lesson body (set while rendering)
    pub content_height: u16,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl LessonViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump back to the top, e.g. when the lesson changes.
    pub fn reset(&mut self) {
        self.scroll_state.set_offset(Position { x: 0, y: 0 });
    }

    /// Keep the offset within the content.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for LessonViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp | TuiEvent::CursorUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown | TuiEvent::CursorDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

/// Transient render wrapper for one lesson.
pub struct LessonView<'a> {
    state: &'a mut LessonViewState,
    course: &'a Course,
    lesson_index: usize,
    palette: Palette,
}

impl<'a> LessonView<'a> {
    pub fn new(
        state: &'a mut LessonViewState,
        course: &'a Course,
        lesson_index: usize,
        palette: Palette,
    ) -> Self {
        Self {
            state,
            course,
            lesson_index,
            palette,
        }
    }

    /// "Lesson 3 of 20: Operators and expressions"
    pub fn heading(course: &Course, lesson_index: usize) -> String {
        let title = course
            .lesson(lesson_index)
            .map(|lesson| lesson.title)
            .unwrap_or_default();
        format!(
            "Lesson {} of {}: {}",
            lesson_index + 1,
            course.lesson_count(),
            title
        )
    }

    fn body(&self) -> Text<'static> {
        let Some(lesson) = self.course.lesson(self.lesson_index) else {
            return Text::default();
        };
        let mut text = markdown::render(lesson.content, &self.palette);
        if let Some(example) = lesson.example {
            text.lines.push(Line::default());
            text.lines.extend(markdown::code_block(
                example,
                self.course.syntax,
                &self.palette,
            ));
        }
        text
    }

    fn footer(&self) -> Line<'static> {
        let key = Style::default()
            .fg(self.palette.accent)
            .add_modifier(Modifier::BOLD);
        let label = Style::default().fg(self.palette.muted);

        let mut spans = vec![Span::styled(" Esc", key), Span::styled(" Courses", label)];
        if self.lesson_index > 0 {
            spans.push(Span::styled("    ← Previous", key));
        }
        let is_last = self.lesson_index + 1 >= self.course.lesson_count();
        let forward = if is_last { "    Finish course ✓" } else { "    Next →" };
        spans.push(Span::styled(forward, key));
        Line::from(spans)
    }
}

impl Component for LessonView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, gauge_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        // Header
        let header = Line::from(vec![
            Span::styled(
                format!("{} {}", self.course.icon, self.course.title),
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" · ", Style::default().fg(self.palette.muted)),
            Span::styled(
                Self::heading(self.course, self.lesson_index),
                Style::default()
                    .fg(self.palette.fg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(header), header_area);

        // Progress through the course
        let ratio = (self.lesson_index + 1) as f64 / self.course.lesson_count().max(1) as f64;
        let gauge = LineGauge::default()
            .filled_style(Style::default().fg(self.palette.accent))
            .unfilled_style(Style::default().fg(self.palette.muted))
            .ratio(ratio.clamp(0.0, 1.0));
        frame.render_widget(gauge, gauge_area);

        // Body
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.muted))
            .padding(Padding::horizontal(1));
        let inner = block.inner(body_area);
        frame.render_widget(block, body_area);

        // -1 for scrollbar safe area
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(self.body()).wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(content_width).min(u16::MAX as usize) as u16;

        self.state.content_height = content_height;
        self.state.viewport_height = inner.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);

        // Footer
        frame.render_widget(Paragraph::new(self.footer()), footer_area);
    }
}
