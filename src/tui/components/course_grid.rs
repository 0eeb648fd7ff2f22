//! # Course Grid Component
//!
//! The home view: one card per course, in catalog order.
//!
//! ```text
//! ╭ Courses ─────────────────────────────────────────╮
//! │ 1  🌐 HTML Basics                      15 lessons │
//! │       Building blocks of web pages                │
//! │ 2  🎨 CSS Styling                      15 lessons │
//! │       Styling and layout                          │
//! ╰──────────────── ↑↓ Move  Enter Open  1-9 Jump ───╯
//! ```
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CourseGridState` lives in `TuiState` (cursor position)
//! - `CourseGrid` is created each frame with borrowed state and the catalog

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};
use unicode_width::UnicodeWidthStr;

use crate::core::catalog::ContentCatalog;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

/// Persistent cursor state for the course grid.
pub struct CourseGridState {
    pub course_ids: Vec<String>,
    pub selected: usize,
    pub list_state: ListState,
}

impl CourseGridState {
    pub fn new(catalog: &ContentCatalog) -> Self {
        let course_ids: Vec<String> = catalog
            .list_course_ids()
            .into_iter()
            .map(str::to_string)
            .collect();
        let mut list_state = ListState::default();
        if !course_ids.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            course_ids,
            selected: 0,
            list_state,
        }
    }

    /// Move the cursor onto `course_id`, e.g. after returning from a course.
    pub fn focus(&mut self, course_id: &str) {
        if let Some(idx) = self.course_ids.iter().position(|id| id == course_id) {
            self.selected = idx;
            self.list_state.select(Some(idx));
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.course_ids.get(self.selected).map(String::as_str)
    }
}

/// Events emitted by the course grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseGridEvent {
    Open(String),
}

impl EventHandler for CourseGridState {
    type Event = CourseGridEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CourseGridEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                if !self.course_ids.is_empty() {
                    self.selected = (self.selected + 1).min(self.course_ids.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit | TuiEvent::Next => self
                .selected_id()
                .map(|id| CourseGridEvent::Open(id.to_string())),
            // Digits beyond the catalog are ignored
            TuiEvent::Pick(idx) => {
                let id = self.course_ids.get(*idx)?.clone();
                self.selected = *idx;
                self.list_state.select(Some(*idx));
                Some(CourseGridEvent::Open(id))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the course grid.
pub struct CourseGrid<'a> {
    state: &'a mut CourseGridState,
    catalog: &'a ContentCatalog,
    palette: Palette,
}

impl<'a> CourseGrid<'a> {
    pub fn new(state: &'a mut CourseGridState, catalog: &'a ContentCatalog, palette: Palette) -> Self {
        Self {
            state,
            catalog,
            palette,
        }
    }
}

impl Component for CourseGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let muted = Style::default().fg(self.palette.muted);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(muted)
            .title(Span::styled(" Courses ", Style::default().fg(self.palette.accent)))
            .title_bottom(Line::from(" ↑↓ Move  Enter Open  1-9 Jump  t Theme  q Quit ").centered())
            .padding(Padding::horizontal(1));

        // borders + padding
        let inner_width = area.width.saturating_sub(4) as usize;

        let items: Vec<ListItem> = self
            .catalog
            .courses()
            .enumerate()
            .map(|(i, (_, course))| {
                let is_selected = i == self.state.selected;
                let (title_style, body_style) = if is_selected {
                    let base = Style::default().bg(self.palette.highlight_bg);
                    (
                        base.fg(self.palette.accent).add_modifier(Modifier::BOLD),
                        base.fg(self.palette.fg),
                    )
                } else {
                    (
                        Style::default().fg(self.palette.fg).add_modifier(Modifier::BOLD),
                        muted,
                    )
                };

                let number = format!("{:<3}", i + 1);
                let heading = format!("{} {}", course.icon, course.title);
                let count = lesson_count_label(course.lesson_count());
                let fixed = number.width() + count.width() + 1;
                let heading = truncate_str(&heading, inner_width.saturating_sub(fixed));
                let gap = inner_width.saturating_sub(fixed + heading.width());

                let first = Line::from(vec![
                    Span::styled(number, body_style),
                    Span::styled(heading, title_style),
                    Span::styled(" ".repeat(gap + 1), body_style),
                    Span::styled(count, body_style),
                ]);
                let tagline = truncate_str(course.tagline, inner_width.saturating_sub(3));
                let second = Line::from(vec![
                    Span::styled("   ", body_style),
                    Span::styled(tagline, body_style),
                ]);

                ListItem::new(vec![first, second])
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

fn lesson_count_label(count: usize) -> String {
    if count == 1 {
        "1 lesson".to_string()
    } else {
        format!("{count} lessons")
    }
}

/// Truncate `s` to `max_width` display columns, adding "…" if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
