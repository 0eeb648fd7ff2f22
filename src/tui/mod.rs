//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm event → TuiEvent → dispatch() → Action → update() → Effect → apply_effect()
//! ```
//!
//! `dispatch` interprets a key in the context of the current view (the same
//! arrow key moves the grid cursor at Home and scrolls inside a lesson).
//! `apply_effect` only touches presentation state: status line, scroll
//! position, grid cursor. Navigation state is owned by the core.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms in `poll` and only draws
//! after an event arrived. All pending events are drained before the next draw.

mod component;
mod components;
mod event;
pub mod markdown;
pub mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::Theme;
use crate::core::action::{Action, Effect, update};
use crate::core::catalog::ContentCatalog;
use crate::core::config::{self, ResolvedConfig, SavedState};
use crate::core::navigation::NavigationController;
use crate::core::state::NavigationState;
use crate::tui::component::EventHandler;
use crate::tui::components::{CourseGridEvent, CourseGridState, LessonViewState, StatusKind};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub username: String,
    pub theme: Theme,
    // Persistent component states
    pub course_grid: CourseGridState,
    pub lesson: LessonViewState,
    // Transient status line, cleared on the next navigation
    pub status_message: String,
    pub status_kind: StatusKind,
    /// Where theme changes are saved. `None` keeps them in memory only.
    pub state_path: Option<PathBuf>,
}

impl TuiState {
    pub fn new(username: &str, theme: Theme, catalog: &ContentCatalog) -> Self {
        Self {
            username: username.to_string(),
            theme,
            course_grid: CourseGridState::new(catalog),
            lesson: LessonViewState::new(),
            status_message: String::new(),
            status_kind: StatusKind::Info,
            state_path: None,
        }
    }

    fn set_status(&mut self, message: impl Into<String>, kind: StatusKind) {
        self.status_message = message.into();
        self.status_kind = kind;
    }

    fn clear_status(&mut self) {
        self.status_message.clear();
        self.status_kind = StatusKind::Info;
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        info!("Theme switched to {}", self.theme.label());
        self.set_status(format!("Theme: {}", self.theme.label()), StatusKind::Info);

        let Some(path) = &self.state_path else {
            return;
        };
        let state = SavedState {
            theme: Some(self.theme),
        };
        if let Err(e) = config::save_state_to(path, &state) {
            warn!("Failed to save theme: {}", e);
            self.set_status(format!("Theme not saved: {e}"), StatusKind::Error);
        }
    }
}

/// Translate a `TuiEvent` into a core `Action` for the current view.
///
/// Events that only affect presentation (cursor moves, scrolling, theme) are
/// applied to `tui` directly and yield `None`.
pub fn dispatch(state: &NavigationState, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        TuiEvent::ToggleTheme => {
            tui.toggle_theme();
            return None;
        }
        _ => {}
    }

    match state {
        NavigationState::Home => match event {
            TuiEvent::Quit => Some(Action::Quit),
            _ => match tui.course_grid.handle_event(&event)? {
                CourseGridEvent::Open(course_id) => Some(Action::SelectCourse(course_id)),
            },
        },
        NavigationState::InLesson { .. } => match event {
            TuiEvent::Next | TuiEvent::Submit => Some(Action::NextLesson),
            TuiEvent::Prev => Some(Action::PrevLesson),
            TuiEvent::Back => Some(Action::ExitCourse),
            _ => {
                tui.lesson.handle_event(&event);
                None
            }
        },
    }
}

/// Update presentation state after the core handled an action.
///
/// `focus_course` is where the grid cursor should rest: the open course, or
/// the one just left when the learner returns Home.
/// Returns `true` when the application should quit.
pub fn apply_effect(tui: &mut TuiState, focus_course: Option<&str>, effect: Effect) -> bool {
    match effect {
        Effect::None => false,
        Effect::Redraw => {
            tui.clear_status();
            tui.lesson.reset();
            if let Some(course_id) = focus_course {
                tui.course_grid.focus(course_id);
            }
            false
        }
        Effect::CourseCompleted { course_id, title } => {
            tui.set_status(format!("Course complete: {title}"), StatusKind::Success);
            tui.lesson.reset();
            tui.course_grid.focus(&course_id);
            false
        }
        Effect::Rejected(e) => {
            tui.set_status(e.to_string(), StatusKind::Error);
            false
        }
        Effect::Quit => true,
    }
}

/// Run one event through dispatch, the core and the effect handler.
/// Returns `true` when the application should quit.
pub fn handle_event(nav: &mut NavigationController, tui: &mut TuiState, event: TuiEvent) -> bool {
    match dispatch(nav.current_state(), tui, event) {
        Some(action) => apply_action(nav, tui, action),
        None => false,
    }
}

/// Feed `action` to the core and reflect the resulting effect in `tui`.
/// Returns `true` when the application should quit.
pub fn apply_action(nav: &mut NavigationController, tui: &mut TuiState, action: Action) -> bool {
    let previous_course = nav.current_state().course_id().map(str::to_string);
    let effect = update(nav, action);
    debug!("Effect: {:?}", effect);
    let focus_course = nav
        .current_state()
        .course_id()
        .map(str::to_string)
        .or(previous_course);
    apply_effect(tui, focus_course.as_deref(), effect)
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(resolved: ResolvedConfig, catalog: Arc<ContentCatalog>) -> std::io::Result<()> {
    let mut nav = NavigationController::new(catalog);
    let mut tui = TuiState::new(&resolved.username, resolved.theme, nav.catalog());
    tui.state_path = config::state_path();

    if let Some(course_id) = resolved.start_course {
        info!("Opening start course: {}", course_id);
        apply_action(&mut nav, &mut tui, Action::SelectCourse(course_id));
    }

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Mouse capture unavailable: {}", e))
        .ok();

    let mut needs_redraw = true; // Force first frame
    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &nav, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut nav, &mut tui, event) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            info!("Quitting");
            break Ok(());
        }
    };

    drop(terminal_mode_guard);
    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_controller;

    fn setup() -> (NavigationController, TuiState) {
        let nav = test_controller();
        let tui = TuiState::new("Ada", Theme::Dark, nav.catalog());
        (nav, tui)
    }

    #[test]
    fn test_enter_opens_highlighted_course() {
        let (mut nav, mut tui) = setup();
        assert!(!handle_event(&mut nav, &mut tui, TuiEvent::Submit));
        assert_eq!(
            nav.current_state(),
            &NavigationState::in_lesson("short", 0)
        );
    }

    #[test]
    fn test_digit_opens_course_directly() {
        let (mut nav, mut tui) = setup();
        handle_event(&mut nav, &mut tui, TuiEvent::Pick(1));
        assert_eq!(
            nav.current_state(),
            &NavigationState::in_lesson("single", 0)
        );
        // Out of range digit does nothing
        let (mut nav, mut tui) = setup();
        handle_event(&mut nav, &mut tui, TuiEvent::Pick(8));
        assert!(nav.current_state().is_home());
    }

    #[test]
    fn test_lesson_keys_map_to_navigation() {
        let (mut nav, mut tui) = setup();
        handle_event(&mut nav, &mut tui, TuiEvent::Submit);
        handle_event(&mut nav, &mut tui, TuiEvent::Next);
        assert_eq!(nav.current_state().lesson_index(), 1);
        handle_event(&mut nav, &mut tui, TuiEvent::Prev);
        assert_eq!(nav.current_state().lesson_index(), 0);
        handle_event(&mut nav, &mut tui, TuiEvent::Prev);
        assert_eq!(nav.current_state().lesson_index(), 0);
        handle_event(&mut nav, &mut tui, TuiEvent::Back);
        assert!(nav.current_state().is_home());
    }

    #[test]
    fn test_finishing_course_sets_status_and_focus() {
        let (mut nav, mut tui) = setup();
        handle_event(&mut nav, &mut tui, TuiEvent::Pick(0));
        for _ in 0..3 {
            handle_event(&mut nav, &mut tui, TuiEvent::Next);
        }
        assert!(nav.current_state().is_home());
        assert_eq!(tui.status_message, "Course complete: Short Course");
        assert_eq!(tui.status_kind, StatusKind::Success);
        assert_eq!(tui.course_grid.selected_id(), Some("short"));
    }

    #[test]
    fn test_exit_focuses_previous_course() {
        let (mut nav, mut tui) = setup();
        handle_event(&mut nav, &mut tui, TuiEvent::Pick(1));
        tui.course_grid.focus("short");
        handle_event(&mut nav, &mut tui, TuiEvent::Back);
        assert_eq!(tui.course_grid.selected_id(), Some("single"));
    }

    #[test]
    fn test_q_quits_only_from_home() {
        let (mut nav, mut tui) = setup();
        handle_event(&mut nav, &mut tui, TuiEvent::Submit);
        assert!(!handle_event(&mut nav, &mut tui, TuiEvent::Quit));
        assert!(handle_event(&mut nav, &mut tui, TuiEvent::ForceQuit));
        handle_event(&mut nav, &mut tui, TuiEvent::Back);
        assert!(handle_event(&mut nav, &mut tui, TuiEvent::Quit));
    }

    #[test]
    fn test_toggle_theme_is_local() {
        let (mut nav, mut tui) = setup();
        assert!(!handle_event(&mut nav, &mut tui, TuiEvent::ToggleTheme));
        assert_eq!(tui.theme, Theme::Light);
        assert_eq!(tui.status_message, "Theme: light");
        assert!(nav.current_state().is_home());
    }

    #[test]
    fn test_toggle_theme_is_saved() {
        let dir = std::env::temp_dir().join(format!("academy-tui-test-{}", std::process::id()));
        let path = dir.join("state.json");
        let _ = std::fs::remove_dir_all(&dir);

        let (mut nav, mut tui) = setup();
        tui.state_path = Some(path.clone());
        handle_event(&mut nav, &mut tui, TuiEvent::ToggleTheme);
        assert_eq!(
            config::load_state_from(&path).unwrap().theme,
            Some(Theme::Light)
        );
        assert_eq!(tui.status_kind, StatusKind::Info);

        handle_event(&mut nav, &mut tui, TuiEvent::ToggleTheme);
        assert_eq!(
            config::load_state_from(&path).unwrap().theme,
            Some(Theme::Dark)
        );

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_switching_course_focuses_new_card() {
        let (mut nav, mut tui) = setup();
        handle_event(&mut nav, &mut tui, TuiEvent::Pick(0));
        handle_event(&mut nav, &mut tui, TuiEvent::Next);
        handle_event(&mut nav, &mut tui, TuiEvent::Back);
        assert_eq!(tui.course_grid.selected_id(), Some("short"));
        handle_event(&mut nav, &mut tui, TuiEvent::Pick(1));
        assert_eq!(nav.current_state(), &NavigationState::in_lesson("single", 0));
        assert_eq!(tui.course_grid.selected_id(), Some("single"));
    }

    #[test]
    fn test_navigation_clears_status() {
        let (mut nav, mut tui) = setup();
        handle_event(&mut nav, &mut tui, TuiEvent::ToggleTheme);
        handle_event(&mut nav, &mut tui, TuiEvent::Submit);
        assert!(tui.status_message.is_empty());
    }

    #[test]
    fn test_selecting_other_course_mid_lesson_moves_focus() {
        let (mut nav, mut tui) = setup();
        handle_event(&mut nav, &mut tui, TuiEvent::Submit);
        handle_event(&mut nav, &mut tui, TuiEvent::Next);
        handle_event(&mut nav, &mut tui, TuiEvent::Next);
        tui.lesson.content_height = 40;
        tui.lesson.viewport_height = 10;
        handle_event(&mut nav, &mut tui, TuiEvent::ScrollDown);

        assert!(!apply_action(&mut nav, &mut tui, Action::SelectCourse("single".to_string())));
        assert_eq!(nav.current_state(), &NavigationState::in_lesson("single", 0));
        assert_eq!(tui.course_grid.selected_id(), Some("single"));
        assert_eq!(tui.lesson.scroll_state.offset().y, 0);
    }

    #[test]
    fn test_unknown_start_course_stays_home_with_error() {
        let (mut nav, mut tui) = setup();
        apply_action(&mut nav, &mut tui, Action::SelectCourse("cobol".to_string()));
        assert!(nav.current_state().is_home());
        assert_eq!(tui.status_message, "unknown course: cobol");
        assert_eq!(tui.status_kind, StatusKind::Error);
    }

    #[test]
    fn test_rejected_effect_shows_error() {
        let (_, mut tui) = setup();
        let effect = Effect::Rejected(crate::core::CatalogError::UnknownCourse("rust".into()));
        assert!(!apply_effect(&mut tui, None, effect));
        assert_eq!(tui.status_message, "unknown course: rust");
        assert_eq!(tui.status_kind, StatusKind::Error);
    }

    #[test]
    fn test_arrow_keys_move_grid_at_home() {
        let (mut nav, mut tui) = setup();
        handle_event(&mut nav, &mut tui, TuiEvent::CursorDown);
        assert_eq!(tui.course_grid.selected_id(), Some("single"));
        assert!(nav.current_state().is_home());
    }
}
