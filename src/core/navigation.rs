//! # Navigation Controller
//!
//! Owns the one `NavigationState` of a session and the shared catalog it is
//! checked against. Each operation computes the next state with the pure
//! functions in [`state`](crate::core::state) and stores it in a single step.
//!
//! Operations report a [`Transition`] so callers know whether to redraw and
//! whether a course was just finished. Rendering is never triggered from here.

use std::sync::Arc;

use log::debug;

use crate::core::catalog::{CatalogError, ContentCatalog, Course, Lesson};
use crate::core::state::NavigationState;

/// Outcome of a navigation operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The state changed.
    Moved,
    /// The operation was a no-op.
    Unchanged,
    /// `next()` on the last lesson returned to Home.
    Completed { course_id: String },
}

pub struct NavigationController {
    catalog: Arc<ContentCatalog>,
    state: NavigationState,
}

impl NavigationController {
    pub fn new(catalog: Arc<ContentCatalog>) -> Self {
        Self {
            catalog,
            state: NavigationState::Home,
        }
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn current_state(&self) -> &NavigationState {
        &self.state
    }

    /// The open course, with its id.
    pub fn current_course(&self) -> Option<(&str, &Course)> {
        let course_id = self.state.course_id()?;
        let course = self.catalog.get_course(course_id).ok()?;
        Some((course_id, course))
    }

    pub fn current_lesson(&self) -> Option<&Lesson> {
        let (_, course) = self.current_course()?;
        course.lesson(self.state.lesson_index())
    }

    pub fn is_last_lesson(&self) -> bool {
        self.current_course()
            .is_some_and(|(_, course)| self.state.lesson_index() == course.last_index())
    }

    /// Open a course at lesson 0. Unknown ids leave the state untouched.
    pub fn select_course(&mut self, course_id: &str) -> Result<Transition, CatalogError> {
        let next = self.state.select_course(&self.catalog, course_id)?;
        Ok(self.apply(next))
    }

    pub fn next(&mut self) -> Transition {
        let finishing = match &self.state {
            NavigationState::InLesson { course_id, .. } if self.is_last_lesson() => {
                Some(course_id.clone())
            }
            _ => None,
        };
        let next = self.state.next(&self.catalog);
        let transition = self.apply(next);

        match (finishing, transition) {
            (Some(course_id), Transition::Moved) => Transition::Completed { course_id },
            (_, transition) => transition,
        }
    }

    pub fn prev(&mut self) -> Transition {
        let next = self.state.prev();
        self.apply(next)
    }

    pub fn exit(&mut self) -> Transition {
        let next = self.state.exit();
        self.apply(next)
    }

    fn apply(&mut self, next: NavigationState) -> Transition {
        if next == self.state {
            return Transition::Unchanged;
        }
        debug!("Navigation: {:?} -> {:?}", self.state, next);
        self.state = next;
        Transition::Moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_controller;

    #[test]
    fn test_new_controller_starts_home() {
        let nav = test_controller();
        assert!(nav.current_state().is_home());
        assert!(nav.current_course().is_none());
        assert!(nav.current_lesson().is_none());
        assert!(!nav.is_last_lesson());
    }

    #[test]
    fn test_select_course_moves() {
        let mut nav = test_controller();
        assert_eq!(nav.select_course("short"), Ok(Transition::Moved));
        assert_eq!(
            nav.current_state(),
            &NavigationState::in_lesson("short", 0)
        );
        assert_eq!(nav.current_lesson().map(|l| l.title), Some("Lesson 1"));
    }

    #[test]
    fn test_reselecting_course_restarts() {
        let mut nav = test_controller();
        nav.select_course("short").unwrap();
        nav.next();
        nav.next();
        assert_eq!(nav.select_course("short"), Ok(Transition::Moved));
        assert_eq!(nav.current_state().lesson_index(), 0);
    }

    #[test]
    fn test_selecting_other_course_mid_lesson_starts_at_zero() {
        let mut nav = test_controller();
        nav.select_course("short").unwrap();
        nav.next();
        nav.next();
        assert_eq!(nav.select_course("single"), Ok(Transition::Moved));
        assert_eq!(
            nav.current_state(),
            &NavigationState::in_lesson("single", 0)
        );
    }

    #[test]
    fn test_reselecting_at_lesson_zero_is_unchanged() {
        let mut nav = test_controller();
        nav.select_course("short").unwrap();
        assert_eq!(nav.select_course("short"), Ok(Transition::Unchanged));
    }

    #[test]
    fn test_unknown_course_keeps_state() {
        let mut nav = test_controller();
        nav.select_course("short").unwrap();
        nav.next();
        let before = nav.current_state().clone();

        let result = nav.select_course("haskell");
        assert_eq!(
            result,
            Err(CatalogError::UnknownCourse("haskell".to_string()))
        );
        assert_eq!(nav.current_state(), &before);
    }

    #[test]
    fn test_next_through_course_completes() {
        let mut nav = test_controller();
        nav.select_course("short").unwrap();
        assert_eq!(nav.next(), Transition::Moved);
        assert_eq!(nav.next(), Transition::Moved);
        assert!(nav.is_last_lesson());
        assert_eq!(
            nav.next(),
            Transition::Completed {
                course_id: "short".to_string()
            }
        );
        assert!(nav.current_state().is_home());
    }

    #[test]
    fn test_single_lesson_course_completes_immediately() {
        let mut nav = test_controller();
        nav.select_course("single").unwrap();
        assert!(nav.is_last_lesson());
        assert_eq!(
            nav.next(),
            Transition::Completed {
                course_id: "single".to_string()
            }
        );
    }

    #[test]
    fn test_next_and_prev_at_home_are_noops() {
        let mut nav = test_controller();
        assert_eq!(nav.next(), Transition::Unchanged);
        assert_eq!(nav.prev(), Transition::Unchanged);
        assert!(nav.current_state().is_home());
    }

    #[test]
    fn test_prev_at_zero_is_noop() {
        let mut nav = test_controller();
        nav.select_course("short").unwrap();
        assert_eq!(nav.prev(), Transition::Unchanged);
        assert_eq!(
            nav.current_state(),
            &NavigationState::in_lesson("short", 0)
        );
    }

    #[test]
    fn test_exit_is_idempotent() {
        let mut nav = test_controller();
        nav.select_course("short").unwrap();
        assert_eq!(nav.exit(), Transition::Moved);
        let once = nav.current_state().clone();
        assert_eq!(nav.exit(), Transition::Unchanged);
        assert_eq!(nav.current_state(), &once);
        assert!(once.is_home());
    }
}
