//! # Navigation State
//!
//! The only mutable data in the academy: which course (if any) is open and
//! which lesson of it is on screen.
//!
//! ```text
//!             select_course(c)                next (not last)
//!   ┌──────┐ ─────────────────▶ ┌──────────────┐ ──────┐
//!   │ Home │                    │ InLesson(c,i)│ ◀─────┘
//!   └──────┘ ◀───────────────── └──────────────┘   prev (i > 0)
//!       ▲      exit / next (last)       │
//!       └───────────────────────────────┘
//! ```
//!
//! Every transition here is a pure function: it takes the current state and
//! returns the next one. `NavigationController` applies the result in one
//! assignment, so an out-of-bounds index is never observable.

use crate::core::catalog::{CatalogError, ContentCatalog};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavigationState {
    /// Course list. No lesson is active.
    #[default]
    Home,
    /// `lesson_index` is always below the course's lesson count.
    InLesson {
        course_id: String,
        lesson_index: usize,
    },
}

impl NavigationState {
    pub fn in_lesson(course_id: impl Into<String>, lesson_index: usize) -> Self {
        NavigationState::InLesson {
            course_id: course_id.into(),
            lesson_index,
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, NavigationState::Home)
    }

    pub fn course_id(&self) -> Option<&str> {
        match self {
            NavigationState::Home => None,
            NavigationState::InLesson { course_id, .. } => Some(course_id),
        }
    }

    /// Active lesson index; reads as 0 at Home.
    pub fn lesson_index(&self) -> usize {
        match self {
            NavigationState::Home => 0,
            NavigationState::InLesson { lesson_index, .. } => *lesson_index,
        }
    }

    /// Open `course_id` at its first lesson, whatever the current state.
    pub fn select_course(
        &self,
        catalog: &ContentCatalog,
        course_id: &str,
    ) -> Result<NavigationState, CatalogError> {
        catalog.get_course(course_id)?;
        Ok(NavigationState::in_lesson(course_id, 0))
    }

    /// Advance one lesson, or return Home from the last one.
    pub fn next(&self, catalog: &ContentCatalog) -> NavigationState {
        let NavigationState::InLesson {
            course_id,
            lesson_index,
        } = self
        else {
            return NavigationState::Home;
        };

        // Only reachable for ids select_course never accepted.
        let Ok(course) = catalog.get_course(course_id) else {
            return NavigationState::Home;
        };

        if *lesson_index < course.last_index() {
            NavigationState::in_lesson(course_id.clone(), lesson_index + 1)
        } else {
            NavigationState::Home
        }
    }

    /// Step back one lesson. Stays put at index 0.
    pub fn prev(&self) -> NavigationState {
        match self {
            NavigationState::InLesson {
                course_id,
                lesson_index,
            } if *lesson_index > 0 => {
                NavigationState::in_lesson(course_id.clone(), lesson_index - 1)
            }
            other => other.clone(),
        }
    }

    pub fn exit(&self) -> NavigationState {
        NavigationState::Home
    }
}
