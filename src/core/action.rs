//! # Actions
//!
//! Everything the learner can do becomes an `Action`.
//! Picks a course card? That's `Action::SelectCourse(id)`.
//! Presses "Next →"? That's `Action::NextLesson`.
//!
//! `update()` feeds the action to the `NavigationController` and returns an
//! `Effect` telling the adapter what to do next. No rendering here.
//!
//! ```text
//! Controller + Action  →  update()  →  Effect
//! ```
//!
//! This makes everything testable: `assert_eq!(update(&mut nav, action), expected)`.
//! And debuggable: every action is logged, so a session can be replayed from the log.

use log::{debug, info, warn};

use crate::core::catalog::CatalogError;
use crate::core::navigation::{NavigationController, Transition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectCourse(String),
    NextLesson,
    PrevLesson,
    ExitCourse,
    Quit,
}

/// What the adapter should do after an action has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// State changed; draw the new view.
    Redraw,
    /// The last lesson was finished and the learner is back at Home.
    CourseCompleted { course_id: String, title: String },
    /// The action was refused. State is unchanged.
    Rejected(CatalogError),
    Quit,
}

pub fn update(nav: &mut NavigationController, action: Action) -> Effect {
    debug!("Action: {:?}", action);

    let transition = match action {
        Action::SelectCourse(course_id) => match nav.select_course(&course_id) {
            Ok(transition) => transition,
            Err(e) => {
                warn!("Rejected course selection: {}", e);
                return Effect::Rejected(e);
            }
        },
        Action::NextLesson => nav.next(),
        Action::PrevLesson => nav.prev(),
        Action::ExitCourse => nav.exit(),
        Action::Quit => return Effect::Quit,
    };

    match transition {
        Transition::Moved => Effect::Redraw,
        Transition::Unchanged => Effect::None,
        Transition::Completed { course_id } => {
            let title = nav
                .catalog()
                .get_course(&course_id)
                .map(|course| course.title.to_string())
                .unwrap_or_else(|_| course_id.clone());
            info!("Course completed: {}", course_id);
            Effect::CourseCompleted { course_id, title }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::NavigationState;
    use crate::test_support::test_controller;

    #[test]
    fn test_select_course_redraws() {
        let mut nav = test_controller();
        let effect = update(&mut nav, Action::SelectCourse("short".to_string()));
        assert_eq!(effect, Effect::Redraw);
        assert_eq!(
            nav.current_state(),
            &NavigationState::in_lesson("short", 0)
        );
    }

    #[test]
    fn test_select_other_course_mid_lesson_redraws() {
        let mut nav = test_controller();
        update(&mut nav, Action::SelectCourse("short".to_string()));
        update(&mut nav, Action::NextLesson);
        update(&mut nav, Action::NextLesson);
        assert_eq!(
            update(&mut nav, Action::SelectCourse("single".to_string())),
            Effect::Redraw
        );
        assert_eq!(
            nav.current_state(),
            &NavigationState::in_lesson("single", 0)
        );
    }

    #[test]
    fn test_unknown_course_is_rejected() {
        let mut nav = test_controller();
        let effect = update(&mut nav, Action::SelectCourse("rust".to_string()));
        assert_eq!(
            effect,
            Effect::Rejected(CatalogError::UnknownCourse("rust".to_string()))
        );
        assert!(nav.current_state().is_home());
    }

    #[test]
    fn test_noop_yields_none() {
        let mut nav = test_controller();
        assert_eq!(update(&mut nav, Action::NextLesson), Effect::None);
        assert_eq!(update(&mut nav, Action::PrevLesson), Effect::None);
        assert_eq!(update(&mut nav, Action::ExitCourse), Effect::None);
    }

    #[test]
    fn test_finishing_course_reports_completion() {
        let mut nav = test_controller();
        update(&mut nav, Action::SelectCourse("single".to_string()));
        let effect = update(&mut nav, Action::NextLesson);
        assert_eq!(
            effect,
            Effect::CourseCompleted {
                course_id: "single".to_string(),
                title: "Single Lesson".to_string(),
            }
        );
        assert!(nav.current_state().is_home());
    }

    #[test]
    fn test_quit_leaves_state_alone() {
        let mut nav = test_controller();
        update(&mut nav, Action::SelectCourse("short".to_string()));
        assert_eq!(update(&mut nav, Action::Quit), Effect::Quit);
        assert_eq!(nav.current_state().course_id(), Some("short"));
    }
}
