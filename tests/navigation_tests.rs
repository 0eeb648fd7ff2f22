use std::sync::Arc;

use academy::core::action::{Action, Effect, update};
use academy::core::content::builtin_catalog;
use academy::core::{CatalogError, NavigationController, NavigationState, Transition};

// ============================================================================
// Helper Functions
// ============================================================================

/// Creates a controller over the built-in catalog, starting at Home.
fn controller() -> NavigationController {
    let catalog = builtin_catalog().expect("built-in catalog is valid");
    NavigationController::new(Arc::new(catalog))
}

const COURSE_IDS: [&str; 4] = ["html", "css", "js", "python"];

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn test_declared_lesson_counts() {
    let catalog = builtin_catalog().unwrap();
    let counts: Vec<(&str, usize)> = catalog
        .courses()
        .map(|(id, course)| (id, course.lesson_count()))
        .collect();
    assert_eq!(
        counts,
        vec![("html", 15), ("css", 15), ("js", 20), ("python", 20)]
    );
}

#[test]
fn test_course_titles() {
    let catalog = builtin_catalog().unwrap();
    assert_eq!(catalog.get_course("html").unwrap().title, "HTML Basics");
    assert_eq!(catalog.get_course("css").unwrap().title, "CSS Styling");
    assert_eq!(catalog.get_course("js").unwrap().title, "JavaScript");
    assert_eq!(catalog.get_course("python").unwrap().title, "Python");
}

// ============================================================================
// Transitions
// ============================================================================

#[test]
fn test_select_course_opens_first_lesson() {
    for id in COURSE_IDS {
        let mut nav = controller();
        assert_eq!(nav.select_course(id), Ok(Transition::Moved));
        assert_eq!(nav.current_state(), &NavigationState::in_lesson(id, 0));
    }
}

#[test]
fn test_next_advances_until_last_lesson() {
    for id in COURSE_IDS {
        let mut nav = controller();
        nav.select_course(id).unwrap();
        let count = nav.current_course().unwrap().1.lesson_count();
        for i in 1..count {
            assert_eq!(nav.next(), Transition::Moved);
            assert_eq!(nav.current_state(), &NavigationState::in_lesson(id, i));
        }
        assert!(nav.is_last_lesson());
        assert_eq!(
            nav.next(),
            Transition::Completed {
                course_id: id.to_string()
            }
        );
        assert!(nav.current_state().is_home());
    }
}

#[test]
fn test_select_course_from_another_course_restarts_at_zero() {
    let mut nav = controller();
    nav.select_course("js").unwrap();
    nav.next();
    nav.next();
    assert_eq!(nav.current_state(), &NavigationState::in_lesson("js", 2));
    assert_eq!(nav.select_course("css"), Ok(Transition::Moved));
    assert_eq!(nav.current_state(), &NavigationState::in_lesson("css", 0));
}

#[test]
fn test_reducer_switches_course_mid_lesson() {
    let mut nav = controller();
    update(&mut nav, Action::SelectCourse("js".to_string()));
    update(&mut nav, Action::NextLesson);
    update(&mut nav, Action::NextLesson);
    assert_eq!(
        update(&mut nav, Action::SelectCourse("css".to_string())),
        Effect::Redraw
    );
    assert_eq!(nav.current_state(), &NavigationState::in_lesson("css", 0));
}

#[test]
fn test_prev_at_first_lesson_is_noop() {
    for id in COURSE_IDS {
        let mut nav = controller();
        nav.select_course(id).unwrap();
        assert_eq!(nav.prev(), Transition::Unchanged);
        assert_eq!(nav.current_state(), &NavigationState::in_lesson(id, 0));
    }
}

#[test]
fn test_unknown_course_leaves_state_unchanged() {
    let mut nav = controller();
    assert_eq!(
        nav.select_course("rust"),
        Err(CatalogError::UnknownCourse("rust".to_string()))
    );
    assert!(nav.current_state().is_home());

    nav.select_course("css").unwrap();
    nav.next();
    let before = nav.current_state().clone();
    assert!(nav.select_course("").is_err());
    assert_eq!(nav.current_state(), &before);
}

#[test]
fn test_exit_from_any_state_goes_home() {
    let mut nav = controller();
    nav.exit();
    assert!(nav.current_state().is_home());

    nav.select_course("js").unwrap();
    nav.next();
    nav.next();
    assert_eq!(nav.exit(), Transition::Moved);
    assert!(nav.current_state().is_home());
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn test_html_walkthrough() {
    let mut nav = controller();
    nav.select_course("html").unwrap();
    for _ in 0..14 {
        nav.next();
    }
    assert_eq!(nav.current_state(), &NavigationState::in_lesson("html", 14));
    nav.next();
    assert_eq!(nav.current_state(), &NavigationState::Home);
}

#[test]
fn test_python_next_then_prev_restores_state() {
    let mut nav = controller();
    nav.select_course("python").unwrap();
    let after_select = nav.current_state().clone();
    nav.next();
    nav.prev();
    assert_eq!(nav.current_state(), &after_select);
    assert_eq!(nav.current_state(), &NavigationState::in_lesson("python", 0));
}

#[test]
fn test_exit_is_idempotent() {
    let mut nav = controller();
    nav.select_course("css").unwrap();
    nav.exit();
    let once = nav.current_state().clone();
    assert_eq!(nav.exit(), Transition::Unchanged);
    assert_eq!(nav.current_state(), &once);
}

#[test]
fn test_reducer_reports_completion_with_title() {
    let mut nav = controller();
    assert_eq!(
        update(&mut nav, Action::SelectCourse("python".to_string())),
        Effect::Redraw
    );
    for _ in 0..19 {
        assert_eq!(update(&mut nav, Action::NextLesson), Effect::Redraw);
    }
    assert_eq!(
        update(&mut nav, Action::NextLesson),
        Effect::CourseCompleted {
            course_id: "python".to_string(),
            title: "Python".to_string(),
        }
    );
    assert_eq!(update(&mut nav, Action::ExitCourse), Effect::None);
}

#[test]
fn test_reducer_rejects_unknown_course() {
    let mut nav = controller();
    assert_eq!(
        update(&mut nav, Action::SelectCourse("cobol".to_string())),
        Effect::Rejected(CatalogError::UnknownCourse("cobol".to_string()))
    );
    assert!(nav.current_state().is_home());
}
