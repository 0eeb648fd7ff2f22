//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::catalog::{ContentCatalog, Course, Lesson};
use crate::core::navigation::NavigationController;

const TITLES: [&str; 5] = ["Lesson 1", "Lesson 2", "Lesson 3", "Lesson 4", "Lesson 5"];

/// `count` placeholder lessons (at most 5).
pub fn lessons(count: usize) -> Vec<Lesson> {
    TITLES
        .iter()
        .take(count)
        .map(|&title| Lesson::new(title, "Body text.").with_example("print('hi')"))
        .collect()
}

/// A two-course catalog: "short" (3 lessons) and "single" (1 lesson).
pub fn test_catalog() -> ContentCatalog {
    ContentCatalog::builder()
        .course(
            "short",
            Course::new("Short Course", lessons(3))
                .tagline("Three quick lessons")
                .icon("S")
                .syntax("python"),
        )
        .course("single", Course::new("Single Lesson", lessons(1)))
        .build()
        .expect("test catalog is valid")
}

/// Creates a controller over `test_catalog()`, starting at Home.
pub fn test_controller() -> NavigationController {
    NavigationController::new(Arc::new(test_catalog()))
}
