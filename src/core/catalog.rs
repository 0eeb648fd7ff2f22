//! # Content Catalog
//!
//! The immutable registry of every course the academy ships with.
//!
//! ```text
//! ContentCatalog
//! ├── "html"   → Course { title, tagline, icon, syntax, lessons: [Lesson; 15] }
//! ├── "css"    → Course { .. lessons: [Lesson; 15] }
//! ├── "js"     → Course { .. lessons: [Lesson; 20] }
//! └── "python" → Course { .. lessons: [Lesson; 20] }
//! ```
//!
//! The catalog is assembled once through [`CatalogBuilder`] and never mutated
//! afterwards. Registration order is kept because the home view lists courses
//! in the order they were authored.

use std::fmt;

use serde::Serialize;

/// A single teaching unit. No identity beyond its position in a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub title: &'static str,
    /// Lesson body, authored as Markdown.
    pub content: &'static str,
    /// Optional code or markup snippet shown under the body.
    pub example: Option<&'static str>,
}

impl Lesson {
    pub const fn new(title: &'static str, content: &'static str) -> Self {
        Self {
            title,
            content,
            example: None,
        }
    }

    pub const fn with_example(mut self, example: &'static str) -> Self {
        self.example = Some(example);
        self
    }
}

/// A named, ordered sequence of lessons.
///
/// The lesson list may only be read once constructed. Emptiness is rejected when
/// the course is registered, so every course reachable through a catalog has at
/// least one lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub title: &'static str,
    pub tagline: &'static str,
    pub icon: &'static str,
    /// Language token for example highlighting ("html", "css", "js", "python").
    pub syntax: &'static str,
    lessons: Vec<Lesson>,
}

impl Course {
    pub fn new(title: &'static str, lessons: Vec<Lesson>) -> Self {
        Self {
            title,
            tagline: "",
            icon: "•",
            syntax: "",
            lessons,
        }
    }

    pub fn tagline(mut self, tagline: &'static str) -> Self {
        self.tagline = tagline;
        self
    }

    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = icon;
        self
    }

    pub fn syntax(mut self, syntax: &'static str) -> Self {
        self.syntax = syntax;
        self
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn lesson(&self, index: usize) -> Option<&Lesson> {
        self.lessons.get(index)
    }

    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    /// Index of the final lesson.
    pub fn last_index(&self) -> usize {
        self.lessons.len().saturating_sub(1)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The requested course id is not registered. The only lookup error.
    UnknownCourse(String),
    /// A course was registered without lessons.
    EmptyCourse(String),
    /// The same course id was registered twice.
    DuplicateCourse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::UnknownCourse(id) => write!(f, "unknown course: {id}"),
            CatalogError::EmptyCourse(id) => write!(f, "course has no lessons: {id}"),
            CatalogError::DuplicateCourse(id) => write!(f, "course registered twice: {id}"),
        }
    }
}

impl std::error::Error for CatalogError {}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug)]
pub struct ContentCatalog {
    courses: Vec<(String, Course)>,
}

impl ContentCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Look up a course by id.
    pub fn get_course(&self, course_id: &str) -> Result<&Course, CatalogError> {
        self.courses
            .iter()
            .find(|(id, _)| id == course_id)
            .map(|(_, course)| course)
            .ok_or_else(|| CatalogError::UnknownCourse(course_id.to_string()))
    }

    /// Registered course ids, in registration order.
    pub fn list_course_ids(&self) -> Vec<&str> {
        self.courses.iter().map(|(id, _)| id.as_str()).collect()
    }

    pub fn courses(&self) -> impl Iterator<Item = (&str, &Course)> {
        self.courses.iter().map(|(id, course)| (id.as_str(), course))
    }

    pub fn contains(&self, course_id: &str) -> bool {
        self.courses.iter().any(|(id, _)| id == course_id)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Flat listing used by `--list`.
    pub fn summaries(&self) -> Vec<CourseSummary> {
        self.courses()
            .map(|(id, course)| CourseSummary {
                id: id.to_string(),
                title: course.title.to_string(),
                tagline: course.tagline.to_string(),
                lessons: course.lesson_count(),
            })
            .collect()
    }
}

/// Serializable overview of one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub lessons: usize,
}

/// Collects `(id, Course)` pairs and validates them on [`build`](Self::build).
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    courses: Vec<(String, Course)>,
}

impl CatalogBuilder {
    pub fn course(mut self, course_id: impl Into<String>, course: Course) -> Self {
        self.courses.push((course_id.into(), course));
        self
    }

    pub fn build(self) -> Result<ContentCatalog, CatalogError> {
        for (i, (id, course)) in self.courses.iter().enumerate() {
            if course.lessons.is_empty() {
                return Err(CatalogError::EmptyCourse(id.clone()));
            }
            if self.courses[..i].iter().any(|(seen, _)| seen == id) {
                return Err(CatalogError::DuplicateCourse(id.clone()));
            }
        }
        Ok(ContentCatalog {
            courses: self.courses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{lessons, test_catalog};

    #[test]
    fn test_get_course_known_id() {
        let catalog = test_catalog();
        let course = catalog.get_course("short").unwrap();
        assert_eq!(course.title, "Short Course");
        assert_eq!(course.lesson_count(), 3);
    }

    #[test]
    fn test_get_course_unknown_id() {
        let catalog = test_catalog();
        assert_eq!(
            catalog.get_course("cobol"),
            Err(CatalogError::UnknownCourse("cobol".to_string()))
        );
    }

    #[test]
    fn test_list_course_ids_keeps_registration_order() {
        let catalog = test_catalog();
        assert_eq!(catalog.list_course_ids(), vec!["short", "single"]);
        // Repeated calls give identical results
        assert_eq!(catalog.list_course_ids(), catalog.list_course_ids());
    }

    #[test]
    fn test_build_rejects_empty_course() {
        let result = ContentCatalog::builder()
            .course("empty", Course::new("Empty", vec![]))
            .build();
        assert_eq!(
            result.unwrap_err(),
            CatalogError::EmptyCourse("empty".to_string())
        );
    }

    #[test]
    fn test_build_rejects_duplicate_ids() {
        let result = ContentCatalog::builder()
            .course("a", Course::new("A", lessons(1)))
            .course("a", Course::new("A again", lessons(2)))
            .build();
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateCourse("a".to_string())
        );
    }

    #[test]
    fn test_last_index() {
        let course = Course::new("Three", lessons(3));
        assert_eq!(course.last_index(), 2);
        assert!(course.lesson(2).is_some());
        assert!(course.lesson(3).is_none());
    }

    #[test]
    fn test_summaries_serialize() {
        let catalog = test_catalog();
        let json = serde_json::to_string(&catalog.summaries()).unwrap();
        assert!(json.contains("\"id\":\"short\""));
        assert!(json.contains("\"lessons\":3"));
    }

    #[test]
    fn test_error_display() {
        let err = CatalogError::UnknownCourse("rust".to_string());
        assert_eq!(err.to_string(), "unknown course: rust");
    }
}
