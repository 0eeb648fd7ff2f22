//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Academy name, greeting, theme and status line
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state in `TuiState` and emit events:
//! - `CourseGrid`: Home view with the course cards and a cursor
//! - `LessonView`: Scrollable lesson body with header and footer hints
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (constructor arguments), not by
//! reaching into the controller. This keeps dependencies explicit and lets
//! every component be rendered against a `TestBackend` in isolation.
//!
//! ```rust,ignore
//! CourseGrid::new(&mut tui.course_grid, nav.catalog(), palette).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status line)
//! ├── course_grid.rs   (Home view)
//! └── lesson_view.rs   (Lesson reader)
//! ```

pub mod course_grid;
pub mod lesson_view;
pub mod title_bar;

pub use course_grid::{CourseGrid, CourseGridEvent, CourseGridState};
pub use lesson_view::{LessonView, LessonViewState};
pub use title_bar::{StatusKind, TitleBar};
