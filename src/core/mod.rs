//! # Core Application Logic
//!
//! This module contains the academy's content model and navigation rules.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ContentCatalog       │
//!                    │  • NavigationState      │
//!                    │  • Action → update()    │
//!                    │                         │
//!                    │  No rendering. Pure.    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Web     │      │   Tests    │
//!     │  Adapter   │      │  Adapter   │      │ (tests/)   │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: `Lesson`, `Course` and the immutable `ContentCatalog`
//! - [`content`]: the authored lesson tables
//! - [`state`]: `NavigationState` and its pure transitions
//! - [`navigation`]: `NavigationController`, the owner of the state
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: layered settings (file, env, CLI)

pub mod action;
pub mod catalog;
pub mod config;
pub mod content;
pub mod navigation;
pub mod state;

pub use catalog::{CatalogError, ContentCatalog, Course, Lesson};
pub use navigation::{NavigationController, Transition};
pub use state::NavigationState;
