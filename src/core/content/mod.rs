//! # Built-in Courses
//!
//! The hand-authored lesson tables. Each submodule returns one `Course`;
//! [`builtin_catalog`] registers them in the order the home view shows them.

mod css;
mod html;
mod js;
mod python;

use crate::core::catalog::{CatalogError, ContentCatalog};

pub fn builtin_catalog() -> Result<ContentCatalog, CatalogError> {
    ContentCatalog::builder()
        .course("html", html::course())
        .course("css", css::course())
        .course("js", js::course())
        .course("python", python::course())
        .build()
}
