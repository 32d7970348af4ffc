//! Output projection for the masonry component.
//!
//! This module turns a configured component into the data consumed by
//! external renderers: ordered per-breakpoint CSS width rows for the
//! stylesheet template, and the grid container class list for the HTML
//! template.

pub mod classes;
pub mod css;

pub use classes::grid_class_names;
pub use css::{column_widths, ColumnWidth};
