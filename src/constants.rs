//! Crate-wide constants.
//!
//! The selector literals form a stable contract with the client-side
//! masonry engine and the grid markup; changing them breaks selector
//! matching in already-deployed templates.

/// CSS selector identifying the grid-sizer element measured for column width.
pub const COLUMN_SELECTOR: &str = ".masonry-grid-sizer";

/// CSS selector identifying the individual grid item elements.
pub const ITEM_SELECTOR: &str = ".masonry-grid-item";

/// Base class name attached to every grid container element.
pub const BASE_GRID_CLASS: &str = "masonry-grid";

/// Default gutter between grid items, in pixels.
pub const DEFAULT_GUTTER: u32 = 10;
