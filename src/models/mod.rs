//! Data models for the masonry grid component.
//!
//! This module contains the core data structures: the fixed breakpoint
//! enumeration, per-breakpoint width storage, and the component
//! configuration populated by the hosting system. Models are independent
//! of config and CSS output generation.

pub mod breakpoint;
pub mod component;
pub mod viewports;

// Re-export all model types
pub use breakpoint::Breakpoint;
pub use component::{ColumnUnit, MasonryComponent};
pub use viewports::ViewportWidths;
