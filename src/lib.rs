//! Responsive Masonry Grid Configuration
//!
//! This library models the configuration of a responsive masonry image
//! grid: per-breakpoint column widths in pixel or percent units, gutter
//! spacing, and item ordering. From a configured component it derives the
//! JSON configuration consumed by a client-side masonry layout engine and
//! the ordered per-breakpoint CSS width data consumed by a stylesheet
//! template.

// Module declarations
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
