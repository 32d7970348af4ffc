//! Grid container class-name assembly.

use crate::constants::BASE_GRID_CLASS;
use crate::models::MasonryComponent;

/// Returns the class names for the grid container element.
///
/// The base class comes first, followed by any host-supplied extra classes
/// in insertion order. Duplicates are kept as-is; deduplication is the
/// template's concern if it cares.
#[must_use]
pub fn grid_class_names(component: &MasonryComponent) -> Vec<String> {
    let mut classes = Vec::with_capacity(1 + component.extra_grid_classes.len());
    classes.push(BASE_GRID_CLASS.to_string());
    classes.extend(component.extra_grid_classes.iter().cloned());
    classes
}
