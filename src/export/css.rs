//! Per-breakpoint CSS column-width projection.
//!
//! Walks the active viewport width set and produces the ordered rows the
//! external stylesheet template turns into media-query column rules.

use crate::models::MasonryComponent;
use serde::{Deserialize, Serialize};

/// One column-width rule for the stylesheet template.
///
/// Rows are regenerated on each projection and are not a live view of the
/// component; re-project after mutating the width sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnWidth {
    /// CSS length literal, e.g. `"250px"` or `"33%"`
    pub width: String,
    /// CSS media-query min-width expression, emitted verbatim
    pub breakpoint: String,
}

/// Projects the component's active width set into ordered CSS rows.
///
/// Breakpoints are visited in enumeration order; breakpoints without a
/// configured value are skipped. A configured width of `0` still produces
/// a row (`"0px"` / `"0%"`) since zero is a set value, not unset.
///
/// # Examples
///
/// ```
/// use masonry_grid::export::column_widths;
/// use masonry_grid::models::{Breakpoint, MasonryComponent};
///
/// let mut component = MasonryComponent::new();
/// component.pixel_widths.set(Breakpoint::Md, 250);
///
/// let rows = column_widths(&component);
/// assert_eq!(rows[0].width, "250px");
/// assert_eq!(rows[0].breakpoint, "(min-width: 768px)");
/// ```
#[must_use]
pub fn column_widths(component: &MasonryComponent) -> Vec<ColumnWidth> {
    let suffix = component.column_unit_css();

    component
        .column_width_data()
        .iter_set()
        .map(|(breakpoint, value)| ColumnWidth {
            width: format!("{value}{suffix}"),
            breakpoint: breakpoint.media_query().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Breakpoint, ColumnUnit};

    #[test]
    fn test_unset_breakpoints_are_skipped() {
        let mut component = MasonryComponent::new();
        component.pixel_widths.set(Breakpoint::Sm, 200);
        component.pixel_widths.set(Breakpoint::Lg, 300);

        let rows = column_widths(&component);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].width, "200px");
        assert_eq!(rows[0].breakpoint, "(min-width: 576px)");
        assert_eq!(rows[1].width, "300px");
        assert_eq!(rows[1].breakpoint, "(min-width: 992px)");
    }

    #[test]
    fn test_empty_value_set_projects_nothing() {
        let component = MasonryComponent::new();
        assert!(column_widths(&component).is_empty());
    }

    #[test]
    fn test_zero_width_still_produces_a_row() {
        let mut component = MasonryComponent::new();
        component.pixel_widths.set(Breakpoint::Xs, 0);

        let rows = column_widths(&component);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].width, "0px");
    }

    #[test]
    fn test_percent_unit_uses_percent_suffix_and_set() {
        let mut component = MasonryComponent::new();
        component.column_unit = ColumnUnit::Percent;
        component.percent_widths.set(Breakpoint::Md, 33);
        component.pixel_widths.set(Breakpoint::Md, 250);

        let rows = column_widths(&component);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].width, "33%");
    }

    #[test]
    fn test_projection_order_ignores_insertion_order() {
        let mut component = MasonryComponent::new();
        component.pixel_widths.set(Breakpoint::Xl, 400);
        component.pixel_widths.set(Breakpoint::Xs, 100);
        component.pixel_widths.set(Breakpoint::Md, 200);

        let widths: Vec<_> = column_widths(&component)
            .into_iter()
            .map(|row| row.width)
            .collect();

        assert_eq!(widths, vec!["100px", "200px", "400px"]);
    }

    #[test]
    fn test_projection_is_restartable() {
        let mut component = MasonryComponent::new();
        component.pixel_widths.set(Breakpoint::Sm, 150);

        assert_eq!(column_widths(&component), column_widths(&component));
    }
}
