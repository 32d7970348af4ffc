//! Masonry component configuration model.

use crate::constants::DEFAULT_GUTTER;
use crate::models::ViewportWidths;
use serde::{Deserialize, Serialize};

/// Column-width unit selection.
///
/// The component keeps two parallel [`ViewportWidths`] sets, one per unit,
/// so switching units never loses the values entered for the other unit.
/// This flag decides which set is active and which CSS suffix is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColumnUnit {
    /// Fixed pixel column widths
    #[default]
    Pixel,
    /// Percentage column widths relative to the container
    Percent,
}

impl ColumnUnit {
    /// Returns the CSS unit suffix appended to column width values.
    #[must_use]
    pub const fn css_suffix(self) -> &'static str {
        match self {
            Self::Pixel => "px",
            Self::Percent => "%",
        }
    }

    /// Returns true if columns are sized as percentages.
    #[must_use]
    pub const fn is_percent(self) -> bool {
        matches!(self, Self::Percent)
    }
}

/// Validated configuration for a masonry grid component.
///
/// This is the input surface populated by the hosting admin/config layer;
/// the crate itself only reads it when deriving the engine config and the
/// per-breakpoint CSS width rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasonryComponent {
    /// Active column-width unit
    pub column_unit: ColumnUnit,
    /// Spacing between grid items in pixels
    pub gutter: u32,
    /// Whether items are laid out in strict left-to-right order
    pub horizontal_order: bool,
    /// Column widths used when the unit is [`ColumnUnit::Pixel`]
    pub pixel_widths: ViewportWidths,
    /// Column widths used when the unit is [`ColumnUnit::Percent`]
    pub percent_widths: ViewportWidths,
    /// Additional grid container class names appended by the host
    pub extra_grid_classes: Vec<String>,
}

impl Default for MasonryComponent {
    fn default() -> Self {
        Self {
            column_unit: ColumnUnit::Pixel,
            gutter: DEFAULT_GUTTER,
            horizontal_order: true,
            pixel_widths: ViewportWidths::new(),
            percent_widths: ViewportWidths::new(),
            extra_grid_classes: Vec::new(),
        }
    }
}

impl MasonryComponent {
    /// Creates a component with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the viewport width set matching the active column unit.
    #[must_use]
    pub const fn column_width_data(&self) -> &ViewportWidths {
        match self.column_unit {
            ColumnUnit::Pixel => &self.pixel_widths,
            ColumnUnit::Percent => &self.percent_widths,
        }
    }

    /// Returns a mutable reference to the active viewport width set.
    pub fn column_width_data_mut(&mut self) -> &mut ViewportWidths {
        match self.column_unit {
            ColumnUnit::Pixel => &mut self.pixel_widths,
            ColumnUnit::Percent => &mut self.percent_widths,
        }
    }

    /// Returns the CSS unit suffix for the active column unit.
    #[must_use]
    pub const fn column_unit_css(&self) -> &'static str {
        self.column_unit.css_suffix()
    }

    /// Returns true if the active column unit is a percentage.
    #[must_use]
    pub const fn is_percent_position(&self) -> bool {
        self.column_unit.is_percent()
    }

    /// Appends a class name to the grid container class list.
    ///
    /// Order is preserved and duplicates are not removed; the rendered
    /// class list is assembled by [`crate::export::grid_class_names`].
    pub fn add_grid_class(&mut self, class: impl Into<String>) {
        self.extra_grid_classes.push(class.into());
    }
}
