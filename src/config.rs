//! Masonry engine configuration generation.
//!
//! Builds the JSON configuration object consumed by the client-side
//! masonry layout engine from a configured [`MasonryComponent`].

use crate::constants::{COLUMN_SELECTOR, ITEM_SELECTOR};
use crate::models::MasonryComponent;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Configuration blob for the client-side masonry engine.
///
/// Derived on each read from the component; never persisted. The selector
/// fields always carry their constant values so the engine can locate the
/// sizer and item elements in the rendered markup.
///
/// The `gutter` key is present only when the configured gutter is
/// non-zero: a gutter of `0` and an unconfigured gutter serialize
/// identically, with the key omitted. Consumers must tolerate the
/// optional key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasonryConfig {
    /// Selector for the element measured to size columns
    pub column_width: String,
    /// Selector matching the grid item elements
    pub item_selector: String,
    /// Whether column widths are percentages of the container
    pub percent_position: bool,
    /// Whether items are laid out in strict left-to-right order
    pub horizontal_order: bool,
    /// Spacing between items in pixels, omitted when zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gutter: Option<u32>,
}

impl MasonryConfig {
    /// Builds the engine configuration for a component.
    ///
    /// # Examples
    ///
    /// ```
    /// use masonry_grid::config::MasonryConfig;
    /// use masonry_grid::models::MasonryComponent;
    ///
    /// let component = MasonryComponent::new();
    /// let config = MasonryConfig::from_component(&component);
    ///
    /// assert_eq!(config.column_width, ".masonry-grid-sizer");
    /// assert_eq!(config.gutter, Some(10));
    /// ```
    #[must_use]
    pub fn from_component(component: &MasonryComponent) -> Self {
        Self {
            column_width: COLUMN_SELECTOR.to_string(),
            item_selector: ITEM_SELECTOR.to_string(),
            percent_position: component.is_percent_position(),
            horizontal_order: component.horizontal_order,
            gutter: (component.gutter > 0).then_some(component.gutter),
        }
    }

    /// Serializes the configuration to a JSON string for transport to the
    /// client-side engine.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl MasonryComponent {
    /// Returns the engine configuration derived from this component.
    #[must_use]
    pub fn masonry_config(&self) -> MasonryConfig {
        MasonryConfig::from_component(self)
    }

    /// Returns the engine configuration as a JSON-encoded string.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn masonry_config_json(&self) -> Result<String> {
        self.masonry_config().to_json()
    }
}
