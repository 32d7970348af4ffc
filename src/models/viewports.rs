//! Per-breakpoint width storage with input validation.

use crate::models::Breakpoint;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A mapping from breakpoint to an optional configured column width.
///
/// Each instance is tied to exactly one unit kind (pixel or percent); the
/// unit is carried by the owning component, not by this structure. Values
/// are independent per breakpoint: reading a breakpoint never falls back to
/// a neighboring breakpoint's value. Consumers that want "only configured
/// breakpoints" skip the unset ones instead.
///
/// A width of `0` is a configured value and is distinct from unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ViewportWidths {
    /// One slot per entry of [`Breakpoint::ALL`], in enumeration order.
    values: [Option<u32>; Breakpoint::ALL.len()],
}

impl ViewportWidths {
    /// Creates an empty value set with every breakpoint unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: [None; Breakpoint::ALL.len()],
        }
    }

    /// Returns the configured width for exactly this breakpoint, or `None`
    /// if it was never assigned. No fallback is performed.
    #[must_use]
    pub const fn get(&self, breakpoint: Breakpoint) -> Option<u32> {
        self.values[breakpoint as usize]
    }

    /// Assigns a width to the given breakpoint.
    pub fn set(&mut self, breakpoint: Breakpoint, value: u32) {
        self.values[breakpoint as usize] = Some(value);
    }

    /// Clears the width for the given breakpoint, returning it to unset.
    pub fn clear(&mut self, breakpoint: Breakpoint) {
        self.values[breakpoint as usize] = None;
    }

    /// Assigns a width from untrusted admin-layer text input.
    ///
    /// An empty (or whitespace-only) string clears the breakpoint. Anything
    /// else must parse as a non-negative integer; negative or non-numeric
    /// input is rejected with a validation error rather than clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use masonry_grid::models::{Breakpoint, ViewportWidths};
    ///
    /// let mut widths = ViewportWidths::new();
    /// widths.set_from_input(Breakpoint::Md, "250").unwrap();
    /// assert_eq!(widths.get(Breakpoint::Md), Some(250));
    ///
    /// widths.set_from_input(Breakpoint::Md, "").unwrap();
    /// assert_eq!(widths.get(Breakpoint::Md), None);
    ///
    /// assert!(widths.set_from_input(Breakpoint::Md, "-5").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the input is non-numeric or negative.
    pub fn set_from_input(&mut self, breakpoint: Breakpoint, input: &str) -> Result<()> {
        let input = input.trim();

        if input.is_empty() {
            self.clear(breakpoint);
            return Ok(());
        }

        if input.starts_with('-') {
            anyhow::bail!("Width for breakpoint '{breakpoint}' must not be negative (got '{input}')");
        }

        let value: u32 = input
            .parse()
            .context(format!("Invalid width '{input}' for breakpoint '{breakpoint}'. Expected a non-negative integer"))?;

        self.set(breakpoint, value);
        Ok(())
    }

    /// Returns true if no breakpoint has a configured width.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Iterates configured `(breakpoint, width)` pairs in enumeration order.
    pub fn iter_set(&self) -> impl Iterator<Item = (Breakpoint, u32)> + '_ {
        Breakpoint::ALL
            .into_iter()
            .filter_map(|bp| self.get(bp).map(|value| (bp, value)))
    }
}
