//! Fixed breakpoint enumeration and media-query descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named responsive tier to which a column width can be attached.
///
/// Breakpoints form a fixed enumeration ordered smallest to largest.
/// Every consumer iterates them via [`Breakpoint::ALL`] so that output
/// ordering is deterministic regardless of the order values were assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Extra small devices (no minimum width)
    Xs,
    /// Small devices (576px and up)
    Sm,
    /// Medium devices (768px and up)
    Md,
    /// Large devices (992px and up)
    Lg,
    /// Extra large devices (1200px and up)
    Xl,
}

impl Breakpoint {
    /// All breakpoints in enumeration order, smallest to largest.
    pub const ALL: [Self; 5] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    /// Returns the CSS media-query min-width expression for this breakpoint.
    ///
    /// The expression is emitted verbatim by the stylesheet template; it is
    /// not consulted by the width resolution itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use masonry_grid::models::Breakpoint;
    ///
    /// assert_eq!(Breakpoint::Sm.media_query(), "(min-width: 576px)");
    /// ```
    #[must_use]
    pub const fn media_query(self) -> &'static str {
        match self {
            Self::Xs => "(min-width: 0)",
            Self::Sm => "(min-width: 576px)",
            Self::Md => "(min-width: 768px)",
            Self::Lg => "(min-width: 992px)",
            Self::Xl => "(min-width: 1200px)",
        }
    }

    /// Returns the lowercase name used in serialized form and admin field keys.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_order_is_smallest_to_largest() {
        assert_eq!(
            Breakpoint::ALL,
            [
                Breakpoint::Xs,
                Breakpoint::Sm,
                Breakpoint::Md,
                Breakpoint::Lg,
                Breakpoint::Xl
            ]
        );
        assert!(Breakpoint::Xs < Breakpoint::Xl);
    }

    #[test]
    fn test_media_query_is_static_lookup() {
        assert_eq!(Breakpoint::Xs.media_query(), "(min-width: 0)");
        assert_eq!(Breakpoint::Xl.media_query(), "(min-width: 1200px)");
    }

    #[test]
    fn test_serializes_as_lowercase_name() {
        let json = serde_json::to_string(&Breakpoint::Md).unwrap();
        assert_eq!(json, "\"md\"");

        let parsed: Breakpoint = serde_json::from_str("\"lg\"").unwrap();
        assert_eq!(parsed, Breakpoint::Lg);
    }

    #[test]
    fn test_display_matches_name() {
        for bp in Breakpoint::ALL {
            assert_eq!(bp.to_string(), bp.name());
        }
    }
}
