use serde::{Deserialize, Serialize};

use crate::geometry::Span;

/// Number of columns in the block grid. Fixed for every profile.
pub const GRID_COLS: u16 = 4;

/// Closed set of block footprints.
///
/// Each class maps to a column/row span and a header/content classification.
/// Header classes occupy reduced-height rows and must never share a row band
/// with content classes. The document format stores these as kebab-case
/// strings; `section-header` is the legacy spelling of `header-full`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeClass {
    Small,
    Medium,
    Large,
    Wide,
    Tall,
    #[serde(alias = "section-header")]
    HeaderFull,
    HeaderHalf,
}

impl SizeClass {
    /// Every size class, in catalog order.
    pub const ALL: [SizeClass; 7] = [
        SizeClass::Small,
        SizeClass::Medium,
        SizeClass::Large,
        SizeClass::Wide,
        SizeClass::Tall,
        SizeClass::HeaderFull,
        SizeClass::HeaderHalf,
    ];

    /// Cell footprint of this class.
    pub const fn span(self) -> Span {
        match self {
            SizeClass::Small => Span::new(1, 1),
            SizeClass::Medium => Span::new(1, 2),
            SizeClass::Large => Span::new(2, 2),
            SizeClass::Wide => Span::new(2, 1),
            SizeClass::Tall => Span::new(1, 3),
            SizeClass::HeaderFull => Span::new(GRID_COLS, 1),
            SizeClass::HeaderHalf => Span::new(2, 1),
        }
    }

    pub const fn col_span(self) -> u16 {
        self.span().cols
    }

    pub const fn row_span(self) -> u16 {
        self.span().rows
    }

    /// Whether this class occupies a reduced-height header row.
    pub const fn is_header(self) -> bool {
        matches!(self, SizeClass::HeaderFull | SizeClass::HeaderHalf)
    }

    /// Full-width header classes are pinned to column 0.
    pub const fn is_pinned_full_width(self) -> bool {
        matches!(self, SizeClass::HeaderFull)
    }
}
