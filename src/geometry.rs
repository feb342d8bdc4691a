use serde::{Deserialize, Serialize};

/// Integer cell coordinate on the block grid.
///
/// `x` is the column (0-based, left to right), `y` the row (0-based, top
/// down). Rows grow without bound; columns are capped by the grid width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: u16,
    pub y: u16,
}

impl GridPos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Cell footprint of a size class: columns wide by rows tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub cols: u16,
    pub rows: u16,
}

impl Span {
    pub const fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }
}

/// Rectangle of whole grid cells anchored at its top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRect {
    pub x: u16,
    pub y: u16,
    pub cols: u16,
    pub rows: u16,
}

impl CellRect {
    pub const fn new(x: u16, y: u16, cols: u16, rows: u16) -> Self {
        Self { x, y, cols, rows }
    }

    pub const fn at(pos: GridPos, span: Span) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            cols: span.cols,
            rows: span.rows,
        }
    }

    /// One past the rightmost occupied column.
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.cols)
    }

    /// One past the bottommost occupied row.
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.rows)
    }

    /// Axis-aligned overlap test. Two rects overlap unless one is entirely
    /// left of, right of, above, or below the other.
    pub fn intersects(&self, other: &CellRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Iterate every `(col, row)` cell covered by the rect.
    pub fn cells(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        (self.y..self.bottom()).flat_map(move |row| (self.x..self.right()).map(move |col| (col, row)))
    }

    /// Row indices spanned by the rect.
    pub fn rows(&self) -> impl Iterator<Item = u16> {
        self.y..self.bottom()
    }
}
