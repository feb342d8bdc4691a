use std::collections::{HashMap, HashSet};

use crate::block::{Block, BlockId};

/// Occupied-cell key: `(col, row)`.
pub type CellKey = (u16, u16);

/// Height classification of a grid row.
///
/// Header rows render at a reduced fixed height, so the two classes must
/// never coexist within one row band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    Header,
    Content,
}

/// Per-row presence flags. A legal document never sets both, but a corrupt
/// one may; tracking them independently lets validation reject candidates
/// against either class instead of panicking.
#[derive(Debug, Default, Clone, Copy)]
struct RowBand {
    has_header: bool,
    has_content: bool,
}

/// Derived geometry of the whole block collection.
///
/// Recomputed from the blocks on every read and never cached across
/// mutations; resolution is a single linear pass.
#[derive(Debug, Default)]
pub struct GridState {
    occupied: HashSet<CellKey>,
    rows: HashMap<u16, RowBand>,
    max_row: u16,
}

impl GridState {
    /// Expand every block's rectangle into cells and classify each row.
    /// Total: an empty collection resolves to an empty state.
    pub fn resolve(blocks: &[Block]) -> Self {
        Self::resolve_excluding(blocks, None)
    }

    /// Resolve while ignoring one block, used when validating a candidate
    /// placement for that block.
    pub fn resolve_excluding(blocks: &[Block], skip: Option<&BlockId>) -> Self {
        let mut state = Self::default();
        for block in blocks {
            if skip.is_some_and(|id| *id == block.id) {
                continue;
            }
            let rect = block.rect();
            state.occupied.extend(rect.cells());
            for row in rect.rows() {
                let band = state.rows.entry(row).or_default();
                if block.size.is_header() {
                    band.has_header = true;
                } else {
                    band.has_content = true;
                }
            }
            state.max_row = state.max_row.max(rect.bottom());
        }
        state
    }

    pub fn is_occupied(&self, col: u16, row: u16) -> bool {
        self.occupied.contains(&(col, row))
    }

    pub fn occupied_cells(&self) -> &HashSet<CellKey> {
        &self.occupied
    }

    /// Classification of a row, `None` when empty. A row corrupted into
    /// both classes reports `Header` so it keeps its reduced track height.
    pub fn row_class(&self, row: u16) -> Option<RowClass> {
        self.rows.get(&row).map(|band| {
            if band.has_header {
                RowClass::Header
            } else {
                RowClass::Content
            }
        })
    }

    /// Whether a row hosts any block of the given class.
    pub fn row_has_class(&self, row: u16, class: RowClass) -> bool {
        self.rows.get(&row).is_some_and(|band| match class {
            RowClass::Header => band.has_header,
            RowClass::Content => band.has_content,
        })
    }

    /// One past the highest occupied row (`0` for an empty grid).
    pub fn max_row(&self) -> u16 {
        self.max_row
    }
}
