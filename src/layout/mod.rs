//! Layout module orchestrator.
//!
//! Downstream code imports layout types from here while the implementation
//! details live in the private submodules.

mod core;
mod placement;
mod policy;

pub use self::core::{CellKey, GridState, RowClass};
pub use placement::{collides, is_valid_placement, row_compatible, MAX_INTERACTIVE_ROW};
pub use policy::{total_rows, DimensionConfig};
