//! Size taxonomy orchestrator.
//!
//! Callers import size types from here while the implementation lives in the
//! private `core` module.

mod core;

pub use self::core::{SizeClass, GRID_COLS};
