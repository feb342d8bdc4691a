//! Block data model orchestrator.

mod core;

pub use self::core::{Block, BlockId};
