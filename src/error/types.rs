use thiserror::Error;

use crate::block::BlockId;

/// Unified result type for the grid engine crate.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by the grid engine.
///
/// Layout decisions themselves are boolean accept/reject and never error;
/// these cover caller mistakes and sink plumbing.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("block `{0}` not found")]
    BlockNotFound(BlockId),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
