//! Engine orchestrator: the single owner of the block collection and the
//! only mutation path for positions and sizes.

mod core;
mod observer;

pub use self::core::{EngineConfig, GridEngine};
pub use observer::{ChangeObserver, NullObserver};
