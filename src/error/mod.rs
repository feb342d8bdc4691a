//! Error taxonomy orchestrator.

mod types;

pub use types::{EngineError, Result};
