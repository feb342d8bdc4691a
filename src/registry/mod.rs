//! Block-kind capability registry orchestrator.

mod core;

pub use self::core::BlockKindRegistry;
