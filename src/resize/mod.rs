//! Resize transition orchestrator.

mod core;

pub use self::core::{next_size, transition, ResizeDirection};
