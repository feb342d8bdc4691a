//! Ephemeral interaction sessions orchestrator.
//!
//! Sessions exist only while a gesture is in flight and are discarded on
//! drop/confirm/cancel; nothing here is persisted. The host UI guarantees
//! at most one drag and one resize session at a time.

mod drag;
mod resize;

pub use drag::{DragSession, DropOutcome, PointerPos, ScrollHint};
pub use resize::{ResizePreview, ResizeSession};
