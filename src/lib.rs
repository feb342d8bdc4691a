//! Grid layout and collision engine for the Folio portfolio builder.
//!
//! A profile is a collection of rectangular blocks on a fixed four-column
//! grid. This crate models block geometry, detects overlap, keeps header
//! and content rows from mixing, resolves resize transitions, and gates
//! every drag/resize commit through a single placement validator. Content
//! rendering, persistence, and the admin UI live elsewhere; the engine
//! operates purely on in-memory block collections supplied by its host.

pub mod block;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod registry;
pub mod resize;
pub mod session;
pub mod size;

pub use block::{Block, BlockId};
pub use engine::{ChangeObserver, EngineConfig, GridEngine, NullObserver};
pub use error::{EngineError, Result};
pub use geometry::{CellRect, GridPos, Span};
pub use layout::{
    collides, is_valid_placement, row_compatible, total_rows, CellKey, DimensionConfig, GridState,
    RowClass, MAX_INTERACTIVE_ROW,
};
pub use logging::{
    event_with_fields, json_kv, FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger,
    LoggingError, LoggingResult, NullSink,
};
pub use metrics::{EngineMetrics, MetricSnapshot};
pub use registry::BlockKindRegistry;
pub use resize::{next_size, transition, ResizeDirection};
pub use session::{DragSession, DropOutcome, PointerPos, ResizePreview, ResizeSession, ScrollHint};
pub use size::{SizeClass, GRID_COLS};
