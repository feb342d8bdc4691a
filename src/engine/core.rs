use std::sync::{Arc, Mutex};
use std::time::Instant;

use serde_json::json;

use crate::block::{Block, BlockId};
use crate::engine::observer::ChangeObserver;
use crate::error::{EngineError, Result};
use crate::geometry::GridPos;
use crate::layout::{self, DimensionConfig, GridState};
use crate::logging::{event_with_fields, json_kv, LogLevel, Logger};
use crate::metrics::EngineMetrics;
use crate::registry::BlockKindRegistry;
use crate::resize::{next_size, ResizeDirection};
use crate::size::SizeClass;

/// Instrumentation and dimension knobs for the engine.
#[derive(Clone, Default)]
pub struct EngineConfig {
    /// Row policy for edit and read-only rendering.
    pub dimensions: DimensionConfig,
    /// Optional structured logger for commit/reject events.
    pub logger: Option<Logger>,
    /// Metrics accumulator shared with the host UI.
    pub metrics: Option<Arc<Mutex<EngineMetrics>>>,
}

impl EngineConfig {
    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(EngineMetrics::new())));
        }
    }

    /// Access the shared metrics handle if metrics are enabled.
    pub fn metrics_handle(&self) -> Option<Arc<Mutex<EngineMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

const LOG_TARGET: &str = "folio::engine";

/// Owner of the block collection and sole gate for layout mutations.
///
/// Every move and resize flows through the placement validator; a rejected
/// candidate leaves the collection untouched. The capability registry is
/// injected at construction and immutable for the engine's lifetime.
pub struct GridEngine {
    blocks: Vec<Block>,
    registry: BlockKindRegistry,
    config: EngineConfig,
    observers: Vec<Box<dyn ChangeObserver>>,
    started: Instant,
}

impl GridEngine {
    pub fn new(blocks: Vec<Block>, registry: BlockKindRegistry) -> Self {
        Self {
            blocks,
            registry,
            config: EngineConfig::default(),
            observers: Vec::new(),
            started: Instant::now(),
        }
    }

    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }

    pub fn registry(&self) -> &BlockKindRegistry {
        &self.registry
    }

    /// Subscribe a commit observer. Observers run in registration order.
    pub fn register_observer<O>(&mut self, observer: O)
    where
        O: ChangeObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == *id)
    }

    /// Derived geometry, recomputed on every call.
    pub fn grid_state(&self) -> GridState {
        GridState::resolve(&self.blocks)
    }

    /// Rows to expose for the requested mode.
    pub fn total_rows(&self, editable: bool) -> u16 {
        layout::total_rows(self.grid_state().max_row(), editable, &self.config.dimensions)
    }

    /// Run the placement validator for a candidate. Pure; used by sessions
    /// for hover feedback as well as by the commit paths below.
    pub fn is_valid_placement(
        &self,
        moving_id: Option<&BlockId>,
        pos: GridPos,
        size: SizeClass,
    ) -> bool {
        let valid = layout::is_valid_placement(&self.blocks, moving_id, pos, size);
        if let Some(metrics) = self.config.metrics.as_ref() {
            let collided = !valid && layout::collides(&self.blocks, moving_id, pos, size);
            if let Ok(mut guard) = metrics.lock() {
                guard.record_placement_check(collided);
            }
        }
        valid
    }

    /// Whether the external add-block flow may create a block of `size` at
    /// `pos`.
    pub fn can_insert(&self, size: SizeClass, pos: GridPos) -> bool {
        self.is_valid_placement(None, pos, size)
    }

    /// Move a block to a new cell. `Ok(false)` means the validator rejected
    /// the candidate and nothing changed.
    pub fn move_block(&mut self, id: &BlockId, pos: GridPos) -> Result<bool> {
        let idx = self.index_of(id)?;
        let size = self.blocks[idx].size;

        if !self.is_valid_placement(Some(id), pos, size) {
            self.record_move(false);
            self.log_event(
                LogLevel::Debug,
                "move_rejected",
                [
                    json_kv("block", json!(id)),
                    json_kv("x", json!(pos.x)),
                    json_kv("y", json!(pos.y)),
                ],
            );
            return Ok(false);
        }

        self.blocks[idx].position = pos;
        for observer in &mut self.observers {
            observer.position_changed(id, pos);
        }
        self.record_move(true);
        let fingerprint = self.layout_fingerprint();
        self.log_event(
            LogLevel::Info,
            "move_committed",
            [
                json_kv("block", json!(id)),
                json_kv("x", json!(pos.x)),
                json_kv("y", json!(pos.y)),
                json_kv("layout", json!(fingerprint)),
            ],
        );
        Ok(true)
    }

    /// Resolve a directional resize and commit it if the transition table
    /// proposes a supported size and the validator accepts it at the
    /// block's unchanged position.
    pub fn resize_block(&mut self, id: &BlockId, direction: ResizeDirection) -> Result<bool> {
        match self.resolve_resize(id, direction)? {
            Some(target) => self.commit_size(id, target),
            None => {
                self.record_resize(false);
                Ok(false)
            }
        }
    }

    /// The size a resize gesture would reach, or `None` for a no-op.
    /// Does not consult the validator; sessions combine this with
    /// `is_valid_placement` to decide whether to show a handle.
    pub fn resolve_resize(
        &self,
        id: &BlockId,
        direction: ResizeDirection,
    ) -> Result<Option<SizeClass>> {
        let block = self
            .block(id)
            .ok_or_else(|| EngineError::BlockNotFound(id.clone()))?;
        let supported = self.registry.supported_sizes(&block.kind);
        let target = next_size(block.size, direction, supported);
        Ok((target != block.size).then_some(target))
    }

    /// Commit a previously validated target size. Re-runs the validator so
    /// no caller can bypass the gate.
    pub fn commit_size(&mut self, id: &BlockId, target: SizeClass) -> Result<bool> {
        let idx = self.index_of(id)?;
        let pos = self.blocks[idx].position;

        if !self.is_valid_placement(Some(id), pos, target) {
            self.record_resize(false);
            self.log_event(
                LogLevel::Debug,
                "resize_rejected",
                [json_kv("block", json!(id)), json_kv("size", json!(target))],
            );
            return Ok(false);
        }

        self.blocks[idx].size = target;
        for observer in &mut self.observers {
            observer.size_changed(id, target);
        }
        self.record_resize(true);
        let fingerprint = self.layout_fingerprint();
        self.log_event(
            LogLevel::Info,
            "resize_committed",
            [
                json_kv("block", json!(id)),
                json_kv("size", json!(target)),
                json_kv("layout", json!(fingerprint)),
            ],
        );
        Ok(true)
    }

    /// Content-addressed digest of the committed layout, logged with every
    /// commit so a host can correlate persisted documents with log lines.
    pub fn layout_fingerprint(&self) -> String {
        let mut entries: Vec<_> = self
            .blocks
            .iter()
            .map(|b| {
                format!(
                    "{}|{:?}|{}|{}",
                    b.id, b.size, b.position.x, b.position.y
                )
            })
            .collect();
        entries.sort();
        blake3::hash(entries.join(";").as_bytes()).to_hex().to_string()
    }

    /// Snapshot metrics into a log event, if both are configured.
    pub fn emit_metrics(&self) {
        if let (Some(logger), Some(metrics)) =
            (self.config.logger.as_ref(), self.config.metrics.as_ref())
        {
            if let Ok(guard) = metrics.lock() {
                let uptime = self.started.elapsed();
                let event = guard.snapshot(uptime).to_log_event("folio::engine.metrics");
                let _ = logger.log_event(event);
            }
        }
    }

    fn index_of(&self, id: &BlockId) -> Result<usize> {
        self.blocks
            .iter()
            .position(|block| block.id == *id)
            .ok_or_else(|| EngineError::BlockNotFound(id.clone()))
    }

    fn record_move(&self, committed: bool) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_move(committed);
            }
        }
    }

    fn record_resize(&self, committed: bool) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_resize(committed);
            }
        }
    }

    fn log_event<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, serde_json::Value)>,
    {
        if let Some(logger) = self.config.logger.as_ref() {
            let event = event_with_fields(level, LOG_TARGET, message, fields);
            let _ = logger.log_event(event);
        }
    }
}
