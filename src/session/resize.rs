use crate::block::BlockId;
use crate::engine::GridEngine;
use crate::error::{EngineError, Result};
use crate::resize::ResizeDirection;
use crate::size::SizeClass;

/// A validated candidate size held while the pointer sits on a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizePreview {
    pub direction: ResizeDirection,
    pub target: SizeClass,
}

/// In-flight resize: Idle -> Previewing -> (Committing) -> Idle.
///
/// A preview exists only when the transition table proposes a supported
/// size and the validator accepts it at the block's unchanged position;
/// otherwise the corresponding handle is simply not shown. Confirmation
/// commits through the engine; leaving the handle discards.
#[derive(Debug)]
pub struct ResizeSession {
    block_id: BlockId,
    preview: Option<ResizePreview>,
}

impl ResizeSession {
    /// Begin a resize interaction on a block. Fails if the id is unknown.
    pub fn begin(engine: &GridEngine, id: &BlockId) -> Result<Self> {
        if engine.block(id).is_none() {
            return Err(EngineError::BlockNotFound(id.clone()));
        }
        Ok(Self {
            block_id: id.clone(),
            preview: None,
        })
    }

    pub fn block_id(&self) -> &BlockId {
        &self.block_id
    }

    pub fn preview(&self) -> Option<ResizePreview> {
        self.preview
    }

    /// Pointer entered the handle for one edge or corner. Returns the
    /// previewed size, or `None` when there is no valid transition (the
    /// host hides the handle rather than surfacing an error).
    pub fn enter_handle(
        &mut self,
        engine: &GridEngine,
        direction: ResizeDirection,
    ) -> Result<Option<SizeClass>> {
        self.preview = None;
        let Some(target) = engine.resolve_resize(&self.block_id, direction)? else {
            return Ok(None);
        };
        let position = engine
            .block(&self.block_id)
            .ok_or_else(|| EngineError::BlockNotFound(self.block_id.clone()))?
            .position;
        if !engine.is_valid_placement(Some(&self.block_id), position, target) {
            return Ok(None);
        }
        self.preview = Some(ResizePreview { direction, target });
        Ok(Some(target))
    }

    /// Pointer left the handle without confirming; the preview is dropped.
    pub fn leave_handle(&mut self) {
        self.preview = None;
    }

    /// Confirm the previewed size. Returns `false` when no preview is
    /// active or the engine rejects the commit (the grid changed since the
    /// preview was taken). The cosmetic transition delay is owned by the
    /// host UI, not modelled here.
    pub fn confirm(self, engine: &mut GridEngine) -> Result<bool> {
        match self.preview {
            Some(preview) => engine.commit_size(&self.block_id, preview.target),
            None => Ok(false),
        }
    }
}
