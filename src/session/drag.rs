use crate::block::BlockId;
use crate::engine::GridEngine;
use crate::error::{EngineError, Result};
use crate::geometry::GridPos;

/// Pixel-space pointer location supplied by the host UI. Stored on the
/// session explicitly so auto-scroll reads interaction state instead of
/// ambient globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPos {
    pub x: i32,
    pub y: i32,
}

/// Auto-scroll suggestion while dragging near a viewport edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollHint {
    None,
    Up,
    Down,
}

/// Result of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Placement accepted; the block's position was updated.
    Committed,
    /// Placement rejected; the collection is unchanged.
    Rejected,
    /// Released without ever hovering a cell.
    NoTarget,
}

/// Pixels from a viewport edge inside which dragging starts scrolling.
const SCROLL_EDGE_MARGIN: i32 = 48;

/// In-flight block move: Idle -> Dragging -> (Dropping) -> Idle.
///
/// Hover updates are pure previews used for drop-zone styling; the block
/// collection is touched only on release, and only through the engine's
/// validated move path.
#[derive(Debug)]
pub struct DragSession {
    moving_id: BlockId,
    hover: Option<GridPos>,
    pointer: Option<PointerPos>,
}

impl DragSession {
    /// Begin dragging a block. Fails if the id is not in the collection.
    pub fn begin(engine: &GridEngine, id: &BlockId) -> Result<Self> {
        if engine.block(id).is_none() {
            return Err(EngineError::BlockNotFound(id.clone()));
        }
        Ok(Self {
            moving_id: id.clone(),
            hover: None,
            pointer: None,
        })
    }

    pub fn moving_id(&self) -> &BlockId {
        &self.moving_id
    }

    pub fn hover_cell(&self) -> Option<GridPos> {
        self.hover
    }

    /// Record the hovered cell and report whether dropping there would be
    /// accepted, for valid/invalid drop-zone styling. No mutation.
    pub fn hover(&mut self, engine: &GridEngine, cell: GridPos) -> bool {
        self.hover = Some(cell);
        match engine.block(&self.moving_id) {
            Some(block) => {
                let target = Self::pinned(cell, block.size.is_pinned_full_width());
                engine.is_valid_placement(Some(&self.moving_id), target, block.size)
            }
            None => false,
        }
    }

    /// Update the raw pointer location alongside the hovered cell.
    pub fn update_pointer(&mut self, pointer: PointerPos) {
        self.pointer = Some(pointer);
    }

    pub fn pointer(&self) -> Option<PointerPos> {
        self.pointer
    }

    /// Scroll direction the host should apply while the pointer sits near
    /// a viewport edge.
    pub fn scroll_hint(&self, viewport_top: i32, viewport_bottom: i32) -> ScrollHint {
        match self.pointer {
            Some(p) if p.y <= viewport_top + SCROLL_EDGE_MARGIN => ScrollHint::Up,
            Some(p) if p.y >= viewport_bottom - SCROLL_EDGE_MARGIN => ScrollHint::Down,
            _ => ScrollHint::None,
        }
    }

    /// Release over the last hovered cell. A full-width header's target
    /// column is forced to 0 regardless of the literal drop column.
    pub fn release(self, engine: &mut GridEngine) -> Result<DropOutcome> {
        let Some(cell) = self.hover else {
            return Ok(DropOutcome::NoTarget);
        };
        let pinned_full_width = engine
            .block(&self.moving_id)
            .is_some_and(|block| block.size.is_pinned_full_width());
        let target = Self::pinned(cell, pinned_full_width);
        if engine.move_block(&self.moving_id, target)? {
            Ok(DropOutcome::Committed)
        } else {
            Ok(DropOutcome::Rejected)
        }
    }

    /// Abort without mutation.
    pub fn cancel(self) {}

    fn pinned(cell: GridPos, full_width: bool) -> GridPos {
        if full_width {
            GridPos::new(0, cell.y)
        } else {
            cell
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use crate::registry::BlockKindRegistry;
    use crate::size::SizeClass;

    fn engine() -> GridEngine {
        let blocks = vec![
            Block::new("a", "note", SizeClass::Small, GridPos::new(0, 0)),
            Block::new("b", "note", SizeClass::Small, GridPos::new(1, 0)),
            Block::new(
                "h",
                "section-header",
                SizeClass::HeaderFull,
                GridPos::new(0, 3),
            ),
        ];
        GridEngine::new(blocks, BlockKindRegistry::default_catalog())
    }

    #[test]
    fn begin_requires_an_existing_block() {
        let engine = engine();
        assert!(DragSession::begin(&engine, &"a".to_string()).is_ok());
        assert!(matches!(
            DragSession::begin(&engine, &"ghost".to_string()),
            Err(EngineError::BlockNotFound(_))
        ));
    }

    #[test]
    fn hover_reports_validity_without_mutating() {
        let engine = engine();
        let mut session = DragSession::begin(&engine, &"a".to_string()).unwrap();
        assert!(!session.hover(&engine, GridPos::new(1, 0)), "occupied");
        assert!(session.hover(&engine, GridPos::new(2, 0)), "free cell");
        assert_eq!(session.hover_cell(), Some(GridPos::new(2, 0)));
        assert_eq!(engine.block(&"a".to_string()).unwrap().position, GridPos::new(0, 0));
    }

    #[test]
    fn release_commits_the_hovered_cell() {
        let mut engine = engine();
        let mut session = DragSession::begin(&engine, &"a".to_string()).unwrap();
        session.hover(&engine, GridPos::new(2, 1));
        let outcome = session.release(&mut engine).unwrap();
        assert_eq!(outcome, DropOutcome::Committed);
        assert_eq!(engine.block(&"a".to_string()).unwrap().position, GridPos::new(2, 1));
    }

    #[test]
    fn release_on_an_invalid_cell_discards_silently() {
        let mut engine = engine();
        let mut session = DragSession::begin(&engine, &"a".to_string()).unwrap();
        session.hover(&engine, GridPos::new(1, 0));
        let outcome = session.release(&mut engine).unwrap();
        assert_eq!(outcome, DropOutcome::Rejected);
        assert_eq!(engine.block(&"a".to_string()).unwrap().position, GridPos::new(0, 0));
    }

    #[test]
    fn release_without_hover_is_a_no_target() {
        let mut engine = engine();
        let session = DragSession::begin(&engine, &"a".to_string()).unwrap();
        assert_eq!(session.release(&mut engine).unwrap(), DropOutcome::NoTarget);
    }

    #[test]
    fn full_width_header_drop_column_is_forced_to_zero() {
        let mut engine = engine();
        let mut session = DragSession::begin(&engine, &"h".to_string()).unwrap();
        // Hover far to the right; the checked candidate is still x=0.
        assert!(session.hover(&engine, GridPos::new(3, 5)));
        let outcome = session.release(&mut engine).unwrap();
        assert_eq!(outcome, DropOutcome::Committed);
        assert_eq!(engine.block(&"h".to_string()).unwrap().position, GridPos::new(0, 5));
    }

    #[test]
    fn scroll_hint_follows_pointer_edges() {
        let engine = engine();
        let mut session = DragSession::begin(&engine, &"a".to_string()).unwrap();
        assert_eq!(session.scroll_hint(0, 600), ScrollHint::None);

        session.update_pointer(PointerPos { x: 10, y: 20 });
        assert_eq!(session.scroll_hint(0, 600), ScrollHint::Up);

        session.update_pointer(PointerPos { x: 10, y: 580 });
        assert_eq!(session.scroll_hint(0, 600), ScrollHint::Down);

        session.update_pointer(PointerPos { x: 10, y: 300 });
        assert_eq!(session.scroll_hint(0, 600), ScrollHint::None);
    }

    #[test]
    fn cancel_discards_without_mutation() {
        let engine = engine();
        let mut session = DragSession::begin(&engine, &"a".to_string()).unwrap();
        session.hover(&engine, GridPos::new(2, 2));
        session.cancel();
        assert_eq!(engine.block(&"a".to_string()).unwrap().position, GridPos::new(0, 0));
    }
}
