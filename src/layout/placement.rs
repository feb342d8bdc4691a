use crate::block::{Block, BlockId};
use crate::geometry::GridPos;
use crate::layout::core::{GridState, RowClass};
use crate::size::{SizeClass, GRID_COLS};

/// Row ceiling for interactive placement. Keeps hover-time validation
/// bounded no matter how tall a corrupt document claims to be.
pub const MAX_INTERACTIVE_ROW: u16 = 20;

/// Axis-aligned overlap test between a candidate rectangle and every other
/// block. Short-circuits on the first hit; a block never collides with
/// itself.
pub fn collides(blocks: &[Block], moving_id: Option<&BlockId>, pos: GridPos, size: SizeClass) -> bool {
    let candidate = Block::rect_for(pos, size);
    blocks
        .iter()
        .filter(|block| moving_id.is_none_or(|id| *id != block.id))
        .any(|block| candidate.intersects(&block.rect()))
}

/// Whether placing `size` with its top row at `y` keeps every spanned row
/// band single-class. The moving block's own footprint is ignored; empty
/// rows are always compatible.
pub fn row_compatible(
    blocks: &[Block],
    moving_id: Option<&BlockId>,
    size: SizeClass,
    y: u16,
) -> bool {
    let state = GridState::resolve_excluding(blocks, moving_id);
    let conflicting = if size.is_header() {
        RowClass::Content
    } else {
        RowClass::Header
    };
    let candidate = Block::rect_for(GridPos::new(0, y), size);
    candidate.rows().all(|row| !state.row_has_class(row, conflicting))
}

/// The single authoritative gate for any position or size mutation:
/// bounds, header pinning, collision, and row compatibility must all pass.
pub fn is_valid_placement(
    blocks: &[Block],
    moving_id: Option<&BlockId>,
    pos: GridPos,
    size: SizeClass,
) -> bool {
    let span = size.span();
    if pos.x.saturating_add(span.cols) > GRID_COLS {
        return false;
    }
    if pos.y.saturating_add(span.rows) > MAX_INTERACTIVE_ROW {
        return false;
    }
    if size.is_pinned_full_width() && pos.x != 0 {
        return false;
    }
    !collides(blocks, moving_id, pos, size) && row_compatible(blocks, moving_id, size, pos.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GridPos;

    fn block(id: &str, size: SizeClass, x: u16, y: u16) -> Block {
        Block::new(id, "note", size, GridPos::new(x, y))
    }

    fn header(id: &str, size: SizeClass, y: u16) -> Block {
        Block::new(id, "section-header", size, GridPos::new(0, y))
    }

    #[test]
    fn collision_short_circuits_and_excludes_self() {
        let blocks = vec![block("a", SizeClass::Small, 0, 0)];
        // Same footprint as itself: no collision when excluded.
        assert!(!collides(&blocks, Some(&"a".to_string()), GridPos::new(0, 0), SizeClass::Small));
        // A second block landing there does collide.
        assert!(collides(&blocks, Some(&"b".to_string()), GridPos::new(0, 0), SizeClass::Small));
        assert!(collides(&blocks, None, GridPos::new(0, 0), SizeClass::Wide));
    }

    #[test]
    fn collision_is_symmetric() {
        let a = block("a", SizeClass::Wide, 0, 0);
        let b = block("b", SizeClass::Tall, 1, 0);
        let pair = vec![a.clone(), b.clone()];
        let a_hits_b = collides(&pair, Some(&a.id), a.position, a.size);
        let b_hits_a = collides(&pair, Some(&b.id), b.position, b.size);
        assert_eq!(a_hits_b, b_hits_a);
        assert!(a_hits_b);
    }

    #[test]
    fn header_rows_reject_content_and_vice_versa() {
        let blocks = vec![header("h", SizeClass::HeaderFull, 0), block("c", SizeClass::Small, 0, 1)];
        assert!(!row_compatible(&blocks, None, SizeClass::Small, 0));
        assert!(!row_compatible(&blocks, None, SizeClass::HeaderHalf, 1));
        // Empty rows are always compatible.
        assert!(row_compatible(&blocks, None, SizeClass::Small, 5));
        assert!(row_compatible(&blocks, None, SizeClass::HeaderHalf, 5));
    }

    #[test]
    fn row_check_ignores_the_moving_block() {
        // A lone header moving within its own row must not conflict with
        // itself.
        let blocks = vec![header("h", SizeClass::HeaderHalf, 0)];
        assert!(row_compatible(&blocks, Some(&"h".to_string()), SizeClass::HeaderHalf, 0));
    }

    #[test]
    fn tall_candidate_checks_every_spanned_row() {
        let blocks = vec![header("h", SizeClass::HeaderFull, 2)];
        // Tall at y=0 spans rows 0..=2 and row 2 is a header row.
        assert!(!row_compatible(&blocks, None, SizeClass::Tall, 0));
    }

    #[test]
    fn bounds_reject_overflow_right_and_down() {
        assert!(!is_valid_placement(&[], None, GridPos::new(3, 0), SizeClass::Wide));
        assert!(!is_valid_placement(&[], None, GridPos::new(0, MAX_INTERACTIVE_ROW - 1), SizeClass::Medium));
        assert!(is_valid_placement(&[], None, GridPos::new(2, 0), SizeClass::Wide));
    }

    #[test]
    fn full_width_header_pinned_to_column_zero() {
        assert!(is_valid_placement(&[], None, GridPos::new(0, 0), SizeClass::HeaderFull));
        assert!(!is_valid_placement(&[], None, GridPos::new(1, 0), SizeClass::HeaderFull));
        // Half-width headers are free to move horizontally.
        assert!(is_valid_placement(&[], None, GridPos::new(2, 0), SizeClass::HeaderHalf));
    }

    #[test]
    fn placement_combines_all_checks() {
        let blocks = vec![block("a", SizeClass::Small, 1, 0)];
        // Collision.
        assert!(!is_valid_placement(&blocks, None, GridPos::new(0, 0), SizeClass::Wide));
        // Clear cell passes.
        assert!(is_valid_placement(&blocks, None, GridPos::new(2, 0), SizeClass::Wide));
    }
}
