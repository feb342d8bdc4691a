use crate::block::BlockId;
use crate::geometry::GridPos;
use crate::size::SizeClass;

/// Commit callbacks. The engine invokes these only after a candidate has
/// passed the placement validator; the persistence layer registers an
/// observer to durably store the updated collection.
pub trait ChangeObserver: Send {
    fn position_changed(&mut self, _id: &BlockId, _position: GridPos) {}

    fn size_changed(&mut self, _id: &BlockId, _size: SizeClass) {}
}

/// Default no-op implementation used when nothing subscribes.
#[derive(Debug, Default)]
pub struct NullObserver;

impl ChangeObserver for NullObserver {}
