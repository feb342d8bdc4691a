use serde::{Deserialize, Serialize};

use crate::size::SizeClass;

/// Edge or corner a resize gesture pulls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeDirection {
    Left,
    Right,
    Up,
    Down,
    Corner,
}

/// Static directional transition table.
///
/// Deliberately partial and asymmetric: not every transition has an
/// inverse, `tall` has no corner transition, and the header classes only
/// trade widths with each other. The gaps are product constraints, not
/// omissions; do not "complete" the table.
pub fn transition(current: SizeClass, direction: ResizeDirection) -> Option<SizeClass> {
    use ResizeDirection::*;
    use SizeClass::*;
    match (current, direction) {
        (Small, Right) => Some(Wide),
        (Small, Down) => Some(Medium),
        (Small, Corner) => Some(Large),
        (Medium, Up) => Some(Small),
        (Medium, Down) => Some(Tall),
        (Medium, Right) => Some(Large),
        (Large, Left) => Some(Medium),
        (Large, Up) => Some(Wide),
        (Large, Corner) => Some(Small),
        (Wide, Left) => Some(Small),
        (Wide, Down) => Some(Large),
        (Wide, Corner) => Some(Large),
        (Tall, Up) => Some(Medium),
        (HeaderFull, Left) => Some(HeaderHalf),
        (HeaderHalf, Right) => Some(HeaderFull),
        _ => None,
    }
}

/// Resolve the size a resize gesture proposes.
///
/// Returns `current` unchanged when the table has no entry for the pair or
/// the block's kind does not support the target -- the identity return is
/// the no-op signal, and no handle is shown for it. The caller must still
/// pass a changed result through the placement validator before committing.
pub fn next_size(
    current: SizeClass,
    direction: ResizeDirection,
    supported: &[SizeClass],
) -> SizeClass {
    match transition(current, direction) {
        Some(target) if supported.contains(&target) => target,
        _ => current,
    }
}
