use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::geometry::{CellRect, GridPos};
use crate::size::SizeClass;

/// Opaque block identifier, assigned at creation and immutable thereafter.
pub type BlockId = String;

/// A rectangular tile on the profile grid.
///
/// The engine only interprets `size` and `position`; `kind` is consulted via
/// the injected capability registry and `content` is an opaque payload owned
/// by whichever renderer handles the kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    /// Content discriminator ("link", "photo", "note", ...). The engine
    /// never inspects it beyond capability lookup.
    #[serde(rename = "type")]
    pub kind: String,
    pub size: SizeClass,
    pub position: GridPos,
    #[serde(default)]
    pub content: Value,
}

impl Block {
    pub fn new(
        id: impl Into<BlockId>,
        kind: impl Into<String>,
        size: SizeClass,
        position: GridPos,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            size,
            position,
            content: Value::Null,
        }
    }

    pub fn with_content(mut self, content: Value) -> Self {
        self.content = content;
        self
    }

    /// Occupied cell rectangle derived from position and size class.
    pub fn rect(&self) -> CellRect {
        CellRect::at(self.position, self.size.span())
    }

    /// Rectangle the block would occupy at a candidate position and size.
    pub fn rect_for(position: GridPos, size: SizeClass) -> CellRect {
        CellRect::at(position, size.span())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rect_derives_from_size_and_position() {
        let block = Block::new("b1", "photo", SizeClass::Large, GridPos::new(1, 2));
        assert_eq!(block.rect(), CellRect::new(1, 2, 2, 2));
    }

    #[test]
    fn document_round_trip_keeps_type_and_payload() {
        let block = Block::new("b1", "link", SizeClass::Wide, GridPos::new(0, 0))
            .with_content(json!({"url": "https://example.com"}));
        let doc = serde_json::to_string(&block).unwrap();
        assert!(doc.contains("\"type\":\"link\""));
        let back: Block = serde_json::from_str(&doc).unwrap();
        assert_eq!(back.kind, "link");
        assert_eq!(back.size, SizeClass::Wide);
        assert_eq!(back.content["url"], "https://example.com");
    }

    #[test]
    fn missing_content_defaults_to_null() {
        let doc = r#"{"id":"b2","type":"clock","size":"small","position":{"x":3,"y":0}}"#;
        let block: Block = serde_json::from_str(doc).unwrap();
        assert!(block.content.is_null());
    }
}
