use std::collections::HashMap;

use crate::size::SizeClass;

/// Immutable capability table mapping a block kind to the size classes it
/// supports.
///
/// Built once at startup from the block-type catalog and injected into the
/// engine; there is no global registry and no deferred initialisation. An
/// unknown kind resolves to an empty capability set, which makes every
/// resize transition for that kind infeasible rather than an error.
#[derive(Debug, Default, Clone)]
pub struct BlockKindRegistry {
    kinds: HashMap<String, Vec<SizeClass>>,
}

impl BlockKindRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a kind with its supported sizes. Replaces any earlier entry
    /// for the same kind; later registrations win, as in the catalog file.
    pub fn with_kind(
        mut self,
        kind: impl Into<String>,
        sizes: impl IntoIterator<Item = SizeClass>,
    ) -> Self {
        self.kinds.insert(kind.into(), sizes.into_iter().collect());
        self
    }

    /// Supported sizes for a kind. Empty for unregistered kinds.
    pub fn supported_sizes(&self, kind: &str) -> &[SizeClass] {
        self.kinds.get(kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn supports(&self, kind: &str, size: SizeClass) -> bool {
        self.supported_sizes(kind).contains(&size)
    }

    pub fn is_registered(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    /// Catalog used by the stock portfolio builder. Hosts embedding the
    /// engine can build their own table instead.
    pub fn default_catalog() -> Self {
        use SizeClass::*;
        Self::new()
            .with_kind("link", [Small, Medium, Large, Wide])
            .with_kind("photo", [Small, Medium, Large, Wide, Tall])
            .with_kind("note", [Small, Medium, Large, Wide, Tall])
            .with_kind("social", [Small, Medium, Large, Wide])
            .with_kind("clock", [Small, Wide])
            .with_kind("map", [Small, Medium, Large, Wide])
            .with_kind("section-header", [HeaderFull, HeaderHalf])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_has_no_sizes() {
        let registry = BlockKindRegistry::default_catalog();
        assert!(registry.supported_sizes("widget-from-the-future").is_empty());
        assert!(!registry.supports("widget-from-the-future", SizeClass::Small));
    }

    #[test]
    fn registered_kind_reports_capabilities() {
        let registry =
            BlockKindRegistry::new().with_kind("clock", [SizeClass::Small, SizeClass::Wide]);
        assert!(registry.supports("clock", SizeClass::Wide));
        assert!(!registry.supports("clock", SizeClass::Tall));
        assert!(registry.is_registered("clock"));
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let registry = BlockKindRegistry::new()
            .with_kind("note", [SizeClass::Small])
            .with_kind("note", [SizeClass::Large]);
        assert_eq!(registry.supported_sizes("note"), &[SizeClass::Large]);
    }

    #[test]
    fn section_headers_only_support_header_classes() {
        let registry = BlockKindRegistry::default_catalog();
        for size in registry.supported_sizes("section-header") {
            assert!(size.is_header());
        }
    }
}
