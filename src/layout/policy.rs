use serde::{Deserialize, Serialize};

/// Configuration for how many grid rows to expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionConfig {
    /// Empty trailing rows kept reachable below content while editing, so
    /// add-block affordances always have somewhere to land.
    pub buffer_rows: u16,
    /// Floor on the editable grid height, applied even to empty profiles.
    pub min_rows: u16,
}

impl Default for DimensionConfig {
    fn default() -> Self {
        Self {
            buffer_rows: 3,
            min_rows: 8,
        }
    }
}

/// Rows to render: read-only mode shows exactly the content footprint,
/// edit mode reserves the configured buffer below it.
pub fn total_rows(max_row: u16, editable: bool, config: &DimensionConfig) -> u16 {
    if editable {
        (max_row.saturating_add(config.buffer_rows)).max(config.min_rows)
    } else {
        max_row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_matches_footprint_exactly() {
        let config = DimensionConfig::default();
        assert_eq!(total_rows(0, false, &config), 0);
        assert_eq!(total_rows(12, false, &config), 12);
    }

    #[test]
    fn edit_mode_applies_minimum_on_empty_grid() {
        let config = DimensionConfig {
            buffer_rows: 3,
            min_rows: 8,
        };
        assert_eq!(total_rows(0, true, &config), 8);
    }

    #[test]
    fn edit_mode_buffers_past_the_minimum() {
        let config = DimensionConfig {
            buffer_rows: 3,
            min_rows: 8,
        };
        assert_eq!(total_rows(5, true, &config), 8);
        assert_eq!(total_rows(6, true, &config), 9);
        assert_eq!(total_rows(10, true, &config), 13);
    }
}
