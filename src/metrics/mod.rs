//! Counters for engine activity, snapshotted into structured log events.

use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct EngineMetrics {
    placements_checked: u64,
    collisions: u64,
    moves_committed: u64,
    moves_rejected: u64,
    resizes_committed: u64,
    resizes_rejected: u64,
}

impl EngineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_placement_check(&mut self, collided: bool) {
        self.placements_checked = self.placements_checked.saturating_add(1);
        if collided {
            self.collisions = self.collisions.saturating_add(1);
        }
    }

    pub fn record_move(&mut self, committed: bool) {
        if committed {
            self.moves_committed = self.moves_committed.saturating_add(1);
        } else {
            self.moves_rejected = self.moves_rejected.saturating_add(1);
        }
    }

    pub fn record_resize(&mut self, committed: bool) {
        if committed {
            self.resizes_committed = self.resizes_committed.saturating_add(1);
        } else {
            self.resizes_rejected = self.resizes_rejected.saturating_add(1);
        }
    }

    pub fn snapshot(&self, uptime: Duration) -> MetricSnapshot {
        MetricSnapshot {
            uptime_ms: uptime.as_millis() as u64,
            placements_checked: self.placements_checked,
            collisions: self.collisions,
            moves_committed: self.moves_committed,
            moves_rejected: self.moves_rejected,
            resizes_committed: self.resizes_committed,
            resizes_rejected: self.resizes_rejected,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricSnapshot {
    pub uptime_ms: u64,
    pub placements_checked: u64,
    pub collisions: u64,
    pub moves_committed: u64,
    pub moves_rejected: u64,
    pub resizes_committed: u64,
    pub resizes_rejected: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target.to_string(),
            "engine_metrics".to_string(),
            self.as_fields(),
        )
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("uptime_ms".to_string(), json!(self.uptime_ms));
        map.insert(
            "placements_checked".to_string(),
            json!(self.placements_checked),
        );
        map.insert("collisions".to_string(), json!(self.collisions));
        map.insert("moves_committed".to_string(), json!(self.moves_committed));
        map.insert("moves_rejected".to_string(), json!(self.moves_rejected));
        map.insert(
            "resizes_committed".to_string(),
            json!(self.resizes_committed),
        );
        map.insert("resizes_rejected".to_string(), json!(self.resizes_rejected));
        map
    }
}
