//! Traversal-time edge cost.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::EdgeView;

use super::validate_non_negative;

/// Scores an edge by the time needed to traverse it.
///
/// A previously recorded traversal time (`time_tag`, seconds) takes precedence.
/// Otherwise the time is the edge length divided by the edge's absolute speed
/// limit (`speed_tag`), capped at `max_speed`. A negative or non-finite
/// recorded time is malformed data and rejects the edge, as a negative
/// penalty does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeScorer {
    pub weight: f64,
    /// Maximum platform speed in distance units per second.
    pub max_speed: f64,
    pub speed_tag: String,
    pub time_tag: String,
}

impl Default for TimeScorer {
    fn default() -> Self {
        Self {
            weight: 1.0,
            max_speed: 1.0,
            speed_tag: "abs_speed_limit".to_string(),
            time_tag: "abs_time_taken".to_string(),
        }
    }
}

impl TimeScorer {
    pub fn score(&self, view: &EdgeView<'_>) -> Option<f64> {
        let metadata = &view.edge.metadata;
        if let Some(time) = metadata.get_f64(&self.time_tag) {
            if !time.is_finite() || time < 0.0 {
                return None;
            }
            return Some(self.weight * time);
        }

        let speed = metadata
            .get_f64(&self.speed_tag)
            .map_or(self.max_speed, |limit| limit.min(self.max_speed));
        if speed.is_nan() || speed <= 0.0 {
            return None;
        }
        Some(self.weight * view.length() / speed)
    }

    pub fn validate(&self) -> Result<()> {
        validate_non_negative("time", "weight", self.weight)?;
        if !self.max_speed.is_finite() || self.max_speed <= 0.0 {
            return Err(Error::InvalidConfig {
                message: format!(
                    "time.max_speed must be finite and positive, got {}",
                    self.max_speed
                ),
            });
        }
        Ok(())
    }
}
