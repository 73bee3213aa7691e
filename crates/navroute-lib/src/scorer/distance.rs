//! Distance-based edge cost.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::EdgeView;

use super::validate_non_negative;

/// Scores an edge by its straight-line length.
///
/// When the edge carries a relative speed limit under `speed_tag` (a fraction
/// of the platform's nominal speed), the length is divided by it so slow
/// segments cost more. A non-positive speed limit marks the edge impassable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceScorer {
    pub weight: f64,
    pub speed_tag: String,
}

impl Default for DistanceScorer {
    fn default() -> Self {
        Self {
            weight: 1.0,
            speed_tag: "speed_limit".to_string(),
        }
    }
}

impl DistanceScorer {
    pub fn score(&self, view: &EdgeView<'_>) -> Option<f64> {
        let speed = view.edge.metadata.get_f64(&self.speed_tag).unwrap_or(1.0);
        if speed.is_nan() || speed <= 0.0 {
            return None;
        }
        Some(self.weight * view.length() / speed)
    }

    pub fn validate(&self) -> Result<()> {
        validate_non_negative("distance", "weight", self.weight)
    }
}
