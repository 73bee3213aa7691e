//! Metadata penalty edge cost.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::EdgeView;

use super::validate_non_negative;

/// Adds the penalty recorded in the edge's metadata, scaled by `weight`.
///
/// Edges without a penalty cost nothing; a negative penalty is treated as
/// malformed data and rejects the edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenaltyScorer {
    pub weight: f64,
    pub penalty_tag: String,
}

impl Default for PenaltyScorer {
    fn default() -> Self {
        Self {
            weight: 1.0,
            penalty_tag: "penalty".to_string(),
        }
    }
}

impl PenaltyScorer {
    pub fn score(&self, view: &EdgeView<'_>) -> Option<f64> {
        let penalty = view.edge.metadata.get_f64(&self.penalty_tag).unwrap_or(0.0);
        if !penalty.is_finite() || penalty < 0.0 {
            return None;
        }
        Some(self.weight * penalty)
    }

    pub fn validate(&self) -> Result<()> {
        validate_non_negative("penalty", "weight", self.weight)
    }
}
