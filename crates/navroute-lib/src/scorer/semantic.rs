//! Class-based edge cost.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{EdgeView, Metadata};

use super::validate_non_negative;

/// Charges a configured cost per semantic class.
///
/// The class is read from `class_tag` on both the edge and the node it leads
/// into; each match contributes its class cost. Unknown classes cost nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SemanticScorer {
    pub weight: f64,
    pub class_tag: String,
    pub classes: BTreeMap<String, f64>,
}

impl Default for SemanticScorer {
    fn default() -> Self {
        Self {
            weight: 1.0,
            class_tag: "class".to_string(),
            classes: BTreeMap::new(),
        }
    }
}

impl SemanticScorer {
    pub fn with_class(mut self, class: impl Into<String>, cost: f64) -> Self {
        self.classes.insert(class.into(), cost);
        self
    }

    pub fn score(&self, view: &EdgeView<'_>) -> Option<f64> {
        let cost = self.class_cost(&view.edge.metadata) + self.class_cost(&view.target.metadata);
        Some(self.weight * cost)
    }

    fn class_cost(&self, metadata: &Metadata) -> f64 {
        metadata
            .get_str(&self.class_tag)
            .and_then(|class| self.classes.get(class))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn validate(&self) -> Result<()> {
        validate_non_negative("semantic", "weight", self.weight)?;
        for (class, cost) in &self.classes {
            validate_non_negative("semantic", &format!("classes.{class}"), *cost)?;
        }
        Ok(())
    }
}
