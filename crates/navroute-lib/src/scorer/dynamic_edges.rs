//! Runtime edge closures and cost adjustments.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{EdgeId, EdgeView};

use super::validate_non_negative;

/// Closes edges and adds per-edge costs keyed by edge id.
///
/// Intended to be updated between searches as the environment changes
/// (blocked corridors, congestion reports).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicEdgesScorer {
    pub closed: BTreeSet<EdgeId>,
    /// Serialized as a list of `{"edge": id, "cost": value}` records.
    #[serde(with = "adjustment_list")]
    pub adjustments: BTreeMap<EdgeId, f64>,
}

#[derive(Serialize, Deserialize)]
struct EdgeAdjustment {
    edge: EdgeId,
    cost: f64,
}

// Integer map keys do not survive the buffering serde does for internally
// tagged enums, so adjustments travel as a list.
mod adjustment_list {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serializer};

    use super::EdgeAdjustment;
    use crate::graph::EdgeId;

    pub fn serialize<S>(adjustments: &BTreeMap<EdgeId, f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(
            adjustments
                .iter()
                .map(|(&edge, &cost)| EdgeAdjustment { edge, cost }),
        )
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<EdgeId, f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let list = Vec::<EdgeAdjustment>::deserialize(deserializer)?;
        Ok(list
            .into_iter()
            .map(|adjustment| (adjustment.edge, adjustment.cost))
            .collect())
    }
}

impl DynamicEdgesScorer {
    pub fn close_edge(&mut self, edge: EdgeId) {
        self.closed.insert(edge);
    }

    pub fn open_edge(&mut self, edge: EdgeId) {
        self.closed.remove(&edge);
    }

    pub fn is_closed(&self, edge: EdgeId) -> bool {
        self.closed.contains(&edge)
    }

    pub fn set_adjustment(&mut self, edge: EdgeId, cost: f64) {
        self.adjustments.insert(edge, cost);
    }

    pub fn adjustment(&self, edge: EdgeId) -> Option<f64> {
        self.adjustments.get(&edge).copied()
    }

    /// Reopen every edge and drop every adjustment.
    pub fn clear(&mut self) {
        self.closed.clear();
        self.adjustments.clear();
    }

    pub fn score(&self, view: &EdgeView<'_>) -> Option<f64> {
        let id = view.edge.id;
        if self.is_closed(id) {
            return None;
        }
        Some(self.adjustment(id).unwrap_or(0.0))
    }

    pub fn validate(&self) -> Result<()> {
        for (edge, cost) in &self.adjustments {
            validate_non_negative("dynamic_edges", &format!("adjustments.{edge}"), *cost)?;
        }
        Ok(())
    }
}
