//! Pluggable edge scoring.
//!
//! The [`EdgeScorer`] aggregates an ordered list of [`EdgeCostFunction`]s. Each
//! function either rejects an edge outright or contributes a non-negative cost;
//! the scorer sums the contributions. The cost functions are a closed set of
//! strategy variants:
//!
//! - [`distance`] - Euclidean length scaled by a relative speed limit
//! - [`time`] - Expected traversal time from recorded times or speed limits
//! - [`penalty`] - Fixed penalty read from edge metadata
//! - [`semantic`] - Per-class costs for tagged edges and nodes
//! - [`dynamic_edges`] - Runtime closures and cost adjustments by edge id
//!
//! # Example
//!
//! ```
//! use navroute_lib::scorer::{DistanceScorer, EdgeCostFunction, EdgeScorer, PenaltyScorer};
//!
//! let scorer = EdgeScorer::new(vec![
//!     EdgeCostFunction::Distance(DistanceScorer::default()),
//!     EdgeCostFunction::Penalty(PenaltyScorer::default()),
//! ]);
//! assert_eq!(scorer.len(), 2);
//! ```

pub mod distance;
pub mod dynamic_edges;
pub mod penalty;
pub mod semantic;
pub mod time;

pub use distance::DistanceScorer;
pub use dynamic_edges::DynamicEdgesScorer;
pub use penalty::PenaltyScorer;
pub use semantic::SemanticScorer;
pub use time::TimeScorer;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::graph::EdgeView;

/// A single scoring rule.
///
/// `score` returns `None` when the edge must not be traversed, otherwise the
/// cost this rule adds to the traversal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EdgeCostFunction {
    Distance(DistanceScorer),
    Time(TimeScorer),
    Penalty(PenaltyScorer),
    Semantic(SemanticScorer),
    DynamicEdges(DynamicEdgesScorer),
}

impl EdgeCostFunction {
    /// Short name used in logs and configuration.
    pub fn name(&self) -> &'static str {
        match self {
            EdgeCostFunction::Distance(_) => "distance",
            EdgeCostFunction::Time(_) => "time",
            EdgeCostFunction::Penalty(_) => "penalty",
            EdgeCostFunction::Semantic(_) => "semantic",
            EdgeCostFunction::DynamicEdges(_) => "dynamic_edges",
        }
    }

    pub fn score(&self, view: &EdgeView<'_>) -> Option<f64> {
        match self {
            EdgeCostFunction::Distance(scorer) => scorer.score(view),
            EdgeCostFunction::Time(scorer) => scorer.score(view),
            EdgeCostFunction::Penalty(scorer) => scorer.score(view),
            EdgeCostFunction::Semantic(scorer) => scorer.score(view),
            EdgeCostFunction::DynamicEdges(scorer) => scorer.score(view),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            EdgeCostFunction::Distance(scorer) => scorer.validate(),
            EdgeCostFunction::Time(scorer) => scorer.validate(),
            EdgeCostFunction::Penalty(scorer) => scorer.validate(),
            EdgeCostFunction::Semantic(scorer) => scorer.validate(),
            EdgeCostFunction::DynamicEdges(scorer) => scorer.validate(),
        }
    }
}

/// Ordered composition of cost functions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeScorer {
    functions: Vec<EdgeCostFunction>,
}

impl EdgeScorer {
    pub fn new(functions: Vec<EdgeCostFunction>) -> Self {
        Self { functions }
    }

    pub fn push(&mut self, function: EdgeCostFunction) {
        self.functions.push(function);
    }

    pub fn functions(&self) -> &[EdgeCostFunction] {
        &self.functions
    }

    /// Mutable access, e.g. to close edges on a [`DynamicEdgesScorer`]
    /// between searches.
    pub fn functions_mut(&mut self) -> &mut [EdgeCostFunction] {
        &mut self.functions
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Score an edge against every configured function.
    ///
    /// Returns `None` as soon as one function rejects the edge. With no
    /// functions configured every edge is valid at zero cost.
    pub fn score(&self, view: &EdgeView<'_>) -> Option<f64> {
        let mut total = 0.0;
        for function in &self.functions {
            let cost = function.score(view)?;
            if !cost.is_finite() || cost < 0.0 {
                warn!(
                    edge = view.edge.id,
                    scorer = function.name(),
                    cost,
                    "cost function produced an unusable cost; rejecting edge"
                );
                return None;
            }
            total += cost;
        }
        Some(total)
    }

    pub fn validate(&self) -> Result<()> {
        self.functions.iter().try_for_each(EdgeCostFunction::validate)
    }
}

/// Check that a weight or cost parameter is finite and non-negative.
pub(crate) fn validate_non_negative(scorer: &str, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidConfig {
            message: format!("{scorer}.{field} must be finite and non-negative, got {value}"),
        });
    }
    Ok(())
}
