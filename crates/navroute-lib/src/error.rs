use thiserror::Error;

use crate::graph::{EdgeId, NodeId, NodeIndex};

/// Convenient result alias for the navroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a start or goal index does not refer to a node in the graph.
    #[error("node index {index} is not in the graph ({node_count} nodes)")]
    InvalidIndex { index: NodeIndex, node_count: usize },

    /// Raised when a node identifier could not be resolved to a graph index.
    #[error("unknown node id: {id}")]
    UnknownNode { id: NodeId },

    /// Raised when the search exhausted every reachable node without meeting the goal.
    #[error("no route found between node {start} and node {goal}")]
    RouteNotFound { start: NodeId, goal: NodeId },

    /// Raised when the iteration bound was reached before the search resolved.
    #[error("route search exceeded the maximum of {max_iterations} iterations")]
    IterationBoundExceeded { max_iterations: usize },

    /// Raised when two nodes share the same identifier.
    #[error("duplicate node id: {id}")]
    DuplicateNode { id: NodeId },

    /// Raised when two edges share the same identifier.
    #[error("duplicate edge id: {id}")]
    DuplicateEdge { id: EdgeId },

    /// Raised when an edge refers to a node that is not part of the graph.
    #[error("edge {edge} references unknown node {node}")]
    UnknownEdgeEndpoint { edge: EdgeId, node: String },

    /// Raised when a static edge cost is negative or not finite.
    #[error("edge {edge} has invalid cost {cost}; costs must be finite and non-negative")]
    InvalidEdgeCost { edge: EdgeId, cost: f64 },

    /// Raised when planner configuration fails validation.
    #[error("invalid planner configuration: {message}")]
    InvalidConfig { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error is an inconclusive search result that may succeed
    /// with a larger iteration bound.
    pub fn is_inconclusive(&self) -> bool {
        matches!(self, Error::IterationBoundExceeded { .. })
    }
}
