//! Route planning for navigation graphs.
//!
//! This module provides:
//! - [`RoutePlanner`] - Bounded Dijkstra search over a [`Graph`]
//! - [`Route`] - Successful search result (node/edge sequence plus cost)
//! - [`RouteSummary`] - Identifier-based rendering of a route for output
//!
//! # Example
//!
//! ```
//! use navroute_lib::{Coordinates, Edge, Graph, Node, PlannerConfig, RoutePlanner};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node(Node::new(1, Coordinates::new(0.0, 0.0))).unwrap();
//! let b = graph.add_node(Node::new(2, Coordinates::new(1.0, 0.0))).unwrap();
//! graph.add_edge(Edge::new(10, a, b).with_cost(2.5)).unwrap();
//!
//! let mut planner = RoutePlanner::new(&PlannerConfig::default()).unwrap();
//! let route = planner.find_route(&mut graph, a, b).unwrap();
//! assert_eq!(route.nodes, vec![a, b]);
//! assert_eq!(route.cost, 2.5);
//! ```

mod planner;

pub use planner::RoutePlanner;

use serde::Serialize;

use crate::graph::{EdgeId, EdgeIndex, Graph, NodeId, NodeIndex};

/// Route produced by a successful search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub start: NodeIndex,
    pub goal: NodeIndex,
    /// Node indices from start to goal inclusive.
    pub nodes: Vec<NodeIndex>,
    /// Edge indices in traversal order; one fewer than `nodes`.
    pub edges: Vec<EdgeIndex>,
    /// Accumulated cost of the route.
    pub cost: f64,
}

impl Route {
    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.edges.len()
    }

    /// Resolve indices to identifiers using the graph the route was planned on.
    ///
    /// # Panics
    ///
    /// Panics if any node or edge index is out of range for `graph`, which
    /// happens when the route was planned on a different graph.
    pub fn summarize(&self, graph: &Graph) -> RouteSummary {
        let node_id = |index: NodeIndex| graph.nodes()[index].id;
        RouteSummary {
            start: node_id(self.start),
            goal: node_id(self.goal),
            nodes: self.nodes.iter().copied().map(node_id).collect(),
            edges: self
                .edges
                .iter()
                .map(|&index| graph.edges()[index].id)
                .collect(),
            hops: self.hop_count(),
            cost: self.cost,
        }
    }
}

/// Identifier-based view of a [`Route`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub start: NodeId,
    pub goal: NodeId,
    pub nodes: Vec<NodeId>,
    pub edges: Vec<EdgeId>,
    pub hops: usize,
    pub cost: f64,
}
