use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier assigned to a node by whoever produced the graph.
pub type NodeId = u32;

/// Identifier assigned to an edge by whoever produced the graph.
pub type EdgeId = u32;

/// Position of a node inside the graph's node arena.
pub type NodeIndex = usize;

/// Position of an edge inside the graph's edge arena.
pub type EdgeIndex = usize;

/// Planar coordinates for a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Free-form attributes attached to nodes and edges.
///
/// The search never reads metadata; cost functions look up the tags they are
/// configured with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, serde_json::Value>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Numeric value for `key`, if present and numeric.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(serde_json::Value::as_f64)
    }

    /// String value for `key`, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(serde_json::Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Static traversal cost stored on an edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeCost {
    /// Fixed cost of traversing the edge. Zero means "unset": the planner
    /// falls back to the Euclidean length of the edge.
    pub cost: f64,
    /// Whether configured cost functions may replace the fixed cost.
    pub overridable: bool,
}

impl Default for EdgeCost {
    fn default() -> Self {
        Self {
            cost: 0.0,
            overridable: true,
        }
    }
}

/// Transient per-node state owned by the route search.
///
/// Only meaningful during and directly after a search; every search resets it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchState {
    /// Closed-set flag: the node's `cost_to_come` is final.
    pub visited: bool,
    /// Best known accumulated cost from the start node.
    pub cost_to_come: f64,
    /// Cost of the parent edge on the best known path.
    pub traversal_cost: f64,
    /// Edge used to reach this node on the best known path.
    pub parent_edge: Option<EdgeIndex>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            visited: false,
            cost_to_come: f64::INFINITY,
            traversal_cost: f64::INFINITY,
            parent_edge: None,
        }
    }
}

/// Vertex of the navigation graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub coords: Coordinates,
    pub metadata: Metadata,
    outgoing: Vec<EdgeIndex>,
    search_state: SearchState,
}

impl Node {
    pub fn new(id: NodeId, coords: Coordinates) -> Self {
        Self {
            id,
            coords,
            metadata: Metadata::default(),
            outgoing: Vec::new(),
            search_state: SearchState::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Indices of the edges leaving this node, in insertion order.
    pub fn outgoing(&self) -> &[EdgeIndex] {
        &self.outgoing
    }

    pub fn search_state(&self) -> &SearchState {
        &self.search_state
    }

    pub(crate) fn search_state_mut(&mut self) -> &mut SearchState {
        &mut self.search_state
    }
}

/// Directed connection between two nodes of the same graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub cost: EdgeCost,
    pub metadata: Metadata,
}

impl Edge {
    pub fn new(id: EdgeId, source: NodeIndex, target: NodeIndex) -> Self {
        Self {
            id,
            source,
            target,
            cost: EdgeCost::default(),
            metadata: Metadata::default(),
        }
    }

    /// Set a fixed cost that cost functions may still override.
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost.cost = cost;
        self
    }

    /// Set a fixed cost that is always used as-is.
    pub fn with_fixed_cost(mut self, cost: f64) -> Self {
        self.cost = EdgeCost {
            cost,
            overridable: false,
        };
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Borrowed view of an edge together with its endpoints, handed to cost
/// functions.
#[derive(Debug, Clone, Copy)]
pub struct EdgeView<'a> {
    pub edge: &'a Edge,
    pub source: &'a Node,
    pub target: &'a Node,
}

impl EdgeView<'_> {
    /// Straight-line length between the edge's endpoints.
    pub fn length(&self) -> f64 {
        self.source.coords.distance_to(&self.target.coords)
    }
}

/// Navigation graph: an arena of nodes and an arena of edges.
///
/// Nodes and edges are addressed by their position in the arenas. The graph
/// also stores each node's transient [`SearchState`], which the route planner
/// resets and rewrites on every search.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_ids: HashMap<NodeId, NodeIndex>,
    edge_ids: HashSet<EdgeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its index.
    pub fn add_node(&mut self, mut node: Node) -> Result<NodeIndex> {
        if self.node_ids.contains_key(&node.id) {
            return Err(Error::DuplicateNode { id: node.id });
        }
        let index = self.nodes.len();
        node.outgoing.clear();
        node.search_state = SearchState::default();
        self.node_ids.insert(node.id, index);
        self.nodes.push(node);
        Ok(index)
    }

    /// Add a directed edge and return its index.
    ///
    /// Both endpoints must already be in the graph and the static cost must be
    /// finite and non-negative.
    pub fn add_edge(&mut self, edge: Edge) -> Result<EdgeIndex> {
        if self.edge_ids.contains(&edge.id) {
            return Err(Error::DuplicateEdge { id: edge.id });
        }
        for endpoint in [edge.source, edge.target] {
            if endpoint >= self.nodes.len() {
                return Err(Error::UnknownEdgeEndpoint {
                    edge: edge.id,
                    node: format!("index {endpoint}"),
                });
            }
        }
        if !edge.cost.cost.is_finite() || edge.cost.cost < 0.0 {
            return Err(Error::InvalidEdgeCost {
                edge: edge.id,
                cost: edge.cost.cost,
            });
        }

        let index = self.edges.len();
        self.nodes[edge.source].outgoing.push(index);
        self.edge_ids.insert(edge.id);
        self.edges.push(edge);
        Ok(index)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn edge(&self, index: EdgeIndex) -> Option<&Edge> {
        self.edges.get(index)
    }

    /// Resolve a node identifier to its arena index.
    pub fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.node_ids.get(&id).copied()
    }

    /// Resolve a node identifier, returning [`Error::UnknownNode`] when absent.
    pub fn require_index(&self, id: NodeId) -> Result<NodeIndex> {
        self.index_of(id).ok_or(Error::UnknownNode { id })
    }

    /// Outgoing edges of the node at `index`; empty for unknown indices.
    pub fn neighbours(&self, index: NodeIndex) -> impl Iterator<Item = &Edge> + '_ {
        self.nodes
            .get(index)
            .map(Node::outgoing)
            .unwrap_or(&[])
            .iter()
            .map(move |&edge| &self.edges[edge])
    }

    /// View of the edge at `index` with both endpoints resolved.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn edge_view(&self, index: EdgeIndex) -> EdgeView<'_> {
        let edge = &self.edges[index];
        EdgeView {
            edge,
            source: &self.nodes[edge.source],
            target: &self.nodes[edge.target],
        }
    }

    /// Restore every node's search state to its pristine value.
    pub fn reset_search_states(&mut self) {
        for node in &mut self.nodes {
            node.search_state = SearchState::default();
        }
    }

    pub(crate) fn node_mut(&mut self, index: NodeIndex) -> &mut Node {
        &mut self.nodes[index]
    }
}
