//! JSON graph documents.
//!
//! ```json
//! {
//!   "nodes": [{"id": 1, "x": 0.0, "y": 0.0}, {"id": 2, "x": 4.0, "y": 0.0}],
//!   "edges": [{"id": 10, "source": 1, "target": 2, "cost": 4.0, "metadata": {"penalty": 1.0}}]
//! }
//! ```
//!
//! Edge endpoints refer to node ids; they are resolved to arena indices when
//! the document is turned into a [`Graph`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Coordinates, Edge, EdgeCost, EdgeId, Graph, Metadata, Node, NodeId};

/// Serialized form of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

fn default_overridable() -> bool {
    true
}

/// Serialized form of an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    #[serde(default)]
    pub cost: f64,
    #[serde(default = "default_overridable")]
    pub overridable: bool,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

/// Complete graph document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    /// Build a graph, validating ids, endpoints, and costs.
    pub fn into_graph(self) -> Result<Graph> {
        let mut graph = Graph::new();
        for record in self.nodes {
            graph.add_node(
                Node::new(record.id, Coordinates::new(record.x, record.y))
                    .with_metadata(record.metadata),
            )?;
        }

        for record in self.edges {
            let resolve = |node: NodeId| {
                graph.index_of(node).ok_or_else(|| Error::UnknownEdgeEndpoint {
                    edge: record.id,
                    node: format!("id {node}"),
                })
            };
            let source = resolve(record.source)?;
            let target = resolve(record.target)?;

            let mut edge = Edge::new(record.id, source, target).with_metadata(record.metadata);
            edge.cost = EdgeCost {
                cost: record.cost,
                overridable: record.overridable,
            };
            graph.add_edge(edge)?;
        }

        Ok(graph)
    }

    /// Capture a graph's topology and static attributes.
    pub fn from_graph(graph: &Graph) -> Self {
        let nodes = graph
            .nodes()
            .iter()
            .map(|node| NodeRecord {
                id: node.id,
                x: node.coords.x,
                y: node.coords.y,
                metadata: node.metadata.clone(),
            })
            .collect();
        let edges = graph
            .edges()
            .iter()
            .map(|edge| EdgeRecord {
                id: edge.id,
                source: graph.nodes()[edge.source].id,
                target: graph.nodes()[edge.target].id,
                cost: edge.cost.cost,
                overridable: edge.cost.overridable,
                metadata: edge.metadata.clone(),
            })
            .collect();
        Self { nodes, edges }
    }
}

/// Parse a graph from a JSON string.
pub fn parse_graph(json: &str) -> Result<Graph> {
    let document: GraphDocument = serde_json::from_str(json)?;
    document.into_graph()
}

/// Load a graph from a JSON file.
pub fn load_graph(path: &Path) -> Result<Graph> {
    let contents = fs::read_to_string(path)?;
    let graph = parse_graph(&contents)?;
    debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}
