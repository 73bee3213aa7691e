//! Shared graph fixtures for integration tests.

use std::path::PathBuf;

use navroute_lib::{Coordinates, Edge, Graph, Node, NodeIndex};

/// Path to the fixtures directory shared with the CLI tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the warehouse corridor graph fixture.
#[allow(dead_code)]
pub fn warehouse_graph_path() -> PathBuf {
    fixtures_dir().join("warehouse_graph.json")
}

/// Build a graph with `node_count` nodes (ids `0..node_count`, laid out on a
/// line) and directed edges `(source, target, cost)` with ids in list order.
#[allow(dead_code)]
pub fn graph_from_edges(node_count: usize, edges: &[(NodeIndex, NodeIndex, f64)]) -> Graph {
    let mut graph = Graph::new();
    for index in 0..node_count {
        graph
            .add_node(Node::new(index as u32, Coordinates::new(index as f64, 0.0)))
            .expect("unique node id");
    }
    for (id, &(source, target, cost)) in edges.iter().enumerate() {
        graph
            .add_edge(Edge::new(id as u32, source, target).with_cost(cost))
            .expect("valid edge");
    }
    graph
}

/// Node indices of the four-node example graph.
#[allow(dead_code)]
pub const A: NodeIndex = 0;
#[allow(dead_code)]
pub const B: NodeIndex = 1;
#[allow(dead_code)]
pub const C: NodeIndex = 2;
#[allow(dead_code)]
pub const D: NodeIndex = 3;

/// A→B 1, A→C 4, B→C 1, C→D 1, B→D 5.
#[allow(dead_code)]
pub fn diamond_graph() -> Graph {
    graph_from_edges(
        4,
        &[
            (A, B, 1.0),
            (A, C, 4.0),
            (B, C, 1.0),
            (C, D, 1.0),
            (B, D, 5.0),
        ],
    )
}
