mod common;

use std::fs;

use navroute_lib::{load_graph, parse_graph, Error, GraphDocument};
use tempfile::tempdir;

use common::{graph_from_edges, warehouse_graph_path};

#[test]
fn warehouse_fixture_loads() {
    let graph = load_graph(&warehouse_graph_path()).expect("fixture loads");
    assert_eq!(graph.node_count(), 10);
    assert_eq!(graph.edge_count(), 21);

    let dock = graph.require_index(1).unwrap();
    assert_eq!(graph.nodes()[dock].metadata.get_str("class"), Some("dock"));
    assert_eq!(graph.neighbours(dock).count(), 2);

    let isolated = graph.require_index(9).unwrap();
    assert_eq!(graph.neighbours(isolated).count(), 0);

    let one_way = graph
        .edges()
        .iter()
        .find(|edge| edge.id == 120)
        .expect("edge 120 present");
    assert!(!one_way.cost.overridable);
}

#[test]
fn saved_document_reloads_identically() {
    let graph = graph_from_edges(3, &[(0, 1, 2.0), (1, 2, 3.5)]);
    let document = GraphDocument::from_graph(&graph);

    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("graph.json");
    fs::write(&path, serde_json::to_string_pretty(&document).unwrap()).unwrap();

    let reloaded = load_graph(&path).expect("graph reloads");
    assert_eq!(GraphDocument::from_graph(&reloaded), document);
}

#[test]
fn missing_file_surfaces_io_error() {
    let dir = tempdir().expect("temp dir");
    let err = load_graph(&dir.path().join("absent.json")).expect_err("missing file");
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn malformed_json_surfaces_json_error() {
    let err = parse_graph("{\"nodes\": [").expect_err("truncated document");
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn invalid_documents_are_rejected() {
    let duplicate_node = r#"{"nodes": [{"id": 1, "x": 0, "y": 0}, {"id": 1, "x": 1, "y": 0}]}"#;
    assert!(matches!(
        parse_graph(duplicate_node),
        Err(Error::DuplicateNode { id: 1 })
    ));

    let negative_cost = r#"{
        "nodes": [{"id": 1, "x": 0, "y": 0}, {"id": 2, "x": 1, "y": 0}],
        "edges": [{"id": 4, "source": 1, "target": 2, "cost": -3.0}]
    }"#;
    assert!(matches!(
        parse_graph(negative_cost),
        Err(Error::InvalidEdgeCost { edge: 4, .. })
    ));

    let duplicate_edge = r#"{
        "nodes": [{"id": 1, "x": 0, "y": 0}, {"id": 2, "x": 1, "y": 0}],
        "edges": [
            {"id": 4, "source": 1, "target": 2},
            {"id": 4, "source": 2, "target": 1}
        ]
    }"#;
    assert!(matches!(
        parse_graph(duplicate_edge),
        Err(Error::DuplicateEdge { id: 4 })
    ));
}
