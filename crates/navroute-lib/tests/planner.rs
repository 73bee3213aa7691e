mod common;

use navroute_lib::scorer::{DynamicEdgesScorer, PenaltyScorer};
use navroute_lib::{
    load_graph, EdgeCostFunction, EdgeScorer, Error, Metadata, PlannerConfig, RoutePlanner,
};

use common::{diamond_graph, graph_from_edges, warehouse_graph_path, A, B, C, D};

fn unbounded() -> RoutePlanner {
    RoutePlanner::new(&PlannerConfig::default()).expect("default config is valid")
}

#[test]
fn diamond_route_takes_cheapest_chain() {
    let mut graph = diamond_graph();
    let route = unbounded().find_route(&mut graph, A, D).expect("route exists");

    assert_eq!(route.nodes, vec![A, B, C, D]);
    // Edge indices follow insertion order: A→B, B→C, C→D.
    assert_eq!(route.edges, vec![0, 2, 3]);
    assert_eq!(route.cost, 3.0);
    assert_eq!(route.start, A);
    assert_eq!(route.goal, D);
}

#[test]
fn repeated_searches_are_deterministic() {
    // Two equal-cost routes 0→1→3 and 0→2→3.
    let mut graph = graph_from_edges(
        4,
        &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0)],
    );
    let mut planner = unbounded();
    let first = planner.find_route(&mut graph, 0, 3).expect("route exists");
    for _ in 0..5 {
        let again = planner.find_route(&mut graph, 0, 3).expect("route exists");
        assert_eq!(again, first);
    }
    assert_eq!(first.cost, 2.0);
    // Equal costs pop in insertion order, so the first-added branch wins.
    assert_eq!(first.nodes, vec![0, 1, 3]);
}

#[test]
fn disconnected_goal_reports_route_not_found() {
    let mut graph = graph_from_edges(3, &[(0, 1, 1.0), (2, 0, 1.0)]);
    let err = unbounded()
        .find_route(&mut graph, 0, 2)
        .expect_err("goal unreachable");
    assert!(matches!(err, Error::RouteNotFound { start: 0, goal: 2 }));
    assert!(!err.is_inconclusive());
}

#[test]
fn start_equal_to_goal_is_a_free_single_node_route() {
    let mut graph = diamond_graph();
    let route = unbounded().find_route(&mut graph, C, C).expect("self route");
    assert_eq!(route.nodes, vec![C]);
    assert!(route.edges.is_empty());
    assert_eq!(route.cost, 0.0);
}

#[test]
fn self_route_fits_in_a_single_iteration() {
    let mut graph = diamond_graph();
    let mut planner = RoutePlanner::with_scorer(1, EdgeScorer::default());
    let route = planner.find_route(&mut graph, B, B).expect("self route");
    assert_eq!(route.nodes, vec![B]);
}

#[test]
fn out_of_range_indices_are_rejected_before_searching() {
    let mut graph = diamond_graph();
    let mut planner = unbounded();

    let err = planner.find_route(&mut graph, 4, A).expect_err("bad start");
    assert!(matches!(
        err,
        Error::InvalidIndex {
            index: 4,
            node_count: 4
        }
    ));

    let err = planner.find_route(&mut graph, A, 17).expect_err("bad goal");
    assert!(matches!(err, Error::InvalidIndex { index: 17, .. }));

    // No search ran, so no node was touched.
    assert!(graph.nodes().iter().all(|node| !node.search_state().visited));
}

#[test]
fn closed_edges_are_treated_as_absent() {
    let mut graph = diamond_graph();
    let mut closures = DynamicEdgesScorer::default();
    // Close C→D (edge id 3): D is only reachable through B→D.
    closures.close_edge(3);
    let mut planner = RoutePlanner::with_scorer(
        0,
        EdgeScorer::new(vec![
            EdgeCostFunction::DynamicEdges(closures.clone()),
        ]),
    );
    let route = planner.find_route(&mut graph, A, D).expect("detour exists");
    assert_eq!(route.nodes, vec![A, B, D]);

    // Closing B→D as well leaves no way into D.
    closures.close_edge(4);
    let mut planner = RoutePlanner::with_scorer(
        0,
        EdgeScorer::new(vec![EdgeCostFunction::DynamicEdges(closures)]),
    );
    let err = planner
        .find_route(&mut graph, A, D)
        .expect_err("only path is closed");
    assert!(matches!(err, Error::RouteNotFound { .. }));
}

#[test]
fn malformed_penalties_reject_edges() {
    let mut graph = graph_from_edges(3, &[(0, 2, 1.0), (0, 1, 1.0), (1, 2, 1.0)]);
    // Rebuild edge 0 with a negative penalty through a fresh graph so the
    // direct edge becomes unusable.
    let mut document = navroute_lib::GraphDocument::from_graph(&graph);
    document.edges[0].metadata = Metadata::new().with("penalty", -1.0);
    document.edges[1].metadata = Metadata::new().with("penalty", 2.0);
    document.edges[2].metadata = Metadata::new().with("penalty", 3.0);
    graph = document.into_graph().expect("graph rebuilds");

    let mut planner = RoutePlanner::with_scorer(
        0,
        EdgeScorer::new(vec![EdgeCostFunction::Penalty(PenaltyScorer::default())]),
    );
    let route = planner.find_route(&mut graph, 0, 2).expect("detour exists");
    assert_eq!(route.nodes, vec![0, 1, 2]);
    assert_eq!(route.cost, 5.0);
}

#[test]
fn unusable_scorer_costs_are_routed_around() {
    let mut graph = diamond_graph();
    let mut adjustments = DynamicEdgesScorer::default();
    // B→C (edge id 2) gets a negative cost that validation never saw.
    adjustments.set_adjustment(2, -1.0);
    adjustments.set_adjustment(1, 20.0);
    adjustments.set_adjustment(4, 10.0);
    let mut planner = RoutePlanner::with_scorer(
        0,
        EdgeScorer::new(vec![EdgeCostFunction::DynamicEdges(adjustments)]),
    );

    let route = planner
        .find_route(&mut graph, A, D)
        .expect("search continues past the rejected edge");
    assert_eq!(route.nodes, vec![A, B, D]);
    assert_eq!(route.edges, vec![0, 4]);
    assert_eq!(route.cost, 10.0);
}

#[test]
fn iteration_bound_is_reported_distinctly() {
    let mut graph = diamond_graph();
    let mut planner = RoutePlanner::with_scorer(2, EdgeScorer::default());
    let err = planner
        .find_route(&mut graph, A, D)
        .expect_err("bound too small");
    assert!(matches!(
        err,
        Error::IterationBoundExceeded { max_iterations: 2 }
    ));
    assert!(err.is_inconclusive());

    // A larger bound resolves the same query.
    let mut planner = RoutePlanner::with_scorer(16, EdgeScorer::default());
    let route = planner.find_route(&mut graph, A, D).expect("route exists");
    assert_eq!(route.cost, 3.0);
}

#[test]
fn exhausted_queue_wins_over_iteration_bound() {
    // A single pop exhausts the queue: the answer is definitive.
    let mut graph = graph_from_edges(2, &[]);
    let mut planner = RoutePlanner::with_scorer(1, EdgeScorer::default());
    let err = planner.find_route(&mut graph, 0, 1).expect_err("no edges");
    assert!(matches!(err, Error::RouteNotFound { .. }));
}

#[test]
fn stale_queue_entries_are_skipped() {
    // 0→2 is pushed at cost 10, then improved to 2 via 1. The stale entry is
    // popped before the goal and must not reopen node 2 or corrupt its parent.
    let mut graph = graph_from_edges(
        4,
        &[(0, 2, 10.0), (0, 1, 1.0), (1, 2, 1.0), (2, 3, 20.0)],
    );
    let route = unbounded().find_route(&mut graph, 0, 3).expect("route exists");
    assert_eq!(route.nodes, vec![0, 1, 2, 3]);
    assert_eq!(route.cost, 22.0);

    let node = graph.node(2).expect("node exists").search_state();
    assert_eq!(node.cost_to_come, 2.0);
    assert_eq!(node.parent_edge, Some(2));
}

#[test]
fn reused_graph_gives_independent_results() {
    let mut graph = diamond_graph();
    let mut planner = unbounded();

    let first = planner.find_route(&mut graph, A, D).expect("route exists");
    let second = planner.find_route(&mut graph, B, C).expect("route exists");
    let err = planner
        .find_route(&mut graph, D, A)
        .expect_err("edges only run forward");
    let third = planner.find_route(&mut graph, A, D).expect("route exists");

    assert_eq!(second.nodes, vec![B, C]);
    assert_eq!(second.cost, 1.0);
    assert!(matches!(err, Error::RouteNotFound { .. }));
    assert_eq!(first, third);
}

#[test]
fn scorer_updates_between_searches_take_effect() {
    let mut graph = diamond_graph();
    let mut planner = RoutePlanner::with_scorer(
        0,
        EdgeScorer::new(vec![EdgeCostFunction::DynamicEdges(
            DynamicEdgesScorer::default(),
        )]),
    );

    // With only an empty dynamic scorer every edge is free.
    let route = planner.find_route(&mut graph, A, D).expect("route exists");
    assert_eq!(route.cost, 0.0);

    if let EdgeCostFunction::DynamicEdges(dynamic) = &mut planner.scorer_mut().functions_mut()[0] {
        dynamic.set_adjustment(4, 1.0);
        dynamic.close_edge(3);
    }
    let route = planner.find_route(&mut graph, A, D).expect("route exists");
    assert_eq!(route.nodes, vec![A, B, D]);
    assert_eq!(route.cost, 1.0);
}

#[test]
fn warehouse_fixture_routes_through_cheapest_corridor() {
    let mut graph = load_graph(&warehouse_graph_path()).expect("fixture loads");
    let start = graph.require_index(1).unwrap();
    let goal = graph.require_index(10).unwrap();

    let route = unbounded()
        .find_route(&mut graph, start, goal)
        .expect("route exists");
    let summary = route.summarize(&graph);
    assert_eq!(summary.nodes, vec![1, 2, 5, 4, 8, 10]);
    assert_eq!(summary.edges, vec![100, 106, 108, 110, 120]);
    assert_eq!(summary.cost, 41.0);
}

#[test]
fn warehouse_fixture_honours_configured_scorers() {
    let mut graph = load_graph(&warehouse_graph_path()).expect("fixture loads");
    let config = PlannerConfig::from_path(&common::fixtures_dir().join("planner_config.json"))
        .expect("config loads");
    let mut planner = RoutePlanner::new(&config).expect("config valid");

    let start = graph.require_index(1).unwrap();
    let goal = graph.require_index(8).unwrap();
    let route = planner
        .find_route(&mut graph, start, goal)
        .expect("route exists");
    let summary = route.summarize(&graph);
    assert_eq!(summary.nodes, vec![1, 2, 3, 4, 8]);
    assert_eq!(summary.cost, 40.0);

    let isolated = graph.require_index(9).unwrap();
    let err = planner
        .find_route(&mut graph, start, isolated)
        .expect_err("isolated node");
    assert!(matches!(err, Error::RouteNotFound { start: 1, goal: 9 }));
}
