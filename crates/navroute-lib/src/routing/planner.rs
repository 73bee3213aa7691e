//! Bounded Dijkstra route planner.

use tracing::{debug, trace};

use crate::config::PlannerConfig;
use crate::error::{Error, Result};
use crate::graph::{EdgeView, Graph, NodeIndex};
use crate::queue::{NodeElement, NodeQueue};
use crate::scorer::EdgeScorer;

use super::Route;

/// Optimal route planner over an arbitrary directed graph.
///
/// The planner owns its priority queue and edge scorer and reuses both across
/// searches. Search state is written to the graph's nodes, so a graph can only
/// be searched by one planner at a time; the `&mut Graph` borrow in
/// [`RoutePlanner::find_route`] enforces that.
#[derive(Debug)]
pub struct RoutePlanner {
    max_iterations: usize,
    queue: NodeQueue,
    scorer: EdgeScorer,
}

impl Default for RoutePlanner {
    fn default() -> Self {
        Self::with_scorer(0, EdgeScorer::default())
    }
}

impl RoutePlanner {
    /// Build a planner from validated configuration.
    pub fn new(config: &PlannerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_scorer(
            config.max_iterations,
            EdgeScorer::new(config.scorers.clone()),
        ))
    }

    /// Build a planner directly. A `max_iterations` of zero means unbounded.
    pub fn with_scorer(max_iterations: u32, scorer: EdgeScorer) -> Self {
        let max_iterations = match max_iterations {
            0 => usize::MAX,
            limit => limit as usize,
        };
        Self {
            max_iterations,
            queue: NodeQueue::new(),
            scorer,
        }
    }

    /// Effective iteration bound (`usize::MAX` when unbounded).
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn scorer(&self) -> &EdgeScorer {
        &self.scorer
    }

    /// Mutable scorer access for updating cost functions between searches.
    pub fn scorer_mut(&mut self) -> &mut EdgeScorer {
        &mut self.scorer
    }

    /// Find the lowest-cost route from `start` to `goal`.
    ///
    /// Resets and then rewrites the search state of every node in `graph`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidIndex`] when either index is outside the graph.
    /// - [`Error::RouteNotFound`] when the goal is unreachable.
    /// - [`Error::IterationBoundExceeded`] when the iteration bound is hit first.
    pub fn find_route(
        &mut self,
        graph: &mut Graph,
        start: NodeIndex,
        goal: NodeIndex,
    ) -> Result<Route> {
        for index in [start, goal] {
            if index >= graph.node_count() {
                return Err(Error::InvalidIndex {
                    index,
                    node_count: graph.node_count(),
                });
            }
        }

        let iterations = self.find_shortest_traversal(graph, start, goal)?;
        let route = reconstruct_route(graph, start, goal);
        debug!(
            start = graph.nodes()[start].id,
            goal = graph.nodes()[goal].id,
            iterations,
            hops = route.hop_count(),
            cost = route.cost,
            "route found"
        );
        Ok(route)
    }

    /// Run Dijkstra's algorithm until the goal is closed, returning the number
    /// of iterations used.
    fn find_shortest_traversal(
        &mut self,
        graph: &mut Graph,
        start: NodeIndex,
        goal: NodeIndex,
    ) -> Result<usize> {
        graph.reset_search_states();
        self.queue.clear();

        graph.node_mut(start).search_state_mut().cost_to_come = 0.0;
        self.queue.push(0.0, start);

        let mut iterations = 0usize;
        while let Some(NodeElement { cost, node }) = self.queue.pop() {
            if iterations == self.max_iterations {
                debug!(
                    max_iterations = self.max_iterations,
                    pending = self.queue.len() + 1,
                    "route search hit its iteration bound"
                );
                return Err(Error::IterationBoundExceeded {
                    max_iterations: self.max_iterations,
                });
            }
            iterations += 1;

            let state = graph.node_mut(node).search_state_mut();
            if state.visited {
                continue;
            }
            state.visited = true;

            if node == goal {
                return Ok(iterations);
            }

            for position in 0..graph.nodes()[node].outgoing().len() {
                let edge_index = graph.nodes()[node].outgoing()[position];
                let view = graph.edge_view(edge_index);
                let target = view.edge.target;
                let Some(traversal_cost) = self.traversal_cost(&view) else {
                    trace!(edge = view.edge.id, "edge rejected by scorer");
                    continue;
                };

                let candidate = cost + traversal_cost;
                let neighbour = graph.node_mut(target).search_state_mut();
                if !neighbour.visited && candidate < neighbour.cost_to_come {
                    neighbour.cost_to_come = candidate;
                    neighbour.traversal_cost = traversal_cost;
                    neighbour.parent_edge = Some(edge_index);
                    self.queue.push(candidate, target);
                }
            }
        }

        debug!(iterations, "route search exhausted the reachable graph");
        Err(Error::RouteNotFound {
            start: graph.nodes()[start].id,
            goal: graph.nodes()[goal].id,
        })
    }

    /// Cost of traversing an edge, or `None` if the edge may not be used.
    ///
    /// Fixed-cost edges, and every edge when no cost functions are configured,
    /// use their static cost; an unset (zero) static cost falls back to the
    /// edge's Euclidean length.
    fn traversal_cost(&self, view: &EdgeView<'_>) -> Option<f64> {
        let edge_cost = view.edge.cost;
        if !edge_cost.overridable || self.scorer.is_empty() {
            if edge_cost.cost == 0.0 {
                return Some(view.length());
            }
            return Some(edge_cost.cost);
        }
        self.scorer.score(view)
    }
}

/// Walk parent edges back from the goal and reverse them into a route.
fn reconstruct_route(graph: &Graph, start: NodeIndex, goal: NodeIndex) -> Route {
    let mut edges = Vec::new();
    let mut current = goal;
    while let Some(edge_index) = graph.nodes()[current].search_state().parent_edge {
        edges.push(edge_index);
        current = graph.edges()[edge_index].source;
    }
    edges.reverse();

    let mut nodes = Vec::with_capacity(edges.len() + 1);
    nodes.push(start);
    nodes.extend(edges.iter().map(|&edge| graph.edges()[edge].target));

    Route {
        start,
        goal,
        nodes,
        edges,
        cost: graph.nodes()[goal].search_state().cost_to_come,
    }
}
