//! navroute library entry points.
//!
//! Navigation graphs with JSON loading, and an iteration-bounded Dijkstra
//! planner whose edge costs come from a configurable set of cost functions.
//! The `navroute` CLI is a thin wrapper over the re-exports below.

#![deny(warnings)]

pub mod config;
pub mod error;
pub mod graph;
pub mod graph_file;
pub mod queue;
pub mod routing;
pub mod scorer;

pub use config::{PlannerConfig, MAX_ITERATIONS_ENV};
pub use error::{Error, Result};
pub use graph::{
    Coordinates, Edge, EdgeCost, EdgeId, EdgeIndex, EdgeView, Graph, Metadata, Node, NodeId,
    NodeIndex, SearchState,
};
pub use graph_file::{load_graph, parse_graph, GraphDocument};
pub use queue::{NodeElement, NodeQueue};
pub use routing::{Route, RoutePlanner, RouteSummary};
pub use scorer::{EdgeCostFunction, EdgeScorer};
