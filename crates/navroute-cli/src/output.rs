//! Output formatting for command results.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use navroute_lib::{Graph, RouteSummary};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Render a route summary in the requested format.
pub fn render_route(summary: &RouteSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", format_route_text(summary)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
    }
    Ok(())
}

/// Human-friendly route view.
pub fn format_route_text(summary: &RouteSummary) -> String {
    let mut out = format!(
        "Route from {} to {} ({} hops):\n",
        summary.start, summary.goal, summary.hops
    );
    let nodes = join(&summary.nodes, " -> ");
    out.push_str(&format!("  nodes: {nodes}\n"));
    if !summary.edges.is_empty() {
        out.push_str(&format!("  edges: {}\n", join(&summary.edges, ", ")));
    }
    out.push_str(&format!("Total cost: {:.2}\n", summary.cost));
    out
}

fn join(ids: &[u32], separator: &str) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Size summary of a graph file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphInspection {
    pub nodes: usize,
    pub edges: usize,
    /// Nodes without outgoing edges.
    pub dead_ends: usize,
}

impl GraphInspection {
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            dead_ends: graph
                .nodes()
                .iter()
                .filter(|node| node.outgoing().is_empty())
                .count(),
        }
    }
}

/// Render a graph inspection in the requested format.
pub fn render_inspection(inspection: &GraphInspection, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!(
            "Graph: {} nodes, {} edges, {} dead ends",
            inspection.nodes, inspection.edges, inspection.dead_ends
        ),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(inspection)?),
    }
    Ok(())
}
