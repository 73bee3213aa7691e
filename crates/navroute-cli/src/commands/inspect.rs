//! Inspect command handler for summarising graph files.

use std::path::Path;

use anyhow::{Context, Result};

use navroute_lib::load_graph;

use navroute_cli::output::{render_inspection, GraphInspection, OutputFormat};

/// Handle the inspect subcommand.
pub fn handle_inspect_command(graph_path: &Path, format: OutputFormat) -> Result<()> {
    let graph = load_graph(graph_path)
        .with_context(|| format!("failed to load graph from {}", graph_path.display()))?;
    let inspection = GraphInspection::from_graph(&graph);
    render_inspection(&inspection, format)
}
