//! Route command handler for computing paths between graph nodes.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use navroute_lib::{load_graph, NodeId, PlannerConfig, RoutePlanner};

use navroute_cli::output::{render_route, OutputFormat};

/// Arguments for the route command.
#[derive(Args, Debug, Clone)]
pub struct RouteCommandArgs {
    /// Path to the JSON graph document.
    #[arg(long)]
    pub graph: PathBuf,
    /// Path to a JSON planner configuration (iteration bound and scorers).
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Starting node id.
    #[arg(long = "from")]
    pub from: NodeId,
    /// Destination node id.
    #[arg(long = "to")]
    pub to: NodeId,
    /// Maximum search iterations; overrides the configuration file and
    /// NAVROUTE_MAX_ITERATIONS. Zero disables the bound.
    #[arg(long)]
    pub max_iterations: Option<u32>,
}

impl RouteCommandArgs {
    /// Resolve the planner configuration from file, environment, and flags,
    /// in increasing order of precedence.
    pub fn planner_config(&self) -> Result<PlannerConfig> {
        let config = match &self.config {
            Some(path) => PlannerConfig::from_path(path).with_context(|| {
                format!("failed to load planner configuration from {}", path.display())
            })?,
            None => PlannerConfig::default(),
        };
        let mut config = config.with_env_overrides()?;
        if let Some(limit) = self.max_iterations {
            config.max_iterations = limit;
        }
        Ok(config)
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(args: &RouteCommandArgs, format: OutputFormat) -> Result<()> {
    let mut graph = load_graph(&args.graph)
        .with_context(|| format!("failed to load graph from {}", args.graph.display()))?;
    let config = args.planner_config()?;
    debug!(
        max_iterations = config.max_iterations,
        scorers = config.scorers.len(),
        "planner configured"
    );
    let mut planner = RoutePlanner::new(&config)?;

    let start = graph.require_index(args.from)?;
    let goal = graph.require_index(args.to)?;
    let route = planner.find_route(&mut graph, start, goal)?;

    render_route(&route.summarize(&graph), format)
}
