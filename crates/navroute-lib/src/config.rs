//! Planner configuration.
//!
//! Configuration is read from a JSON document and may be adjusted through
//! environment variables:
//!
//! - `NAVROUTE_MAX_ITERATIONS`: overrides `max_iterations` (0 = unbounded)

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::scorer::EdgeCostFunction;

/// Environment variable overriding [`PlannerConfig::max_iterations`].
pub const MAX_ITERATIONS_ENV: &str = "NAVROUTE_MAX_ITERATIONS";

/// Settings supplied to a [`crate::RoutePlanner`] before searches begin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Maximum number of queue pops per search. Zero disables the bound;
    /// real-time callers should always set one.
    pub max_iterations: u32,
    /// Cost functions evaluated, in order, for every candidate edge.
    pub scorers: Vec<EdgeCostFunction>,
}

impl PlannerConfig {
    /// Load configuration from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        debug!(
            path = %path.display(),
            max_iterations = config.max_iterations,
            scorers = config.scorers.len(),
            "loaded planner configuration"
        );
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        let value = std::env::var(MAX_ITERATIONS_ENV).ok();
        self.with_max_iterations_override(value.as_deref())
    }

    fn with_max_iterations_override(mut self, value: Option<&str>) -> Result<Self> {
        if let Some(raw) = value {
            self.max_iterations = raw.trim().parse().map_err(|_| Error::InvalidConfig {
                message: format!("{MAX_ITERATIONS_ENV} must be a non-negative integer, got '{raw}'"),
            })?;
        }
        Ok(self)
    }

    /// Validate every configured cost function.
    pub fn validate(&self) -> Result<()> {
        for scorer in &self.scorers {
            scorer.validate()?;
        }
        Ok(())
    }

    /// Whether searches run without an iteration bound.
    pub fn is_unbounded(&self) -> bool {
        self.max_iterations == 0
    }
}
