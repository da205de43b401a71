//! Seed plan loading
//!
//! Seeds are authored as JSON documents in the `PlanConfig` shape and turned
//! into a runnable [`Plan`] here.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

use cashplan_core::Plan;
use cashplan_core::config::PlanConfig;

/// Load a seed plan from a JSON document on disk.
pub fn load_plan(path: &Path) -> Result<Plan> {
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read seed plan {}", path.display()))?;
    parse_plan(&raw).wrap_err_with(|| format!("invalid seed plan {}", path.display()))
}

/// Parse a seed plan from JSON text.
pub fn parse_plan(raw: &str) -> Result<Plan> {
    let config: PlanConfig = serde_json::from_str(raw)?;
    tracing::debug!(
        years = config.years.len(),
        current_year = config.current_year,
        "parsed seed plan"
    );
    Ok(config.into_plan())
}
