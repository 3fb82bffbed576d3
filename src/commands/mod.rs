//! Command runners, one per subcommand

mod expand;
mod generate;
mod resolve;

use std::path::Path;

use anyhow::{Context, Result};

use layergen::config::Config;

pub use expand::cmd_expand;
pub use generate::{cmd_generate, GenerateArgs};
pub use resolve::cmd_resolve;

/// Resolve the configuration for the current directory and report
/// unknown keys as warnings
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let project_root = std::env::current_dir().context("failed to read current directory")?;
    let (config, warnings) = Config::resolve(explicit, &project_root)?;
    for warning in &warnings {
        tracing::warn!("{warning}");
    }
    Ok(config)
}
