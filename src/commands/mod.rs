//! Command handlers

pub mod steps;
pub mod tasks;

use std::path::Path;

use anyhow::Result;

use cosmo::config::{self, LoadedConfig};
use cosmo::presentation::OutputFormat;

/// Load the configuration and surface its warnings on stderr.
pub(crate) fn load_config(explicit: Option<&Path>, format: OutputFormat) -> Result<LoadedConfig> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load(explicit, &cwd)?;

    if !format.is_json() {
        for warning in &loaded.warnings {
            eprintln!("[WARN] {}", warning);
        }
    }

    Ok(loaded)
}
