//! Implementation of the `gradebook-auth init` command.

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::output::{output, CommandOutput};
use crate::infrastructure::setup::write_default_config;

/// Result of `init`
#[derive(Debug, Serialize)]
pub struct InitOutput {
    /// Always true; failures are returned as errors
    pub success: bool,
    /// Status line
    pub message: String,
    /// File that was written
    pub config_path: PathBuf,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        format!("{}\n  {}", self.message, self.config_path.display())
    }
}

/// Write the default config into the current directory
pub fn execute(force: bool, json_mode: bool) -> Result<()> {
    let root = std::env::current_dir().context("Failed to get current directory")?;
    let config_path = init_config(&root, force)?;

    let output_data = InitOutput {
        success: true,
        message: "Wrote default configuration.".to_string(),
        config_path,
    };
    output(&output_data, json_mode);
    Ok(())
}

fn init_config(root: &Path, force: bool) -> Result<PathBuf> {
    write_default_config(root, force)?.ok_or_else(|| {
        anyhow!("Configuration already exists. Use --force to overwrite.")
    })
}
