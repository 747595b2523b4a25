// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs parses arguments and dispatches.

pub mod list;
pub mod star;
pub mod stats;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use galaxy_forge_lib::{resolve_data_path, Galaxy};

/// Resolve the catalog location and admit every star it lists.
pub fn load_galaxy(target: Option<&Path>) -> Result<Galaxy> {
    let path = resolve_data_path(target).context("failed to locate the star catalog")?;
    let galaxy = Galaxy::load(&path)
        .with_context(|| format!("failed to load star catalog from {}", path.display()))?;
    let summary = galaxy.load_summary();
    info!(
        path = %path.display(),
        admitted = summary.admitted,
        rejected = summary.rejected,
        "loaded galaxy"
    );
    Ok(galaxy)
}
