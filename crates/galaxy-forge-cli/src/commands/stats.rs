//! Stats command handler.

use anyhow::{Context, Result};
use tracing::info;

use galaxy_forge_cli::output::render_load_summary;
use galaxy_forge_lib::Galaxy;

/// Print galaxy statistics, pruning barren stars unless `keep_barren` is set.
pub fn handle_stats(mut galaxy: Galaxy, json: bool, keep_barren: bool) -> Result<()> {
    if !keep_barren {
        let removed = galaxy.prune_barren();
        info!(removed = removed.len(), "removed barren stars");
    }

    let stats = galaxy.statistics();
    if json {
        let rendered =
            serde_json::to_string_pretty(&stats).context("failed to serialize statistics")?;
        println!("{rendered}");
    } else {
        println!("{}", render_load_summary(&galaxy.load_summary()));
        println!();
        print!("{}", stats.render());
    }
    Ok(())
}
