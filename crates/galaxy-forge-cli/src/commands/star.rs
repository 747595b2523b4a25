//! Star command handler for a single system.

use anyhow::Result;

use galaxy_forge_cli::output::render_star_detail;
use galaxy_forge_cli::terminal::ColorPalette;
use galaxy_forge_lib::Galaxy;

/// Print one star, its sister and its generated planets.
///
/// Unknown designations fail with "Did you mean" suggestions.
pub fn handle_star(mut galaxy: Galaxy, designation: &str, palette: &ColorPalette) -> Result<()> {
    let sister = galaxy.registry().sister_of(designation).cloned();
    let bodies = galaxy.bodies_of(designation)?;
    print!("{}", render_star_detail(bodies, sister.as_ref(), palette));
    Ok(())
}
