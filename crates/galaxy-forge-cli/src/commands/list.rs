//! List command handler.

use anyhow::{Context, Result};

use galaxy_forge_cli::output::render_star_list;
use galaxy_forge_cli::terminal::ColorPalette;
use galaxy_forge_lib::{Galaxy, StarType};

/// List admitted stars by designation, optionally restricted to one class.
pub fn handle_list(
    galaxy: &Galaxy,
    star_type: Option<&str>,
    palette: &ColorPalette,
) -> Result<()> {
    let registry = galaxy.registry();
    let stars = match star_type {
        Some(code) => {
            let star_type: StarType = code
                .parse()
                .with_context(|| format!("invalid --type value '{code}'"))?;
            registry.all_of_type(star_type)
        }
        None => registry.all().collect(),
    };

    let rows = stars
        .into_iter()
        .map(|star| (star, registry.sister_of(star.designation())));
    print!("{}", render_star_list(rows, palette));
    Ok(())
}
