//! Output formatting for star systems and listings.
//!
//! Renderers build a `String` so callers decide where it goes and tests can
//! inspect the exact text.

use std::fmt::Write;

use galaxy_forge_lib::{Body, LoadSummary, Star};

use crate::terminal::{format_with_separators, ColorPalette};

/// Render one star with its sister, goldilocks zone and planet table.
///
/// `bodies` is the index entry for the star: the star itself followed by its
/// planets in orbital order.
pub fn render_star_detail(
    bodies: &[Body],
    sister: Option<&Star>,
    palette: &ColorPalette,
) -> String {
    let mut out = String::new();
    let Some(star) = bodies.first().and_then(Body::as_star) else {
        return out;
    };
    let p = palette;

    let _ = writeln!(
        out,
        "{}{}{} {}{}{}",
        p.white_bold,
        star.designation(),
        p.reset,
        p.star_type(star.star_type()),
        star.spectral_class(),
        p.reset
    );
    if !star.name().is_empty() {
        let _ = writeln!(out, "  Name:           {}", star.name());
    }
    let _ = writeln!(
        out,
        "  Type:           {} ({})",
        star.star_type(),
        star.star_type().description()
    );
    let _ = writeln!(
        out,
        "  Luminosity:     {} ({})",
        star.luminosity(),
        star.luminosity().label()
    );
    let _ = writeln!(out, "  Abs. magnitude: {:.2}", star.absolute_magnitude());
    let coordinate = star.coordinate();
    let _ = writeln!(
        out,
        "  Position:       {}{:.3} pc{} at l={:.3}, b={:.3}",
        p.cyan, coordinate.radial_distance, p.reset, coordinate.longitude, coordinate.latitude
    );
    let _ = writeln!(
        out,
        "  Goldilocks:     {:.4} - {:.4} AU",
        star.goldilocks_zone_start(),
        star.goldilocks_zone_end()
    );
    match sister {
        Some(sister) => {
            let _ = writeln!(
                out,
                "  Sister:         {} ({}{:.3} pc{})",
                sister.designation(),
                p.cyan,
                star.distance_to(sister),
                p.reset
            );
        }
        None => {
            let _ = writeln!(out, "  Sister:         none");
        }
    }

    let planets: Vec<_> = bodies.iter().filter_map(Body::as_planet).collect();
    let _ = writeln!(out);
    if planets.is_empty() {
        let _ = writeln!(out, "No planets.");
        return out;
    }

    let _ = writeln!(out, "Planets ({}):", planets.len());
    let _ = writeln!(
        out,
        "{}  {:<20} {:<4} {:>9} {:>7} {:>7}  {}{}",
        p.gray, "Designation", "Type", "AU", "Tilt", "Ecc", "Habitability", p.reset
    );
    for planet in planets {
        let planet_type = planet.planet_type();
        let tier = planet_type.habitability();
        let _ = writeln!(
            out,
            "  {:<20} {:<4} {:>9.3} {:>7.2} {:>7.2}  {}{}{} ({})",
            planet.designation(),
            planet_type.code(),
            planet.average_distance_to_star(),
            planet.tilt(),
            planet.eccentricity(),
            p.habitability(tier),
            tier.label(),
            p.reset,
            planet_type.nickname()
        );
    }
    out
}

/// Render admitted stars, one per line, in the order given.
pub fn render_star_list<'a, I>(stars: I, palette: &ColorPalette) -> String
where
    I: IntoIterator<Item = (&'a Star, Option<&'a Star>)>,
{
    let p = palette;
    let mut out = String::new();
    let mut count = 0u64;
    for (star, sister) in stars {
        count += 1;
        let _ = write!(
            out,
            "{}{:<20}{} {}{:<8}{} {:>12.3} pc",
            p.white_bold,
            star.designation(),
            p.reset,
            p.star_type(star.star_type()),
            star.spectral_class(),
            p.reset,
            star.coordinate().radial_distance
        );
        if let Some(sister) = sister {
            let _ = write!(out, "  {}binary with {}{}", p.gray, sister.designation(), p.reset);
        }
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "{} star(s)", format_with_separators(count));
    out
}

/// One-line summary of a catalog load.
pub fn render_load_summary(summary: &LoadSummary) -> String {
    format!(
        "Admitted {} of {} stars ({} rejected, {} binary pairs)",
        format_with_separators(summary.admitted as u64),
        format_with_separators(summary.offered as u64),
        format_with_separators(summary.rejected as u64),
        format_with_separators(summary.paired as u64)
    )
}
