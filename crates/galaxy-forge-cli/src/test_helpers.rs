// Test utilities used across `galaxy-forge-cli` tests.
// Kept under `#[cfg(test)]` so it is not part of the public crate API.
use galaxy_forge_lib::{Coordinate, LuminosityClass, Star, StarType};

/// A G2 V star on the galactic plane at `radial_distance` parsecs.
pub fn sample_star(designation: &str, radial_distance: f64) -> Star {
    Star::new(
        designation,
        "",
        StarType::G,
        2,
        LuminosityClass::MainSequence,
        4.83,
        Coordinate::new(radial_distance, 0.0, 0.0),
    )
}
