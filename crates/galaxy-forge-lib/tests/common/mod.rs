//! Common test utilities and fixture helpers.
//!
//! This module provides shared test infrastructure for integration tests,
//! including fixture paths and terse star construction.

use std::path::PathBuf;

use galaxy_forge_lib::{Coordinate, LuminosityClass, Star, StarType};

/// Path to fixtures directory used by tests (star catalog, etc.)
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the checked-in star catalog fixture.
#[allow(dead_code)]
pub fn fixture_catalog_path() -> PathBuf {
    fixtures_dir().join("stars.csv")
}

/// Main-sequence star of the given class placed on the galactic plane.
#[allow(dead_code)]
pub fn star(designation: &str, star_type: StarType, radial_distance: f64) -> Star {
    star_at(
        designation,
        star_type,
        Coordinate::new(radial_distance, 0.0, 0.0),
    )
}

/// Main-sequence star of the given class at an explicit coordinate.
#[allow(dead_code)]
pub fn star_at(designation: &str, star_type: StarType, coordinate: Coordinate) -> Star {
    Star::new(
        designation,
        "",
        star_type,
        5,
        LuminosityClass::MainSequence,
        5.0,
        coordinate,
    )
}
