use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Galactic position of a star in spherical coordinates.
///
/// `radial_distance` is measured in parsecs from the galactic centre, while
/// `longitude` (rotation around the north/south axis) and `latitude`
/// (rotation relative to the galactic plane) are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub radial_distance: f64,
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub fn new(radial_distance: f64, longitude: f64, latitude: f64) -> Self {
        Self {
            radial_distance,
            longitude,
            latitude,
        }
    }

    /// Convert to Cartesian `[x, y, z]` in parsecs.
    pub fn to_cartesian(&self) -> [f64; 3] {
        let r = self.radial_distance;
        let theta = self.longitude.to_radians();
        let phi = self.latitude.to_radians();
        [
            r * phi.cos() * theta.cos(),
            r * phi.cos() * theta.sin(),
            r * phi.sin(),
        ]
    }

    /// Calculate the Euclidean distance to another coordinate in parsecs.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let [x1, y1, z1] = self.to_cartesian();
        let [x2, y2, z2] = other.to_cartesian();
        let dx = x1 - x2;
        let dy = y1 - y2;
        let dz = z1 - z2;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Distance between two possibly-absent coordinates.
///
/// # Errors
///
/// Returns [`Error::MissingCoordinate`] when either side is `None`.
pub fn distance(a: Option<&Coordinate>, b: Option<&Coordinate>) -> Result<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Ok(a.distance_to(b)),
        _ => Err(Error::MissingCoordinate),
    }
}
