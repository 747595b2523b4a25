// Test-only helpers for `galaxy-forge-lib` tests
#![allow(dead_code)]
use crate::body::Star;
use crate::coordinate::Coordinate;
use crate::types::{LuminosityClass, StarType};

/// Builder to create `Star` instances in tests with sensible defaults.
///
/// Defaults describe a sun-like G2 V star 100 parsecs out on the galactic
/// plane at longitude zero.
pub struct StarBuilder {
    designation: String,
    name: String,
    star_type: StarType,
    temperature_sequence: i32,
    luminosity: LuminosityClass,
    absolute_magnitude: f32,
    coordinate: Coordinate,
}

impl StarBuilder {
    #[must_use]
    pub fn new(designation: &str) -> Self {
        Self {
            designation: designation.to_string(),
            name: String::new(),
            star_type: StarType::G,
            temperature_sequence: 2,
            luminosity: LuminosityClass::MainSequence,
            absolute_magnitude: 4.83,
            coordinate: Coordinate::new(100.0, 0.0, 0.0),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn star_type(mut self, star_type: StarType) -> Self {
        self.star_type = star_type;
        self
    }

    pub fn temperature_sequence(mut self, sequence: i32) -> Self {
        self.temperature_sequence = sequence;
        self
    }

    pub fn luminosity(mut self, luminosity: LuminosityClass) -> Self {
        self.luminosity = luminosity;
        self
    }

    pub fn magnitude(mut self, magnitude: f32) -> Self {
        self.absolute_magnitude = magnitude;
        self
    }

    pub fn radial(mut self, radial_distance: f64) -> Self {
        self.coordinate.radial_distance = radial_distance;
        self
    }

    pub fn at(mut self, radial_distance: f64, longitude: f64, latitude: f64) -> Self {
        self.coordinate = Coordinate::new(radial_distance, longitude, latitude);
        self
    }

    pub fn build(self) -> Star {
        Star::new(
            self.designation,
            self.name,
            self.star_type,
            self.temperature_sequence,
            self.luminosity,
            self.absolute_magnitude,
            self.coordinate,
        )
    }
}
