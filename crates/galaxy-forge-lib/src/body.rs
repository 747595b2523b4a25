//! Celestial bodies: stars, planets, and the closed [`Body`] variant over both.
//!
//! Identity is the designation. Two stars, two planets, or two bodies compare
//! equal exactly when their designations match (case-sensitive), regardless of
//! any other field.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::coordinate::Coordinate;
use crate::types::{LuminosityClass, PlanetType, StarType};

/// Absolute bolometric magnitude of the Sun, used to turn magnitudes into luminosity.
const SOLAR_BOLOMETRIC_MAGNITUDE: f64 = 4.72;
/// Stellar flux (relative to Earth) at the inner edge of the goldilocks zone.
const GOLDILOCKS_INNER_FLUX: f64 = 1.1;
/// Stellar flux (relative to Earth) at the outer edge of the goldilocks zone.
const GOLDILOCKS_OUTER_FLUX: f64 = 0.53;
/// Divisor applied to both zone edges.
const GOLDILOCKS_SCALE: f64 = 100.0;

/// A star as recorded in the galactic catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Star {
    designation: String,
    name: String,
    star_type: StarType,
    temperature_sequence: i32,
    luminosity: LuminosityClass,
    absolute_magnitude: f32,
    coordinate: Coordinate,
    goldilocks_zone_start: f64,
    goldilocks_zone_end: f64,
}

impl Star {
    /// Create a star and derive its goldilocks zone from magnitude and class.
    pub fn new(
        designation: impl Into<String>,
        name: impl Into<String>,
        star_type: StarType,
        temperature_sequence: i32,
        luminosity: LuminosityClass,
        absolute_magnitude: f32,
        coordinate: Coordinate,
    ) -> Self {
        let (goldilocks_zone_start, goldilocks_zone_end) =
            goldilocks_zone(star_type, absolute_magnitude);
        Self {
            designation: designation.into(),
            name: name.into(),
            star_type,
            temperature_sequence,
            luminosity,
            absolute_magnitude,
            coordinate,
            goldilocks_zone_start,
            goldilocks_zone_end,
        }
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn star_type(&self) -> StarType {
        self.star_type
    }

    pub fn temperature_sequence(&self) -> i32 {
        self.temperature_sequence
    }

    pub fn luminosity(&self) -> LuminosityClass {
        self.luminosity
    }

    pub fn absolute_magnitude(&self) -> f32 {
        self.absolute_magnitude
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    /// Inner edge of the goldilocks zone in AU.
    pub fn goldilocks_zone_start(&self) -> f64 {
        self.goldilocks_zone_start
    }

    /// Outer edge of the goldilocks zone in AU.
    pub fn goldilocks_zone_end(&self) -> f64 {
        self.goldilocks_zone_end
    }

    /// Spectral label such as `G2 V`.
    pub fn spectral_class(&self) -> String {
        format!(
            "{}{} {}",
            self.star_type, self.temperature_sequence, self.luminosity
        )
    }

    /// Distance to another star in parsecs.
    pub fn distance_to(&self, other: &Star) -> f64 {
        self.coordinate.distance_to(&other.coordinate)
    }
}

impl PartialEq for Star {
    fn eq(&self, other: &Self) -> bool {
        self.designation == other.designation
    }
}

impl Eq for Star {}

impl Hash for Star {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.designation.hash(state);
    }
}

fn goldilocks_zone(star_type: StarType, absolute_magnitude: f32) -> (f64, f64) {
    let bolometric = f64::from(absolute_magnitude) + star_type.bolometric_correction();
    let luminosity = 10f64.powf((bolometric - SOLAR_BOLOMETRIC_MAGNITUDE) / -2.5);
    (
        (luminosity / GOLDILOCKS_INNER_FLUX).sqrt() / GOLDILOCKS_SCALE,
        (luminosity / GOLDILOCKS_OUTER_FLUX).sqrt() / GOLDILOCKS_SCALE,
    )
}

/// A planet orbiting a catalogued star.
///
/// The owning star is referenced by designation; the planet carries a copy of
/// the star's coordinate since planets have no position of their own.
#[derive(Debug, Clone, Serialize)]
pub struct Planet {
    designation: String,
    name: String,
    planet_type: PlanetType,
    star_designation: String,
    coordinate: Coordinate,
    average_distance_to_star: f64,
    tilt: f64,
    eccentricity: f64,
}

impl Planet {
    pub fn new(
        designation: impl Into<String>,
        planet_type: PlanetType,
        star: &Star,
        average_distance_to_star: f64,
        tilt: f64,
        eccentricity: f64,
    ) -> Self {
        Self {
            designation: designation.into(),
            name: String::new(),
            planet_type,
            star_designation: star.designation.clone(),
            coordinate: star.coordinate,
            average_distance_to_star,
            tilt,
            eccentricity,
        }
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn planet_type(&self) -> PlanetType {
        self.planet_type
    }

    /// Designation of the star this planet orbits.
    pub fn star_designation(&self) -> &str {
        &self.star_designation
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    /// Mean orbital distance in AU.
    pub fn average_distance_to_star(&self) -> f64 {
        self.average_distance_to_star
    }

    /// Inclination relative to the system plane, in degrees.
    pub fn tilt(&self) -> f64 {
        self.tilt
    }

    /// Orbital eccentricity, in degrees.
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }
}

impl PartialEq for Planet {
    fn eq(&self, other: &Self) -> bool {
        self.designation == other.designation
    }
}

impl Eq for Planet {}

impl Hash for Planet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.designation.hash(state);
    }
}

/// Either kind of celestial body, as stored in a star's body list.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Body {
    Star(Star),
    Planet(Planet),
}

impl Body {
    pub fn designation(&self) -> &str {
        match self {
            Body::Star(star) => star.designation(),
            Body::Planet(planet) => planet.designation(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Body::Star(star) => star.name(),
            Body::Planet(planet) => planet.name(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Body::Star(star) => star.set_name(name),
            Body::Planet(planet) => planet.set_name(name),
        }
    }

    pub fn coordinate(&self) -> &Coordinate {
        match self {
            Body::Star(star) => star.coordinate(),
            Body::Planet(planet) => planet.coordinate(),
        }
    }

    /// Distance between the positions of two bodies, in parsecs.
    pub fn distance_to(&self, other: &Body) -> f64 {
        self.coordinate().distance_to(other.coordinate())
    }

    pub fn as_star(&self) -> Option<&Star> {
        match self {
            Body::Star(star) => Some(star),
            Body::Planet(_) => None,
        }
    }

    pub fn as_planet(&self) -> Option<&Planet> {
        match self {
            Body::Planet(planet) => Some(planet),
            Body::Star(_) => None,
        }
    }
}

impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        self.designation() == other.designation()
    }
}

impl Eq for Body {}

impl Hash for Body {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.designation().hash(state);
    }
}

impl From<Star> for Body {
    fn from(star: Star) -> Self {
        Body::Star(star)
    }
}

impl From<Planet> for Body {
    fn from(planet: Planet) -> Self {
        Body::Planet(planet)
    }
}
