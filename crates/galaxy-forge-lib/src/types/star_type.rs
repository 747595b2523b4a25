//! Star classes and their planet-generation parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Per-class constants driving planet generation and goldilocks zones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarTypeParameters {
    /// Base number of planets orbiting a star of this class.
    pub number_of_planets: i32,
    /// Maximum deviation (±) from the base planet count.
    pub variation_of_planets: i32,
    /// Orbital distance of the innermost planet (AU).
    pub min_distance_of_planets: f64,
    /// Orbital distance of the outermost planet (AU).
    pub max_distance_of_planets: f64,
    /// Probability in `[0, 1]` used for every habitability roll.
    pub chance_of_habitable: f64,
    /// Bolometric correction applied to the absolute magnitude.
    pub bolometric_correction: f64,
}

/// Closed set of star classes understood by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StarType {
    /// Wolf-Rayet star.
    W,
    O,
    B,
    A,
    F,
    G,
    K,
    M,
    /// White dwarf.
    D,
    /// Carbon star.
    C,
    /// S-type giant.
    S,
}

impl StarType {
    /// Every star class, in table order.
    pub const ALL: [StarType; 11] = [
        StarType::W,
        StarType::O,
        StarType::B,
        StarType::A,
        StarType::F,
        StarType::G,
        StarType::K,
        StarType::M,
        StarType::D,
        StarType::C,
        StarType::S,
    ];

    /// Canonical single-letter code.
    pub fn code(self) -> &'static str {
        match self {
            StarType::W => "W",
            StarType::O => "O",
            StarType::B => "B",
            StarType::A => "A",
            StarType::F => "F",
            StarType::G => "G",
            StarType::K => "K",
            StarType::M => "M",
            StarType::D => "D",
            StarType::C => "C",
            StarType::S => "S",
        }
    }

    /// Short human-readable description of the class.
    pub fn description(self) -> &'static str {
        match self {
            StarType::W => "Wolf-Rayet star",
            StarType::O => "Blue star",
            StarType::B => "Blue-white star",
            StarType::A => "White star",
            StarType::F => "Yellow-white star",
            StarType::G => "Yellow star",
            StarType::K => "Orange star",
            StarType::M => "Red star",
            StarType::D => "White dwarf",
            StarType::C => "Carbon star",
            StarType::S => "S-type giant",
        }
    }

    pub fn parameters(self) -> StarTypeParameters {
        let (planets, variation, min, max, habitable, bc) = match self {
            StarType::W => (0, 1, 1.0, 100.0, 0.0, -256.0),
            StarType::O => (1, 1, 0.8, 80.0, 0.0, -16.0),
            StarType::B => (2, 2, 0.5, 60.0, 0.01, -4.0),
            StarType::A => (4, 2, 0.3, 40.0, 0.05, -0.3),
            StarType::F => (6, 3, 0.2, 20.0, 0.15, 0.0),
            StarType::G => (8, 3, 0.2, 40.0, 0.3, -0.15),
            StarType::K => (6, 3, 0.1, 3.2, 0.25, -0.4),
            StarType::M => (4, 2, 0.02, 1.6, 0.1, -2.0),
            StarType::D => (1, 1, 0.01, 2.0, 0.01, -4.0),
            StarType::C => (2, 2, 1.0, 50.0, 0.0, -16.0),
            StarType::S => (2, 2, 1.0, 50.0, 0.0, -256.0),
        };
        StarTypeParameters {
            number_of_planets: planets,
            variation_of_planets: variation,
            min_distance_of_planets: min,
            max_distance_of_planets: max,
            chance_of_habitable: habitable,
            bolometric_correction: bc,
        }
    }

    pub fn number_of_planets(self) -> i32 {
        self.parameters().number_of_planets
    }

    pub fn variation_of_planets(self) -> i32 {
        self.parameters().variation_of_planets
    }

    pub fn min_distance_of_planets(self) -> f64 {
        self.parameters().min_distance_of_planets
    }

    pub fn max_distance_of_planets(self) -> f64 {
        self.parameters().max_distance_of_planets
    }

    pub fn chance_of_habitable(self) -> f64 {
        self.parameters().chance_of_habitable
    }

    pub fn bolometric_correction(self) -> f64 {
        self.parameters().bolometric_correction
    }
}

impl fmt::Display for StarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for StarType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let code = s.trim();
        StarType::ALL
            .into_iter()
            .find(|candidate| candidate.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| Error::UnknownStarType {
                code: code.to_string(),
            })
    }
}
