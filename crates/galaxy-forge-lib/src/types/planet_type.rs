//! Planet classes and their habitability tiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How suitable a planet class is for human settlement, worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Habitability {
    No,
    Biosphere,
    Terraforming,
    Marginally,
    Yes,
}

impl Habitability {
    pub const ALL: [Habitability; 5] = [
        Habitability::No,
        Habitability::Biosphere,
        Habitability::Terraforming,
        Habitability::Marginally,
        Habitability::Yes,
    ];

    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            Habitability::No => "uninhabitable",
            Habitability::Biosphere => "biosphere",
            Habitability::Terraforming => "terraforming",
            Habitability::Marginally => "marginal",
            Habitability::Yes => "habitable",
        }
    }
}

impl fmt::Display for Habitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed set of planet classes produced by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlanetType {
    D,
    H,
    J,
    K,
    L,
    M,
    N,
    R,
    T,
    Y,
}

impl PlanetType {
    pub const ALL: [PlanetType; 10] = [
        PlanetType::D,
        PlanetType::H,
        PlanetType::J,
        PlanetType::K,
        PlanetType::L,
        PlanetType::M,
        PlanetType::N,
        PlanetType::R,
        PlanetType::T,
        PlanetType::Y,
    ];

    pub fn code(self) -> &'static str {
        match self {
            PlanetType::D => "D",
            PlanetType::H => "H",
            PlanetType::J => "J",
            PlanetType::K => "K",
            PlanetType::L => "L",
            PlanetType::M => "M",
            PlanetType::N => "N",
            PlanetType::R => "R",
            PlanetType::T => "T",
            PlanetType::Y => "Y",
        }
    }

    /// Popular nickname for the class, empty when it has none.
    pub fn nickname(self) -> &'static str {
        match self {
            PlanetType::D => "Moon",
            PlanetType::M => "Gaia",
            PlanetType::Y => "Demon",
            _ => "",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PlanetType::D => {
                "An uninhabitable planetoid, moon, or small planet with little to no atmosphere"
            }
            PlanetType::H => {
                "Generally uninhabitable for humans due to gravity or climate, might suit other species"
            }
            PlanetType::J => "Gas giant with no nuclear fusion",
            PlanetType::K => "Adaptable for humans by use of artificial biospheres",
            PlanetType::L => "Marginally habitable, with vegetation but usually no animal life",
            PlanetType::M => {
                "Earth-like, with an oxygen atmosphere; largely habitable for humanoid life"
            }
            PlanetType::N => "Moon or small planet with atmosphere but very low temperatures",
            PlanetType::R => "Moon orbiting within the heavy radiation of a gas giant",
            PlanetType::T => "Gas giant with some nuclear fusion at its core",
            PlanetType::Y => {
                "Toxic atmosphere and surface temperatures above 500 Kelvin, prone to thermal discharges"
            }
        }
    }

    pub fn habitability(self) -> Habitability {
        match self {
            PlanetType::D => Habitability::Terraforming,
            PlanetType::H | PlanetType::L => Habitability::Marginally,
            PlanetType::K | PlanetType::N => Habitability::Biosphere,
            PlanetType::M => Habitability::Yes,
            PlanetType::J | PlanetType::R | PlanetType::T | PlanetType::Y => Habitability::No,
        }
    }

    /// Classes counted as habitable in galaxy statistics (M, H, K, L).
    pub fn is_habitable(self) -> bool {
        matches!(
            self,
            PlanetType::M | PlanetType::H | PlanetType::K | PlanetType::L
        )
    }

    pub fn is_gas_giant(self) -> bool {
        matches!(self, PlanetType::J | PlanetType::T)
    }

    /// Classes that on their own make a star not worth keeping (R, T, Y).
    pub fn is_barren(self) -> bool {
        matches!(self, PlanetType::R | PlanetType::T | PlanetType::Y)
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PlanetType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let code = s.trim();
        PlanetType::ALL
            .into_iter()
            .find(|candidate| candidate.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| Error::UnknownPlanetType {
                code: code.to_string(),
            })
    }
}
