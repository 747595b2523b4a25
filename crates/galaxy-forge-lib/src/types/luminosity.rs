use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Yerkes luminosity class of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LuminosityClass {
    Hypergiant,
    LuminousSupergiant,
    Supergiant,
    BrightGiant,
    Giant,
    Subgiant,
    MainSequence,
    Subdwarf,
    WhiteDwarf,
}

impl LuminosityClass {
    pub const ALL: [LuminosityClass; 9] = [
        LuminosityClass::Hypergiant,
        LuminosityClass::LuminousSupergiant,
        LuminosityClass::Supergiant,
        LuminosityClass::BrightGiant,
        LuminosityClass::Giant,
        LuminosityClass::Subgiant,
        LuminosityClass::MainSequence,
        LuminosityClass::Subdwarf,
        LuminosityClass::WhiteDwarf,
    ];

    /// Roman-numeral code as written in star catalogs.
    pub fn code(self) -> &'static str {
        match self {
            LuminosityClass::Hypergiant => "0",
            LuminosityClass::LuminousSupergiant => "Ia",
            LuminosityClass::Supergiant => "Ib",
            LuminosityClass::BrightGiant => "II",
            LuminosityClass::Giant => "III",
            LuminosityClass::Subgiant => "IV",
            LuminosityClass::MainSequence => "V",
            LuminosityClass::Subdwarf => "VI",
            LuminosityClass::WhiteDwarf => "VII",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LuminosityClass::Hypergiant => "hypergiant",
            LuminosityClass::LuminousSupergiant => "luminous supergiant",
            LuminosityClass::Supergiant => "supergiant",
            LuminosityClass::BrightGiant => "bright giant",
            LuminosityClass::Giant => "giant",
            LuminosityClass::Subgiant => "subgiant",
            LuminosityClass::MainSequence => "main sequence",
            LuminosityClass::Subdwarf => "subdwarf",
            LuminosityClass::WhiteDwarf => "white dwarf",
        }
    }
}

impl fmt::Display for LuminosityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LuminosityClass {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let code = s.trim();
        LuminosityClass::ALL
            .into_iter()
            .find(|candidate| candidate.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| Error::UnknownLuminosityClass {
                code: code.to_string(),
            })
    }
}
