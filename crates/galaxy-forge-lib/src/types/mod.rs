//! Static classification tables for stars and planets.
//!
//! - [`star_type`] - Star classes with planet-generation parameters
//! - [`luminosity`] - Yerkes luminosity classes
//! - [`planet_type`] - Planet classes and habitability tiers
//!
//! Every enum parses its catalog code case-insensitively via [`std::str::FromStr`]
//! and formats back to the canonical code via [`std::fmt::Display`].

pub mod luminosity;
pub mod planet_type;
pub mod star_type;

pub use luminosity::LuminosityClass;
pub use planet_type::{Habitability, PlanetType};
pub use star_type::{StarType, StarTypeParameters};
