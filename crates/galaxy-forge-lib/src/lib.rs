//! Galaxy forge library entry points.
//!
//! This crate loads star catalogs, admits stars into a galaxy under proximity
//! and binary-pairing rules, lazily generates deterministic planets for each
//! star, and computes galaxy statistics. Higher-level consumers (the CLI)
//! should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod body;
pub mod catalog;
pub mod config;
pub mod coordinate;
pub mod error;
pub mod galaxy;
pub mod generator;
pub mod index;
pub mod registry;
pub mod stats;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use body::{Body, Planet, Star};
pub use catalog::{StarCatalog, StarRecord};
pub use config::{default_data_path, resolve_data_path};
pub use coordinate::{distance, Coordinate};
pub use error::{Error, Result};
pub use galaxy::{Galaxy, LoadSummary};
pub use index::PlanetIndex;
pub use registry::{AdmissionOutcome, StarRegistry};
pub use stats::GalaxyStatistics;
pub use types::{Habitability, LuminosityClass, PlanetType, StarType, StarTypeParameters};
