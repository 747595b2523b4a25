use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;

use crate::index::PlanetIndex;
use crate::registry::StarRegistry;
use crate::types::{Habitability, PlanetType, StarType};

/// Aggregate counts over the admitted stars and their generated planets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GalaxyStatistics {
    pub total_stars: usize,
    /// Stars that belong to a binary pair (two per pair).
    pub binary_stars: usize,
    pub total_planets: usize,
    /// Planets of class M, H, K or L.
    pub habitable_planets: usize,
    /// Planets of class J or T.
    pub gas_giants: usize,
    pub stars_by_type: BTreeMap<StarType, usize>,
    pub planets_by_type: BTreeMap<PlanetType, usize>,
    pub planets_by_habitability: BTreeMap<Habitability, usize>,
}

impl GalaxyStatistics {
    /// Count stars from the registry and planets from the index.
    ///
    /// Forces planet generation for every indexed star.
    pub fn collect(registry: &StarRegistry, index: &mut PlanetIndex) -> Self {
        let mut stats = Self {
            total_stars: registry.len(),
            binary_stars: registry.binary_count(),
            ..Self::default()
        };

        for star in registry.all() {
            *stats.stars_by_type.entry(star.star_type()).or_default() += 1;
        }

        for planet in index.planets() {
            let planet_type = planet.planet_type();
            stats.total_planets += 1;
            if planet_type.is_habitable() {
                stats.habitable_planets += 1;
            }
            if planet_type.is_gas_giant() {
                stats.gas_giants += 1;
            }
            *stats.planets_by_type.entry(planet_type).or_default() += 1;
            *stats
                .planets_by_habitability
                .entry(planet_type.habitability())
                .or_default() += 1;
        }

        stats
    }

    /// Plain-text report in the layout printed by the CLI.
    pub fn render(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "Total number of stars: {}", self.total_stars);
        let _ = writeln!(buffer, "Number of double stars: {}", self.binary_stars);
        let _ = writeln!(buffer, "Total number of planets: {}", self.total_planets);
        let _ = writeln!(
            buffer,
            "Number of habitable planets (M, H, K, L): {}",
            self.habitable_planets
        );
        let _ = writeln!(buffer, "Number of gas giants (J, T): {}", self.gas_giants);

        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "Stars by type:");
        for (star_type, count) in &self.stars_by_type {
            let _ = writeln!(
                buffer,
                "  {}: {} ({})",
                star_type,
                count,
                star_type.description()
            );
        }

        if !self.planets_by_habitability.is_empty() {
            let _ = writeln!(buffer);
            let _ = writeln!(buffer, "Planets by habitability:");
            for tier in Habitability::ALL.iter().rev() {
                if let Some(count) = self.planets_by_habitability.get(tier) {
                    let _ = writeln!(buffer, "  {}: {}", tier.label(), count);
                }
            }
        }

        buffer
    }
}
