//! Galaxy facade tying the star registry to the lazy planet index.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::body::{Body, Star};
use crate::catalog::{StarCatalog, StarRecord};
use crate::error::{Error, Result};
use crate::index::PlanetIndex;
use crate::registry::{AdmissionOutcome, StarRegistry};
use crate::stats::GalaxyStatistics;

/// Counts gathered while admitting a batch of stars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub offered: usize,
    pub admitted: usize,
    pub rejected: usize,
    /// Admissions that formed a new binary pair.
    pub paired: usize,
}

/// Admitted stars together with their lazily generated planets.
#[derive(Debug, Clone, Default)]
pub struct Galaxy {
    registry: StarRegistry,
    index: PlanetIndex,
    summary: LoadSummary,
}

impl Galaxy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit every star in order; rejected stars are dropped.
    pub fn from_stars<I>(stars: I) -> Self
    where
        I: IntoIterator<Item = Star>,
    {
        let mut galaxy = Self::new();
        for star in stars {
            galaxy.admit(star);
        }
        info!(
            admitted = galaxy.summary.admitted,
            rejected = galaxy.summary.rejected,
            paired = galaxy.summary.paired,
            "built galaxy"
        );
        galaxy
    }

    /// Build a galaxy from catalog records.
    ///
    /// # Errors
    ///
    /// Fails on the first record whose star type or luminosity code is unknown.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = StarRecord>,
    {
        let stars = records
            .into_iter()
            .map(StarRecord::into_star)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_stars(stars))
    }

    /// Load the CSV catalog at `path` and build a galaxy from it.
    pub fn load(path: &Path) -> Result<Self> {
        let catalog = StarCatalog::from_path(path)?;
        Self::from_records(catalog.into_records())
    }

    /// Admit a single star into the registry and, if accepted, the index.
    pub fn admit(&mut self, star: Star) -> AdmissionOutcome {
        self.summary.offered += 1;
        let outcome = self.registry.evaluate(&star);
        match &outcome {
            AdmissionOutcome::Admitted => self.summary.admitted += 1,
            AdmissionOutcome::Paired { .. } => {
                self.summary.admitted += 1;
                self.summary.paired += 1;
            }
            _ => self.summary.rejected += 1,
        }
        if outcome.is_admitted() {
            self.index.add(star.clone());
        }
        self.registry.apply(star, &outcome);
        outcome
    }

    /// Remove a star from both the registry and the planet index.
    pub fn remove(&mut self, designation: &str) -> Option<Star> {
        self.index.remove(designation);
        self.registry.remove(designation)
    }

    /// Remove stars with no planets, or whose planets are all R, T or Y.
    ///
    /// Returns the removed designations in designation order.
    pub fn prune_barren(&mut self) -> Vec<String> {
        let designations: Vec<String> = self
            .registry
            .all()
            .map(|star| star.designation().to_string())
            .collect();

        let mut barren = Vec::new();
        for designation in designations {
            let is_barren = self
                .index
                .get(&designation)
                .map(|bodies| {
                    bodies
                        .iter()
                        .filter_map(Body::as_planet)
                        .all(|planet| planet.planet_type().is_barren())
                })
                .unwrap_or(true);
            if is_barren {
                barren.push(designation);
            }
        }

        for designation in &barren {
            self.remove(designation);
        }
        debug!(removed = barren.len(), "pruned barren stars");
        barren
    }

    /// Aggregate statistics; forces planet generation for every star.
    pub fn statistics(&mut self) -> GalaxyStatistics {
        GalaxyStatistics::collect(&self.registry, &mut self.index)
    }

    /// `[star, planets..]` for a designation, with suggestions when unknown.
    pub fn bodies_of(&mut self, designation: &str) -> Result<&[Body]> {
        self.registry.find_or_suggest(designation)?;
        self.index
            .get(designation)
            .ok_or_else(|| Error::UnknownStar {
                designation: designation.to_string(),
                suggestions: Vec::new(),
            })
    }

    pub fn registry(&self) -> &StarRegistry {
        &self.registry
    }

    pub fn index(&self) -> &PlanetIndex {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut PlanetIndex {
        &mut self.index
    }

    pub fn load_summary(&self) -> LoadSummary {
        self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::StarBuilder;
    use crate::types::StarType;

    #[test]
    fn rejected_stars_never_reach_the_index() {
        let galaxy = Galaxy::from_stars([
            StarBuilder::new("A").radial(100.0).build(),
            StarBuilder::new("B").radial(100.005).build(),
            StarBuilder::new("A").radial(300.0).build(),
        ]);
        assert_eq!(galaxy.registry().len(), 1);
        assert_eq!(galaxy.index().len(), 1);
        assert_eq!(
            galaxy.load_summary(),
            LoadSummary {
                offered: 3,
                admitted: 1,
                rejected: 2,
                paired: 0,
            }
        );
    }

    #[test]
    fn prune_removes_stars_without_useful_planets() {
        // Wolf-Rayet stars get at most one planet, scorched by the star.
        let mut galaxy = Galaxy::from_stars((0..20).map(|i| {
            let star_type = if i % 2 == 0 { StarType::W } else { StarType::G };
            StarBuilder::new(&format!("S {i}"))
                .star_type(star_type)
                .radial(10.0 + i as f64)
                .build()
        }));
        let removed = galaxy.prune_barren();
        assert!((0..20)
            .step_by(2)
            .all(|i| removed.contains(&format!("S {i}"))));
        for designation in &removed {
            assert!(!galaxy.registry().contains(designation));
            assert!(!galaxy.index().contains(designation));
        }
        let survivors: Vec<String> = galaxy
            .registry()
            .all()
            .map(|star| star.designation().to_string())
            .collect();
        for designation in survivors {
            let bodies = galaxy.index_mut().get(&designation).expect("indexed");
            assert!(bodies
                .iter()
                .filter_map(Body::as_planet)
                .any(|planet| !planet.planet_type().is_barren()));
        }
        assert_eq!(galaxy.registry().len() + removed.len(), 20);
    }

    #[test]
    fn registry_and_index_hold_the_same_designations() {
        let mut galaxy = Galaxy::new();
        let outcomes: Vec<_> = [
            StarBuilder::new("A").radial(100.0).build(),
            StarBuilder::new("B").radial(100.02).build(),
            StarBuilder::new("C").radial(100.2).build(),
            StarBuilder::new("A").radial(900.0).build(),
            StarBuilder::new("D").radial(500.0).build(),
        ]
        .into_iter()
        .map(|star| galaxy.admit(star))
        .collect();

        assert!(matches!(outcomes[1], AdmissionOutcome::Paired { ref sister } if sister == "A"));
        assert!(matches!(outcomes[2], AdmissionOutcome::NearBinary { .. }));
        assert_eq!(outcomes[3], AdmissionOutcome::Duplicate);

        let registered: Vec<_> = galaxy.registry().all().map(Star::designation).collect();
        assert_eq!(registered, vec!["A", "B", "D"]);
        for designation in &registered {
            assert!(galaxy.index().contains(designation));
        }
        assert_eq!(galaxy.index().len(), registered.len());
        assert!(!galaxy.index().contains("C"));
        assert_eq!(
            galaxy
                .registry()
                .find_by_designation("A")
                .map(|star| star.coordinate().radial_distance),
            Some(100.0)
        );
        assert_eq!(galaxy.registry().sister_of("B").map(Star::designation), Some("A"));
    }

    #[test]
    fn unknown_designation_has_no_bodies() {
        let mut galaxy = Galaxy::from_stars([StarBuilder::new("Tau Ceti").build()]);
        let err = galaxy.bodies_of("Tau Cet").unwrap_err();
        assert!(err.to_string().contains("Did you mean 'Tau Ceti'?"));
    }
}
