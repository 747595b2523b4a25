//! Lazily generated body lists per star.
//!
//! Each registered star maps to `[star, planet_1, .., planet_k]`. The planet
//! part is produced by [`generator::generate`] on first read and cached until
//! the star is removed.

use std::collections::BTreeMap;

use tracing::trace;

use crate::body::{Body, Planet, Star};
use crate::generator;

#[derive(Debug, Clone)]
struct IndexEntry {
    star: Star,
    bodies: Option<Vec<Body>>,
}

impl IndexEntry {
    fn bodies_or_generate(&mut self) -> &[Body] {
        self.bodies.get_or_insert_with(|| {
            let planets = generator::generate(&self.star);
            trace!(
                star = self.star.designation(),
                planets = planets.len(),
                "generated planets"
            );
            std::iter::once(Body::Star(self.star.clone()))
                .chain(planets.into_iter().map(Body::Planet))
                .collect()
        })
    }
}

/// Star designation → cached body list, generated on demand.
#[derive(Debug, Clone, Default)]
pub struct PlanetIndex {
    entries: BTreeMap<String, IndexEntry>,
}

impl PlanetIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a star without generating its planets. Returns `false` if the
    /// designation is already present.
    pub fn add(&mut self, star: Star) -> bool {
        if self.entries.contains_key(star.designation()) {
            return false;
        }
        self.entries.insert(
            star.designation().to_string(),
            IndexEntry { star, bodies: None },
        );
        true
    }

    /// Body list for a star, generating planets on first access.
    pub fn get(&mut self, designation: &str) -> Option<&[Body]> {
        self.entries
            .get_mut(designation)
            .map(IndexEntry::bodies_or_generate)
    }

    /// Body list for a star only if it was already generated.
    pub fn cached(&self, designation: &str) -> Option<&[Body]> {
        self.entries
            .get(designation)
            .and_then(|entry| entry.bodies.as_deref())
    }

    pub fn is_generated(&self, designation: &str) -> bool {
        self.cached(designation).is_some()
    }

    /// Drop a star together with its cached planets.
    pub fn remove(&mut self, designation: &str) -> bool {
        self.entries.remove(designation).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, designation: &str) -> bool {
        self.entries.contains_key(designation)
    }

    /// Force generation for every registered star.
    pub fn generate_all(&mut self) {
        for entry in self.entries.values_mut() {
            entry.bodies_or_generate();
        }
    }

    /// Every body list, ordered by star designation. Forces generation.
    pub fn bodies(&mut self) -> impl Iterator<Item = &[Body]> {
        self.generate_all();
        self.entries
            .values()
            .filter_map(|entry| entry.bodies.as_deref())
    }

    /// Every generated planet across all stars. Forces generation.
    pub fn planets(&mut self) -> impl Iterator<Item = &Planet> {
        self.bodies()
            .flat_map(|bodies| bodies.iter().filter_map(Body::as_planet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::StarBuilder;
    use crate::types::StarType;

    fn index_with(designations: &[&str]) -> PlanetIndex {
        let mut index = PlanetIndex::new();
        for (i, designation) in designations.iter().enumerate() {
            index.add(
                StarBuilder::new(designation)
                    .star_type(StarType::K)
                    .radial(10.0 * (i + 1) as f64)
                    .build(),
            );
        }
        index
    }

    #[test]
    fn planets_are_generated_on_first_read_only() {
        let mut index = index_with(&["A", "B"]);
        assert!(!index.is_generated("A"));
        assert!(index.cached("A").is_none());

        let bodies = index.get("A").expect("A registered").to_vec();
        assert!(index.is_generated("A"));
        assert!(!index.is_generated("B"));

        assert_eq!(bodies[0].designation(), "A");
        assert!(bodies[0].as_star().is_some());
        assert!(bodies[1..].iter().all(|body| body.as_planet().is_some()));

        let again = index.get("A").expect("A registered");
        assert_eq!(again.len(), bodies.len());
    }

    #[test]
    fn adding_twice_keeps_the_first_entry() {
        let mut index = index_with(&["A"]);
        index.get("A");
        assert!(!index.add(StarBuilder::new("A").build()));
        assert!(index.is_generated("A"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn unknown_star_has_no_bodies() {
        let mut index = index_with(&["A"]);
        assert!(index.get("Z").is_none());
    }

    #[test]
    fn remove_drops_entry_and_cache() {
        let mut index = index_with(&["A", "B"]);
        index.get("A");
        assert!(index.remove("A"));
        assert!(!index.contains("A"));
        assert!(index.cached("A").is_none());
        assert!(!index.remove("A"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn iteration_generates_every_star_in_designation_order() {
        let mut index = index_with(&["C", "A", "B"]);
        let heads: Vec<String> = index
            .bodies()
            .map(|bodies| bodies[0].designation().to_string())
            .collect();
        assert_eq!(heads, vec!["A", "B", "C"]);
        assert!(["A", "B", "C"].iter().all(|d| index.is_generated(d)));
    }

    #[test]
    fn planets_reference_their_index_star() {
        let mut index = index_with(&["A", "B"]);
        let owners: Vec<String> = index
            .planets()
            .map(|planet| planet.star_designation().to_string())
            .collect();
        assert!(!owners.is_empty());
        assert!(owners.iter().all(|owner| owner == "A" || owner == "B"));
    }
}
