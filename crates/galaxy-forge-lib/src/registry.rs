//! Star registry enforcing proximity and binary-pairing rules on admission.
//!
//! A new star is checked against every admitted star:
//!
//! - closer than [`MIN_SEPARATION`] to anything: rejected
//! - closer than [`EXCLUSION_RADIUS`] to a star that already has a sister: rejected
//! - within `[SINGLE_EXCLUSION_START, EXCLUSION_RADIUS)` of a single star: rejected
//!
//! If the star survives the scan and exactly one unpaired star lies within
//! [`SISTER_RANGE`], the two are linked as a binary pair. Since single stars
//! reject anything at or beyond [`SINGLE_EXCLUSION_START`], pairing in practice
//! only happens in `[MIN_SEPARATION, SINGLE_EXCLUSION_START)`.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::body::Star;
use crate::error::{Error, Result};
use crate::types::StarType;

/// Minimum distance (parsecs) between any two stars.
pub const MIN_SEPARATION: f64 = 0.01;
/// Exclusion radius (parsecs) around binaries, and outer edge of the single-star zone.
pub const EXCLUSION_RADIUS: f64 = 0.3;
/// Inner edge (parsecs) of the exclusion zone around single stars.
pub const SINGLE_EXCLUSION_START: f64 = 0.03;
/// Range (parsecs) within which an unpaired star is a sister candidate.
pub const SISTER_RANGE: f64 = 0.1;

/// Similarity threshold for designation suggestions.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Result of evaluating a star against the registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AdmissionOutcome {
    /// Admitted as a single star.
    Admitted,
    /// Admitted and linked with an existing unpaired star.
    Paired { sister: String },
    /// A star with the same designation is already registered.
    Duplicate,
    /// Closer than [`MIN_SEPARATION`] to `neighbour`.
    TooClose { neighbour: String, distance: f64 },
    /// Inside the exclusion radius of the binary star `neighbour`.
    NearBinary { neighbour: String, distance: f64 },
    /// Inside the exclusion zone of the single star `neighbour`.
    InsideExclusionZone { neighbour: String, distance: f64 },
}

impl AdmissionOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(
            self,
            AdmissionOutcome::Admitted | AdmissionOutcome::Paired { .. }
        )
    }

    /// Short reason label used in log output.
    pub fn label(&self) -> &'static str {
        match self {
            AdmissionOutcome::Admitted => "admitted",
            AdmissionOutcome::Paired { .. } => "paired",
            AdmissionOutcome::Duplicate => "duplicate designation",
            AdmissionOutcome::TooClose { .. } => "too close",
            AdmissionOutcome::NearBinary { .. } => "near binary",
            AdmissionOutcome::InsideExclusionZone { .. } => "inside exclusion zone",
        }
    }
}

/// Admitted stars keyed by designation, plus the symmetric sister relation.
#[derive(Debug, Clone, Default)]
pub struct StarRegistry {
    stars: BTreeMap<String, Star>,
    sisters: HashMap<String, String>,
}

impl StarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate the admission rules for `star` without mutating the registry.
    pub fn evaluate(&self, star: &Star) -> AdmissionOutcome {
        if self.stars.contains_key(star.designation()) {
            return AdmissionOutcome::Duplicate;
        }

        let mut nearby_unpaired = 0usize;
        let mut candidate: Option<&str> = None;

        for existing in self.stars.values() {
            let distance = star.distance_to(existing);
            let paired = self.is_binary(existing.designation());

            if distance < MIN_SEPARATION {
                return AdmissionOutcome::TooClose {
                    neighbour: existing.designation().to_string(),
                    distance,
                };
            }
            if paired && distance < EXCLUSION_RADIUS {
                return AdmissionOutcome::NearBinary {
                    neighbour: existing.designation().to_string(),
                    distance,
                };
            }
            if !paired && (SINGLE_EXCLUSION_START..EXCLUSION_RADIUS).contains(&distance) {
                return AdmissionOutcome::InsideExclusionZone {
                    neighbour: existing.designation().to_string(),
                    distance,
                };
            }
            if !paired && distance < SISTER_RANGE {
                nearby_unpaired += 1;
                candidate = Some(existing.designation());
            }
        }

        match (nearby_unpaired, candidate) {
            (1, Some(sister)) => AdmissionOutcome::Paired {
                sister: sister.to_string(),
            },
            _ => AdmissionOutcome::Admitted,
        }
    }

    /// Admit `star`, returning the detailed outcome.
    pub fn admit_with_outcome(&mut self, star: Star) -> AdmissionOutcome {
        let outcome = self.evaluate(&star);
        self.apply(star, &outcome);
        outcome
    }

    /// Record an outcome produced by [`StarRegistry::evaluate`] for `star`.
    ///
    /// Rejected stars are dropped; the registry must not have changed since
    /// the evaluation.
    pub(crate) fn apply(&mut self, star: Star, outcome: &AdmissionOutcome) {
        if !outcome.is_admitted() {
            debug!(
                star = star.designation(),
                reason = outcome.label(),
                "rejected star"
            );
            return;
        }

        if let AdmissionOutcome::Paired { sister } = outcome {
            self.sisters
                .insert(star.designation().to_string(), sister.clone());
            self.sisters
                .insert(sister.clone(), star.designation().to_string());
            debug!(star = star.designation(), sister = %sister, "linked binary pair");
        }
        self.stars.insert(star.designation().to_string(), star);
    }

    /// Admit `star`; `false` when it is a duplicate or violates a proximity rule.
    pub fn admit(&mut self, star: Star) -> bool {
        self.admit_with_outcome(star).is_admitted()
    }

    /// Remove a star by designation, clearing the sister link on both sides.
    pub fn remove(&mut self, designation: &str) -> Option<Star> {
        let removed = self.stars.remove(designation)?;
        if let Some(partner) = self.sisters.remove(designation) {
            self.sisters.remove(&partner);
            debug!(star = designation, sister = %partner, "dissolved binary pair");
        }
        Some(removed)
    }

    pub fn remove_star(&mut self, star: &Star) -> bool {
        self.remove(star.designation()).is_some()
    }

    pub fn find_by_designation(&self, designation: &str) -> Option<&Star> {
        self.stars.get(designation)
    }

    /// Lookup a star, producing suggestions for near-miss designations.
    pub fn find_or_suggest(&self, designation: &str) -> Result<&Star> {
        self.find_by_designation(designation)
            .ok_or_else(|| Error::UnknownStar {
                designation: designation.to_string(),
                suggestions: self.fuzzy_matches(designation, 3),
            })
    }

    /// Designations most similar to `query`, best match first.
    pub fn fuzzy_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .stars
            .keys()
            .map(|designation| {
                let score = strsim::jaro_winkler(&needle, &designation.to_lowercase());
                (score, designation.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, designation)| designation.to_string())
            .collect()
    }

    pub fn all_of_type(&self, star_type: StarType) -> Vec<&Star> {
        self.stars
            .values()
            .filter(|star| star.star_type() == star_type)
            .collect()
    }

    /// Every admitted star, ordered by designation.
    pub fn all(&self) -> impl Iterator<Item = &Star> {
        self.stars.values()
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn contains(&self, designation: &str) -> bool {
        self.stars.contains_key(designation)
    }

    pub fn sister_of(&self, designation: &str) -> Option<&Star> {
        self.sisters
            .get(designation)
            .and_then(|sister| self.stars.get(sister))
    }

    pub fn is_binary(&self, designation: &str) -> bool {
        self.sisters.contains_key(designation)
    }

    /// Number of stars that belong to a binary pair.
    pub fn binary_count(&self) -> usize {
        self.sisters.len()
    }

    /// Each binary pair once, ordered by the first designation.
    pub fn binary_pairs(&self) -> Vec<(&Star, &Star)> {
        self.stars
            .values()
            .filter_map(|star| {
                let sister = self.sister_of(star.designation())?;
                (star.designation() < sister.designation()).then_some((star, sister))
            })
            .collect()
    }
}
