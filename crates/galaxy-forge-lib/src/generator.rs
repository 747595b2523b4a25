//! Deterministic procedural planet generation.
//!
//! Every star owns a reproducible planet list: the planet count is drawn from a
//! ChaCha stream seeded by the star's designation, orbital distances follow a
//! geometric progression between the star type's min and max distances, and
//! each planet is classified from its own stream seeded by
//! `designation seed + index + floor(distance * 1000)`.
//!
//! Draw order per planet is fixed: tilt, eccentricity, then the type rolls
//! (one per habitability check, or one coin flip for gas giants).

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use sha2::{Digest, Sha256};

use crate::body::{Planet, Star};
use crate::types::{PlanetType, StarTypeParameters};

/// Upper bound (exclusive) of the axial tilt, in degrees.
const MAX_TILT_DEGREES: f64 = 10.0;
/// Eccentricity scale at the outermost orbit, in degrees.
const MAX_ECCENTRICITY_DEGREES: f64 = 45.0;

/// Stable 64-bit seed derived from a designation.
///
/// Uses the first eight bytes of the SHA-256 digest so seeds do not change
/// between toolchains or platforms.
pub fn designation_seed(designation: &str) -> u64 {
    let digest = Sha256::digest(designation.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

/// Seed for the planet at `index` orbiting at `distance` AU.
pub fn planet_seed(designation: &str, index: usize, distance: f64) -> u64 {
    designation_seed(designation)
        .wrapping_add(index as u64)
        .wrapping_add((distance * 1000.0).floor() as u64)
}

/// Number of planets orbiting `star`; zero or negative draws yield zero.
pub fn planet_count(star: &Star) -> usize {
    let params = star.star_type().parameters();
    let mut rng = ChaChaRng::seed_from_u64(designation_seed(star.designation()));
    let variation = params.variation_of_planets;
    let count = params.number_of_planets + rng.random_range(-variation..=variation);
    usize::try_from(count).unwrap_or(0)
}

/// Geometric progression of `count` orbital distances from `min` to `max` AU.
pub fn orbital_distances(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let ratio = (max / min).powf(1.0 / (count - 1) as f64);
            (0..count).map(|i| min * ratio.powi(i as i32)).collect()
        }
    }
}

/// Generate the full, ordered planet list for `star`.
///
/// Pure with respect to the star: calling it again yields an identical list.
pub fn generate(star: &Star) -> Vec<Planet> {
    let params = star.star_type().parameters();
    let count = planet_count(star);
    orbital_distances(
        params.min_distance_of_planets,
        params.max_distance_of_planets,
        count,
    )
    .into_iter()
    .enumerate()
    .map(|(offset, distance)| planet_at(star, offset + 1, distance))
    .collect()
}

/// Generate the single planet at `index` (1-based) orbiting at `distance` AU.
pub fn planet_at(star: &Star, index: usize, distance: f64) -> Planet {
    let seed = planet_seed(star.designation(), index, distance);
    classify(star, index, distance, seed)
}

/// Classify a planet at `distance` AU using an explicit seed.
pub fn classify(star: &Star, index: usize, distance: f64, seed: u64) -> Planet {
    let params = star.star_type().parameters();
    let mut rng = ChaChaRng::seed_from_u64(seed);

    let tilt = rng.random::<f64>() * MAX_TILT_DEGREES;
    let eccentricity = (distance / params.max_distance_of_planets * MAX_ECCENTRICITY_DEGREES)
        * rng.random::<f64>();
    let planet_type = classify_type(&mut rng, star, &params, distance);

    Planet::new(
        format!("{} {}", star.designation(), index),
        planet_type,
        star,
        distance,
        tilt,
        eccentricity,
    )
}

fn classify_type(
    rng: &mut ChaChaRng,
    star: &Star,
    params: &StarTypeParameters,
    distance: f64,
) -> PlanetType {
    let chance = params.chance_of_habitable;
    let zone_start = star.goldilocks_zone_start();
    let zone_end = star.goldilocks_zone_end();

    if distance > zone_start && distance < zone_end {
        if !roll(rng, chance) {
            PlanetType::D
        } else if roll(rng, chance) {
            PlanetType::M
        } else if roll(rng, chance) {
            PlanetType::H
        } else if roll(rng, chance) {
            PlanetType::K
        } else if roll(rng, chance) {
            PlanetType::L
        } else {
            PlanetType::N
        }
    } else if distance > zone_end && distance < zone_end * 2.0 {
        if roll(rng, chance) {
            PlanetType::K
        } else {
            PlanetType::D
        }
    } else if distance < zone_start {
        PlanetType::Y
    } else if distance > params.max_distance_of_planets {
        PlanetType::N
    } else if rng.random::<f64>() > 0.5 {
        PlanetType::J
    } else {
        PlanetType::T
    }
}

fn roll(rng: &mut ChaChaRng, chance: f64) -> bool {
    chance > rng.random::<f64>()
}
