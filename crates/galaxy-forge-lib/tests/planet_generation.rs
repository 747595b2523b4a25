mod common;

use common::star;
use galaxy_forge_lib::generator::{generate, orbital_distances, planet_at, planet_count};
use galaxy_forge_lib::{Body, PlanetIndex, PlanetType, StarType};

#[test]
fn generation_is_deterministic_per_designation() {
    let sun = star("SOL", StarType::G, 100.0);
    let first = generate(&sun);
    let second = generate(&sun);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.designation(), b.designation());
        assert_eq!(a.planet_type(), b.planet_type());
        assert_eq!(a.average_distance_to_star(), b.average_distance_to_star());
        assert_eq!(a.tilt(), b.tilt());
        assert_eq!(a.eccentricity(), b.eccentricity());
    }

    // Same designation elsewhere in the galaxy yields the same system.
    let moved = star("SOL", StarType::G, 4000.0);
    let relocated = generate(&moved);
    assert_eq!(
        first.iter().map(|p| p.planet_type()).collect::<Vec<_>>(),
        relocated.iter().map(|p| p.planet_type()).collect::<Vec<_>>()
    );
}

#[test]
fn orbits_follow_a_geometric_progression_across_the_type_range() {
    let distances = orbital_distances(0.1, 3.2, 6);
    let expected = [0.1, 0.2, 0.4, 0.8, 1.6, 3.2];
    assert_eq!(distances.len(), expected.len());
    for (got, want) in distances.iter().zip(expected) {
        assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
    }
}

#[test]
fn planet_counts_stay_within_the_type_variation() {
    for star_type in StarType::ALL {
        let params = star_type.parameters();
        let upper = (params.number_of_planets + params.variation_of_planets).max(0) as usize;
        for i in 0..25 {
            let s = star(&format!("{} {i}", star_type.code()), star_type, 10.0 + i as f64);
            let count = planet_count(&s);
            assert!(count <= upper, "{star_type}: {count} > {upper}");
            assert_eq!(generate(&s).len(), count);
        }
    }
}

#[test]
fn planets_are_named_by_star_and_index_and_orbit_inside_the_type_range() {
    let s = star("Kepler", StarType::K, 50.0);
    let params = StarType::K.parameters();
    for (offset, planet) in generate(&s).iter().enumerate() {
        assert_eq!(planet.designation(), format!("Kepler {}", offset + 1));
        assert_eq!(planet.star_designation(), "Kepler");
        assert_eq!(planet.coordinate(), s.coordinate());
        let distance = planet.average_distance_to_star();
        assert!(distance >= params.min_distance_of_planets - 1e-9);
        assert!(distance <= params.max_distance_of_planets + 1e-9);
        assert!((0.0..10.0).contains(&planet.tilt()));
        assert!(planet.eccentricity() >= 0.0);
    }
}

#[test]
fn outside_the_goldilocks_zone_planets_are_never_habitable() {
    let s = star("Far", StarType::G, 10.0);
    let beyond = s.goldilocks_zone_end() * 10.0;
    for index in 1..50 {
        let planet = planet_at(&s, index, beyond + index as f64);
        assert!(!planet.planet_type().is_habitable());
    }
}

#[test]
fn wolf_rayet_systems_are_barren() {
    for i in 0..25 {
        let s = star(&format!("WR {i}"), StarType::W, 10.0 + i as f64);
        let planets = generate(&s);
        assert!(planets.len() <= 1, "{} planets", planets.len());
        assert!(planets.iter().all(|p| p.planet_type().is_barren()));
        assert!(planets.iter().all(|p| p.planet_type() == PlanetType::Y));
    }
}

#[test]
fn index_generates_lazily_and_caches() {
    let mut index = PlanetIndex::new();
    let s = star("Lazy", StarType::G, 10.0);
    assert!(index.add(s.clone()));
    assert!(!index.is_generated("Lazy"));

    let first: Vec<String> = index
        .get("Lazy")
        .expect("indexed")
        .iter()
        .map(|body| body.designation().to_string())
        .collect();
    assert!(index.is_generated("Lazy"));
    assert_eq!(first[0], "Lazy");

    let cached = index.cached("Lazy").expect("cached");
    assert!(matches!(cached[0], Body::Star(_)));
    assert_eq!(
        cached
            .iter()
            .map(|body| body.designation().to_string())
            .collect::<Vec<_>>(),
        first
    );
    assert_eq!(cached.len(), generate(&s).len() + 1);
}
