//! Test utilities for the simulation core.
//!
//! Provides fixtures for small catalogues and sequences used across the
//! unit-test modules.

use bevy::prelude::Color;

use crate::catalogue::{BodyCatalogue, CelestialBody};

/// Fixtures for building test scenes.
pub mod fixtures {
    use super::*;

    /// A minimal valid catalogue: Sun plus two planets.
    ///
    /// Earth has a convenient round orbit (radius 20, period 1s, zero
    /// initial phase).
    pub fn small_catalogue() -> BodyCatalogue {
        BodyCatalogue::new(vec![
            CelestialBody::new("Sun", 1000.0, 0.0, 0.0, 0.0, 4.0, Color::srgb(1.0, 0.95, 0.4)),
            CelestialBody::from_period("Earth", 1.0, 20.0, 1.0, 0.0, 1.0, Color::srgb(0.2, 0.5, 0.8)),
            CelestialBody::new("Mars", 0.107, 25.0, 0.25, 3.0, 0.53, Color::srgb(0.8, 0.4, 0.2)),
        ])
        .expect("fixture catalogue is valid")
    }

    /// A single stationary body of the given mass at the origin.
    pub fn lone_sun(mass: f64) -> BodyCatalogue {
        BodyCatalogue::new(vec![CelestialBody::new(
            "Sun",
            mass,
            0.0,
            0.0,
            0.0,
            4.0,
            Color::WHITE,
        )])
        .expect("fixture catalogue is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_catalogue_earth_has_round_orbit() {
        let catalogue = fixtures::small_catalogue();
        let earth = catalogue.by_name("Earth").unwrap();
        assert_eq!(earth.orbit_radius, 20.0);
        assert_eq!(earth.initial_phase, 0.0);
        // Period 1s -> angular speed 2π
        assert!((earth.angular_speed - std::f64::consts::TAU).abs() < 1e-12);
    }

    #[test]
    fn test_lone_sun_is_central() {
        let catalogue = fixtures::lone_sun(1000.0);
        assert_eq!(catalogue.len(), 1);
        assert!(catalogue.central().is_central());
    }
}
