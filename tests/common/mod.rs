//! Common test utilities for integration tests.

use bevy::prelude::Color;

use warpgrid::catalogue::{BodyCatalogue, CelestialBody};
use warpgrid::sequencer::{TargetSegment, TargetSequence};

/// Sun plus two planets, with Earth matching the reference scenario body
/// (orbit radius 20, period 1 second, zero initial phase).
pub fn demo_catalogue() -> BodyCatalogue {
    BodyCatalogue::new(vec![
        CelestialBody::new("Sun", 1000.0, 0.0, 0.0, 0.0, 4.0, Color::srgb(1.0, 0.95, 0.4)),
        CelestialBody::from_period("Earth", 1.0, 20.0, 1.0, 0.0, 1.0, Color::srgb(0.2, 0.5, 0.8)),
        CelestialBody::new("Jupiter", 317.8, 35.0, 0.15, 4.0, 2.8, Color::srgb(0.8, 0.7, 0.6)),
    ])
    .expect("test catalogue is valid")
}

/// A four-segment tour over the demo catalogue, 2 seconds per segment.
/// "Ceres" is deliberately absent from the catalogue to exercise the
/// origin fallback.
pub fn tour_with_unknown_target() -> TargetSequence {
    TargetSequence::new(vec![
        TargetSegment::new("Earth", 2.0),
        TargetSegment::new("Jupiter", 2.0),
        TargetSegment::new("Ceres", 2.0),
        TargetSegment::new("Sun", 2.0),
    ])
    .expect("test sequence is valid")
}
