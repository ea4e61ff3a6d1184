//! Orbital kinematics: mapping simulation time to body positions.
//!
//! Positions are a pure function of absolute time, never of the previous
//! frame's position, so the clock can be scrubbed, reset, or run backward
//! without accumulated drift. Orbits are coplanar circles in the XZ plane.

use bevy::math::DVec3;

use crate::catalogue::{BodyCatalogue, CelestialBody};
use crate::field::FieldSource;

/// Position of a body at simulation time `t`, in scene units.
///
/// A body with `angular_speed == 0` (the central body, or one built from a
/// degenerate orbital period) stays at the origin for all `t`. This is a
/// documented fallback, not an error.
pub fn position(body: &CelestialBody, t: f64) -> DVec3 {
    if body.angular_speed == 0.0 {
        return DVec3::ZERO;
    }

    let angle = t * body.angular_speed + body.initial_phase;
    DVec3::new(
        body.orbit_radius * angle.cos(),
        0.0,
        body.orbit_radius * angle.sin(),
    )
}

/// Per-tick snapshot of every body's position and mass.
///
/// This plain data structure is what the field sampler and renderer consume;
/// the core never writes into renderer-owned buffers.
pub fn field_sources(catalogue: &BodyCatalogue, t: f64) -> Vec<FieldSource> {
    catalogue
        .bodies()
        .iter()
        .map(|body| FieldSource {
            position: position(body, t),
            mass: body.mass,
        })
        .collect()
}
