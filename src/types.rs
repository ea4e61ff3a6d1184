//! Shared simulation types for the warped-grid solar system.

use bevy::prelude::*;

/// Simulation time resource: a single monotonically non-decreasing scalar.
///
/// Owned and advanced exclusively by [`crate::time::TimePlugin`]; the
/// kinematics engine, field sampler, and camera rig only ever read it, so
/// all three observe the same value within one frame.
#[derive(Resource, Clone, Debug)]
pub struct SimulationTime {
    /// Current simulation time in seconds.
    pub current: f64,
    /// Simulation seconds per real-world second.
    pub scale: f64,
    /// Whether time advancement is paused.
    pub paused: bool,
    /// Initial time for reset functionality.
    pub initial: f64,
}

impl Default for SimulationTime {
    fn default() -> Self {
        Self {
            current: 0.0,
            scale: 1.0,
            paused: false,
            initial: 0.0,
        }
    }
}

impl SimulationTime {
    /// Create simulation time starting at a specific value.
    pub fn starting_at(seconds: f64) -> Self {
        Self {
            current: seconds,
            scale: 1.0,
            paused: false,
            initial: seconds,
        }
    }

    /// Reset to initial time. Positions are a pure function of absolute
    /// time, so a reset snaps every body back without accumulated drift.
    pub fn reset(&mut self) {
        self.current = self.initial;
        self.paused = true;
    }
}
