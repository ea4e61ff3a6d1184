//! Warpgrid - a toy solar system over a gravity-warped grid.
//!
//! A library crate providing the time-driven simulation core (orbital
//! kinematics, gravity-field sampling, camera sequencing) together with
//! thin Bevy visualization plugins.

pub mod camera;
pub mod catalogue;
pub mod field;
pub mod kinematics;
pub mod render;
pub mod sequencer;
pub mod time;
pub mod types;

#[cfg(test)]
pub mod test_utils;
