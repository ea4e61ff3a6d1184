//! Camera sequencer: cycles a locked orbit center through named targets.
//!
//! A small state machine plus pure per-tick functions. State transitions
//! take explicit `(state, time)` arguments so the whole choreography is
//! testable without a running render loop; the Bevy wiring lives in
//! [`crate::camera`].

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::catalogue::BodyCatalogue;
use crate::kinematics;

/// One entry of the cyclic target tour.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetSegment {
    /// Catalogue name of the body to lock onto.
    pub name: String,
    /// How long to stay locked, in simulation seconds. Must be positive.
    pub duration: f64,
}

impl TargetSegment {
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}

/// Validation failures when constructing a target sequence.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SequenceError {
    #[error("target sequence is empty")]
    Empty,

    #[error("segment {name:?} has non-positive duration {duration}")]
    NonPositiveDuration { name: String, duration: f64 },
}

/// Ordered, cyclic sequence of target segments with a fixed total period.
#[derive(Clone, Debug)]
pub struct TargetSequence {
    segments: Vec<TargetSegment>,
    total_period: f64,
}

impl TargetSequence {
    /// Validate and build a sequence. Durations must be positive and
    /// finite; the core never silently clamps authoring mistakes.
    pub fn new(segments: Vec<TargetSegment>) -> Result<Self, SequenceError> {
        if segments.is_empty() {
            return Err(SequenceError::Empty);
        }
        for segment in &segments {
            if !(segment.duration > 0.0 && segment.duration.is_finite()) {
                return Err(SequenceError::NonPositiveDuration {
                    name: segment.name.clone(),
                    duration: segment.duration,
                });
            }
        }
        let total_period = segments.iter().map(|s| s.duration).sum();
        Ok(Self {
            segments,
            total_period,
        })
    }

    /// The outer-planet tour the original demo shipped with.
    pub fn demo_tour() -> Self {
        Self::new(vec![
            TargetSegment::new("Earth", 5.0),
            TargetSegment::new("Jupiter", 5.0),
            TargetSegment::new("Uranus", 5.0),
            TargetSegment::new("Neptune", 5.0),
        ])
        .expect("baked-in demo tour is valid")
    }

    pub fn segments(&self) -> &[TargetSegment] {
        &self.segments
    }

    /// Sum of all segment durations.
    pub fn total_period(&self) -> f64 {
        self.total_period
    }

    /// Index of the segment containing `cycle_time`.
    ///
    /// Segment boundaries are half-open `[start, end)` intervals: the first
    /// segment whose cumulative end exceeds `cycle_time` wins, so a tick
    /// landing exactly on a boundary already belongs to the next segment.
    pub fn segment_at(&self, cycle_time: f64) -> usize {
        let mut accumulated = 0.0;
        for (index, segment) in self.segments.iter().enumerate() {
            accumulated += segment.duration;
            if cycle_time < accumulated {
                return index;
            }
        }
        // Only reachable through float round-off when cycle_time lands a
        // hair past the re-accumulated total; treat it as the last segment.
        self.segments.len() - 1
    }
}

/// Configuration failures for the camera rig tuning.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RigConfigError {
    #[error("smoothing must be in (0, 1], got {0}")]
    InvalidSmoothing(f64),

    #[error("time scale must be positive and finite, got {0}")]
    InvalidTimeScale(f64),

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}

/// Tuning for the demo camera rig. All fields optional via [`Default`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRigConfig {
    /// Base orbit radius around the locked target, scene units.
    pub orbit_radius: f64,
    /// Angular speed of the camera's own orbit, rad/s.
    pub orbit_speed: f64,
    /// Amplitude of the radius oscillation (zoom in/out effect).
    pub zoom_amplitude: f64,
    /// Frequency of the zoom oscillation, rad/s.
    pub zoom_speed: f64,
    /// Fixed height above the locked target.
    pub vertical_offset: f64,
    /// Per-tick lerp factor in (0, 1]. Exponential smoothing, not a jump.
    pub smoothing: f64,
    /// Multiplier applied to simulation time for the rig choreography.
    pub time_scale: f64,
}

impl Default for CameraRigConfig {
    fn default() -> Self {
        Self {
            orbit_radius: 150.0,
            orbit_speed: 1.0,
            zoom_amplitude: 50.0,
            zoom_speed: 1.0,
            vertical_offset: 50.0,
            smoothing: 0.1,
            time_scale: 1.0,
        }
    }
}

impl CameraRigConfig {
    /// Surface malformed tuning once, at construction time.
    pub fn validate(&self) -> Result<(), RigConfigError> {
        for (field, value) in [
            ("orbit_radius", self.orbit_radius),
            ("orbit_speed", self.orbit_speed),
            ("zoom_amplitude", self.zoom_amplitude),
            ("zoom_speed", self.zoom_speed),
            ("vertical_offset", self.vertical_offset),
        ] {
            if !value.is_finite() {
                return Err(RigConfigError::NonFinite { field, value });
            }
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(RigConfigError::InvalidSmoothing(self.smoothing));
        }
        if !(self.time_scale > 0.0 && self.time_scale.is_finite()) {
            return Err(RigConfigError::InvalidTimeScale(self.time_scale));
        }
        Ok(())
    }
}

/// The sequencer's only mutable state, updated once per tick.
#[derive(Clone, Debug)]
pub struct SequencerState {
    /// Index into the cyclic segment sequence.
    pub segment_index: usize,
    /// Orbit center for the current segment, fixed at lock time.
    pub locked_target: DVec3,
    /// Simulation time when the current segment was entered.
    pub segment_start: f64,
}

impl SequencerState {
    /// Initial state: segment 0, locked target resolved at `t = 0`.
    pub fn new(catalogue: &BodyCatalogue, sequence: &TargetSequence) -> Self {
        let locked_target = resolve_target(catalogue, &sequence.segments()[0].name, 0.0);
        Self {
            segment_index: 0,
            locked_target,
            segment_start: 0.0,
        }
    }

    /// Per-tick segment transition.
    ///
    /// Finds the segment containing `t mod total_period`; on entering a new
    /// segment the locked target is re-resolved through the kinematics
    /// engine at the *current* time. State depends only on `t`, so a bad
    /// tick cannot corrupt later ones.
    pub fn tick(&mut self, catalogue: &BodyCatalogue, sequence: &TargetSequence, t: f64) {
        let cycle_time = t.rem_euclid(sequence.total_period());
        let segment_index = sequence.segment_at(cycle_time);

        if segment_index != self.segment_index {
            self.segment_index = segment_index;
            self.segment_start = t;
            self.locked_target =
                resolve_target(catalogue, &sequence.segments()[segment_index].name, t);
        }
    }
}

/// Look up a target body's current position by name.
///
/// An unresolvable name falls back to the origin; the sequencer keeps
/// running. Documented fallback, not a fatal error.
fn resolve_target(catalogue: &BodyCatalogue, name: &str, t: f64) -> DVec3 {
    match catalogue.by_name(name) {
        Some(body) => kinematics::position(body, t),
        None => {
            warn!("Camera target {name:?} not found in catalogue, locking onto origin");
            DVec3::ZERO
        }
    }
}

/// Camera pose produced each tick: where the camera sits and what it looks
/// at. The look-at is the locked target directly, with no smoothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: DVec3,
    pub look_at: DVec3,
}

/// Desired camera position around the locked target at time `t`.
///
/// The orbit radius oscillates with the zoom settings while the camera
/// circles the target at its own angular speed, offset vertically by a
/// fixed height.
pub fn desired_position(state: &SequencerState, config: &CameraRigConfig, t: f64) -> DVec3 {
    let dynamic_radius = config.orbit_radius + config.zoom_amplitude * (config.zoom_speed * t).sin();
    let orbit_angle = t * config.orbit_speed;
    state.locked_target
        + DVec3::new(
            dynamic_radius * orbit_angle.cos(),
            config.vertical_offset,
            dynamic_radius * orbit_angle.sin(),
        )
}

/// One exponential-smoothing step toward the desired position.
///
/// Holding the desired position fixed, the remaining distance shrinks by
/// `(1 - smoothing)` each tick, which is what eases the camera between
/// targets instead of teleporting.
pub fn step_position(current: DVec3, desired: DVec3, smoothing: f64) -> DVec3 {
    current.lerp(desired, smoothing)
}

/// Full per-tick pose update from the current camera position.
pub fn step_pose(
    current: DVec3,
    state: &SequencerState,
    config: &CameraRigConfig,
    t: f64,
) -> CameraPose {
    let desired = desired_position(state, config, t);
    CameraPose {
        position: step_position(current, desired, config.smoothing),
        look_at: state.locked_target,
    }
}
