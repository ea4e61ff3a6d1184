//! Demo camera rig driving the viewport through the target tour.
//!
//! Thin Bevy wiring around [`crate::sequencer`]: one resource holding the
//! sequence, tuning and state, and one per-frame system applying the tick
//! and pose step to the 3D camera transform.

use bevy::prelude::*;

use crate::catalogue::BodyCatalogue;
use crate::sequencer::{
    self, CameraRigConfig, RigConfigError, SequencerState, TargetSequence,
};
use crate::types::SimulationTime;

/// Marker component for the rig-driven camera.
#[derive(Component)]
pub struct DemoCamera;

/// Resource bundling the target sequence, rig tuning, and the sequencer's
/// mutable per-frame state.
#[derive(Resource)]
pub struct CameraRig {
    pub sequence: TargetSequence,
    pub config: CameraRigConfig,
    pub state: SequencerState,
}

impl CameraRig {
    /// Build a rig with validated tuning and the initial lock resolved at
    /// `t = 0`.
    pub fn new(
        catalogue: &BodyCatalogue,
        sequence: TargetSequence,
        config: CameraRigConfig,
    ) -> Result<Self, RigConfigError> {
        config.validate()?;
        let state = SequencerState::new(catalogue, &sequence);
        Ok(Self {
            sequence,
            config,
            state,
        })
    }
}

/// Plugin providing the demo camera.
pub struct CameraRigPlugin;

impl Plugin for CameraRigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, drive_camera);
    }
}

/// Spawn the demo camera at its initial desired offset so the first frames
/// ease around the target instead of lerping in from nowhere.
fn setup_camera(mut commands: Commands, rig: Res<CameraRig>) {
    let start = sequencer::desired_position(&rig.state, &rig.config, 0.0);
    let look_at = rig.state.locked_target.as_vec3();

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(start.as_vec3()).looking_at(look_at, Vec3::Y),
        DemoCamera,
    ));
}

/// Per-frame rig update: sequencer tick, then smoothed pose.
///
/// Runs against the same `SimulationTime.current` every other system reads
/// this frame; the rig's own `time_scale` only speeds up the choreography.
fn drive_camera(
    mut rig: ResMut<CameraRig>,
    catalogue: Res<BodyCatalogue>,
    sim_time: Res<SimulationTime>,
    mut camera_query: Query<&mut Transform, With<DemoCamera>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let t = sim_time.current * rig.config.time_scale;

    let CameraRig {
        sequence,
        config,
        state,
    } = &mut *rig;
    state.tick(&catalogue, sequence, t);

    let pose = sequencer::step_pose(transform.translation.as_dvec3(), state, config, t);
    transform.translation = pose.position.as_vec3();
    transform.look_at(pose.look_at.as_vec3(), Vec3::Y);
}
