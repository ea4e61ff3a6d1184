//! Warpgrid - a toy solar system over a gravity-warped grid.
//!
//! A desktop demo: planets on analytic circular orbits deform a grid plane
//! through a gravity-field sampler while a sequenced camera tours the
//! outer planets.

use bevy::prelude::*;

use warpgrid::camera::{CameraRig, CameraRigPlugin};
use warpgrid::catalogue::BodyCatalogue;
use warpgrid::field::FieldSettings;
use warpgrid::render::{RenderPlugin, SurfaceSettings};
use warpgrid::sequencer::{CameraRigConfig, TargetSequence};
use warpgrid::time::TimePlugin;
use warpgrid::types::SimulationTime;

fn main() {
    let catalogue = BodyCatalogue::toy_solar_system();

    let rig = CameraRig::new(
        &catalogue,
        TargetSequence::demo_tour(),
        CameraRigConfig::default(),
    )
    .expect("default camera rig configuration is valid");

    App::new()
        .add_plugins(DefaultPlugins)
        // Insert resources before plugins that depend on them
        .insert_resource(catalogue)
        .insert_resource(SimulationTime::default())
        .insert_resource(FieldSettings::default())
        .insert_resource(SurfaceSettings::default())
        .insert_resource(rig)
        // Add simulation plugins
        .add_plugins((TimePlugin, CameraRigPlugin, RenderPlugin))
        .run();
}
