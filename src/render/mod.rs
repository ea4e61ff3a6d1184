//! Visual consumers of the simulation core.
//!
//! Body meshes, the warped grid surface, and a starfield backdrop. These
//! systems only consume positions and field samples; all simulation math
//! lives in the core modules.

pub mod background;
pub mod bodies;
pub mod surface;

use bevy::prelude::*;

use self::background::{spawn_lighting, spawn_starfield};
use self::bodies::{spawn_bodies, sync_body_positions};
use self::surface::{deform_surface, spawn_surface};

pub use self::surface::SurfaceSettings;

/// Plugin aggregating all visualization functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (spawn_bodies, spawn_surface, spawn_starfield, spawn_lighting),
        )
        // Body transforms are synced before the surface deforms so one
        // frame shows one consistent snapshot of the simulation time.
        .add_systems(Update, (sync_body_positions, deform_surface).chain());
    }
}
