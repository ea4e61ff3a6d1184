//! The deformable grid surface.
//!
//! Owns a subdivided plane mesh and rebuilds its vertex heights each frame
//! by querying the gravity-field sampler per vertex. The core only answers
//! point queries; the grid itself is entirely this module's concern, as is
//! the sign and axis of the applied offset.

use bevy::math::DVec3;
use bevy::prelude::*;
use bevy::mesh::VertexAttributeValues;

use crate::catalogue::BodyCatalogue;
use crate::field::{FieldSettings, SurfacePlane};
use crate::kinematics;
use crate::types::SimulationTime;

/// Deformer tuning. Render-side only; the sampler never sees these.
#[derive(Resource, Clone, Copy, Debug)]
pub struct SurfaceSettings {
    /// Side length of the square grid, scene units.
    pub size: f32,
    /// Subdivisions per side. 100 matches the original grid density.
    pub subdivisions: u32,
    /// Vertex offset along the warp axis is `warp * dip_scale`; negative
    /// values dip the surface toward heavy bodies.
    pub dip_scale: f64,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            size: 100.0,
            subdivisions: 100,
            dip_scale: -8.0,
        }
    }
}

/// Marker component for the grid surface entity.
#[derive(Component)]
pub struct WarpSurface;

/// Spawn the grid plane, oriented to match the configured surface plane.
pub fn spawn_surface(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<SurfaceSettings>,
    field: Res<FieldSettings>,
) {
    let normal = match field.config.plane() {
        SurfacePlane::Xz => Dir3::Y,
        SurfacePlane::Xy => Dir3::Z,
    };

    let plane = Plane3d {
        normal,
        half_size: Vec2::splat(settings.size / 2.0),
    };
    let mesh = meshes.add(plane.mesh().subdivisions(settings.subdivisions));

    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.35, 0.42),
        // Visible from below when the camera dips under the grid.
        cull_mode: None,
        double_sided: true,
        perceptual_roughness: 0.9,
        ..default()
    });

    // The entity stays at the origin with an identity transform, so mesh
    // vertex coordinates are scene coordinates and can be fed to the
    // sampler directly.
    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        WarpSurface,
    ));
}

/// Rebuild the grid's vertex heights from the gravity field each frame.
pub fn deform_surface(
    query: Query<&Mesh3d, With<WarpSurface>>,
    mut meshes: ResMut<Assets<Mesh>>,
    catalogue: Res<BodyCatalogue>,
    field: Res<FieldSettings>,
    settings: Res<SurfaceSettings>,
    time: Res<SimulationTime>,
) {
    let Ok(mesh_handle) = query.single() else {
        return;
    };
    let Some(mesh) = meshes.get_mut(&mesh_handle.0) else {
        return;
    };

    // One snapshot of positions and masses for the whole grid pass.
    let sources = kinematics::field_sources(&catalogue, time.current);

    if let Some(VertexAttributeValues::Float32x3(positions)) =
        mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
    {
        for p in positions.iter_mut() {
            let point = DVec3::new(p[0] as f64, p[1] as f64, p[2] as f64);
            let warp = field.config.sample(point, &sources);
            let offset = (warp * settings.dip_scale) as f32;
            match field.config.plane() {
                SurfacePlane::Xz => p[1] = offset,
                SurfacePlane::Xy => p[2] = offset,
            }
        }
    }

    mesh.compute_normals();
}
