//! Celestial body meshes synced from the kinematics engine.

use bevy::prelude::*;

use crate::catalogue::BodyCatalogue;
use crate::kinematics;
use crate::types::SimulationTime;

/// Marker linking a mesh entity back to its catalogue entry.
#[derive(Component)]
pub struct BodyVisual {
    /// Index into the catalogue's body list.
    pub index: usize,
}

/// Spawn one sphere per catalogue body. The central body glows.
pub fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    catalogue: Res<BodyCatalogue>,
    time: Res<SimulationTime>,
) {
    for (index, body) in catalogue.bodies().iter().enumerate() {
        let mesh = meshes.add(Sphere::new(body.visual_radius));

        let material = materials.add(StandardMaterial {
            base_color: body.color,
            emissive: if body.is_central() {
                body.color.to_linear() * 2.0
            } else {
                LinearRgba::BLACK
            },
            ..default()
        });

        let pos = kinematics::position(body, time.current);

        commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(pos.as_vec3()),
            BodyVisual { index },
        ));
    }

    info!("Spawned {} celestial bodies", catalogue.len());
}

/// Sync body render positions from the kinematics engine each frame.
pub fn sync_body_positions(
    mut query: Query<(&mut Transform, &BodyVisual)>,
    catalogue: Res<BodyCatalogue>,
    time: Res<SimulationTime>,
) {
    for (mut transform, visual) in query.iter_mut() {
        let Some(body) = catalogue.bodies().get(visual.index) else {
            continue;
        };
        transform.translation = kinematics::position(body, time.current).as_vec3();
    }
}
