//! Background rendering: starfield and scene lighting.

use bevy::prelude::*;
use rand::Rng;

/// Spawn a starfield of small emissive spheres around the system.
pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });

    let star_mesh = meshes.add(Sphere::new(0.4));

    let mut rng = rand::thread_rng();

    for _ in 0..300 {
        // Random direction on a distant shell so stars surround the scene.
        let theta = rng.gen_range(0.0..std::f32::consts::TAU);
        let phi = rng.gen_range(0.0..std::f32::consts::PI);
        let radius = rng.gen_range(400.0..800.0f32);
        let (x, y, z) = (
            radius * phi.sin() * theta.cos(),
            radius * phi.cos(),
            radius * phi.sin() * theta.sin(),
        );
        let scale = rng.gen_range(0.5..1.5);

        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_xyz(x, y, z).with_scale(Vec3::splat(scale)),
        ));
    }

    info!("Spawned 300 background stars");
}

/// Spawn lighting for the scene.
pub fn spawn_lighting(mut commands: Commands) {
    // Ambient light so the dark sides of planets stay visible.
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 120.0,
        ..default()
    });

    // Point light at the origin: the central body lights the system.
    commands.spawn((
        PointLight {
            intensity: 2.0e7,
            range: 400.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
}
