//! Systems for the world module.
use bevy::{math::primitives::Plane3d, prelude::*};

use crate::world::components::Landmark;

const GROUND_SCALE: f32 = 100.0;
const LANDMARK_SIZE: f32 = 1.5;

/// Corner blocks, each with its own colour, so a quarter-turn is obvious.
const LANDMARKS: [(Vec3, [u8; 3]); 4] = [
    (Vec3::new(6.0, 0.75, 6.0), [200, 80, 70]),
    (Vec3::new(-6.0, 0.75, 6.0), [80, 160, 210]),
    (Vec3::new(-6.0, 0.75, -6.0), [220, 200, 90]),
    (Vec3::new(6.0, 0.75, -6.0), [120, 190, 110]),
];

/// Spawns the ground plane, a sun and the landmark blocks.
pub fn spawn_world_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Mesh::from(Plane3d::default()))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(90, 140, 90),
            perceptual_roughness: 0.9,
            metallic: 0.0,
            ..default()
        })),
        Transform::from_scale(Vec3::splat(GROUND_SCALE)),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 20_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(16.0, 32.0, 16.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let cube = meshes.add(Mesh::from(Cuboid::new(
        LANDMARK_SIZE,
        LANDMARK_SIZE,
        LANDMARK_SIZE,
    )));
    for (index, (position, [r, g, b])) in LANDMARKS.into_iter().enumerate() {
        commands.spawn((
            Mesh3d(cube.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb_u8(r, g, b),
                perceptual_roughness: 0.6,
                ..default()
            })),
            Transform::from_translation(position),
            Landmark,
            Name::new(format!("Landmark {}", index)),
        ));
    }
}
