//! Systems for the camera module.
use bevy::log::warn_once;
use bevy::prelude::*;

use crate::camera::{components::OrbitCameraRig, controller::OrbitCameraController};
use crate::core::FrameClock;

/// Spawns the orbit camera and binds it to the controller.
pub fn spawn_orbit_camera(mut commands: Commands, mut controller: ResMut<OrbitCameraController>) {
    let start = controller.settings().start_position;
    let pivot = controller.settings().pivot;
    let transform = Transform::from_translation(start).looking_at(pivot, Vec3::Y);

    commands.spawn((
        Camera3d::default(),
        transform,
        OrbitCameraRig,
        Name::new("Orbit Camera"),
    ));

    controller.bind(transform);
    if let Err(err) = controller.reset_orbit() {
        warn!("Orbit camera spawned but could not be reset: {}", err);
        return;
    }

    info!(
        "Orbit camera spawned at {:?} (radius {:.2}, height {:.2})",
        start,
        controller.state().radius(),
        controller.state().orbit_height()
    );
}

/// Advances the orbit controller by the frame clock delta.
pub fn tick_orbit_camera(mut controller: ResMut<OrbitCameraController>, clock: Res<FrameClock>) {
    if let Err(err) = controller.tick(clock.delta_secs()) {
        warn_once!("{}", err);
    }
}

/// Writes the controller pose onto every orbit camera entity.
pub fn apply_orbit_camera_pose(
    controller: Res<OrbitCameraController>,
    mut cameras: Query<&mut Transform, With<OrbitCameraRig>>,
) {
    let Some(pose) = controller.pose() else {
        return;
    };

    for mut transform in cameras.iter_mut() {
        transform.translation = pose.translation;
        transform.rotation = pose.rotation;
    }
}
