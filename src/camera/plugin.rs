//! CameraPlugin wires the orbit controller into the frame loop.
use bevy::prelude::*;

use crate::{
    camera::{
        config::OrbitSettings,
        controller::OrbitCameraController,
        systems::{apply_orbit_camera_pose, spawn_orbit_camera, tick_orbit_camera},
    },
    core::FrameClockSet,
};

/// Ordering of the per-frame camera work: commands first, then the tick, then
/// the write-back onto the camera entity.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrbitCameraSet {
    Input,
    Tick,
    Apply,
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        let settings = OrbitSettings::load_or_default();
        info!(
            "Orbit camera configured: start angle {:.1}, step {:.1} deg at {:.1} deg/s, height {:.2}",
            settings.initial_angle, settings.step, settings.rotation_speed, settings.orbit_height
        );

        app.insert_resource(OrbitCameraController::new(settings))
            .configure_sets(
                Update,
                (
                    OrbitCameraSet::Input,
                    OrbitCameraSet::Tick,
                    OrbitCameraSet::Apply,
                )
                    .chain()
                    .after(FrameClockSet),
            )
            .add_systems(Startup, spawn_orbit_camera)
            .add_systems(
                Update,
                (
                    tick_orbit_camera.in_set(OrbitCameraSet::Tick),
                    apply_orbit_camera_pose.in_set(OrbitCameraSet::Apply),
                ),
            );
    }
}
