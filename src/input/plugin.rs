//! CameraInputPlugin wires keyboard sampling ahead of the orbit tick.
use bevy::prelude::*;

use crate::{
    camera::OrbitCameraSet,
    input::{
        bindings::{CameraInputBindings, CameraInputState},
        systems::{camera_input_enabled, drive_orbit_camera, toggle_camera_input},
    },
};

pub struct CameraInputPlugin;

impl Plugin for CameraInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraInputBindings>()
            .init_resource::<CameraInputState>()
            .add_systems(
                Update,
                (
                    toggle_camera_input,
                    drive_orbit_camera
                        .run_if(camera_input_enabled)
                        .after(toggle_camera_input),
                )
                    .in_set(OrbitCameraSet::Input),
            );
    }
}
