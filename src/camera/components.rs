//! Components used by the camera module.
use bevy::prelude::*;

/// Marker for the camera entity driven by the orbit controller.
#[derive(Component, Debug, Default)]
pub struct OrbitCameraRig;
