//! Key bindings and per-frame input sampling for the orbit camera.
use bevy::prelude::*;

use crate::camera::controller::RotationDirection;

/// Keys that feed the camera input bridge.
#[derive(Resource, Debug, Clone)]
pub struct CameraInputBindings {
    pub forward: Vec<KeyCode>,
    pub back: Vec<KeyCode>,
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub rotate_left: KeyCode,
    pub rotate_right: KeyCode,
    pub toggle: KeyCode,
}

impl Default for CameraInputBindings {
    fn default() -> Self {
        Self {
            forward: vec![KeyCode::KeyW, KeyCode::ArrowUp],
            back: vec![KeyCode::KeyS, KeyCode::ArrowDown],
            left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            rotate_left: KeyCode::KeyQ,
            rotate_right: KeyCode::KeyE,
            toggle: KeyCode::F2,
        }
    }
}

/// Whether the bridge currently forwards input to the camera.
#[derive(Resource, Debug, Clone, Copy)]
pub struct CameraInputState {
    pub enabled: bool,
}

impl Default for CameraInputState {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Input sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraInputFrame {
    /// Raw, unnormalised move vector (x = right, y = forward).
    pub move_vector: Vec2,
    pub rotate_left: bool,
    pub rotate_right: bool,
}

impl CameraInputFrame {
    pub fn sample(keyboard: &ButtonInput<KeyCode>, bindings: &CameraInputBindings) -> Self {
        let axis = |positive: &[KeyCode], negative: &[KeyCode]| -> f32 {
            let mut value = 0.0;
            if keyboard.any_pressed(positive.iter().copied()) {
                value += 1.0;
            }
            if keyboard.any_pressed(negative.iter().copied()) {
                value -= 1.0;
            }
            value
        };

        Self {
            move_vector: Vec2::new(
                axis(&bindings.right, &bindings.left),
                axis(&bindings.forward, &bindings.back),
            ),
            rotate_left: keyboard.just_pressed(bindings.rotate_left),
            rotate_right: keyboard.just_pressed(bindings.rotate_right),
        }
    }
}

/// A single call into the orbit controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    Move(Vec2),
    StepRotate(RotationDirection),
}

/// Movement wins over rotation within a frame; rotate-left wins over
/// rotate-right when both fire.
pub fn resolve_camera_command(frame: CameraInputFrame) -> Option<CameraCommand> {
    if frame.move_vector != Vec2::ZERO {
        return Some(CameraCommand::Move(frame.move_vector));
    }
    if frame.rotate_left || frame.rotate_right {
        return Some(CameraCommand::StepRotate(RotationDirection::from_clockwise(
            !frame.rotate_left,
        )));
    }
    None
}
