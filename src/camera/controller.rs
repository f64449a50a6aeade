//! Orbit state and the controller that owns it.
//!
//! The controller is engine-agnostic apart from Bevy's math types: it keeps a
//! copy of the bound camera pose, advances it once per frame and hands the
//! result back to whichever system writes it onto the camera entity.
use std::fmt;

use bevy::prelude::*;

use super::config::OrbitSettings;

/// Failures surfaced by orbit operations. None of them is fatal: the call is
/// skipped and the previous state kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitError {
    /// The operation needs a bound camera transform and none is present.
    Precondition { operation: &'static str },
}

impl OrbitError {
    pub fn precondition(operation: &'static str) -> Self {
        Self::Precondition { operation }
    }
}

impl fmt::Display for OrbitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Precondition { operation } => {
                write!(f, "cannot {}: no camera transform is bound", operation)
            }
        }
    }
}

impl std::error::Error for OrbitError {}

/// Direction of a single rotation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    pub fn from_clockwise(clockwise: bool) -> Self {
        if clockwise {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }

    fn signed(self, step: f32) -> f32 {
        match self {
            Self::Clockwise => step,
            Self::CounterClockwise => -step,
        }
    }
}

/// Numeric orbit state. Only [`OrbitCameraController`] mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitState {
    pivot: Vec3,
    current_angle: f32,
    target_angle: f32,
    rotation_speed: f32,
    radius: f32,
    orbit_height: f32,
    is_rotating: bool,
}

impl OrbitState {
    fn from_settings(settings: &OrbitSettings) -> Self {
        Self {
            pivot: settings.pivot,
            current_angle: settings.initial_angle,
            target_angle: settings.initial_angle,
            rotation_speed: settings.rotation_speed,
            radius: horizontal_distance(settings.pivot, settings.start_position),
            orbit_height: settings.orbit_height,
            is_rotating: false,
        }
    }

    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    /// Current azimuth in degrees. Not wrapped; repeated steps keep counting.
    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    pub fn target_angle(&self) -> f32 {
        self.target_angle
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn orbit_height(&self) -> f32 {
        self.orbit_height
    }

    pub fn is_rotating(&self) -> bool {
        self.is_rotating
    }

    /// Point on the orbit circle for the current angle.
    pub fn desired_position(&self) -> Vec3 {
        let angle = self.current_angle.to_radians();
        self.pivot
            + Vec3::new(
                angle.sin() * self.radius,
                self.orbit_height,
                angle.cos() * self.radius,
            )
    }
}

/// Owns the orbit state and the bound camera pose.
#[derive(Resource, Debug, Clone)]
pub struct OrbitCameraController {
    settings: OrbitSettings,
    state: OrbitState,
    target: Option<Transform>,
}

impl Default for OrbitCameraController {
    fn default() -> Self {
        Self::new(OrbitSettings::default())
    }
}

impl OrbitCameraController {
    pub fn new(settings: OrbitSettings) -> Self {
        let state = OrbitState::from_settings(&settings);
        Self {
            settings,
            state,
            target: None,
        }
    }

    pub fn settings(&self) -> &OrbitSettings {
        &self.settings
    }

    pub fn state(&self) -> &OrbitState {
        &self.state
    }

    pub fn pivot(&self) -> Vec3 {
        self.state.pivot()
    }

    pub fn is_rotating(&self) -> bool {
        self.state.is_rotating()
    }

    /// Pose produced by the latest operation, if a target is bound.
    pub fn pose(&self) -> Option<Transform> {
        self.target
    }

    pub fn is_bound(&self) -> bool {
        self.target.is_some()
    }

    /// Attaches the camera transform the controller drives.
    pub fn bind(&mut self, pose: Transform) {
        self.target = Some(pose);
    }

    /// Places the camera and recomputes the orbit radius from the horizontal
    /// offset between `position` and `pivot`.
    pub fn initialize(
        &mut self,
        position: Vec3,
        orientation: Quat,
        pivot: Vec3,
    ) -> Result<(), OrbitError> {
        let Some(pose) = self.target.as_mut() else {
            return Err(OrbitError::precondition("initialize"));
        };

        pose.translation = position;
        pose.rotation = orientation;
        self.state.pivot = pivot;
        self.state.radius = horizontal_distance(pivot, position);
        Ok(())
    }

    /// Restores the configured start pose, facing the configured pivot.
    ///
    /// Unlike a bare `initialize`, this also puts the pivot back to its
    /// configured point and both angles back to the initial angle.
    pub fn reset_orbit(&mut self) -> Result<(), OrbitError> {
        if self.target.is_none() {
            return Err(OrbitError::precondition("reset orbit"));
        }

        let start = self.settings.start_position;
        let pivot = self.settings.pivot;
        let orientation = Transform::from_translation(start)
            .looking_at(pivot, Vec3::Y)
            .rotation;

        self.state.current_angle = self.settings.initial_angle;
        self.state.target_angle = self.settings.initial_angle;
        self.state.is_rotating = false;
        self.initialize(start, orientation, pivot)
    }

    /// Shifts the pivot relative to the camera's flattened facing.
    ///
    /// Returns `Ok(false)` without touching the pivot while a rotation is in
    /// progress.
    pub fn move_pivot(&mut self, input: Vec2) -> Result<bool, OrbitError> {
        let Some(pose) = self.target.as_ref() else {
            return Err(OrbitError::precondition("move camera"));
        };
        if self.state.is_rotating {
            return Ok(false);
        }

        let forward = flatten(pose.forward().as_vec3());
        let right = flatten(pose.right().as_vec3());

        let delta = (right * input.x + forward * input.y) * self.settings.input_weight;
        self.state.pivot += delta;
        Ok(true)
    }

    /// Queues another step onto the target angle. Steps accumulate.
    pub fn step_rotate(&mut self, direction: RotationDirection) {
        self.state.target_angle += direction.signed(self.settings.step);
        self.state.is_rotating = true;
    }

    /// Advances the orbit by one frame and returns the resulting pose.
    pub fn tick(&mut self, delta_seconds: f32) -> Result<Transform, OrbitError> {
        let Some(pose) = self.target.as_mut() else {
            return Err(OrbitError::precondition("update camera"));
        };
        let dt = if delta_seconds.is_finite() {
            delta_seconds.max(0.0)
        } else {
            0.0
        };
        let state = &mut self.state;

        if delta_angle(state.current_angle, state.target_angle).abs()
            <= self.settings.snap_tolerance
        {
            state.current_angle = state.target_angle;
            state.is_rotating = false;
        } else {
            state.current_angle = move_towards_angle(
                state.current_angle,
                state.target_angle,
                state.rotation_speed * dt,
            );
        }

        let desired = state.desired_position();
        pose.translation = if state.is_rotating {
            let t = (dt * self.settings.camera_speed).clamp(0.0, 1.0);
            pose.translation.lerp(desired, t)
        } else {
            desired
        };
        pose.look_at(state.pivot, Vec3::Y);

        Ok(*pose)
    }
}

fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x - b.x, a.z - b.z).length()
}

fn flatten(axis: Vec3) -> Vec3 {
    Vec3::new(axis.x, 0.0, axis.z).normalize_or_zero()
}

/// Shortest signed difference from `current` to `target`, in `(-180, 180]`.
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Moves `current` toward `target` by at most `max_delta` degrees along the
/// shortest arc. Lands exactly on `target` once it is within reach.
pub fn move_towards_angle(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = delta_angle(current, target);
    if delta.abs() <= max_delta {
        return target;
    }
    current + delta.signum() * max_delta
}
