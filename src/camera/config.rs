//! Orbit camera tuning loaded from `config/camera.toml`.
use bevy::prelude::*;
use serde::Deserialize;

use crate::core::config::{finite_at_least, load_toml_or_default};

const CONFIG_PATH: &str = "config/camera.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawCameraConfig {
    #[serde(default)]
    orbit: RawOrbitSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawOrbitSection {
    initial_angle_degrees: f32,
    rotation_speed_degrees: f32,
    orbit_height: f32,
    camera_speed: f32,
    input_weight: f32,
    step_degrees: f32,
    snap_tolerance_degrees: f32,
    start_position: [f32; 3],
    pivot: [f32; 3],
}

impl Default for RawOrbitSection {
    fn default() -> Self {
        Self {
            initial_angle_degrees: 45.0,
            rotation_speed_degrees: 90.0,
            orbit_height: 8.0,
            camera_speed: 5.0,
            input_weight: 0.1,
            step_degrees: 90.0,
            snap_tolerance_degrees: 0.01,
            start_position: [10.0, 8.0, 10.0],
            pivot: [0.0, 0.0, 0.0],
        }
    }
}

/// Tunable parameters for the orbit camera.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitSettings {
    /// Azimuth (degrees) the camera starts at and resets to.
    pub initial_angle: f32,
    /// Angular speed (degrees/second) while easing toward a stepped target.
    pub rotation_speed: f32,
    /// Height above the pivot.
    pub orbit_height: f32,
    /// Positional easing rate used only while a rotation is in progress.
    pub camera_speed: f32,
    /// Scale applied to raw move input before it shifts the pivot.
    pub input_weight: f32,
    /// Size of a single rotation step (degrees).
    pub step: f32,
    /// Angular distance under which the current angle snaps to the target.
    pub snap_tolerance: f32,
    pub start_position: Vec3,
    pub pivot: Vec3,
}

impl OrbitSettings {
    pub fn load_or_default() -> Self {
        load_toml_or_default::<RawCameraConfig>(CONFIG_PATH).into()
    }

    #[cfg(test)]
    fn from_toml(data: &str) -> Self {
        crate::core::config::parse_toml_or_default::<RawCameraConfig>("inline", data).into()
    }
}

impl Default for OrbitSettings {
    fn default() -> Self {
        RawCameraConfig::default().into()
    }
}

impl From<RawCameraConfig> for OrbitSettings {
    fn from(value: RawCameraConfig) -> Self {
        let orbit = value.orbit;
        let defaults = RawOrbitSection::default();

        let start_position = vec3_or(orbit.start_position, defaults.start_position);
        let pivot = vec3_or(orbit.pivot, defaults.pivot);

        Self {
            initial_angle: if orbit.initial_angle_degrees.is_finite() {
                orbit.initial_angle_degrees
            } else {
                defaults.initial_angle_degrees
            },
            rotation_speed: finite_at_least(
                orbit.rotation_speed_degrees,
                0.0,
                defaults.rotation_speed_degrees,
            ),
            orbit_height: if orbit.orbit_height.is_finite() {
                orbit.orbit_height
            } else {
                defaults.orbit_height
            },
            camera_speed: finite_at_least(orbit.camera_speed, 0.0, defaults.camera_speed),
            input_weight: finite_at_least(orbit.input_weight, 0.0, defaults.input_weight),
            step: finite_at_least(orbit.step_degrees, 0.0, defaults.step_degrees),
            snap_tolerance: if orbit.snap_tolerance_degrees.is_finite()
                && orbit.snap_tolerance_degrees > 0.0
            {
                orbit.snap_tolerance_degrees
            } else {
                defaults.snap_tolerance_degrees
            },
            start_position,
            pivot,
        }
    }
}

fn vec3_or(value: [f32; 3], fallback: [f32; 3]) -> Vec3 {
    if value.iter().all(|component| component.is_finite()) {
        Vec3::from_array(value)
    } else {
        Vec3::from_array(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_rig() {
        let settings = OrbitSettings::default();
        assert_eq!(settings.initial_angle, 45.0);
        assert_eq!(settings.rotation_speed, 90.0);
        assert_eq!(settings.orbit_height, 8.0);
        assert_eq!(settings.camera_speed, 5.0);
        assert_eq!(settings.input_weight, 0.1);
        assert_eq!(settings.step, 90.0);
        assert_eq!(settings.snap_tolerance, 0.01);
        assert_eq!(settings.start_position, Vec3::new(10.0, 8.0, 10.0));
        assert_eq!(settings.pivot, Vec3::ZERO);
    }

    #[test]
    fn overrides_apply_and_invalid_values_fall_back() {
        let settings = OrbitSettings::from_toml(
            r#"
            [orbit]
            rotation_speed_degrees = 180.0
            camera_speed = -2.0
            snap_tolerance_degrees = 0.0
            pivot = [1.0, 0.0, -3.0]
            "#,
        );

        assert_eq!(settings.rotation_speed, 180.0);
        assert_eq!(settings.camera_speed, 5.0);
        assert_eq!(settings.snap_tolerance, 0.01);
        assert_eq!(settings.pivot, Vec3::new(1.0, 0.0, -3.0));
        assert_eq!(settings.orbit_height, 8.0);
    }
}
