//! CorePlugin wires the frame clock that feeds every per-frame controller.
use bevy::prelude::*;
#[cfg(feature = "core_debug")]
use bevy::time::TimerMode;
use serde::Deserialize;
use std::time::Duration;

use crate::core::config::load_toml_or_default;

const CONFIG_PATH: &str = "config/clock.toml";

const DEFAULT_TIME_SCALE: f32 = 1.0;
const MIN_TIME_SCALE: f32 = 0.0;
/// Longest step handed to controllers; larger hitches are truncated.
const DEFAULT_MAX_DELTA_SECS: f32 = 0.25;

#[cfg(feature = "core_debug")]
#[derive(Resource)]
struct DebugTickTimer {
    timer: Timer,
}

#[cfg(feature = "core_debug")]
impl Default for DebugTickTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

/// Per-frame elapsed time after scaling and clamping.
///
/// The orbit controller never reads Bevy's `Time` directly; it consumes
/// [`FrameClock::delta_secs`], which is always finite and non-negative.
#[derive(Resource, Debug)]
pub struct FrameClock {
    time_scale: f32,
    max_delta: Duration,
    last_real_delta: Duration,
    last_delta: Duration,
    frame: u64,
}

impl FrameClock {
    pub fn new(time_scale: f32, max_delta_secs: f32) -> Self {
        Self {
            time_scale: sanitize_scale(time_scale),
            max_delta: Duration::from_secs_f32(sanitize_max_delta(max_delta_secs)),
            last_real_delta: Duration::ZERO,
            last_delta: Duration::ZERO,
            frame: 0,
        }
    }

    pub fn from_settings(settings: &ClockSettings) -> Self {
        Self::new(settings.time_scale, settings.max_delta_secs)
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Last real (unscaled) delta reported by Bevy's Time resource.
    pub fn last_real_delta(&self) -> Duration {
        self.last_real_delta
    }

    /// Seconds to advance controllers by this frame.
    pub fn delta_secs(&self) -> f32 {
        self.last_delta.as_secs_f32()
    }

    /// Number of frames ticked since startup.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn tick(&mut self, real_delta: Duration) {
        self.last_real_delta = real_delta;
        self.last_delta = real_delta.mul_f32(self.time_scale).min(self.max_delta);
        self.frame = self.frame.saturating_add(1);
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_SCALE, DEFAULT_MAX_DELTA_SECS)
    }
}

fn sanitize_scale(scale: f32) -> f32 {
    if scale.is_finite() {
        scale.max(MIN_TIME_SCALE)
    } else {
        DEFAULT_TIME_SCALE
    }
}

fn sanitize_max_delta(max_delta_secs: f32) -> f32 {
    if max_delta_secs.is_finite() && max_delta_secs > 0.0 {
        max_delta_secs
    } else {
        DEFAULT_MAX_DELTA_SECS
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
struct RawClockConfig {
    #[serde(default)]
    clock: RawClockSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawClockSection {
    time_scale: f32,
    max_delta_secs: f32,
}

impl Default for RawClockSection {
    fn default() -> Self {
        Self {
            time_scale: DEFAULT_TIME_SCALE,
            max_delta_secs: DEFAULT_MAX_DELTA_SECS,
        }
    }
}

/// Frame clock tuning loaded from `config/clock.toml`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockSettings {
    /// Multiplier on real frame time. Zero freezes every controller in place.
    pub time_scale: f32,
    pub max_delta_secs: f32,
}

impl ClockSettings {
    pub fn load_or_default() -> Self {
        load_toml_or_default::<RawClockConfig>(CONFIG_PATH).into()
    }
}

impl From<RawClockConfig> for ClockSettings {
    fn from(value: RawClockConfig) -> Self {
        Self {
            time_scale: sanitize_scale(value.clock.time_scale),
            max_delta_secs: sanitize_max_delta(value.clock.max_delta_secs),
        }
    }
}

/// Registers the frame clock and its update system.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorePlugin;

/// System set containing the clock update; per-frame controllers run after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameClockSet;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let settings = ClockSettings::load_or_default();
        info!(
            "Frame clock configured: time scale {:.3}, max step {:.3}s",
            settings.time_scale, settings.max_delta_secs
        );

        app.insert_resource(FrameClock::from_settings(&settings))
            .add_systems(Startup, log_startup_clock)
            .add_systems(Update, update_frame_clock.in_set(FrameClockSet));

        #[cfg(feature = "core_debug")]
        {
            app.insert_resource(DebugTickTimer::default())
                .add_systems(Update, log_frame_clock.after(FrameClockSet));
        }
    }
}

fn update_frame_clock(mut clock: ResMut<FrameClock>, time: Res<Time>) {
    clock.tick(time.delta());
    if clock.last_real_delta().mul_f32(clock.time_scale()) > clock.max_delta {
        debug!(
            "Frame {} hitch: real dt {:.3}s truncated to {:.3}s",
            clock.frame(),
            clock.last_real_delta().as_secs_f32(),
            clock.delta_secs()
        );
    }
}

fn log_startup_clock(clock: Res<FrameClock>) {
    info!(
        "CorePlugin initialised with time scale: {:.3}",
        clock.time_scale()
    );
}

#[cfg(feature = "core_debug")]
fn log_frame_clock(mut timer: ResMut<DebugTickTimer>, clock: Res<FrameClock>) {
    if timer.timer.tick(clock.last_real_delta()).just_finished() {
        info!(
            target: "core_debug",
            "frame {} | scale: {:.3} | real dt: {:.4}s | controller dt: {:.4}s",
            clock.frame(),
            clock.time_scale(),
            clock.last_real_delta().as_secs_f32(),
            clock.delta_secs(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_scales_delta_with_multiplier() {
        let mut clock = FrameClock::new(2.0, 1.0);
        clock.tick(Duration::from_millis(100));

        assert_eq!(clock.time_scale(), 2.0);
        assert_eq!(clock.last_real_delta(), Duration::from_millis(100));
        assert!((clock.delta_secs() - 0.2).abs() < 1e-6);
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn clock_truncates_long_frames() {
        let mut clock = FrameClock::new(1.0, 0.1);
        clock.tick(Duration::from_secs(3));
        assert!((clock.delta_secs() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn clock_rejects_negative_and_nan_scales() {
        let clock = FrameClock::new(-4.0, 0.25);
        assert_eq!(clock.time_scale(), 0.0);

        let clock = FrameClock::new(f32::NAN, 0.25);
        assert_eq!(clock.time_scale(), DEFAULT_TIME_SCALE);

        let mut frozen = FrameClock::new(0.0, 0.25);
        frozen.tick(Duration::from_millis(16));
        assert_eq!(frozen.delta_secs(), 0.0);
    }

    #[test]
    fn clock_settings_parse_and_drive_the_clock() {
        let raw: RawClockConfig = crate::core::config::parse_toml_or_default(
            "inline",
            r#"
            [clock]
            time_scale = 0.5
            max_delta_secs = -1.0
            "#,
        );
        let settings = ClockSettings::from(raw);
        assert_eq!(settings.time_scale, 0.5);
        assert_eq!(settings.max_delta_secs, DEFAULT_MAX_DELTA_SECS);

        let mut clock = FrameClock::from_settings(&settings);
        clock.tick(Duration::from_millis(100));
        assert!((clock.delta_secs() - 0.05).abs() < 1e-6);

        clock.tick(Duration::from_secs(2));
        assert!((clock.delta_secs() - DEFAULT_MAX_DELTA_SECS).abs() < 1e-6);
    }
}
