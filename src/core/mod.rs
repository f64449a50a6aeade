//! Core module hosting the frame clock and shared config loading.
pub mod config;
pub mod plugin;

pub use plugin::{CorePlugin, FrameClock, FrameClockSet};
