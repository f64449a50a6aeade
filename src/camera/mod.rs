//! Camera module housing the orbit controller and its systems.
pub mod components;
pub mod config;
pub mod controller;
pub mod plugin;
pub mod systems;

pub use plugin::{CameraPlugin, OrbitCameraSet};
