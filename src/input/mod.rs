//! Input module translating keyboard state into orbit camera commands.
pub mod bindings;
pub mod plugin;
pub mod systems;

pub use plugin::CameraInputPlugin;
