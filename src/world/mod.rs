//! World module housing the static environment.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::WorldPlugin;
