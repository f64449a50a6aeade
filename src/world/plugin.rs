//! WorldPlugin sets up the static scene the camera orbits.
use bevy::prelude::*;

use crate::world::systems::spawn_world_environment;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_world_environment);
    }
}
