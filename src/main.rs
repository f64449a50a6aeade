use bevy::prelude::*;

mod camera;
mod core;
mod economy;
mod input;
mod ui;
mod world;

use crate::{
    camera::CameraPlugin, core::CorePlugin, input::CameraInputPlugin, ui::UiPlugin,
    world::WorldPlugin,
};

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins,
            CorePlugin,
            WorldPlugin,
            CameraPlugin,
            CameraInputPlugin, // After CameraPlugin so OrbitCameraSet is configured
            UiPlugin,
        ))
        .run();
}
