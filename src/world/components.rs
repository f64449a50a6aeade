//! Components used by the world module.
use bevy::prelude::*;

/// Static block placed around the origin so camera motion is readable.
#[derive(Component, Debug, Clone, Copy)]
pub struct Landmark;
