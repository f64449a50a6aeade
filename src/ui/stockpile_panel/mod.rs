// src/ui/stockpile_panel/mod.rs
//
// Stockpile panel: a button that feeds a bounded stockpile and a label that
// shows its amount.

pub mod components;
pub mod config;
pub mod plugin;
pub mod systems;

pub use plugin::UiPlugin;
