// src/ui/stockpile_panel/plugin.rs
//
// UiPlugin coordinates the stockpile panel systems and settings.

use bevy::prelude::*;

use super::config::StockpilePanelSettings;
use super::systems::{
    handle_stockpile_button_press, refresh_stockpile_labels, reload_stockpile_settings,
    spawn_stockpile_panel,
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        let settings = StockpilePanelSettings::load_or_default();
        info!(
            "Stockpile panel configured: {} {}/{} (+{} per press)",
            settings.name, settings.amount, settings.capacity, settings.increment
        );

        app.insert_resource(settings)
            .add_systems(Startup, spawn_stockpile_panel)
            .add_systems(
                Update,
                (
                    reload_stockpile_settings,
                    handle_stockpile_button_press.after(reload_stockpile_settings),
                    refresh_stockpile_labels.after(handle_stockpile_button_press),
                ),
            );
    }
}
