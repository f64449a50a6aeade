// src/ui/mod.rs
//
// UI module providing screen-space panels.
//
// Current features:
// - Stockpile panel (button feeding a stockpile, amount label, F5 reload)

pub mod stockpile_panel;

pub use stockpile_panel::UiPlugin;
