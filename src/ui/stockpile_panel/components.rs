// src/ui/stockpile_panel/components.rs
//
// Button component that owns a stockpile and the interaction feeding it.

use bevy::prelude::*;

use crate::economy::{
    InteractionBinding, InteractionSettings, Stockpile, StockpileSettings,
};

use super::config::StockpilePanelSettings;

const NO_STOCKPILE_LABEL: &str = "No Resource";

/// A clickable button that adds to its stockpile through one interaction.
#[derive(Component, Debug)]
pub struct StockpileButton {
    /// Label logged as the interaction source.
    source: String,
    stockpile: Option<Stockpile>,
    interaction: Option<InteractionBinding>,
}

impl StockpileButton {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            stockpile: None,
            interaction: None,
        }
    }

    /// Name of the stockpile, or a placeholder when none exists.
    pub fn name(&self) -> &str {
        self.stockpile()
            .map(Stockpile::name)
            .unwrap_or(NO_STOCKPILE_LABEL)
    }

    /// Current amount; zero when no stockpile exists.
    pub fn amount(&self) -> u32 {
        self.stockpile().map(Stockpile::get).unwrap_or(0)
    }

    pub fn stockpile(&self) -> Option<&Stockpile> {
        self.stockpile.as_ref()
    }

    pub fn has_interaction(&self) -> bool {
        self.interaction.is_some()
    }

    /// Creates the stockpile. Returns `false` if one already exists.
    pub fn create_stockpile(&mut self, settings: StockpileSettings) -> bool {
        if self.stockpile.is_some() {
            return false;
        }
        self.stockpile = Some(Stockpile::from_settings(settings));
        true
    }

    /// Updates amount then capacity of an existing stockpile with the same name.
    pub fn update_stockpile(&mut self, settings: &StockpileSettings) -> bool {
        let Some(stockpile) = self.stockpile.as_mut() else {
            return false;
        };
        if stockpile.name() != settings.name {
            return false;
        }

        // `set` only rejects negatives, which a u32 amount cannot be.
        let _ = stockpile.set(i64::from(settings.amount));
        stockpile.set_capacity(settings.capacity);
        true
    }

    /// Subscribes the press action. Only one interaction per button, and only
    /// once a stockpile exists to receive it.
    pub fn create_interaction(&mut self, increment: u32) -> bool {
        if self.has_interaction() {
            return false;
        }
        let Some(stockpile) = self.stockpile.as_ref() else {
            return false;
        };

        let settings = InteractionSettings {
            source: Some(self.source.clone()),
            receiver: stockpile.name().to_string(),
        };
        match InteractionBinding::new(settings, move |target| {
            if let Err(err) = target.add(i64::from(increment)) {
                debug!("Interaction increment rejected: {}", err);
            }
        }) {
            Ok(binding) => {
                self.interaction = Some(binding);
                true
            }
            Err(err) => {
                warn!("Cannot subscribe {}: {}", self.source, err);
                false
            }
        }
    }

    /// Create-or-update followed by ensuring the interaction exists.
    pub fn apply_panel_settings(&mut self, settings: &StockpilePanelSettings) {
        let stockpile_settings = settings.stockpile();
        if self.create_stockpile(stockpile_settings.clone()) {
            info!("Stockpile '{}' created", settings.name);
        } else if self.update_stockpile(&stockpile_settings) {
            info!("Stockpile '{}' updated", settings.name);
        } else {
            warn!(
                "{} already holds '{}'; settings for '{}' ignored",
                self.source,
                self.name(),
                settings.name
            );
        }

        self.create_interaction(settings.increment);
    }

    /// Runs the subscribed interaction once. Returns `false` when nothing is
    /// subscribed.
    pub fn press(&mut self) -> bool {
        match (self.interaction.as_ref(), self.stockpile.as_mut()) {
            (Some(interaction), Some(stockpile)) => {
                interaction.invoke_once(stockpile);
                true
            }
            _ => false,
        }
    }

    /// Display text for the amount label.
    pub fn summary(&self) -> String {
        match self.stockpile.as_ref() {
            Some(stockpile) => format!(
                "Current {} Amount: {}/{}",
                stockpile.name(),
                stockpile.get(),
                stockpile.capacity()
            ),
            None => format!("Current {} Amount: 0", NO_STOCKPILE_LABEL),
        }
    }
}

/// Text entity mirroring the amount of a [`StockpileButton`].
#[derive(Component, Debug)]
pub struct StockpileLabel {
    pub button: Entity,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(name: &str, amount: u32, capacity: u32) -> StockpileSettings {
        StockpileSettings {
            name: name.to_string(),
            amount,
            capacity,
        }
    }

    #[test]
    fn empty_button_reports_placeholders() {
        let mut button = StockpileButton::new("Button");
        assert_eq!(button.name(), "No Resource");
        assert_eq!(button.amount(), 0);
        assert!(!button.press());
        assert!(!button.create_interaction(5));
        assert!(button.summary().contains("No Resource"));
    }

    #[test]
    fn stockpile_is_created_once_and_updated_by_name() {
        let mut button = StockpileButton::new("Button");
        assert!(button.create_stockpile(settings("Gold", 10, 100)));
        assert!(!button.create_stockpile(settings("Gold", 0, 5)));
        assert_eq!(button.amount(), 10);

        assert!(button.update_stockpile(&settings("Gold", 60, 50)));
        assert_eq!(button.amount(), 50);
        assert_eq!(button.stockpile().unwrap().capacity(), 50);

        assert!(!button.update_stockpile(&settings("Iron", 1, 1)));
        assert_eq!(button.name(), "Gold");
    }

    #[test]
    fn one_interaction_per_button() {
        let mut button = StockpileButton::new("Button");
        button.create_stockpile(settings("Gold", 0, 100));
        assert!(button.create_interaction(5));
        assert!(!button.create_interaction(50));

        assert!(button.press());
        assert_eq!(button.amount(), 5);
        assert!(button.press());
        assert_eq!(button.amount(), 10);
    }

    #[test]
    fn apply_settings_creates_then_updates() {
        let mut button = StockpileButton::new("Button");
        let mut panel = StockpilePanelSettings::default();

        button.apply_panel_settings(&panel);
        assert_eq!(button.name(), "New Resource");
        assert_eq!(button.amount(), 10);
        assert!(button.has_interaction());

        panel.amount = 30;
        panel.capacity = 20;
        button.apply_panel_settings(&panel);
        assert_eq!(button.amount(), 20);
        assert_eq!(button.summary(), "Current New Resource Amount: 20/20");

        assert!(button.press());
        assert_eq!(button.amount(), 20);
    }
}
