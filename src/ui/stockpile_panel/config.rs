// src/ui/stockpile_panel/config.rs
//
// Panel settings loaded from config/stockpile.toml. These replace the
// inspector fields: name, initial amount, capacity and per-click increment.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::config::load_toml_or_default;
use crate::economy::StockpileSettings;

const CONFIG_PATH: &str = "config/stockpile.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawPanelConfig {
    #[serde(default)]
    stockpile: RawStockpileSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawStockpileSection {
    name: String,
    amount: u32,
    capacity: u32,
    increment: u32,
}

impl Default for RawStockpileSection {
    fn default() -> Self {
        Self {
            name: "New Resource".to_string(),
            amount: 10,
            capacity: 100,
            increment: 5,
        }
    }
}

/// Settings applied by the "create or update" flow of the stockpile panel.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct StockpilePanelSettings {
    pub name: String,
    pub amount: u32,
    pub capacity: u32,
    /// Amount added per button press.
    pub increment: u32,
}

impl StockpilePanelSettings {
    pub fn load_or_default() -> Self {
        load_toml_or_default::<RawPanelConfig>(CONFIG_PATH).into()
    }

    pub fn stockpile(&self) -> StockpileSettings {
        StockpileSettings {
            name: self.name.clone(),
            amount: self.amount,
            capacity: self.capacity,
        }
    }
}

impl Default for StockpilePanelSettings {
    fn default() -> Self {
        RawPanelConfig::default().into()
    }
}

impl From<RawPanelConfig> for StockpilePanelSettings {
    fn from(value: RawPanelConfig) -> Self {
        let section = value.stockpile;
        let name = match section.name.trim() {
            "" => RawStockpileSection::default().name,
            trimmed => trimmed.to_string(),
        };

        Self {
            name,
            amount: section.amount,
            capacity: section.capacity,
            increment: section.increment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::parse_toml_or_default;

    #[test]
    fn defaults_mirror_panel_fields() {
        let settings = StockpilePanelSettings::default();
        assert_eq!(settings.name, "New Resource");
        assert_eq!(settings.amount, 10);
        assert_eq!(settings.capacity, 100);
        assert_eq!(settings.increment, 5);
    }

    #[test]
    fn blank_name_falls_back_and_overrides_apply() {
        let raw: RawPanelConfig = parse_toml_or_default(
            "inline",
            r#"
            [stockpile]
            name = "   "
            capacity = 40
            increment = 7
            "#,
        );
        let settings = StockpilePanelSettings::from(raw);
        assert_eq!(settings.name, "New Resource");
        assert_eq!(settings.capacity, 40);
        assert_eq!(settings.increment, 7);
        assert_eq!(settings.stockpile().amount, 10);
    }
}
