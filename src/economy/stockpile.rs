//! Bounded resource counter.
use std::fmt;

use bevy::log::{info, warn};

const DEFAULT_NAME: &str = "Default";
const DEFAULT_CAPACITY: u32 = 100;

/// Construction parameters for a [`Stockpile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockpileSettings {
    pub name: String,
    pub amount: u32,
    pub capacity: u32,
}

impl Default for StockpileSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            amount: 0,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockpileError {
    /// A negative amount was passed to `add` or `set`.
    InvalidArgument { stockpile: String, value: i64 },
}

impl fmt::Display for StockpileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { stockpile, value } => write!(
                f,
                "[{}] rejected negative value {}; operation ignored",
                stockpile, value
            ),
        }
    }
}

impl std::error::Error for StockpileError {}

/// Named amount of a good, always kept within `0..=capacity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stockpile {
    name: String,
    amount: u32,
    capacity: u32,
}

impl Stockpile {
    pub fn from_settings(settings: StockpileSettings) -> Self {
        Self {
            amount: settings.amount.min(settings.capacity),
            name: settings.name,
            capacity: settings.capacity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self) -> u32 {
        self.amount
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Changes the capacity, trimming the amount if it no longer fits.
    pub fn set_capacity(&mut self, capacity: u32) {
        self.capacity = capacity;
        self.amount = self.amount.min(capacity);
    }

    /// Adds `value`; overflow past capacity is discarded.
    pub fn add(&mut self, value: i64) -> Result<u32, StockpileError> {
        let value = self.non_negative(value)?;
        self.amount = clamp_to(u64::from(self.amount).saturating_add(value), self.capacity);
        info!("[{}] New amount: {}/{}", self.name, self.amount, self.capacity);
        Ok(self.amount)
    }

    pub fn set(&mut self, value: i64) -> Result<u32, StockpileError> {
        let value = self.non_negative(value)?;
        self.amount = clamp_to(value, self.capacity);
        Ok(self.amount)
    }

    fn non_negative(&self, value: i64) -> Result<u64, StockpileError> {
        u64::try_from(value).map_err(|_| {
            let err = StockpileError::InvalidArgument {
                stockpile: self.name.clone(),
                value,
            };
            warn!("{}", err);
            err
        })
    }
}

impl Default for Stockpile {
    fn default() -> Self {
        Self::from_settings(StockpileSettings::default())
    }
}

fn clamp_to(value: u64, capacity: u32) -> u32 {
    value.min(u64::from(capacity)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wood(amount: u32, capacity: u32) -> Stockpile {
        Stockpile::from_settings(StockpileSettings {
            name: "Wood".to_string(),
            amount,
            capacity,
        })
    }

    #[test]
    fn defaults_match_plain_settings() {
        let stockpile = Stockpile::default();
        assert_eq!(stockpile.name(), "Default");
        assert_eq!(stockpile.get(), 0);
        assert_eq!(stockpile.capacity(), 100);
    }

    #[test]
    fn add_clamps_to_capacity() {
        let mut stockpile = wood(95, 100);
        assert_eq!(stockpile.add(3), Ok(98));
        assert_eq!(stockpile.add(10), Ok(100));
        assert_eq!(stockpile.add(i64::MAX), Ok(100));
        assert_eq!(stockpile.add(0), Ok(100));
    }

    #[test]
    fn negative_values_are_rejected() {
        let mut stockpile = wood(10, 100);
        let err = stockpile.add(-4).unwrap_err();
        assert_eq!(
            err,
            StockpileError::InvalidArgument {
                stockpile: "Wood".to_string(),
                value: -4,
            }
        );
        assert!(err.to_string().contains("[Wood]"));
        assert!(stockpile.set(-1).is_err());
        assert_eq!(stockpile.get(), 10);
    }

    #[test]
    fn set_and_construction_respect_capacity() {
        let mut stockpile = wood(250, 100);
        assert_eq!(stockpile.get(), 100);

        assert_eq!(stockpile.set(40), Ok(40));
        assert_eq!(stockpile.set(400), Ok(100));
        assert_eq!(stockpile.set(0), Ok(0));
    }

    #[test]
    fn shrinking_capacity_trims_amount() {
        let mut stockpile = wood(80, 100);
        stockpile.set_capacity(50);
        assert_eq!(stockpile.get(), 50);
        assert_eq!(stockpile.capacity(), 50);

        stockpile.set_capacity(200);
        assert_eq!(stockpile.get(), 50);
    }
}
