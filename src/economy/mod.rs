//! Economy module hosting the stockpile counter and the interaction that
//! feeds it.
pub mod interaction;
pub mod stockpile;

pub use interaction::{InteractionBinding, InteractionSettings};
pub use stockpile::{Stockpile, StockpileSettings};
