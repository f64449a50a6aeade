//! Shared TOML loading used by the per-module settings resources.
use std::{fs, path::Path};

use bevy::log::warn;
use serde::de::DeserializeOwned;

/// Reads `path` and parses it as TOML, falling back to `T::default()` when the
/// file is missing or malformed.
pub fn load_toml_or_default<T>(path: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match fs::read_to_string(Path::new(path)) {
        Ok(data) => parse_toml_or_default(path, &data),
        Err(err) => {
            warn!(
                "Failed to read {} ({}). Falling back to defaults.",
                path, err
            );
            T::default()
        }
    }
}

/// Parses already-loaded TOML text; `label` only feeds the warning.
pub fn parse_toml_or_default<T>(label: &str, data: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match toml::from_str::<T>(data) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(
                "Failed to parse {} ({}). Falling back to defaults.",
                label, err
            );
            T::default()
        }
    }
}

/// Returns `value` when it is finite and at least `min`, otherwise `fallback`.
pub fn finite_at_least(value: f32, min: f32, fallback: f32) -> f32 {
    if value.is_finite() && value >= min {
        value
    } else {
        fallback
    }
}
