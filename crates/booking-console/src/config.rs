//! Configuration for the booking console.
//!
//! Layered, last one wins:
//!
//! 1. built-in defaults
//! 2. an optional TOML file (`--config <FILE>`)
//! 3. environment variables:
//!    - `CINEMA_BRAND`          (default: "GIC Cinemas")
//!    - `CINEMA_BOOKING_PREFIX` (default: "GIC")
//!
//! Example file:
//!
//! ```toml
//! brand = "Riverside Picturehouse"
//! booking_prefix = "RPH"
//!
//! [glyphs]
//! free = "."
//! taken = "#"
//! selected = "O"
//! ```

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use booking_core::DEFAULT_BOOKING_PREFIX;
use booking_protocol::MapGlyphs;
use serde::Deserialize;

pub const BRAND_ENV: &str = "CINEMA_BRAND";
pub const BOOKING_PREFIX_ENV: &str = "CINEMA_BOOKING_PREFIX";

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Cinema name shown in the menu and the farewell.
    pub brand: String,

    /// Prefix of every booking id (`GIC` -> `GIC0001`).
    pub booking_prefix: String,

    /// Seating map glyphs.
    pub glyphs: MapGlyphs,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            brand: "GIC Cinemas".to_string(),
            booking_prefix: DEFAULT_BOOKING_PREFIX.to_string(),
            glyphs: MapGlyphs::default(),
        }
    }
}

impl ConsoleConfig {
    /// Build the configuration from defaults, an optional file and the
    /// process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply overrides from `lookup` (normally the environment).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(brand) = lookup(BRAND_ENV) {
            self.brand = brand;
        }
        if let Some(prefix) = lookup(BOOKING_PREFIX_ENV) {
            self.booking_prefix = prefix;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.brand.trim().is_empty() {
            bail!("brand must not be empty");
        }
        if self.booking_prefix.is_empty()
            || !self.booking_prefix.chars().all(|c| c.is_ascii_alphanumeric())
        {
            bail!(
                "booking prefix must be non-empty and alphanumeric, got {:?}",
                self.booking_prefix
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConsoleConfig::from_toml_str("booking_prefix = \"RPH\"\n").unwrap();

        assert_eq!(config.booking_prefix, "RPH");
        assert_eq!(config.brand, "GIC Cinemas");
        assert_eq!(config.glyphs, MapGlyphs::default());
    }

    #[test]
    fn glyphs_can_be_overridden_individually() {
        let config = ConsoleConfig::from_toml_str("[glyphs]\nselected = \"*\"\n").unwrap();

        assert_eq!(config.glyphs.selected, '*');
        assert_eq!(config.glyphs.free, '.');
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ConsoleConfig::from_toml_str("prefix = \"X\"\n").is_err());
    }

    #[test]
    fn overrides_win_over_file_values() {
        let mut config = ConsoleConfig::from_toml_str("brand = \"From File\"\n").unwrap();
        config.apply_overrides(|key| match key {
            BRAND_ENV => Some("From Env".to_string()),
            _ => None,
        });

        assert_eq!(config.brand, "From Env");
        assert_eq!(config.booking_prefix, "GIC");
    }

    #[test]
    fn invalid_prefix_fails_validation() {
        let mut config = ConsoleConfig::default();
        config.booking_prefix = "G-1".to_string();
        assert!(config.validate().is_err());

        config.booking_prefix = String::new();
        assert!(config.validate().is_err());

        assert!(ConsoleConfig::default().validate().is_ok());
    }
}
