//! Page-level configuration.
//!
//! Defaults describe the admin panel's markup. A page can override any field
//! with a JSON object in `<script type="application/json" id="nightsky-config">`;
//! omitted fields keep their defaults.

use serde::{Deserialize, Serialize};
use starfield::config::StarfieldConfig;

use crate::theme::Theme;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const CONFIG_ELEMENT_ID: &str = "nightsky-config";
pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle-btn";
pub const DEFAULT_COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse page config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
    #[error(transparent)]
    Starfield(#[from] starfield::error::ConfigError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `localStorage` key holding `"dark"` or `"light"`.
    pub storage_key: String,
    pub toggle_id: String,
    /// Used when nothing is stored and the system signal is unavailable.
    pub fallback_theme: Theme,
    pub color_scheme_query: String,
    pub starfield: StarfieldConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            fallback_theme: Theme::Light,
            color_scheme_query: DEFAULT_COLOR_SCHEME_QUERY.to_owned(),
            starfield: StarfieldConfig::default(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON, a blank storage key, or an
    /// invalid starfield section.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "storage_key", reason: "must not be empty" });
        }
        if self.color_scheme_query.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "color_scheme_query", reason: "must not be empty" });
        }
        self.starfield.validate()?;
        Ok(())
    }
}
