//! Starfield tunables.
//!
//! Every field has a default from [`crate::consts`], so a partial JSON object
//! (or none at all) yields a working configuration.

use serde::{Deserialize, Serialize};

use crate::consts::{
    ALPHA_MIN, ALPHA_SPAN, BACKDROP_ID, CANVAS_ID, DARK_CLASS, MAX_SPEED, NARROW_BREAKPOINT_PX, NARROW_STAR_COUNT,
    RADIUS_MIN, RADIUS_SPAN, RESIZE_DEBOUNCE_MS, STAR_COLOR, THEME_ATTRIBUTE, WIDE_STAR_COUNT,
};
use crate::error::ConfigError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Element ids and theme markers the browser host looks up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub backdrop_id: String,
    pub canvas_id: String,
    /// Attribute on the root element that reads `"dark"` in dark mode.
    pub theme_attribute: String,
    /// Class on `<body>` that also marks dark mode.
    pub dark_class: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            backdrop_id: BACKDROP_ID.to_owned(),
            canvas_id: CANVAS_ID.to_owned(),
            theme_attribute: THEME_ATTRIBUTE.to_owned(),
            dark_class: DARK_CLASS.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub narrow_breakpoint: f64,
    pub narrow_count: usize,
    pub wide_count: usize,
    pub radius_min: f64,
    pub radius_span: f64,
    pub alpha_min: f64,
    pub alpha_span: f64,
    pub max_speed: f64,
    pub color: String,
    pub resize_debounce_ms: u32,
    pub surface: SurfaceConfig,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint: NARROW_BREAKPOINT_PX,
            narrow_count: NARROW_STAR_COUNT,
            wide_count: WIDE_STAR_COUNT,
            radius_min: RADIUS_MIN,
            radius_span: RADIUS_SPAN,
            alpha_min: ALPHA_MIN,
            alpha_span: ALPHA_SPAN,
            max_speed: MAX_SPEED,
            color: STAR_COLOR.to_owned(),
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            surface: SurfaceConfig::default(),
        }
    }
}

impl StarfieldConfig {
    /// Parse a JSON object and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Star count for a viewport of the given width.
    #[must_use]
    pub fn star_count(&self, viewport_width: f64) -> usize {
        if viewport_width < self.narrow_breakpoint { self.narrow_count } else { self.wide_count }
    }

    /// Reject values that would put stars off-canvas or produce NaN.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("narrow_breakpoint", self.narrow_breakpoint)?;
        non_negative("radius_min", self.radius_min)?;
        non_negative("radius_span", self.radius_span)?;
        non_negative("alpha_min", self.alpha_min)?;
        non_negative("alpha_span", self.alpha_span)?;
        non_negative("max_speed", self.max_speed)?;
        if self.alpha_min + self.alpha_span > 1.0 {
            return Err(ConfigError::Invalid { field: "alpha_span", reason: "alpha_min + alpha_span exceeds 1" });
        }
        if self.color.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "color", reason: "must not be empty" });
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::Invalid { field, reason: "must be finite" });
    }
    if value < 0.0 {
        return Err(ConfigError::Invalid { field, reason: "must not be negative" });
    }
    Ok(())
}
