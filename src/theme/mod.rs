//! Light/dark theme model and controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme controller is the only driver of the starfield: applying dark
//! starts it, applying light stops it. Persistence and document updates go
//! through [`controller::ThemeHost`] so the controller runs without a browser.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod controller;
#[cfg(feature = "hydrate")]
pub mod dom;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Interpret a persisted or attribute value. Anything but `"dark"` is light.
    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        match raw.parse() {
            Ok(theme) => theme,
            Err(err) => {
                log::debug!("theme: {err}, treating as light");
                Self::Light
            }
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Contents of the toggle control. It advertises the theme a click switches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleLabel {
    /// Font Awesome icon class.
    pub icon: &'static str,
    pub text: &'static str,
}

impl ToggleLabel {
    pub const SUN: Self = Self { icon: "fa-sun", text: "Light Mode" };
    pub const MOON: Self = Self { icon: "fa-moon", text: "Dark Mode" };

    /// Label shown while `theme` is applied.
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::SUN,
            Theme::Light => Self::MOON,
        }
    }

    /// Markup for the toggle button; the text collapses on small screens.
    #[must_use]
    pub fn to_html(self) -> String {
        format!(r#"<i class="fas {}"></i> <span class="d-none d-md-inline">{}</span>"#, self.icon, self.text)
    }
}
