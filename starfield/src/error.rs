//! Error types for surface lookups and configuration.
//!
//! None of these ever reach the page: the animator logs them at the
//! operation boundary and returns early.

use wasm_bindgen::JsValue;

/// A required browser surface is missing or unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    /// No element with this id is in the document.
    #[error("element #{0} not found")]
    MissingElement(String),
    /// The element exists but is not the expected type.
    #[error("element #{id} is not a {expected}")]
    WrongElement { id: String, expected: &'static str },
    #[error("canvas #{0} has no 2d context")]
    NoContext(String),
    /// A `Canvas2D` call returned an exception.
    #[error("canvas call failed: {0}")]
    Canvas(String),
    #[error("could not schedule animation frame: {0}")]
    Schedule(String),
    #[error("could not attach {event} listener: {reason}")]
    Listener { event: &'static str, reason: String },
}

/// Starfield configuration could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Best-effort text of a thrown JavaScript value.
pub(crate) fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
