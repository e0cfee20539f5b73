//! Shared numeric and naming defaults for the starfield crate.

// ── Population ──────────────────────────────────────────────────

/// Viewports narrower than this (CSS pixels) get the sparse star count.
pub const NARROW_BREAKPOINT_PX: f64 = 768.0;

/// Star count for narrow viewports.
pub const NARROW_STAR_COUNT: usize = 60;

/// Star count for everything else.
pub const WIDE_STAR_COUNT: usize = 120;

// ── Star shape ──────────────────────────────────────────────────

/// Smallest star radius in CSS pixels.
pub const RADIUS_MIN: f64 = 0.2;

/// Random span added on top of [`RADIUS_MIN`].
pub const RADIUS_SPAN: f64 = 1.1;

/// Dimmest star opacity.
pub const ALPHA_MIN: f64 = 0.2;

/// Random span added on top of [`ALPHA_MIN`].
pub const ALPHA_SPAN: f64 = 0.7;

/// Full width of the per-axis velocity range, centred on zero.
pub const MAX_SPEED: f64 = 0.04;

/// Fill colour for every star; per-star opacity is applied on top.
pub const STAR_COLOR: &str = "rgba(155, 89, 182, 0.75)";

// ── Timing ──────────────────────────────────────────────────────

/// Quiet period after the last window `resize` before regenerating.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

// ── DOM contract ────────────────────────────────────────────────

pub const BACKDROP_ID: &str = "starry-bg";
pub const CANVAS_ID: &str = "starry-canvas";
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";
pub const DARK_CLASS: &str = "dark-mode";
