//! # nightsky
//!
//! Browser-side theme switching for the server panel, compiled to WASM.
//!
//! The page starts light or dark (stored choice, then system preference, then
//! the configured fallback), the toggle button flips and persists the choice,
//! and dark mode runs the animated starfield from the [`starfield`] crate
//! behind the page content.
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | `Theme`, toggle labels, and the [`theme::controller::ThemeController`] state machine |
//! | [`config`] | Page configuration (storage key, element ids, starfield tunables) |
//! | `boot` | `hydrate` only: wasm start function, DOM listeners, `initStarrySky` / `stopStarrySky` |

pub mod config;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod boot;
