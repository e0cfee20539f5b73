//! Animated starfield backdrop for the admin panel's dark theme.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns a
//! batch of drifting particles, redraws them on a `<canvas>` once per
//! animation frame while the page is dark, and stops (hiding the backdrop)
//! as soon as the page turns light. All lifecycle decisions live in
//! [`animator::Animator`], which talks to the page only through the
//! [`animator::AnimationHost`] trait so it can be tested without a browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`animator`] | Frame loop state machine and the host trait it drives |
//! | [`field`] | Particle set sized to a viewport, stepping and wrapping |
//! | [`particle`] | A single star: position, size, opacity, drift |
//! | [`debounce`] | Single-slot timer reset used for window resizes |
//! | [`render`] | `Painter` trait and the per-frame draw routine |
//! | [`dom`] | Browser host: canvas, backdrop, `requestAnimationFrame`, resize |
//! | [`config`] | Tunables (counts, ranges, colour, element ids) |
//! | [`error`] | Surface and configuration error types |
//! | [`consts`] | Default values shared by the config and tests |

pub mod animator;
pub mod config;
pub mod consts;
pub mod debounce;
pub mod dom;
pub mod error;
pub mod field;
pub mod particle;
pub mod render;
