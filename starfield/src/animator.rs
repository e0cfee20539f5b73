//! Frame loop state machine.
//!
//! [`Animator`] decides when stars are regenerated, drawn and stepped, and
//! when the loop is scheduled or torn down. Every side effect goes through an
//! [`AnimationHost`]: the browser host in [`crate::dom`], or a fake in tests.
//!
//! Lifecycle:
//!
//! ```text
//!  stopped ──start (dark)──▶ running ──on_frame (dark)──▶ running
//!     ▲                        │
//!     └──stop / on_frame (light) / resize (light) / surface lost
//! ```
//!
//! At most one frame is scheduled at any time: the handle is a single owned
//! slot and is only refilled after the previous frame has been consumed.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::StarfieldConfig;
use crate::error::SurfaceError;
use crate::field::{Starfield, Viewport};
use crate::render::{Painter, draw_frame};

#[cfg(test)]
#[path = "animator_test.rs"]
mod animator_test;

/// Opaque id of a scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Everything the animator needs from the page.
pub trait AnimationHost {
    type Painter: Painter;

    /// Whether the page is currently dark. Queried before every frame.
    fn is_dark(&self) -> bool;

    /// Size the drawing surface to its container and report the result.
    ///
    /// # Errors
    ///
    /// Returns a [`SurfaceError`] when the container or canvas is missing.
    fn measure(&mut self) -> Result<Viewport, SurfaceError>;

    /// Show or hide the backdrop container. Missing container is ignored.
    fn set_backdrop_visible(&mut self, visible: bool);

    /// Ask for [`Animator::on_frame`] to be called on the next frame.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Schedule`] when the request is refused.
    fn request_frame(&mut self) -> Result<FrameHandle, SurfaceError>;

    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Borrow a painter for the current frame.
    ///
    /// # Errors
    ///
    /// Returns a [`SurfaceError`] when the canvas or its context is missing.
    fn painter(&mut self) -> Result<Self::Painter, SurfaceError>;
}

pub struct Animator<H: AnimationHost> {
    host: H,
    config: StarfieldConfig,
    field: Starfield,
    rng: SmallRng,
    frame: Option<FrameHandle>,
    running: bool,
}

impl<H: AnimationHost> Animator<H> {
    /// Create a stopped animator. `seed` feeds star placement.
    #[must_use]
    pub fn new(host: H, config: StarfieldConfig, seed: u64) -> Self {
        Self { host, config, field: Starfield::new(), rng: SmallRng::seed_from_u64(seed), frame: None, running: false }
    }

    /// Start the loop if the page is dark.
    ///
    /// Light page: cancels any pending frame and hides the backdrop. Already
    /// running: only re-shows the backdrop.
    pub fn start(&mut self) {
        if !self.host.is_dark() {
            self.halt();
            return;
        }
        if self.running {
            self.host.set_backdrop_visible(true);
            return;
        }
        if !self.regenerate() {
            return;
        }
        log::info!(
            "starfield: starting with {} stars at {}x{}",
            self.field.len(),
            self.field.viewport().width,
            self.field.viewport().height
        );
        self.running = true;
        self.schedule();
    }

    /// Cancel any pending frame and hide the backdrop. Safe to call anytime.
    pub fn stop(&mut self) {
        if self.running {
            log::info!("starfield: stopped");
        }
        self.halt();
    }

    /// Frame callback: draw, advance, and schedule the next frame.
    pub fn on_frame(&mut self) {
        self.frame = None;
        if !self.running {
            return;
        }
        if !self.host.is_dark() {
            log::debug!("starfield: page turned light, halting");
            self.halt();
            return;
        }

        let drawn = self
            .host
            .painter()
            .and_then(|mut painter| draw_frame(&mut painter, &self.field, &self.config.color));
        if let Err(err) = drawn {
            log::warn!("starfield: frame dropped, halting: {err}");
            self.halt();
            return;
        }

        self.field.step();
        self.schedule();
    }

    /// Settled window resize: regenerate for the new size, or stop if light.
    pub fn on_resize_settled(&mut self) {
        if !self.host.is_dark() {
            self.halt();
            return;
        }
        if !self.regenerate() {
            return;
        }
        log::debug!(
            "starfield: resized to {}x{}",
            self.field.viewport().width,
            self.field.viewport().height
        );
        self.running = true;
        self.schedule();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a frame callback is currently scheduled.
    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.frame.is_some()
    }

    #[must_use]
    pub fn field(&self) -> &Starfield {
        &self.field
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Reveal the backdrop and rebuild the field for its size.
    ///
    /// A hidden container measures 0x0, so it is shown before measuring and
    /// hidden again if measuring fails.
    fn regenerate(&mut self) -> bool {
        self.host.set_backdrop_visible(true);
        match self.host.measure() {
            Ok(viewport) => {
                self.field.regenerate(viewport, &self.config, &mut self.rng);
                true
            }
            Err(err) => {
                log::warn!("starfield: cannot measure surface: {err}");
                self.halt();
                false
            }
        }
    }

    fn schedule(&mut self) {
        if self.frame.is_some() {
            return;
        }
        match self.host.request_frame() {
            Ok(handle) => self.frame = Some(handle),
            Err(err) => {
                log::warn!("starfield: {err}");
                self.halt();
            }
        }
    }

    fn halt(&mut self) {
        if let Some(handle) = self.frame.take() {
            self.host.cancel_frame(handle);
        }
        self.running = false;
        self.host.set_backdrop_visible(false);
    }
}
