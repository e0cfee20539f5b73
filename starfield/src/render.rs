//! Per-frame drawing.
//!
//! [`draw_frame`] is the only routine that decides what a frame looks like;
//! it speaks to the surface through [`Painter`] so tests can record the calls.
//! The browser implementation is [`CanvasRenderingContext2d`].

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use crate::error::{SurfaceError, js_message};
use crate::field::{Starfield, Viewport};

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// Minimal 2D drawing surface.
pub trait Painter {
    /// Erase the whole viewport.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Canvas`] if the surface rejects the call.
    fn clear(&mut self, viewport: Viewport) -> Result<(), SurfaceError>;

    /// Set the fill colour used by subsequent circles.
    fn set_fill(&mut self, color: &str);

    /// Fill a circle at `(x, y)` with the given opacity.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Canvas`] if the surface rejects the call.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64) -> Result<(), SurfaceError>;

    /// Restore full opacity after the frame.
    fn reset_alpha(&mut self);
}

/// Clear the surface and draw every star of `field` in `color`.
///
/// # Errors
///
/// Stops at the first failing surface call and returns its error.
pub fn draw_frame<P: Painter + ?Sized>(painter: &mut P, field: &Starfield, color: &str) -> Result<(), SurfaceError> {
    painter.clear(field.viewport())?;
    painter.set_fill(color);
    for star in field.particles() {
        painter.fill_circle(star.x, star.y, star.radius, star.alpha)?;
    }
    painter.reset_alpha();
    Ok(())
}

impl Painter for CanvasRenderingContext2d {
    fn clear(&mut self, viewport: Viewport) -> Result<(), SurfaceError> {
        self.clear_rect(0.0, 0.0, viewport.width, viewport.height);
        Ok(())
    }

    fn set_fill(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, alpha: f64) -> Result<(), SurfaceError> {
        self.begin_path();
        self.arc(x, y, radius, 0.0, TAU).map_err(|err| SurfaceError::Canvas(js_message(&err)))?;
        self.set_global_alpha(alpha);
        self.fill();
        Ok(())
    }

    fn reset_alpha(&mut self) {
        self.set_global_alpha(1.0);
    }
}
