//! The particle set, sized to a viewport.
//!
//! A [`Starfield`] is regenerated wholesale whenever the viewport changes and
//! stepped once per animation frame. Between those two operations every star
//! stays inside `[0, width] × [0, height]`.

use rand::Rng;

use crate::config::StarfieldConfig;
use crate::particle::Particle;

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

/// Drawing-surface dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Starfield {
    particles: Vec<Particle>,
    viewport: Viewport,
}

impl Starfield {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard every star and scatter a fresh batch over `viewport`.
    ///
    /// The batch size comes from the viewport's width class.
    pub fn regenerate<R: Rng>(&mut self, viewport: Viewport, config: &StarfieldConfig, rng: &mut R) {
        let count = config.star_count(viewport.width);
        self.viewport = viewport;
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::random(rng, viewport.width, viewport.height, config));
        }
    }

    /// Advance every star by one frame.
    pub fn step(&mut self) {
        let Viewport { width, height } = self.viewport;
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
