//! A single star.

use rand::Rng;

use crate::config::StarfieldConfig;

#[cfg(test)]
#[path = "particle_test.rs"]
mod particle_test;

/// One drifting star, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Particle {
    /// Scatter a new star uniformly over a `width` × `height` area.
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64, config: &StarfieldConfig) -> Self {
        Self {
            x: rng.random::<f64>() * width,
            y: rng.random::<f64>() * height,
            radius: rng.random::<f64>().mul_add(config.radius_span, config.radius_min),
            alpha: rng.random::<f64>().mul_add(config.alpha_span, config.alpha_min),
            vx: (rng.random::<f64>() - 0.5) * config.max_speed,
            vy: (rng.random::<f64>() - 0.5) * config.max_speed,
        }
    }

    /// Advance by one frame of velocity and wrap onto the opposite edge.
    pub fn step(&mut self, width: f64, height: f64) {
        self.x = wrap(self.x + self.vx, width);
        self.y = wrap(self.y + self.vy, height);
    }
}

/// Torus wrap into `[0, extent]`. A zero-sized axis pins to 0.
#[must_use]
pub fn wrap(value: f64, extent: f64) -> f64 {
    if extent <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    if (0.0..=extent).contains(&value) { value } else { value.rem_euclid(extent) }
}
