//! Single-slot timer reset.
//!
//! A [`Debouncer`] holds at most one pending timer. Triggering it again drops
//! the pending timer (which cancels it, for timer types that cancel on drop,
//! such as `gloo_timers::callback::Timeout`) and arms a new one tagged with a
//! fresh generation. When a timer fires it calls [`Debouncer::settle`] with
//! its generation; only the latest generation is accepted, and only once.

use std::time::Duration;

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    slot: Option<T>,
    generation: u64,
    armed: bool,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay, slot: None, generation: 0, armed: false }
    }

    /// Replace the pending timer with a new one built by `arm`.
    ///
    /// `arm` receives the delay and the generation the timer must pass back to
    /// [`settle`](Self::settle). Returns that generation.
    pub fn trigger<F>(&mut self, arm: F) -> u64
    where
        F: FnOnce(Duration, u64) -> T,
    {
        // Drop first so the superseded timer is cancelled before the new one exists.
        self.slot = None;
        self.generation = self.generation.wrapping_add(1);
        self.slot = Some(arm(self.delay, self.generation));
        self.armed = true;
        self.generation
    }

    /// Accept a fired timer. True only for the latest, not yet settled generation.
    ///
    /// The fired timer stays in the slot until the next trigger or cancel so
    /// it is never dropped from inside its own callback.
    pub fn settle(&mut self, generation: u64) -> bool {
        if !self.armed || generation != self.generation {
            return false;
        }
        self.armed = false;
        true
    }

    /// Drop any pending timer without settling.
    pub fn cancel(&mut self) {
        self.slot = None;
        self.armed = false;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.armed
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}
