//! Monotonic elapsed-time sources.
//!
//! The engine never reads the wall clock directly; it asks a [`Clock`] for
//! seconds since the clock was created. The viewer uses [`SystemClock`],
//! tests drive a [`ManualClock`] by hand.

use std::cell::Cell;
use std::rc::Rc;

use web_time::Instant;

/// Seconds elapsed since the clock started, as `f64`. Narrow to `f32` only
/// after subtracting two readings.
pub trait Clock {
    /// Monotonic elapsed time in seconds.
    fn elapsed(&self) -> f64;
}

/// Real-time clock backed by [`web_time::Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    /// Start a clock at the current instant.
    #[must_use]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::start()
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock. Clones share the same time, so a test can keep one
/// handle and give another to the engine.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Clock at t = 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `seconds`.
    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }

    /// Jump to an absolute time. Going backwards is ignored.
    pub fn set(&self, seconds: f64) {
        if seconds >= self.now.get() {
            self.now.set(seconds);
        }
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        handle.advance(0.5);
        handle.advance(0.25);
        assert_eq!(clock.elapsed(), 0.75);
    }

    #[test]
    fn manual_clock_is_monotonic() {
        let clock = ManualClock::new();
        clock.set(2.0);
        clock.set(1.0);
        assert_eq!(clock.elapsed(), 2.0);
    }

    #[test]
    fn system_clock_starts_near_zero() {
        let clock = SystemClock::start();
        assert!(clock.elapsed() < 1.0);
    }
}
