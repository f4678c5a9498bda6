#![forbid(unsafe_code)]

//! Frame clocks.
//!
//! The runtime never asks the OS for the time directly; it samples a
//! [`FrameClock`] once per frame and feeds the difference to every
//! animation. Tests swap in a [`ManualClock`] to step time exactly.

use std::cell::Cell;
use std::time::Duration;

use web_time::Instant;

/// Monotonic clock abstraction.
pub trait FrameClock {
    /// Elapsed time since an unspecified epoch, monotonically non-decreasing.
    fn now(&self) -> Duration;
}

/// Wall-clock backed by `Instant`.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move forward by `dt`.
    pub fn advance(&self, dt: Duration) {
        self.now.set(self.now.get().saturating_add(dt));
    }

    /// Jump to an absolute time. Going backwards is ignored.
    pub fn set(&self, now: Duration) {
        if now > self.now.get() {
            self.now.set(now);
        }
    }
}

impl FrameClock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

impl<C: FrameClock + ?Sized> FrameClock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_steps() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
        clock.advance(Duration::from_millis(16));
        clock.advance(Duration::from_millis(16));
        assert_eq!(clock.now(), Duration::from_millis(32));
    }

    #[test]
    fn manual_clock_never_goes_backwards() {
        let clock = ManualClock::new();
        clock.set(Duration::from_secs(2));
        clock.set(Duration::from_secs(1));
        assert_eq!(clock.now(), Duration::from_secs(2));
    }

    #[test]
    fn monotonic_clock_is_non_decreasing() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
