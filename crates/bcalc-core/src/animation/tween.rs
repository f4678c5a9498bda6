#![forbid(unsafe_code)]

//! Linear interpolation between two values over a fixed duration.
//!
//! # Failure Modes
//!
//! - Zero duration: complete immediately, value is `to`.
//! - Overshooting tick: elapsed clamps to the duration.

use std::time::Duration;

use super::Animation;

/// A linear `from → to` transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
}

impl Tween {
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// A tween that is already at rest on `value`.
    #[must_use]
    pub fn settled(value: f64) -> Self {
        Self::new(value, value, Duration::ZERO)
    }

    #[inline]
    #[must_use]
    pub fn from(&self) -> f64 {
        self.from
    }

    #[inline]
    #[must_use]
    pub fn to(&self) -> f64 {
        self.to
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Linear progress in `[0.0, 1.0]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f64 {
        if self.is_complete() {
            return self.to;
        }
        self.from + (self.to - self.from) * self.progress()
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);
    const MS_500: Duration = Duration::from_millis(500);

    #[test]
    fn halfway_is_linear() {
        let mut tween = Tween::new(0.0, 1_000.0, MS_500);
        tween.tick(Duration::from_millis(250));
        assert!((tween.value() - 500.0).abs() < 1e-9);
        assert!(!tween.is_complete());
    }

    #[test]
    fn lands_exactly_on_target() {
        // 0.1 steps accumulate float error; completion must not.
        let mut tween = Tween::new(0.1, 188_000.3, MS_500);
        for _ in 0..5 {
            tween.tick(MS_100);
        }
        assert!(tween.is_complete());
        assert_eq!(tween.value(), 188_000.3);
    }

    #[test]
    fn overshoot_clamps() {
        let mut tween = Tween::new(10.0, 20.0, MS_100);
        tween.tick(Duration::from_secs(3));
        assert_eq!(tween.elapsed(), MS_100);
        assert_eq!(tween.value(), 20.0);
    }

    #[test]
    fn zero_duration_is_immediately_complete() {
        let tween = Tween::new(1.0, 2.0, Duration::ZERO);
        assert!(tween.is_complete());
        assert_eq!(tween.value(), 2.0);
        assert_eq!(tween.progress(), 1.0);
    }

    #[test]
    fn reset_returns_to_start() {
        let mut tween = Tween::new(0.0, 100.0, MS_100);
        tween.tick(MS_100);
        tween.reset();
        assert_eq!(tween.value(), 0.0);
    }

    #[test]
    fn decreasing_values_interpolate_downward() {
        let mut tween = Tween::new(300.0, 100.0, MS_100);
        tween.tick(Duration::from_millis(50));
        assert!((tween.value() - 200.0).abs() < 1e-9);
    }
}
