#![forbid(unsafe_code)]

//! A single animated figure.

use std::time::Duration;

use super::{Animation, DEFAULT_DURATION, Tween};

/// A displayed number that eases toward its latest target.
///
/// ```
/// use std::time::Duration;
/// use bcalc_core::animation::{AnimatedValue, Animation};
///
/// let mut v = AnimatedValue::new(0.0);
/// v.retarget(1_000.0);
/// v.tick(Duration::from_millis(250));
/// assert_eq!(v.value(), 500.0);
/// v.tick(Duration::from_millis(250));
/// assert_eq!(v.value(), 1_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    tween: Tween,
    duration: Duration,
}

impl AnimatedValue {
    /// Settled on `initial` with the default 500 ms transition.
    #[must_use]
    pub fn new(initial: f64) -> Self {
        Self::with_duration(initial, DEFAULT_DURATION)
    }

    #[must_use]
    pub fn with_duration(initial: f64, duration: Duration) -> Self {
        Self {
            tween: Tween::settled(initial),
            duration,
        }
    }

    /// Start moving toward `target` from the currently displayed value.
    ///
    /// An in-flight transition is dropped. Retargeting to the current target
    /// leaves the running transition alone.
    pub fn retarget(&mut self, target: f64) {
        if target == self.tween.to() {
            return;
        }
        let from = self.tween.value();
        self.tween = Tween::new(from, target, self.duration);
    }

    /// Jump to `value` with no transition.
    pub fn snap(&mut self, value: f64) {
        self.tween = Tween::settled(value);
    }

    /// Where the figure is heading.
    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.tween.to()
    }

    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.tween.is_complete()
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Change the transition length for future retargets.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Animation for AnimatedValue {
    fn tick(&mut self, dt: Duration) {
        self.tween.tick(dt);
    }

    fn is_complete(&self) -> bool {
        self.tween.is_complete()
    }

    fn value(&self) -> f64 {
        self.tween.value()
    }

    fn reset(&mut self) {
        self.tween.reset();
    }
}
