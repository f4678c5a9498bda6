#![forbid(unsafe_code)]

//! Independent animated figures keyed by identity.
//!
//! Each key owns one [`AnimatedValue`]; figures never share state, so
//! retargeting one never disturbs another. The runtime calls [`tick`] once per
//! frame and keeps scheduling frames only while [`is_animating`] is true.
//!
//! [`tick`]: AnimationSet::tick
//! [`is_animating`]: AnimationSet::is_animating

use std::hash::Hash;
use std::time::Duration;

use ahash::AHashMap;

use super::{AnimatedValue, Animation, DEFAULT_DURATION};

/// A collection of animated figures.
#[derive(Debug, Clone)]
pub struct AnimationSet<K> {
    figures: AHashMap<K, AnimatedValue>,
    duration: Duration,
}

impl<K: Eq + Hash> AnimationSet<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_duration(DEFAULT_DURATION)
    }

    #[must_use]
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            figures: AHashMap::new(),
            duration,
        }
    }

    /// Point `key` at a new target.
    ///
    /// An unknown key appears settled on `target`; a known key starts a
    /// transition from its displayed value.
    pub fn retarget(&mut self, key: K, target: f64) {
        let duration = self.duration;
        self.figures
            .entry(key)
            .and_modify(|figure| figure.retarget(target))
            .or_insert_with(|| AnimatedValue::with_duration(target, duration));
    }

    /// Jump `key` to `value` with no transition.
    pub fn snap(&mut self, key: K, value: f64) {
        let duration = self.duration;
        self.figures
            .entry(key)
            .or_insert_with(|| AnimatedValue::with_duration(value, duration))
            .snap(value);
    }

    /// Drop a figure, cancelling any transition it had.
    pub fn remove(&mut self, key: &K) -> Option<AnimatedValue> {
        self.figures.remove(key)
    }

    /// Displayed value of `key`.
    #[must_use]
    pub fn value(&self, key: &K) -> Option<f64> {
        self.figures.get(key).map(Animation::value)
    }

    /// Final value `key` is heading toward.
    #[must_use]
    pub fn target(&self, key: &K) -> Option<f64> {
        self.figures.get(key).map(AnimatedValue::target)
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&AnimatedValue> {
        self.figures.get(key)
    }

    /// Advance every figure by `dt`. Returns whether any are still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let mut animating = false;
        for figure in self.figures.values_mut() {
            if figure.is_animating() {
                figure.tick(dt);
                animating |= figure.is_animating();
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            dt_us = dt.as_micros() as u64,
            figures = self.figures.len(),
            animating,
            "animation tick"
        );

        animating
    }

    /// Whether any figure still needs frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.figures.values().any(AnimatedValue::is_animating)
    }

    /// Transition length used by future retargets.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Change the transition length for every figure's future retargets.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
        for figure in self.figures.values_mut() {
            figure.set_duration(duration);
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }
}

impl<K: Eq + Hash> Default for AnimationSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Fig {
        Low,
        High,
    }

    const MS_250: Duration = Duration::from_millis(250);
    const MS_500: Duration = Duration::from_millis(500);

    #[test]
    fn first_retarget_settles() {
        let mut set = AnimationSet::new();
        set.retarget(Fig::Low, 5_000.0);
        assert_eq!(set.value(&Fig::Low), Some(5_000.0));
        assert!(!set.is_animating());
    }

    #[test]
    fn figures_are_independent() {
        let mut set = AnimationSet::new();
        set.retarget(Fig::Low, 0.0);
        set.retarget(Fig::High, 0.0);

        set.retarget(Fig::Low, 1_000.0);
        set.tick(MS_250);
        set.retarget(Fig::High, 4_000.0);
        set.tick(MS_250);

        assert_eq!(set.value(&Fig::Low), Some(1_000.0));
        assert_eq!(set.value(&Fig::High), Some(2_000.0));
        assert!(set.is_animating());

        assert!(!set.tick(MS_250));
        assert_eq!(set.value(&Fig::High), Some(4_000.0));
    }

    #[test]
    fn tick_reports_completion() {
        let mut set = AnimationSet::with_duration(MS_500);
        set.retarget(Fig::Low, 0.0);
        set.retarget(Fig::Low, 10.0);
        assert!(set.tick(MS_250));
        assert!(!set.tick(MS_250));
        assert!(!set.is_animating());
        assert_eq!(set.value(&Fig::Low), Some(10.0));
    }

    #[test]
    fn remove_cancels() {
        let mut set = AnimationSet::new();
        set.retarget(Fig::Low, 0.0);
        set.retarget(Fig::Low, 10.0);
        assert!(set.remove(&Fig::Low).is_some());
        assert!(!set.is_animating());
        assert_eq!(set.value(&Fig::Low), None);
        assert!(set.is_empty());
    }

    #[test]
    fn snap_inserts_or_jumps() {
        let mut set = AnimationSet::new();
        set.snap(Fig::High, 3.0);
        set.retarget(Fig::High, 9.0);
        set.snap(Fig::High, 4.0);
        assert_eq!(set.value(&Fig::High), Some(4.0));
        assert_eq!(set.target(&Fig::High), Some(4.0));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn set_duration_applies_to_existing_figures() {
        let mut set = AnimationSet::new();
        set.retarget(Fig::Low, 0.0);
        set.set_duration(Duration::ZERO);
        set.retarget(Fig::Low, 50.0);
        assert_eq!(set.value(&Fig::Low), Some(50.0));
        assert!(!set.is_animating());
    }
}
