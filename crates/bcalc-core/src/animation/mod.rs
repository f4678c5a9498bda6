#![forbid(unsafe_code)]

//! Value animation for displayed figures.
//!
//! Every on-screen number eases linearly toward its latest target. The
//! pieces, bottom up:
//!
//! - [`Animation`]: the tick/value/complete contract shared by everything here.
//! - [`Tween`]: a single linear `from → to` interpolation over a fixed duration.
//! - [`AnimatedValue`]: one figure; retargeting cancels the in-flight tween
//!   and restarts from whatever is currently displayed.
//! - [`AnimationSet`]: independent figures keyed by identity.
//! - [`FrameClock`]: monotonic time source the runtime samples once per
//!   frame to compute `dt`.
//!
//! # Invariants
//!
//! 1. Once a tween's elapsed time reaches its duration, `value()` is exactly
//!    the target; no interpolation residue.
//! 2. A retarget starts from the displayed value, never from the original
//!    start of the superseded tween.
//! 3. A figure whose tween completed reports `is_complete()` and stops
//!    asking for frames.

mod clock;
mod set;
mod tween;
mod value;

use std::time::Duration;

pub use clock::{FrameClock, ManualClock, MonotonicClock};
pub use set::AnimationSet;
pub use tween::Tween;
pub use value::AnimatedValue;

/// Default duration of a figure transition.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);

/// Something that advances with time and produces a value.
pub trait Animation {
    /// Advance by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end state.
    fn is_complete(&self) -> bool;

    /// Current output.
    fn value(&self) -> f64;

    /// Return to the start state.
    fn reset(&mut self);
}
