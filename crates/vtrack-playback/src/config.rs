//! Playback engine configuration.

use std::time::Duration;

use crate::{PlaybackError, PlaybackResult};

/// Timing parameters for a playback session.
///
/// `base_interval` is the minimum wall-clock spacing between two accepted
/// ticks at multiplier 1.0; the throttle divides it by the current
/// multiplier.  `animation_steps` is how many accepted ticks it takes to
/// traverse one route segment — more steps, smoother motion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Minimum spacing between accepted ticks at multiplier 1.0.
    pub base_interval: Duration,

    /// Subdivisions per route segment.  Always ≥ 1.
    pub animation_steps: u32,
}

impl PlaybackConfig {
    /// Validated constructor.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::ZeroAnimationSteps`] if `animation_steps`
    /// is 0 (a segment must take at least one tick to traverse).
    pub fn new(base_interval: Duration, animation_steps: u32) -> PlaybackResult<Self> {
        if animation_steps == 0 {
            return Err(PlaybackError::ZeroAnimationSteps);
        }
        Ok(Self { base_interval, animation_steps })
    }

    /// Progress gained per accepted tick.
    #[inline]
    pub fn step(&self) -> f64 {
        1.0 / self.animation_steps as f64
    }
}

impl Default for PlaybackConfig {
    /// 50 ms base interval, 20 steps per segment — one segment per second
    /// of wall time at multiplier 1.0.
    fn default() -> Self {
        Self {
            base_interval:   Duration::from_millis(50),
            animation_steps: 20,
        }
    }
}
