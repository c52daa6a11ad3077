use thiserror::Error;

use crate::state::{MAX_MULTIPLIER, MIN_MULTIPLIER};

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error(
        "invalid playback multiplier {0}: must be finite and within \
         [{MIN_MULTIPLIER}, {MAX_MULTIPLIER}]"
    )]
    InvalidMultiplier(f64),

    #[error("animation_steps must be at least 1")]
    ZeroAnimationSteps,
}

pub type PlaybackResult<T> = Result<T, PlaybackError>;
