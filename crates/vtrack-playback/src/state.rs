//! Playback state — everything the engine mutates between ticks.

use std::time::Duration;

/// Default playback-speed multiplier.
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

/// Lowest accepted playback-speed multiplier.
pub const MIN_MULTIPLIER: f64 = 0.5;

/// Highest accepted playback-speed multiplier.
pub const MAX_MULTIPLIER: f64 = 4.0;

/// The mutable state of one playback session.
///
/// The engine is either **idle** (`!is_playing`, position frozen) or
/// **playing** (`is_playing`, advanced by [`tick`][crate::PlaybackEngine::tick]).
/// Completion is idle with `segment_index` pinned at the route's final index;
/// `play()` from there restarts from zero.
///
/// Sub-segment progress is held as an integer step counter rather than an
/// accumulated float: `animation_steps` additions of `1/animation_steps`
/// would not sum to exactly 1.0, and segment boundaries must land on exact
/// tick counts.  The fractional view is derived in
/// [`PlaybackEngine::segment_progress`][crate::PlaybackEngine::segment_progress].
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Index of the route point the current segment starts at.  Never
    /// exceeds `route.len() - 2` while advancing; pinned to `route.len() - 1`
    /// once playback completes.
    pub segment_index: usize,

    /// Accepted ticks into the current segment, in `[0, animation_steps)`.
    pub segment_step: u32,

    /// `true` while ticks advance the simulation.
    pub is_playing: bool,

    /// Speed over the most recently completed segment, km/h, one decimal.
    pub speed_kmh: f64,

    /// Number of segments completed since the last (re)start.
    pub elapsed_ticks: u64,

    /// Playback-speed multiplier, in `[MIN_MULTIPLIER, MAX_MULTIPLIER]`.
    /// Scales the tick throttle, not the per-segment subdivision count.
    pub multiplier: f64,

    /// `(lon, lat)` pairs already traversed (GeoJSON axis order), for trail
    /// rendering.  Always a route prefix plus at most one interpolated point;
    /// recomputed in full whenever the index or step changes.
    pub traveled_path: Vec<(f64, f64)>,

    /// Timestamp of the last tick that was accepted by the throttle.  `None`
    /// right after `play()`/`reset()`, so the first tick only establishes
    /// the baseline.  An explicit field, not a hidden captured variable, so
    /// tests can drive the engine with synthetic timestamps.
    pub last_accepted: Option<Duration>,
}

impl PlaybackState {
    /// The initial state: idle at segment 0, nothing traveled.
    pub fn initial() -> Self {
        Self {
            segment_index: 0,
            segment_step:  0,
            is_playing:    false,
            speed_kmh:     0.0,
            elapsed_ticks: 0,
            multiplier:    DEFAULT_MULTIPLIER,
            traveled_path: Vec::new(),
            last_accepted: None,
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::initial()
    }
}
