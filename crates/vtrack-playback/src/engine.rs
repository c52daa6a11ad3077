//! The playback engine: a pure, externally clocked route-replay state machine.

use std::time::Duration;

use vtrack_core::{GeoPoint, RoutePoint};

use crate::state::{MAX_MULTIPLIER, MIN_MULTIPLIER};
use crate::{PlaybackConfig, PlaybackError, PlaybackResult, PlaybackSnapshot, PlaybackState};

/// Replays a timestamped route as smooth interpolated motion.
///
/// The engine owns the route and all playback state but no timer: an external
/// scheduler calls [`tick`][Self::tick] on whatever cadence it likes, passing
/// timestamps measured from any monotonic origin.  The internal throttle
/// decides which calls actually advance state, so the engine behaves
/// identically under a 60 Hz frame loop, a busy-poll, or a test feeding
/// synthetic timestamps.
///
/// All mutation happens inside `tick` and the four control operations
/// ([`play`][Self::play], [`pause`][Self::pause], [`reset`][Self::reset],
/// [`set_multiplier`][Self::set_multiplier]); every other method is a
/// read-only snapshot safe to poll at any rate.  The engine expects exclusive
/// access per call — wrap it in a lock if control and ticking ever live on
/// different threads.
pub struct PlaybackEngine {
    route:  Vec<RoutePoint>,
    config: PlaybackConfig,
    state:  PlaybackState,
}

impl PlaybackEngine {
    /// Create an engine over `route` with the default timing
    /// (50 ms base interval, 20 steps per segment).
    ///
    /// Routes shorter than 2 points are accepted: they yield a static
    /// position (or none at all) and never advance.
    pub fn new(route: Vec<RoutePoint>) -> Self {
        Self::with_config(route, PlaybackConfig::default())
    }

    /// Create an engine with explicit timing parameters.
    pub fn with_config(route: Vec<RoutePoint>, config: PlaybackConfig) -> Self {
        Self { route, config, state: PlaybackState::initial() }
    }

    // ── Control surface ───────────────────────────────────────────────────

    /// Start (or restart) playback.
    ///
    /// Playing a completed route restarts it: the index, step, and elapsed
    /// counters are zeroed first.  The throttle baseline is cleared so the
    /// first subsequent `tick` re-establishes it rather than advancing.
    /// A no-op on routes shorter than 2 points — there is nothing to animate.
    pub fn play(&mut self) {
        if self.route.len() < 2 {
            return;
        }
        if self.state.segment_index >= self.route.len() - 1 {
            self.state.segment_index = 0;
            self.state.segment_step = 0;
            self.state.elapsed_ticks = 0;
            self.recompute_traveled_path();
        }
        self.state.last_accepted = None;
        self.state.is_playing = true;
    }

    /// Stop advancing.  Idempotent.
    ///
    /// `tick` refuses to run while paused, so no stale advancement can occur
    /// after this returns — there is no pending timer to cancel because the
    /// engine never owns one.
    pub fn pause(&mut self) {
        self.state.is_playing = false;
    }

    /// Return to the initial state: idle at segment 0, speed 0, elapsed 0,
    /// traveled path cleared.  The multiplier is a user preference and
    /// survives.
    pub fn reset(&mut self) {
        let multiplier = self.state.multiplier;
        self.state = PlaybackState::initial();
        self.state.multiplier = multiplier;
    }

    /// Set the playback-speed multiplier.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::InvalidMultiplier`] for non-finite values or
    /// values outside `[0.5, 4.0]`.  Out-of-range input is rejected, never
    /// clamped — the control surface offering the value is expected to
    /// restrict itself to the valid range.
    pub fn set_multiplier(&mut self, multiplier: f64) -> PlaybackResult<()> {
        if !multiplier.is_finite() || !(MIN_MULTIPLIER..=MAX_MULTIPLIER).contains(&multiplier) {
            return Err(PlaybackError::InvalidMultiplier(multiplier));
        }
        self.state.multiplier = multiplier;
        Ok(())
    }

    /// Replace the route.  Always resets playback: a stale index into a new
    /// route would be meaningless.
    pub fn set_route(&mut self, route: Vec<RoutePoint>) {
        self.route = route;
        self.reset();
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance playback to `now`, a timestamp from the caller's monotonic
    /// clock.  Returns `true` if state actually advanced.
    ///
    /// Calls are throttled to one accepted tick per
    /// `base_interval / multiplier`; calls arriving faster change nothing.
    /// The first call after `play()` only records the throttle baseline.
    /// Each accepted tick moves the vehicle `1/animation_steps` of a segment;
    /// completing a segment updates the speed readout and elapsed counter,
    /// and completing the final segment pins the position on the route's last
    /// point and stops playback.
    pub fn tick(&mut self, now: Duration) -> bool {
        if !self.state.is_playing || self.route.len() < 2 {
            return false;
        }

        let Some(last) = self.state.last_accepted else {
            self.state.last_accepted = Some(now);
            return false;
        };
        if now.saturating_sub(last) < self.config.base_interval.div_f64(self.state.multiplier) {
            return false;
        }
        self.state.last_accepted = Some(now);

        self.state.segment_step += 1;
        if self.state.segment_step >= self.config.animation_steps {
            self.complete_segment();
        }
        self.recompute_traveled_path();
        true
    }

    /// A segment boundary was crossed: either roll onto the next segment or
    /// finish the route.
    fn complete_segment(&mut self) {
        let final_index = self.route.len() - 1;
        let reached = self.state.segment_index + 1;

        self.state.segment_step = 0;
        self.state.elapsed_ticks += 1;

        if reached >= final_index {
            // Route complete: snap to the last point and stop.  The speed
            // readout keeps its last value, matching a vehicle that has just
            // rolled to a halt.
            self.state.segment_index = final_index;
            self.state.is_playing = false;
        } else {
            self.state.speed_kmh =
                self.route[self.state.segment_index].speed_kmh(&self.route[reached]);
            self.state.segment_index = reached;
        }
    }

    /// Rebuild the traveled path from scratch: every passed route point plus
    /// at most one interpolated point for the in-progress segment.  Full
    /// recomputation keeps the prefix invariant trivially true; the path is
    /// at most `route.len() + 1` pairs, so the cost is negligible.
    fn recompute_traveled_path(&mut self) {
        let Some(final_index) = self.route.len().checked_sub(1) else {
            self.state.traveled_path.clear();
            return;
        };

        let upto = self.state.segment_index.min(final_index);
        let mut path: Vec<(f64, f64)> = self.route[..=upto]
            .iter()
            .map(|p| (p.position.lon, p.position.lat))
            .collect();

        if self.state.segment_index < final_index && self.state.segment_step > 0 {
            if let Some(pos) = self.current_position() {
                path.push((pos.lon, pos.lat));
            }
        }

        self.state.traveled_path = path;
    }

    // ── Read-only outputs ─────────────────────────────────────────────────

    /// The interpolated position, or `None` on an empty route.
    ///
    /// Exactly the final route point once the index reaches it (including
    /// the single point of a degenerate one-point route); otherwise the
    /// linear blend of the current segment's endpoints.
    pub fn current_position(&self) -> Option<GeoPoint> {
        let final_index = self.route.len().checked_sub(1)?;
        if self.state.segment_index >= final_index {
            return Some(self.route[final_index].position);
        }
        let from = self.route[self.state.segment_index].position;
        let to = self.route[self.state.segment_index + 1].position;
        Some(from.lerp(to, self.segment_progress()))
    }

    /// Fractional completion of the current segment, in `[0, 1)`.
    #[inline]
    pub fn segment_progress(&self) -> f64 {
        self.state.segment_step as f64 / self.config.animation_steps as f64
    }

    /// Route completion in percent: exactly 0 on degenerate routes and
    /// exactly 100 once the final point is reached.
    pub fn progress_percent(&self) -> f64 {
        if self.route.len() <= 1 {
            return 0.0;
        }
        (self.state.segment_index as f64 + self.segment_progress())
            / (self.route.len() - 1) as f64
            * 100.0
    }

    #[inline]
    pub fn segment_index(&self) -> usize {
        self.state.segment_index
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Speed over the most recently completed segment, km/h.
    #[inline]
    pub fn speed_kmh(&self) -> f64 {
        self.state.speed_kmh
    }

    /// Segments completed since the last (re)start.
    #[inline]
    pub fn elapsed_ticks(&self) -> u64 {
        self.state.elapsed_ticks
    }

    #[inline]
    pub fn multiplier(&self) -> f64 {
        self.state.multiplier
    }

    /// `(lon, lat)` pairs traversed so far, for trail rendering.
    #[inline]
    pub fn traveled_path(&self) -> &[(f64, f64)] {
        &self.state.traveled_path
    }

    #[inline]
    pub fn route(&self) -> &[RoutePoint] {
        &self.route
    }

    #[inline]
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// An owned copy of every presentation-layer output, taken atomically
    /// with respect to the single-threaded tick loop.
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            position:         self.current_position(),
            segment_index:    self.state.segment_index,
            segment_progress: self.segment_progress(),
            progress_percent: self.progress_percent(),
            speed_kmh:        self.state.speed_kmh,
            elapsed_ticks:    self.state.elapsed_ticks,
            is_playing:       self.state.is_playing,
            multiplier:       self.state.multiplier,
            traveled_path:    self.state.traveled_path.clone(),
        }
    }

    /// Direct read access to the full state, mainly for assertions in tests.
    #[inline]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }
}
