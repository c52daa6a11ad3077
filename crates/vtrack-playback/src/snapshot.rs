//! Read-only playback snapshot for the presentation layer.

use vtrack_core::GeoPoint;

/// Everything a stats panel or map widget needs from one poll of the engine.
///
/// Owned data, cloned out of the engine, so the caller can hold it across
/// ticks without borrowing the engine itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSnapshot {
    /// Interpolated vehicle position; `None` on an empty route.
    pub position: Option<GeoPoint>,

    /// Index of the current segment's start point.
    pub segment_index: usize,

    /// Fractional completion of the current segment, `[0, 1)`.
    pub segment_progress: f64,

    /// Route completion, `[0, 100]`.
    pub progress_percent: f64,

    /// Speed over the most recently completed segment, km/h.
    pub speed_kmh: f64,

    /// Segments completed since the last (re)start.
    pub elapsed_ticks: u64,

    pub is_playing: bool,

    /// Current playback-speed multiplier.
    pub multiplier: f64,

    /// `(lon, lat)` pairs traversed so far.
    pub traveled_path: Vec<(f64, f64)>,
}
