//! Display formatting for coordinates and elapsed time.
//!
//! Pure string helpers for the presentation layer; nothing here touches
//! playback state.

/// Which coordinate axis a value belongs to — selects the hemisphere letter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Lat,
    Lon,
}

/// Format a coordinate as a six-decimal degree value with a hemisphere
/// letter, e.g. `17.385044° N` or `78.486671° E`.
///
/// Non-negative values read as the positive hemisphere (N / E); the printed
/// magnitude is always absolute.
pub fn format_coordinate(value: f64, axis: Axis) -> String {
    let hemisphere = match axis {
        Axis::Lat if value >= 0.0 => 'N',
        Axis::Lat => 'S',
        Axis::Lon if value >= 0.0 => 'E',
        Axis::Lon => 'W',
    };
    format!("{:.6}° {hemisphere}", value.abs())
}

/// Format a second count as zero-padded `MM:SS`, e.g. `02:05`.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
