//! Timestamped route points and speed-over-ground computation.

use chrono::{DateTime, Utc};

use crate::{CoreResult, GeoPoint};

/// One sample of a vehicle route: a position plus the wall-clock instant the
/// vehicle is supposed to be there.
///
/// Produced in ordered sequences by a route generator or loader and owned by
/// the playback engine for the duration of one simulation session.  Immutable
/// once produced.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePoint {
    pub position: GeoPoint,
    pub timestamp: DateTime<Utc>,
}

impl RoutePoint {
    #[inline]
    pub fn new(lat: f64, lon: f64, timestamp: DateTime<Utc>) -> Self {
        Self { position: GeoPoint::new(lat, lon), timestamp }
    }

    /// Parse an ISO-8601 / RFC 3339 timestamp string into a `RoutePoint`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Timestamp`][crate::CoreError::Timestamp] if the
    /// string is not a valid RFC 3339 datetime.
    pub fn from_iso8601(lat: f64, lon: f64, timestamp: &str) -> CoreResult<Self> {
        let parsed = DateTime::parse_from_rfc3339(timestamp)?;
        Ok(Self::new(lat, lon, parsed.with_timezone(&Utc)))
    }

    /// Average speed between `self` and `later` in km/h, rounded to one
    /// decimal place.
    ///
    /// Great-circle distance over wall-clock time.  A zero time difference
    /// returns exactly `0.0` — a defined output guarding the division, not
    /// an error.  Sub-second spacings are resolved at millisecond precision.
    pub fn speed_kmh(&self, later: &RoutePoint) -> f64 {
        let secs = (later.timestamp - self.timestamp).num_milliseconds() as f64 / 1_000.0;
        if secs == 0.0 {
            return 0.0;
        }

        let meters = self.position.distance_m(later.position);
        let kmh = meters / secs * 3.6;
        (kmh * 10.0).round() / 10.0
    }
}
