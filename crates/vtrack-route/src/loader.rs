//! Route loaders for recorded tracks.
//!
//! # CSV format
//!
//! One row per route point, in route order:
//!
//! ```csv
//! latitude,longitude,timestamp
//! 17.385044,78.486671,2024-03-01T12:00:00Z
//! 17.385944,78.487671,2024-03-01T12:00:05Z
//! ```
//!
//! # JSON format
//!
//! An array of objects with the same three fields:
//!
//! ```json
//! [{ "latitude": 17.385044, "longitude": 78.486671,
//!    "timestamp": "2024-03-01T12:00:00Z" }]
//! ```
//!
//! Timestamps are ISO-8601 / RFC 3339 in both formats.  Row order is
//! preserved; the loaders do not sort or validate timestamp monotonicity —
//! a route that runs backwards in time simply replays with a zero speed
//! readout on the offending segments.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use vtrack_core::RoutePoint;

use crate::{RouteError, RouteResult};

// ── Wire record ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RouteRecord {
    latitude:  f64,
    longitude: f64,
    timestamp: String,
}

impl RouteRecord {
    fn into_point(self) -> RouteResult<RoutePoint> {
        RoutePoint::from_iso8601(self.latitude, self.longitude, &self.timestamp)
            .map_err(RouteError::from)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a route from a CSV file with a `latitude,longitude,timestamp` header.
pub fn load_route_csv(path: &Path) -> RouteResult<Vec<RoutePoint>> {
    let file = std::fs::File::open(path).map_err(RouteError::Io)?;
    load_route_reader(file)
}

/// Like [`load_route_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_route_reader<R: Read>(reader: R) -> RouteResult<Vec<RoutePoint>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<RouteRecord>()
        .map(|row| {
            row.map_err(|e| RouteError::Parse(e.to_string()))?
                .into_point()
        })
        .collect()
}

/// Load a route from a JSON file holding an array of route-point objects.
pub fn load_route_json(path: &Path) -> RouteResult<Vec<RoutePoint>> {
    let file = std::fs::File::open(path).map_err(RouteError::Io)?;
    load_route_json_reader(file)
}

/// Like [`load_route_json`] but accepts any `Read` source.
pub fn load_route_json_reader<R: Read>(reader: R) -> RouteResult<Vec<RoutePoint>> {
    let records: Vec<RouteRecord> = serde_json::from_reader(reader)?;
    records.into_iter().map(RouteRecord::into_point).collect()
}
