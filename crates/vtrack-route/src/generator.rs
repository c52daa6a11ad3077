//! Synthetic route generation.
//!
//! Routes are straight lines between two endpoints with a sinusoidal
//! latitude offset — enough curvature to look like a road on a map without
//! needing any road-network data.

use chrono::{DateTime, Duration, Utc};

use vtrack_core::{GeoPoint, RoutePoint};

/// Peak latitude offset (degrees) of the curve at the route's midpoint.
const CURVE_AMPLITUDE_DEG: f64 = 0.002;

/// Generate `num_points` route points from `start` to `end`.
///
/// Points are evenly spaced along the straight line between the endpoints,
/// bowed by `sin(progress · π) · 0.002°` of latitude so the midpoint swings
/// widest and the endpoints barely move.  Timestamps begin at `start_time`
/// and advance `point_interval` per point.
///
/// Fewer than 2 points degrades gracefully: 1 yields `start` alone
/// (a static position for the engine), 0 yields an empty route.
pub fn generate_route(
    start:          GeoPoint,
    end:            GeoPoint,
    num_points:     usize,
    start_time:     DateTime<Utc>,
    point_interval: Duration,
) -> Vec<RoutePoint> {
    if num_points == 0 {
        return Vec::new();
    }
    if num_points == 1 {
        return vec![RoutePoint { position: start, timestamp: start_time }];
    }

    (0..num_points)
        .map(|i| {
            let progress = i as f64 / (num_points - 1) as f64;
            let curve = (progress * std::f64::consts::PI).sin() * CURVE_AMPLITUDE_DEG;

            RoutePoint::new(
                start.lat * (1.0 - progress) + end.lat * progress + curve,
                start.lon * (1.0 - progress) + end.lon * progress,
                start_time + point_interval * i as i32,
            )
        })
        .collect()
}
