//! Unit tests for vtrack-core primitives.

use chrono::{DateTime, TimeZone, Utc};

fn at(secs: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + chrono::Duration::seconds(secs as i64)
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(17.385044, 78.486671);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude_approx() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(17.0, 78.0);
        let b = GeoPoint::new(18.0, 78.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(12.9716, 77.5946);
        let b = GeoPoint::new(13.0827, 80.2707);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-6);
    }

    #[test]
    fn lerp_endpoints_exact() {
        let a = GeoPoint::new(17.385044, 78.486671);
        let b = GeoPoint::new(12.9716, 77.5946);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint() {
        let a = GeoPoint::new(10.0, 20.0);
        let b = GeoPoint::new(20.0, 40.0);
        let mid = a.lerp(b, 0.5);
        assert!((mid.lat - 15.0).abs() < 1e-12);
        assert!((mid.lon - 30.0).abs() < 1e-12);
    }

    #[test]
    fn display_six_decimals() {
        let p = GeoPoint::new(17.385044, 78.486671);
        assert_eq!(p.to_string(), "(17.385044, 78.486671)");
    }
}

#[cfg(test)]
mod route {
    use super::at;
    use crate::RoutePoint;

    #[test]
    fn identical_timestamps_zero_speed() {
        let a = RoutePoint::new(17.0, 78.0, at(0));
        let b = RoutePoint::new(17.1, 78.1, at(0));
        assert_eq!(a.speed_kmh(&b), 0.0);
    }

    #[test]
    fn one_km_per_minute_is_sixty_kmh() {
        // ~0.008993 degrees of latitude ≈ 1 000 m.
        let a = RoutePoint::new(17.000000, 78.0, at(0));
        let b = RoutePoint::new(17.008993, 78.0, at(60));
        let speed = a.speed_kmh(&b);
        assert!((speed - 60.0).abs() <= 0.5, "got {speed}");
    }

    #[test]
    fn speed_rounds_to_one_decimal() {
        let a = RoutePoint::new(17.0, 78.0, at(0));
        let b = RoutePoint::new(17.008993, 78.0, at(37));
        let speed = a.speed_kmh(&b);
        assert_eq!((speed * 10.0).round() / 10.0, speed);
    }

    #[test]
    fn from_iso8601_roundtrip() {
        let p = RoutePoint::from_iso8601(17.385044, 78.486671, "2024-03-01T12:00:00Z").unwrap();
        assert_eq!(p.position.lat, 17.385044);
        assert_eq!(p.timestamp, at(0));
    }

    #[test]
    fn from_iso8601_rejects_garbage() {
        assert!(RoutePoint::from_iso8601(0.0, 0.0, "yesterday-ish").is_err());
    }
}

#[cfg(test)]
mod format {
    use crate::{Axis, format_coordinate, format_elapsed};

    #[test]
    fn coordinate_hemispheres() {
        assert_eq!(format_coordinate(17.385044, Axis::Lat), "17.385044° N");
        assert_eq!(format_coordinate(-33.868820, Axis::Lat), "33.868820° S");
        assert_eq!(format_coordinate(78.486671, Axis::Lon), "78.486671° E");
        assert_eq!(format_coordinate(-122.419418, Axis::Lon), "122.419418° W");
    }

    #[test]
    fn zero_is_positive_hemisphere() {
        assert_eq!(format_coordinate(0.0, Axis::Lat), "0.000000° N");
        assert_eq!(format_coordinate(0.0, Axis::Lon), "0.000000° E");
    }

    #[test]
    fn elapsed_zero_padded() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(5), "00:05");
        assert_eq!(format_elapsed(65), "01:05");
        assert_eq!(format_elapsed(600), "10:00");
    }
}
