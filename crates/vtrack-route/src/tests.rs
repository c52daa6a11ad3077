//! Unit tests for route generation and loading.

use chrono::{DateTime, TimeZone, Utc};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

#[cfg(test)]
mod generator {
    use super::t0;
    use crate::generator::generate_route;
    use crate::locations;
    use chrono::Duration;

    #[test]
    fn point_count_and_timestamps() {
        let route = generate_route(
            locations::HYDERABAD,
            locations::BANGALORE,
            30,
            t0(),
            Duration::seconds(5),
        );
        assert_eq!(route.len(), 30);
        assert_eq!(route[0].timestamp, t0());
        assert_eq!(route[29].timestamp, t0() + Duration::seconds(145));
    }

    #[test]
    fn endpoints_near_requested_locations() {
        let route = generate_route(
            locations::MUMBAI,
            locations::DELHI,
            10,
            t0(),
            Duration::seconds(5),
        );
        let first = route.first().unwrap().position;
        let last = route.last().unwrap().position;
        // The sinusoidal bow vanishes at the endpoints.
        assert!((first.lat - locations::MUMBAI.lat).abs() < 1e-9);
        assert_eq!(first.lon, locations::MUMBAI.lon);
        assert!((last.lat - locations::DELHI.lat).abs() < 1e-9);
        assert_eq!(last.lon, locations::DELHI.lon);
    }

    #[test]
    fn midpoint_bows_off_the_straight_line() {
        let route = generate_route(
            locations::HYDERABAD,
            locations::CHENNAI,
            11,
            t0(),
            Duration::seconds(5),
        );
        let straight_mid_lat = (locations::HYDERABAD.lat + locations::CHENNAI.lat) / 2.0;
        let mid = route[5].position;
        assert!((mid.lat - straight_mid_lat - 0.002).abs() < 1e-9, "got {}", mid.lat);
    }

    #[test]
    fn timestamps_strictly_increase() {
        let route = generate_route(
            locations::BANGALORE,
            locations::CHENNAI,
            20,
            t0(),
            Duration::seconds(5),
        );
        for pair in route.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
        }
    }

    #[test]
    fn degenerate_point_counts() {
        let empty = generate_route(
            locations::MUMBAI, locations::DELHI, 0, t0(), Duration::seconds(5),
        );
        assert!(empty.is_empty());

        let single = generate_route(
            locations::MUMBAI, locations::DELHI, 1, t0(), Duration::seconds(5),
        );
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].position, locations::MUMBAI);
    }
}

#[cfg(test)]
mod loader {
    use super::t0;
    use crate::loader::{load_route_json_reader, load_route_reader};
    use crate::RouteError;
    use std::io::Cursor;

    const CSV: &str = "\
latitude,longitude,timestamp
17.385044,78.486671,2024-03-01T12:00:00Z
17.385944,78.487671,2024-03-01T12:00:05Z
17.386844,78.488671,2024-03-01T12:00:10Z
";

    #[test]
    fn csv_roundtrip() {
        let route = load_route_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(route.len(), 3);
        assert_eq!(route[0].position.lat, 17.385044);
        assert_eq!(route[0].position.lon, 78.486671);
        assert_eq!(route[0].timestamp, t0());
        assert_eq!(route[2].timestamp, t0() + chrono::Duration::seconds(10));
    }

    #[test]
    fn csv_bad_timestamp_errors() {
        let csv = "latitude,longitude,timestamp\n17.0,78.0,not-a-time\n";
        let result = load_route_reader(Cursor::new(csv));
        assert!(matches!(result, Err(RouteError::Core(_))));
    }

    #[test]
    fn csv_bad_number_errors() {
        let csv = "latitude,longitude,timestamp\nnorth,78.0,2024-03-01T12:00:00Z\n";
        let result = load_route_reader(Cursor::new(csv));
        assert!(matches!(result, Err(RouteError::Parse(_))));
    }

    #[test]
    fn json_roundtrip() {
        let json = r#"[
            {"latitude": 17.385044, "longitude": 78.486671, "timestamp": "2024-03-01T12:00:00Z"},
            {"latitude": 17.385944, "longitude": 78.487671, "timestamp": "2024-03-01T12:00:05+00:00"}
        ]"#;
        let route = load_route_json_reader(Cursor::new(json)).unwrap();
        assert_eq!(route.len(), 2);
        assert_eq!(route[1].timestamp, t0() + chrono::Duration::seconds(5));
    }

    #[test]
    fn json_malformed_errors() {
        let result = load_route_json_reader(Cursor::new("{not json"));
        assert!(matches!(result, Err(RouteError::Json(_))));
    }

    #[test]
    fn empty_sources_yield_empty_routes() {
        let route = load_route_reader(Cursor::new("latitude,longitude,timestamp\n")).unwrap();
        assert!(route.is_empty());
        let route = load_route_json_reader(Cursor::new("[]")).unwrap();
        assert!(route.is_empty());
    }
}
