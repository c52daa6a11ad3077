//! Named default locations for demos and tests.

use vtrack_core::GeoPoint;

pub const HYDERABAD: GeoPoint = GeoPoint { lat: 17.385044, lon: 78.486671 };
pub const BANGALORE: GeoPoint = GeoPoint { lat: 12.9716, lon: 77.5946 };
pub const MUMBAI: GeoPoint = GeoPoint { lat: 19.076, lon: 72.8777 };
pub const DELHI: GeoPoint = GeoPoint { lat: 28.6139, lon: 77.209 };
pub const CHENNAI: GeoPoint = GeoPoint { lat: 13.0827, lon: 80.2707 };

/// All named locations with their display names.
pub fn all() -> [(&'static str, GeoPoint); 5] {
    [
        ("Hyderabad", HYDERABAD),
        ("Bangalore", BANGALORE),
        ("Mumbai", MUMBAI),
        ("Delhi", DELHI),
        ("Chennai", CHENNAI),
    ]
}
