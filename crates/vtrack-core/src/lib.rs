//! `vtrack-core` — foundational types for the vtrack route playback toolkit.
//!
//! This crate is a dependency of every other `vtrack-*` crate.  It has no
//! `vtrack-*` dependencies and minimal external ones (only `chrono` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`geo`]      | `GeoPoint`, haversine distance, linear interpolation  |
//! | [`route`]    | `RoutePoint`, segment speed in km/h                   |
//! | [`format`]   | Coordinate and elapsed-time display formatting        |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by the `vtrack-route` JSON loader.                |

pub mod error;
pub mod format;
pub mod geo;
pub mod route;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use format::{Axis, format_coordinate, format_elapsed};
pub use geo::GeoPoint;
pub use route::RoutePoint;
