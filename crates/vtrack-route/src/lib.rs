//! `vtrack-route` — route production for the vtrack playback toolkit.
//!
//! The playback engine consumes any ordered `Vec<RoutePoint>`; this crate
//! provides the two ways of producing one:
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`generator`] | Synthetic route between two points (curved line)       |
//! | [`loader`]    | CSV and JSON route-file loaders                        |
//! | [`locations`] | Named default locations for demos                      |
//! | [`error`]     | `RouteError`, `RouteResult<T>`                         |

pub mod error;
pub mod generator;
pub mod loader;
pub mod locations;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use generator::generate_route;
pub use loader::{load_route_csv, load_route_json, load_route_json_reader, load_route_reader};
