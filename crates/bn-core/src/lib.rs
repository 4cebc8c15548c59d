//! `bn-core` — foundational types for the `busnet` transit-metrics engine.
//!
//! This crate is a dependency of every other `bn-*` crate.  It has no `bn-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `StopId`, `BusId`                                     |
//! | [`geo`]    | `GeoPoint` (radians), haversine distance              |
//! | [`config`] | `NetworkConfig`                                       |
//! | [`error`]  | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::NetworkConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{EARTH_RADIUS_M, GeoPoint};
pub use ids::{BusId, StopId};
