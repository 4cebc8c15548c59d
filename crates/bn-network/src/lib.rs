//! `bn-network` — the route-metrics engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`registry`] | `Stop`, `StopRegistry` (name → `StopId`, stop arena)      |
//! | [`bus`]      | `Bus`                                                     |
//! | [`cache`]    | `DistanceCache` (direct, declared, per-bus aggregates)    |
//! | [`metrics`]  | `RouteMetricsEngine`, `BusMetrics`                        |
//! | [`index`]    | `StopBusIndex` (stop → sorted bus numbers)                |
//! | [`network`]  | `TransitNetworkBuilder`, `TransitNetwork`                 |
//! | [`error`]    | `NetworkError`, `NetworkResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public data types.      |

pub mod bus;
pub mod cache;
pub mod error;
pub mod index;
pub mod metrics;
pub mod network;
pub mod registry;


pub use bus::Bus;
pub use cache::DistanceCache;
pub use error::{NetworkError, NetworkResult};
pub use index::StopBusIndex;
pub use metrics::{BusMetrics, RouteMetricsEngine};
pub use network::{TransitNetwork, TransitNetworkBuilder};
pub use registry::{Stop, StopRegistry};
