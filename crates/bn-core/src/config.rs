//! Engine configuration.

use crate::{CoreError, CoreResult, EARTH_RADIUS_M};

/// Tunables for a transit network.
///
/// Typically built by the application from CLI flags and handed to
/// `TransitNetworkBuilder::with_config`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkConfig {
    /// Sphere radius used for direct (haversine) distances.  Default: 6 371 km.
    pub earth_radius_m: f64,

    /// Expected number of stops.  Only used to pre-size containers.
    pub stop_capacity_hint: usize,

    /// Expected number of buses.  Only used to pre-size containers.
    pub bus_capacity_hint: usize,
}

impl NetworkConfig {
    /// Reject values that would make every direct distance meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.earth_radius_m.is_finite() || self.earth_radius_m <= 0.0 {
            return Err(CoreError::Config(format!(
                "earth radius must be a positive finite number of metres, got {}",
                self.earth_radius_m
            )));
        }
        Ok(())
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            earth_radius_m:     EARTH_RADIUS_M,
            stop_capacity_hint: 100,
            bus_capacity_hint:  2_000,
        }
    }
}
