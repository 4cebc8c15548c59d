//! Geographic coordinate type and great-circle distance.
//!
//! Unlike most GIS code, `GeoPoint` stores **radians**.  Stops are converted
//! once at registration and every distance evaluation afterwards skips the
//! degree conversion.

use std::f64::consts::PI;

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

const DEG_TO_RAD: f64 = PI / 180.0;

/// A WGS-84 geographic coordinate in radians.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Construct from values already in radians.
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct from decimal degrees (`rad = deg * π/180`).
    #[inline]
    pub fn from_degrees(lat_deg: f64, lon_deg: f64) -> Self {
        Self {
            lat: lat_deg * DEG_TO_RAD,
            lon: lon_deg * DEG_TO_RAD,
        }
    }

    /// Haversine great-circle distance in metres on a sphere of `radius_m`.
    ///
    /// Symmetric in its arguments and exactly `0.0` for identical points.
    pub fn distance_m(self, other: GeoPoint, radius_m: f64) -> f64 {
        let d_lat = other.lat - self.lat;
        let d_lon = other.lon - self.lon;

        let a = (d_lon * 0.5).sin().powi(2) * self.lat.cos() * other.lat.cos()
            + (d_lat * 0.5).sin().powi(2);

        // Rounding can push `a` a hair above 1 for antipodal points.
        2.0 * radius_m * a.min(1.0).sqrt().asin()
    }

    /// [`distance_m`](Self::distance_m) with [`EARTH_RADIUS_M`].
    #[inline]
    pub fn earth_distance_m(self, other: GeoPoint) -> f64 {
        self.distance_m(other, EARTH_RADIUS_M)
    }

    /// Latitude in degrees, for display.
    #[inline]
    pub fn lat_deg(self) -> f64 {
        self.lat / DEG_TO_RAD
    }

    /// Longitude in degrees, for display.
    #[inline]
    pub fn lon_deg(self) -> f64 {
        self.lon / DEG_TO_RAD
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat_deg(), self.lon_deg())
    }
}
