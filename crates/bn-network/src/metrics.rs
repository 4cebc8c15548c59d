//! Route metrics: lengths, unique stops, and curvature per bus.
//!
//! # Cost model
//!
//! Every hop of a route needs one distance.  Direct distances cost a handful
//! of trig calls; declared ones are plain lookups.  Both go through the
//! [`DistanceCache`], so a road segment shared by many buses is evaluated
//! once, and a bus's aggregates are computed at most once per network.
//!
//! # Linear vs. cyclic
//!
//! A linear bus's hop sum is doubled (there and back); a cyclic bus's is
//! taken as is.  Buses with fewer than two stops have no hops and length 0.

use rustc_hash::FxHashSet;

use bn_core::{BusId, GeoPoint, StopId};

use crate::{Bus, DistanceCache, NetworkError, NetworkResult, StopRegistry};

// ── BusMetrics ────────────────────────────────────────────────────────────────

/// Everything a "describe bus" query reports.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusMetrics {
    pub bus:             BusId,
    pub stops_on_route:  usize,
    pub unique_stops:    usize,
    /// Sum of declared road distances, metres.
    pub declared_length: u64,
    /// Sum of great-circle distances, metres.
    pub direct_length:   f64,
    /// `declared_length / direct_length`.
    pub curvature:       f64,
}

impl BusMetrics {
    /// A road route can't be shorter than the straight line; a curvature
    /// below 1 means the declared distances contradict the coordinates.
    pub fn curvature_is_plausible(&self) -> bool {
        self.curvature >= 1.0
    }
}

// ── RouteMetricsEngine ────────────────────────────────────────────────────────

/// Computes per-bus metrics against a registry, filling `cache` as it goes.
///
/// The engine is a short-lived borrow bundle: build one per query.
pub struct RouteMetricsEngine<'a> {
    registry: &'a StopRegistry,
    cache:    &'a mut DistanceCache,
    radius_m: f64,
}

impl<'a> RouteMetricsEngine<'a> {
    pub fn new(registry: &'a StopRegistry, cache: &'a mut DistanceCache, radius_m: f64) -> Self {
        Self { registry, cache, radius_m }
    }

    /// Great-circle route length, metres.
    pub fn direct_length(&mut self, bus: &Bus) -> NetworkResult<f64> {
        if let Some(v) = self.cache.bus_direct_length(bus.id) {
            return Ok(v);
        }

        let mut total = 0.0;
        for (from, to) in bus.hops() {
            total += self.direct_distance(bus.id, from, to)?;
        }
        if !bus.cycled {
            total *= 2.0;
        }

        log::debug!("bus {}: direct length {total:.3} m", bus.id);
        self.cache.put_bus_direct_length(bus.id, total);
        Ok(total)
    }

    /// Declared road route length, metres.
    ///
    /// # Errors
    ///
    /// [`NetworkError::MissingDeclaredDistance`] on the first hop with no
    /// declared distance in either direction, and
    /// [`NetworkError::LengthOverflow`] if the sum exceeds `u64`.  Nothing is
    /// cached for the bus in either case.
    pub fn declared_length(&mut self, bus: &Bus) -> NetworkResult<u64> {
        if let Some(v) = self.cache.bus_declared_length(bus.id) {
            return Ok(v);
        }

        let mut total: u64 = 0;
        for (from, to) in bus.hops() {
            let d = self
                .cache
                .get_declared(from, to)
                .ok_or_else(|| self.missing(from, to))?;
            total = total.checked_add(d).ok_or(NetworkError::LengthOverflow { bus: bus.id })?;
        }
        if !bus.cycled {
            total = total.checked_mul(2).ok_or(NetworkError::LengthOverflow { bus: bus.id })?;
        }

        log::debug!("bus {}: declared length {total} m", bus.id);
        self.cache.put_bus_declared_length(bus.id, total);
        Ok(total)
    }

    pub fn unique_stops(&mut self, bus: &Bus) -> usize {
        if let Some(v) = self.cache.bus_unique(bus.id) {
            return v;
        }
        let count = bus.stops.iter().collect::<FxHashSet<_>>().len();
        self.cache.put_bus_unique(bus.id, count);
        count
    }

    #[inline]
    pub fn stops_on_route(&self, bus: &Bus) -> usize {
        bus.stops_on_route()
    }

    /// Ratio of declared to direct length.
    ///
    /// A route with no extent in either sense (0 / 0) has curvature 1.  A
    /// positive declared length over a zero direct length (all stops at one
    /// point) is `f64::INFINITY`.
    pub fn curvature(&mut self, bus: &Bus) -> NetworkResult<f64> {
        let declared = self.declared_length(bus)?;
        let direct = self.direct_length(bus)?;

        let curvature = if direct > 0.0 {
            declared as f64 / direct
        } else if declared == 0 {
            1.0
        } else {
            f64::INFINITY
        };

        if curvature < 1.0 {
            log::warn!(
                "bus {}: declared length {declared} m is shorter than direct length {direct:.1} m",
                bus.id
            );
        }
        Ok(curvature)
    }

    /// All metrics for `bus`.
    pub fn metrics(&mut self, bus: &Bus) -> NetworkResult<BusMetrics> {
        let unique_stops = self.unique_stops(bus);
        let curvature = self.curvature(bus)?;
        Ok(BusMetrics {
            bus: bus.id,
            stops_on_route: bus.stops_on_route(),
            unique_stops,
            declared_length: self.declared_length(bus)?,
            direct_length: self.direct_length(bus)?,
            curvature,
        })
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn direct_distance(&mut self, bus: BusId, from: StopId, to: StopId) -> NetworkResult<f64> {
        if let Some(d) = self.cache.get_direct(from, to) {
            return Ok(d);
        }
        let a = self.position(bus, from)?;
        let b = self.position(bus, to)?;
        let d = a.distance_m(b, self.radius_m);
        self.cache.put_direct(from, to, d)?;
        Ok(d)
    }

    fn position(&self, bus: BusId, stop: StopId) -> NetworkResult<GeoPoint> {
        self.registry
            .get(stop)
            .map(|s| s.pos)
            .ok_or(NetworkError::UnresolvedStop { bus, stop })
    }

    fn missing(&self, from: StopId, to: StopId) -> NetworkError {
        let name = |id: StopId| {
            self.registry
                .get(id)
                .map_or_else(|| id.to_string(), |s| s.name.clone())
        };
        NetworkError::MissingDeclaredDistance { from: name(from), to: name(to) }
    }
}
