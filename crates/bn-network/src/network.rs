//! Transit network facade: ingestion, connection, and queries.
//!
//! # Lifecycle
//!
//! ```text
//! TransitNetworkBuilder ──connect_network()──▶ TransitNetwork
//!   register_stop                                bus_metrics
//!   declare_distance                             stop_buses
//!   register_bus
//! ```
//!
//! `connect_network` consumes the builder, so the stop/bus/distance data is
//! frozen before the first query and the connect step cannot run twice.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use bn_core::{BusId, NetworkConfig, StopId};

use crate::{
    Bus, BusMetrics, DistanceCache, NetworkError, NetworkResult, RouteMetricsEngine,
    StopBusIndex, StopRegistry,
};

// ── TransitNetworkBuilder ─────────────────────────────────────────────────────

/// Collects stops, declared distances, and buses in any order, then call
/// [`connect_network`](Self::connect_network).
///
/// # Example
///
/// ```
/// use bn_core::BusId;
/// use bn_network::TransitNetworkBuilder;
///
/// let mut b = TransitNetworkBuilder::new();
/// b.register_bus(BusId(1), ["A", "B"], false);
/// b.register_stop("A", 55.60, 37.20);
/// b.register_stop("B", 55.61, 37.20);
/// b.declare_distance("A", "B", 1_500).unwrap();
///
/// let mut net = b.connect_network().unwrap();
/// let m = net.bus_metrics(BusId(1)).unwrap().unwrap();
/// assert_eq!(m.stops_on_route, 3);
/// assert_eq!(m.declared_length, 3_000);
/// ```
pub struct TransitNetworkBuilder {
    config:   NetworkConfig,
    registry: StopRegistry,
    cache:    DistanceCache,
    buses:    FxHashMap<BusId, Bus>,
}

impl TransitNetworkBuilder {
    pub fn new() -> Self {
        Self::from_config(NetworkConfig::default())
    }

    /// Start from a validated custom configuration.
    pub fn with_config(config: NetworkConfig) -> NetworkResult<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: NetworkConfig) -> Self {
        Self {
            registry: StopRegistry::with_capacity(config.stop_capacity_hint),
            cache:    DistanceCache::with_capacity(
                config.stop_capacity_hint,
                config.bus_capacity_hint,
            ),
            buses:    FxHashMap::with_capacity_and_hasher(
                config.bus_capacity_hint,
                Default::default(),
            ),
            config,
        }
    }

    /// Register (or locate) a stop at the given coordinates in degrees.
    pub fn register_stop(&mut self, name: &str, lat_deg: f64, lon_deg: f64) -> StopId {
        self.registry.set_coordinates(name, lat_deg, lon_deg)
    }

    /// Declare the road distance from `from` to `to`.  Either stop may be
    /// registered later.
    pub fn declare_distance(&mut self, from: &str, to: &str, meters: u64) -> NetworkResult<()> {
        let a = self.registry.get_or_create(from);
        let b = self.registry.get_or_create(to);
        self.cache.put_declared(a, b, meters)
    }

    /// Register a bus over the named stops.  Names are resolved to ids now;
    /// stops seen for the first time are created unlocated.
    ///
    /// Registering a number twice replaces the earlier route.
    pub fn register_bus<I, S>(&mut self, number: BusId, stop_names: I, cycled: bool)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stops: Vec<StopId> = stop_names
            .into_iter()
            .map(|name| self.registry.get_or_create(name.as_ref()))
            .collect();

        if self.buses.insert(number, Bus::new(number, stops, cycled)).is_some() {
            log::warn!("bus {number} registered twice; keeping the latest route");
        }
    }

    pub fn stop_count(&self) -> usize {
        self.registry.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    /// Validate every bus against the registry, build the stop→bus index,
    /// and return a query-ready [`TransitNetwork`].
    ///
    /// # Errors
    ///
    /// [`NetworkError::UnknownStop`] if a bus visits a stop whose coordinates
    /// were never registered.  Buses are checked in ascending number order.
    pub fn connect_network(self) -> NetworkResult<TransitNetwork> {
        let mut numbers: Vec<BusId> = self.buses.keys().copied().collect();
        numbers.sort_unstable();

        for number in &numbers {
            let bus = &self.buses[number];
            if let Some(stop) = bus
                .stops
                .iter()
                .map(|&id| self.registry.stop(id))
                .find(|s| !s.located)
            {
                return Err(NetworkError::UnknownStop {
                    bus:  bus.id,
                    name: stop.name.clone(),
                });
            }
        }

        let mut index = StopBusIndex::new();
        index.connect(self.registry.len(), self.buses.values())?;

        log::debug!(
            "connected network: {} stops, {} buses",
            self.registry.len(),
            self.buses.len()
        );

        Ok(TransitNetwork {
            config:   self.config,
            registry: self.registry,
            cache:    self.cache,
            buses:    self.buses,
            index,
        })
    }
}

impl Default for TransitNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ── TransitNetwork ────────────────────────────────────────────────────────────

/// A connected, read-only network.  Queries only fill caches.
pub struct TransitNetwork {
    config:   NetworkConfig,
    registry: StopRegistry,
    cache:    DistanceCache,
    buses:    FxHashMap<BusId, Bus>,
    index:    StopBusIndex,
}

impl TransitNetwork {
    /// Metrics for bus `number`, or `None` if no such bus exists.
    ///
    /// Repeated calls return bit-identical results from the cache.
    pub fn bus_metrics(&mut self, number: BusId) -> NetworkResult<Option<BusMetrics>> {
        let Some(bus) = self.buses.get(&number) else {
            return Ok(None);
        };
        let mut engine =
            RouteMetricsEngine::new(&self.registry, &mut self.cache, self.config.earth_radius_m);
        engine.metrics(bus).map(Some)
    }

    /// Sorted bus numbers serving `stop_name`; `None` if the stop is unknown.
    pub fn stop_buses(&self, stop_name: &str) -> Option<&BTreeSet<BusId>> {
        let id = self.registry.id_of(stop_name)?;
        self.index.buses_at(id)
    }

    pub fn bus(&self, number: BusId) -> Option<&Bus> {
        self.buses.get(&number)
    }

    pub fn registry(&self) -> &StopRegistry {
        &self.registry
    }

    pub fn cache(&self) -> &DistanceCache {
        &self.cache
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }
}
