//! Memoized distances and per-bus aggregates.
//!
//! # Two distance relations
//!
//! | Relation   | Source                 | Storage                         |
//! |------------|------------------------|---------------------------------|
//! | direct     | haversine of coords    | symmetric, written both ways    |
//! | declared   | explicit input (m)     | directional, read with fallback |
//!
//! Both are row-per-stop containers indexed by `StopId`; each row is a small
//! `FxHashMap` keyed by the destination id.  Rows grow on demand, so the
//! cache needs no up-front stop count.
//!
//! A declared lookup tries `(a, b)` and then `(b, a)`.  Road distances are
//! assumed symmetric unless both directions were declared.

use rustc_hash::FxHashMap;

use bn_core::{BusId, StopId};

use crate::{NetworkError, NetworkResult};

type Row<V> = Vec<FxHashMap<StopId, V>>;

/// Lazily filled aggregate slots for one bus.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
struct BusAggregates {
    unique_stops:    Option<usize>,
    direct_length:   Option<f64>,
    declared_length: Option<u64>,
}

#[derive(Default)]
pub struct DistanceCache {
    direct:   Row<f64>,
    declared: Row<u64>,
    buses:    FxHashMap<BusId, BusAggregates>,
}

#[inline]
fn lookup<V: Copy>(rows: &Row<V>, a: StopId, b: StopId) -> Option<V> {
    rows.get(a.index())?.get(&b).copied()
}

#[inline]
fn row_mut<V>(rows: &mut Row<V>, a: StopId) -> &mut FxHashMap<StopId, V> {
    if rows.len() <= a.index() {
        rows.resize_with(a.index() + 1, FxHashMap::default);
    }
    &mut rows[a.index()]
}

impl DistanceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the per-stop rows and the per-bus table.
    pub fn with_capacity(stops: usize, buses: usize) -> Self {
        Self {
            direct:   Vec::with_capacity(stops),
            declared: Vec::with_capacity(stops),
            buses:    FxHashMap::with_capacity_and_hasher(buses, Default::default()),
        }
    }

    // ── Direct (geodesic) ─────────────────────────────────────────────────

    #[inline]
    pub fn get_direct(&self, a: StopId, b: StopId) -> Option<f64> {
        lookup(&self.direct, a, b)
    }

    /// Store the direct distance for the unordered pair `{a, b}`.
    ///
    /// An existing entry is kept as is, so `get_direct(a, b)` and
    /// `get_direct(b, a)` are always bit-identical.
    ///
    /// # Errors
    ///
    /// [`NetworkError::InvalidDistance`] if `value` is negative or not finite.
    pub fn put_direct(&mut self, a: StopId, b: StopId, value: f64) -> NetworkResult<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(NetworkError::InvalidDistance { from: a, to: b, value });
        }
        if self.get_direct(a, b).is_some() {
            return Ok(());
        }
        row_mut(&mut self.direct, a).insert(b, value);
        row_mut(&mut self.direct, b).insert(a, value);
        Ok(())
    }

    /// Number of unordered pairs with a cached direct distance.
    pub fn direct_pair_count(&self) -> usize {
        let entries: usize = self.direct.iter().map(FxHashMap::len).sum();
        let self_loops = self
            .direct
            .iter()
            .enumerate()
            .filter(|(i, row)| row.keys().any(|k| k.index() == *i))
            .count();
        (entries + self_loops) / 2
    }

    // ── Declared (road) ───────────────────────────────────────────────────

    /// Declared distance from `a` to `b`, falling back to `b → a`.
    #[inline]
    pub fn get_declared(&self, a: StopId, b: StopId) -> Option<u64> {
        lookup(&self.declared, a, b).or_else(|| lookup(&self.declared, b, a))
    }

    /// Declared distance for exactly the ordered pair `a → b`, no fallback.
    #[inline]
    pub fn get_declared_exact(&self, a: StopId, b: StopId) -> Option<u64> {
        lookup(&self.declared, a, b)
    }

    /// Record the declared distance for the ordered pair `a → b`.
    ///
    /// Re-declaring the same value is a no-op.
    ///
    /// # Errors
    ///
    /// [`NetworkError::ConflictingDistance`] if `a → b` was already declared
    /// with a different value.
    pub fn put_declared(&mut self, a: StopId, b: StopId, value: u64) -> NetworkResult<()> {
        match lookup(&self.declared, a, b) {
            Some(existing) if existing != value => Err(NetworkError::ConflictingDistance {
                from: a,
                to:   b,
                existing,
                new:  value,
            }),
            Some(_) => Ok(()),
            None => {
                row_mut(&mut self.declared, a).insert(b, value);
                Ok(())
            }
        }
    }

    // ── Per-bus aggregates ────────────────────────────────────────────────

    pub fn bus_unique(&self, bus: BusId) -> Option<usize> {
        self.buses.get(&bus)?.unique_stops
    }

    pub fn put_bus_unique(&mut self, bus: BusId, count: usize) {
        self.buses.entry(bus).or_default().unique_stops = Some(count);
    }

    pub fn bus_direct_length(&self, bus: BusId) -> Option<f64> {
        self.buses.get(&bus)?.direct_length
    }

    pub fn put_bus_direct_length(&mut self, bus: BusId, value: f64) {
        self.buses.entry(bus).or_default().direct_length = Some(value);
    }

    pub fn bus_declared_length(&self, bus: BusId) -> Option<u64> {
        self.buses.get(&bus)?.declared_length
    }

    pub fn put_bus_declared_length(&mut self, bus: BusId, value: u64) {
        self.buses.entry(bus).or_default().declared_length = Some(value);
    }
}
