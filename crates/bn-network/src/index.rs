//! Reverse index: stop → buses that visit it.

use std::collections::BTreeSet;

use bn_core::{BusId, StopId};

use crate::{Bus, NetworkError, NetworkResult};

/// Per-stop sets of bus numbers, indexed by `StopId`.
///
/// Built exactly once by [`connect`](Self::connect) after every bus is
/// registered.  `BTreeSet` keeps the numbers sorted for reporting.
#[derive(Default)]
pub struct StopBusIndex {
    by_stop:   Vec<BTreeSet<BusId>>,
    connected: bool,
}

impl StopBusIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the index from `buses` over a registry of `stop_count` stops.
    ///
    /// Every stop in `0..stop_count` gets a (possibly empty) set.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::AlreadyConnected`] on a second call.
    /// - [`NetworkError::UnresolvedStop`] if a bus holds a `StopId` outside
    ///   `0..stop_count`.  The index is left unconnected.
    pub fn connect<'b>(
        &mut self,
        stop_count: usize,
        buses: impl IntoIterator<Item = &'b Bus>,
    ) -> NetworkResult<()> {
        if self.connected {
            return Err(NetworkError::AlreadyConnected);
        }

        let mut by_stop = vec![BTreeSet::new(); stop_count];
        for bus in buses {
            for &stop in &bus.stops {
                let set = by_stop
                    .get_mut(stop.index())
                    .ok_or(NetworkError::UnresolvedStop { bus: bus.id, stop })?;
                set.insert(bus.id);
            }
        }

        self.by_stop = by_stop;
        self.connected = true;
        Ok(())
    }

    /// Buses visiting `stop`.  `None` for an id outside the indexed range;
    /// `Some(empty)` for a known stop no bus visits.
    pub fn buses_at(&self, stop: StopId) -> Option<&BTreeSet<BusId>> {
        self.by_stop.get(stop.index())
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}
