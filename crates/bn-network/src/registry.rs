//! Stop registry: the single owner of every `Stop` record.
//!
//! Stops are kept in an arena (`Vec<Stop>`) addressed by `StopId`, so the id
//! is also the index.  Only the registry hashes names; everything downstream
//! works with ids.

use rustc_hash::FxHashMap;

use bn_core::{GeoPoint, StopId};

/// A named stop.
///
/// A stop can be referenced (by a bus or a distance declaration) before its
/// own coordinates are known.  Until then `pos` is a placeholder and
/// `located` is `false`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub id:      StopId,
    pub name:    String,
    pub pos:     GeoPoint,
    pub located: bool,
}

/// Name → id mapping plus the stop arena.
#[derive(Default)]
pub struct StopRegistry {
    stops:   Vec<Stop>,
    by_name: FxHashMap<String, StopId>,
}

impl StopRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected number of stops.
    pub fn with_capacity(stops: usize) -> Self {
        Self {
            stops:   Vec::with_capacity(stops),
            by_name: FxHashMap::with_capacity_and_hasher(stops, Default::default()),
        }
    }

    /// Return the id for `name`, creating an unlocated stop with the next
    /// sequential id on first sight.
    pub fn get_or_create(&mut self, name: &str) -> StopId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = StopId(self.stops.len() as u32);
        self.stops.push(Stop {
            id,
            name:    name.to_owned(),
            pos:     GeoPoint::default(),
            located: false,
        });
        self.by_name.insert(name.to_owned(), id);
        id
    }

    /// Record the coordinates of `name` (given in degrees), creating the stop
    /// if needed.
    ///
    /// Coordinates are immutable once set: a second call keeps the first
    /// position and logs a warning if the new one differs.
    pub fn set_coordinates(&mut self, name: &str, lat_deg: f64, lon_deg: f64) -> StopId {
        let id = self.get_or_create(name);
        let pos = GeoPoint::from_degrees(lat_deg, lon_deg);
        let stop = &mut self.stops[id.index()];
        if stop.located {
            if stop.pos != pos {
                log::warn!(
                    "stop {name:?} already located at {}; ignoring {pos}",
                    stop.pos
                );
            }
        } else {
            stop.pos = pos;
            stop.located = true;
        }
        id
    }

    pub fn id_of(&self, name: &str) -> Option<StopId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.index())
    }

    /// Direct arena access.  Panics on an id this registry did not issue.
    #[inline]
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// All stops in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter()
    }
}
