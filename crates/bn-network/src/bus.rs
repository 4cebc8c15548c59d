//! Bus routes.

use bn_core::{BusId, StopId};

/// A bus route: its number, the ordered stops it lists, and whether the list
/// is a closed loop.
///
/// A linear (`cycled == false`) bus runs `stops` and then back again, so
/// `[A, B, C]` is travelled as `A B C B A`.  A cyclic bus runs `stops` once;
/// callers supply it with the first stop repeated at the end.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bus {
    pub id:     BusId,
    pub stops:  Vec<StopId>,
    pub cycled: bool,
}

impl Bus {
    pub fn new(id: BusId, stops: Vec<StopId>, cycled: bool) -> Self {
        Self { id, stops, cycled }
    }

    /// Adjacent `(from, to)` pairs in listed order.  Empty for 0 or 1 stops.
    #[inline]
    pub fn hops(&self) -> impl Iterator<Item = (StopId, StopId)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }

    /// Number of stop visits on one full run of the route.
    pub fn stops_on_route(&self) -> usize {
        if self.cycled {
            self.stops.len()
        } else {
            (self.stops.len() * 2).saturating_sub(1)
        }
    }
}
