//! The `Route` a booking traverses: ordered hops plus a cursor.

use wn_core::WaypointId;

/// A planned path through the network.
///
/// `hops[0]` is the origin and `hops.last()` the destination.  `cursor`
/// always points at the next *unvisited* hop, so a fresh route has
/// `cursor == 1` and a completed route has `cursor == hops.len()`.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Waypoints to visit in order, origin first.
    pub hops: Vec<WaypointId>,
    /// Index of the next unvisited hop.
    pub cursor: usize,
    /// Total planned cost in ticks (sum of link travel weights).
    pub total_cost: u64,
}

impl Route {
    /// A route over `hops` (origin included), cursor at the first real hop.
    ///
    /// # Panics
    /// Debug-asserts that `hops` is non-empty.
    pub fn new(hops: Vec<WaypointId>, total_cost: u64) -> Self {
        debug_assert!(!hops.is_empty());
        Self { hops, cursor: 1, total_cost }
    }

    /// A zero-hop route for `origin == destination`.  Already complete.
    pub fn trivial(at: WaypointId) -> Self {
        Self {
            hops:       vec![at],
            cursor:     1,
            total_cost: 0,
        }
    }

    pub fn origin(&self) -> WaypointId {
        self.hops[0]
    }

    pub fn destination(&self) -> WaypointId {
        *self.hops.last().unwrap_or(&WaypointId::INVALID)
    }

    /// The next waypoint to travel to, or `None` once the route is complete.
    #[inline]
    pub fn next_hop(&self) -> Option<WaypointId> {
        self.hops.get(self.cursor).copied()
    }

    /// The waypoint most recently reached (the current position's hop).
    #[inline]
    pub fn current_hop(&self) -> WaypointId {
        self.hops[self.cursor - 1]
    }

    /// Advance the cursor past the hop just reached.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(self.cursor < self.hops.len());
        self.cursor += 1;
    }

    /// `true` once every hop has been visited.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.hops.len()
    }

    /// Hops not yet reached, next hop first.
    #[inline]
    pub fn remaining(&self) -> &[WaypointId] {
        &self.hops[self.cursor.min(self.hops.len())..]
    }

    /// Number of transit legs in the full route.
    #[inline]
    pub fn leg_count(&self) -> usize {
        self.hops.len().saturating_sub(1)
    }

    /// `true` if `waypoint` appears anywhere in the not-yet-visited tail
    /// (including the hop currently being travelled toward).
    pub fn references_ahead(&self, waypoint: WaypointId) -> bool {
        self.remaining().contains(&waypoint)
    }
}
