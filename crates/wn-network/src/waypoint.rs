//! Per-waypoint state: status, ownership, capacity, and docked travelers.

use wn_core::{FactionId, PayloadCapacity, PlatformId, TravelerId};

// ── WaypointStatus ────────────────────────────────────────────────────────────

/// Lifecycle status of a relay waypoint.
///
/// `Destroyed` is terminal; `Captured` changes ownership but keeps the
/// waypoint alive.  Neither removes the waypoint from the graph.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WaypointStatus {
    /// Fully operational (default state at creation).
    #[default]
    Online,
    /// Operational but degraded — still traversable.
    Damaged,
    /// Taken by another faction; excluded from route planning.
    Captured,
    /// Permanently lost; excluded from route planning.
    Destroyed,
}

impl WaypointStatus {
    /// `true` if routes may pass through a waypoint in this status.
    #[inline]
    pub fn is_traversable(self) -> bool {
        matches!(self, WaypointStatus::Online | WaypointStatus::Damaged)
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            WaypointStatus::Online    => "online",
            WaypointStatus::Damaged   => "damaged",
            WaypointStatus::Captured  => "captured",
            WaypointStatus::Destroyed => "destroyed",
        }
    }
}

impl std::fmt::Display for WaypointStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Waypoint ──────────────────────────────────────────────────────────────────

/// A relay node in the transit network.
///
/// Created when a platform entity gains network participation.  The docked
/// list holds travelers currently at the waypoint (including travelers whose
/// booking is queued, loading, or in transit outbound — the transit model is
/// teleport-at-arrival, so a traveler stays docked at its departure waypoint
/// until the hop completes).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    /// Stable external id of the hosting platform entity.
    pub platform: PlatformId,

    /// Current lifecycle status.
    pub status: WaypointStatus,

    /// Owning faction.  Rewritten on capture.
    pub owner: FactionId,

    /// Drive-bank capacity: the most a single departure may carry.
    pub capacity: PayloadCapacity,

    /// Whether the platform carries warp-relay hardware.  Checked by the
    /// registry; non-capable platforms cannot participate in the network.
    pub relay_capable: bool,

    /// Travelers currently docked here.
    pub docked: Vec<TravelerId>,
}

impl Waypoint {
    pub fn new(
        platform:      PlatformId,
        owner:         FactionId,
        capacity:      PayloadCapacity,
        relay_capable: bool,
    ) -> Self {
        Self {
            platform,
            status: WaypointStatus::Online,
            owner,
            capacity,
            relay_capable,
            docked: Vec::new(),
        }
    }

    /// Dock `traveler` here.  Idempotent: a traveler is never listed twice.
    pub fn dock(&mut self, traveler: TravelerId) {
        if !self.docked.contains(&traveler) {
            self.docked.push(traveler);
        }
    }

    /// Remove `traveler` from the docked list.  Returns `true` if it was
    /// present.
    pub fn undock(&mut self, traveler: TravelerId) -> bool {
        match self.docked.iter().position(|&t| t == traveler) {
            Some(i) => {
                self.docked.remove(i);
                true
            }
            None => false,
        }
    }

    /// Remove and return every docked traveler (destruction eviction).
    pub fn evict_all(&mut self) -> Vec<TravelerId> {
        std::mem::take(&mut self.docked)
    }

    /// `true` if routes may pass through this waypoint (ground truth, not
    /// any requester's belief).
    #[inline]
    pub fn is_traversable(&self) -> bool {
        self.status.is_traversable()
    }
}
