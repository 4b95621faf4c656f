//! The network registry: a consistency gate, not a scheduler.
//!
//! Validates that every waypoint has the capacity/ownership data it needs to
//! participate in the network, and maintains the `PlatformId → WaypointId`
//! index so cross-system lookups are O(1) map hits instead of linear scans
//! over the waypoint table.

use rustc_hash::FxHashMap;

use wn_core::{PlatformId, WaypointId};

use crate::graph::WaypointGraph;
use crate::{NetworkError, NetworkResult};

/// Validation gate + incremental platform-id index.
#[derive(Debug, Default)]
pub struct NetworkRegistry {
    index: FxHashMap<PlatformId, WaypointId>,
}

impl NetworkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate every waypoint in `graph` and rebuild the platform index.
    ///
    /// Checks, per waypoint:
    /// - the hosting platform is relay-capable;
    /// - the capacity descriptor is non-zero in both dimensions;
    /// - an owning faction is set;
    /// - no two waypoints share a platform id.
    ///
    /// On error the index is left empty so a half-validated network is never
    /// queryable.
    pub fn rebuild(&mut self, graph: &WaypointGraph) -> NetworkResult<()> {
        self.index.clear();
        for (id, w) in graph.waypoints() {
            if !w.relay_capable {
                self.index.clear();
                return Err(NetworkError::NotRelayCapable(id));
            }
            if w.capacity.is_zero() {
                self.index.clear();
                return Err(NetworkError::ZeroCapacity(id));
            }
            if w.owner == wn_core::FactionId::INVALID {
                self.index.clear();
                return Err(NetworkError::NoOwner(id));
            }
            if self.index.insert(w.platform, id).is_some() {
                self.index.clear();
                return Err(NetworkError::DuplicatePlatform(w.platform));
            }
        }
        Ok(())
    }

    /// Resolve a platform entity to its waypoint, if registered.
    #[inline]
    pub fn lookup(&self, platform: PlatformId) -> Option<WaypointId> {
        self.index.get(&platform).copied()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
