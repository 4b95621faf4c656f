//! Network facts emitted for the external knowledge collaborator.
//!
//! The core does not model propagation delay; it only *emits* facts.  Remote
//! observers perceive a capture or destruction once (and if) the knowledge
//! system delivers the fact to them, producing intentional windows of stale
//! belief — ships still en route to a dead waypoint, allies believing it
//! silent rather than gone.

use wn_core::{FactionId, Tick, WaypointId};

/// A world-state change other systems may learn about asynchronously.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NetworkFact {
    /// `waypoint` changed hands at `tick`.
    Captured {
        waypoint:  WaypointId,
        new_owner: FactionId,
        tick:      Tick,
    },
    /// `waypoint` was destroyed at `tick`.
    Destroyed { waypoint: WaypointId, tick: Tick },
}

impl NetworkFact {
    /// The waypoint this fact is about.
    pub fn waypoint(&self) -> WaypointId {
        match *self {
            NetworkFact::Captured { waypoint, .. } => waypoint,
            NetworkFact::Destroyed { waypoint, .. } => waypoint,
        }
    }
}

/// Append-only buffer of emitted facts, drained by the knowledge collaborator
/// once per tick (or less often — facts keep accumulating until drained).
#[derive(Debug, Default)]
pub struct FactLog {
    facts: Vec<NetworkFact>,
}

impl FactLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fact for later pickup.
    pub fn emit(&mut self, fact: NetworkFact) {
        self.facts.push(fact);
    }

    /// Remove and return all pending facts, in emission order.
    pub fn drain(&mut self) -> Vec<NetworkFact> {
        std::mem::take(&mut self.facts)
    }

    /// Peek at pending facts without draining.
    pub fn pending(&self) -> &[NetworkFact] {
        &self.facts
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}
