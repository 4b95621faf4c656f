//! Requester-side belief about network state.
//!
//! `KnownFacts` holds only *deviations* from the default belief: waypoints
//! are created `Online`, so an empty fact set means "everything is fine as
//! far as I know".  Staleness is then exactly "a fact not yet learned" — no
//! snapshot copying, no synchronization with ground truth.

use rustc_hash::FxHashMap;

use wn_core::{FactionId, WaypointId};
use wn_network::{NetworkFact, WaypointStatus};

// ── KnownFacts ────────────────────────────────────────────────────────────────

/// One requester's (possibly stale) view of waypoint statuses.
#[derive(Clone, Debug, Default)]
pub struct KnownFacts {
    /// Learned status deviations.  Unlisted waypoints are believed `Online`.
    statuses: FxHashMap<WaypointId, WaypointStatus>,
}

impl KnownFacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// The status this requester believes `waypoint` has.
    #[inline]
    pub fn believed_status(&self, waypoint: WaypointId) -> WaypointStatus {
        self.statuses
            .get(&waypoint)
            .copied()
            .unwrap_or(WaypointStatus::Online)
    }

    /// `true` if the requester would plan a route through `waypoint`.
    #[inline]
    pub fn believes_traversable(&self, waypoint: WaypointId) -> bool {
        self.believed_status(waypoint).is_traversable()
    }

    /// Absorb a propagated network fact.
    pub fn learn(&mut self, fact: &NetworkFact) {
        match *fact {
            NetworkFact::Captured { waypoint, .. } => {
                self.statuses.insert(waypoint, WaypointStatus::Captured);
            }
            NetworkFact::Destroyed { waypoint, .. } => {
                self.statuses.insert(waypoint, WaypointStatus::Destroyed);
            }
        }
    }

    /// Record a status directly (scans, rumors, host-side seeding).
    pub fn learn_status(&mut self, waypoint: WaypointId, status: WaypointStatus) {
        self.statuses.insert(waypoint, status);
    }

    /// Number of learned deviations.
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

// ── KnowledgeMap ──────────────────────────────────────────────────────────────

/// Per-faction known facts.
///
/// The knowledge collaborator owns propagation policy; this map is just where
/// the delivered facts land.  Factions with no entry plan with default belief
/// (everything `Online`).
#[derive(Debug, Default)]
pub struct KnowledgeMap {
    by_faction: FxHashMap<FactionId, KnownFacts>,
}

impl KnowledgeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The facts `faction` currently knows.  Missing entries read as the
    /// default belief.
    pub fn known_for(&self, faction: FactionId) -> KnownFacts {
        self.by_faction.get(&faction).cloned().unwrap_or_default()
    }

    /// Borrow the facts for `faction` without cloning, if any are recorded.
    pub fn get(&self, faction: FactionId) -> Option<&KnownFacts> {
        self.by_faction.get(&faction)
    }

    /// Mutable facts for `faction`, created on first touch.
    pub fn known_mut(&mut self, faction: FactionId) -> &mut KnownFacts {
        self.by_faction.entry(faction).or_default()
    }

    /// Deliver `fact` to a single faction.
    pub fn deliver(&mut self, faction: FactionId, fact: &NetworkFact) {
        self.known_mut(faction).learn(fact);
    }

    /// Deliver `fact` to every faction that already has an entry.
    /// Instant-propagation convenience for omniscient hosts and tests.
    pub fn broadcast(&mut self, fact: &NetworkFact) {
        for facts in self.by_faction.values_mut() {
            facts.learn(fact);
        }
    }
}
