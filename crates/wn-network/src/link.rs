//! Transit links: edges, per-faction access contracts, and departure schedules.

use wn_core::{FactionId, Tick, WaypointId};

// ── AccessLevel ───────────────────────────────────────────────────────────────

/// How much of a link's service a faction may use.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessLevel {
    /// No transit permitted — the planner excludes this link.
    Denied,
    /// Normal paying access.
    Standard,
    /// Unrestricted access (granted to the owning faction on capture).
    Full,
}

impl AccessLevel {
    /// `true` if the planner may route this faction over the link.
    #[inline]
    pub fn permits_transit(self) -> bool {
        !matches!(self, AccessLevel::Denied)
    }
}

// ── AccessContract ────────────────────────────────────────────────────────────

/// One faction's terms of use for a link.
///
/// `discount_factor` is part of the contract data handed to the economy
/// collaborator; the core stores it but does not price routes with it.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessContract {
    pub faction: FactionId,
    pub level: AccessLevel,
    /// Multiplier on the link's base transit fee, 1.0 = full price.
    pub discount_factor: f32,
}

impl AccessContract {
    /// The contract installed for the new owner when a waypoint is captured.
    pub fn full_access(faction: FactionId) -> Self {
        Self {
            faction,
            level: AccessLevel::Full,
            discount_factor: 0.0,
        }
    }
}

// ── ScheduleMode ──────────────────────────────────────────────────────────────

/// Departure policy for a link's service.
///
/// `#[non_exhaustive]`: hosts may gain richer modes (timetables, on-demand)
/// without breaking downstream matches.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ScheduleMode {
    /// Depart every `every_ticks` ticks since the last departure.
    Interval { every_ticks: u64 },
}

// ── ServiceState ──────────────────────────────────────────────────────────────

/// Mutable scheduling state for one link's service.
///
/// The queued load itself lives in the transit crate's per-link queues; this
/// only tracks when the service last ran.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceState {
    /// Tick of the most recent departure (`Tick::ZERO` before the first one).
    pub last_departure_tick: Tick,
}

impl ServiceState {
    /// Whether a departure is due at `now` under `mode`.
    #[inline]
    pub fn is_due(&self, mode: ScheduleMode, now: Tick) -> bool {
        match mode {
            ScheduleMode::Interval { every_ticks } => {
                now.since(self.last_departure_tick) >= every_ticks
            }
        }
    }

    /// Record that a departure happened at `now`.
    #[inline]
    pub fn mark_departure(&mut self, now: Tick) {
        self.last_departure_tick = now;
    }
}

// ── Link ──────────────────────────────────────────────────────────────────────

/// A directed scheduled transit connection between two waypoints.
///
/// # Access rule
///
/// A link with an *empty* contract list is open to every faction at
/// `Standard` level.  Once any contract exists, access is contract-gated:
/// factions without a contract are `Denied`.  Capture installs a single
/// full-access contract for the new owner, which therefore locks everyone
/// else out until new contracts are negotiated.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    /// Source waypoint.
    pub from: WaypointId,
    /// Destination waypoint.
    pub to: WaypointId,
    /// Transit time weight, in ticks.  Also the Dijkstra edge cost.
    pub travel_ticks: u32,
    /// Per-faction terms of use.  Empty = open link.
    pub contracts: Vec<AccessContract>,
    /// Departure policy.
    pub schedule: ScheduleMode,
    /// Mutable scheduling state.
    pub service: ServiceState,
}

impl Link {
    pub fn new(from: WaypointId, to: WaypointId, travel_ticks: u32, schedule: ScheduleMode) -> Self {
        Self {
            from,
            to,
            travel_ticks,
            contracts: Vec::new(),
            schedule,
            service: ServiceState::default(),
        }
    }

    /// Effective access level for `faction` (see the access rule above).
    pub fn access_for(&self, faction: FactionId) -> AccessLevel {
        if self.contracts.is_empty() {
            return AccessLevel::Standard;
        }
        self.contracts
            .iter()
            .find(|c| c.faction == faction)
            .map(|c| c.level)
            .unwrap_or(AccessLevel::Denied)
    }

    /// Discard all contracts and install full access for `new_owner` only.
    /// Applied wholesale on capture.
    pub fn rewrite_contracts_for(&mut self, new_owner: FactionId) {
        self.contracts.clear();
        self.contracts.push(AccessContract::full_access(new_owner));
    }

    /// `true` if this link starts or ends at `waypoint`.
    #[inline]
    pub fn touches(&self, waypoint: WaypointId) -> bool {
        self.from == waypoint || self.to == waypoint
    }
}
