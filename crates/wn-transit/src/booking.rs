//! The booking state machine.

use wn_core::{FactionId, Payload, Tick, TravelerId, WaypointId};
use wn_routing::Route;

// ── FailReason ────────────────────────────────────────────────────────────────

/// Why a booking ended `Failed`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailReason {
    /// Planning found no viable path under the requester's known facts.
    NoRoute,
    /// Cancelled while queued or loading at a waypoint that changed hands.
    CancelledByCapture,
    /// The booking was at, bound for, or routed through a destroyed waypoint.
    UnknownLoss,
    /// A waypoint or link the booking relies on can no longer be resolved.
    EntityMissing,
}

impl FailReason {
    pub fn as_str(self) -> &'static str {
        match self {
            FailReason::NoRoute            => "no route",
            FailReason::CancelledByCapture => "cancelled by capture",
            FailReason::UnknownLoss        => "unknown loss",
            FailReason::EntityMissing      => "entity missing in transit",
        }
    }
}

impl std::fmt::Display for FailReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── BookingState ──────────────────────────────────────────────────────────────

/// Lifecycle of a travel request:
///
/// ```text
/// Requested → QueuedAtOrigin → Loading → InTransit → { Arrived | Failed }
///                  ↑                         │
///                  └──── next leg ───────────┘
/// ```
///
/// `Arrived` and `Failed` are terminal; a `Failed` booking never re-enters
/// any queue.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BookingState {
    /// Created; no route yet.
    Requested,
    /// Routed and waiting in a departure queue.
    QueuedAtOrigin,
    /// Selected for the next departure, boarding in progress.
    Loading,
    /// Travelling toward the route's next hop.
    InTransit,
    /// Reached the final destination.
    Arrived,
    /// Terminally failed.
    Failed(FailReason),
}

impl BookingState {
    /// `true` for `Arrived` and `Failed` — no further transitions.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, BookingState::Arrived | BookingState::Failed(_))
    }

    /// `true` while the booking sits at a waypoint awaiting departure
    /// (the states a capture cancels).
    #[inline]
    pub fn is_waiting(self) -> bool {
        matches!(self, BookingState::QueuedAtOrigin | BookingState::Loading)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BookingState::Requested      => "requested",
            BookingState::QueuedAtOrigin => "queued",
            BookingState::Loading        => "loading",
            BookingState::InTransit      => "in_transit",
            BookingState::Arrived        => "arrived",
            BookingState::Failed(_)      => "failed",
        }
    }
}

// ── Booking ───────────────────────────────────────────────────────────────────

/// A travel request and its lifecycle state through the network.
///
/// Owned by the requester, mutated only by this core.  `origin` tracks the
/// *current* departure waypoint and is rewritten at every intermediate hop;
/// `destination` never changes.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Booking {
    /// The traveler this booking moves.
    pub traveler: TravelerId,
    /// Requesting faction — determines access contracts and known facts.
    pub faction: FactionId,
    /// Current departure waypoint (updated hop by hop).
    pub origin: WaypointId,
    /// Final destination waypoint.
    pub destination: WaypointId,
    /// Mass/volume footprint counted against departure capacity.
    pub payload: Payload,
    /// Lifecycle state.
    pub state: BookingState,
    /// Planned path.  `Some` from successful planning onward.
    /// Invariant: an `InTransit` booking always has a route whose cursor
    /// points at the hop being travelled toward.
    pub route: Option<Route>,
    /// Tick the booking was created.
    pub requested_tick: Tick,
    /// Tick of the current leg's departure (set when admitted).
    pub expected_departure_tick: Tick,
    /// Tick the current leg completes (set when admitted).
    pub expected_arrival_tick: Tick,
}

impl Booking {
    /// A fresh `Requested` booking awaiting route planning.
    pub fn request(
        traveler:    TravelerId,
        faction:     FactionId,
        origin:      WaypointId,
        destination: WaypointId,
        payload:     Payload,
        now:         Tick,
    ) -> Self {
        Self {
            traveler,
            faction,
            origin,
            destination,
            payload,
            state: BookingState::Requested,
            route: None,
            requested_tick: now,
            expected_departure_tick: Tick::ZERO,
            expected_arrival_tick: Tick::ZERO,
        }
    }

    /// Transition to `Failed(reason)`.  No-op if already terminal, so fault
    /// cascades can re-fail without clobbering the original reason.
    pub fn fail(&mut self, reason: FailReason) {
        if !self.state.is_terminal() {
            self.state = BookingState::Failed(reason);
        }
    }

    /// Stamp departure/arrival ticks and go `InTransit`.
    pub fn depart(&mut self, now: Tick, travel_ticks: u32) {
        self.state = BookingState::InTransit;
        self.expected_departure_tick = now;
        self.expected_arrival_tick = now + travel_ticks as u64;
    }

    /// `true` if this booking references `waypoint` as its current origin,
    /// its destination, or any not-yet-visited route hop.
    pub fn references_waypoint(&self, waypoint: WaypointId) -> bool {
        self.origin == waypoint
            || self.destination == waypoint
            || self
                .route
                .as_ref()
                .is_some_and(|r| r.references_ahead(waypoint))
    }
}
