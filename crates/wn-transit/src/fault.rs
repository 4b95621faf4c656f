//! Capture and destruction fault handling.
//!
//! Both handlers apply their full effect atomically within the tick that
//! raised the event, then emit a [`NetworkFact`] for the external knowledge
//! collaborator.  They never touch any requester's `KnownFacts` — remote
//! belief only changes when the knowledge system delivers the fact.

use wn_core::{FactionId, SimClock, TravelerId, WaypointId};
use wn_network::{FactLog, NetworkFact, WaypointGraph, WaypointStatus};

use crate::booking::{BookingState, FailReason};
use crate::store::BookingStore;
use crate::TransitResult;

// ── Reports ───────────────────────────────────────────────────────────────────

/// What a capture did to the booking population.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct CaptureReport {
    /// Queued/loading bookings cancelled at the captured waypoint.
    pub cancelled: usize,
}

/// What a destruction did.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct DestructionReport {
    /// Bookings failed (in transit, queued, or loading).
    pub failed: usize,
    /// Travelers ejected from the docked list — they end up in nearby space,
    /// owned by the caller, not destroyed.
    pub evicted: Vec<TravelerId>,
}

// ── Capture ───────────────────────────────────────────────────────────────────

/// Handle `waypoint` changing hands to `new_owner`.
///
/// Atomically within this tick:
/// - status becomes `Captured` and ownership transfers;
/// - every touching link's contracts are discarded and replaced with a single
///   full-access contract for the new owner;
/// - bookings `QueuedAtOrigin`/`Loading` whose current origin *or*
///   destination is this waypoint fail with `CancelledByCapture`;
/// - bookings already `InTransit` toward or through the waypoint are left
///   alone — they are allowed to arrive (the trap/ambush outcome) rather
///   than silently vanishing.
///
/// No writes happen in playback mode.
pub fn handle_capture(
    graph:     &mut WaypointGraph,
    store:     &mut BookingStore,
    log:       &mut FactLog,
    waypoint:  WaypointId,
    new_owner: FactionId,
    clock:     &SimClock,
) -> TransitResult<CaptureReport> {
    let mut report = CaptureReport::default();
    if !clock.can_write() {
        return Ok(report);
    }

    let wp = graph.waypoint_mut(waypoint)?;
    wp.status = WaypointStatus::Captured;
    wp.owner = new_owner;
    graph.rewrite_contracts_around(waypoint, new_owner);

    for (_, booking) in store.iter_mut() {
        if booking.state.is_waiting()
            && (booking.origin == waypoint || booking.destination == waypoint)
        {
            booking.fail(FailReason::CancelledByCapture);
            report.cancelled += 1;
        }
    }
    store.purge_terminal();

    log.emit(NetworkFact::Captured {
        waypoint,
        new_owner,
        tick: clock.current_tick,
    });
    Ok(report)
}

// ── Destruction ───────────────────────────────────────────────────────────────

/// Handle `waypoint` being destroyed.
///
/// Atomically within this tick:
/// - status becomes `Destroyed` (the entity persists; the id stays valid);
/// - every `InTransit` booking referencing the waypoint — as current origin,
///   destination, or any unvisited route hop — fails with `UnknownLoss` and
///   never returns to a queue;
/// - every booking still `QueuedAtOrigin`/`Loading` that references the
///   waypoint fails the same way;
/// - all docked travelers are evicted and returned to the caller;
/// - a destruction fact is emitted for asynchronous propagation, so remote
///   observers keep stale belief until the news reaches them.
///
/// No writes happen in playback mode.
pub fn handle_destruction(
    graph:    &mut WaypointGraph,
    store:    &mut BookingStore,
    log:      &mut FactLog,
    waypoint: WaypointId,
    clock:    &SimClock,
) -> TransitResult<DestructionReport> {
    let mut report = DestructionReport::default();
    if !clock.can_write() {
        return Ok(report);
    }

    let wp = graph.waypoint_mut(waypoint)?;
    wp.status = WaypointStatus::Destroyed;
    report.evicted = wp.evict_all();

    for (_, booking) in store.iter_mut() {
        let affected = matches!(
            booking.state,
            BookingState::InTransit | BookingState::QueuedAtOrigin | BookingState::Loading
        );
        if affected && booking.references_waypoint(waypoint) {
            booking.fail(FailReason::UnknownLoss);
            report.failed += 1;
        }
    }
    store.purge_terminal();

    log.emit(NetworkFact::Destroyed {
        waypoint,
        tick: clock.current_tick,
    });
    Ok(report)
}
