//! Hop-by-hop transit advancement (teleport-at-arrival).

use wn_core::{BookingId, SimClock};
use wn_network::WaypointGraph;

use crate::booking::{BookingState, FailReason};
use crate::store::BookingStore;

/// What one advancement pass did.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct ArrivalReport {
    /// Bookings that reached their final destination.
    pub arrived: usize,
    /// Bookings that completed an intermediate leg and re-entered a queue.
    pub requeued: usize,
    /// Bookings failed for unresolvable references.
    pub failed: usize,
}

/// Advance every `InTransit` booking whose `expected_arrival_tick` has been
/// reached.
///
/// The traveler is undocked from the departure waypoint and docked at the
/// reached hop.  Intermediate hops re-enter `QueuedAtOrigin` on the link
/// toward the following hop; the final hop ends `Arrived`.  A booking whose
/// route, reached waypoint, or onward link can no longer be resolved fails
/// immediately (`EntityMissing`) rather than stalling.
///
/// No writes happen in playback mode.
pub fn process_arrivals(
    graph: &mut WaypointGraph,
    store: &mut BookingStore,
    clock: &SimClock,
) -> ArrivalReport {
    let mut report = ArrivalReport::default();
    if !clock.can_write() {
        return report;
    }
    let now = clock.current_tick;

    // Collect arriving ids first (immutable scan), then mutate.
    let arriving: Vec<BookingId> = store
        .iter()
        .filter(|(_, b)| b.state == BookingState::InTransit && b.expected_arrival_tick <= now)
        .map(|(id, _)| id)
        .collect();

    for id in arriving {
        let Ok(booking) = store.get_mut(id) else { continue };
        let traveler = booking.traveler;
        let from = booking.origin;

        // InTransit invariant: a route exists and its cursor points at the
        // hop being travelled toward.  A missing route is a broken reference.
        let Some(route) = booking.route.as_mut() else {
            booking.fail(FailReason::EntityMissing);
            report.failed += 1;
            continue;
        };
        let Some(reached) = route.next_hop() else {
            booking.fail(FailReason::EntityMissing);
            report.failed += 1;
            continue;
        };
        route.advance();
        let onward = route.next_hop();

        if let Ok(w) = graph.waypoint_mut(from) {
            w.undock(traveler);
        }

        // The reached waypoint must still resolve; its *status* is not
        // checked here — arriving at a captured waypoint is the trap case,
        // and destruction already failed every booking routed through it.
        let Ok(reached_wp) = graph.waypoint_mut(reached) else {
            booking.fail(FailReason::EntityMissing);
            report.failed += 1;
            continue;
        };
        reached_wp.dock(traveler);
        booking.origin = reached;

        // Decide first, enqueue after the booking borrow ends.
        let mut enqueue_on = None;
        match onward {
            // Final hop: done.
            None => {
                booking.state = BookingState::Arrived;
                report.arrived += 1;
            }
            // Intermediate hop: queue for the next leg.
            Some(next) => match graph.link_between(reached, next) {
                Some(link) => {
                    booking.state = BookingState::QueuedAtOrigin;
                    enqueue_on = Some(link);
                    report.requeued += 1;
                }
                None => {
                    booking.fail(FailReason::EntityMissing);
                    report.failed += 1;
                }
            },
        }
        if let Some(link) = enqueue_on {
            store.enqueue(link, id);
        }
    }

    report
}
