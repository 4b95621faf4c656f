//! Departure scheduling: interval evaluation plus greedy capacity packing.

use wn_core::{BookingId, LinkId, Payload, SimClock};
use wn_network::WaypointGraph;

use crate::booking::BookingState;
use crate::store::BookingStore;

/// Evaluate every link's schedule at the current tick and dispatch due
/// departures.  Returns the number of bookings that departed.
///
/// For each link whose interval has elapsed:
///
/// 1. Skip it if the origin waypoint is captured or destroyed — a lost
///    waypoint's service is suspended, which is what traps late arrivals.
/// 2. Pack the queue first-fit in queue order: a booking is admitted only if
///    both the running mass and volume totals stay within the origin
///    waypoint's capacity descriptor.  Bookings that don't fit stay queued
///    for the next departure — no reordering, no aging.
/// 3. Admitted bookings go `Loading`, then depart `InTransit` with
///    `expected_arrival = now + travel_ticks`.
/// 4. The service's `last_departure_tick` advances whether or not anything
///    was waiting: the shuttle runs on schedule, full or empty.
///
/// No writes happen in playback mode.
pub fn process_departures(
    graph: &mut WaypointGraph,
    store: &mut BookingStore,
    clock: &SimClock,
) -> usize {
    if !clock.can_write() {
        return 0;
    }
    let now = clock.current_tick;
    let mut departed = 0;

    // LinkIds are dense; ascending iteration keeps departures deterministic.
    for i in 0..graph.link_count() {
        let link_id = LinkId(i as u32);
        let Ok(link) = graph.link(link_id) else { continue };
        if !link.service.is_due(link.schedule, now) {
            continue;
        }
        let from         = link.from;
        let travel_ticks = link.travel_ticks;

        let Ok(origin) = graph.waypoint(from) else { continue };
        if !origin.is_traversable() {
            continue;
        }
        let capacity = origin.capacity;

        // ── First-fit greedy packing in queue order ───────────────────────
        let mut admitted: Vec<BookingId> = Vec::new();
        let mut running = Payload::ZERO;
        for id in store.queue_snapshot(link_id) {
            let Ok(booking) = store.get(id) else { continue };
            // Only waiting bookings board; anything else (e.g. still Loading
            // from an interrupted departure) keeps its queue slot.
            if booking.state != BookingState::QueuedAtOrigin {
                continue;
            }
            let next = running + booking.payload;
            if next.fits_within(capacity) {
                running = next;
                admitted.push(id);
            }
        }

        // ── Board, then depart ────────────────────────────────────────────
        for &id in &admitted {
            store.remove_from_queue(link_id, id);
            if let Ok(b) = store.get_mut(id) {
                b.state = BookingState::Loading;
            }
        }
        for &id in &admitted {
            if let Ok(b) = store.get_mut(id) {
                b.depart(now, travel_ticks);
            }
        }
        departed += admitted.len();

        if let Ok(link) = graph.link_mut(link_id) {
            link.service.mark_departure(now);
        }
    }

    departed
}
