//! The `Sim` struct and its tick loop.

use wn_core::{BookingId, FactionId, Payload, SimClock, SimConfig, TravelerId, WaypointId};
use wn_logistics::ClaimBoard;
use wn_network::{FactLog, NetworkRegistry, WaypointGraph};
use wn_routing::{KnowledgeMap, KnownFacts, RoutePlanner};
use wn_transit::{
    Booking, BookingState, FailReason, BookingStore, handle_capture, handle_destruction,
    process_arrivals, process_departures,
};

use crate::{SimObserver, SimResult, TickSummary};

// ── WorldEvent ────────────────────────────────────────────────────────────────

/// Out-of-band world changes raised by the host (combat resolution, scripted
/// scenarios).  Buffered via [`Sim::raise`] and applied during the fault phase
/// of the next tick, so every event lands at a deterministic point in the
/// pipeline regardless of when the host raised it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum WorldEvent {
    /// `waypoint` changes hands to `new_owner`.
    Capture {
        waypoint:  WaypointId,
        new_owner: FactionId,
    },
    /// `waypoint` is destroyed.
    Destroy { waypoint: WaypointId },
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<P>` owns all transit state and drives the fixed-order tick pipeline:
///
/// 1. **Planning**: every `Requested` booking is routed under its requester's
///    known facts, docked at its origin, and queued on its first leg.  No
///    viable path ends it `Failed(NoRoute)`.
/// 2. **Departures**: due link schedules pack queued bookings under the
///    departure waypoint's capacity ([`wn_transit::process_departures`]).
/// 3. **Arrivals**: `InTransit` bookings whose leg completed teleport to the
///    next hop ([`wn_transit::process_arrivals`]).
/// 4. **Faults**: buffered [`WorldEvent`]s are applied — captures and
///    destructions, in the order raised.
/// 5. **News**: emitted facts are broadcast to the knowledge map if the sim
///    was built with instant news; otherwise they stay in [`Sim::facts`] for
///    the host's propagation policy to drain.
/// 6. **Claim boards**: each board sweeps expiries and processes pending
///    claims.
///
/// In playback mode the whole tick is a no-op — the clock still advances, but
/// no phase writes state.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim<P: RoutePlanner> {
    /// Global configuration (total ticks, snapshot interval).
    pub config: SimConfig,

    /// Simulation clock — current tick, pause flag, record/playback mode.
    pub clock: SimClock,

    /// The relay network.  Topology is fixed; per-entity state mutates.
    pub graph: WaypointGraph,

    /// Consistency gate + platform-id index, rebuilt at construction.
    pub registry: NetworkRegistry,

    /// All bookings plus the per-link departure queues.
    pub bookings: BookingStore,

    /// Per-faction known facts.  Planning always reads from here, never from
    /// ground truth.
    pub knowledge: KnowledgeMap,

    /// Facts emitted by faults this run.  Drained each tick when built with
    /// instant news, otherwise left for the host to drain.
    pub facts: FactLog,

    /// Claim boards, one per logistics scope.
    pub boards: Vec<ClaimBoard>,

    /// The route planner called during the planning phase.
    pub planner: P,

    /// World events raised since the last fault phase.
    pub pending_events: Vec<WorldEvent>,

    /// Broadcast emitted facts to every faction at end of tick (omniscient
    /// propagation).  Leave off to model information latency.
    pub instant_news: bool,
}

impl<P: RoutePlanner> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Create a `Requested` booking, planned at the next tick's planning
    /// phase.
    pub fn request_haul(
        &mut self,
        traveler:    TravelerId,
        faction:     FactionId,
        origin:      WaypointId,
        destination: WaypointId,
        payload:     Payload,
    ) -> BookingId {
        self.bookings.create(Booking::request(
            traveler,
            faction,
            origin,
            destination,
            payload,
            self.clock.current_tick,
        ))
    }

    /// Buffer a world event for the next fault phase.
    pub fn raise(&mut self, event: WorldEvent) {
        self.pending_events.push(event);
    }

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }

            observer.on_tick_start(now);
            let summary = self.process_tick()?;
            observer.on_tick_end(now, &summary);
            if self.config.snapshot_interval_ticks > 0
                && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
            {
                observer.on_snapshot(now, &self.bookings, &self.graph);
            }

            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            let summary = self.process_tick()?;
            observer.on_tick_end(now, &summary);
            if self.config.snapshot_interval_ticks > 0
                && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
            {
                observer.on_snapshot(now, &self.bookings, &self.graph);
            }
            self.clock.advance();
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self) -> SimResult<TickSummary> {
        let mut summary = TickSummary::default();

        // Playback/pause is a whole-tick no-op.  Every component re-checks
        // this itself; gating here keeps the event buffer intact too.
        if !self.clock.can_write() {
            return Ok(summary);
        }

        // ── Phase 1: plan Requested bookings ──────────────────────────────
        self.plan_requested(&mut summary)?;

        // ── Phase 2: due departures, capacity-packed ──────────────────────
        summary.departures = process_departures(&mut self.graph, &mut self.bookings, &self.clock);

        // ── Phase 3: teleport-at-arrival hop advancement ──────────────────
        let arrivals = process_arrivals(&mut self.graph, &mut self.bookings, &self.clock);
        summary.arrived = arrivals.arrived;
        summary.requeued = arrivals.requeued;
        summary.failed += arrivals.failed;

        // ── Phase 4: buffered world events ────────────────────────────────
        //
        // Applied in the order raised; each handler is atomic within the tick.
        let events = std::mem::take(&mut self.pending_events);
        for event in events {
            match event {
                WorldEvent::Capture { waypoint, new_owner } => {
                    let report = handle_capture(
                        &mut self.graph,
                        &mut self.bookings,
                        &mut self.facts,
                        waypoint,
                        new_owner,
                        &self.clock,
                    )?;
                    summary.failed += report.cancelled;
                }
                WorldEvent::Destroy { waypoint } => {
                    let report = handle_destruction(
                        &mut self.graph,
                        &mut self.bookings,
                        &mut self.facts,
                        waypoint,
                        &self.clock,
                    )?;
                    summary.failed += report.failed;
                }
            }
        }

        // ── Phase 5: news propagation ─────────────────────────────────────
        if self.instant_news {
            for fact in self.facts.drain() {
                self.knowledge.broadcast(&fact);
            }
        }

        // ── Phase 6: claim boards ─────────────────────────────────────────
        for board in &mut self.boards {
            let report = board.tick(&self.clock);
            summary.reservations_granted += report.granted;
            summary.reservations_expired += report.expired;
        }

        Ok(summary)
    }

    /// Route every `Requested` booking under its requester's known facts.
    ///
    /// Ascending `BookingId` order for determinism.  Outcomes:
    /// - trivial route (`origin == destination`) → `Arrived` immediately;
    /// - routable → docked at origin, `QueuedAtOrigin` on the first leg;
    /// - no viable path → `Failed(NoRoute)`;
    /// - origin or first link unresolvable → `Failed(EntityMissing)`.
    fn plan_requested(&mut self, summary: &mut TickSummary) -> SimResult<()> {
        // Factions absent from the knowledge map plan with default belief.
        let default_facts = KnownFacts::default();
        for id in self.bookings.ids_in_state(BookingState::Requested) {
            let (traveler, faction, origin, destination) = {
                let b = self.bookings.get(id)?;
                (b.traveler, b.faction, b.origin, b.destination)
            };

            let facts = self.knowledge.get(faction).unwrap_or(&default_facts);
            let route = match self
                .planner
                .plan(&self.graph, facts, faction, origin, destination)
            {
                Ok(r) => r,
                Err(_) => {
                    self.bookings.get_mut(id)?.fail(FailReason::NoRoute);
                    summary.no_route += 1;
                    continue;
                }
            };

            // The requester must actually be on the network to travel.
            let Ok(origin_wp) = self.graph.waypoint_mut(origin) else {
                self.bookings.get_mut(id)?.fail(FailReason::EntityMissing);
                summary.failed += 1;
                continue;
            };
            origin_wp.dock(traveler);

            if route.is_complete() {
                // Already there.
                let b = self.bookings.get_mut(id)?;
                b.route = Some(route);
                b.state = BookingState::Arrived;
                summary.arrived += 1;
                continue;
            }

            // Non-complete route always has a next hop.
            let next = route.next_hop().unwrap_or(WaypointId::INVALID);
            let Some(link) = self.graph.link_between(origin, next) else {
                self.bookings.get_mut(id)?.fail(FailReason::EntityMissing);
                summary.failed += 1;
                continue;
            };

            let b = self.bookings.get_mut(id)?;
            b.route = Some(route);
            b.state = BookingState::QueuedAtOrigin;
            self.bookings.enqueue(link, id);
            summary.planned += 1;
        }
        Ok(())
    }
}
