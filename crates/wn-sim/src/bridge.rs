//! Network-vs-direct haul arbitration.
//!
//! Haulers can always fly point to point under their own drive; the relay
//! network is only worth using when the planned network cost undercuts the
//! direct flight.  The bridge makes that call *under the requester's known
//! facts*, so a faction with stale belief may confidently book a route the
//! world has already invalidated — that is the intended failure mode, not a
//! bug to paper over.

use wn_core::{BookingId, FactionId, Payload, TravelerId, WaypointId};
use wn_routing::RoutePlanner;

use crate::Sim;

/// A host-side haul that may or may not go through the network.
#[derive(Copy, Clone, Debug)]
pub struct HaulRequest {
    pub traveler:    TravelerId,
    pub faction:     FactionId,
    pub origin:      WaypointId,
    pub destination: WaypointId,
    pub payload:     Payload,
    /// Host's tick estimate for flying direct, outside the network.
    pub direct_cost: u64,
}

/// Outcome of [`Sim::decide_haul`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BridgeDecision {
    /// A booking was created; the network route beat the direct estimate.
    Network(BookingId),
    /// Fly direct — no viable route, or the network wouldn't be faster.
    Direct,
}

impl<P: RoutePlanner> Sim<P> {
    /// Decide whether `request` should ride the network.
    ///
    /// Probes the planner under the requester's current known facts and
    /// compares the route cost against `direct_cost` (strictly less wins —
    /// on a tie the hauler keeps its independence).  A winning probe creates
    /// a `Requested` booking, routed for real at the next planning phase.
    pub fn decide_haul(&mut self, request: HaulRequest) -> BridgeDecision {
        let facts = self.knowledge.known_for(request.faction);
        let route = match self.planner.plan(
            &self.graph,
            &facts,
            request.faction,
            request.origin,
            request.destination,
        ) {
            Ok(r) => r,
            Err(_) => return BridgeDecision::Direct,
        };

        if route.total_cost >= request.direct_cost {
            return BridgeDecision::Direct;
        }

        let id = self.request_haul(
            request.traveler,
            request.faction,
            request.origin,
            request.destination,
            request.payload,
        );
        BridgeDecision::Network(id)
    }
}
