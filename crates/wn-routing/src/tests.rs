//! Unit tests for wn-routing.

use wn_core::{FactionId, PayloadCapacity, PlatformId, Tick, WaypointId};
use wn_network::{NetworkFact, ScheduleMode, WaypointGraph, WaypointGraphBuilder, WaypointStatus};

use crate::{KnowledgeMap, KnownFacts, Route, RoutePlanner, RoutingError, ShortestPathPlanner};

// ── Helpers ───────────────────────────────────────────────────────────────────

const INTERVAL: ScheduleMode = ScheduleMode::Interval { every_ticks: 1 };

fn cap() -> PayloadCapacity {
    PayloadCapacity::new(1_000, 1_000)
}

fn add_wp(b: &mut WaypointGraphBuilder, n: u64) -> WaypointId {
    b.add_waypoint(PlatformId(n), FactionId(0), cap(), true)
}

/// Diamond network:
///
/// ```text
///        1
///      /   \        0→1→3 costs 2+2 = 4 (2 hops)
///     0     3       0→2→3 costs 1+1 = 2 (2 hops)  ← cheapest
///      \   /        0→4→3 costs 1+1 = 2 (2 hops)  ← tie, higher ids
///       2,4
/// ```
fn diamond() -> WaypointGraph {
    let mut b = WaypointGraphBuilder::new();
    let w0 = add_wp(&mut b, 0);
    let w1 = add_wp(&mut b, 1);
    let w2 = add_wp(&mut b, 2);
    let w3 = add_wp(&mut b, 3);
    let w4 = add_wp(&mut b, 4);
    b.add_lane(w0, w1, 2, INTERVAL);
    b.add_lane(w1, w3, 2, INTERVAL);
    b.add_lane(w0, w2, 1, INTERVAL);
    b.add_lane(w2, w3, 1, INTERVAL);
    b.add_lane(w0, w4, 1, INTERVAL);
    b.add_lane(w4, w3, 1, INTERVAL);
    b.build()
}

fn plan(graph: &WaypointGraph, facts: &KnownFacts, from: u32, to: u32) -> Result<Route, RoutingError> {
    ShortestPathPlanner.plan(graph, facts, FactionId(0), WaypointId(from), WaypointId(to))
}

// ── Route cursor mechanics ────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use super::*;

    #[test]
    fn fresh_route_points_at_first_hop() {
        let r = Route::new(vec![WaypointId(0), WaypointId(1), WaypointId(2)], 2);
        assert_eq!(r.origin(), WaypointId(0));
        assert_eq!(r.destination(), WaypointId(2));
        assert_eq!(r.next_hop(), Some(WaypointId(1)));
        assert_eq!(r.leg_count(), 2);
        assert!(!r.is_complete());
    }

    #[test]
    fn advance_to_completion() {
        let mut r = Route::new(vec![WaypointId(0), WaypointId(1), WaypointId(2)], 2);
        r.advance();
        assert_eq!(r.current_hop(), WaypointId(1));
        assert_eq!(r.next_hop(), Some(WaypointId(2)));
        r.advance();
        assert!(r.is_complete());
        assert_eq!(r.next_hop(), None);
    }

    #[test]
    fn trivial_route_is_complete() {
        let r = Route::trivial(WaypointId(5));
        assert!(r.is_complete());
        assert_eq!(r.destination(), WaypointId(5));
        assert_eq!(r.leg_count(), 0);
    }

    #[test]
    fn references_ahead_ignores_visited_hops() {
        let mut r = Route::new(vec![WaypointId(0), WaypointId(1), WaypointId(2)], 2);
        assert!(r.references_ahead(WaypointId(1)));
        r.advance();
        assert!(!r.references_ahead(WaypointId(1)));
        assert!(r.references_ahead(WaypointId(2)));
    }
}

// ── Known facts ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod facts {
    use super::*;

    #[test]
    fn default_belief_is_online() {
        let f = KnownFacts::new();
        assert_eq!(f.believed_status(WaypointId(9)), WaypointStatus::Online);
        assert!(f.believes_traversable(WaypointId(9)));
    }

    #[test]
    fn learning_a_destruction_fact() {
        let mut f = KnownFacts::new();
        f.learn(&NetworkFact::Destroyed { waypoint: WaypointId(2), tick: Tick(5) });
        assert_eq!(f.believed_status(WaypointId(2)), WaypointStatus::Destroyed);
        assert!(!f.believes_traversable(WaypointId(2)));
    }

    #[test]
    fn knowledge_map_delivers_per_faction() {
        let mut km = KnowledgeMap::new();
        let fact = NetworkFact::Captured {
            waypoint:  WaypointId(1),
            new_owner: FactionId(2),
            tick:      Tick(3),
        };
        km.deliver(FactionId(0), &fact);
        assert!(!km.known_for(FactionId(0)).believes_traversable(WaypointId(1)));
        // Faction 1 never received the fact: stale belief by design.
        assert!(km.known_for(FactionId(1)).believes_traversable(WaypointId(1)));

        // Borrowing access mirrors the cloning one, minus the allocation.
        assert!(km.get(FactionId(0)).is_some_and(|f| !f.is_empty()));
        assert!(km.get(FactionId(1)).is_none());
    }
}

// ── Shortest-path planning ────────────────────────────────────────────────────

#[cfg(test)]
mod planning {
    use super::*;

    #[test]
    fn picks_cheapest_path() {
        let g = diamond();
        let r = plan(&g, &KnownFacts::new(), 0, 3).unwrap();
        assert_eq!(r.total_cost, 2);
        // Cost tie between 0→2→3 and 0→4→3 broken by lower waypoint id.
        assert_eq!(r.hops, vec![WaypointId(0), WaypointId(2), WaypointId(3)]);
    }

    #[test]
    fn fewer_hops_wins_on_cost_tie() {
        // 0→1→2 costs 2 over two hops; 0→2 costs 2 over one hop.
        let mut b = WaypointGraphBuilder::new();
        let w0 = add_wp(&mut b, 0);
        let w1 = add_wp(&mut b, 1);
        let w2 = add_wp(&mut b, 2);
        b.add_link(w0, w1, 1, INTERVAL);
        b.add_link(w1, w2, 1, INTERVAL);
        b.add_link(w0, w2, 2, INTERVAL);
        let g = b.build();

        let r = plan(&g, &KnownFacts::new(), 0, 2).unwrap();
        assert_eq!(r.total_cost, 2);
        assert_eq!(r.hops, vec![WaypointId(0), WaypointId(2)]);
    }

    #[test]
    fn believed_destroyed_waypoint_is_avoided() {
        let g = diamond();
        let mut facts = KnownFacts::new();
        facts.learn_status(WaypointId(2), WaypointStatus::Destroyed);
        facts.learn_status(WaypointId(4), WaypointStatus::Captured);
        let r = plan(&g, &facts, 0, 3).unwrap();
        // Both cheap middles are believed lost; falls back to the long way.
        assert_eq!(r.hops, vec![WaypointId(0), WaypointId(1), WaypointId(3)]);
        assert_eq!(r.total_cost, 4);
    }

    #[test]
    fn stale_belief_routes_through_dead_waypoint() {
        // Ground truth destroys waypoint 2, but the requester never learned
        // the fact — the plan still goes through it.  Intentional.
        let mut g = diamond();
        g.waypoint_mut(WaypointId(2)).unwrap().status = WaypointStatus::Destroyed;
        let r = plan(&g, &KnownFacts::new(), 0, 3).unwrap();
        assert!(r.hops.contains(&WaypointId(2)));
    }

    #[test]
    fn no_route_when_all_belief_paths_blocked() {
        let g = diamond();
        let mut facts = KnownFacts::new();
        for w in [1u32, 2, 4] {
            facts.learn_status(WaypointId(w), WaypointStatus::Destroyed);
        }
        assert_eq!(
            plan(&g, &facts, 0, 3),
            Err(RoutingError::NoRoute { from: WaypointId(0), to: WaypointId(3) })
        );
    }

    #[test]
    fn same_origin_and_destination_is_trivial() {
        let g = diamond();
        let r = plan(&g, &KnownFacts::new(), 1, 1).unwrap();
        assert!(r.is_complete());
    }

    #[test]
    fn denied_access_contract_blocks_link() {
        let mut g = diamond();
        // Lock every link around the two cheap middles to faction 9.
        g.rewrite_contracts_around(WaypointId(2), FactionId(9));
        g.rewrite_contracts_around(WaypointId(4), FactionId(9));
        let r = plan(&g, &KnownFacts::new(), 0, 3).unwrap();
        assert_eq!(r.hops, vec![WaypointId(0), WaypointId(1), WaypointId(3)]);
    }

    #[test]
    fn out_of_range_ids_are_no_route() {
        let g = diamond();
        assert!(plan(&g, &KnownFacts::new(), 0, 99).is_err());
    }
}
