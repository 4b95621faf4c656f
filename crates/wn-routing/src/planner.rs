//! Route-planning trait and the default shortest-path implementation.
//!
//! # Pluggability
//!
//! The tick pipeline calls planning via the [`RoutePlanner`] trait, so hosts
//! can swap in custom implementations (congestion-aware costs, hierarchy
//! preprocessing) without touching the core.  The default
//! [`ShortestPathPlanner`] is Dijkstra over the CSR waypoint graph.
//!
//! # Cost model and tie-breaking
//!
//! Edge cost is the link's `travel_ticks` weight.  The search minimizes
//! `(total cost, hop count)` lexicographically — lower weighted cost first,
//! fewer hops on ties — with `WaypointId` as the final heap key so results
//! are deterministic regardless of insertion order.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use wn_core::{FactionId, LinkId, WaypointId};
use wn_network::WaypointGraph;

use crate::facts::KnownFacts;
use crate::route::Route;
use crate::{RoutingError, RoutingResult};

// ── RoutePlanner trait ────────────────────────────────────────────────────────

/// Pluggable route planner.
///
/// Implementations must evaluate traversability from `facts` — the
/// requester's belief — never from ground-truth status, so that information
/// latency behaves as designed.
pub trait RoutePlanner {
    /// Compute a route from `from` to `to` for a requester of `faction`.
    ///
    /// `from == to` yields a trivial (already complete) route rather than an
    /// error.
    fn plan(
        &self,
        graph:   &WaypointGraph,
        facts:   &KnownFacts,
        faction: FactionId,
        from:    WaypointId,
        to:      WaypointId,
    ) -> RoutingResult<Route>;
}

// ── ShortestPathPlanner ───────────────────────────────────────────────────────

/// Standard Dijkstra over the waypoint graph with stale-knowledge filtering.
///
/// A link is relaxed only if
/// - its access contract permits transit for the requester's faction, and
/// - the requester *believes* the link's destination waypoint is `Online`
///   or `Damaged` (captured/destroyed per known facts are excluded).
///
/// The origin is never filtered: you can always plan away from where you
/// already are.
#[derive(Debug)]
pub struct ShortestPathPlanner;

impl RoutePlanner for ShortestPathPlanner {
    fn plan(
        &self,
        graph:   &WaypointGraph,
        facts:   &KnownFacts,
        faction: FactionId,
        from:    WaypointId,
        to:      WaypointId,
    ) -> RoutingResult<Route> {
        dijkstra(graph, facts, faction, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

fn dijkstra(
    graph:   &WaypointGraph,
    facts:   &KnownFacts,
    faction: FactionId,
    from:    WaypointId,
    to:      WaypointId,
) -> RoutingResult<Route> {
    if from == to {
        return Ok(Route::trivial(from));
    }

    let n = graph.waypoint_count();
    if from.index() >= n || to.index() >= n {
        return Err(RoutingError::NoRoute { from, to });
    }

    // dist[w] = best known (cost, hop count) to reach w.
    let mut dist      = vec![(u64::MAX, u32::MAX); n];
    // prev_link[w] = LinkId that reached w; LinkId::INVALID for unreached.
    let mut prev_link = vec![LinkId::INVALID; n];

    dist[from.index()] = (0, 0);

    // Min-heap on (cost, hops, waypoint).  Reverse makes BinaryHeap (max)
    // behave as a min-heap; the WaypointId key makes ties deterministic.
    let mut heap: BinaryHeap<Reverse<(u64, u32, WaypointId)>> = BinaryHeap::new();
    heap.push(Reverse((0, 0, from)));

    while let Some(Reverse((cost, hops, waypoint))) = heap.pop() {
        if waypoint == to {
            return Ok(reconstruct(graph, &prev_link, from, to, cost));
        }

        // Skip stale heap entries.
        if (cost, hops) > dist[waypoint.index()] {
            continue;
        }

        for link_id in graph.out_links(waypoint) {
            let link = match graph.link(link_id) {
                Ok(l) => l,
                Err(_) => continue,
            };
            if !link.access_for(faction).permits_transit() {
                continue;
            }
            let neighbor = link.to;
            // Belief, not ground truth: the requester may happily route
            // through a waypoint the world already lost.
            if !facts.believes_traversable(neighbor) {
                continue;
            }

            let new_cost = cost.saturating_add(link.travel_ticks as u64);
            let new_hops = hops + 1;
            if (new_cost, new_hops) < dist[neighbor.index()] {
                dist[neighbor.index()] = (new_cost, new_hops);
                prev_link[neighbor.index()] = link_id;
                heap.push(Reverse((new_cost, new_hops, neighbor)));
            }
        }
    }

    Err(RoutingError::NoRoute { from, to })
}

fn reconstruct(
    graph:     &WaypointGraph,
    prev_link: &[LinkId],
    from:      WaypointId,
    to:        WaypointId,
    total:     u64,
) -> Route {
    let mut hops = vec![to];
    let mut cur = to;
    while cur != from {
        let l = prev_link[cur.index()];
        debug_assert_ne!(l, LinkId::INVALID);
        // prev_link entries were written from live graph links; the unwrap
        // below cannot fire, but stay total anyway.
        let Ok(link) = graph.link(l) else { break };
        cur = link.from;
        hops.push(cur);
    }
    hops.reverse();
    Route::new(hops, total)
}
