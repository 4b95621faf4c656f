//! Waypoint graph representation and builder.
//!
//! # Data layout
//!
//! Outgoing links use **Compressed Sparse Row (CSR)** format.  Given a
//! `WaypointId w`, its outgoing links occupy the contiguous `LinkId` range:
//!
//! ```text
//! links[ link_out_start[w] .. link_out_start[w+1] ]
//! ```
//!
//! Links are sorted by source waypoint at build time and indexed by `LinkId`,
//! so iterating a waypoint's departures is a contiguous scan — ideal for the
//! planner's Dijkstra inner loop and the per-tick schedule sweep.
//!
//! Topology is fixed after `build()`; only per-entity state (status, owner,
//! docked lists, contracts, service state) mutates at runtime.

use wn_core::{FactionId, LinkId, PayloadCapacity, PlatformId, WaypointId};

use crate::link::{Link, ScheduleMode};
use crate::waypoint::Waypoint;
use crate::{NetworkError, NetworkResult};

// ── WaypointGraph ─────────────────────────────────────────────────────────────

/// The relay network: waypoints plus CSR link adjacency.
///
/// Do not construct directly; use [`WaypointGraphBuilder`].
#[derive(Debug)]
pub struct WaypointGraph {
    /// All waypoints, indexed by `WaypointId`.
    waypoints: Vec<Waypoint>,

    /// CSR row pointer.  Outgoing links of waypoint `w` are at LinkIds
    /// `link_out_start[w] .. link_out_start[w+1]`.  Length = waypoint_count + 1.
    link_out_start: Vec<u32>,

    /// All links, sorted by source waypoint, indexed by `LinkId`.
    links: Vec<Link>,
}

impl WaypointGraph {
    /// An empty network with no waypoints or links.
    pub fn empty() -> Self {
        WaypointGraphBuilder::new().build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Shared access to a waypoint; `Err` for out-of-range ids (a dangling
    /// reference is a failure condition, never a panic).
    pub fn waypoint(&self, id: WaypointId) -> NetworkResult<&Waypoint> {
        self.waypoints
            .get(id.index())
            .ok_or(NetworkError::WaypointNotFound(id))
    }

    /// Mutable access to a waypoint.
    pub fn waypoint_mut(&mut self, id: WaypointId) -> NetworkResult<&mut Waypoint> {
        self.waypoints
            .get_mut(id.index())
            .ok_or(NetworkError::WaypointNotFound(id))
    }

    pub fn link(&self, id: LinkId) -> NetworkResult<&Link> {
        self.links.get(id.index()).ok_or(NetworkError::LinkNotFound(id))
    }

    pub fn link_mut(&mut self, id: LinkId) -> NetworkResult<&mut Link> {
        self.links
            .get_mut(id.index())
            .ok_or(NetworkError::LinkNotFound(id))
    }

    /// Iterate over all waypoints with their ids.
    pub fn waypoints(&self) -> impl Iterator<Item = (WaypointId, &Waypoint)> + '_ {
        self.waypoints
            .iter()
            .enumerate()
            .map(|(i, w)| (WaypointId(i as u32), w))
    }

    /// Iterate over all links with their ids.
    pub fn links(&self) -> impl Iterator<Item = (LinkId, &Link)> + '_ {
        self.links
            .iter()
            .enumerate()
            .map(|(i, l)| (LinkId(i as u32), l))
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Iterator over the `LinkId`s of all outgoing links from `waypoint`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_links(&self, waypoint: WaypointId) -> impl Iterator<Item = LinkId> + '_ {
        let start = self.link_out_start[waypoint.index()] as usize;
        let end   = self.link_out_start[waypoint.index() + 1] as usize;
        (start..end).map(|i| LinkId(i as u32))
    }

    /// The link from `from` to `to`, if one exists.  With parallel links the
    /// lowest `LinkId` wins (deterministic).
    pub fn link_between(&self, from: WaypointId, to: WaypointId) -> Option<LinkId> {
        if from.index() >= self.waypoint_count() {
            return None;
        }
        self.out_links(from)
            .find(|&l| self.links[l.index()].to == to)
    }

    /// All links that start *or end* at `waypoint` (contract rewrite on
    /// capture touches both directions).  Linear over the link table; capture
    /// is a rare out-of-band event, not a per-tick path.
    pub fn links_touching(&self, waypoint: WaypointId) -> Vec<LinkId> {
        self.links
            .iter()
            .enumerate()
            .filter(|(_, l)| l.touches(waypoint))
            .map(|(i, _)| LinkId(i as u32))
            .collect()
    }

    /// Rewrite contracts on every link touching `waypoint` to grant full
    /// access to `new_owner` only.
    pub fn rewrite_contracts_around(&mut self, waypoint: WaypointId, new_owner: FactionId) {
        for link in self.links.iter_mut().filter(|l| l.touches(waypoint)) {
            link.rewrite_contracts_for(new_owner);
        }
    }
}

// ── WaypointGraphBuilder ──────────────────────────────────────────────────────

/// Construct a [`WaypointGraph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts waypoints and directed links in any order.  `build()`
/// sorts links by source waypoint and constructs the CSR arrays.  `WaypointId`s
/// are assigned sequentially by `add_waypoint` and stay stable; `LinkId`s are
/// only final after `build()`.
///
/// # Example
///
/// ```
/// use wn_core::{FactionId, PayloadCapacity, PlatformId};
/// use wn_network::{ScheduleMode, WaypointGraphBuilder};
///
/// let mut b = WaypointGraphBuilder::new();
/// let cap = PayloadCapacity::new(1_000, 1_000);
/// let w0 = b.add_waypoint(PlatformId(10), FactionId(0), cap, true);
/// let w1 = b.add_waypoint(PlatformId(11), FactionId(0), cap, true);
/// b.add_lane(w0, w1, 3, ScheduleMode::Interval { every_ticks: 2 });
/// let graph = b.build();
/// assert_eq!(graph.waypoint_count(), 2);
/// assert_eq!(graph.link_count(), 2); // bidirectional
/// ```
pub struct WaypointGraphBuilder {
    waypoints: Vec<Waypoint>,
    raw_links: Vec<Link>,
}

impl WaypointGraphBuilder {
    pub fn new() -> Self {
        Self {
            waypoints: Vec::new(),
            raw_links: Vec::new(),
        }
    }

    /// Pre-allocate for the expected network size.
    pub fn with_capacity(waypoints: usize, links: usize) -> Self {
        Self {
            waypoints: Vec::with_capacity(waypoints),
            raw_links: Vec::with_capacity(links),
        }
    }

    /// Add a waypoint and return its `WaypointId` (sequential from 0).
    pub fn add_waypoint(
        &mut self,
        platform:      PlatformId,
        owner:         FactionId,
        capacity:      PayloadCapacity,
        relay_capable: bool,
    ) -> WaypointId {
        let id = WaypointId(self.waypoints.len() as u32);
        self.waypoints
            .push(Waypoint::new(platform, owner, capacity, relay_capable));
        id
    }

    /// Add a **directed** link from `from` to `to`.
    pub fn add_link(
        &mut self,
        from:         WaypointId,
        to:           WaypointId,
        travel_ticks: u32,
        schedule:     ScheduleMode,
    ) {
        self.raw_links.push(Link::new(from, to, travel_ticks, schedule));
    }

    /// Convenience: add links in **both directions** for an undirected lane
    /// (the common case for relay pairs).
    pub fn add_lane(
        &mut self,
        a:            WaypointId,
        b:            WaypointId,
        travel_ticks: u32,
        schedule:     ScheduleMode,
    ) {
        self.add_link(a, b, travel_ticks, schedule);
        self.add_link(b, a, travel_ticks, schedule);
    }

    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    pub fn link_count(&self) -> usize {
        self.raw_links.len()
    }

    /// Consume the builder and produce a [`WaypointGraph`].
    ///
    /// Time complexity: O(L log L) for the link sort, L = links.
    pub fn build(self) -> WaypointGraph {
        let waypoint_count = self.waypoints.len();
        let link_count = self.raw_links.len();

        // Sort links by source waypoint for CSR construction.
        let mut links = self.raw_links;
        links.sort_by_key(|l| l.from.0);

        // Build CSR row pointer.
        let mut link_out_start = vec![0u32; waypoint_count + 1];
        for l in &links {
            link_out_start[l.from.index() + 1] += 1;
        }
        for i in 1..=waypoint_count {
            link_out_start[i] += link_out_start[i - 1];
        }
        debug_assert_eq!(link_out_start[waypoint_count] as usize, link_count);

        WaypointGraph {
            waypoints: self.waypoints,
            link_out_start,
            links,
        }
    }
}

impl Default for WaypointGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
