//! Fluent builder for constructing a [`Sim`].

use wn_core::{SimClock, SimConfig};
use wn_logistics::ClaimBoard;
use wn_network::{FactLog, NetworkRegistry, WaypointGraph};
use wn_routing::{KnowledgeMap, RoutePlanner};
use wn_transit::BookingStore;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, snapshot interval
/// - [`WaypointGraph`] — the relay network (validated at `build()`)
/// - `P: RoutePlanner` — the planning algorithm
///   (e.g. [`wn_routing::ShortestPathPlanner`])
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                              |
/// |--------------------|--------------------------------------|
/// | `.board(b)`        | No claim boards                      |
/// | `.knowledge(k)`    | Empty map (everyone believes Online) |
/// | `.instant_news()`  | Off — facts wait in `sim.facts`      |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, graph, ShortestPathPlanner)
///     .board(ClaimBoard::new(BoardConfig::default()))
///     .instant_news()
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: RoutePlanner> {
    config:       SimConfig,
    graph:        WaypointGraph,
    planner:      P,
    boards:       Vec<ClaimBoard>,
    knowledge:    KnowledgeMap,
    instant_news: bool,
}

impl<P: RoutePlanner> SimBuilder<P> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, graph: WaypointGraph, planner: P) -> Self {
        Self {
            config,
            graph,
            planner,
            boards:       Vec::new(),
            knowledge:    KnowledgeMap::new(),
            instant_news: false,
        }
    }

    /// Add a claim board (one per logistics scope).
    pub fn board(mut self, board: ClaimBoard) -> Self {
        self.boards.push(board);
        self
    }

    /// Supply pre-seeded per-faction known facts.
    pub fn knowledge(mut self, knowledge: KnowledgeMap) -> Self {
        self.knowledge = knowledge;
        self
    }

    /// Broadcast emitted facts to every faction at end of tick.
    ///
    /// Convenient for omniscient hosts and tests; leave off to model
    /// information latency through an external propagation policy.
    pub fn instant_news(mut self) -> Self {
        self.instant_news = true;
        self
    }

    /// Validate the network and return a ready-to-run [`Sim`].
    ///
    /// Runs the registry consistency gate: every waypoint must be
    /// relay-capable, have non-zero capacity, an owner, and a unique platform
    /// id.
    pub fn build(self) -> SimResult<Sim<P>> {
        let mut registry = NetworkRegistry::new();
        registry.rebuild(&self.graph)?;

        Ok(Sim {
            config:         self.config,
            clock:          SimClock::new(),
            graph:          self.graph,
            registry,
            bookings:       BookingStore::new(),
            knowledge:      self.knowledge,
            facts:          FactLog::new(),
            boards:         self.boards,
            planner:        self.planner,
            pending_events: Vec::new(),
            instant_news:   self.instant_news,
        })
    }
}
