//! `wn-routing` — route planning over the waypoint graph under stale belief.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`route`]   | `Route` — ordered waypoint hops plus a cursor                   |
//! | [`facts`]   | `KnownFacts` belief overlay, `KnowledgeMap` (per-faction)       |
//! | [`planner`] | `RoutePlanner` trait, `ShortestPathPlanner` (Dijkstra)          |
//! | [`error`]   | `RoutingError`, `RoutingResult<T>`                              |
//!
//! # Stale knowledge is a feature
//!
//! The planner evaluates traversability from the requester's *known facts*
//! about waypoint status — not ground truth.  A requester may plan through a
//! waypoint that was destroyed moments ago if the destruction fact has not
//! yet reached it.  The information-latency window is intentional; the
//! external knowledge collaborator decides when facts propagate.

pub mod error;
pub mod facts;
pub mod planner;
pub mod route;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RoutingError, RoutingResult};
pub use facts::{KnowledgeMap, KnownFacts};
pub use planner::{RoutePlanner, ShortestPathPlanner};
pub use route::Route;
