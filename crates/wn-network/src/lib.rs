//! `wn-network` — the relay waypoint graph and its consistency gate.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`waypoint`]  | `Waypoint`, `WaypointStatus` — node state and docked travelers |
//! | [`link`]      | `Link`, `AccessContract`, `ScheduleMode`, `ServiceState`       |
//! | [`graph`]     | `WaypointGraph` (CSR adjacency) + `WaypointGraphBuilder`       |
//! | [`registry`]  | `NetworkRegistry` — validation + platform-id index             |
//! | [`facts`]     | `NetworkFact`, `FactLog` — capture/destruction fact emission   |
//! | [`error`]     | `NetworkError`, `NetworkResult<T>`                             |
//!
//! # Ownership model
//!
//! The graph is a single owned structure passed by `&`/`&mut` into each
//! pipeline component — never ambient global state.  Topology (waypoints and
//! links) is fixed at build time; only per-entity state (status, owner,
//! contracts, docked lists, service state) mutates at runtime.  Captured and
//! destroyed waypoints are *not* removed: the entity persists with an updated
//! status so ids stay stable forever.

pub mod error;
pub mod facts;
pub mod graph;
pub mod link;
pub mod registry;
pub mod waypoint;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{NetworkError, NetworkResult};
pub use facts::{FactLog, NetworkFact};
pub use graph::{WaypointGraph, WaypointGraphBuilder};
pub use link::{AccessContract, AccessLevel, Link, ScheduleMode, ServiceState};
pub use registry::NetworkRegistry;
pub use waypoint::{Waypoint, WaypointStatus};
