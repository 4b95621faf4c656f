//! `wn-core` — foundational types for the `warpnet` transit-and-logistics core.
//!
//! This crate is a dependency of every other `wn-*` crate.  It intentionally
//! has no `wn-*` dependencies and minimal external ones (only optional
//! `serde`).  Error enums live in the crates whose operations raise them.
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`ids`]      | `WaypointId`, `LinkId`, `BookingId`, `TravelerId`, …     |
//! | [`time`]     | `Tick`, `SimClock`, `SimMode`, `SimConfig`               |
//! | [`payload`]  | `Payload`, `PayloadCapacity`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod ids;
pub mod payload;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{
    BookingId, FactionId, HaulerId, LinkId, PlatformId, ReservationId, ResourceId, SiteId,
    TravelerId, WaypointId,
};
pub use payload::{Payload, PayloadCapacity};
pub use time::{SimClock, SimConfig, SimMode, Tick};
