//! `wn-sim` — the tick pipeline runner tying the warpnet crates together.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`sim`]      | `Sim<P>` tick loop + `WorldEvent`                       |
//! | [`builder`]  | `SimBuilder` — validated construction                   |
//! | [`bridge`]   | `HaulRequest`/`BridgeDecision` — network vs direct      |
//! | [`observer`] | `SimObserver` trait, `TickSummary`, `NoopObserver`      |
//! | [`error`]    | `SimError`, `SimResult<T>`                              |
//!
//! # Quick start
//!
//! ```rust,ignore
//! use wn_routing::ShortestPathPlanner;
//! use wn_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config, graph, ShortestPathPlanner).build()?;
//! let booking = sim.request_haul(traveler, faction, origin, destination, payload);
//! sim.run(&mut NoopObserver)?;
//! assert!(sim.bookings.get(booking)?.state.is_terminal());
//! ```

pub mod bridge;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use bridge::{BridgeDecision, HaulRequest};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use sim::{Sim, WorldEvent};
