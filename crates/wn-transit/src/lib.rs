//! `wn-transit` — booking lifecycle and hop-by-hop transit over the network.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`booking`]   | `Booking`, `BookingState`, `FailReason`                         |
//! | [`store`]     | `BookingStore` — dense booking table + per-link FIFO queues     |
//! | [`scheduler`] | Interval departure evaluation + greedy capacity packing         |
//! | [`advancer`]  | Teleport-at-arrival hop advancement                             |
//! | [`fault`]     | Capture and destruction handlers                                |
//! | [`error`]     | `TransitError`, `TransitResult<T>`                              |
//!
//! # Movement model (teleport-at-arrival)
//!
//! 1. A routed booking waits in the FIFO queue of the link toward its next
//!    hop, its traveler docked at the departure waypoint.
//! 2. When the link's interval schedule is due, the scheduler packs queued
//!    bookings under the departure waypoint's payload capacity and stamps
//!    `expected_arrival_tick = now + travel_ticks`.
//! 3. The booking logically stays at the departure waypoint until the
//!    advancer sees `expected_arrival_tick <= now`, then instantly appears at
//!    the next hop — re-queued for the following leg, or `Arrived` at the
//!    final one.
//!
//! Failures (`no route`, capture, destruction, dangling references) are
//! terminal state transitions local to the booking; they never abort the
//! tick.

pub mod advancer;
pub mod booking;
pub mod error;
pub mod fault;
pub mod scheduler;
pub mod store;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use advancer::{ArrivalReport, process_arrivals};
pub use booking::{Booking, BookingState, FailReason};
pub use error::{TransitError, TransitResult};
pub use fault::{CaptureReport, DestructionReport, handle_capture, handle_destruction};
pub use scheduler::process_departures;
pub use store::BookingStore;
