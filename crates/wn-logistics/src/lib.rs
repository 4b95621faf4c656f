//! `wn-logistics` — the demand/reservation claim board.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`demand`]      | `DemandEntry` — a site's outstanding need                 |
//! | [`reservation`] | `ReservationEntry`, `ReservationStatus`                   |
//! | [`claim`]       | `ClaimRequest` — a hauler's per-tick pulse                |
//! | [`board`]       | `ClaimBoard` allocator + `BoardConfig`                    |
//! | [`error`]       | `LogisticsError`, `LogisticsResult<T>`                    |
//!
//! # Allocation model
//!
//! The board shares the transit core's algorithmic spine — priority and
//! capacity-constrained allocation under a state machine — but over demand
//! units instead of payload mass.  Each tick it sweeps expired reservations,
//! then matches pending claim requests (FIFO, bounded by a per-tick quota)
//! against the best-fitting open demand.  Claim requests are pulses: cleared
//! at end of tick whether or not they were satisfied.

pub mod board;
pub mod claim;
pub mod demand;
pub mod error;
pub mod reservation;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use board::{BoardConfig, BoardReport, ClaimBoard};
pub use claim::ClaimRequest;
pub use demand::DemandEntry;
pub use error::{LogisticsError, LogisticsResult};
pub use reservation::{ReservationEntry, ReservationStatus};
