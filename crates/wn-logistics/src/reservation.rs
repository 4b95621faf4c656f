//! Reservations: time-bounded allocations of demand to a hauler.

use wn_core::{HaulerId, ResourceId, ReservationId, SiteId, Tick};

/// Reservation lifecycle.  `Active` is the only live state; the other three
/// are terminal and a terminal reservation is never re-used as `Active`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReservationStatus {
    /// Holding units against the demand until `expiry_tick`.
    Active,
    /// `expiry_tick` passed without fulfilment; units were released.
    Expired,
    /// Delivery recorded; units moved from reserved to delivered.
    Fulfilled,
    /// Withdrawn by the hauler or the host; units were released.
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReservationStatus::Active    => "active",
            ReservationStatus::Expired   => "expired",
            ReservationStatus::Fulfilled => "fulfilled",
            ReservationStatus::Cancelled => "cancelled",
        }
    }
}

/// One allocation of a demand to a hauler.
///
/// A hauler holds at most one `Active` reservation at a time; the board
/// checks this before every new allocation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReservationEntry {
    pub id: ReservationId,
    pub hauler: HaulerId,
    pub site: SiteId,
    pub resource: ResourceId,
    /// Units held against the demand.
    pub units: u32,
    pub created_tick: Tick,
    /// First tick at which an unfulfilled reservation expires.
    pub expiry_tick: Tick,
    pub status: ReservationStatus,
}

impl ReservationEntry {
    /// `true` if still `Active` and `expiry_tick` has been reached.
    #[inline]
    pub fn is_expired_at(&self, now: Tick) -> bool {
        self.status == ReservationStatus::Active && now >= self.expiry_tick
    }
}
