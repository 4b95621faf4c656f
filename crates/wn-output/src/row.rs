//! Plain data row types written by output backends.

/// A snapshot of one booking's state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingSnapshotRow {
    pub booking_id:  u32,
    pub tick:        u64,
    /// Lifecycle state label (`requested`, `queued`, `in_transit`, …).
    pub state:       &'static str,
    /// Current departure waypoint (rewritten hop by hop).
    pub origin:      u32,
    /// Final destination waypoint.
    pub destination: u32,
    pub in_transit:  bool,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:                 u64,
    pub planned:              u64,
    pub departures:           u64,
    pub arrived:              u64,
    pub failed:               u64,
    pub reservations_granted: u64,
}
