//! Simulation observer trait for progress reporting and data collection.

use wn_core::Tick;
use wn_network::WaypointGraph;
use wn_transit::BookingStore;

/// Per-tick counters handed to [`SimObserver::on_tick_end`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct TickSummary {
    /// Requested bookings routed and queued this tick.
    pub planned: usize,
    /// Requested bookings that found no viable path.
    pub no_route: usize,
    /// Bookings that went `InTransit` at a due departure.
    pub departures: usize,
    /// Bookings that reached their final destination.
    pub arrived: usize,
    /// Bookings that completed an intermediate leg.
    pub requeued: usize,
    /// Bookings terminally failed this tick (faults and broken references).
    pub failed: usize,
    /// Claim-board reservations granted.
    pub reservations_granted: usize,
    /// Claim-board reservations expired.
    pub reservations_expired: usize,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {} departures", summary.departures);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the tick's counters.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// ticks).
    ///
    /// Provides read-only access to the booking store and the network so that
    /// output writers can record a snapshot without the sim needing to know
    /// about any specific output format.
    fn on_snapshot(
        &mut self,
        _tick:     Tick,
        _bookings: &BookingStore,
        _graph:    &WaypointGraph,
    ) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
