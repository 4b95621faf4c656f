//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use wn_core::Tick;
use wn_network::WaypointGraph;
use wn_sim::{SimObserver, TickSummary};
use wn_transit::{BookingState, BookingStore};

use crate::row::{BookingSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes booking snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:                 tick.0,
            planned:              summary.planned as u64,
            departures:           summary.departures as u64,
            arrived:              summary.arrived as u64,
            failed:               (summary.failed + summary.no_route) as u64,
            reservations_granted: summary.reservations_granted as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, bookings: &BookingStore, _graph: &WaypointGraph) {
        let rows: Vec<BookingSnapshotRow> = bookings
            .iter()
            .map(|(id, b)| BookingSnapshotRow {
                booking_id:  id.0,
                tick:        tick.0,
                state:       b.state.as_str(),
                origin:      b.origin.0,
                destination: b.destination.0,
                in_transit:  b.state == BookingState::InTransit,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
