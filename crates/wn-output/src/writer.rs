//! The `OutputWriter` trait implemented by all backend writers.

use crate::{BookingSnapshotRow, OutputResult, TickSummaryRow};

/// Trait implemented by output backends (CSV today; the seam exists so hosts
/// can plug in their own sinks).
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with [`SimOutputObserver::take_error`].
pub trait OutputWriter {
    /// Write a batch of booking snapshots.
    fn write_snapshots(&mut self, rows: &[BookingSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
