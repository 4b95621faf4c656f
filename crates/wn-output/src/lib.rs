//! `wn-output` — simulation output writers for warpnet runs.
//!
//! The CSV backend creates two files per run:
//!
//! | File                    | Contents                                  |
//! |-------------------------|-------------------------------------------|
//! | `booking_snapshots.csv` | One row per booking per snapshot tick     |
//! | `tick_summaries.csv`    | One row of pipeline counters per tick     |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `wn_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wn_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{BookingSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
