//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  Bookings and
//! reservations carry explicit tick-based departure/arrival/expiry fields
//! rather than wall-clock timers, so all timing is exact, deterministic, and
//! replayable.
//!
//! The clock also carries the record/playback duality: in [`SimMode::Playback`]
//! state is being restored from history rather than recomputed, so every
//! mutating component in the core checks [`SimClock::can_write`] and performs
//! no writes for the whole tick.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64` to avoid overflow: at one tick per simulated minute a u64
/// lasts far longer than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`, saturating at zero if
    /// `earlier` is in the future.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimMode ──────────────────────────────────────────────────────────────────

/// Live simulation vs. deterministic replay.
///
/// In `Playback` the host is restoring state from recorded history; the core
/// must not recompute it.  This is the only cancellation-like semantic in the
/// core: a whole-tick no-op, never a partial abort.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimMode {
    /// Live simulation — components compute and write state.
    #[default]
    Record,
    /// Deterministic rewind/replay — components perform no writes.
    Playback,
}

impl SimMode {
    /// `true` when components are allowed to mutate state.
    #[inline]
    pub fn is_record(self) -> bool {
        matches!(self, SimMode::Record)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The tick/clock collaborator's view consumed by every core component:
/// current tick, pause flag, and the record/playback mode.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick — advanced by [`SimClock::advance`] each iteration.
    pub current_tick: Tick,
    /// `true` while the host has the simulation paused.
    pub paused: bool,
    /// Record (live) vs. playback (replay) execution mode.
    pub mode: SimMode,
}

impl SimClock {
    /// Create a clock at tick 0, unpaused, in record mode.
    pub fn new() -> Self {
        Self {
            current_tick: Tick::ZERO,
            paused:       false,
            mode:         SimMode::Record,
        }
    }

    /// Advance the clock by one tick.
    ///
    /// The clock advances in playback too — it is the *state writes* that
    /// playback suppresses, not the passage of time.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// `true` when components may mutate simulation state this tick.
    #[inline]
    pub fn can_write(&self) -> bool {
        self.mode.is_record() && !self.paused
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.current_tick, self.mode)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a TOML/JSON file by the host application and passed
/// to the simulation runner.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total ticks to simulate (exclusive upper bound for `run`).
    pub total_ticks: u64,

    /// Write a snapshot via the observer every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:             0,
            snapshot_interval_ticks: 0,
        }
    }
}
