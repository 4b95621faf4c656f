//! Payload mass/volume arithmetic shared by the network and transit crates.
//!
//! Departure packing accumulates both dimensions in queue order and admits a
//! booking only if *both* running totals stay within the capacity descriptor,
//! so the two types live together here.

use std::ops::{Add, AddAssign};

// ── Payload ──────────────────────────────────────────────────────────────────

/// The mass/volume footprint of a booking (or a running total of several).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Payload {
    /// Total mass in kilograms.
    pub mass: u32,
    /// Total volume in litres.
    pub volume: u32,
}

impl Payload {
    pub const ZERO: Payload = Payload { mass: 0, volume: 0 };

    pub fn new(mass: u32, volume: u32) -> Self {
        Self { mass, volume }
    }

    /// `true` if this payload (as a running total) fits within `cap`.
    #[inline]
    pub fn fits_within(self, cap: PayloadCapacity) -> bool {
        self.mass <= cap.max_mass && self.volume <= cap.max_volume
    }
}

impl Add for Payload {
    type Output = Payload;
    #[inline]
    fn add(self, rhs: Payload) -> Payload {
        Payload {
            mass:   self.mass.saturating_add(rhs.mass),
            volume: self.volume.saturating_add(rhs.volume),
        }
    }
}

impl AddAssign for Payload {
    #[inline]
    fn add_assign(&mut self, rhs: Payload) {
        *self = *self + rhs;
    }
}

// ── PayloadCapacity ──────────────────────────────────────────────────────────

/// A waypoint's drive-bank capacity descriptor: the most a single departure
/// may carry in each dimension.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayloadCapacity {
    /// Maximum admitted mass per departure, kilograms.
    pub max_mass: u32,
    /// Maximum admitted volume per departure, litres.
    pub max_volume: u32,
}

impl PayloadCapacity {
    pub fn new(max_mass: u32, max_volume: u32) -> Self {
        Self { max_mass, max_volume }
    }

    /// A zero capacity admits nothing; the registry rejects waypoints with it.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.max_mass == 0 || self.max_volume == 0
    }
}
