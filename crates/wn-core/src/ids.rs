//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into dense `Vec` stores via `id.0 as usize`, but callers
//! should prefer the `.index()` helpers for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the type's MAX.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a relay waypoint in the network graph.
    pub struct WaypointId(u32);
}

typed_id! {
    /// Index of a directed transit link between two waypoints.
    pub struct LinkId(u32);
}

typed_id! {
    /// Index of a booking in the booking store.
    pub struct BookingId(u32);
}

typed_id! {
    /// Handle to the traveler (ship, pod, convoy) a booking moves.
    /// Owned by the host; the core never dereferences it.
    pub struct TravelerId(u32);
}

typed_id! {
    /// Handle to a hauler competing for claim-board reservations.
    pub struct HaulerId(u32);
}

typed_id! {
    /// Owning faction of a waypoint or the requester of a booking.
    /// `u16` keeps access-contract tables compact.
    pub struct FactionId(u16);
}

typed_id! {
    /// Resource type carried by hauls and demanded at sites.
    pub struct ResourceId(u16);
}

typed_id! {
    /// A ground site that posts demand entries on a claim board.
    pub struct SiteId(u32);
}

typed_id! {
    /// Index of a reservation in a claim board's reservation ledger.
    pub struct ReservationId(u32);
}

typed_id! {
    /// Stable external id of the platform entity that hosts a waypoint.
    /// `u64` because platform ids come from the host's entity system.
    pub struct PlatformId(u64);
}
