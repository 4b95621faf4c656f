//! The `BookingStore` — dense booking table plus sparse per-link queues.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use wn_core::{BookingId, LinkId};

use crate::booking::{Booking, BookingState};
use crate::{TransitError, TransitResult};

/// Holds every booking ever created plus the per-link departure queues.
///
/// The `bookings` vector is append-only and indexed by `BookingId`; terminal
/// bookings stay in place so ids remain valid for the owning collaborator to
/// poll.  The `queues` map is sparse — only links with waiting bookings have
/// an entry.
#[derive(Debug, Default)]
pub struct BookingStore {
    /// All bookings, indexed by `BookingId`.
    bookings: Vec<Booking>,

    /// FIFO departure queues: `LinkId → waiting BookingId`s in arrival order.
    queues: FxHashMap<LinkId, VecDeque<BookingId>>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Booking table ─────────────────────────────────────────────────────

    /// Insert a booking and return its id.
    pub fn create(&mut self, booking: Booking) -> BookingId {
        let id = BookingId(self.bookings.len() as u32);
        self.bookings.push(booking);
        id
    }

    pub fn get(&self, id: BookingId) -> TransitResult<&Booking> {
        self.bookings
            .get(id.index())
            .ok_or(TransitError::BookingNotFound(id))
    }

    pub fn get_mut(&mut self, id: BookingId) -> TransitResult<&mut Booking> {
        self.bookings
            .get_mut(id.index())
            .ok_or(TransitError::BookingNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Iterate over all bookings with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (BookingId, &Booking)> + '_ {
        self.bookings
            .iter()
            .enumerate()
            .map(|(i, b)| (BookingId(i as u32), b))
    }

    /// Mutable iteration, ascending `BookingId` (deterministic fault sweeps).
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BookingId, &mut Booking)> + '_ {
        self.bookings
            .iter_mut()
            .enumerate()
            .map(|(i, b)| (BookingId(i as u32), b))
    }

    /// Ids of all bookings currently in `state` (ascending, deterministic).
    pub fn ids_in_state(&self, state: BookingState) -> Vec<BookingId> {
        self.iter()
            .filter(|(_, b)| b.state == state)
            .map(|(id, _)| id)
            .collect()
    }

    // ── Departure queues ──────────────────────────────────────────────────

    /// Append `id` to the back of `link`'s departure queue.
    pub fn enqueue(&mut self, link: LinkId, id: BookingId) {
        self.queues.entry(link).or_default().push_back(id);
    }

    /// Snapshot of `link`'s queue in FIFO order (both `VecDeque` halves).
    pub fn queue_snapshot(&self, link: LinkId) -> Vec<BookingId> {
        self.queues
            .get(&link)
            .map(|q| q.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn queue_len(&self, link: LinkId) -> usize {
        self.queues.get(&link).map_or(0, |q| q.len())
    }

    /// Remove a specific booking from `link`'s queue.  Returns `true` if it
    /// was present.
    pub fn remove_from_queue(&mut self, link: LinkId, id: BookingId) -> bool {
        let Some(q) = self.queues.get_mut(&link) else {
            return false;
        };
        let before = q.len();
        q.retain(|&b| b != id);
        before != q.len()
    }

    /// Drop every queued booking that has reached a terminal state.
    ///
    /// Fault handlers fail bookings in place and then call this once, instead
    /// of hunting each id through every queue.
    pub fn purge_terminal(&mut self) {
        let bookings = &self.bookings;
        for q in self.queues.values_mut() {
            q.retain(|&id| {
                bookings
                    .get(id.index())
                    .is_some_and(|b| !b.state.is_terminal())
            });
        }
        self.queues.retain(|_, q| !q.is_empty());
    }
}
