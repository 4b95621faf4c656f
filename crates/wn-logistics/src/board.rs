//! The `ClaimBoard` allocator.

use std::cmp::Reverse;

use rustc_hash::FxHashMap;

use wn_core::{HaulerId, ResourceId, ReservationId, SimClock, SiteId, Tick};

use crate::claim::ClaimRequest;
use crate::demand::DemandEntry;
use crate::reservation::{ReservationEntry, ReservationStatus};
use crate::{LogisticsError, LogisticsResult};

// ── BoardConfig ───────────────────────────────────────────────────────────────

/// Tuning knobs for one claim board scope (a colony, a station cluster…).
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    /// Claim requests processed per tick; the rest are dropped with the
    /// end-of-tick clear and must be re-requested.
    pub max_claims_per_tick: usize,
    /// Board-wide floor on allocation size.
    pub min_batch: u32,
    /// Board-wide cap on allocation size.
    pub max_batch: u32,
    /// Lifetime of a new reservation, in ticks.
    pub reservation_ttl_ticks: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_claims_per_tick:   32,
            min_batch:             1,
            max_batch:             u32::MAX,
            reservation_ttl_ticks: 12,
        }
    }
}

// ── BoardReport ───────────────────────────────────────────────────────────────

/// What one board tick did.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct BoardReport {
    /// Reservations swept `Active → Expired`.
    pub expired: usize,
    /// Claims granted a reservation.
    pub granted: usize,
    /// Claims processed but not granted (exclusivity, no match, or below the
    /// minimum batch).  A normal outcome, not an error.
    pub rejected: usize,
}

// ── ClaimBoard ────────────────────────────────────────────────────────────────

/// The demand/reservation allocator for one logistics scope.
///
/// Demands are keyed by `(site, resource)`; reservations live in an
/// append-only ledger indexed by `ReservationId` so terminal entries stay
/// pollable.  The `active_by_hauler` index enforces reservation exclusivity
/// in O(1) instead of scanning the ledger per claim.
#[derive(Debug, Default)]
pub struct ClaimBoard {
    config: BoardConfig,
    demands: Vec<DemandEntry>,
    demand_index: FxHashMap<(SiteId, ResourceId), usize>,
    reservations: Vec<ReservationEntry>,
    active_by_hauler: FxHashMap<HaulerId, ReservationId>,
    pending: Vec<ClaimRequest>,
}

impl ClaimBoard {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    // ── Demand intake ─────────────────────────────────────────────────────

    /// Post (or raise) a demand: `required` units of `resource` at `site`.
    ///
    /// Posting against an existing entry adds to its requirement and raises
    /// its priority to the higher of the two.
    pub fn post_demand(
        &mut self,
        site:     SiteId,
        resource: ResourceId,
        required: u32,
        priority: u8,
        now:      Tick,
    ) {
        match self.demand_index.get(&(site, resource)) {
            Some(&i) => {
                let d = &mut self.demands[i];
                d.required = d.required.saturating_add(required);
                d.priority = d.priority.max(priority);
                d.last_update_tick = now;
            }
            None => {
                self.demand_index.insert((site, resource), self.demands.len());
                self.demands
                    .push(DemandEntry::new(site, resource, required, priority, now));
            }
        }
    }

    /// Record units physically delivered against a demand (called by the
    /// economy collaborator, not by the board itself).
    pub fn record_delivery(
        &mut self,
        site:     SiteId,
        resource: ResourceId,
        units:    u32,
        now:      Tick,
    ) -> LogisticsResult<()> {
        let i = *self
            .demand_index
            .get(&(site, resource))
            .ok_or(LogisticsError::DemandNotFound { site, resource })?;
        let d = &mut self.demands[i];
        d.delivered = d.delivered.saturating_add(units);
        d.last_update_tick = now;
        Ok(())
    }

    pub fn demand(&self, site: SiteId, resource: ResourceId) -> Option<&DemandEntry> {
        self.demand_index
            .get(&(site, resource))
            .map(|&i| &self.demands[i])
    }

    pub fn demands(&self) -> impl Iterator<Item = &DemandEntry> + '_ {
        self.demands.iter()
    }

    // ── Claim intake ──────────────────────────────────────────────────────

    /// Queue a claim request for this tick's allocation pass.
    pub fn submit_claim(&mut self, request: ClaimRequest) {
        self.pending.push(request);
    }

    pub fn pending_claims(&self) -> &[ClaimRequest] {
        &self.pending
    }

    // ── Reservation ledger ────────────────────────────────────────────────

    pub fn reservation(&self, id: ReservationId) -> LogisticsResult<&ReservationEntry> {
        self.reservations
            .get(id.index())
            .ok_or(LogisticsError::ReservationNotFound(id))
    }

    pub fn reservations(&self) -> impl Iterator<Item = &ReservationEntry> + '_ {
        self.reservations.iter()
    }

    /// `true` if `hauler` currently holds an `Active` reservation.
    #[inline]
    pub fn has_active(&self, hauler: HaulerId) -> bool {
        self.active_by_hauler.contains_key(&hauler)
    }

    /// The hauler's current `Active` reservation, if any.
    pub fn active_reservation(&self, hauler: HaulerId) -> Option<&ReservationEntry> {
        self.active_by_hauler
            .get(&hauler)
            .map(|&id| &self.reservations[id.index()])
    }

    /// Mark an `Active` reservation `Fulfilled`: its units move from
    /// reserved to delivered on the matching demand.
    pub fn fulfill(&mut self, id: ReservationId, now: Tick) -> LogisticsResult<()> {
        let r = self.close_reservation(id, ReservationStatus::Fulfilled)?;
        if let Some(&i) = self.demand_index.get(&(r.site, r.resource)) {
            let d = &mut self.demands[i];
            d.reserved = d.reserved.saturating_sub(r.units);
            d.delivered = d.delivered.saturating_add(r.units);
            d.last_update_tick = now;
        }
        Ok(())
    }

    /// Cancel an `Active` reservation, releasing its units back to the demand.
    pub fn cancel(&mut self, id: ReservationId, now: Tick) -> LogisticsResult<()> {
        let r = self.close_reservation(id, ReservationStatus::Cancelled)?;
        self.release_units(r.site, r.resource, r.units, now);
        Ok(())
    }

    // ── Per-tick allocation pass ──────────────────────────────────────────

    /// One board tick: sweep expired reservations, then process pending
    /// claims in arrival order up to `max_claims_per_tick`.  All pending
    /// claims are cleared at the end whether or not they were satisfied.
    ///
    /// No writes happen in playback mode (pending claims are kept — replay
    /// restores their outcome from history).
    pub fn tick(&mut self, clock: &SimClock) -> BoardReport {
        let mut report = BoardReport::default();
        if !clock.can_write() {
            return report;
        }
        let now = clock.current_tick;

        report.expired = self.sweep_expired(now);

        let pending = std::mem::take(&mut self.pending);
        for request in pending.iter().take(self.config.max_claims_per_tick) {
            if self.try_grant(request, now) {
                report.granted += 1;
            } else {
                report.rejected += 1;
            }
        }
        // Unprocessed requests past the quota were cleared with the take.

        report
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Sweep `Active` reservations whose expiry has been reached, releasing
    /// their units.  Returns the number expired.
    fn sweep_expired(&mut self, now: Tick) -> usize {
        let mut expired = 0;
        for i in 0..self.reservations.len() {
            if !self.reservations[i].is_expired_at(now) {
                continue;
            }
            self.reservations[i].status = ReservationStatus::Expired;
            let (hauler, site, resource, units) = {
                let r = &self.reservations[i];
                (r.hauler, r.site, r.resource, r.units)
            };
            self.active_by_hauler.remove(&hauler);
            self.release_units(site, resource, units, now);
            expired += 1;
        }
        expired
    }

    /// Try to grant `request`; `false` is a capacity rejection or exclusivity
    /// skip, never an error.
    fn try_grant(&mut self, request: &ClaimRequest, now: Tick) -> bool {
        // Reservation exclusivity: one active reservation per hauler.
        if self.has_active(request.hauler) {
            return false;
        }

        // Best match: higher priority, then higher outstanding; site/resource
        // ids break remaining ties deterministically (lower wins).
        let mut best: Option<(_, usize)> = None;
        for (i, d) in self.demands.iter().enumerate() {
            if !request.matches(d.site, d.resource) {
                continue;
            }
            let outstanding = d.outstanding();
            if outstanding == 0 {
                continue;
            }
            let key = (d.priority, outstanding, Reverse(d.site.0), Reverse(d.resource.0));
            if best.as_ref().is_none_or(|(bk, _)| key > *bk) {
                best = Some((key, i));
            }
        }
        let Some((_, idx)) = best else {
            return false;
        };

        let demand = &mut self.demands[idx];
        let allocation = demand
            .outstanding()
            .min(request.carry_capacity)
            .min(request.desired_max_units)
            .min(self.config.max_batch);
        let floor = request.desired_min_units.max(self.config.min_batch);
        if allocation < floor || allocation == 0 {
            return false;
        }

        demand.reserved = demand.reserved.saturating_add(allocation);
        demand.last_update_tick = now;
        let (site, resource) = (demand.site, demand.resource);

        let id = ReservationId(self.reservations.len() as u32);
        self.reservations.push(ReservationEntry {
            id,
            hauler: request.hauler,
            site,
            resource,
            units: allocation,
            created_tick: now,
            expiry_tick: now + self.config.reservation_ttl_ticks,
            status: ReservationStatus::Active,
        });
        self.active_by_hauler.insert(request.hauler, id);
        true
    }

    /// Flip an `Active` reservation to a terminal status and drop it from the
    /// exclusivity index.  Returns a copy of the closed entry.
    fn close_reservation(
        &mut self,
        id:     ReservationId,
        status: ReservationStatus,
    ) -> LogisticsResult<ReservationEntry> {
        let r = self
            .reservations
            .get_mut(id.index())
            .ok_or(LogisticsError::ReservationNotFound(id))?;
        if r.status != ReservationStatus::Active {
            return Err(LogisticsError::ReservationNotActive(id));
        }
        r.status = status;
        let copy = r.clone();
        self.active_by_hauler.remove(&copy.hauler);
        Ok(copy)
    }

    /// Return reserved units to a demand (expiry or cancellation).
    fn release_units(&mut self, site: SiteId, resource: ResourceId, units: u32, now: Tick) {
        if let Some(&i) = self.demand_index.get(&(site, resource)) {
            let d = &mut self.demands[i];
            d.reserved = d.reserved.saturating_sub(units);
            d.last_update_tick = now;
        }
    }
}
