//! Demand entries: what a site still needs.

use wn_core::{ResourceId, SiteId, Tick};

/// A site's outstanding need for one resource type.
///
/// Invariant: `outstanding() = max(0, required − delivered − reserved)`,
/// computed on read so it can never drift from the unit counters.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemandEntry {
    pub site: SiteId,
    pub resource: ResourceId,
    /// Total units the site wants.
    pub required: u32,
    /// Units already delivered (recorded by the economy collaborator).
    pub delivered: u32,
    /// Units promised by currently `Active` reservations.
    pub reserved: u32,
    /// Higher wins when several demands match a claim.
    pub priority: u8,
    /// Last tick any counter changed.
    pub last_update_tick: Tick,
}

impl DemandEntry {
    pub fn new(site: SiteId, resource: ResourceId, required: u32, priority: u8, now: Tick) -> Self {
        Self {
            site,
            resource,
            required,
            delivered: 0,
            reserved: 0,
            priority,
            last_update_tick: now,
        }
    }

    /// Units still unclaimed: `required − delivered − reserved`, floored at 0.
    #[inline]
    pub fn outstanding(&self) -> u32 {
        self.required
            .saturating_sub(self.delivered.saturating_add(self.reserved))
    }

    /// `true` once deliveries cover the full requirement.
    #[inline]
    pub fn is_satisfied(&self) -> bool {
        self.delivered >= self.required
    }
}
