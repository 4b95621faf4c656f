//! Claim requests: a hauler's per-tick ask for work.

use wn_core::{HaulerId, ResourceId, SiteId};

/// A transient ask from a hauler offering capacity.
///
/// Requests are pulses, not persistent state: the board clears all of them
/// at end of tick whether or not they were satisfied.  A hauler that wants
/// work next tick must re-request.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClaimRequest {
    pub hauler: HaulerId,
    /// Only match demands at this site, if set.
    pub site_filter: Option<SiteId>,
    /// Only match demands for this resource, if set.
    pub resource_filter: Option<ResourceId>,
    /// The most the hauler can physically carry.
    pub carry_capacity: u32,
    /// Below this many units the trip isn't worth it to the hauler.
    pub desired_min_units: u32,
    /// The hauler won't take more than this even if it fits.
    pub desired_max_units: u32,
}

impl ClaimRequest {
    /// An unfiltered request: any site, any resource, min 1 unit.
    pub fn open(hauler: HaulerId, carry_capacity: u32) -> Self {
        Self {
            hauler,
            site_filter: None,
            resource_filter: None,
            carry_capacity,
            desired_min_units: 1,
            desired_max_units: u32::MAX,
        }
    }

    /// `true` if `site`/`resource` pass this request's filters.
    #[inline]
    pub fn matches(&self, site: SiteId, resource: ResourceId) -> bool {
        self.site_filter.is_none_or(|s| s == site)
            && self.resource_filter.is_none_or(|r| r == resource)
    }
}
