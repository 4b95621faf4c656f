//! Error types for claim-board operations.

use thiserror::Error;

use wn_core::{ReservationId, ResourceId, SiteId};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LogisticsError {
    #[error("reservation {0} not found")]
    ReservationNotFound(ReservationId),

    #[error("reservation {0} is not active")]
    ReservationNotActive(ReservationId),

    #[error("no demand posted for resource {resource} at site {site}")]
    DemandNotFound { site: SiteId, resource: ResourceId },
}

pub type LogisticsResult<T> = Result<T, LogisticsError>;
