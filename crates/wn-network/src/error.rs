//! Error types for wn-network.

use thiserror::Error;

use wn_core::{LinkId, PlatformId, WaypointId};

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("waypoint {0} not found")]
    WaypointNotFound(WaypointId),

    #[error("link {0} not found")]
    LinkNotFound(LinkId),

    #[error("platform {0} is registered by more than one waypoint")]
    DuplicatePlatform(PlatformId),

    #[error("waypoint {0} has a zero payload capacity")]
    ZeroCapacity(WaypointId),

    #[error("waypoint {0} has no owning faction")]
    NoOwner(WaypointId),

    #[error("waypoint {0} is hosted by a platform without warp-relay hardware")]
    NotRelayCapable(WaypointId),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
