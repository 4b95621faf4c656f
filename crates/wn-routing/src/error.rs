//! Error types for wn-routing.

use thiserror::Error;

use wn_core::WaypointId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoutingError {
    #[error("no viable route from {from} to {to}")]
    NoRoute { from: WaypointId, to: WaypointId },
}

pub type RoutingResult<T> = Result<T, RoutingError>;
