//! Error types for wn-transit.

use thiserror::Error;

use wn_core::BookingId;
use wn_network::NetworkError;

#[derive(Debug, Error)]
pub enum TransitError {
    #[error("booking {0} not found")]
    BookingNotFound(BookingId),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),
}

pub type TransitResult<T> = Result<T, TransitError>;
