//! Error types for the simulation runner.

use thiserror::Error;

use wn_network::NetworkError;
use wn_transit::TransitError;

/// Errors from building or running a [`Sim`][crate::Sim].
///
/// Per-booking failures (no route, capture, loss) are *states*, not errors —
/// they never surface here.  A `SimError` means the simulation itself is
/// inconsistent: an invalid network, or a dangling id inside the pipeline.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("transit error: {0}")]
    Transit(#[from] TransitError),
}

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;
