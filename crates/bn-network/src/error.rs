//! Network-subsystem error type.

use thiserror::Error;

use bn_core::{BusId, CoreError, StopId};

/// Errors produced by `bn-network`.
///
/// Every variant is a deterministic consequence of the input data; there is
/// nothing to retry.  Unknown bus numbers and stop names at query time are
/// `None`, not errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("bus {bus} references stop {name:?}, which was never registered")]
    UnknownStop { bus: BusId, name: String },

    #[error("bus {bus} references {stop}, which the registry never issued")]
    UnresolvedStop { bus: BusId, stop: StopId },

    #[error("no declared distance between {from:?} and {to:?} in either direction")]
    MissingDeclaredDistance { from: String, to: String },

    #[error("invalid distance {value} between {from} and {to}: must be finite and non-negative")]
    InvalidDistance { from: StopId, to: StopId, value: f64 },

    #[error("distance from {from} to {to} already declared as {existing} m, refusing {new} m")]
    ConflictingDistance { from: StopId, to: StopId, existing: u64, new: u64 },

    #[error("declared length of bus {bus} does not fit in u64 metres")]
    LengthOverflow { bus: BusId },

    #[error("stop→bus index has already been connected")]
    AlreadyConnected,

    #[error(transparent)]
    Config(#[from] CoreError),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
