//! Error taxonomy for the marshalling layer.
//!
//! Two kinds only: parameter problems the layer detects before touching the
//! engine, and nonzero codes the engine itself reported. Nothing is
//! swallowed, retried, or translated.

use std::error::Error;
use std::fmt;

/// Integer status returned across the C boundary when the layer rejects a
/// call before any engine interaction: null pointer, non-positive
/// count/capacity, undersized buffer, or unknown handle.
pub const INVALID_PARAMETER: i32 = 202;

/// A nonzero error code reported by the engine, propagated verbatim.
///
/// The value is never 0 (0 means success and is not an error).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ErrorCode(pub i32);

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "engine error {}", self.0)
    }
}

/// Error returned by a bulk operation.
///
/// The first error encountered aborts the remaining iteration and becomes
/// the call's result. There is no aggregation and no partial-success
/// variant: a bulk write that fails at position k leaves updates `0..k`
/// applied and never attempts the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchError {
    /// The caller supplied an invalid parameter; detected synchronously
    /// before any engine call. Crosses the C boundary as
    /// [`INVALID_PARAMETER`].
    InvalidParameter,
    /// The engine reported a nonzero code from a count query, accessor,
    /// mutator, or option call.
    Engine(ErrorCode),
}

impl BatchError {
    /// The integer form carried across the C boundary.
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidParameter => INVALID_PARAMETER,
            Self::Engine(c) => c.0,
        }
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter => write!(f, "invalid parameter"),
            Self::Engine(c) => write!(f, "{c}"),
        }
    }
}

impl Error for BatchError {}

impl From<ErrorCode> for BatchError {
    fn from(c: ErrorCode) -> Self {
        Self::Engine(c)
    }
}
