//! Integer status codes crossing the C boundary.
//!
//! Unlike most FFI status tables this one is deliberately open:
//! the engine's own error taxonomy passes through verbatim, so only the
//! two layer-defined values are named here.

use weir_core::BatchError;

/// The layer's own status values. ABI-stable.
///
/// Any other nonzero return is an engine error code, untranslated.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeirStatus {
    /// Success.
    Ok = 0,
    /// Null pointer, non-positive count/capacity, undersized buffer, or
    /// unknown handle, detected before any engine interaction.
    InvalidParameter = 202,
}

/// Collapse a bulk result to its boundary form.
pub(crate) fn status<T>(result: Result<T, BatchError>) -> i32 {
    match result {
        Ok(_) => WeirStatus::Ok as i32,
        Err(e) => e.code(),
    }
}
