//! Opaque engine-defined code newtypes.
//!
//! The marshalling layer never interprets these values; they are carried
//! through to the engine unchanged. Newtypes exist so a property code
//! cannot be swapped with an option code or an entity index at a call site.

use std::fmt;

/// Engine-defined code selecting which scalar attribute of an entity is
/// being read or written (pressure, flow, elevation, initial status, ...).
///
/// Passed through to the engine verbatim. The layer performs no schema
/// validation; an unknown code is the engine's to reject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyCode(pub i32);

impl fmt::Display for PropertyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for PropertyCode {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// Engine-defined code selecting a network-wide analysis option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionCode(pub i32);

impl fmt::Display for OptionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for OptionCode {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// The engine's global demand-multiplier option slot.
///
/// The one option code the layer names itself: scaling every demand in the
/// network is a single O(1) option call instead of N per-node writes.
pub const DEMAND_MULTIPLIER: OptionCode = OptionCode(13);
