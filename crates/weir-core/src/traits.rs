//! The engine-facing capability boundary.

use crate::error::ErrorCode;
use crate::id::{OptionCode, PropertyCode};

/// Which class of network entity an index refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A junction, tank, or reservoir.
    Node,
    /// A pipe, pump, or valve.
    Link,
}

/// The narrow capability set the marshalling layer consumes from a
/// hydraulic-network simulation engine.
///
/// Exactly four primitives: count query, scalar get, scalar set, option
/// set. The bulk operations in `weir-batch` are written against this trait
/// so they can be exercised with a substitute implementation, without a
/// real solver linked in.
///
/// # Conventions
///
/// Entity indices are 1-based and contiguous, `1..=entity_count(kind)` at
/// the time of the call. The layer does not cache counts; bounds checking
/// is the engine's own. All failures are the engine's nonzero integer
/// codes, carried verbatim as [`ErrorCode`].
pub trait HydraulicEngine {
    /// Current number of entities of `kind` in the loaded network.
    fn entity_count(&self, kind: EntityKind) -> Result<i32, ErrorCode>;

    /// Read one scalar attribute of one entity.
    fn entity_value(
        &self,
        kind: EntityKind,
        index: i32,
        property: PropertyCode,
    ) -> Result<f64, ErrorCode>;

    /// Write one scalar attribute of one entity.
    fn set_entity_value(
        &mut self,
        kind: EntityKind,
        index: i32,
        property: PropertyCode,
        value: f64,
    ) -> Result<(), ErrorCode>;

    /// Set a network-wide analysis option.
    fn set_option(&mut self, option: OptionCode, value: f64) -> Result<(), ErrorCode>;
}
