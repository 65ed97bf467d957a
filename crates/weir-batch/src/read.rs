//! Bulk read: pull one property for every entity into a caller buffer.

use weir_core::{BatchError, EntityKind, HydraulicEngine, PropertyCode};

/// Fill `out` with `property` for every entity of `kind`.
///
/// Queries the engine's current entity count, then reads indices
/// `1..=count` through the per-entity accessor, storing index `i` at
/// `out[i - 1]`. On success every surplus slot `out[count..]` is forced to
/// exactly `0.0` (stale contents included) and the entity count is
/// returned.
///
/// # Errors
///
/// - [`BatchError::InvalidParameter`] if `out` is empty, before any engine
///   call.
/// - The count query's own code, verbatim, if it fails.
/// - [`BatchError::InvalidParameter`] if `out.len()` is smaller than the
///   current entity count; no accessor is ever called.
/// - The first failing accessor's code, verbatim. Slots written before the
///   failure hold live values; the rest of the buffer is untouched and
///   must be treated as undefined.
pub fn read_entity_values<E: HydraulicEngine + ?Sized>(
    engine: &E,
    kind: EntityKind,
    property: PropertyCode,
    out: &mut [f64],
) -> Result<usize, BatchError> {
    if out.is_empty() {
        return Err(BatchError::InvalidParameter);
    }

    let count = engine.entity_count(kind)?;
    let count = usize::try_from(count).map_err(|_| BatchError::InvalidParameter)?;
    if out.len() < count {
        return Err(BatchError::InvalidParameter);
    }

    for i in 1..=count {
        out[i - 1] = engine.entity_value(kind, i as i32, property)?;
    }
    for slot in &mut out[count..] {
        *slot = 0.0;
    }
    Ok(count)
}

/// Bulk read over every node. See [`read_entity_values`].
pub fn read_node_values<E: HydraulicEngine + ?Sized>(
    engine: &E,
    property: PropertyCode,
    out: &mut [f64],
) -> Result<usize, BatchError> {
    read_entity_values(engine, EntityKind::Node, property, out)
}

/// Bulk read over every link. See [`read_entity_values`].
pub fn read_link_values<E: HydraulicEngine + ?Sized>(
    engine: &E,
    property: PropertyCode,
    out: &mut [f64],
) -> Result<usize, BatchError> {
    read_entity_values(engine, EntityKind::Link, property, out)
}
