//! Bulk-write FFI: sparse parallel-array updates across nodes or links.

use weir_batch::write_entity_values;
use weir_core::{EntityKind, PropertyCode};

use crate::engine::engines;
use crate::status::{status, WeirStatus};

#[allow(unsafe_code)]
fn set_values(
    handle: u64,
    property: i32,
    indices: *const i32,
    values: *const f64,
    n: i32,
    kind: EntityKind,
) -> i32 {
    if indices.is_null() || values.is_null() || n <= 0 {
        return WeirStatus::InvalidParameter as i32;
    }
    let mut table = match engines().lock() {
        Ok(t) => t,
        Err(_) => return WeirStatus::InvalidParameter as i32,
    };
    let engine = match table.get_mut(handle) {
        Some(e) => e,
        None => return WeirStatus::InvalidParameter as i32,
    };

    // SAFETY: indices and values each point to n valid elements per caller
    // contract.
    let idx = unsafe { std::slice::from_raw_parts(indices, n as usize) };
    let vals = unsafe { std::slice::from_raw_parts(values, n as usize) };
    status(write_entity_values(
        engine,
        kind,
        PropertyCode(property),
        idx,
        vals,
    ))
}

/// Apply `(indices[i], values[i])` node updates of `property`, in order.
///
/// `indices` are 1-based node indices; `indices` and `values` each hold
/// `n` elements. On the first engine failure the exact code is returned:
/// updates before the failing position stay applied, updates at or after
/// it are never attempted. Null arrays or `n <= 0` return 202 with no
/// engine interaction.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn weir_set_node_values(
    handle: u64,
    property: i32,
    indices: *const i32,
    values: *const f64,
    n: i32,
) -> i32 {
    set_values(handle, property, indices, values, n, EntityKind::Node)
}

/// Apply `(indices[i], values[i])` link updates of `property`, in order.
///
/// Same contract as [`weir_set_node_values`].
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn weir_set_link_values(
    handle: u64,
    property: i32,
    indices: *const i32,
    values: *const f64,
    n: i32,
) -> i32 {
    set_values(handle, property, indices, values, n, EntityKind::Link)
}
