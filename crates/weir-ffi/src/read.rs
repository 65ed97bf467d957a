//! Bulk-read FFI: entity counts and whole-network property extraction.

use weir_batch::read_entity_values;
use weir_core::{EntityKind, HydraulicEngine, PropertyCode};

use crate::engine::engines;
use crate::status::{status, WeirStatus};

/// Query the current node and/or link counts.
///
/// Either output pointer may be null to skip that query. On any failure
/// the engine's code is returned and no output parameter is written;
/// outputs are staged and stored only once every requested query has
/// succeeded.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn weir_get_counts(handle: u64, n_nodes: *mut i32, n_links: *mut i32) -> i32 {
    let table = match engines().lock() {
        Ok(t) => t,
        Err(_) => return WeirStatus::InvalidParameter as i32,
    };
    let engine = match table.get(handle) {
        Some(e) => e,
        None => return WeirStatus::InvalidParameter as i32,
    };

    let mut nodes = None;
    if !n_nodes.is_null() {
        match engine.entity_count(EntityKind::Node) {
            Ok(v) => nodes = Some(v),
            Err(e) => return e.0,
        }
    }
    let mut links = None;
    if !n_links.is_null() {
        match engine.entity_count(EntityKind::Link) {
            Ok(v) => links = Some(v),
            Err(e) => return e.0,
        }
    }

    if let Some(v) = nodes {
        // SAFETY: n_nodes was checked non-null and is valid per caller contract.
        unsafe { *n_nodes = v };
    }
    if let Some(v) = links {
        // SAFETY: n_links was checked non-null and is valid per caller contract.
        unsafe { *n_links = v };
    }
    WeirStatus::Ok as i32
}

#[allow(unsafe_code)]
fn get_all(handle: u64, capacity: i32, property: i32, out: *mut f64, kind: EntityKind) -> i32 {
    if out.is_null() || capacity <= 0 {
        return WeirStatus::InvalidParameter as i32;
    }
    let table = match engines().lock() {
        Ok(t) => t,
        Err(_) => return WeirStatus::InvalidParameter as i32,
    };
    let engine = match table.get(handle) {
        Some(e) => e,
        None => return WeirStatus::InvalidParameter as i32,
    };

    // SAFETY: out points to `capacity` valid f64 slots per caller contract.
    let slice = unsafe { std::slice::from_raw_parts_mut(out, capacity as usize) };
    status(read_entity_values(engine, kind, PropertyCode(property), slice))
}

/// Read `property` (e.g. pressure) for every node into `out`.
///
/// `capacity` is the number of f64 slots at `out`; it must cover the
/// current node count or 202 is returned before any accessor call. On
/// success slots past the node count are zeroed. On a mid-read engine
/// failure the already-filled prefix is live and the rest of the buffer
/// is undefined.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn weir_get_all_node_values(
    handle: u64,
    capacity: i32,
    property: i32,
    out: *mut f64,
) -> i32 {
    get_all(handle, capacity, property, out, EntityKind::Node)
}

/// Read `property` (e.g. flow) for every link into `out`.
///
/// Same contract as [`weir_get_all_node_values`].
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn weir_get_all_link_values(
    handle: u64,
    capacity: i32,
    property: i32,
    out: *mut f64,
) -> i32 {
    get_all(handle, capacity, property, out, EntityKind::Link)
}
