//! Network-wide option FFI: demand multiplier and the solver-thread knob.

use weir_batch::set_demand_multiplier;

use crate::engine::engines;
use crate::status::{status, WeirStatus};

/// Scale every demand in the network by `factor` in one engine call.
///
/// Forwards to the engine's global demand-multiplier option slot; no
/// per-entity iteration. Unknown handles return 202 without any engine
/// call; otherwise the engine's own status is returned.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn weir_set_demand_multiplier(handle: u64, factor: f64) -> i32 {
    let mut table = match engines().lock() {
        Ok(t) => t,
        Err(_) => return WeirStatus::InvalidParameter as i32,
    };
    let engine = match table.get_mut(handle) {
        Some(e) => e,
        None => return WeirStatus::InvalidParameter as i32,
    };
    status(set_demand_multiplier(engine, factor))
}

/// Forward a worker-thread count to the engine's solver runtime.
///
/// Pure pass-through: the layer never orchestrates parallelism itself.
/// Engines without the knob registered a null callback, making this a
/// successful no-op. `n <= 0` returns 202.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn weir_set_solver_threads(handle: u64, n: i32) -> i32 {
    if n <= 0 {
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
    engine.set_solver_threads(n)
}
