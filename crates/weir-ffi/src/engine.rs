//! Engine registration: bridges a host-supplied callback table to the
//! Rust [`HydraulicEngine`] trait.
//!
//! The layer is linked against no particular solver. The host hands over
//! the engine's per-entity primitives as C function pointers in a
//! [`WeirEngineDef`]; `weir_engine_register` wraps them in a
//! [`CallbackEngine`] and returns a `u64` handle consumed by every bulk
//! call. Count-kind codes are part of the table so the layer never bakes
//! in one engine's enum values.

use std::ffi::c_void;
use std::sync::Mutex;

use weir_core::{EntityKind, ErrorCode, HydraulicEngine, OptionCode, PropertyCode};

use crate::handle::HandleTable;
use crate::status::WeirStatus;

/// Packed API version: `major * 100 + minor * 10 + patch` (10 = v0.1.0).
pub const WEIR_API_VERSION: i32 = 10;

/// Count query: `(project, count_code, out) -> status`.
pub type WeirCountFn = unsafe extern "C" fn(*mut c_void, i32, *mut i32) -> i32;
/// Scalar accessor: `(project, index, property_code, out) -> status`.
pub type WeirGetValueFn = unsafe extern "C" fn(*mut c_void, i32, i32, *mut f64) -> i32;
/// Scalar mutator: `(project, index, property_code, value) -> status`.
pub type WeirSetValueFn = unsafe extern "C" fn(*mut c_void, i32, i32, f64) -> i32;
/// Global option setter: `(project, option_code, value) -> status`.
pub type WeirSetOptionFn = unsafe extern "C" fn(*mut c_void, i32, f64) -> i32;
/// Solver worker-thread knob: `(project, n_threads) -> status`.
pub type WeirSetThreadsFn = unsafe extern "C" fn(*mut c_void, i32) -> i32;

/// Engine capability table supplied by the host at registration.
///
/// All function pointers except `set_threads_fn` are required. Callbacks
/// receive `project` back verbatim; a global-API engine with no project
/// object may pass null. Every callback returns the engine's status
/// convention: 0 success, nonzero error code. All pointers must remain
/// valid until the handle is unregistered.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct WeirEngineDef {
    /// Opaque engine project handle passed back to every callback.
    pub project: *mut c_void,
    /// Entity count query (must not be null).
    pub count_fn: Option<WeirCountFn>,
    /// The engine's count-kind code for nodes (e.g. `EN_NODECOUNT`).
    pub node_count_code: i32,
    /// The engine's count-kind code for links (e.g. `EN_LINKCOUNT`).
    pub link_count_code: i32,
    /// Single-node scalar accessor (must not be null).
    pub get_node_fn: Option<WeirGetValueFn>,
    /// Single-link scalar accessor (must not be null).
    pub get_link_fn: Option<WeirGetValueFn>,
    /// Single-node scalar mutator (must not be null).
    pub set_node_fn: Option<WeirSetValueFn>,
    /// Single-link scalar mutator (must not be null).
    pub set_link_fn: Option<WeirSetValueFn>,
    /// Network-wide option setter (must not be null).
    pub set_option_fn: Option<WeirSetOptionFn>,
    /// Optional worker-thread knob; null for engines without one.
    pub set_threads_fn: Option<WeirSetThreadsFn>,
}

// Compile-time layout assertion for ABI stability: one pointer-sized
// project field, eight pointer-sized callbacks, two i32 codes (padded).
const _: () = assert!(
    std::mem::size_of::<WeirEngineDef>() == 8 * std::mem::size_of::<usize>() + 8
);
const _: () = assert!(std::mem::align_of::<WeirEngineDef>() == std::mem::align_of::<usize>());

/// Rust-side engine implementing [`HydraulicEngine`] by delegating to the
/// host's callbacks. Required pointers were validated at registration.
pub(crate) struct CallbackEngine {
    project: *mut c_void,
    count_fn: WeirCountFn,
    node_count_code: i32,
    link_count_code: i32,
    get_node_fn: WeirGetValueFn,
    get_link_fn: WeirGetValueFn,
    set_node_fn: WeirSetValueFn,
    set_link_fn: WeirSetValueFn,
    set_option_fn: WeirSetOptionFn,
    set_threads_fn: Option<WeirSetThreadsFn>,
}

// SAFETY: the FFI contract requires `project` and the callbacks to be
// callable from whichever thread holds the engine table lock. The table
// mutex serializes all calls through one engine handle.
#[allow(unsafe_code)]
unsafe impl Send for CallbackEngine {}

impl CallbackEngine {
    /// Forward to the optional worker-thread knob; success if absent.
    #[allow(unsafe_code)]
    pub(crate) fn set_solver_threads(&mut self, n: i32) -> i32 {
        match self.set_threads_fn {
            // SAFETY: callback and project are valid per registration contract.
            Some(f) => unsafe { f(self.project, n) },
            None => WeirStatus::Ok as i32,
        }
    }
}

impl HydraulicEngine for CallbackEngine {
    #[allow(unsafe_code)]
    fn entity_count(&self, kind: EntityKind) -> Result<i32, ErrorCode> {
        let code = match kind {
            EntityKind::Node => self.node_count_code,
            EntityKind::Link => self.link_count_code,
        };
        let mut value = 0i32;
        // SAFETY: callback and project are valid per registration contract;
        // `value` outlives the call.
        let rc = unsafe { (self.count_fn)(self.project, code, &mut value) };
        if rc == 0 {
            Ok(value)
        } else {
            Err(ErrorCode(rc))
        }
    }

    #[allow(unsafe_code)]
    fn entity_value(
        &self,
        kind: EntityKind,
        index: i32,
        property: PropertyCode,
    ) -> Result<f64, ErrorCode> {
        let f = match kind {
            EntityKind::Node => self.get_node_fn,
            EntityKind::Link => self.get_link_fn,
        };
        let mut value = 0.0f64;
        // SAFETY: callback and project are valid per registration contract.
        let rc = unsafe { f(self.project, index, property.0, &mut value) };
        if rc == 0 {
            Ok(value)
        } else {
            Err(ErrorCode(rc))
        }
    }

    #[allow(unsafe_code)]
    fn set_entity_value(
        &mut self,
        kind: EntityKind,
        index: i32,
        property: PropertyCode,
        value: f64,
    ) -> Result<(), ErrorCode> {
        let f = match kind {
            EntityKind::Node => self.set_node_fn,
            EntityKind::Link => self.set_link_fn,
        };
        // SAFETY: callback and project are valid per registration contract.
        let rc = unsafe { f(self.project, index, property.0, value) };
        if rc == 0 {
            Ok(())
        } else {
            Err(ErrorCode(rc))
        }
    }

    #[allow(unsafe_code)]
    fn set_option(&mut self, option: OptionCode, value: f64) -> Result<(), ErrorCode> {
        // SAFETY: callback and project are valid per registration contract.
        let rc = unsafe { (self.set_option_fn)(self.project, option.0, value) };
        if rc == 0 {
            Ok(())
        } else {
            Err(ErrorCode(rc))
        }
    }
}

static ENGINES: Mutex<HandleTable<CallbackEngine>> = Mutex::new(HandleTable::new());

pub(crate) fn engines() -> &'static Mutex<HandleTable<CallbackEngine>> {
    &ENGINES
}

/// Register an engine's primitives and return a handle for bulk calls.
///
/// Fails with 202 if `def` or `out_handle` is null or any required
/// callback is missing. `project` may be null for global-API engines.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn weir_engine_register(def: *const WeirEngineDef, out_handle: *mut u64) -> i32 {
    if def.is_null() || out_handle.is_null() {
        return WeirStatus::InvalidParameter as i32;
    }
    // SAFETY: def is a valid pointer per caller contract.
    let def = unsafe { *def };

    let (count_fn, get_node_fn, get_link_fn, set_node_fn, set_link_fn, set_option_fn) = match (
        def.count_fn,
        def.get_node_fn,
        def.get_link_fn,
        def.set_node_fn,
        def.set_link_fn,
        def.set_option_fn,
    ) {
        (Some(a), Some(b), Some(c), Some(d), Some(e), Some(f)) => (a, b, c, d, e, f),
        _ => return WeirStatus::InvalidParameter as i32,
    };

    let engine = CallbackEngine {
        project: def.project,
        count_fn,
        node_count_code: def.node_count_code,
        link_count_code: def.link_count_code,
        get_node_fn,
        get_link_fn,
        set_node_fn,
        set_link_fn,
        set_option_fn,
        set_threads_fn: def.set_threads_fn,
    };

    let mut table = match ENGINES.lock() {
        Ok(t) => t,
        Err(_) => return WeirStatus::InvalidParameter as i32,
    };
    let handle = table.insert(engine);
    // SAFETY: out_handle is a valid pointer per caller contract.
    unsafe { *out_handle = handle };
    WeirStatus::Ok as i32
}

/// Unregister an engine handle. Stale or double-unregistered handles
/// return 202; the callbacks are never invoked.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn weir_engine_unregister(handle: u64) -> i32 {
    let mut table = match ENGINES.lock() {
        Ok(t) => t,
        Err(_) => return WeirStatus::InvalidParameter as i32,
    };
    match table.remove(handle) {
        Some(_) => WeirStatus::Ok as i32,
        None => WeirStatus::InvalidParameter as i32,
    }
}

/// Packed layer version (`major * 100 + minor * 10 + patch`).
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn weir_version() -> i32 {
    WEIR_API_VERSION
}
