//! Test engine behind C callbacks.
//!
//! Wraps a [`ScriptedEngine`] in extern "C" trampolines so FFI tests
//! exercise the real registration path, including the count-kind codes
//! and per-primitive call counters.

#![allow(unsafe_code)]

use std::ffi::c_void;

use weir_core::{EntityKind, HydraulicEngine, OptionCode, PropertyCode};
use weir_test_utils::ScriptedEngine;

use crate::engine::{weir_engine_register, WeirEngineDef};

/// Count-kind codes the test host advertises (the hydraulic engine's
/// own values for node/link counts).
pub(crate) const NODE_COUNT_CODE: i32 = 0;
pub(crate) const LINK_COUNT_CODE: i32 = 2;

unsafe extern "C" fn count_cb(project: *mut c_void, count_code: i32, out: *mut i32) -> i32 {
    let engine = &*(project as *const ScriptedEngine);
    let kind = match count_code {
        NODE_COUNT_CODE => EntityKind::Node,
        LINK_COUNT_CODE => EntityKind::Link,
        _ => return 251,
    };
    match engine.entity_count(kind) {
        Ok(v) => {
            *out = v;
            0
        }
        Err(e) => e.0,
    }
}

unsafe extern "C" fn get_node_cb(project: *mut c_void, index: i32, prop: i32, out: *mut f64) -> i32 {
    get_cb(project, EntityKind::Node, index, prop, out)
}

unsafe extern "C" fn get_link_cb(project: *mut c_void, index: i32, prop: i32, out: *mut f64) -> i32 {
    get_cb(project, EntityKind::Link, index, prop, out)
}

unsafe fn get_cb(
    project: *mut c_void,
    kind: EntityKind,
    index: i32,
    prop: i32,
    out: *mut f64,
) -> i32 {
    let engine = &*(project as *const ScriptedEngine);
    match engine.entity_value(kind, index, PropertyCode(prop)) {
        Ok(v) => {
            *out = v;
            0
        }
        Err(e) => e.0,
    }
}

unsafe extern "C" fn set_node_cb(project: *mut c_void, index: i32, prop: i32, value: f64) -> i32 {
    set_cb(project, EntityKind::Node, index, prop, value)
}

unsafe extern "C" fn set_link_cb(project: *mut c_void, index: i32, prop: i32, value: f64) -> i32 {
    set_cb(project, EntityKind::Link, index, prop, value)
}

unsafe fn set_cb(project: *mut c_void, kind: EntityKind, index: i32, prop: i32, value: f64) -> i32 {
    let engine = &mut *(project as *mut ScriptedEngine);
    match engine.set_entity_value(kind, index, PropertyCode(prop), value) {
        Ok(()) => 0,
        Err(e) => e.0,
    }
}

unsafe extern "C" fn set_option_cb(project: *mut c_void, option: i32, value: f64) -> i32 {
    let engine = &mut *(project as *mut ScriptedEngine);
    match engine.set_option(OptionCode(option), value) {
        Ok(()) => 0,
        Err(e) => e.0,
    }
}

// Records the forwarded thread count in the engine's option table under a
// private slot so tests can observe it without widening ScriptedEngine.
unsafe extern "C" fn set_threads_cb(project: *mut c_void, n: i32) -> i32 {
    let engine = &mut *(project as *mut ScriptedEngine);
    match engine.set_option(THREADS_SLOT, n as f64) {
        Ok(()) => 0,
        Err(e) => e.0,
    }
}

/// Private option slot the thread knob records into (never a real code).
pub(crate) const THREADS_SLOT: OptionCode = OptionCode(-1);

/// A scripted network plus the callback table that exposes it over FFI.
pub(crate) struct TestNet {
    pub engine: Box<ScriptedEngine>,
}

impl TestNet {
    pub fn new(node_count: i32, link_count: i32) -> Self {
        Self {
            engine: Box::new(ScriptedEngine::new(node_count, link_count)),
        }
    }

    /// The callback table for this network. Valid while `self` lives.
    pub fn def(&mut self) -> WeirEngineDef {
        WeirEngineDef {
            project: &mut *self.engine as *mut ScriptedEngine as *mut c_void,
            count_fn: Some(count_cb),
            node_count_code: NODE_COUNT_CODE,
            link_count_code: LINK_COUNT_CODE,
            get_node_fn: Some(get_node_cb),
            get_link_fn: Some(get_link_cb),
            set_node_fn: Some(set_node_cb),
            set_link_fn: Some(set_link_cb),
            set_option_fn: Some(set_option_cb),
            set_threads_fn: Some(set_threads_cb),
        }
    }

    /// Register this network and return the engine handle.
    pub fn register(&mut self) -> u64 {
        let def = self.def();
        let mut handle = 0u64;
        let status = weir_engine_register(&def, &mut handle);
        assert_eq!(status, 0, "test engine registration failed");
        handle
    }
}
