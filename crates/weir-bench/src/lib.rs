//! Shared fixtures for the Weir benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]

use weir_core::{EntityKind, PropertyCode};
use weir_test_utils::ScriptedEngine;

/// Property codes used by the benchmark network.
pub const PRESSURE: PropertyCode = PropertyCode(11);
pub const FLOW: PropertyCode = PropertyCode(8);
pub const BASE_DEMAND: PropertyCode = PropertyCode(1);

/// A scripted network with deterministic pressures and flows.
pub fn scripted_network(nodes: i32, links: i32) -> ScriptedEngine {
    let mut engine = ScriptedEngine::new(nodes, links);
    let pressures: Vec<f64> = (0..nodes).map(|i| 40.0 + (i % 37) as f64 * 0.5).collect();
    let flows: Vec<f64> = (0..links).map(|i| -5.0 + (i % 23) as f64 * 0.75).collect();
    engine.script_values(EntityKind::Node, PRESSURE, &pressures);
    engine.script_values(EntityKind::Link, FLOW, &flows);
    engine
}
