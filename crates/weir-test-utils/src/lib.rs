//! Test utilities and mock engines for Weir development.
//!
//! [`ScriptedEngine`] is an in-memory [`HydraulicEngine`] with per-primitive
//! call counters, an ordered log of applied writes, and failure injection,
//! so tests can assert not just results but exactly how many engine calls a
//! bulk operation performed and where it stopped.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;
use std::collections::HashMap;

use weir_core::{EntityKind, ErrorCode, HydraulicEngine, OptionCode, PropertyCode};

/// One write the engine accepted, in the order it arrived.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppliedWrite {
    pub kind: EntityKind,
    pub index: i32,
    pub property: PropertyCode,
    pub value: f64,
}

/// Per-primitive call counters.
///
/// `Cell`-based so read-path primitives stay `&self` like the trait they
/// instrument.
#[derive(Debug, Default)]
pub struct CallCounters {
    pub count_calls: Cell<u32>,
    pub get_calls: Cell<u32>,
    pub set_calls: Cell<u32>,
    pub option_calls: Cell<u32>,
}

/// In-memory mock of the engine capability set.
///
/// Values live in a `(kind, index, property)` map. Entities are contiguous
/// and 1-based like the real engine; reading an index out of `1..=count`
/// or a property that was never scripted fails with
/// [`ScriptedEngine::UNDEFINED_VALUE`], mimicking the engine rejecting the
/// call itself rather than the layer pre-validating.
pub struct ScriptedEngine {
    node_count: i32,
    link_count: i32,
    values: HashMap<(EntityKind, i32, i32), f64>,
    options: HashMap<i32, f64>,
    applied: Vec<AppliedWrite>,
    pub counters: CallCounters,
    fail_count_query: Option<ErrorCode>,
    fail_get: HashMap<(EntityKind, i32), ErrorCode>,
    fail_set: HashMap<(EntityKind, i32), ErrorCode>,
    fail_option: Option<ErrorCode>,
}

impl ScriptedEngine {
    /// Code returned for an index or property the script never defined.
    pub const UNDEFINED_VALUE: ErrorCode = ErrorCode(251);

    pub fn new(node_count: i32, link_count: i32) -> Self {
        Self {
            node_count,
            link_count,
            values: HashMap::new(),
            options: HashMap::new(),
            applied: Vec::new(),
            counters: CallCounters::default(),
            fail_count_query: None,
            fail_get: HashMap::new(),
            fail_set: HashMap::new(),
            fail_option: None,
        }
    }

    /// Script one property over every entity of `kind`, `values[0]` landing
    /// at index 1.
    pub fn script_values(&mut self, kind: EntityKind, property: PropertyCode, values: &[f64]) {
        for (i, &v) in values.iter().enumerate() {
            self.values.insert((kind, i as i32 + 1, property.0), v);
        }
    }

    /// Make every count query fail with `code`.
    pub fn fail_count_queries(&mut self, code: ErrorCode) {
        self.fail_count_query = Some(code);
    }

    /// Make reads of one entity fail with `code`.
    pub fn fail_get_at(&mut self, kind: EntityKind, index: i32, code: ErrorCode) {
        self.fail_get.insert((kind, index), code);
    }

    /// Make writes to one entity fail with `code`.
    pub fn fail_set_at(&mut self, kind: EntityKind, index: i32, code: ErrorCode) {
        self.fail_set.insert((kind, index), code);
    }

    /// Make option calls fail with `code`.
    pub fn fail_options(&mut self, code: ErrorCode) {
        self.fail_option = Some(code);
    }

    /// Writes the engine accepted, in arrival order.
    pub fn applied(&self) -> &[AppliedWrite] {
        &self.applied
    }

    /// Drop the applied-write log. Benchmarks that loop over large update
    /// lists call this between iterations to keep the log bounded.
    pub fn clear_applied(&mut self) {
        self.applied.clear();
    }

    /// Last value set for an option slot, if any.
    pub fn option(&self, option: OptionCode) -> Option<f64> {
        self.options.get(&option.0).copied()
    }

    fn in_range(&self, kind: EntityKind, index: i32) -> bool {
        let count = match kind {
            EntityKind::Node => self.node_count,
            EntityKind::Link => self.link_count,
        };
        index >= 1 && index <= count
    }
}

impl HydraulicEngine for ScriptedEngine {
    fn entity_count(&self, kind: EntityKind) -> Result<i32, ErrorCode> {
        self.counters.count_calls.set(self.counters.count_calls.get() + 1);
        if let Some(code) = self.fail_count_query {
            return Err(code);
        }
        Ok(match kind {
            EntityKind::Node => self.node_count,
            EntityKind::Link => self.link_count,
        })
    }

    fn entity_value(
        &self,
        kind: EntityKind,
        index: i32,
        property: PropertyCode,
    ) -> Result<f64, ErrorCode> {
        self.counters.get_calls.set(self.counters.get_calls.get() + 1);
        if let Some(&code) = self.fail_get.get(&(kind, index)) {
            return Err(code);
        }
        self.values
            .get(&(kind, index, property.0))
            .copied()
            .ok_or(Self::UNDEFINED_VALUE)
    }

    fn set_entity_value(
        &mut self,
        kind: EntityKind,
        index: i32,
        property: PropertyCode,
        value: f64,
    ) -> Result<(), ErrorCode> {
        self.counters.set_calls.set(self.counters.set_calls.get() + 1);
        if let Some(&code) = self.fail_set.get(&(kind, index)) {
            return Err(code);
        }
        if !self.in_range(kind, index) {
            return Err(Self::UNDEFINED_VALUE);
        }
        self.values.insert((kind, index, property.0), value);
        self.applied.push(AppliedWrite {
            kind,
            index,
            property,
            value,
        });
        Ok(())
    }

    fn set_option(&mut self, option: OptionCode, value: f64) -> Result<(), ErrorCode> {
        self.counters.option_calls.set(self.counters.option_calls.get() + 1);
        if let Some(code) = self.fail_option {
            return Err(code);
        }
        self.options.insert(option.0, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_values_land_at_one_based_indices() {
        let mut engine = ScriptedEngine::new(3, 0);
        engine.script_values(EntityKind::Node, PropertyCode(11), &[1.5, 2.5, 3.5]);
        assert_eq!(
            engine.entity_value(EntityKind::Node, 1, PropertyCode(11)),
            Ok(1.5)
        );
        assert_eq!(
            engine.entity_value(EntityKind::Node, 3, PropertyCode(11)),
            Ok(3.5)
        );
        assert_eq!(engine.counters.get_calls.get(), 2);
    }

    #[test]
    fn unscripted_reads_fail_like_the_engine_would() {
        let engine = ScriptedEngine::new(2, 0);
        assert_eq!(
            engine.entity_value(EntityKind::Node, 1, PropertyCode(11)),
            Err(ScriptedEngine::UNDEFINED_VALUE)
        );
    }

    #[test]
    fn writes_are_logged_in_arrival_order() {
        let mut engine = ScriptedEngine::new(2, 2);
        engine
            .set_entity_value(EntityKind::Link, 2, PropertyCode(5), 9.0)
            .unwrap();
        engine
            .set_entity_value(EntityKind::Link, 1, PropertyCode(5), 8.0)
            .unwrap();
        let applied = engine.applied();
        assert_eq!(applied.len(), 2);
        assert_eq!(applied[0].index, 2);
        assert_eq!(applied[1].index, 1);
    }

    #[test]
    fn injected_failures_win_over_state() {
        let mut engine = ScriptedEngine::new(2, 0);
        engine.script_values(EntityKind::Node, PropertyCode(11), &[1.0, 2.0]);
        engine.fail_get_at(EntityKind::Node, 2, ErrorCode(110));
        assert_eq!(
            engine.entity_value(EntityKind::Node, 2, PropertyCode(11)),
            Err(ErrorCode(110))
        );
    }
}
