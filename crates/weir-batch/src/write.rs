//! Bulk write: apply a sparse update list through per-entity mutators.

use weir_core::{BatchError, EntityKind, HydraulicEngine, PropertyCode};

/// Apply `(indices[i], values[i])` updates of `property` to entities of
/// `kind`, strictly in input order.
///
/// The update list is the flat parallel-array shape of the binary
/// boundary: entity indices (1-based) in one slice, values in the other,
/// sharing a length. No reordering, no deduplication, no validation beyond
/// what the engine itself rejects.
///
/// # Errors
///
/// - [`BatchError::InvalidParameter`] if the list is empty or the slice
///   lengths differ; no engine interaction occurs.
/// - The first failing mutator's code, verbatim. This is deliberate
///   first-error-wins: updates before the failing position have already
///   been applied to the engine and are not rolled back; updates at or
///   after it are never attempted.
pub fn write_entity_values<E: HydraulicEngine + ?Sized>(
    engine: &mut E,
    kind: EntityKind,
    property: PropertyCode,
    indices: &[i32],
    values: &[f64],
) -> Result<(), BatchError> {
    if indices.is_empty() || indices.len() != values.len() {
        return Err(BatchError::InvalidParameter);
    }

    for (&index, &value) in indices.iter().zip(values) {
        engine.set_entity_value(kind, index, property, value)?;
    }
    Ok(())
}

/// Bulk write over nodes. See [`write_entity_values`].
pub fn write_node_values<E: HydraulicEngine + ?Sized>(
    engine: &mut E,
    property: PropertyCode,
    indices: &[i32],
    values: &[f64],
) -> Result<(), BatchError> {
    write_entity_values(engine, EntityKind::Node, property, indices, values)
}

/// Bulk write over links. See [`write_entity_values`].
pub fn write_link_values<E: HydraulicEngine + ?Sized>(
    engine: &mut E,
    property: PropertyCode,
    indices: &[i32],
    values: &[f64],
) -> Result<(), BatchError> {
    write_entity_values(engine, EntityKind::Link, property, indices, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use weir_core::ErrorCode;
    use weir_test_utils::ScriptedEngine;

    const BASE_DEMAND: PropertyCode = PropertyCode(1);
    const INIT_STATUS: PropertyCode = PropertyCode(11);

    #[test]
    fn all_updates_applied_in_input_order() {
        let mut engine = ScriptedEngine::new(5, 0);
        let indices = [4, 1, 4, 2];
        let values = [10.0, 20.0, 30.0, 40.0];
        write_node_values(&mut engine, BASE_DEMAND, &indices, &values).unwrap();

        let applied = engine.applied();
        assert_eq!(applied.len(), 4);
        for (i, w) in applied.iter().enumerate() {
            assert_eq!(w.index, indices[i]);
            assert_eq!(w.value, values[i]);
            assert_eq!(w.property, BASE_DEMAND);
        }
        // Duplicate index: last write in input order wins.
        assert_eq!(
            engine.entity_value(EntityKind::Node, 4, BASE_DEMAND),
            Ok(30.0)
        );
    }

    #[test]
    fn empty_list_rejected_without_engine_interaction() {
        let mut engine = ScriptedEngine::new(5, 5);
        assert_eq!(
            write_node_values(&mut engine, BASE_DEMAND, &[], &[]),
            Err(BatchError::InvalidParameter)
        );
        assert_eq!(engine.counters.set_calls.get(), 0);
    }

    #[test]
    fn length_mismatch_rejected_without_engine_interaction() {
        let mut engine = ScriptedEngine::new(5, 5);
        assert_eq!(
            write_node_values(&mut engine, BASE_DEMAND, &[1, 2], &[1.0]),
            Err(BatchError::InvalidParameter)
        );
        assert_eq!(engine.counters.set_calls.get(), 0);
    }

    #[test]
    fn failure_at_position_k_applies_exactly_the_prefix() {
        let mut engine = ScriptedEngine::new(5, 0);
        engine.fail_set_at(EntityKind::Node, 3, ErrorCode(203));
        let indices = [1, 2, 3, 4];
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(
            write_node_values(&mut engine, BASE_DEMAND, &indices, &values),
            Err(BatchError::Engine(ErrorCode(203)))
        );
        // Positions 0..2 applied, the failing mutator was invoked, nothing after.
        assert_eq!(engine.applied().len(), 2);
        assert_eq!(engine.applied()[0].index, 1);
        assert_eq!(engine.applied()[1].index, 2);
        assert_eq!(engine.counters.set_calls.get(), 3);
    }

    #[test]
    fn failure_on_first_update_applies_nothing() {
        let mut engine = ScriptedEngine::new(5, 0);
        engine.fail_set_at(EntityKind::Node, 2, ErrorCode(203));
        assert_eq!(
            write_node_values(&mut engine, BASE_DEMAND, &[2, 1], &[5.0, 6.0]),
            Err(BatchError::Engine(ErrorCode(203)))
        );
        assert!(engine.applied().is_empty());
        assert_eq!(engine.counters.set_calls.get(), 1);
    }

    #[test]
    fn out_of_range_index_surfaces_the_engine_code() {
        let mut engine = ScriptedEngine::new(2, 2);
        assert_eq!(
            write_link_values(&mut engine, INIT_STATUS, &[1, 7], &[0.0, 1.0]),
            Err(BatchError::Engine(ScriptedEngine::UNDEFINED_VALUE))
        );
        assert_eq!(engine.applied().len(), 1);
    }

    #[test]
    fn successful_writes_read_back() {
        let mut engine = ScriptedEngine::new(3, 3);
        write_link_values(&mut engine, INIT_STATUS, &[3, 1], &[0.0, 1.0]).unwrap();
        assert_eq!(
            engine.entity_value(EntityKind::Link, 3, INIT_STATUS),
            Ok(0.0)
        );
        assert_eq!(
            engine.entity_value(EntityKind::Link, 1, INIT_STATUS),
            Ok(1.0)
        );
    }

    proptest! {
        // Failure at position k: exactly k updates applied, k+1 mutator calls.
        #[test]
        fn first_error_wins_at_any_position(
            n in 1usize..30,
            k in 0usize..30,
        ) {
            prop_assume!(k < n);
            let mut engine = ScriptedEngine::new(n as i32 + 1, 0);
            // Index n+1 exists but is scripted to fail; use it at position k.
            engine.fail_set_at(EntityKind::Node, n as i32 + 1, ErrorCode(207));
            let mut indices: Vec<i32> = (1..=n as i32).collect();
            indices[k] = n as i32 + 1;
            let values: Vec<f64> = (0..n).map(|i| i as f64).collect();

            prop_assert_eq!(
                write_node_values(&mut engine, BASE_DEMAND, &indices, &values),
                Err(BatchError::Engine(ErrorCode(207)))
            );
            prop_assert_eq!(engine.applied().len(), k);
            prop_assert_eq!(engine.counters.set_calls.get(), k as u32 + 1);
        }
    }
}
