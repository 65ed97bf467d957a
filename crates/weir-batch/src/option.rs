//! Network-wide option forwarding.

use weir_core::{BatchError, HydraulicEngine, DEMAND_MULTIPLIER};

/// Scale every demand in the network by `factor` in one engine call.
///
/// Forwards `factor` to the engine's [`DEMAND_MULTIPLIER`] option slot.
/// The per-entity equivalent would be one mutator call per node; the
/// engine already supports the O(1) global form, so this is a single
/// forward with no iteration.
///
/// # Errors
///
/// Whatever the engine's option primitive reports, verbatim.
pub fn set_demand_multiplier<E: HydraulicEngine + ?Sized>(
    engine: &mut E,
    factor: f64,
) -> Result<(), BatchError> {
    engine.set_option(DEMAND_MULTIPLIER, factor)?;
    Ok(())
}
