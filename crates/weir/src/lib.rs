//! Weir: batch marshalling between chatty runtimes and hydraulic solvers.
//!
//! A solver driven one entity at a time from a high-call-overhead runtime
//! pays a boundary crossing per node and link. Weir collapses those into a
//! fixed handful of bulk calls while preserving the engine's error codes,
//! 1-based index convention, and zero-padding guarantees. This facade
//! crate re-exports the public API; the C ABI lives in `weir-ffi`.
//!
//! # Quick start
//!
//! ```rust
//! use weir::prelude::*;
//!
//! // A stand-in for the real solver bindings.
//! struct Net {
//!     pressures: Vec<f64>,
//!     demands: Vec<f64>,
//!     multiplier: f64,
//! }
//!
//! impl HydraulicEngine for Net {
//!     fn entity_count(&self, kind: EntityKind) -> Result<i32, ErrorCode> {
//!         Ok(match kind {
//!             EntityKind::Node => self.pressures.len() as i32,
//!             EntityKind::Link => 0,
//!         })
//!     }
//!
//!     fn entity_value(
//!         &self,
//!         _kind: EntityKind,
//!         index: i32,
//!         _property: PropertyCode,
//!     ) -> Result<f64, ErrorCode> {
//!         self.pressures
//!             .get(index as usize - 1)
//!             .copied()
//!             .ok_or(ErrorCode(251))
//!     }
//!
//!     fn set_entity_value(
//!         &mut self,
//!         _kind: EntityKind,
//!         index: i32,
//!         _property: PropertyCode,
//!         value: f64,
//!     ) -> Result<(), ErrorCode> {
//!         let slot = self
//!             .demands
//!             .get_mut(index as usize - 1)
//!             .ok_or(ErrorCode(251))?;
//!         *slot = value;
//!         Ok(())
//!     }
//!
//!     fn set_option(&mut self, option: OptionCode, value: f64) -> Result<(), ErrorCode> {
//!         if option == DEMAND_MULTIPLIER {
//!             self.multiplier = value;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut net = Net {
//!     pressures: vec![52.1, 47.9, 60.4],
//!     demands: vec![0.0; 3],
//!     multiplier: 1.0,
//! };
//!
//! // One bulk call instead of one crossing per node; surplus capacity is
//! // zero-padded.
//! let mut out = [f64::NAN; 5];
//! let n = weir::batch::read_node_values(&net, PropertyCode(11), &mut out)?;
//! assert_eq!(n, 3);
//! assert_eq!(out, [52.1, 47.9, 60.4, 0.0, 0.0]);
//!
//! // Sparse updates, applied strictly in input order.
//! weir::batch::write_node_values(&mut net, PropertyCode(1), &[2, 3], &[4.0, 5.0])?;
//! assert_eq!(net.demands, [0.0, 4.0, 5.0]);
//!
//! // Network-wide scaling in a single O(1) option call.
//! weir::batch::set_demand_multiplier(&mut net, 1.25)?;
//! assert_eq!(net.multiplier, 1.25);
//! # Ok::<(), weir::types::BatchError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use weir_batch as batch;
pub use weir_core as types;

/// The commonly used subset of the API.
pub mod prelude {
    pub use weir_batch::{
        read_link_values, read_node_values, set_demand_multiplier, write_link_values,
        write_node_values,
    };
    pub use weir_core::{
        BatchError, EntityKind, ErrorCode, HydraulicEngine, OptionCode, PropertyCode,
        DEMAND_MULTIPLIER,
    };
}
