//! Core types and traits for the Weir batch marshalling layer.
//!
//! This is the leaf crate with zero dependencies. It defines the opaque
//! code newtypes, the error taxonomy, and the [`HydraulicEngine`]
//! capability trait that the marshalling logic is written against.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod traits;

pub use error::{BatchError, ErrorCode, INVALID_PARAMETER};
pub use id::{OptionCode, PropertyCode, DEMAND_MULTIPLIER};
pub use traits::{EntityKind, HydraulicEngine};
