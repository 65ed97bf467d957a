//! Bulk marshalling over per-entity hydraulic engine calls.
//!
//! A solver driven from a high-call-overhead runtime pays a boundary
//! crossing for every node and link it touches. This crate collapses those
//! into a handful of bulk operations: read every entity's value of one
//! property into a caller-supplied buffer, apply a sparse list of
//! `(index, value)` updates in order, or set one network-wide option.
//!
//! All operations are generic over [`HydraulicEngine`], hold no state of
//! their own, and perform a bounded, deterministic number of sequential
//! engine calls on the calling thread.
//!
//! [`HydraulicEngine`]: weir_core::HydraulicEngine

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod option;
pub mod read;
pub mod write;

pub use option::set_demand_multiplier;
pub use read::{read_entity_values, read_link_values, read_node_values};
pub use write::{write_entity_values, write_link_values, write_node_values};
