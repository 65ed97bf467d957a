//! C FFI bindings for the Weir batch marshalling layer.
//!
//! Exposes a C-compatible API for foreign-language runtimes: register an
//! engine's per-entity primitives once as a callback table, then replace
//! thousands of boundary crossings with single bulk calls. This is the
//! only crate in the workspace that may contain `unsafe` code.
//!
//! The boundary carries fixed-width integers and doubles only; arrays
//! cross as flat pointer+length pairs. Every function returns an `i32`
//! status: `0` is success, `202` is the layer's invalid-parameter
//! sentinel, and any other nonzero value is an engine error code
//! propagated verbatim.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod engine;
pub mod options;
pub mod read;
pub mod status;
pub mod write;

mod handle;

#[cfg(test)]
pub(crate) mod testnet;
