//! Two-pass serializer for quire bytecode modules.
//!
//! This crate turns a `BytecodeModule` into a flat artifact a loader can
//! read with fixed-offset field access only:
//! - `emit` - byte sink, dedup map, section serializers and the controller
//! - `options` - serializer configuration

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod emit;
mod options;

#[cfg(test)]
pub mod test_utils;

pub use emit::{
    Artifact, BytecodeSerializer, EmitError, SectionOffsets, dump, serialize, serialize_artifact,
};
pub use options::SerializeOptions;
