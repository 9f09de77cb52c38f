//! Bytecode serialization.
//!
//! Writes a module in two passes through the same code path:
//! - a layout pass that only measures, assigning every function its code and
//!   info offsets and recording the sizes the header needs
//! - a final pass that writes real bytes, with every forward reference known
//!
//! Section order is fixed; see `quire_bytecode::header`.

mod debug_info;
mod dedup;
mod dump;
mod error;
mod functions;
mod invariants;
mod layout;
mod serializer;
mod sink;
mod string_table;
mod tables;

#[cfg(test)]
mod debug_info_tests;
#[cfg(test)]
mod dedup_tests;
#[cfg(test)]
mod dump_tests;

use quire_bytecode::BytecodeModule;
use quire_core::SourceHash;

use crate::SerializeOptions;

pub use dedup::BytecodeDedupMap;
pub use dump::dump;
pub use error::EmitError;
pub use layout::{Artifact, SectionOffsets};
pub use serializer::BytecodeSerializer;
pub use sink::ByteSink;

/// Serialize `module` into a single artifact.
///
/// Assigns every function's code and info offsets as a side effect.
pub fn serialize(
    module: &mut BytecodeModule,
    source_hash: &SourceHash,
    options: &SerializeOptions,
) -> Result<Vec<u8>, EmitError> {
    serialize_artifact(module, source_hash, options).map(|artifact| artifact.bytes)
}

/// Like `serialize`, also returning where each section starts.
pub fn serialize_artifact(
    module: &mut BytecodeModule,
    source_hash: &SourceHash,
    options: &SerializeOptions,
) -> Result<Artifact, EmitError> {
    BytecodeSerializer::new(options).serialize(module, source_hash)
}
