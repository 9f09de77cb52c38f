//! Test utilities: module fixtures and artifact readers.

use quire_bytecode::{
    BytecodeFunction, BytecodeModule, FileHeader, Record, SmallFuncHeader,
};
use quire_core::SourceHash;

use crate::{Artifact, SerializeOptions, serialize_artifact};

/// Hash used by every fixture, recognizable in hex dumps.
pub fn fixture_hash() -> SourceHash {
    SourceHash::new([0xAB; 20])
}

/// A module with one function per body and nothing else.
pub fn module_with_bodies(bodies: &[&[u8]]) -> BytecodeModule {
    let mut builder = BytecodeModule::builder();
    for body in bodies {
        builder.add_function(BytecodeFunction::builder().opcodes(*body).build());
    }
    builder.build()
}

/// Serialize with the fixture hash, expecting success.
pub fn emit(module: &mut BytecodeModule, options: &SerializeOptions) -> Artifact {
    serialize_artifact(module, &fixture_hash(), options).expect("serialization failed")
}

pub fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
}

pub fn read_i32(bytes: &[u8], at: usize) -> i32 {
    i32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
}

pub fn header(artifact: &Artifact) -> FileHeader {
    FileHeader::from_bytes(&artifact.bytes)
}

/// Decode the function table entry of function `index`.
pub fn small_header(artifact: &Artifact, index: usize) -> SmallFuncHeader {
    let at = artifact.sections.function_table as usize + index * SmallFuncHeader::SIZE;
    SmallFuncHeader::from_bytes(&artifact.bytes[at..])
}
