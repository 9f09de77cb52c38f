//! Bytecode file format and the in-memory program it is written from.
//!
//! This crate contains:
//! - Format constants and fixed-width records (file header, function
//!   headers, string table entries, debug and exception records)
//! - The `Record` trait every on-disk structure implements
//! - The program representation handed to the serializer
//!   (`BytecodeModule`, `BytecodeFunction`, `DebugInfo`)

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod constants;
pub mod debug;
pub mod function;
pub mod function_header;
pub mod header;
mod invariants;
pub mod module;
pub mod options;
pub mod record;
pub mod records;
pub mod string_table;

#[cfg(test)]
mod function_header_tests;
#[cfg(test)]
mod records_tests;

pub use constants::{FILE_HEADER_SIZE, INFO_ALIGNMENT, MAGIC, VERSION, WORD_ALIGNMENT};
pub use debug::{DebugFileRegion, DebugInfo, DebugInfoHeader, DebugOffsets};
pub use function::{BytecodeFunction, FunctionBuilder};
pub use function_header::{FunctionFlags, FunctionHeader, ProhibitInvoke, SmallFuncHeader};
pub use header::FileHeader;
pub use module::{BytecodeModule, CjsModuleTable, ModuleBuilder};
pub use options::BytecodeOptions;
pub use record::Record;
pub use records::{ExceptionHandlerTableHeader, HandlerInfo, RegExpTableEntry};
pub use string_table::{OverflowStringTableEntry, SmallStringTableEntry, StringTableEntry};
