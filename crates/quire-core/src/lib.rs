//! Shared primitives for the quire bytecode crates.
//!
//! - `align`: the padding policy every section boundary goes through
//! - `SourceHash`: opaque fingerprint of the compiled source

pub mod align;
mod hash;

#[cfg(test)]
mod align_tests;
#[cfg(test)]
mod hash_tests;

pub use align::{align_to, is_aligned, padding_for};
pub use hash::{SOURCE_HASH_SIZE, SourceHash};
