//! Content-addressed bytecode deduplication.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Structural identity of a function body.
#[derive(Debug, PartialEq, Eq, Hash)]
struct DedupKey {
    opcodes: Box<[u8]>,
    jump_tables: Box<[u32]>,
}

/// Maps function bodies to the offset where they were first written.
///
/// Built fresh for every serialization call and only consulted during the
/// layout pass.
#[derive(Debug, Default)]
pub struct BytecodeDedupMap {
    offsets: HashMap<DedupKey, u32>,
}

impl BytecodeDedupMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an identical body, or record `offset` as this body's home.
    ///
    /// Returns the earlier offset when the body was already seen.
    pub fn insert_or_get(
        &mut self,
        opcodes: &[u8],
        jump_tables: &[u32],
        offset: u32,
    ) -> Option<u32> {
        let key = DedupKey {
            opcodes: opcodes.into(),
            jump_tables: jump_tables.into(),
        };
        match self.offsets.entry(key) {
            Entry::Occupied(seen) => Some(*seen.get()),
            Entry::Vacant(slot) => {
                slot.insert(offset);
                None
            }
        }
    }

    /// Number of distinct bodies recorded.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
