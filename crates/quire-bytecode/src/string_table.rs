//! String table records.
//!
//! Each string gets one compact 4-byte entry. Strings whose offset or length
//! do not fit are written as a compact entry pointing into a side table of
//! full-width overflow entries.

use super::record::{Record, read_u32};

const OFFSET_BITS: u32 = 23;

/// Length value reserved to mark an overflowed compact entry.
pub const INVALID_LENGTH: u32 = 0xFF;

/// A string in the module: a range of the shared string storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StringTableEntry {
    offset: u32,
    length: u32,
    is_utf16: bool,
}

impl StringTableEntry {
    pub const fn new(offset: u32, length: u32, is_utf16: bool) -> Self {
        Self {
            offset,
            length,
            is_utf16,
        }
    }

    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Length in characters (UTF-16 code units when `is_utf16`).
    pub const fn length(&self) -> u32 {
        self.length
    }

    pub const fn is_utf16(&self) -> bool {
        self.is_utf16
    }
}

/// Full-width form, used by the debug filename table.
///
/// The top bit of the length word marks UTF-16 storage.
impl Record for StringTableEntry {
    const SIZE: usize = 8;

    fn write_le(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.offset.to_le_bytes());
        let length = self.length | (self.is_utf16 as u32) << 31;
        out.extend_from_slice(&length.to_le_bytes());
    }
}

/// Compact string entry: `is_utf16 (1) | offset (23) | length (8)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SmallStringTableEntry {
    is_utf16: bool,
    offset: u32,
    length: u32,
}

impl SmallStringTableEntry {
    /// Build the compact entry for `entry`.
    ///
    /// If the entry does not fit, the result is overflowed and refers to
    /// `overflow_index` in the overflow table.
    pub fn new(entry: &StringTableEntry, overflow_index: u32) -> Self {
        if entry.offset >> OFFSET_BITS == 0 && entry.length < INVALID_LENGTH {
            return Self {
                is_utf16: entry.is_utf16,
                offset: entry.offset,
                length: entry.length,
            };
        }
        Self {
            is_utf16: entry.is_utf16,
            offset: overflow_index,
            length: INVALID_LENGTH,
        }
    }

    pub fn is_overflowed(&self) -> bool {
        self.length == INVALID_LENGTH
    }

    pub fn is_utf16(&self) -> bool {
        self.is_utf16
    }

    /// Offset into string storage, or the overflow index when overflowed.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    /// Largest overflow index the offset field can carry.
    pub const fn max_overflow_index() -> u32 {
        (1 << OFFSET_BITS) - 1
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let word = read_u32(bytes, 0);
        Self {
            is_utf16: word & 1 != 0,
            offset: (word >> 1) & ((1 << OFFSET_BITS) - 1),
            length: word >> 24,
        }
    }
}

impl Record for SmallStringTableEntry {
    const SIZE: usize = 4;

    fn write_le(&self, out: &mut Vec<u8>) {
        let word = self.is_utf16 as u32 | self.offset << 1 | self.length << 24;
        out.extend_from_slice(&word.to_le_bytes());
    }
}

/// Full-width string entry referenced by an overflowed compact entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverflowStringTableEntry {
    pub offset: u32,
    pub length: u32,
}

impl OverflowStringTableEntry {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            offset: read_u32(bytes, 0),
            length: read_u32(bytes, 4),
        }
    }
}

impl Record for OverflowStringTableEntry {
    const SIZE: usize = 8;

    fn write_le(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.offset.to_le_bytes());
        out.extend_from_slice(&self.length.to_le_bytes());
    }
}
