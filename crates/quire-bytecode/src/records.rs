//! RegExp and exception-handler records.

use super::record::Record;

/// A compiled regular expression: a range of the regexp storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegExpTableEntry {
    pub offset: u32,
    pub length: u32,
}

impl Record for RegExpTableEntry {
    const SIZE: usize = 8;

    fn write_le(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.offset.to_le_bytes());
        out.extend_from_slice(&self.length.to_le_bytes());
    }
}

/// Precedes a function's handler records in its info block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExceptionHandlerTableHeader {
    pub count: u32,
}

impl Record for ExceptionHandlerTableHeader {
    const SIZE: usize = 4;

    fn write_le(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.count.to_le_bytes());
    }
}

/// One try-range of a function, in bytecode offsets relative to its body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HandlerInfo {
    pub start: u32,
    pub end: u32,
    pub target: u32,
    /// Nesting depth of the try block.
    pub depth: u32,
}

impl Record for HandlerInfo {
    const SIZE: usize = 16;

    fn write_le(&self, out: &mut Vec<u8>) {
        for word in [self.start, self.end, self.target, self.depth] {
            out.extend_from_slice(&word.to_le_bytes());
        }
    }
}
