//! Append-only byte sink.

use quire_bytecode::Record;
use quire_core::padding_for;

/// Append-only buffer with position tracking.
///
/// A measuring sink advances its position without storing anything; the
/// layout pass uses it so both passes share one code path while only the
/// final pass pays for the bytes.
#[derive(Debug)]
pub struct ByteSink {
    bytes: Vec<u8>,
    pos: usize,
    measuring: bool,
}

impl ByteSink {
    /// A sink that only tracks the position.
    pub fn measuring() -> Self {
        Self {
            bytes: Vec::new(),
            pos: 0,
            measuring: true,
        }
    }

    /// A sink that stores bytes, preallocating `capacity`.
    pub fn writing(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            pos: 0,
            measuring: false,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_measuring(&self) -> bool {
        self.measuring
    }

    pub fn write<R: Record>(&mut self, record: &R) {
        self.pos += R::SIZE;
        if !self.measuring {
            record.write_le(&mut self.bytes);
            debug_assert_eq!(self.bytes.len(), self.pos, "record wrote wrong size");
        }
    }

    pub fn write_array<R: Record>(&mut self, records: &[R]) {
        if self.measuring {
            self.pos += records.len() * R::SIZE;
            return;
        }
        for record in records {
            self.write(record);
        }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.pos += bytes.len();
        if !self.measuring {
            self.bytes.extend_from_slice(bytes);
        }
    }

    pub fn write_zeros(&mut self, count: usize) {
        self.pos += count;
        if !self.measuring {
            self.bytes.resize(self.pos, 0);
        }
    }

    /// Zero-pad to the next multiple of `align`. No-op when aligned.
    pub fn pad(&mut self, align: usize) {
        self.write_zeros(padding_for(self.pos, align));
    }

    /// The written bytes. Empty for a measuring sink.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
