//! Fixed-width little-endian records.

/// A structure with a fixed on-disk size.
///
/// The byte sink only needs `SIZE` while laying out and calls `write_le`
/// when producing the real artifact, so both passes agree on sizes by
/// construction.
pub trait Record {
    /// Encoded size in bytes.
    const SIZE: usize;

    /// Append exactly `SIZE` bytes to `out`.
    fn write_le(&self, out: &mut Vec<u8>);
}

impl Record for u32 {
    const SIZE: usize = 4;

    fn write_le(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }
}

/// Read a little-endian u32 at `at`.
///
/// Panics if fewer than four bytes remain.
pub(crate) fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}
