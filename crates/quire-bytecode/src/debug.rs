//! Debug tables.
//!
//! The module-level debug info block is self-describing through its header;
//! functions point into its data stream with `DebugOffsets`.

use super::module::checked_u32;
use super::record::Record;
use super::string_table::StringTableEntry;

/// Per-function offsets into the debug data stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DebugOffsets {
    pub source_locations: u32,
    pub lexical_data: u32,
}

impl Record for DebugOffsets {
    const SIZE: usize = 8;

    fn write_le(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.source_locations.to_le_bytes());
        out.extend_from_slice(&self.lexical_data.to_le_bytes());
    }
}

/// Header of the debug info block (20 bytes).
///
/// Stripped artifacts carry an all-zero header and nothing after it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DebugInfoHeader {
    pub filename_count: u32,
    pub filename_storage_size: u32,
    pub file_region_count: u32,
    /// Start of lexical data within the debug data stream.
    pub lexical_data_offset: u32,
    pub debug_data_size: u32,
}

impl Record for DebugInfoHeader {
    const SIZE: usize = 20;

    fn write_le(&self, out: &mut Vec<u8>) {
        for word in [
            self.filename_count,
            self.filename_storage_size,
            self.file_region_count,
            self.lexical_data_offset,
            self.debug_data_size,
        ] {
            out.extend_from_slice(&word.to_le_bytes());
        }
    }
}

/// Maps a range of the debug data stream to a source file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DebugFileRegion {
    pub from_address: u32,
    pub filename_id: u32,
    pub source_mapping_url_id: u32,
}

impl Record for DebugFileRegion {
    const SIZE: usize = 12;

    fn write_le(&self, out: &mut Vec<u8>) {
        for word in [self.from_address, self.filename_id, self.source_mapping_url_id] {
            out.extend_from_slice(&word.to_le_bytes());
        }
    }
}

/// Module-wide debug information, produced by the front end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DebugInfo {
    pub filename_table: Vec<StringTableEntry>,
    pub filename_storage: Vec<u8>,
    pub files: Vec<DebugFileRegion>,
    pub lexical_data_offset: u32,
    /// Opaque source-location and lexical data stream.
    pub data: Vec<u8>,
}

impl DebugInfo {
    /// Append a filename to the filename storage, returning its id.
    ///
    /// Panics if an id, offset or length would not fit in `u32`.
    pub fn add_filename(&mut self, name: &str) -> u32 {
        let id = checked_u32("filename id", self.filename_table.len());
        let offset = checked_u32("filename offset", self.filename_storage.len());
        let length = checked_u32("filename length", name.len());
        self.filename_storage.extend_from_slice(name.as_bytes());
        self.filename_table.push(StringTableEntry::new(offset, length, false));
        id
    }

    pub fn is_empty(&self) -> bool {
        self.filename_table.is_empty() && self.files.is_empty() && self.data.is_empty()
    }
}
