/// Magic number at offset 0 of every artifact.
pub const MAGIC: u64 = 0x1F19_03C1_03BC_1FC6;

/// Format version written after the magic.
pub const VERSION: u32 = 1;

/// Size of the file header: two cache lines.
pub const FILE_HEADER_SIZE: usize = 128;

/// Boundary before the regexp table, module table, debug info and jump tables.
pub const WORD_ALIGNMENT: usize = 4;

/// Boundary before every per-function metadata record.
///
/// Per-function records are 8, 16 or 32 bytes, so starting them on a 16-byte
/// boundary keeps each one inside a single 64-byte cache line.
pub const INFO_ALIGNMENT: usize = 16;
