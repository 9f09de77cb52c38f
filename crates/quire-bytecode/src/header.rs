//! Bytecode file header (128 bytes).
//!
//! Section order: Header → FunctionTable → StringTable (entries, overflow,
//! identifier hashes, storage) → ArrayBuffer → ObjectKeyBuffer →
//! ObjectValueBuffer → RegExpTable → RegExpStorage → CjsModuleTable →
//! FunctionBytecode → FunctionInfo → DebugInfo

use quire_core::{SOURCE_HASH_SIZE, SourceHash};

use super::constants::{FILE_HEADER_SIZE, MAGIC, VERSION};
use super::options::BytecodeOptions;
use super::record::{Record, read_u32};

/// File header - first 128 bytes of the artifact.
///
/// Layout:
/// - 0-31: identity (magic, version, source hash)
/// - 32-92: sizes, counts and offsets (u32 each, module count is i32)
/// - 92: options byte
/// - 93-127: reserved, always zero
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    /// Magic number: `MAGIC`.
    pub magic: u64,
    /// Format version (currently 1).
    pub version: u32,
    /// Fingerprint of the compiled source.
    pub source_hash: SourceHash,
    /// Total artifact size in bytes.
    pub file_length: u32,
    /// Index of the function run at module load.
    pub global_code_index: u32,
    pub function_count: u32,
    pub string_count: u32,
    pub identifier_count: u32,
    /// Bytes taken by compact string entries plus the overflow table.
    pub string_table_bytes: u32,
    pub string_storage_size: u32,
    pub regexp_count: u32,
    pub regexp_storage_size: u32,
    pub array_buffer_size: u32,
    pub obj_key_buffer_size: u32,
    pub obj_value_buffer_size: u32,
    pub cjs_module_offset: u32,
    /// Negative when the static module table is in use.
    pub cjs_module_count: i32,
    pub debug_info_offset: u32,
    pub options: BytecodeOptions,
}

impl Default for FileHeader {
    fn default() -> Self {
        Self {
            magic: MAGIC,
            version: VERSION,
            source_hash: SourceHash::default(),
            file_length: 0,
            global_code_index: 0,
            function_count: 0,
            string_count: 0,
            identifier_count: 0,
            string_table_bytes: 0,
            string_storage_size: 0,
            regexp_count: 0,
            regexp_storage_size: 0,
            array_buffer_size: 0,
            obj_key_buffer_size: 0,
            obj_value_buffer_size: 0,
            cjs_module_offset: 0,
            cjs_module_count: 0,
            debug_info_offset: 0,
            options: BytecodeOptions::empty(),
        }
    }
}

impl FileHeader {
    /// Decode header from the first 128 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        assert!(bytes.len() >= FILE_HEADER_SIZE, "header too short");

        let mut magic = [0u8; 8];
        magic.copy_from_slice(&bytes[0..8]);
        let mut hash = [0u8; SOURCE_HASH_SIZE];
        hash.copy_from_slice(&bytes[12..32]);

        Self {
            magic: u64::from_le_bytes(magic),
            version: read_u32(bytes, 8),
            source_hash: SourceHash::new(hash),
            file_length: read_u32(bytes, 32),
            global_code_index: read_u32(bytes, 36),
            function_count: read_u32(bytes, 40),
            string_count: read_u32(bytes, 44),
            identifier_count: read_u32(bytes, 48),
            string_table_bytes: read_u32(bytes, 52),
            string_storage_size: read_u32(bytes, 56),
            regexp_count: read_u32(bytes, 60),
            regexp_storage_size: read_u32(bytes, 64),
            array_buffer_size: read_u32(bytes, 68),
            obj_key_buffer_size: read_u32(bytes, 72),
            obj_value_buffer_size: read_u32(bytes, 76),
            cjs_module_offset: read_u32(bytes, 80),
            cjs_module_count: read_u32(bytes, 84) as i32,
            debug_info_offset: read_u32(bytes, 88),
            options: BytecodeOptions::from_bits_retain(bytes[92]),
        }
    }

    /// Encode header to 128 bytes.
    pub fn to_bytes(&self) -> [u8; FILE_HEADER_SIZE] {
        let mut bytes = [0u8; FILE_HEADER_SIZE];
        bytes[0..8].copy_from_slice(&self.magic.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.version.to_le_bytes());
        bytes[12..32].copy_from_slice(self.source_hash.as_bytes());
        bytes[32..36].copy_from_slice(&self.file_length.to_le_bytes());
        bytes[36..40].copy_from_slice(&self.global_code_index.to_le_bytes());
        bytes[40..44].copy_from_slice(&self.function_count.to_le_bytes());
        bytes[44..48].copy_from_slice(&self.string_count.to_le_bytes());
        bytes[48..52].copy_from_slice(&self.identifier_count.to_le_bytes());
        bytes[52..56].copy_from_slice(&self.string_table_bytes.to_le_bytes());
        bytes[56..60].copy_from_slice(&self.string_storage_size.to_le_bytes());
        bytes[60..64].copy_from_slice(&self.regexp_count.to_le_bytes());
        bytes[64..68].copy_from_slice(&self.regexp_storage_size.to_le_bytes());
        bytes[68..72].copy_from_slice(&self.array_buffer_size.to_le_bytes());
        bytes[72..76].copy_from_slice(&self.obj_key_buffer_size.to_le_bytes());
        bytes[76..80].copy_from_slice(&self.obj_value_buffer_size.to_le_bytes());
        bytes[80..84].copy_from_slice(&self.cjs_module_offset.to_le_bytes());
        bytes[84..88].copy_from_slice(&self.cjs_module_count.to_le_bytes());
        bytes[88..92].copy_from_slice(&self.debug_info_offset.to_le_bytes());
        bytes[92] = self.options.bits();
        bytes
    }

    pub fn validate_magic(&self) -> bool {
        self.magic == MAGIC
    }

    pub fn validate_version(&self) -> bool {
        self.version == VERSION
    }

    /// Whether the module table uses the static encoding.
    pub fn has_static_cjs_modules(&self) -> bool {
        self.cjs_module_count < 0
    }

    /// Number of module table entries, regardless of encoding.
    pub fn cjs_module_entries(&self) -> u32 {
        self.cjs_module_count.unsigned_abs()
    }
}

impl Record for FileHeader {
    const SIZE: usize = FILE_HEADER_SIZE;

    fn write_le(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_bytes());
    }
}
