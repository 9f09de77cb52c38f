//! The compiled module: every table the serializer writes.

use indexmap::IndexMap;

use super::debug::DebugInfo;
use super::function::BytecodeFunction;
use super::options::BytecodeOptions;
use super::records::RegExpTableEntry;
use super::string_table::StringTableEntry;

/// CommonJS module table.
///
/// The two encodings are mutually exclusive, so only one can exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CjsModuleTable {
    /// Filename string id → function index, in registration order.
    Dynamic(IndexMap<u32, u32>),
    /// Function indices; the module id is the position.
    Static(Vec<u32>),
}

impl Default for CjsModuleTable {
    fn default() -> Self {
        Self::Dynamic(IndexMap::new())
    }
}

impl CjsModuleTable {
    /// Whether a reader will see the static encoding.
    ///
    /// An empty static table is indistinguishable from an empty dynamic one.
    pub fn is_static(&self) -> bool {
        matches!(self, Self::Static(entries) if !entries.is_empty())
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Dynamic(entries) => entries.len(),
            Self::Static(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A compiled program, ready to be serialized.
///
/// Built once by the front end; the serializer only mutates per-function
/// offsets and debug flags.
#[derive(Clone, Debug, Default)]
pub struct BytecodeModule {
    pub functions: Vec<BytecodeFunction>,
    /// Function run when the module is loaded.
    pub global_function_index: u32,
    pub string_table: Vec<StringTableEntry>,
    pub string_storage: Vec<u8>,
    pub identifier_hashes: Vec<u32>,
    pub regexp_table: Vec<RegExpTableEntry>,
    pub regexp_storage: Vec<u8>,
    pub array_buffer: Vec<u8>,
    pub object_key_buffer: Vec<u8>,
    pub object_value_buffer: Vec<u8>,
    /// First module id of this segment.
    pub cjs_module_offset: u32,
    pub cjs_modules: CjsModuleTable,
    pub options: BytecodeOptions,
    pub debug_info: DebugInfo,
}

impl BytecodeModule {
    pub fn builder() -> ModuleBuilder {
        ModuleBuilder::default()
    }

    pub fn function(&self, index: u32) -> Option<&BytecodeFunction> {
        self.functions.get(index as usize)
    }
}

/// Builder for `BytecodeModule`.
///
/// Every method takes `&mut self`, so ids returned by the `add_*` methods
/// and setters can be mixed freely on one builder.
///
/// # Panics
///
/// The `add_*` methods panic if an id, offset or length would not fit in
/// `u32`; the format cannot address such a module.
#[derive(Debug, Default)]
pub struct ModuleBuilder {
    module: BytecodeModule,
}

impl ModuleBuilder {
    /// Add a function, returns its index.
    pub fn add_function(&mut self, function: BytecodeFunction) -> u32 {
        let index = checked_u32("function index", self.module.functions.len());
        self.module.functions.push(function);
        index
    }

    /// Append a one-byte-per-character string, returns its string id.
    pub fn add_string(&mut self, text: &str) -> u32 {
        let offset = checked_u32("string offset", self.module.string_storage.len());
        let length = checked_u32("string length", text.len());
        self.module.string_storage.extend_from_slice(text.as_bytes());
        self.push_string(StringTableEntry::new(offset, length, false))
    }

    /// Append a UTF-16 string, returns its string id.
    pub fn add_utf16_string(&mut self, units: &[u16]) -> u32 {
        let offset = checked_u32("string offset", self.module.string_storage.len());
        let length = checked_u32("string length", units.len());
        for unit in units {
            self.module.string_storage.extend_from_slice(&unit.to_le_bytes());
        }
        self.push_string(StringTableEntry::new(offset, length, true))
    }

    /// Append an identifier and its precomputed hash, returns its string id.
    pub fn add_identifier(&mut self, text: &str, hash: u32) -> u32 {
        self.module.identifier_hashes.push(hash);
        self.add_string(text)
    }

    /// Add an entry without touching storage. The caller owns consistency.
    pub fn push_string(&mut self, entry: StringTableEntry) -> u32 {
        let id = checked_u32("string id", self.module.string_table.len());
        self.module.string_table.push(entry);
        id
    }

    /// Append compiled regexp bytecode, returns its regexp id.
    pub fn add_regexp(&mut self, compiled: &[u8]) -> u32 {
        let id = checked_u32("regexp id", self.module.regexp_table.len());
        self.module.regexp_table.push(RegExpTableEntry {
            offset: checked_u32("regexp offset", self.module.regexp_storage.len()),
            length: checked_u32("regexp length", compiled.len()),
        });
        self.module.regexp_storage.extend_from_slice(compiled);
        id
    }

    pub fn string_storage(&mut self, storage: impl Into<Vec<u8>>) -> &mut Self {
        self.module.string_storage = storage.into();
        self
    }

    pub fn global_function_index(&mut self, index: u32) -> &mut Self {
        self.module.global_function_index = index;
        self
    }

    pub fn array_buffer(&mut self, bytes: impl Into<Vec<u8>>) -> &mut Self {
        self.module.array_buffer = bytes.into();
        self
    }

    pub fn object_buffers(
        &mut self,
        keys: impl Into<Vec<u8>>,
        values: impl Into<Vec<u8>>,
    ) -> &mut Self {
        self.module.object_key_buffer = keys.into();
        self.module.object_value_buffer = values.into();
        self
    }

    pub fn cjs_modules(&mut self, table: CjsModuleTable) -> &mut Self {
        self.module.cjs_modules = table;
        self
    }

    pub fn cjs_module_offset(&mut self, offset: u32) -> &mut Self {
        self.module.cjs_module_offset = offset;
        self
    }

    pub fn options(&mut self, options: BytecodeOptions) -> &mut Self {
        self.module.options = options;
        self
    }

    pub fn debug_info(&mut self, info: DebugInfo) -> &mut Self {
        self.module.debug_info = info;
        self
    }

    /// Take the module, leaving the builder empty.
    pub fn build(&mut self) -> BytecodeModule {
        std::mem::take(&mut self.module)
    }
}

pub(crate) fn checked_u32(what: &str, value: usize) -> u32 {
    u32::try_from(value).unwrap_or_else(|_| panic!("{what} {value} does not fit in u32"))
}
