//! Section positions recorded while writing.

/// Start position of every section of an artifact.
///
/// Aligned sections record their position after padding, so every value
/// here satisfies that section's alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionOffsets {
    pub header: u32,
    pub function_table: u32,
    pub string_table: u32,
    pub string_overflow: u32,
    pub identifier_hashes: u32,
    pub string_storage: u32,
    pub array_buffer: u32,
    pub object_keys: u32,
    pub object_values: u32,
    pub regexp_table: u32,
    pub regexp_storage: u32,
    pub cjs_modules: u32,
    pub bytecode: u32,
    pub function_info: u32,
    pub debug_info: u32,
    /// Total artifact length.
    pub end: u32,
}

impl SectionOffsets {
    /// Sections in file order, with their names.
    pub fn entries(&self) -> [(&'static str, u32); 15] {
        [
            ("header", self.header),
            ("function_table", self.function_table),
            ("string_table", self.string_table),
            ("string_overflow", self.string_overflow),
            ("identifier_hashes", self.identifier_hashes),
            ("string_storage", self.string_storage),
            ("array_buffer", self.array_buffer),
            ("object_keys", self.object_keys),
            ("object_values", self.object_values),
            ("regexp_table", self.regexp_table),
            ("regexp_storage", self.regexp_storage),
            ("cjs_modules", self.cjs_modules),
            ("bytecode", self.bytecode),
            ("function_info", self.function_info),
            ("debug_info", self.debug_info),
        ]
    }
}

/// A serialized module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub bytes: Vec<u8>,
    pub sections: SectionOffsets,
}

impl Artifact {
    /// Bytes of the function bytecode section, including padding.
    pub fn bytecode(&self) -> &[u8] {
        &self.bytes[self.sections.bytecode as usize..self.sections.function_info as usize]
    }
}
