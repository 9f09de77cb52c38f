//! Layout pass controller.

use quire_bytecode::{BytecodeModule, BytecodeOptions, CjsModuleTable, FileHeader};
use quire_core::SourceHash;

use crate::SerializeOptions;

use super::error::{EmitError, to_i32, to_u32};
use super::invariants::{ensure_no_layout_drift, ensure_nonempty_layout};
use super::layout::{Artifact, SectionOffsets};
use super::sink::ByteSink;

/// Which of the two passes is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Pass {
    /// Measure only; assign offsets.
    Layout,
    /// Write bytes using the offsets assigned by layout.
    Final,
}

/// Serializes one module.
///
/// Both passes run `write_module`, so they visit sections and functions in
/// the same order by construction. Values the header needs before they can
/// be computed (file length, string table span, debug info offset) are
/// carried from the layout pass into the final one.
#[derive(Debug)]
pub struct BytecodeSerializer<'o> {
    pub(super) options: &'o SerializeOptions,
    pub(super) sink: ByteSink,
    pub(super) pass: Pass,
    pub(super) sections: SectionOffsets,
    file_length: u32,
    pub(super) string_table_bytes: u32,
    pub(super) debug_info_offset: u32,
}

impl<'o> BytecodeSerializer<'o> {
    pub fn new(options: &'o SerializeOptions) -> Self {
        Self {
            options,
            sink: ByteSink::measuring(),
            pass: Pass::Layout,
            sections: SectionOffsets::default(),
            file_length: 0,
            string_table_bytes: 0,
            debug_info_offset: 0,
        }
    }

    /// Lay out and write `module`.
    pub fn serialize(
        mut self,
        module: &mut BytecodeModule,
        source_hash: &SourceHash,
    ) -> Result<Artifact, EmitError> {
        self.write_module(module, source_hash)?;
        self.finish_layout()?;
        self.write_module(module, source_hash)?;

        ensure_no_layout_drift(self.file_length, self.sink.position());
        self.sections.end = self.file_length;
        log::debug!("serialized {} bytes", self.file_length);

        Ok(Artifact {
            bytes: self.sink.into_bytes(),
            sections: self.sections,
        })
    }

    fn write_module(
        &mut self,
        module: &mut BytecodeModule,
        source_hash: &SourceHash,
    ) -> Result<(), EmitError> {
        self.write_file_header(module, source_hash)?;
        // Header and function table sizes are tuned for cache line packing;
        // keep them whole multiples of 16 bytes.
        self.serialize_function_table(module)?;
        self.serialize_string_table(module)?;
        self.serialize_array_buffer(module)?;
        self.serialize_object_buffer(module)?;
        self.serialize_regexps(module)?;
        self.serialize_cjs_module_table(module)?;
        self.serialize_functions_bytecode(module)?;

        self.sections.function_info = self.offset()?;
        for function in &mut module.functions {
            self.serialize_function_info(function)?;
        }

        self.serialize_debug_info(module)
    }

    fn finish_layout(&mut self) -> Result<(), EmitError> {
        let length = self.sink.position();
        ensure_nonempty_layout(length);
        self.file_length = self.offset()?;
        log::debug!(
            "layout pass: {length} bytes, string table {} bytes, debug info at {}",
            self.string_table_bytes,
            self.debug_info_offset
        );

        self.pass = Pass::Final;
        self.sink = ByteSink::writing(length);
        Ok(())
    }

    fn write_file_header(
        &mut self,
        module: &BytecodeModule,
        source_hash: &SourceHash,
    ) -> Result<(), EmitError> {
        let cjs_module_count = match &module.cjs_modules {
            CjsModuleTable::Static(entries) if !entries.is_empty() => {
                -to_i32("static module count", entries.len())?
            }
            table => to_i32("module count", table.len())?,
        };
        let mut options = module.options;
        options.set(
            BytecodeOptions::CJS_MODULES_STATICALLY_RESOLVED,
            module.cjs_modules.is_static(),
        );

        let header = FileHeader {
            source_hash: *source_hash,
            file_length: self.file_length,
            global_code_index: module.global_function_index,
            function_count: to_u32("function count", module.functions.len())?,
            string_count: to_u32("string count", module.string_table.len())?,
            identifier_count: to_u32("identifier count", module.identifier_hashes.len())?,
            string_table_bytes: self.string_table_bytes,
            string_storage_size: to_u32("string storage size", module.string_storage.len())?,
            regexp_count: to_u32("regexp count", module.regexp_table.len())?,
            regexp_storage_size: to_u32("regexp storage size", module.regexp_storage.len())?,
            array_buffer_size: to_u32("array buffer size", module.array_buffer.len())?,
            obj_key_buffer_size: to_u32("object key buffer size", module.object_key_buffer.len())?,
            obj_value_buffer_size: to_u32(
                "object value buffer size",
                module.object_value_buffer.len(),
            )?,
            cjs_module_offset: module.cjs_module_offset,
            cjs_module_count,
            debug_info_offset: self.debug_info_offset,
            options,
            ..FileHeader::default()
        };

        self.sections.header = self.offset()?;
        self.sink.write(&header);
        Ok(())
    }

    /// Current write position as an artifact offset.
    pub(super) fn offset(&self) -> Result<u32, EmitError> {
        let position = self.sink.position();
        u32::try_from(position).map_err(|_| EmitError::ArtifactTooLarge(position))
    }
}
