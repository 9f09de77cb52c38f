//! Debug info section.

use quire_bytecode::{BytecodeModule, DebugInfoHeader, WORD_ALIGNMENT};

use super::error::{EmitError, to_u32};
use super::serializer::BytecodeSerializer;

impl BytecodeSerializer<'_> {
    /// Debug header, filename table and storage, file regions, data stream.
    ///
    /// Stripped artifacts get an all-zero header and nothing else.
    pub(super) fn serialize_debug_info(
        &mut self,
        module: &BytecodeModule,
    ) -> Result<(), EmitError> {
        self.sink.pad(WORD_ALIGNMENT);
        self.debug_info_offset = self.offset()?;
        self.sections.debug_info = self.debug_info_offset;

        if self.options.strip_debug_info_section {
            self.sink.write(&DebugInfoHeader::default());
            return Ok(());
        }

        let info = &module.debug_info;
        let header = DebugInfoHeader {
            filename_count: to_u32("debug filename count", info.filename_table.len())?,
            filename_storage_size: to_u32(
                "debug filename storage size",
                info.filename_storage.len(),
            )?,
            file_region_count: to_u32("debug file region count", info.files.len())?,
            lexical_data_offset: info.lexical_data_offset,
            debug_data_size: to_u32("debug data size", info.data.len())?,
        };

        self.sink.write(&header);
        self.sink.write_array(&info.filename_table);
        self.sink.write_bytes(&info.filename_storage);
        self.sink.write_array(&info.files);
        self.sink.write_bytes(&info.data);
        Ok(())
    }
}
