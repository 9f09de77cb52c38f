//! String table section.

use quire_bytecode::{BytecodeModule, OverflowStringTableEntry, SmallStringTableEntry};

use super::error::{EmitError, to_u32};
use super::serializer::BytecodeSerializer;

impl BytecodeSerializer<'_> {
    /// Compact entries, overflow table, identifier hashes, then storage.
    ///
    /// Records the span of compact entries plus overflow table; the header
    /// only learns it from the layout pass.
    pub(super) fn serialize_string_table(
        &mut self,
        module: &BytecodeModule,
    ) -> Result<(), EmitError> {
        let begin = self.sink.position();
        self.sections.string_table = self.offset()?;

        let mut overflow = Vec::new();
        for entry in &module.string_table {
            let overflow_index = overflow.len();
            let small = SmallStringTableEntry::new(entry, overflow_index as u32);
            if small.is_overflowed() {
                if overflow_index > SmallStringTableEntry::max_overflow_index() as usize {
                    return Err(EmitError::FieldOverflow {
                        field: "overflow string index",
                        value: overflow_index,
                    });
                }
                log::trace!(
                    "string at {} (length {}) overflows to index {overflow_index}",
                    entry.offset(),
                    entry.length()
                );
                overflow.push(OverflowStringTableEntry {
                    offset: entry.offset(),
                    length: entry.length(),
                });
            }
            self.sink.write(&small);
        }

        self.sections.string_overflow = self.offset()?;
        self.sink.write_array(&overflow);
        self.string_table_bytes = to_u32("string table bytes", self.sink.position() - begin)?;

        self.sections.identifier_hashes = self.offset()?;
        self.sink.write_array(&module.identifier_hashes);
        self.sections.string_storage = self.offset()?;
        self.sink.write_bytes(&module.string_storage);
        Ok(())
    }
}
