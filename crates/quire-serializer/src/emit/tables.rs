//! Literal buffers, regexp table and module table.

use quire_bytecode::{BytecodeModule, CjsModuleTable, WORD_ALIGNMENT};

use super::error::EmitError;
use super::serializer::BytecodeSerializer;

impl BytecodeSerializer<'_> {
    pub(super) fn serialize_array_buffer(
        &mut self,
        module: &BytecodeModule,
    ) -> Result<(), EmitError> {
        self.sections.array_buffer = self.offset()?;
        self.sink.write_bytes(&module.array_buffer);
        Ok(())
    }

    pub(super) fn serialize_object_buffer(
        &mut self,
        module: &BytecodeModule,
    ) -> Result<(), EmitError> {
        self.sections.object_keys = self.offset()?;
        self.sink.write_bytes(&module.object_key_buffer);
        self.sections.object_values = self.offset()?;
        self.sink.write_bytes(&module.object_value_buffer);
        Ok(())
    }

    pub(super) fn serialize_regexps(
        &mut self,
        module: &BytecodeModule,
    ) -> Result<(), EmitError> {
        self.sink.pad(WORD_ALIGNMENT);
        self.sections.regexp_table = self.offset()?;
        self.sink.write_array(&module.regexp_table);
        self.sections.regexp_storage = self.offset()?;
        self.sink.write_bytes(&module.regexp_storage);
        Ok(())
    }

    /// Exactly one encoding is written, per the module table's variant.
    pub(super) fn serialize_cjs_module_table(
        &mut self,
        module: &BytecodeModule,
    ) -> Result<(), EmitError> {
        self.sink.pad(WORD_ALIGNMENT);
        self.sections.cjs_modules = self.offset()?;

        match &module.cjs_modules {
            CjsModuleTable::Dynamic(entries) => {
                for (&filename, &function) in entries {
                    self.sink.write(&filename);
                    self.sink.write(&function);
                }
            }
            CjsModuleTable::Static(functions) => self.sink.write_array(functions),
        }
        Ok(())
    }
}
