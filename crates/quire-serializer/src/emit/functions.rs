//! Function table, function bytecode and per-function info blocks.

use quire_bytecode::{
    BytecodeFunction, BytecodeModule, ExceptionHandlerTableHeader, INFO_ALIGNMENT,
    SmallFuncHeader, WORD_ALIGNMENT,
};
use quire_core::align_to;

use super::dedup::BytecodeDedupMap;
use super::error::{EmitError, to_u32};
use super::invariants::{ensure_code_offset, ensure_offset_not_ahead};
use super::serializer::{BytecodeSerializer, Pass};

impl BytecodeSerializer<'_> {
    /// One compact header per function.
    ///
    /// During layout the offsets are not known yet; the table has a fixed
    /// size, so provisional headers measure the same as the final ones.
    pub(super) fn serialize_function_table(
        &mut self,
        module: &mut BytecodeModule,
    ) -> Result<(), EmitError> {
        ensure_body_sizes_fit(module.functions.iter().map(|f| f.opcodes().len()))?;
        self.sections.function_table = self.offset()?;
        for function in &mut module.functions {
            if self.options.strip_debug_info_section {
                // Cleared on the function so the info blocks see it too.
                function.clear_debug_info();
            }
            let header = match self.pass {
                Pass::Layout => function.provisional_header(),
                Pass::Final => function.header(),
            };
            self.sink.write(&SmallFuncHeader::from(&header));
        }
        Ok(())
    }

    /// Concatenated function bodies, deduplicated when optimizing.
    pub(super) fn serialize_functions_bytecode(
        &mut self,
        module: &mut BytecodeModule,
    ) -> Result<(), EmitError> {
        self.sections.bytecode = self.offset()?;
        let mut dedup = BytecodeDedupMap::new();

        for (index, function) in module.functions.iter_mut().enumerate() {
            if self.options.optimization_enabled {
                let reuse = match self.pass {
                    Pass::Layout => {
                        let here = self.offset()?;
                        let seen =
                            dedup.insert_or_get(function.opcodes(), function.jump_tables(), here);
                        match seen {
                            Some(original) => {
                                log::trace!("function {index}: reusing bytecode at {original}");
                                function.set_code_offset(original);
                                true
                            }
                            None => false,
                        }
                    }
                    Pass::Final => {
                        // The offset assigned by layout is authoritative: an
                        // offset behind us means an earlier function wrote it.
                        let offset = ensure_code_offset(index, function.code_offset());
                        let position = self.sink.position();
                        ensure_offset_not_ahead(index, offset, position);
                        (offset as usize) < position
                    }
                };
                if reuse {
                    continue;
                }
            }

            if self.pass == Pass::Layout {
                function.set_code_offset(self.offset()?);
            }
            self.write_function_body(function);
        }

        if self.pass == Pass::Layout && self.options.optimization_enabled {
            log::debug!(
                "{} distinct bodies for {} functions",
                dedup.len(),
                module.functions.len()
            );
        }
        Ok(())
    }

    fn write_function_body(&mut self, function: &BytecodeFunction) {
        self.sink.write_bytes(function.opcodes());
        // Jump tables are read as u32 words.
        self.sink.pad(WORD_ALIGNMENT);
        self.sink.write_array(function.jump_tables());

        let percent = self.options.pad_function_bodies_percent as usize;
        if percent != 0 {
            let padding = function.opcodes().len() * percent / 100;
            self.sink.write_zeros(padding);
            self.sink.pad(WORD_ALIGNMENT);
        }
    }

    /// Large header (if overflowed), exception table and debug offsets.
    ///
    /// Every present sub-block starts on `INFO_ALIGNMENT`; absent ones take
    /// no space at all.
    pub(super) fn serialize_function_info(
        &mut self,
        function: &mut BytecodeFunction,
    ) -> Result<(), EmitError> {
        if self.pass == Pass::Layout {
            let info_offset = align_to(self.sink.position(), INFO_ALIGNMENT);
            let info_offset = u32::try_from(info_offset)
                .map_err(|_| EmitError::ArtifactTooLarge(info_offset))?;
            function.set_info_offset(info_offset);
        }

        let header = function.header();
        if SmallFuncHeader::from(&header).is_overflowed() {
            log::trace!("large header at {}", header.info_offset);
            self.sink.pad(INFO_ALIGNMENT);
            self.sink.write(&header);
        }

        self.serialize_exception_handler_table(function)?;
        self.serialize_debug_offsets(function);
        Ok(())
    }

    fn serialize_exception_handler_table(
        &mut self,
        function: &BytecodeFunction,
    ) -> Result<(), EmitError> {
        if !function.has_exception_handlers() {
            return Ok(());
        }

        let handlers = function.exception_handlers();
        self.sink.pad(INFO_ALIGNMENT);
        self.sink.write(&ExceptionHandlerTableHeader {
            count: to_u32("exception handler count", handlers.len())?,
        });
        self.sink.write_array(handlers);
        Ok(())
    }

    fn serialize_debug_offsets(&mut self, function: &BytecodeFunction) {
        if self.options.strip_debug_info_section {
            return;
        }
        let Some(offsets) = function.debug_offsets() else {
            return;
        };

        self.sink.pad(INFO_ALIGNMENT);
        self.sink.write(offsets);
    }
}

/// Every header stores its body size as u32; reject larger bodies before
/// any header is built.
pub(super) fn ensure_body_sizes_fit(
    sizes: impl IntoIterator<Item = usize>,
) -> Result<(), EmitError> {
    for size in sizes {
        to_u32("function bytecode size", size)?;
    }
    Ok(())
}
