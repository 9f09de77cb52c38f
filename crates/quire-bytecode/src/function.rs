//! Compiled function as handed to the serializer.

use super::debug::DebugOffsets;
use super::function_header::{FunctionFlags, FunctionHeader, ProhibitInvoke};
use super::records::HandlerInfo;

/// A compiled function.
///
/// Everything except the layout-assigned offsets and the debug flag is
/// fixed by the front end. The serializer assigns `code_offset` and
/// `info_offset` during its layout pass; reading the full header before
/// that is an invariant violation.
#[derive(Clone, Debug, Default)]
pub struct BytecodeFunction {
    param_count: u32,
    frame_size: u32,
    environment_size: u32,
    function_name: u32,
    highest_read_cache_index: u8,
    highest_write_cache_index: u8,
    prohibit_invoke: ProhibitInvoke,
    strict_mode: bool,
    opcodes: Vec<u8>,
    jump_tables: Vec<u32>,
    exception_handlers: Vec<HandlerInfo>,
    debug_offsets: Option<DebugOffsets>,
    has_debug_info: bool,
    pub(crate) code_offset: Option<u32>,
    pub(crate) info_offset: Option<u32>,
}

impl BytecodeFunction {
    pub fn builder() -> FunctionBuilder {
        FunctionBuilder::default()
    }

    pub fn opcodes(&self) -> &[u8] {
        &self.opcodes
    }

    pub fn jump_tables(&self) -> &[u32] {
        &self.jump_tables
    }

    pub fn exception_handlers(&self) -> &[HandlerInfo] {
        &self.exception_handlers
    }

    pub fn has_exception_handlers(&self) -> bool {
        !self.exception_handlers.is_empty()
    }

    pub fn has_debug_info(&self) -> bool {
        self.has_debug_info
    }

    /// Debug offsets, present only while the debug flag is set.
    pub fn debug_offsets(&self) -> Option<&DebugOffsets> {
        if self.has_debug_info {
            self.debug_offsets.as_ref()
        } else {
            None
        }
    }

    /// Drop the debug flag so no debug-offset record is emitted.
    pub fn clear_debug_info(&mut self) {
        self.has_debug_info = false;
    }

    pub fn code_offset(&self) -> Option<u32> {
        self.code_offset
    }

    pub fn set_code_offset(&mut self, offset: u32) {
        self.code_offset = Some(offset);
    }

    pub fn info_offset(&self) -> Option<u32> {
        self.info_offset
    }

    pub fn set_info_offset(&mut self, offset: u32) {
        self.info_offset = Some(offset);
    }

    /// Header with layout-assigned offsets. Both offsets must be assigned.
    pub fn header(&self) -> FunctionHeader {
        FunctionHeader {
            offset: self.ensure_code_offset(),
            info_offset: self.ensure_info_offset(),
            ..self.provisional_header()
        }
    }

    /// Header with unassigned offsets written as zero.
    ///
    /// Only for the layout pass, where the function table is sized but its
    /// contents are discarded.
    pub fn provisional_header(&self) -> FunctionHeader {
        FunctionHeader {
            offset: self.code_offset.unwrap_or(0),
            param_count: self.param_count,
            // The serializer rejects bodies larger than u32 before it builds
            // the function table.
            bytecode_size: self.opcodes.len() as u32,
            function_name: self.function_name,
            info_offset: self.info_offset.unwrap_or(0),
            frame_size: self.frame_size,
            environment_size: self.environment_size,
            highest_read_cache_index: self.highest_read_cache_index,
            highest_write_cache_index: self.highest_write_cache_index,
            flags: FunctionFlags {
                prohibit_invoke: self.prohibit_invoke,
                strict_mode: self.strict_mode,
                has_exception_handler: self.has_exception_handlers(),
                has_debug_info: self.has_debug_info,
                overflowed: false,
            },
        }
    }
}

/// Builder for `BytecodeFunction`.
#[derive(Debug, Default)]
pub struct FunctionBuilder {
    function: BytecodeFunction,
}

impl FunctionBuilder {
    pub fn param_count(mut self, count: u32) -> Self {
        self.function.param_count = count;
        self
    }

    pub fn frame_size(mut self, size: u32) -> Self {
        self.function.frame_size = size;
        self
    }

    pub fn environment_size(mut self, size: u32) -> Self {
        self.function.environment_size = size;
        self
    }

    /// String table index of the function's name.
    pub fn name(mut self, string_id: u32) -> Self {
        self.function.function_name = string_id;
        self
    }

    pub fn cache_indices(mut self, read: u8, write: u8) -> Self {
        self.function.highest_read_cache_index = read;
        self.function.highest_write_cache_index = write;
        self
    }

    pub fn prohibit_invoke(mut self, prohibit: ProhibitInvoke) -> Self {
        self.function.prohibit_invoke = prohibit;
        self
    }

    pub fn strict_mode(mut self, strict: bool) -> Self {
        self.function.strict_mode = strict;
        self
    }

    pub fn opcodes(mut self, opcodes: impl Into<Vec<u8>>) -> Self {
        self.function.opcodes = opcodes.into();
        self
    }

    pub fn jump_tables(mut self, entries: impl Into<Vec<u32>>) -> Self {
        self.function.jump_tables = entries.into();
        self
    }

    pub fn exception_handler(mut self, handler: HandlerInfo) -> Self {
        self.function.exception_handlers.push(handler);
        self
    }

    pub fn debug_offsets(mut self, offsets: DebugOffsets) -> Self {
        self.function.debug_offsets = Some(offsets);
        self.function.has_debug_info = true;
        self
    }

    pub fn build(self) -> BytecodeFunction {
        self.function
    }
}
