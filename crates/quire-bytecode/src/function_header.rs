//! Function headers.
//!
//! Every function gets a 16-byte `SmallFuncHeader` in the function table.
//! When a field does not fit its truncated width, the small header is marked
//! `overflowed` and the 32-byte `FunctionHeader` is written at the start of
//! the function's info block instead.

use super::record::{Record, read_u32};

const OFFSET_BITS: u32 = 25;
const PARAM_COUNT_BITS: u32 = 7;
const BYTECODE_SIZE_BITS: u32 = 15;
const FUNCTION_NAME_BITS: u32 = 17;
const INFO_OFFSET_BITS: u32 = 25;
const FRAME_SIZE_BITS: u32 = 7;
const ENVIRONMENT_SIZE_BITS: u32 = 8;

const fn mask(bits: u32) -> u32 {
    (1 << bits) - 1
}

const fn fits(value: u32, bits: u32) -> bool {
    value >> bits == 0
}

/// Which kind of invocation the function rejects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ProhibitInvoke {
    /// Cannot be called, only constructed.
    Call = 0,
    /// Cannot be constructed, only called.
    Construct = 1,
    #[default]
    Neither = 2,
}

/// Per-function flag byte.
///
/// Bits 0-1: prohibit invoke, 2: strict mode, 3: has exception handler,
/// 4: has debug info, 5: overflowed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FunctionFlags {
    pub prohibit_invoke: ProhibitInvoke,
    pub strict_mode: bool,
    pub has_exception_handler: bool,
    pub has_debug_info: bool,
    /// Only meaningful in a small header: the large header must be read.
    pub overflowed: bool,
}

impl FunctionFlags {
    pub fn to_byte(self) -> u8 {
        self.prohibit_invoke as u8
            | (self.strict_mode as u8) << 2
            | (self.has_exception_handler as u8) << 3
            | (self.has_debug_info as u8) << 4
            | (self.overflowed as u8) << 5
    }

    pub fn from_byte(byte: u8) -> Self {
        let prohibit_invoke = match byte & 0b11 {
            0 => ProhibitInvoke::Call,
            1 => ProhibitInvoke::Construct,
            _ => ProhibitInvoke::Neither,
        };
        Self {
            prohibit_invoke,
            strict_mode: byte & (1 << 2) != 0,
            has_exception_handler: byte & (1 << 3) != 0,
            has_debug_info: byte & (1 << 4) != 0,
            overflowed: byte & (1 << 5) != 0,
        }
    }
}

/// Full-width function header (32 bytes).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FunctionHeader {
    /// Position of the function's bytecode in the artifact.
    pub offset: u32,
    pub param_count: u32,
    pub bytecode_size: u32,
    /// String table index of the function name.
    pub function_name: u32,
    /// Position of the function's info block in the artifact.
    pub info_offset: u32,
    pub frame_size: u32,
    pub environment_size: u32,
    pub highest_read_cache_index: u8,
    pub highest_write_cache_index: u8,
    pub flags: FunctionFlags,
}

impl FunctionHeader {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        assert!(bytes.len() >= Self::SIZE, "function header too short");
        Self {
            offset: read_u32(bytes, 0),
            param_count: read_u32(bytes, 4),
            bytecode_size: read_u32(bytes, 8),
            function_name: read_u32(bytes, 12),
            info_offset: read_u32(bytes, 16),
            frame_size: read_u32(bytes, 20),
            environment_size: read_u32(bytes, 24),
            highest_read_cache_index: bytes[28],
            highest_write_cache_index: bytes[29],
            flags: FunctionFlags::from_byte(bytes[30]),
        }
    }

    /// Whether every field fits the compact encoding.
    pub fn fits_small(&self) -> bool {
        fits(self.offset, OFFSET_BITS)
            && fits(self.param_count, PARAM_COUNT_BITS)
            && fits(self.bytecode_size, BYTECODE_SIZE_BITS)
            && fits(self.function_name, FUNCTION_NAME_BITS)
            && fits(self.info_offset, INFO_OFFSET_BITS)
            && fits(self.frame_size, FRAME_SIZE_BITS)
            && fits(self.environment_size, ENVIRONMENT_SIZE_BITS)
    }
}

impl Record for FunctionHeader {
    const SIZE: usize = 32;

    fn write_le(&self, out: &mut Vec<u8>) {
        for word in [
            self.offset,
            self.param_count,
            self.bytecode_size,
            self.function_name,
            self.info_offset,
            self.frame_size,
            self.environment_size,
        ] {
            out.extend_from_slice(&word.to_le_bytes());
        }
        out.extend_from_slice(&[
            self.highest_read_cache_index,
            self.highest_write_cache_index,
            self.flags.to_byte(),
            0,
        ]);
    }
}

/// Compact function header (16 bytes, four u32 words).
///
/// - w0: offset (25) | param count (7)
/// - w1: bytecode size (15) | function name (17)
/// - w2: info offset (25) | frame size (7)
/// - w3: environment size (8) | read cache (8) | write cache (8) | flags (8)
///
/// When overflowed, only the flags are meaningful and the offset/info offset
/// fields together hold the large header's position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SmallFuncHeader {
    offset: u32,
    param_count: u32,
    bytecode_size: u32,
    function_name: u32,
    info_offset: u32,
    frame_size: u32,
    environment_size: u32,
    highest_read_cache_index: u8,
    highest_write_cache_index: u8,
    flags: FunctionFlags,
}

impl From<&FunctionHeader> for SmallFuncHeader {
    fn from(large: &FunctionHeader) -> Self {
        if large.fits_small() {
            return Self {
                offset: large.offset,
                param_count: large.param_count,
                bytecode_size: large.bytecode_size,
                function_name: large.function_name,
                info_offset: large.info_offset,
                frame_size: large.frame_size,
                environment_size: large.environment_size,
                highest_read_cache_index: large.highest_read_cache_index,
                highest_write_cache_index: large.highest_write_cache_index,
                flags: FunctionFlags {
                    overflowed: false,
                    ..large.flags
                },
            };
        }

        let mut small = Self {
            flags: FunctionFlags {
                overflowed: true,
                ..large.flags
            },
            ..Self::default()
        };
        // The large header is the first record of the info block.
        small.set_large_header_offset(large.info_offset);
        small
    }
}

impl SmallFuncHeader {
    pub fn is_overflowed(&self) -> bool {
        self.flags.overflowed
    }

    pub fn flags(&self) -> FunctionFlags {
        self.flags
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn info_offset(&self) -> u32 {
        self.info_offset
    }

    pub fn param_count(&self) -> u32 {
        self.param_count
    }

    pub fn bytecode_size(&self) -> u32 {
        self.bytecode_size
    }

    /// Position of the large header. Only valid when overflowed.
    pub fn large_header_offset(&self) -> u32 {
        self.offset | self.info_offset << OFFSET_BITS
    }

    fn set_large_header_offset(&mut self, large_offset: u32) {
        self.offset = large_offset & mask(OFFSET_BITS);
        self.info_offset = large_offset >> OFFSET_BITS;
    }

    fn to_words(self) -> [u32; 4] {
        [
            self.offset | self.param_count << OFFSET_BITS,
            self.bytecode_size | self.function_name << BYTECODE_SIZE_BITS,
            self.info_offset | self.frame_size << INFO_OFFSET_BITS,
            self.environment_size
                | (self.highest_read_cache_index as u32) << 8
                | (self.highest_write_cache_index as u32) << 16
                | (self.flags.to_byte() as u32) << 24,
        ]
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        assert!(bytes.len() >= Self::SIZE, "small function header too short");
        let w0 = read_u32(bytes, 0);
        let w1 = read_u32(bytes, 4);
        let w2 = read_u32(bytes, 8);
        let w3 = read_u32(bytes, 12);
        Self {
            offset: w0 & mask(OFFSET_BITS),
            param_count: w0 >> OFFSET_BITS,
            bytecode_size: w1 & mask(BYTECODE_SIZE_BITS),
            function_name: w1 >> BYTECODE_SIZE_BITS,
            info_offset: w2 & mask(INFO_OFFSET_BITS),
            frame_size: w2 >> INFO_OFFSET_BITS,
            environment_size: w3 & 0xFF,
            highest_read_cache_index: (w3 >> 8) as u8,
            highest_write_cache_index: (w3 >> 16) as u8,
            flags: FunctionFlags::from_byte((w3 >> 24) as u8),
        }
    }
}

impl Record for SmallFuncHeader {
    const SIZE: usize = 16;

    fn write_le(&self, out: &mut Vec<u8>) {
        for word in self.to_words() {
            out.extend_from_slice(&word.to_le_bytes());
        }
    }
}
