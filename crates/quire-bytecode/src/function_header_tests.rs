use crate::function_header::{FunctionFlags, FunctionHeader, ProhibitInvoke, SmallFuncHeader};
use crate::record::Record;

fn encode<R: Record>(record: &R) -> Vec<u8> {
    let mut out = Vec::new();
    record.write_le(&mut out);
    assert_eq!(out.len(), R::SIZE);
    out
}

fn small_header() -> FunctionHeader {
    FunctionHeader {
        offset: 0x1000,
        param_count: 3,
        bytecode_size: 120,
        function_name: 17,
        info_offset: 0x2000,
        frame_size: 12,
        environment_size: 2,
        highest_read_cache_index: 5,
        highest_write_cache_index: 6,
        flags: FunctionFlags {
            strict_mode: true,
            ..Default::default()
        },
    }
}

#[test]
fn flags_byte_layout() {
    let flags = FunctionFlags {
        prohibit_invoke: ProhibitInvoke::Construct,
        strict_mode: true,
        has_exception_handler: false,
        has_debug_info: true,
        overflowed: true,
    };

    assert_eq!(flags.to_byte(), 0b11_0101);
    assert_eq!(FunctionFlags::from_byte(flags.to_byte()), flags);
}

#[test]
fn default_prohibits_neither() {
    assert_eq!(FunctionFlags::default().to_byte(), 2);
}

#[test]
fn fitting_header_stays_compact() {
    let large = small_header();
    let small = SmallFuncHeader::from(&large);

    assert!(!small.is_overflowed());
    assert_eq!(small.offset(), 0x1000);
    assert_eq!(small.info_offset(), 0x2000);
    assert_eq!(small.param_count(), 3);
    assert_eq!(small.bytecode_size(), 120);
}

#[test]
fn compact_header_decodes_to_same_fields() {
    let small = SmallFuncHeader::from(&small_header());
    let bytes = encode(&small);

    assert_eq!(SmallFuncHeader::from_bytes(&bytes), small);
}

#[test]
fn wide_param_count_overflows() {
    let large = FunctionHeader {
        param_count: 128,
        ..small_header()
    };

    let small = SmallFuncHeader::from(&large);

    assert!(small.is_overflowed());
    assert_eq!(small.param_count(), 0);
    assert_eq!(small.large_header_offset(), 0x2000);
    assert!(small.flags().strict_mode);
}

#[test]
fn each_truncated_field_can_overflow() {
    let base = small_header();
    let cases = [
        FunctionHeader { offset: 1 << 25, ..base },
        FunctionHeader { bytecode_size: 1 << 15, ..base },
        FunctionHeader { function_name: 1 << 17, ..base },
        FunctionHeader { info_offset: 1 << 25, ..base },
        FunctionHeader { frame_size: 1 << 7, ..base },
        FunctionHeader { environment_size: 1 << 8, ..base },
    ];

    for large in cases {
        assert!(!large.fits_small(), "{large:?}");
        assert!(SmallFuncHeader::from(&large).is_overflowed());
    }
}

#[test]
fn large_header_offset_survives_encoding_above_25_bits() {
    let large = FunctionHeader {
        info_offset: 0x0300_0010,
        param_count: 1000,
        ..small_header()
    };

    let small = SmallFuncHeader::from(&large);
    let decoded = SmallFuncHeader::from_bytes(&encode(&small));

    assert!(decoded.is_overflowed());
    assert_eq!(decoded.large_header_offset(), 0x0300_0010);
}

#[test]
fn large_header_is_32_bytes_and_decodes() {
    let large = FunctionHeader {
        param_count: 1000,
        ..small_header()
    };
    let bytes = encode(&large);

    assert_eq!(bytes.len(), 32);
    assert_eq!(bytes[31], 0);
    assert_eq!(FunctionHeader::from_bytes(&bytes), large);
}
