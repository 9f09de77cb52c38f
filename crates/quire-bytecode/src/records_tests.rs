use crate::record::Record;
use crate::{
    DebugFileRegion, DebugInfo, DebugInfoHeader, DebugOffsets, ExceptionHandlerTableHeader,
    HandlerInfo, RegExpTableEntry,
};

fn encoded_len<R: Record>(record: &R) -> usize {
    let mut out = Vec::new();
    record.write_le(&mut out);
    out.len()
}

#[test]
fn record_sizes_match_encodings() {
    assert_eq!(encoded_len(&RegExpTableEntry::default()), RegExpTableEntry::SIZE);
    assert_eq!(
        encoded_len(&ExceptionHandlerTableHeader { count: 1 }),
        ExceptionHandlerTableHeader::SIZE
    );
    assert_eq!(encoded_len(&HandlerInfo::default()), HandlerInfo::SIZE);
    assert_eq!(encoded_len(&DebugOffsets::default()), DebugOffsets::SIZE);
    assert_eq!(encoded_len(&DebugInfoHeader::default()), DebugInfoHeader::SIZE);
    assert_eq!(encoded_len(&DebugFileRegion::default()), DebugFileRegion::SIZE);
}

#[test]
fn handler_fields_in_declaration_order() {
    let handler = HandlerInfo {
        start: 1,
        end: 2,
        target: 3,
        depth: 4,
    };
    let mut out = Vec::new();
    handler.write_le(&mut out);

    let words: Vec<u32> = out
        .chunks(4)
        .map(|c| u32::from_le_bytes(c.try_into().unwrap()))
        .collect();
    assert_eq!(words, [1, 2, 3, 4]);
}

#[test]
fn add_filename_appends_storage() {
    let mut info = DebugInfo::default();
    let a = info.add_filename("a.js");
    let b = info.add_filename("lib/b.js");

    assert_eq!((a, b), (0, 1));
    assert_eq!(info.filename_storage, b"a.jslib/b.js");
    assert_eq!(info.filename_table[1].offset(), 4);
    assert_eq!(info.filename_table[1].length(), 8);
    assert!(!info.is_empty());
}
