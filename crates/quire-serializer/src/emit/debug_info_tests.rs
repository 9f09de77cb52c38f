use quire_bytecode::{
    BytecodeModule, DebugFileRegion, DebugInfo, StringTableEntry, WORD_ALIGNMENT,
};
use quire_core::is_aligned;

use crate::SerializeOptions;
use crate::test_utils::{emit, header, read_u32};

fn module_with_debug_info() -> BytecodeModule {
    let mut info = DebugInfo::default();
    info.add_filename("main.js");
    info.files.push(DebugFileRegion {
        from_address: 0,
        filename_id: 0,
        source_mapping_url_id: 0,
    });
    info.lexical_data_offset = 3;
    info.data = vec![1, 2, 3, 4, 5];

    BytecodeModule::builder()
        .array_buffer(vec![0xAA])
        .debug_info(info)
        .build()
}

#[test]
fn debug_info_is_written_in_order() {
    let mut module = module_with_debug_info();

    let artifact = emit(&mut module, &SerializeOptions::default());
    let bytes = &artifact.bytes;
    let at = artifact.sections.debug_info as usize;

    assert!(is_aligned(at, WORD_ALIGNMENT));
    assert_eq!(header(&artifact).debug_info_offset as usize, at);

    let fields: Vec<u32> = (0..5).map(|i| read_u32(bytes, at + i * 4)).collect();
    assert_eq!(fields, [1, 7, 1, 3, 5]);

    // Filename table entry, then filename storage.
    assert_eq!(read_u32(bytes, at + 20), 0);
    assert_eq!(read_u32(bytes, at + 24), 7);
    assert_eq!(&bytes[at + 28..at + 35], b"main.js");

    // One 12-byte file region, then the data stream to the end.
    assert_eq!(&bytes[at + 35..at + 47], &[0; 12]);
    assert_eq!(&bytes[at + 47..], &[1, 2, 3, 4, 5]);
}

#[test]
fn stripped_debug_info_is_an_empty_header() {
    let mut module = module_with_debug_info();
    let options = SerializeOptions::default().strip_debug_info(true);

    let artifact = emit(&mut module, &options);
    let at = artifact.sections.debug_info as usize;

    assert_eq!(artifact.bytes.len(), at + 20);
    assert!(artifact.bytes[at..].iter().all(|&b| b == 0));
    assert_eq!(header(&artifact).debug_info_offset as usize, at);
}

#[test]
fn empty_debug_info_still_has_a_header() {
    let mut module = BytecodeModule::builder().build();

    let artifact = emit(&mut module, &SerializeOptions::default());

    assert_eq!(artifact.sections.debug_info, 128);
    assert_eq!(artifact.bytes.len(), 148);
}

#[test]
fn utf16_filenames_set_the_length_high_bit() {
    let mut info = DebugInfo::default();
    info.filename_table.push(StringTableEntry::new(0, 2, true));
    info.filename_storage = vec![0x41, 0, 0x42, 0];
    let mut module = BytecodeModule::builder().debug_info(info).build();

    let artifact = emit(&mut module, &SerializeOptions::default());
    let at = artifact.sections.debug_info as usize;

    assert_eq!(read_u32(&artifact.bytes, at + 24), 2 | 1 << 31);
}
