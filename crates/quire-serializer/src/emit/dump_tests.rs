use quire_bytecode::{BytecodeFunction, BytecodeModule};

use super::dump::dump;
use crate::SerializeOptions;
use crate::test_utils::{emit, module_with_bodies};

#[test]
fn dump_deduplicated_module() {
    let mut module = module_with_bodies(&[&[1; 10], &[1; 10], &[2; 4]]);
    let artifact = emit(&mut module, &SerializeOptions::default().optimize(true));

    insta::assert_snapshot!(dump(&artifact), @r"
    [header]
    file_length = 212
    functions = 3
    strings = 0
    string_table_bytes = 0
    cjs_modules = 0
    debug_info_offset = 192
    options = 0x00

    [sections]
    header                 0    128
    function_table       128     48
    string_table         176      0
    string_overflow      176      0
    identifier_hashes    176      0
    string_storage       176      0
    array_buffer         176      0
    object_keys          176      0
    object_values        176      0
    regexp_table         176      0
    regexp_storage       176      0
    cjs_modules          176      0
    bytecode             176     16
    function_info        192      0
    debug_info           192     20

    [functions]
    F0 code 176 size 10 info 192
    F1 code 176 size 10 info 192
    F2 code 188 size 4 info 192
    ");
}

#[test]
fn dump_points_at_large_header() {
    let mut module = BytecodeModule::builder().build();
    module.functions.push(
        BytecodeFunction::builder()
            .opcodes(vec![1, 2])
            .param_count(200)
            .build(),
    );
    let artifact = emit(&mut module, &SerializeOptions::default());

    let output = dump(&artifact);

    assert!(output.contains("function_info        148     44"));
    assert!(output.contains("F0 large header at 160"));
}

#[test]
fn dump_omits_function_section_when_empty() {
    let mut module = BytecodeModule::builder().build();
    let artifact = emit(&mut module, &SerializeOptions::default());

    assert!(!dump(&artifact).contains("[functions]"));
}
