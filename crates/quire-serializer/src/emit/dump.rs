//! Human-readable artifact layout for debugging and snapshot tests.

use std::fmt::Write as _;

use quire_bytecode::{FileHeader, Record, SmallFuncHeader};

use super::layout::Artifact;

/// Render the header summary, section table and function table.
///
/// Section sizes run up to the next section, so they include any padding
/// that follows the section's contents.
pub fn dump(artifact: &Artifact) -> String {
    let mut out = String::new();
    let header = FileHeader::from_bytes(&artifact.bytes);

    dump_header(&mut out, &header);
    dump_sections(&mut out, artifact);
    dump_functions(&mut out, artifact, &header);

    out
}

fn dump_header(out: &mut String, header: &FileHeader) {
    writeln!(out, "[header]").unwrap();
    writeln!(out, "file_length = {}", header.file_length).unwrap();
    writeln!(out, "functions = {}", header.function_count).unwrap();
    writeln!(out, "strings = {}", header.string_count).unwrap();
    writeln!(out, "string_table_bytes = {}", header.string_table_bytes).unwrap();
    writeln!(out, "cjs_modules = {}", header.cjs_module_count).unwrap();
    writeln!(out, "debug_info_offset = {}", header.debug_info_offset).unwrap();
    writeln!(out, "options = {:#04x}", header.options.bits()).unwrap();
}

fn dump_sections(out: &mut String, artifact: &Artifact) {
    writeln!(out).unwrap();
    writeln!(out, "[sections]").unwrap();
    let entries = artifact.sections.entries();
    for (i, &(name, start)) in entries.iter().enumerate() {
        let next = entries
            .get(i + 1)
            .map_or(artifact.sections.end, |&(_, next)| next);
        writeln!(out, "{name:<17} {start:>6} {:>6}", next - start).unwrap();
    }
}

fn dump_functions(out: &mut String, artifact: &Artifact, header: &FileHeader) {
    if header.function_count == 0 {
        return;
    }
    writeln!(out).unwrap();
    writeln!(out, "[functions]").unwrap();

    let table = artifact.sections.function_table as usize;
    for i in 0..header.function_count as usize {
        let at = table + i * SmallFuncHeader::SIZE;
        let small = SmallFuncHeader::from_bytes(&artifact.bytes[at..]);
        if small.is_overflowed() {
            writeln!(out, "F{i} large header at {}", small.large_header_offset()).unwrap();
        } else {
            writeln!(
                out,
                "F{i} code {} size {} info {}",
                small.offset(),
                small.bytecode_size(),
                small.info_offset()
            )
            .unwrap();
        }
    }
}
