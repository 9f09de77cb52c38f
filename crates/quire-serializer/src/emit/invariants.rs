//! Invariant checks excluded from coverage reports.
//!
//! Every check here guards the agreement between the layout pass and the
//! final pass. A failure means the serializer itself is broken, so it aborts.

#![cfg_attr(coverage_nightly, coverage(off))]

pub(super) fn ensure_nonempty_layout(length: usize) {
    if length == 0 {
        panic!("BytecodeSerializer: empty artifact after layout pass");
    }
}

pub(super) fn ensure_code_offset(index: usize, offset: Option<u32>) -> u32 {
    offset.unwrap_or_else(|| {
        panic!("BytecodeSerializer: function {index} lacks a code offset after layout")
    })
}

pub(super) fn ensure_offset_not_ahead(index: usize, offset: u32, position: usize) {
    if offset as usize > position {
        panic!(
            "BytecodeSerializer: function {index} has code offset {offset} \
             past the write position {position}"
        );
    }
}

pub(super) fn ensure_no_layout_drift(laid_out: u32, written: usize) {
    if laid_out as usize != written {
        panic!(
            "BytecodeSerializer: final pass wrote {written} bytes \
             but layout measured {laid_out}"
        );
    }
}
