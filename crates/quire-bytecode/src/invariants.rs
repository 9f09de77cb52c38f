//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::function::BytecodeFunction;

impl BytecodeFunction {
    pub(crate) fn ensure_code_offset(&self) -> u32 {
        self.code_offset.unwrap_or_else(|| {
            panic!(
                "BytecodeFunction: code offset read before layout \
                 (serializer must assign it in the layout pass)"
            )
        })
    }

    pub(crate) fn ensure_info_offset(&self) -> u32 {
        self.info_offset.unwrap_or_else(|| {
            panic!(
                "BytecodeFunction: info offset read before layout \
                 (serializer must assign it in the layout pass)"
            )
        })
    }
}
