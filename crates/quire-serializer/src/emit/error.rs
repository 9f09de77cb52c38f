//! Recoverable serialization errors.
//!
//! Broken invariants between the two passes are not errors; they abort
//! (see `invariants`).

/// Errors that can occur while serializing a module.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    /// A count or size the format stores in a fixed-width field is too large.
    #[error("{field} does not fit its field: {value}")]
    FieldOverflow { field: &'static str, value: usize },

    /// The artifact would not be addressable with 32-bit offsets.
    #[error("artifact too large: {0} bytes exceeds the 32-bit offset space")]
    ArtifactTooLarge(usize),
}

/// Checked conversion for a u32 header or record field.
pub(super) fn to_u32(field: &'static str, value: usize) -> Result<u32, EmitError> {
    u32::try_from(value).map_err(|_| EmitError::FieldOverflow { field, value })
}

/// Checked conversion for a signed count field.
pub(super) fn to_i32(field: &'static str, value: usize) -> Result<i32, EmitError> {
    i32::try_from(value).map_err(|_| EmitError::FieldOverflow { field, value })
}
