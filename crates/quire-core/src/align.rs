//! Alignment and padding policy.
//!
//! All boundaries used by the bytecode format are powers of two, so rounding
//! is a mask operation. Padding is always filled with zero bytes by the
//! writer; this module only decides how many.

/// Round `pos` up to the next multiple of `align`.
///
/// `align` must be a power of two. Already-aligned positions are returned
/// unchanged.
///
/// # Examples
/// ```
/// use quire_core::align_to;
/// assert_eq!(align_to(0, 16), 0);
/// assert_eq!(align_to(17, 16), 32);
/// assert_eq!(align_to(32, 16), 32);
/// ```
pub const fn align_to(pos: usize, align: usize) -> usize {
    debug_assert!(align.is_power_of_two());
    (pos + align - 1) & !(align - 1)
}

/// Number of zero bytes needed to move `pos` onto an `align` boundary.
pub const fn padding_for(pos: usize, align: usize) -> usize {
    align_to(pos, align) - pos
}

/// Whether `pos` already sits on an `align` boundary.
pub const fn is_aligned(pos: usize, align: usize) -> bool {
    debug_assert!(align.is_power_of_two());
    pos & (align - 1) == 0
}
