use crate::align::{align_to, is_aligned, padding_for};

#[test]
fn align_to_rounds_up() {
    assert_eq!(align_to(1, 4), 4);
    assert_eq!(align_to(5, 4), 8);
    assert_eq!(align_to(129, 16), 144);
}

#[test]
fn align_to_keeps_aligned_positions() {
    assert_eq!(align_to(0, 4), 0);
    assert_eq!(align_to(128, 16), 128);
    assert_eq!(align_to(64, 64), 64);
}

#[test]
fn padding_is_zero_on_boundary() {
    assert_eq!(padding_for(16, 16), 0);
    assert_eq!(padding_for(0, 4), 0);
}

#[test]
fn padding_fills_to_boundary() {
    assert_eq!(padding_for(1, 4), 3);
    assert_eq!(padding_for(10, 4), 2);
    assert_eq!(padding_for(130, 16), 14);
}

#[test]
fn alignment_one_never_pads() {
    for pos in 0..32 {
        assert_eq!(padding_for(pos, 1), 0);
        assert!(is_aligned(pos, 1));
    }
}

#[test]
fn is_aligned_matches_align_to() {
    for pos in 0..100 {
        assert_eq!(is_aligned(pos, 4), align_to(pos, 4) == pos);
        assert_eq!(is_aligned(pos, 16), align_to(pos, 16) == pos);
    }
}
