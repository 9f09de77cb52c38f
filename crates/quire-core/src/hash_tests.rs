use crate::hash::{SOURCE_HASH_SIZE, SourceHash};

#[test]
fn default_is_all_zero() {
    assert_eq!(SourceHash::default().as_bytes(), &[0; SOURCE_HASH_SIZE]);
}

#[test]
fn display_is_lowercase_hex() {
    let mut bytes = [0u8; SOURCE_HASH_SIZE];
    bytes[0] = 0xAB;
    bytes[19] = 0x01;
    let hash = SourceHash::from(bytes);

    let text = hash.to_string();
    assert_eq!(text.len(), SOURCE_HASH_SIZE * 2);
    assert!(text.starts_with("ab00"));
    assert!(text.ends_with("0001"));
}
