use super::dedup::BytecodeDedupMap;

#[test]
fn first_sighting_records_offset() {
    let mut map = BytecodeDedupMap::new();

    assert_eq!(map.insert_or_get(&[1, 2, 3], &[], 100), None);
    assert_eq!(map.len(), 1);
}

#[test]
fn identical_body_returns_first_offset() {
    let mut map = BytecodeDedupMap::new();

    map.insert_or_get(&[1, 2, 3], &[10], 100);
    assert_eq!(map.insert_or_get(&[1, 2, 3], &[10], 200), Some(100));
    assert_eq!(map.insert_or_get(&[1, 2, 3], &[10], 300), Some(100));
    assert_eq!(map.len(), 1);
}

#[test]
fn jump_tables_are_part_of_identity() {
    let mut map = BytecodeDedupMap::new();

    map.insert_or_get(&[1, 2, 3], &[10], 100);

    assert_eq!(map.insert_or_get(&[1, 2, 3], &[11], 200), None);
    assert_eq!(map.insert_or_get(&[1, 2, 3], &[], 300), None);
    assert_eq!(map.len(), 3);
}

#[test]
fn opcodes_are_compared_bytewise() {
    let mut map = BytecodeDedupMap::new();

    map.insert_or_get(&[1, 2, 3], &[], 100);

    assert_eq!(map.insert_or_get(&[1, 2], &[], 200), None);
    assert_eq!(map.insert_or_get(&[1, 2, 3, 0], &[], 300), None);
}

#[test]
fn new_map_is_empty() {
    let map = BytecodeDedupMap::new();

    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
}
