#![cfg(feature = "serde")]

//! Integration tests for serde support in glist.

use glist::GenericList;
use rstest::rstest;

#[rstest]
fn test_list_json_roundtrip() {
    let list: GenericList<i32> = (1..=10).collect();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[1,2,3,4,5,6,7,8,9,10]");
    let restored: GenericList<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(list, restored);
}

#[rstest]
fn test_empty_list_json_roundtrip() {
    let list: GenericList<String> = GenericList::new();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[]");
    let restored: GenericList<String> = serde_json::from_str(&json).unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_nested_lists() {
    let inner1: GenericList<i32> = (1..=3).collect();
    let inner2: GenericList<i32> = (4..=6).collect();
    let outer: GenericList<GenericList<i32>> = vec![inner1, inner2].into_iter().collect();

    let json = serde_json::to_string(&outer).unwrap();
    let restored: GenericList<GenericList<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(outer, restored);
}

#[rstest]
fn test_deserialize_rejects_non_sequence() {
    let result: Result<GenericList<i32>, _> = serde_json::from_str("{\"a\": 1}");
    assert!(result.is_err());
}
