#![cfg(feature = "serde")]

use ordered_set_map::OrderedSetMap;
use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
struct Edge {
    from: u32,
    to: u32,
}

#[test]
fn serializes_in_iteration_order() {
    let set = OrderedSetMap::from([3, 1, 2]);
    assert_eq!(serde_json::to_string(&set).unwrap(), "[3,1,2]");
}

#[test]
fn deserialize_collapses_duplicates() {
    let set: OrderedSetMap<u32> = serde_json::from_str("[5, 4, 5, 1, 4]").unwrap();
    assert_eq!(set.as_slice(), &[5, 4, 1]);
}

#[test]
fn derived_elements() {
    let set = OrderedSetMap::from([Edge { from: 1, to: 2 }, Edge { from: 0, to: 1 }]);
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"[{"from":1,"to":2},{"from":0,"to":1}]"#);
    let back: OrderedSetMap<Edge> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.as_slice(), set.as_slice());
}

#[test]
fn rejects_non_sequences() {
    assert!(serde_json::from_str::<OrderedSetMap<u32>>("{\"a\": 1}").is_err());
}
