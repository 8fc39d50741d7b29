//! Property tests for ordered-set-map
//!
//! These tests check the set laws and ordering guarantees against
//! `BTreeSet` and plain vectors.

use ordered_set_map::OrderedSetMap;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Small element domain so generated sequences contain duplicates.
fn elements() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0u8..24, 0..40)
}

/// Removes duplicates keeping first occurrences.
fn dedup(values: &[u8]) -> Vec<u8> {
    let mut seen = BTreeSet::new();
    values.iter().copied().filter(|v| seen.insert(*v)).collect()
}

fn items(set: &OrderedSetMap<u8>) -> Vec<u8> {
    set.iter().copied().collect()
}

fn members(set: &OrderedSetMap<u8>) -> BTreeSet<u8> {
    set.iter().copied().collect()
}

// ============================================================
// Construction and mutation
// ============================================================

proptest! {
    #[test]
    fn construction_keeps_first_occurrences(values in elements()) {
        let set: OrderedSetMap<u8> = values.iter().copied().collect();
        prop_assert_eq!(items(&set), dedup(&values));
        prop_assert_eq!(set.len(), dedup(&values).len());
    }

    #[test]
    fn add_is_idempotent(values in elements(), x in 0u8..32) {
        let mut set: OrderedSetMap<u8> = values.into_iter().collect();
        let before = set.len();
        let first = *set.add(x);
        let second = *set.add(x);
        prop_assert_eq!(first, second);
        prop_assert!(set.len() <= before + 1);
        prop_assert_eq!(set.index_of(&x), set.iter().position(|v| *v == x));
    }

    #[test]
    fn round_trip(values in elements()) {
        let set: OrderedSetMap<u8> = values.into_iter().collect();
        let again: OrderedSetMap<u8> = set.iter().copied().collect();
        prop_assert_eq!(items(&again), items(&set));
        prop_assert_eq!(again, set);
    }

    #[test]
    fn remove_preserves_relative_order(values in elements(), x in 0u8..32) {
        let mut set: OrderedSetMap<u8> = values.iter().copied().collect();
        let expected: Vec<u8> = dedup(&values).into_iter().filter(|v| *v != x).collect();
        let removed = set.remove(&x);
        prop_assert_eq!(removed, values.contains(&x).then_some(x));
        prop_assert_eq!(items(&set), expected);
        for (index, value) in set.iter().enumerate() {
            prop_assert_eq!(set.index_of(value), Some(index));
            prop_assert_eq!(set.at(index), Ok(value));
        }
        prop_assert!(set.at(set.len()).is_err());
    }

    #[test]
    fn equality_ignores_order(values in elements()) {
        let set: OrderedSetMap<u8> = values.iter().copied().collect();
        let reversed: OrderedSetMap<u8> = values.iter().rev().copied().collect();
        prop_assert_eq!(set, reversed);
    }
}

// ============================================================
// Set algebra
// ============================================================

proptest! {
    #[test]
    fn union_is_self_then_new_from_other(lhs in elements(), rhs in elements()) {
        let a: OrderedSetMap<u8> = lhs.iter().copied().collect();
        let b: OrderedSetMap<u8> = rhs.iter().copied().collect();
        let mut expected = dedup(&lhs);
        expected.extend(dedup(&rhs).into_iter().filter(|v| !lhs.contains(v)));
        prop_assert_eq!(items(&a.union(&b)), expected);
        prop_assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn intersection_and_difference_follow_self(lhs in elements(), rhs in elements()) {
        let a: OrderedSetMap<u8> = lhs.iter().copied().collect();
        let b: OrderedSetMap<u8> = rhs.iter().copied().collect();
        let (inside, outside): (Vec<u8>, Vec<u8>) =
            dedup(&lhs).into_iter().partition(|v| rhs.contains(v));
        prop_assert_eq!(items(&a.intersection(&b)), inside);
        prop_assert_eq!(items(&a.difference(&b)), outside);
    }

    #[test]
    fn symmetric_difference_matches_btree_set(lhs in elements(), rhs in elements()) {
        let a: OrderedSetMap<u8> = lhs.iter().copied().collect();
        let b: OrderedSetMap<u8> = rhs.iter().copied().collect();
        let expected: BTreeSet<u8> = members(&a)
            .symmetric_difference(&members(&b))
            .copied()
            .collect();
        let result = a.symmetric_difference(&b);
        prop_assert_eq!(members(&result), expected);
        let mut order = items(&a.difference(&b));
        order.extend(items(&b.difference(&a)));
        prop_assert_eq!(items(&result), order);
    }

    #[test]
    fn containment_matches_btree_set(lhs in elements(), rhs in elements()) {
        let a: OrderedSetMap<u8> = lhs.iter().copied().collect();
        let b: OrderedSetMap<u8> = rhs.iter().copied().collect();
        let (x, y) = (members(&a), members(&b));
        prop_assert_eq!(a.is_subset(&b), x.is_subset(&y));
        prop_assert_eq!(a.is_superset(&b), x.is_superset(&y));
        prop_assert_eq!(a.is_proper_subset(&b), x.is_subset(&y) && x.len() < y.len());
        prop_assert_eq!(a.is_disjoint(&b), x.is_disjoint(&y));
        prop_assert!(!a.is_proper_subset(&a));
    }
}
