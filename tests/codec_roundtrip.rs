//! Property tests for the structural codec round-trip law and the BST
//! ordering invariant.

use bststore::{build, flatten, inspect, structure, BstRecordStore, Record, Structure};
use proptest::prelude::*;

/// Random structures written in the triple convention: every leaf is a
/// bare scalar, every internal node is a triple with at least one
/// non-empty child, and an absent subtree is the empty marker. This is
/// exactly the class of inputs the round-trip law quantifies over.
fn conforming_structure() -> impl Strategy<Value = Structure<u32>> {
    let leaf = any::<u32>().prop_map(Structure::Leaf);
    leaf.prop_recursive(8, 96, 2, |inner| {
        let child = prop_oneof![
            2 => inner,
            1 => Just(Structure::Empty),
        ];
        (child.clone(), any::<u32>(), child).prop_map(|(left, key, right)| {
            if left == Structure::Empty && right == Structure::Empty {
                // A childless node is written as a bare scalar.
                Structure::Leaf(key)
            } else {
                Structure::Triple(Box::new(left), key, Box::new(right))
            }
        })
    })
}

proptest! {
    #[test]
    fn roundtrip_law_holds_for_random_shapes(s in conforming_structure()) {
        let root = build(s.clone());
        prop_assert_eq!(flatten(root.as_deref()), s);
    }

    #[test]
    fn roundtrip_preserves_node_count(s in conforming_structure()) {
        fn scalar_count(s: &Structure<u32>) -> usize {
            match s {
                Structure::Empty => 0,
                Structure::Leaf(_) => 1,
                Structure::Triple(l, _, r) => 1 + scalar_count(l) + scalar_count(r),
            }
        }
        let root = build(s.clone());
        prop_assert_eq!(inspect::node_count(root.as_deref()), scalar_count(&s));
    }

    #[test]
    fn text_notation_roundtrips_through_display(s in conforming_structure()) {
        let text = s.to_string();
        prop_assert_eq!(Structure::<u32>::parse(&text).unwrap(), s);
    }

    #[test]
    fn inserts_keep_listing_ascending(keys in proptest::collection::vec("[a-zA-Z0-9]{1,12}", 0..64),
                                      case_sensitive in any::<bool>()) {
        let mut store = BstRecordStore::new(case_sensitive);
        let mut accepted = 0usize;
        for key in &keys {
            match store.insert(Record::new(key, key, "x@test.com")) {
                Ok(()) => accepted += 1,
                Err(e) => prop_assert!(e.is_duplicate_key()),
            }
        }
        prop_assert_eq!(store.len(), accepted);
        prop_assert!(store.check_invariants(), "{:?}", store.validate());

        let listed: Vec<String> = store
            .list_all()
            .iter()
            .map(|r| if case_sensitive { r.key.clone() } else { r.key.to_lowercase() })
            .collect();
        let mut sorted = listed.clone();
        sorted.sort();
        prop_assert_eq!(listed, sorted);
    }

    #[test]
    fn duplicate_insert_never_changes_size(key in "[a-z]{1,8}") {
        let mut store = BstRecordStore::new(false);
        store.insert(Record::new(&key, "first", "a@test.com")).unwrap();
        let size_before = store.len();

        let upper = key.to_uppercase();
        prop_assert!(store
            .insert(Record::new(&upper, "second", "b@test.com"))
            .unwrap_err()
            .is_duplicate_key());
        prop_assert_eq!(store.len(), size_before);
        prop_assert_eq!(store.find(&key).unwrap().display_name.as_str(), "first");
    }
}

#[test]
fn roundtrip_worked_example_from_text() {
    // ((1,3,None),2,((None,3,4),5,(6,7,8))) as text, built and flattened.
    let text = "((1, 3, None), 2, ((None, 3, 4), 5, (6, 7, 8)))";
    let s = Structure::<i64>::parse(text).unwrap();
    assert_eq!(s, structure!(((1, 3, _), 2, ((_, 3, 4), 5, (6, 7, 8)))));

    let root = build(s.clone());
    assert_eq!(flatten(root.as_deref()), s);
    assert_eq!(flatten(root.as_deref()).to_string(), text);
}
