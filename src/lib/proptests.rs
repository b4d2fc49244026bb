use super::*;

use proptest::prelude::*;
use std::collections::{BTreeMap as StdBTreeMap, HashMap as StdHashMap};

#[derive(Clone, Debug)]
enum Op {
    Set(i64, i64),
    Remove(i64),
    Get(i64),
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    // A narrow key range keeps collisions, overwrites, and removals of
    // present keys frequent.
    let key = -64i64..=64;
    let op = prop_oneof![
        50 => (key.clone(), any::<i64>()).prop_map(|(k, v)| Op::Set(k, v)),
        30 => key.clone().prop_map(Op::Remove),
        20 => key.clone().prop_map(Op::Get),
    ];
    prop::collection::vec(op, 0..=500)
}

proptest! {
    #[test]
    fn prop_btree_matches_std_btreemap(degree in 2usize..=6, ops in ops_strategy()) {
        let mut tree = BTree::new(degree).unwrap();
        let mut oracle = StdBTreeMap::new();

        for op in ops {
            match op {
                Op::Set(k, v) => prop_assert_eq!(tree.set(k, v), oracle.insert(k, v)),
                Op::Remove(k) => prop_assert_eq!(tree.remove(&k), oracle.remove(&k)),
                Op::Get(k) => prop_assert_eq!(tree.get(&k), oracle.get(&k)),
            }
            prop_assert_eq!(tree.len(), oracle.len());
        }

        // Enumeration order and content must match exactly: ascending keys,
        // no duplicates, no inversions.
        let ours: Vec<(i64, i64)> = tree.iter().map(|(k, v)| (*k, *v)).collect();
        let std_pairs: Vec<(i64, i64)> = oracle.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(ours, std_pairs);
    }

    #[test]
    fn prop_hash_table_matches_std_hashmap(ops in ops_strategy()) {
        let mut table = HashTable::new();
        let mut oracle = StdHashMap::new();

        for op in ops {
            match op {
                Op::Set(k, v) => prop_assert_eq!(table.set(k, v), oracle.insert(k, v)),
                Op::Remove(k) => prop_assert_eq!(table.remove(&k), oracle.remove(&k)),
                Op::Get(k) => prop_assert_eq!(table.get(&k), oracle.get(&k)),
            }
            prop_assert_eq!(table.len(), oracle.len());
        }

        let mut ours: Vec<(i64, i64)> = table.entries().map(|(k, v)| (*k, *v)).collect();
        let mut std_pairs: Vec<(i64, i64)> = oracle.iter().map(|(k, v)| (*k, *v)).collect();
        ours.sort_unstable();
        std_pairs.sort_unstable();
        prop_assert_eq!(ours, std_pairs);
    }

    #[test]
    fn prop_vector_backends_are_observably_identical(
        ops in prop::collection::vec((0usize..32, any::<i64>(), any::<bool>()), 0..=300)
    ) {
        let mut on_hash: SparseVector<i64> = SparseVector::new(32, Box::new(HashTable::new()));
        let mut on_tree: SparseVector<i64> = SparseVector::new(32, Box::new(BTree::new(3).unwrap()));

        for (index, value, is_set) in ops {
            if is_set {
                on_hash.set_element(index, value).unwrap();
                on_tree.set_element(index, value).unwrap();
            } else {
                on_hash.remove_element(index).unwrap();
                on_tree.remove_element(index).unwrap();
            }
        }

        for index in 0..32 {
            prop_assert_eq!(
                on_hash.get_element(index).unwrap(),
                on_tree.get_element(index).unwrap()
            );
        }
        prop_assert_eq!(on_hash.stored_len(), on_tree.stored_len());
    }

    #[test]
    fn prop_matrix_backends_are_observably_identical(
        ops in prop::collection::vec((0usize..6, 0usize..6, any::<i64>(), any::<bool>()), 0..=200)
    ) {
        let mut on_hash: SparseMatrix<i64> = SparseMatrix::new(6, 6, Box::new(HashTable::new()));
        let mut on_tree: SparseMatrix<i64> = SparseMatrix::new(6, 6, Box::new(BTree::new(2).unwrap()));

        for (row, col, value, is_set) in ops {
            if is_set {
                on_hash.set_element(row, col, value).unwrap();
                on_tree.set_element(row, col, value).unwrap();
            } else {
                on_hash.remove_element(row, col).unwrap();
                on_tree.remove_element(row, col).unwrap();
            }
        }

        for row in 0..6 {
            for col in 0..6 {
                prop_assert_eq!(
                    on_hash.get_element(row, col).unwrap(),
                    on_tree.get_element(row, col).unwrap()
                );
            }
        }
        prop_assert_eq!(on_hash.stored_len(), on_tree.stored_len());
    }
}
