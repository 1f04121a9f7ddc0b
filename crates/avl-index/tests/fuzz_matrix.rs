use std::collections::BTreeSet;

use avl_index::AvlTree;
use avl_index_util::{Fuzzer, Op};

#[test]
fn random_inserts_stay_within_height_bound() {
    let fuzzer = Fuzzer::from_u64(0x5eed);
    let mut tree = AvlTree::new();

    for k in fuzzer.keys(10_000, 1, 10_000) {
        tree.insert(k);
        assert!(tree.is_balanced());
    }

    tree.assert_valid().unwrap();
    let bound = 2.0 * ((tree.size() + 1) as f64).log2();
    assert!((tree.height() as f64) <= bound);
}

#[test]
fn random_scripts_match_btree_set() {
    for seed in 0..16 {
        let fuzzer = Fuzzer::from_u64(seed);
        let mut tree = AvlTree::new();
        let mut model = BTreeSet::new();

        for op in fuzzer.ops(2_000, -300, 300, 0.55) {
            match op {
                Op::Insert(k) => assert_eq!(tree.insert(k), model.insert(k)),
                Op::Delete(k) => assert_eq!(tree.delete(&k), model.remove(&k)),
            }
            if let Err(e) = tree.assert_valid() {
                panic!("seed {seed}: {e}\n{}", tree.print());
            }
        }

        assert!(tree.in_order().eq(model.iter()));
        assert_eq!(tree.size(), model.len());
    }
}

#[test]
fn drain_to_empty() {
    let fuzzer = Fuzzer::from_u64(3);
    let keys = fuzzer.keys(500, 0, 100_000);
    let mut tree: AvlTree<i64> = keys.iter().copied().collect();

    for k in &keys {
        tree.delete(k);
        assert!(tree.is_balanced());
    }
    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    tree.assert_valid().unwrap();
}
