use balanced_bst::Tree;

use std::collections::BTreeSet;

quickcheck::quickcheck! {
    fn build_keeps_unique_sorted_keys(xs: Vec<i8>) -> bool {
        let tree = Tree::build(xs.clone());
        let unique: BTreeSet<_> = xs.into_iter().collect();

        tree.in_order().into_iter().eq(unique.into_iter())
    }
}

quickcheck::quickcheck! {
    fn in_order_stays_strictly_ascending(xs: Vec<i8>, inserts: Vec<i8>, removes: Vec<i8>) -> bool {
        let mut tree = Tree::build(xs);
        for x in inserts {
            tree.insert(x);
        }
        for x in &removes {
            tree.remove(x);
        }

        tree.in_order().windows(2).all(|w| w[0] < w[1])
    }
}

quickcheck::quickcheck! {
    fn reinserting_changes_nothing(xs: Vec<i8>) -> bool {
        let mut tree = Tree::build(xs.clone());
        let before = tree.level_order();
        for x in xs {
            tree.insert(x);
        }

        tree.level_order() == before
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = Tree::build(xs.clone());
        let added: BTreeSet<_> = xs.into_iter().collect();
        let nots: BTreeSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none() && tree.depth(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn remove_takes_exactly_one_key(xs: Vec<i8>, key: i8) -> bool {
        let mut tree = Tree::build(xs);
        let mut expected = tree.in_order();
        let present = expected.contains(&key);
        expected.retain(|x| *x != key);

        tree.remove(&key) == present && tree.in_order() == expected
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        for delete in &deletes {
            tree.remove(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same key multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn rebalance_is_balanced(xs: Vec<i8>, inserts: Vec<i8>) -> bool {
        let mut tree = Tree::build(xs);
        tree.extend(inserts);
        let keys = tree.in_order();
        tree.rebalance();

        tree.is_balanced() && tree.in_order() == keys
    }
}
