use std::collections::BTreeSet;

use ordered::list::List;
use ordered::tree::{Tree, TreeError};

fn tree_of(keys: &[i16]) -> Tree<i16> {
    let mut tree = Tree::new();
    for key in keys {
        // Duplicates in the input are rejected; that's fine here.
        let _ = tree.insert(*key);
    }
    tree
}

fn list_of(items: &[i32]) -> List<i32> {
    let mut list = List::new();
    for item in items {
        list.insert_back(*item);
    }
    list
}

quickcheck::quickcheck! {
    fn in_order_matches_a_btreeset_oracle(xs: Vec<i16>) -> bool {
        let tree = tree_of(&xs);
        let oracle: BTreeSet<i16> = xs.iter().copied().collect();

        tree.in_order().eq(oracle.iter())
    }

    fn insert_locate_round_trip(xs: Vec<i16>) -> bool {
        let tree = tree_of(&xs);

        xs.iter().all(|x| tree.locate(x) == Ok(x))
    }

    fn duplicate_inserts_never_change_the_tree(xs: Vec<i16>) -> bool {
        let mut tree = tree_of(&xs);
        let before: Vec<i16> = tree.in_order().copied().collect();

        for x in &xs {
            if tree.insert(*x) != Err(TreeError::DuplicateKey(*x)) {
                return false;
            }
        }

        tree.in_order().copied().collect::<Vec<_>>() == before
    }

    fn removed_keys_are_gone_and_the_rest_survive(xs: Vec<i16>) -> bool {
        let distinct: Vec<i16> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        let mut tree = tree_of(&xs);

        let mut removed = Vec::new();
        let mut kept = Vec::new();
        for (i, x) in distinct.iter().enumerate() {
            if i % 2 == 0 {
                removed.push(*x);
            } else {
                kept.push(*x);
            }
        }

        for x in &removed {
            if tree.remove(x) != Ok(*x) {
                return false;
            }
        }

        removed.iter().all(|x| tree.locate(x) == Err(TreeError::NotFound))
            && kept.iter().all(|x| tree.locate(x) == Ok(x))
    }

    fn range_is_the_filtered_traversal(xs: Vec<i16>, a: i16, b: i16) -> bool {
        let (low, high) = (a.min(b), a.max(b));
        let tree = tree_of(&xs);

        let expected: Vec<i16> = tree
            .in_order()
            .copied()
            .filter(|k| low <= *k && *k <= high)
            .collect();

        tree.range(&low, &high).iter().copied().eq(expected.into_iter())
    }

    fn inverted_range_bounds_yield_an_empty_list(xs: Vec<i16>, a: i16, b: i16) -> bool {
        if a == b {
            return true;
        }
        let (low, high) = (a.min(b), a.max(b));
        let tree = tree_of(&xs);

        tree.range(&high, &low).is_empty()
    }

    fn list_reverse_is_an_involution(xs: Vec<i32>) -> bool {
        let mut list = list_of(&xs);
        list.reverse();
        list.reverse();

        list.iter().copied().eq(xs.iter().copied())
    }

    fn list_dedup_is_idempotent(xs: Vec<i32>) -> bool {
        let once = list_of(&xs).dedup();
        let twice = once.dedup();

        once.iter().eq(twice.iter())
    }

    fn list_count_always_matches_reachable_cells(xs: Vec<i32>) -> bool {
        let list = list_of(&xs);

        list.len() == xs.len()
            && list.iter().count() == list.len()
            && list.is_empty() == (list.len() == 0)
    }
}
