use counting_bst::{Order, Tree};

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a map of payload to repeat count.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same payloads in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, map: &mut BTreeMap<T, u64>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(x.clone(), T::cmp).unwrap();
                map.entry(x.clone())
                    .and_modify(|repeat| *repeat += 1)
                    .or_insert(0);
            }
            Op::Remove(x) => {
                tree.remove(x, T::cmp);
                map.remove(x);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map);
    tree.len() == map.len()
        && tree.iter().eq(map.keys())
        && map
            .iter()
            .all(|(x, repeat)| tree.locate(x, i8::cmp).map(|n| n.repeat()) == Some(*repeat))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.insert_all(xs.iter().copied(), i8::cmp).unwrap();

    xs.iter()
        .all(|x| tree.locate(x, i8::cmp).map(|n| n.payload()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.insert_all(xs.iter().copied(), i8::cmp).unwrap();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.locate(x, i8::cmp).is_none())
}

#[quickcheck]
fn duplicates_only_count_repeats(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.insert_all(xs.iter().copied(), i8::cmp).unwrap();
    let distinct: HashSet<_> = xs.iter().collect();

    let repeats: u64 = tree
        .walk(Order::PreorderLeft)
        .map(|x| tree.locate(x, i8::cmp).map_or(0, |n| n.repeat()))
        .sum();
    tree.len() == distinct.len() && repeats as usize == xs.len() - distinct.len()
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.insert_all(xs.iter().copied(), i8::cmp).unwrap();
    for delete in &deletes {
        tree.remove(delete, i8::cmp);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.locate(x, i8::cmp).is_none())
        && still_present
            .iter()
            .all(|x| tree.locate(x, i8::cmp).is_some())
}

#[quickcheck]
fn every_walk_has_len_payloads(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    tree.insert_all(xs, i16::cmp).unwrap();
    for delete in &deletes {
        tree.remove(delete, i16::cmp);
    }

    Order::ALL.iter().all(|&order| tree.walk(order).count() == tree.len())
}

#[quickcheck]
fn clear_frees_every_node(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    tree.insert_all(xs, i16::cmp).unwrap();
    let len = tree.len();

    tree.clear() == len && tree.is_empty() && tree.depth() == 0
}
