use avltree::Tree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                tree.remove(x);
                set.remove(x);
            }
            Op::PopMin => assert_eq!(tree.pop_min(), set.pop_first()),
            Op::PopMax => assert_eq!(tree.pop_max(), set.pop_last()),
        }
        tree.fully_validate();
    }
}

/// Every value in the tree, in sorted order, found by rank.
fn by_rank<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    (0..tree.len()).filter_map(|i| tree.select(i).cloned()).collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && by_rank(&tree) == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn fuzz_multiple_operations_u16(ops: Vec<Op<u16>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    set.iter().all(|x| tree.contains(x) && tree.select(tree.rank(x)) == Some(x))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn duplicates_never_grow(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let len = tree.len();
    for x in &xs {
        tree.insert(*x);
    }

    len == xs.iter().collect::<HashSet<_>>().len() && tree.len() == len
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
        tree.fully_validate();
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn select_is_strictly_increasing(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let sorted = by_rank(&tree);

    sorted.len() == tree.len()
        && sorted.windows(2).all(|w| w[0] < w[1])
        && tree.select(0) == tree.min()
        && tree.select(tree.len().wrapping_sub(1)) == tree.max()
}

#[quickcheck]
fn pop_min_drains_sorted(xs: Vec<i16>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let expected: Vec<_> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

    let drained: Vec<_> = std::iter::from_fn(|| tree.pop_min()).collect();
    drained == expected && tree.is_empty() && tree.min().is_none() && tree.select(0).is_none()
}

#[quickcheck]
fn pop_max_drains_reverse_sorted(xs: Vec<i16>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let expected: Vec<_> = xs
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .collect();

    let drained: Vec<_> = std::iter::from_fn(|| tree.pop_max()).collect();
    drained == expected && tree.is_empty() && tree.max().is_none() && tree.select(0).is_none()
}
