use linkedbst::{Error, Tree};

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and to a map counting how many
/// copies of each item were added. Every `remove` must agree with the map.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, counts: &mut BTreeMap<T, usize>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Add(x) => {
                bst.add(x.clone());
                *counts.entry(x.clone()).or_default() += 1;
            }
            Op::Remove(x) => match counts.get_mut(x) {
                Some(count) => {
                    assert_eq!(bst.remove(x).as_ref(), Ok(x));
                    *count -= 1;
                    if *count == 0 {
                        counts.remove(x);
                    }
                }
                None => assert_eq!(bst.remove(x), Err(Error::KeyNotPresent)),
            },
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut counts = BTreeMap::new();

        do_ops(&ops, &mut tree, &mut counts);

        let expected = counts
            .iter()
            .flat_map(|(x, count)| std::iter::repeat_n(x, *count));
        tree.inorder().eq(expected) && tree.len() == counts.values().sum::<usize>()
    }
}

quickcheck::quickcheck! {
    fn inorder_is_sorted(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let mut sorted = xs;
        sorted.sort();

        tree.inorder().eq(sorted.iter()) && tree.len() == sorted.len()
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none() && !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            // We may have added the same value multiple times - remove each one.
            while tree.remove(delete).is_ok() {}
        }

        let mut still_present = xs;
        still_present.retain(|x| !deletes.contains(x));

        deletes.iter().all(|x| tree.find(x).is_none())
            && still_present.iter().all(|x| tree.find(x).is_some())
            && tree.len() == still_present.len()
    }
}

quickcheck::quickcheck! {
    fn rebalanced_is_balanced(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        tree.rebalance();

        xs.is_empty() || tree.is_balanced()
    }
}

quickcheck::quickcheck! {
    fn range_find_matches_filter(xs: Vec<i8>, low: i8, high: i8) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let mut expected: Vec<_> = xs.iter().filter(|x| low <= **x && **x <= high).collect();
        expected.sort();

        tree.range_find(&low, &high) == expected
    }
}
