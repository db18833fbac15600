use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use linkedbst::Tree;

/// Builds a tree by adding values in ascending order, which leaves it as a chain.
fn degenerate_tree(num_nodes: usize) -> Tree<i32> {
    (0..num_nodes as i32).collect()
}

/// Same contents as [`degenerate_tree`] but rebuilt with minimal height.
fn rebalanced_tree(num_nodes: usize) -> Tree<i32> {
    let mut tree = degenerate_tree(num_nodes);
    tree.rebalance();
    tree
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11] {
        let num_nodes = 2usize.pow(num_levels as u32) - 1;
        let largest_element_in_tree = num_nodes - 1;

        let tree_tests = [
            ("degenerate", degenerate_tree(num_nodes)),
            ("rebalanced", rebalanced_tree(num_nodes)),
        ];
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree as i32));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _item = black_box(tree.find(&i));
    });
    bench_helper(c, "remove", |tree, i| {
        let _item = black_box(tree.remove(&i));
    });

    bench_helper(c, "add", |tree, i| {
        tree.add(i + 1);
    });

    bench_helper(c, "find-miss", |tree, i| {
        let _item = black_box(tree.find(&(i + 1)));
    });
    bench_helper(c, "rebalance", |tree, _| {
        tree.rebalance();
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
