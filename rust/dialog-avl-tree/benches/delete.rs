use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use dialog_avl_tree::Tree;
use rand::{SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

const BENCH_SEED: u64 = 42;

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");
    let mut rng = ChaCha8Rng::seed_from_u64(BENCH_SEED);

    for size in [10, 100, 1000, 10000] {
        let mut keys: Vec<u64> = (0..size).collect();
        keys.shuffle(&mut rng);

        // Setup: create a tree with data
        let tree = Tree::from_entries(keys.iter().map(|key| (*key, *key))).unwrap();
        keys.shuffle(&mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter_batched(
                || tree.clone(),
                |mut tree| {
                    for key in keys {
                        tree.erase(key).unwrap();
                    }
                    tree
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_delete);
criterion_main!(benches);
