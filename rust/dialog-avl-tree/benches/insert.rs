use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use dialog_avl_tree::Tree;
use rand::{SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

const BENCH_SEED: u64 = 42;

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    let mut rng = ChaCha8Rng::seed_from_u64(BENCH_SEED);

    for size in [10, 100, 1000, 10000] {
        let mut keys: Vec<u64> = (0..size).collect();
        keys.shuffle(&mut rng);

        group.bench_with_input(BenchmarkId::new("shuffled", size), &keys, |b, keys| {
            b.iter_batched(
                Tree::new,
                |mut tree| {
                    for key in keys {
                        tree.insert(*key, *key).unwrap();
                    }
                    tree
                },
                BatchSize::SmallInput,
            );
        });

        // Ascending keys force a rotation on most insertions
        group.bench_with_input(BenchmarkId::new("ascending", size), &size, |b, size| {
            b.iter_batched(
                Tree::new,
                |mut tree| {
                    for key in 0..*size {
                        tree.insert(key, key).unwrap();
                    }
                    tree
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert);
criterion_main!(benches);
