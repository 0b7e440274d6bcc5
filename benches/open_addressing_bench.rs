use collide::{BuildHasherStrategy, LinearProbe, OpenAddressingTable, QuadraticProbe};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

type Triangular = OpenAddressingTable<String, u64, BuildHasherStrategy, QuadraticProbe>;
type Linear = OpenAddressingTable<String, u64, BuildHasherStrategy, LinearProbe>;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn triangular(capacity: usize) -> Triangular {
    OpenAddressingTable::new(
        capacity,
        BuildHasherStrategy::new(),
        QuadraticProbe::triangular(),
        0.75,
    )
}

fn linear(capacity: usize) -> Linear {
    OpenAddressingTable::new(capacity, BuildHasherStrategy::new(), LinearProbe::new(1, 0), 0.5)
}

fn filled(seed: u64, n: usize) -> (Triangular, Vec<String>) {
    let mut t = triangular(16);
    let keys: Vec<String> = lcg(seed).take(n).map(key).collect();
    for (i, k) in keys.iter().enumerate() {
        t.insert(k.clone(), i as u64).unwrap();
    }
    (t, keys)
}

// 10k indices into `0..n`, spread by a second LCG
fn queries(n: usize) -> Vec<usize> {
    let mut s = 0x9e3779b97f4a7c15u64;
    (0..10_000)
        .map(|_| {
            s = s.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
            (s as usize) % n
        })
        .collect()
}

fn bench_insert_growing_100k(c: &mut Criterion) {
    c.bench_function("open::triangular_insert_growing_100k", |b| {
        b.iter_batched(
            || triangular(16),
            |mut t| {
                for (i, x) in lcg(1).take(100_000).enumerate() {
                    t.insert(key(x), i as u64).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("open::linear_insert_growing_100k", |b| {
        b.iter_batched(
            || linear(16),
            |mut t| {
                for (i, x) in lcg(1).take(100_000).enumerate() {
                    t.insert(key(x), i as u64).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_insert_presized_100k(c: &mut Criterion) {
    c.bench_function("open::triangular_insert_presized_100k", |b| {
        b.iter_batched(
            || triangular(1 << 18),
            |mut t| {
                for (i, x) in lcg(3).take(100_000).enumerate() {
                    t.insert(key(x), i as u64).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_find_hit_10k(c: &mut Criterion) {
    c.bench_function("open::find_hit_10k_on_100k", |b| {
        let (mut t, keys) = filled(7, 100_000);
        let qs: Vec<String> = queries(keys.len()).into_iter().map(|i| keys[i].clone()).collect();
        b.iter(|| {
            for k in &qs {
                black_box(t.find(k).map(|f| f.location));
            }
        })
    });
}

fn bench_find_miss_10k(c: &mut Criterion) {
    c.bench_function("open::find_miss_10k_on_100k", |b| {
        let (mut t, _) = filled(11, 100_000);
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            for _ in 0..10_000 {
                let k = key(miss.next().unwrap());
                black_box(t.find(&k).is_some());
            }
        })
    });
}

fn bench_remove_then_lookup_10k(c: &mut Criterion) {
    c.bench_function("open::remove_10k_then_lookup_rest", |b| {
        b.iter_batched(
            || {
                let (t, keys) = filled(5, 100_000);
                let doomed: Vec<String> =
                    queries(keys.len()).into_iter().map(|i| keys[i].clone()).collect();
                (t, keys, doomed)
            },
            |(mut t, keys, doomed)| {
                for k in &doomed {
                    let _ = t.remove(k);
                }
                // lookups now walk past tombstones and relocate entries
                for k in keys.iter().take(10_000) {
                    black_box(t.find(k).is_some());
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_resize_with_tombstones(c: &mut Criterion) {
    c.bench_function("open::resize_100k_with_10k_tombstones", |b| {
        b.iter_batched(
            || {
                let (mut t, keys) = filled(13, 100_000);
                for i in queries(keys.len()) {
                    let _ = t.remove(&keys[i]);
                }
                t
            },
            |mut t| {
                let capacity = t.capacity();
                t.resize(capacity);
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(12)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches_insert;
    config = bench_config();
    targets = bench_insert_growing_100k, bench_insert_presized_100k
}
criterion_group! {
    name = benches_ops;
    config = bench_config();
    targets = bench_find_hit_10k,
              bench_find_miss_10k,
              bench_remove_then_lookup_10k,
              bench_resize_with_tombstones
}
criterion_main!(benches_insert, benches_ops);
