use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;

use ordmap::OrderedMap;
use std::collections::HashMap;
use std::sync::RwLock;

// Benchmarking module for OrderedMap.
// These benchmarks are not exhaustive, and they focus on KPIs like set, get, shift_remove, etc.
// To run benchmarks, use the following command:
// cargo bench --bench benchmarks

fn bench_set(c: &mut Criterion) {
    c.bench_function("OrderedMap, N=1e4, set", |b| {
        let map = OrderedMap::new();
        b.iter(|| {
            for i in 0..10_000 {
                black_box(map.set(i, i));
            }
        })
    });
}

fn bench_set_unguarded(c: &mut Criterion) {
    c.bench_function("OrderedMap unguarded, N=1e4, set", |b| {
        let map = OrderedMap::new_unguarded();
        b.iter(|| {
            for i in 0..10_000 {
                black_box(map.set(i, i));
            }
        })
    });
}

fn bench_set_rwlock_hashmap(c: &mut Criterion) {
    c.bench_function("RwLock<HashMap>, N=1e4, insert", |b| {
        let map = RwLock::new(HashMap::new());
        b.iter(|| {
            for i in 0..10_000 {
                black_box(map.write().unwrap().insert(i, i));
            }
        })
    });
}

fn bench_bulk_set(c: &mut Criterion) {
    c.bench_function("OrderedMap, N=1e4, bulk_set", |b| {
        b.iter_batched(
            OrderedMap::new,
            |map| {
                map.bulk_set((0..10_000).map(|i| (i, i)));
                map
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_set_then_get(c: &mut Criterion) {
    c.bench_function("OrderedMap, N=100, set+get", |b| {
        let map = OrderedMap::new();
        b.iter(|| {
            for i in 0..100 {
                map.set(i, i * 2);
                black_box(map.get(&i));
            }
        })
    });
}

fn bench_set_then_get_unguarded(c: &mut Criterion) {
    c.bench_function("OrderedMap unguarded, N=100, set+get", |b| {
        let map = OrderedMap::new_unguarded();
        b.iter(|| {
            for i in 0..100 {
                map.set(i, i * 2);
                black_box(map.get(&i));
            }
        })
    });
}

fn bench_get(c: &mut Criterion) {
    let map = OrderedMap::new();
    for i in 0..10_000 {
        map.set(i, i);
    }
    c.bench_function("OrderedMap, N=1e4, get", |b| {
        b.iter(|| {
            black_box(map.get(&5000));
        })
    });
}

fn bench_get_hashmap(c: &mut Criterion) {
    let mut map = HashMap::new();
    for i in 0..10_000 {
        map.insert(i, i);
    }
    c.bench_function("HashMap, N=1e4, get", |b| {
        b.iter(|| {
            black_box(map.get(&5000));
        })
    });
}

fn bench_index_of(c: &mut Criterion) {
    let map = OrderedMap::new();
    for i in 0..10_000 {
        map.set(i, i);
    }
    c.bench_function("OrderedMap, N=1e4, index_of", |b| {
        b.iter(|| {
            black_box(map.index_of(&5000));
        })
    });
}

fn bench_shift_remove(c: &mut Criterion) {
    c.bench_function("OrderedMap, N=1e4, shift_remove at N/2", |b| {
        b.iter_batched(
            || {
                let map = OrderedMap::new();
                map.bulk_set((0..10_000).map(|i| (i, i)));
                map
            },
            |map| {
                black_box(map.shift_remove(&5000));
                map
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_shift_remove_tail(c: &mut Criterion) {
    c.bench_function("OrderedMap, N=1e4, shift_remove at N-10", |b| {
        b.iter_batched(
            || {
                let map = OrderedMap::new();
                map.bulk_set((0..10_000).map(|i| (i, i)));
                map
            },
            |map| {
                black_box(map.shift_remove(&9_990));
                map
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_remove_hashmap(c: &mut Criterion) {
    c.bench_function("HashMap, N=1e4, remove at N/2", |b| {
        b.iter_batched(
            || (0..10_000).map(|i| (i, i)).collect::<HashMap<_, _>>(),
            |mut map| {
                black_box(map.remove(&5000));
                map
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_iter(c: &mut Criterion) {
    let map = OrderedMap::new();
    for i in 0..10_000 {
        map.set(i, i);
    }
    c.bench_function("OrderedMap, N=1e4, iter", |b| {
        b.iter(|| {
            for entry in map.iter() {
                black_box(entry);
            }
        })
    });
}

fn bench_entries(c: &mut Criterion) {
    let map = OrderedMap::new();
    for i in 0..10_000 {
        map.set(i, i);
    }
    c.bench_function("OrderedMap, N=1e4, entries snapshot", |b| {
        b.iter(|| {
            black_box(map.entries());
        })
    });
}

fn bench_reserve(c: &mut Criterion) {
    c.bench_function("OrderedMap, reserve 1e4", |b| {
        b.iter_batched(
            OrderedMap::<usize, usize>::new,
            |map| {
                map.reserve(10_000);
                map
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches_set_get,
    bench_set,
    bench_set_unguarded,
    bench_set_rwlock_hashmap,
    bench_bulk_set,
    bench_set_then_get,
    bench_set_then_get_unguarded,
    bench_get,
    bench_get_hashmap,
    bench_index_of,
);

criterion_group!(
    benches_remove_ops,
    bench_shift_remove,
    bench_shift_remove_tail,
    bench_remove_hashmap,
);

criterion_group!(benches_traversal, bench_iter, bench_entries, bench_reserve);

criterion_main!(benches_set_get, benches_remove_ops, benches_traversal);
