use alloc::format;
use core::hash::BuildHasherDefault;
use core::hash::Hash;
use core::hint::black_box;

use chain_hash::HashMap as ChainHashMap;
use criterion::AxisScale;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::HashMap as HashbrownHashMap;
use rand::Rng;
use rand::SeedableRng;
use rand::TryRngCore;
use rand::distr;
use rand::rngs::OsRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand_distr::Zipf;
use siphasher::sip::SipHasher;
use std::collections::HashMap as StdHashMap;

extern crate alloc;

type SipBuildHasher = BuildHasherDefault<SipHasher>;

trait BenchKey: Clone + Hash + Eq {
    fn new(key: u64) -> Self;
}

impl BenchKey for u64 {
    fn new(key: u64) -> Self {
        black_box(key)
    }
}

impl BenchKey for String {
    fn new(key: u64) -> Self {
        black_box(format!("key_{:016X}", key))
    }
}

const SIZES: &[usize] = &[
    (1 << 10),
    (1 << 11),
    (1 << 12),
    (1 << 13),
    (1 << 14),
    (1 << 15),
    (1 << 16),
];

#[derive(Clone, Copy)]
enum Operation {
    Insert,
    Find,
    Erase,
}

fn random_keys<K: BenchKey>(count: usize) -> Vec<K> {
    let mut rng = OsRng;
    (0..count)
        .map(|_| K::new(rng.try_next_u64().unwrap()))
        .collect()
}

fn filled_chain<K: BenchKey>(keys: &[K]) -> ChainHashMap<K, u64, SipBuildHasher> {
    let mut map = ChainHashMap::new();
    for (i, key) in keys.iter().enumerate() {
        map.insert(key.clone(), i as u64);
    }
    map
}

fn filled_hashbrown<K: BenchKey>(keys: &[K]) -> HashbrownHashMap<K, u64, SipBuildHasher> {
    let mut map = HashbrownHashMap::default();
    for (i, key) in keys.iter().enumerate() {
        map.insert(key.clone(), i as u64);
    }
    map
}

fn filled_std<K: BenchKey>(keys: &[K]) -> StdHashMap<K, u64, SipBuildHasher> {
    let mut map = StdHashMap::default();
    for (i, key) in keys.iter().enumerate() {
        map.insert(key.clone(), i as u64);
    }
    map
}

fn bench_insert_random<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("insert_random_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<K>(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut keys = keys.clone();
                    keys.shuffle(&mut SmallRng::from_os_rng());
                    keys
                },
                |keys| {
                    let mut map = ChainHashMap::<K, u64, SipBuildHasher>::new();
                    for (i, key) in keys.into_iter().enumerate() {
                        black_box(map.insert(key, i as u64));
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut keys = keys.clone();
                    keys.shuffle(&mut SmallRng::from_os_rng());
                    keys
                },
                |keys| {
                    let mut map = HashbrownHashMap::<K, u64, SipBuildHasher>::default();
                    for (i, key) in keys.into_iter().enumerate() {
                        black_box(map.entry(key).or_insert(i as u64));
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("std/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut keys = keys.clone();
                    keys.shuffle(&mut SmallRng::from_os_rng());
                    keys
                },
                |keys| {
                    let mut map = StdHashMap::<K, u64, SipBuildHasher>::default();
                    for (i, key) in keys.into_iter().enumerate() {
                        black_box(map.entry(key).or_insert(i as u64));
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_find_hit<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("find_hit_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<K>(*size);
        let mut probes = keys.clone();
        probes.shuffle(&mut SmallRng::from_os_rng());

        let chain = filled_chain(&keys);
        let brown = filled_hashbrown(&keys);
        let std = filled_std(&keys);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter(|| {
                for key in probes.iter() {
                    black_box(chain.get(key));
                }
            })
        });
        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for key in probes.iter() {
                    black_box(brown.get(key));
                }
            })
        });
        group.bench_function(format!("std/{size}"), |b| {
            b.iter(|| {
                for key in probes.iter() {
                    black_box(std.get(key));
                }
            })
        });
    }

    group.finish();
}

fn bench_find_miss<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("find_miss_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<K>(*size);
        let misses = random_keys::<K>(*size);

        let chain = filled_chain(&keys);
        let brown = filled_hashbrown(&keys);
        let std = filled_std(&keys);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter(|| {
                for key in misses.iter() {
                    black_box(chain.contains_key(key));
                }
            })
        });
        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for key in misses.iter() {
                    black_box(brown.contains_key(key));
                }
            })
        });
        group.bench_function(format!("std/{size}"), |b| {
            b.iter(|| {
                for key in misses.iter() {
                    black_box(std.contains_key(key));
                }
            })
        });
    }

    group.finish();
}

fn bench_erase<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("erase_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<K>(*size);
        let mut order = keys.clone();
        order.shuffle(&mut SmallRng::from_os_rng());

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter_batched(
                || filled_chain(&keys),
                |mut map| {
                    for key in order.iter() {
                        black_box(map.erase(key));
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || filled_hashbrown(&keys),
                |mut map| {
                    for key in order.iter() {
                        black_box(map.remove(key));
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("std/{size}"), |b| {
            b.iter_batched(
                || filled_std(&keys),
                |mut map| {
                    for key in order.iter() {
                        black_box(map.remove(key));
                    }
                    black_box(map)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_iteration<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("iteration_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES[..=MAX_SIZE].iter() {
        let keys = random_keys::<K>(*size);
        let chain = filled_chain(&keys);
        let brown = filled_hashbrown(&keys);
        let std = filled_std(&keys);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter(|| black_box(chain.values().sum::<u64>()))
        });
        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| black_box(brown.values().sum::<u64>()))
        });
        group.bench_function(format!("std/{size}"), |b| {
            b.iter(|| black_box(std.values().sum::<u64>()))
        });
    }

    group.finish();
}

/// Half finds, a quarter inserts, a quarter erases, with keys drawn from a
/// Zipf distribution over twice the table size so hot keys churn.
fn bench_mixed_zipf<K: BenchKey, const MAX_SIZE: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("mixed_zipf_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    const KEY_SPACE_MULTIPLIER: usize = 2;

    for size in SIZES[..=MAX_SIZE].iter() {
        let mut rng = SmallRng::from_os_rng();
        let key_distr = Zipf::new((*size * KEY_SPACE_MULTIPLIER) as f32 - 1.0, 1.0).unwrap();

        let operations = (0..*size * 3)
            .map(|_| {
                let op_choice: f64 = rng.sample(distr::Uniform::new(0.0, 1.0).unwrap());
                let key = K::new(rng.sample(key_distr) as u64);
                if op_choice < 0.5 {
                    (Operation::Find, key)
                } else if op_choice < 0.75 {
                    (Operation::Insert, key)
                } else {
                    (Operation::Erase, key)
                }
            })
            .collect::<Vec<(Operation, K)>>();

        group.throughput(Throughput::Elements(operations.len() as u64));
        group.bench_function(format!("chain_hash/{size}"), |b| {
            b.iter(|| {
                let mut map = ChainHashMap::<K, u64, SipBuildHasher>::new();
                for (operation, key) in operations.iter() {
                    match operation {
                        Operation::Insert => black_box(map.insert(key.clone(), 0)),
                        Operation::Find => black_box(map.contains_key(key)),
                        Operation::Erase => black_box(map.erase(key)),
                    };
                }
                black_box(map)
            })
        });
        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                let mut map = HashbrownHashMap::<K, u64, SipBuildHasher>::default();
                for (operation, key) in operations.iter() {
                    match operation {
                        Operation::Insert => {
                            black_box(map.entry(key.clone()).or_insert(0));
                        }
                        Operation::Find => {
                            black_box(map.contains_key(key));
                        }
                        Operation::Erase => {
                            black_box(map.remove(key));
                        }
                    }
                }
                black_box(map)
            })
        });
        group.bench_function(format!("std/{size}"), |b| {
            b.iter(|| {
                let mut map = StdHashMap::<K, u64, SipBuildHasher>::default();
                for (operation, key) in operations.iter() {
                    match operation {
                        Operation::Insert => {
                            black_box(map.entry(key.clone()).or_insert(0));
                        }
                        Operation::Find => {
                            black_box(map.contains_key(key));
                        }
                        Operation::Erase => {
                            black_box(map.remove(key));
                        }
                    }
                }
                black_box(map)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_random::<u64, 6>,
    bench_insert_random::<String, 6>,
    bench_find_hit::<u64, 6>,
    bench_find_hit::<String, 6>,
    bench_find_miss::<u64, 6>,
    bench_find_miss::<String, 6>,
    bench_erase::<u64, 6>,
    bench_erase::<String, 6>,
    bench_iteration::<u64, 6>,
    bench_iteration::<String, 6>,
    bench_mixed_zipf::<u64, 6>,
    bench_mixed_zipf::<String, 6>,
);

criterion_main!(benches);
