use bststore::{BstRecordStore, LinearRecordStore, Record};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn random_keys(rng: &mut StdRng, count: usize) -> Vec<String> {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    (0..count)
        .map(|_| {
            (0..10)
                .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
                .collect()
        })
        .collect()
}

fn records_for(keys: &[String]) -> Vec<Record> {
    keys.iter()
        .enumerate()
        .map(|(i, key)| Record::new(key, &format!("Name{}", i), &format!("contact{}@test.com", i)))
        .collect()
}

fn insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    let mut rng = StdRng::seed_from_u64(7);

    for &size in &[100usize, 1_000, 10_000] {
        let keys = random_keys(&mut rng, size);
        let records = records_for(&keys);

        group.bench_with_input(BenchmarkId::new("bst", size), &records, |b, records| {
            b.iter(|| {
                let mut store = BstRecordStore::new(true);
                for record in records {
                    store.insert(black_box(record.clone())).unwrap();
                }
                black_box(store.len());
            })
        });

        group.bench_with_input(BenchmarkId::new("linear", size), &records, |b, records| {
            b.iter(|| {
                let mut store = LinearRecordStore::new(true);
                for record in records {
                    store.insert(black_box(record.clone())).unwrap();
                }
                black_box(store.len());
            })
        });
    }

    group.finish();
}

fn find_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    let mut rng = StdRng::seed_from_u64(11);

    for &size in &[100usize, 1_000, 10_000] {
        let keys = random_keys(&mut rng, size);
        let records = records_for(&keys);

        let mut bst = BstRecordStore::new(true);
        let mut linear = LinearRecordStore::new(true);
        for record in &records {
            bst.insert(record.clone()).unwrap();
            linear.insert(record.clone()).unwrap();
        }

        let probe_count = size.min(1_000);
        let probes: Vec<&String> = keys.choose_multiple(&mut rng, probe_count).collect();

        group.bench_with_input(BenchmarkId::new("bst", size), &probes, |b, probes| {
            b.iter(|| {
                for key in probes.iter() {
                    black_box(bst.find(black_box(key)));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("linear", size), &probes, |b, probes| {
            b.iter(|| {
                for key in probes.iter() {
                    black_box(linear.find(black_box(key)));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, insert_benchmark, find_benchmark);
criterion_main!(benches);
