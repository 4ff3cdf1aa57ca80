use criterion::{black_box, criterion_group, criterion_main, Criterion};
use probe_table::{HashKind, Probing, ProbingHashTable, TableConfig};

const TABLE_SIZE: usize = 4093;
// fill to three quarters so collisions show up
const ITEMS: u32 = 3069;

fn fill(config: TableConfig) -> ProbingHashTable<u32> {
    let mut m = ProbingHashTable::with_config(config);
    for x in 0..ITEMS {
        let _ = m.insert(x);
    }
    m
}

fn bench_insert_find(c: &mut Criterion) {
    for probing in [Probing::Linear, Probing::Quadratic] {
        for hash in [HashKind::CharSum, HashKind::Mixed] {
            let config = TableConfig::new(TABLE_SIZE, 6, probing)
                .unwrap()
                .with_hash(hash);
            c.bench_function(&format!("insert {:?} {:?}", probing, hash), |b| {
                b.iter(|| fill(black_box(config)))
            });
            let m = fill(config);
            c.bench_function(&format!("find {:?} {:?}", probing, hash), |b| {
                b.iter(|| (0..ITEMS).filter(|x| m.contains(black_box(x))).count())
            });
        }
    }
}

criterion_group!(benches, bench_insert_find);
criterion_main!(benches);
