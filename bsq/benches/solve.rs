use bsq_core::{parse_bytes, solve, Map};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_map(size: usize, density: f64) -> Map {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut data = format!("{size}.ox\n").into_bytes();
    for _ in 0..size {
        for _ in 0..size {
            data.push(if rng.gen_bool(density) { b'o' } else { b'.' });
        }
        data.push(b'\n');
    }
    parse_bytes(&data).expect("generated map is valid")
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for size in [100, 500, 1000] {
        let map = random_map(size, 0.05);
        group.bench_with_input(BenchmarkId::from_parameter(size), &map, |b, map| {
            b.iter(|| solve(black_box(map)))
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let map = random_map(1000, 0.05);
    let mut data = format!("{}.ox\n", map.rows()).into_bytes();
    data.extend_from_slice(&map.to_bytes());
    c.bench_function("parse_1000", |b| b.iter(|| parse_bytes(black_box(&data))));
}

criterion_group!(benches, bench_solve, bench_parse);
criterion_main!(benches);
