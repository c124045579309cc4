use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use smtx::{add, mul, SparseMatrix};

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize, nnz: usize) -> SparseMatrix {
    let mut matrix = SparseMatrix::new(rows, cols);
    while matrix.nnz() < nnz {
        let row = rng.gen_range(0..rows);
        let col = rng.gen_range(0..cols);
        let value = rng.gen_range(1..=100i64);
        matrix.set(row, col, value);
    }
    matrix
}

fn bench_ops(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let lhs = random_matrix(&mut rng, 1000, 1000, 5000);
    let rhs = random_matrix(&mut rng, 1000, 1000, 5000);

    c.bench_function("add_1000x1000_5k_nnz", |b| {
        b.iter(|| add(black_box(&lhs), black_box(&rhs)))
    });

    c.bench_function("mul_1000x1000_5k_nnz", |b| {
        b.iter(|| mul(black_box(&lhs), black_box(&rhs)).unwrap())
    });
}

criterion_group!(benches, bench_ops);
criterion_main!(benches);
