use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use robust_regression::test_data::contaminated;
use robust_regression::{CrudeLms, FastLms, LeastSquares, LineFit, LineFitter};

fn sample(n: usize) -> (Vec<f64>, Vec<f64>) {
    contaminated(LineFit::new(1.0, 0.5), LineFit::new(10.0, -1.0), n, 0.3, 42).unwrap()
}

fn bench_lms(c: &mut Criterion) {
    let mut group = c.benchmark_group("LMS");
    let crude = CrudeLms::new();
    let fast = FastLms::new();

    for size in [10, 25, 50] {
        let (x, y) = sample(size);
        group.bench_with_input(BenchmarkId::new("crude", size), &(x, y), |b, (x, y)| {
            b.iter(|| crude.fit(black_box(x), black_box(y)))
        });
    }

    for size in [10, 25, 50, 100, 200] {
        let (x, y) = sample(size);
        group.bench_with_input(BenchmarkId::new("fast", size), &(x, y), |b, (x, y)| {
            b.iter(|| fast.fit(black_box(x), black_box(y)))
        });
    }

    group.finish();
}

#[cfg(feature = "parallel")]
fn bench_parallel(c: &mut Criterion) {
    use robust_core::execution::parallel;

    let mut group = c.benchmark_group("LMS parallel");
    let fast = FastLms::with_engine(parallel());
    for size in [100, 200, 400] {
        let (x, y) = sample(size);
        group.bench_with_input(BenchmarkId::new("fast", size), &(x, y), |b, (x, y)| {
            b.iter(|| fast.fit(black_box(x), black_box(y)))
        });
    }
    group.finish();
}

fn bench_least_squares(c: &mut Criterion) {
    let mut group = c.benchmark_group("LeastSquares");
    let ols = LeastSquares::new();
    for size in [100, 1000, 10000] {
        let (x, y) = sample(size);
        group.bench_with_input(BenchmarkId::new("closed_form", size), &(x, y), |b, (x, y)| {
            b.iter(|| ols.fit(black_box(x), black_box(y)))
        });
    }
    group.finish();
}

#[cfg(feature = "parallel")]
criterion_group!(benches, bench_lms, bench_parallel, bench_least_squares);
#[cfg(not(feature = "parallel"))]
criterion_group!(benches, bench_lms, bench_least_squares);
criterion_main!(benches);
