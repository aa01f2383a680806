use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use convex2d::algorithms::convex_hull;
use convex2d::sampling::{sample_points, PointDistribution};

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0);
  let uniform = PointDistribution::Uniform {
    min: -1000.0,
    max: 1000.0,
  };
  for &n in &[100, 1_000, 10_000] {
    let pts = sample_points(&uniform, n, &mut rng);
    c.bench_function(&format!("convex_hull({})", n), |b| {
      b.iter_batched(|| pts.clone(), convex_hull, BatchSize::LargeInput)
    });
  }
  let normal = PointDistribution::Normal {
    mean: 0.0,
    std_dev: 100.0,
  };
  let pts = sample_points(&normal, 10_000, &mut rng);
  c.bench_function("convex_hull(normal, 10000)", |b| {
    b.iter_batched(|| pts.clone(), convex_hull, BatchSize::LargeInput)
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
