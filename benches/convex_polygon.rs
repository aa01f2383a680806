use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use convex2d::algorithms::{convex_hull, do_intersect, point_in_polygon};
use convex2d::data::{ConvexPolygon, Point, Vector};
use convex2d::sampling::{sample_points, PointDistribution};

fn random_convex(n: usize, rng: &mut SmallRng) -> ConvexPolygon {
  let dist = PointDistribution::Normal {
    mean: 0.0,
    std_dev: 10.0,
  };
  convex_hull(sample_points(&dist, n, rng)).expect("random points are not colinear")
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(1);
  let small = random_convex(20, &mut rng);
  let large = random_convex(10_000, &mut rng);
  let origin = Point::new([0.0, 0.0]);

  c.bench_function(&format!("point_in_polygon({})", large.len()), |b| {
    b.iter(|| point_in_polygon(&origin, &large))
  });
  c.bench_function(&format!("ConvexPolygon::locate({})", large.len()), |b| {
    b.iter(|| large.locate(&origin))
  });
  c.bench_function("do_intersect(overlapping)", |b| {
    b.iter(|| do_intersect(&small, &large))
  });
  let far = small.translate(&Vector([1000.0, 0.0]));
  c.bench_function("do_intersect(disjoint)", |b| {
    b.iter(|| do_intersect(&far, &large))
  });
  c.bench_function("ConvexPolygon::intersects(overlapping)", |b| {
    b.iter(|| small.intersects(&large))
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
