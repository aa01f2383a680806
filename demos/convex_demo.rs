// Builds hulls of random point sets and prints their outlines as coordinate
// arrays, ready to paste into a plotting tool.
//
// Run with `RUST_LOG=convex2d=trace` to see the library's diagnostics.
use convex2d::algorithms::{convex_hull, do_intersect, point_in_polygon};
use convex2d::data::{ConvexPolygon, Point};
use convex2d::plotting::{point_coordinates, Coordinates};
use convex2d::sampling::{sample_points, PointDistribution};
use convex2d::Error;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const SEED: u64 = 0x5eed;

fn print_coordinates(label: &str, coords: &Coordinates) {
  println!("{}.xs = {:?}", label, coords.xs);
  println!("{}.ys = {:?}", label, coords.ys);
}

fn report(name: &str, points: &[Point], hull: &ConvexPolygon) {
  info!(
    scenario = name,
    points = points.len(),
    vertices = hull.len(),
    area = hull.signed_area(),
    "built convex hull"
  );
  print_coordinates(&format!("{}.polygon", name), &hull.to_coordinates());
  print_coordinates(&format!("{}.points", name), &point_coordinates(points));
}

// Square with a thousand random points scattered inside it.
fn square_with_random_points(rng: &mut SmallRng) -> Result<ConvexPolygon, Error> {
  let mut points = vec![
    Point::new([1.0, 1.0]),
    Point::new([-1.0, 1.0]),
    Point::new([-1.0, -1.0]),
    Point::new([1.0, -1.0]),
  ];
  let inside = PointDistribution::Uniform {
    min: -1.0,
    max: 1.0,
  };
  points.extend(sample_points(&inside, 1000, rng));
  let hull = convex_hull(points.clone())?;
  report("square", &points, &hull);
  let contained = points
    .iter()
    .map(|pt| point_in_polygon(pt, &hull))
    .collect::<Result<Vec<bool>, Error>>()?;
  if contained.iter().all(|&inside| inside) {
    info!("every sampled point is inside the hull");
  } else {
    warn!("some sampled points fall outside the hull");
  }
  Ok(hull)
}

fn random_hull(
  name: &str,
  distribution: PointDistribution,
  rng: &mut SmallRng,
) -> Result<ConvexPolygon, Error> {
  let points = sample_points(&distribution, 100, rng);
  let hull = convex_hull(points.clone())?;
  report(name, &points, &hull);
  Ok(hull)
}

fn main() -> Result<(), Error> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let mut rng = SmallRng::seed_from_u64(SEED);
  let square = square_with_random_points(&mut rng)?;
  let uniform = random_hull(
    "uniform",
    PointDistribution::Uniform {
      min: -2.0,
      max: 2.0,
    },
    &mut rng,
  )?;
  let normal = random_hull(
    "normal",
    PointDistribution::Normal {
      mean: 5.0,
      std_dev: 2.0,
    },
    &mut rng,
  )?;

  for (a, b, left, right) in [
    ("square", "uniform", &square, &uniform),
    ("square", "normal", &square, &normal),
    ("uniform", "normal", &uniform, &normal),
  ] {
    info!(a, b, intersect = do_intersect(left, right)?, "separating axis test");
  }
  Ok(())
}
