//! Random point sets for demos, tests and benchmarks.
//!
//! All sampling takes an explicit random source. Seed a
//! [`SmallRng`](rand::rngs::SmallRng) for reproducible output.
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use std::f64::consts::TAU;

use crate::data::Point;

/// Per-axis distribution of sampled coordinates. Both axes are independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointDistribution {
  /// Uniform on the half-open range `[min, max)`.
  Uniform { min: f64, max: f64 },
  /// Gaussian with the given mean and standard deviation.
  Normal { mean: f64, std_dev: f64 },
}

impl Default for PointDistribution {
  fn default() -> PointDistribution {
    PointDistribution::Uniform { min: 0.0, max: 1.0 }
  }
}

impl Distribution<Point> for PointDistribution {
  /// # Panics
  /// Panics if a uniform range is empty or not finite, or if the standard
  /// deviation is negative or not finite.
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    match *self {
      PointDistribution::Uniform { min, max } => {
        assert!(
          min < max && min.is_finite() && max.is_finite(),
          "invalid uniform range [{}, {})",
          min,
          max
        );
        let axis = Uniform::new(min, max);
        Point::new([axis.sample(rng), axis.sample(rng)])
      }
      PointDistribution::Normal { mean, std_dev } => {
        assert!(
          std_dev >= 0.0 && std_dev.is_finite(),
          "invalid standard deviation {}",
          std_dev
        );
        let [x, y] = standard_normal_pair(rng);
        Point::new([mean + std_dev * x, mean + std_dev * y])
      }
    }
  }
}

// Box-Muller transform. Two independent standard normal samples.
fn standard_normal_pair<R: Rng + ?Sized>(rng: &mut R) -> [f64; 2] {
  // 1 - [0, 1) keeps the logarithm finite.
  let u1: f64 = 1.0 - rng.gen::<f64>();
  let u2: f64 = rng.gen();
  let radius = (-2.0 * u1.ln()).sqrt();
  let theta = TAU * u2;
  [radius * theta.cos(), radius * theta.sin()]
}

/// Draw `n` points from `distribution`.
///
/// ```rust
/// # use convex2d::sampling::{sample_points, PointDistribution};
/// # use rand::rngs::SmallRng;
/// # use rand::SeedableRng;
/// let mut rng = SmallRng::seed_from_u64(42);
/// let dist = PointDistribution::Uniform { min: -10.0, max: 10.0 };
/// let pts = sample_points(&dist, 100, &mut rng);
/// assert_eq!(pts.len(), 100);
/// assert!(pts.iter().all(|pt| (-10.0..10.0).contains(&pt.x_coord())));
/// ```
pub fn sample_points<R>(distribution: &PointDistribution, n: usize, rng: &mut R) -> Vec<Point>
where
  R: Rng + ?Sized,
{
  distribution.sample_iter(rng).take(n).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  use rand::rngs::SmallRng;
  use rand::SeedableRng;

  #[test]
  fn seeded_is_reproducible() {
    let dist = PointDistribution::Normal {
      mean: 0.0,
      std_dev: 10.0,
    };
    let a = sample_points(&dist, 50, &mut SmallRng::seed_from_u64(3));
    let b = sample_points(&dist, 50, &mut SmallRng::seed_from_u64(3));
    assert_eq!(a, b);
  }

  #[test]
  fn uniform_in_range() {
    let mut rng = SmallRng::seed_from_u64(4);
    let dist = PointDistribution::Uniform {
      min: -5.0,
      max: 5.0,
    };
    for pt in sample_points(&dist, 1000, &mut rng) {
      assert!((-5.0..5.0).contains(&pt.x_coord()));
      assert!((-5.0..5.0).contains(&pt.y_coord()));
    }
  }

  #[test]
  fn normal_moments() {
    let mut rng = SmallRng::seed_from_u64(5);
    let dist = PointDistribution::Normal {
      mean: 3.0,
      std_dev: 2.0,
    };
    let pts = sample_points(&dist, 20_000, &mut rng);
    let n = pts.len() as f64;
    let mean_x = pts.iter().map(|pt| pt.x_coord()).sum::<f64>() / n;
    let var_y = pts
      .iter()
      .map(|pt| (pt.y_coord() - 3.0).powi(2))
      .sum::<f64>()
      / n;
    assert!((mean_x - 3.0).abs() < 0.1, "mean {}", mean_x);
    assert!((var_y - 4.0).abs() < 0.3, "variance {}", var_y);
  }

  #[test]
  fn zero_std_dev_is_constant() {
    let mut rng = SmallRng::seed_from_u64(6);
    let dist = PointDistribution::Normal {
      mean: 1.5,
      std_dev: 0.0,
    };
    assert!(sample_points(&dist, 10, &mut rng)
      .iter()
      .all(|pt| *pt == Point::new([1.5, 1.5])));
  }

  #[test]
  #[should_panic]
  fn empty_uniform_range() {
    let mut rng = SmallRng::seed_from_u64(7);
    let dist = PointDistribution::Uniform { min: 1.0, max: 1.0 };
    sample_points(&dist, 1, &mut rng);
  }
}
