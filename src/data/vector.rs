use array_init::array_init;
use num_traits::Zero;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::iter::Sum;
use std::ops::Add;
use std::ops::Index;

use crate::data::Point;
use crate::Error;

/// A displacement in the plane.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Vector(pub [f64; 2]);

impl Distribution<Vector> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector {
    Vector(array_init(|_| rng.gen()))
  }
}

impl Vector {
  /// Displacement from the origin to `point`.
  pub fn from_point(point: &Point) -> Vector {
    Vector(point.array)
  }

  /// Displacement from `tail` to `head`.
  pub fn between(tail: &Point, head: &Point) -> Vector {
    head - tail
  }

  pub fn dot(&self, other: &Vector) -> f64 {
    self.0[0] * other.0[0] + self.0[1] * other.0[1]
  }

  pub fn squared_magnitude(&self) -> f64 {
    self.dot(self)
  }

  pub fn magnitude(&self) -> f64 {
    self.squared_magnitude().sqrt()
  }

  /// Rotate by 90 degrees counter-clockwise: `(x, y) -> (-y, x)`.
  #[must_use]
  pub fn perp(&self) -> Vector {
    Vector([-self.0[1], self.0[0]])
  }

  /// Scale to unit length.
  ///
  /// # Errors
  /// Returns [`Error::DegenerateVector`] if the magnitude is exactly zero.
  ///
  /// ```rust
  /// # use convex2d::data::Vector;
  /// # use convex2d::Error;
  /// assert_eq!(Vector([3.0, 4.0]).normalize(), Ok(Vector([0.6, 0.8])));
  /// assert_eq!(Vector([0.0, 0.0]).normalize(), Err(Error::DegenerateVector));
  /// ```
  pub fn normalize(&self) -> Result<Vector, Error> {
    let mut unit = *self;
    unit.normalize_mut()?;
    Ok(unit)
  }

  /// In-place version of [`Vector::normalize`]. On error `self` is left untouched.
  pub fn normalize_mut(&mut self) -> Result<(), Error> {
    let norm = self.magnitude();
    if norm == 0.0 {
      return Err(Error::DegenerateVector);
    }
    self.0[0] /= norm;
    self.0[1] /= norm;
    Ok(())
  }

  // Callers guarantee a non-zero magnitude.
  pub(crate) fn normalize_unchecked(&self) -> Vector {
    let norm = self.magnitude();
    debug_assert!(norm != 0.0);
    Vector(array_init(|i| self.0[i] / norm))
  }
}

impl Index<usize> for Vector {
  type Output = f64;
  fn index(&self, index: usize) -> &f64 {
    self.0.index(index)
  }
}

impl From<Point> for Vector {
  fn from(point: Point) -> Vector {
    Vector(point.array)
  }
}

impl<'a> From<&'a Point> for Vector {
  fn from(point: &'a Point) -> Vector {
    Vector::from_point(point)
  }
}

mod add;
mod mul;
mod sub;

impl Zero for Vector {
  fn zero() -> Vector {
    Vector(array_init(|_| Zero::zero()))
  }
  fn is_zero(&self) -> bool {
    self.0.iter().all(Zero::is_zero)
  }
}

impl Sum for Vector {
  fn sum<I>(iter: I) -> Vector
  where
    I: Iterator<Item = Vector>,
  {
    iter.fold(Vector::zero(), Add::add)
  }
}
