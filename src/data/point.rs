use array_init::array_init;
use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::ops::Deref;
use std::ops::Index;

use super::Vector;
use crate::{Error, Orientation};

/// A location in the plane.
///
/// Equality is exact, field-wise `f64` equality. There is no tolerance.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Point {
  pub array: [f64; 2],
}

// Random sampling.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl Point {
  pub const fn new(array: [f64; 2]) -> Point {
    Point { array }
  }

  pub fn x_coord(&self) -> f64 {
    self.array[0]
  }

  pub fn y_coord(&self) -> f64 {
    self.array[1]
  }

  pub fn as_vec(&self) -> Vector {
    Vector::from_point(self)
  }

  /// Euclidean distance. Never negative and zero iff the points are equal.
  pub fn distance(&self, rhs: &Point) -> f64 {
    self.squared_distance(rhs).sqrt()
  }

  pub fn squared_distance(&self, rhs: &Point) -> f64 {
    (rhs - self).squared_magnitude()
  }

  /// Compare the distances from `self` to `p` and from `self` to `q`.
  pub fn cmp_distance_to(&self, p: &Point, q: &Point) -> Ordering {
    self
      .squared_distance(p)
      .total_cmp(&self.squared_distance(q))
  }

  pub fn orientation(&self, q: &Point, r: &Point) -> Result<Orientation, Error> {
    Orientation::new(self, q, r)
  }

  /// Order `p` and `q` by counter-clockwise sweep around `self`.
  ///
  /// `p` sorts first if `self -> p -> q` turns counter-clockwise. If the three
  /// points are colinear the point nearer to `self` sorts first.
  ///
  /// This is a strict weak ordering as long as every compared point lies in
  /// the closed upper half-plane of `self` with points at the same height only
  /// to its right, which holds when `self` is the lowest (then leftmost)
  /// point of the set. Two distinct points colinear with `self` are then on
  /// the same ray and their distances differ.
  ///
  /// # Errors
  /// Returns [`Error::DegenerateTriple`] if `p`, `q` and `self` are not
  /// pairwise distinct.
  pub fn polar_cmp(&self, p: &Point, q: &Point) -> Result<Ordering, Error> {
    Ok(match Orientation::new(self, p, q)? {
      Orientation::CounterClockWise => Ordering::Less,
      Orientation::ClockWise => Ordering::Greater,
      Orientation::CoLinear => self.cmp_distance_to(p, q),
    })
  }

  /// Sort key for a counter-clockwise sweep around `self`, nearer points
  /// first on a shared ray.
  ///
  /// The first component is a pseudo-angle in `[0, 2]` which grows with the
  /// true angle of `pt - self` over the upper half-plane. Under the same
  /// conditions as [`Point::polar_cmp`] the two orders agree, except where
  /// floating point rounding makes `polar_cmp` inconsistent. Unlike
  /// `polar_cmp`, the key is a total order for every input, NaN included.
  ///
  /// ```rust
  /// # use convex2d::data::Point;
  /// let pivot = Point::new([0.0, 0.0]);
  /// let east = pivot.polar_key(&Point::new([1.0, 0.0]));
  /// let north = pivot.polar_key(&Point::new([0.0, 1.0]));
  /// let far_north = pivot.polar_key(&Point::new([0.0, 2.0]));
  /// assert!(east < north && north < far_north);
  /// ```
  pub fn polar_key(&self, pt: &Point) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
    let d = pt - self;
    let angle = 1.0 - d.0[0] / (d.0[0].abs() + d.0[1]);
    (OrderedFloat(angle), OrderedFloat(d.squared_magnitude()))
  }

  /// `true` iff `p` comes before `q` when sweeping counter-clockwise around
  /// `self`. Equidistant colinear points never occur for distinct inputs, so
  /// this is `polar_cmp(p, q) == Less`.
  pub fn polar_compare(&self, p: &Point, q: &Point) -> Result<bool, Error> {
    Ok(self.polar_cmp(p, q)? == Ordering::Less)
  }

  /// Total order on points: by y, then by x.
  pub fn cmp_lowest(&self, other: &Point) -> Ordering {
    (OrderedFloat(self.y_coord()), OrderedFloat(self.x_coord()))
      .cmp(&(OrderedFloat(other.y_coord()), OrderedFloat(other.x_coord())))
  }

  /// Key suitable for ordered collections. `-0.0` and `0.0` map to the same key.
  pub(crate) fn key(&self) -> [OrderedFloat<f64>; 2] {
    // Adding zero folds -0.0 into 0.0.
    array_init(|i| OrderedFloat(self.array[i] + 0.0))
  }
}

impl Index<usize> for Point {
  type Output = f64;
  fn index(&self, key: usize) -> &f64 {
    self.array.index(key)
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl From<[f64; 2]> for Point {
  fn from(array: [f64; 2]) -> Point {
    Point { array }
  }
}

impl From<Vector> for Point {
  fn from(vector: Vector) -> Point {
    Point { array: vector.0 }
  }
}

impl Deref for Point {
  type Target = [f64; 2];
  fn deref(&self) -> &[f64; 2] {
    &self.array
  }
}

mod add;
mod sub;
