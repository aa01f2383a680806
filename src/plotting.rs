//! Coordinate arrays for handing geometry to a plotting backend.
use std::iter::FromIterator;

use crate::data::Point;

/// Parallel arrays of x and y coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Coordinates {
  pub xs: Vec<f64>,
  pub ys: Vec<f64>,
}

impl Coordinates {
  pub fn len(&self) -> usize {
    self.xs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.xs.is_empty()
  }
}

impl<'a> FromIterator<&'a Point> for Coordinates {
  fn from_iter<I: IntoIterator<Item = &'a Point>>(iter: I) -> Coordinates {
    let (xs, ys) = iter
      .into_iter()
      .map(|pt| (pt.x_coord(), pt.y_coord()))
      .unzip();
    Coordinates { xs, ys }
  }
}

/// Coordinates of a scatter of points, in input order.
pub fn point_coordinates(points: &[Point]) -> Coordinates {
  points.iter().collect()
}

/// Coordinates of a closed polygon outline. The first vertex is repeated at
/// the end so line plots draw the closing edge.
///
/// ```rust
/// # use convex2d::data::Point;
/// # use convex2d::plotting::polygon_coordinates;
/// let tri = [
///   Point::new([0.0, 0.0]),
///   Point::new([1.0, 0.0]),
///   Point::new([0.0, 1.0]),
/// ];
/// let coords = polygon_coordinates(&tri);
/// assert_eq!(coords.xs, vec![0.0, 1.0, 0.0, 0.0]);
/// assert_eq!(coords.ys, vec![0.0, 0.0, 1.0, 0.0]);
/// ```
pub fn polygon_coordinates(vertices: &[Point]) -> Coordinates {
  vertices.iter().chain(vertices.first()).collect()
}
