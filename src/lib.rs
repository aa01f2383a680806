#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Planar convex geometry over `f64` coordinates.
//!
//! Three algorithms sit on top of a small set of primitives:
//!
//! * [`convex_hull`](algorithms::convex_hull): Graham scan over an unordered point set.
//! * [`point_in_polygon`](algorithms::point_in_polygon): half-plane containment test.
//! * [`do_intersect`](algorithms::do_intersect): separating axis test between two convex polygons.
//!
//! All comparisons are plain IEEE double-precision comparisons. Inputs with
//! integer-valued (or otherwise exactly representable) coordinates get exact
//! answers; near-degenerate floating point inputs may not.
//!
//! ```rust
//! # use convex2d::algorithms::convex_hull;
//! # use convex2d::data::Point;
//! let hull = convex_hull(vec![
//!   Point::new([1.0, 1.0]),
//!   Point::new([-1.0, 1.0]),
//!   Point::new([-1.0, -1.0]),
//!   Point::new([1.0, -1.0]),
//!   Point::new([0.0, 0.0]),
//! ])
//! .unwrap();
//! assert_eq!(hull.len(), 4);
//! assert!(hull.contains(&Point::new([0.0, 0.0])));
//! ```
use std::fmt;

pub mod algorithms;
pub mod data;
mod orientation;
pub mod plotting;
pub mod sampling;

pub use orientation::Orientation;

use data::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
  /// Fewer than three points were supplied. Carries the number of points seen.
  InsufficientPoints { count: usize },
  /// Every point lies on a single line.
  CollinearPoints,
  /// Orientation was requested for a triple in which two points coincide.
  DegenerateTriple { points: [Point; 3] },
  /// A zero-length vector cannot be normalized.
  DegenerateVector,
  /// The vertices do not describe a strictly convex, counter-clockwise ring.
  ConvexViolation,
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
    match self {
      Error::InsufficientPoints { .. } => write!(
        f,
        "Attempted to define a convex polygon with less than 3 points"
      ),
      Error::CollinearPoints => write!(
        f,
        "Attempted to define a convex polygon when all points are collinear"
      ),
      Error::DegenerateTriple { .. } => write!(
        f,
        "Attempted to compute the orientation of three points when at least two of them are identical"
      ),
      Error::DegenerateVector => write!(f, "Attempted to normalize a zero-length vector"),
      Error::ConvexViolation => write!(
        f,
        "Vertices do not form a strictly convex counter-clockwise polygon"
      ),
    }
  }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub mod testing;
