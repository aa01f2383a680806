use ordered_float::OrderedFloat;
use std::collections::BTreeSet;
use tracing::{debug, trace};

use crate::data::{ConvexPolygon, Point};
use crate::{Error, Orientation};

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    All Ok results are valid convex polygons.
//    No points are outside the resulting convex polygon (exact inputs).
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points. The result starts at the lowest (then
/// leftmost) input point and lists the hull vertices in counter-clockwise order.
///
/// Repeated input points are allowed and are treated as a single point.
///
/// # Errors
/// * [`Error::InsufficientPoints`] if fewer than three points are given.
/// * [`Error::CollinearPoints`] if all points lie on one line. This includes
///   inputs with fewer than three distinct points.
///
/// # Properties
/// * No points from the input set will be outside the returned convex polygon.
/// * All vertices in the convex polygon are from the input set.
/// * No three consecutive vertices are colinear.
///
/// # Examples
///
/// ```rust
/// # use convex2d::algorithms::convex_hull;
/// # use convex2d::data::Point;
/// # use convex2d::Error;
/// let pair = vec![Point::new([0.0, 0.0]), Point::new([3.0, 4.0])];
/// assert_eq!(
///   convex_hull(pair).err(),
///   Some(Error::InsufficientPoints { count: 2 }))
/// ```
///
/// ```rust
/// # use convex2d::algorithms::convex_hull;
/// # use convex2d::data::Point;
/// # use convex2d::Error;
/// let line = (0..4).map(|i| Point::new([f64::from(i), f64::from(i)])).collect();
/// assert_eq!(
///   convex_hull(line).err(),
///   Some(Error::CollinearPoints))
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull(pts: Vec<Point>) -> Result<ConvexPolygon, Error> {
  if pts.len() < 3 {
    return Err(Error::InsufficientPoints { count: pts.len() });
  }
  let input_len = pts.len();
  let mut pts = distinct(pts);
  if all_colinear(&pts) {
    debug!(points = input_len, distinct = pts.len(), "rejecting colinear point set");
    return Err(Error::CollinearPoints);
  }

  let pivot = take_pivot(&mut pts);
  // Sorting by key keeps the order total even where floating point
  // orientations of nearly colinear points disagree with each other.
  pts.sort_unstable_by_key(|pt| pivot.polar_key(pt));

  let mut hull: Vec<Point> = Vec::with_capacity(pts.len() + 1);
  hull.push(pivot);
  for pt in pts {
    // Pop until (second-from-top, top, candidate) is a strict left turn and
    // the candidate is strictly further around the pivot than the top. The
    // pivot is never popped. Points colinear with the pivot on the first ray
    // are dropped here as well, keeping only the farthest.
    while hull.len() >= 2 {
      let top = &hull[hull.len() - 1];
      let below = &hull[hull.len() - 2];
      if is_left_turn(below, top, &pt) && is_left_turn(&pivot, top, &pt) {
        break;
      }
      hull.pop();
    }
    hull.push(pt);
  }
  // Close the ring. Exact inputs never pop here; nearly colinear inputs can.
  while hull.len() >= 3 {
    let last = &hull[hull.len() - 1];
    let below = &hull[hull.len() - 2];
    if is_left_turn(below, last, &pivot) && is_left_turn(last, &pivot, &hull[1]) {
      break;
    }
    hull.pop();
  }
  if hull.len() < 3 {
    debug!(points = input_len, "hull collapsed to a line");
    return Err(Error::CollinearPoints);
  }
  trace!(points = input_len, vertices = hull.len(), "graham scan done");
  Ok(ConvexPolygon::new_unchecked(hull))
}

// Every turn tested here uses the argument order of `ConvexPolygon::validate`,
// so a ring built from passing tests always validates.
fn is_left_turn(a: &Point, b: &Point, c: &Point) -> bool {
  Orientation::new_unchecked(a, b, c).is_ccw()
}

// Drop repeated points, keeping the first occurrence. Input order is preserved.
fn distinct(pts: Vec<Point>) -> Vec<Point> {
  let mut seen: BTreeSet<[OrderedFloat<f64>; 2]> = BTreeSet::new();
  pts.into_iter().filter(|pt| seen.insert(pt.key())).collect()
}

// With all points distinct, every consecutive triple (in input order) being
// colinear implies that every point lies on the line through the first two.
// Fewer than three distinct points count as colinear.
fn all_colinear(pts: &[Point]) -> bool {
  pts
    .windows(3)
    .all(|w| Orientation::new_unchecked(&w[0], &w[1], &w[2]).is_colinear())
}

// Find the lowest (then leftmost) point and remove it from the vector.
// O(n)
fn take_pivot(pts: &mut Vec<Point>) -> Point {
  let idx = pts
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| a.cmp_lowest(b))
    .map(|(idx, _)| idx)
    .unwrap_or(0);
  pts.swap_remove(idx)
}
