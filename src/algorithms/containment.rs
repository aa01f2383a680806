//! Point containment for convex polygons.
//!
//! The boundary is walked against the stored vertex order, that is clockwise
//! for a counter-clockwise polygon, and the point must never be strictly on
//! the left of an edge. Points on an edge's line satisfy that edge; whether
//! they are inside is then decided by the remaining edges.
use crate::data::{EdgeIter, Point};
use crate::{Error, Orientation};

/// $O(n)$ Inclusive point-in-convex-polygon test.
///
/// `polygon` must list the vertices of a convex polygon in counter-clockwise
/// order. Convexity is not checked. Points on the boundary, including the
/// vertices themselves, are inside.
///
/// # Errors
/// * [`Error::InsufficientPoints`] if `polygon` has fewer than three vertices.
/// * [`Error::DegenerateTriple`] if two adjacent vertices are identical.
///
/// # Examples
///
/// ```rust
/// # use convex2d::algorithms::point_in_polygon;
/// # use convex2d::data::Point;
/// let square = [
///   Point::new([0.0, 0.0]),
///   Point::new([1.0, 0.0]),
///   Point::new([1.0, 1.0]),
///   Point::new([0.0, 1.0]),
/// ];
/// assert_eq!(point_in_polygon(&Point::new([0.5, 0.5]), &square), Ok(true));
/// assert_eq!(point_in_polygon(&Point::new([2.0, 2.0]), &square), Ok(false));
/// ```
pub fn point_in_polygon(point: &Point, polygon: &[Point]) -> Result<bool, Error> {
  if polygon.len() < 3 {
    return Err(Error::InsufficientPoints {
      count: polygon.len(),
    });
  }
  for edge in EdgeIter::new(polygon) {
    if edge.src == edge.dst {
      return Err(Error::DegenerateTriple {
        points: [*edge.src, *edge.dst, *point],
      });
    }
  }
  Ok(contains_unchecked(polygon, point))
}

// A point equal to a vertex comes out colinear with both of its edges, so
// vertices count as boundary points.
pub(crate) fn contains_unchecked(polygon: &[Point], point: &Point) -> bool {
  EdgeIter::new(polygon)
    .rev()
    .map(|edge| edge.reverse())
    .all(|edge| Orientation::new_unchecked(edge.src, edge.dst, point) != Orientation::CounterClockWise)
}
