// https://en.wikipedia.org/wiki/Hyperplane_separation_theorem
use tracing::trace;

use crate::data::{EdgeIter, Point, ProjectionInterval, Vector};
use crate::Error;

/// $O(n \cdot m)$ Separating axis test for two convex polygons.
///
/// The polygons intersect unless one of their edge normals separates them.
/// Projections are closed intervals, so polygons that touch along an edge
/// or at a vertex intersect. Normals of `polygon1` are tried first.
///
/// Convexity is assumed, not checked. Use [`ConvexPolygon::intersects`] for
/// validated polygons.
///
/// # Errors
/// * [`Error::InsufficientPoints`] if either polygon has fewer than three vertices.
/// * [`Error::DegenerateVector`] if `polygon1` has a zero-length edge, or if
///   `polygon2` has one and no normal of `polygon1` separates the polygons.
///
/// # Examples
///
/// ```rust
/// # use convex2d::algorithms::do_intersect;
/// # use convex2d::data::Point;
/// let square = |x0: f64, y0: f64, side: f64| {
///   vec![
///     Point::new([x0, y0]),
///     Point::new([x0 + side, y0]),
///     Point::new([x0 + side, y0 + side]),
///     Point::new([x0, y0 + side]),
///   ]
/// };
/// assert_eq!(do_intersect(&square(-1.0, -1.0, 2.0), &square(0.0, 0.0, 2.0)), Ok(true));
/// assert_eq!(do_intersect(&square(-1.0, -1.0, 2.0), &square(1.5, -1.0, 1.0)), Ok(false));
/// ```
///
/// [`ConvexPolygon::intersects`]: crate::data::ConvexPolygon::intersects
pub fn do_intersect(polygon1: &[Point], polygon2: &[Point]) -> Result<bool, Error> {
  for polygon in [polygon1, polygon2] {
    if polygon.len() < 3 {
      return Err(Error::InsufficientPoints {
        count: polygon.len(),
      });
    }
  }
  // Normals of `polygon2` are only needed if no normal of `polygon1` separates.
  if !overlap_on_all(edge_normals(polygon1)?, polygon1, polygon2) {
    return Ok(false);
  }
  Ok(overlap_on_all(edge_normals(polygon2)?, polygon2, polygon1))
}

/// Unit normals of every edge of `polygon`, in edge order, closing edge last.
///
/// Each normal is the edge vector rotated by 90 degrees counter-clockwise.
///
/// # Errors
/// Returns [`Error::DegenerateVector`] if two adjacent vertices coincide.
pub fn edge_normals(polygon: &[Point]) -> Result<Vec<Vector>, Error> {
  EdgeIter::new(polygon)
    .map(|edge| edge.vector().perp().normalize())
    .collect()
}

/// $O(n)$ The interval `[min, max]` of `dot(v, axis)` over all vertices `v`.
///
/// An empty polygon projects to an empty interval (`min > max`) which
/// overlaps nothing.
pub fn project(polygon: &[Point], axis: &Vector) -> ProjectionInterval {
  ProjectionInterval::covering(polygon.iter().map(|pt| pt.as_vec().dot(axis))).unwrap_or(
    ProjectionInterval {
      min: f64::INFINITY,
      max: f64::NEG_INFINITY,
    },
  )
}

/// `true` if the projections of both polygons onto `axis` overlap.
pub fn projections_overlap(axis: &Vector, polygon1: &[Point], polygon2: &[Point]) -> bool {
  project(polygon1, axis).overlaps(&project(polygon2, axis))
}

// Stops at the first separating axis.
pub(crate) fn overlap_on_all<I>(normals: I, own: &[Point], other: &[Point]) -> bool
where
  I: IntoIterator<Item = Vector>,
{
  for axis in normals {
    if !projections_overlap(&axis, own, other) {
      trace!(axis = ?axis.0, "found separating axis");
      return false;
    }
  }
  true
}
