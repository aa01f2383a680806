use claims::debug_assert_ok;
use std::ops::Deref;

use crate::algorithms::containment;
use crate::algorithms::intersection::sat;
use crate::data::{Point, PointLocation, ProjectionInterval, Vector};
use crate::plotting::{self, Coordinates};
use crate::{Error, Orientation};

mod iter;
pub use iter::*;

/// A strictly convex polygon with counter-clockwise vertex order.
///
/// The vertex ring is closed: the last vertex connects back to the first.
/// Polygons are never mutated in place; transformations return new polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexPolygon {
  vertices: Vec<Point>,
}

///////////////////////////////////////////////////////////////////////////////
// ConvexPolygon

impl ConvexPolygon {
  /// $O(n)$ Build a convex polygon from vertices in counter-clockwise order.
  ///
  /// # Errors
  /// * [`Error::InsufficientPoints`] for fewer than three vertices.
  /// * [`Error::DegenerateTriple`] if a vertex is repeated.
  /// * [`Error::ConvexViolation`] if a turn is clockwise or colinear, or if
  ///   the ring winds around more than once.
  pub fn new(vertices: Vec<Point>) -> Result<ConvexPolygon, Error> {
    validate_ring(&vertices)?;
    Ok(ConvexPolygon { vertices })
  }

  /// $O(1)$ Assume that the vertices form a convex polygon.
  ///
  /// # Safety
  /// The vertices have to be strictly convex and in counter-clockwise order,
  /// ie. no turns are allowed to be clockwise or colinear. This is checked
  /// only in debug builds.
  pub fn new_unchecked(vertices: Vec<Point>) -> ConvexPolygon {
    let convex = ConvexPolygon { vertices };
    debug_assert_ok!(convex.validate());
    convex
  }

  /// $O(n)$
  pub fn validate(&self) -> Result<(), Error> {
    validate_ring(&self.vertices)
  }

  pub fn vertices(&self) -> &[Point] {
    &self.vertices
  }

  pub fn into_vertices(self) -> Vec<Point> {
    self.vertices
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point> {
    self.vertices.iter()
  }

  /// Directed edges in stored (counter-clockwise) order, closing edge last.
  pub fn iter_boundary_edges(&self) -> EdgeIter<'_> {
    EdgeIter::new(&self.vertices)
  }

  pub fn signed_area(&self) -> f64 {
    self.signed_area_2x() / 2.0
  }

  pub fn signed_area_2x(&self) -> f64 {
    self
      .iter_boundary_edges()
      .map(|edge| {
        let p = edge.src;
        let q = edge.dst;
        p.x_coord() * q.y_coord() - q.x_coord() * p.y_coord()
      })
      .sum()
  }

  /// $O(n)$ Area centroid. Always strictly inside the polygon.
  pub fn centroid(&self) -> Point {
    let xs: Vector = self
      .iter_boundary_edges()
      .map(|edge| {
        let p = edge.src.as_vec();
        let q = edge.dst.as_vec();
        (p + q) * (p.0[0] * q.0[1] - q.0[0] * p.0[1])
      })
      .sum();
    let scale = 3.0 * self.signed_area_2x();
    Point::new([xs.0[0] / scale, xs.0[1] / scale])
  }

  /// $O(n)$ A copy of this polygon shifted by `offset`.
  #[must_use]
  pub fn translate(&self, offset: &Vector) -> ConvexPolygon {
    ConvexPolygon {
      vertices: self.vertices.iter().map(|pt| pt + offset).collect(),
    }
  }

  /// Unit normals of every edge, in edge order.
  pub fn edge_normals(&self) -> impl Iterator<Item = Vector> + '_ {
    // Adjacent vertices are distinct, so no edge has zero length.
    self
      .iter_boundary_edges()
      .map(|edge| edge.vector().perp().normalize_unchecked())
  }

  /// $O(n)$ Range of `dot(v, axis)` over all vertices `v`.
  pub fn project(&self, axis: &Vector) -> ProjectionInterval {
    sat::project(&self.vertices, axis)
  }

  /// $O(n)$ Inclusive containment test. Points on the boundary are contained.
  pub fn contains(&self, pt: &Point) -> bool {
    containment::contains_unchecked(&self.vertices, pt)
  }

  /// $O(n)$
  pub fn locate(&self, pt: &Point) -> PointLocation {
    if self.iter_boundary_edges().any(|edge| edge.contains(pt)) {
      PointLocation::OnBoundary
    } else if self.contains(pt) {
      PointLocation::Inside
    } else {
      PointLocation::Outside
    }
  }

  /// $O(n \cdot m)$ Separating axis test. Touching polygons intersect.
  pub fn intersects(&self, other: &ConvexPolygon) -> bool {
    sat::overlap_on_all(self.edge_normals(), &self.vertices, &other.vertices)
      && sat::overlap_on_all(other.edge_normals(), &other.vertices, &self.vertices)
  }

  /// Parallel coordinate arrays with the ring closed by repeating the first vertex.
  pub fn to_coordinates(&self) -> Coordinates {
    plotting::polygon_coordinates(&self.vertices)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Trait Implementations

impl Deref for ConvexPolygon {
  type Target = [Point];
  fn deref(&self) -> &[Point] {
    &self.vertices
  }
}

impl From<ConvexPolygon> for Vec<Point> {
  fn from(convex: ConvexPolygon) -> Vec<Point> {
    convex.vertices
  }
}

impl AsRef<[Point]> for ConvexPolygon {
  fn as_ref(&self) -> &[Point] {
    &self.vertices
  }
}

impl<'a> IntoIterator for &'a ConvexPolygon {
  type Item = &'a Point;
  type IntoIter = std::slice::Iter<'a, Point>;
  fn into_iter(self) -> Self::IntoIter {
    self.vertices.iter()
  }
}

///////////////////////////////////////////////////////////////////////////////
// Helper functions

// Every turn must be strictly counter-clockwise and, seen from the first
// vertex, the remaining vertices must sweep counter-clockwise. The second
// condition rules out rings that wind around more than once.
fn validate_ring(vertices: &[Point]) -> Result<(), Error> {
  let n = vertices.len();
  if n < 3 {
    return Err(Error::InsufficientPoints { count: n });
  }
  for i in 0..n {
    let prev = &vertices[(i + n - 1) % n];
    let next = &vertices[(i + 1) % n];
    if prev.orientation(&vertices[i], next)? != Orientation::CounterClockWise {
      return Err(Error::ConvexViolation);
    }
  }
  let origin = &vertices[0];
  for pair in vertices[1..].windows(2) {
    if origin.orientation(&pair[0], &pair[1])? != Orientation::CounterClockWise {
      return Err(Error::ConvexViolation);
    }
  }
  Ok(())
}

///////////////////////////////////////////////////////////////////////////////
// Tests
