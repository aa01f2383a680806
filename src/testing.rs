// Strategies for:
//  * points
//  * convex polygons
// Coordinates are integer-valued so every orientation and projection in the
// tests is computed exactly.
use proptest::collection::*;
use proptest::prelude::*;

use crate::algorithms::convex_hull;
use crate::data::{ConvexPolygon, Point};

pub const COORD_RANGE: std::ops::Range<i32> = -100..100;

pub fn any_coord() -> impl Strategy<Value = f64> {
  COORD_RANGE.prop_map(f64::from)
}

pub fn any_point() -> impl Strategy<Value = Point> {
  (any_coord(), any_coord()).prop_map(|(x, y)| Point::new([x, y]))
}

pub fn any_point_set(size: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Point>> {
  vec(any_point(), size)
}

// Hull of a random point set. Colinear sets are rejected and regenerated.
pub fn any_convex() -> impl Strategy<Value = ConvexPolygon> {
  any_point_set(3..40).prop_filter_map("Colinear point set", |pts| convex_hull(pts).ok())
}
