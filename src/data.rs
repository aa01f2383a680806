mod directed_edge;
mod interval;
pub(crate) mod point;
pub mod polygon;
mod vector;

pub use directed_edge::DirectedEdge;
pub use interval::ProjectionInterval;
pub use point::Point;
pub use polygon::{ConvexPolygon, EdgeIter};
pub use vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
