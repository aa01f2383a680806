use super::Point;
use super::Vector;
use crate::Orientation;

///////////////////////////////////////////////////////////////////////////////
// DirectedEdge

// Directed edge from `src` to `dst`. Borrowed from the polygon it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedEdge<'a> {
  pub src: &'a Point,
  pub dst: &'a Point,
}

impl<'a> DirectedEdge<'a> {
  pub fn new(src: &'a Point, dst: &'a Point) -> DirectedEdge<'a> {
    DirectedEdge { src, dst }
  }

  #[must_use]
  pub fn reverse(self) -> DirectedEdge<'a> {
    DirectedEdge {
      src: self.dst,
      dst: self.src,
    }
  }

  pub fn vector(&self) -> Vector {
    Vector::between(self.src, self.dst)
  }

  /// Side of the directed line through this edge on which `pt` lies.
  /// Points equal to either endpoint are reported as [`Orientation::CoLinear`].
  pub fn side(&self, pt: &Point) -> Orientation {
    Orientation::new_unchecked(self.src, self.dst, pt)
  }

  /// `true` if `pt` is on the closed segment between `src` and `dst`.
  pub fn contains(&self, pt: &Point) -> bool {
    if !self.side(pt).is_colinear() {
      return false;
    }
    let lo_x = self.src.x_coord().min(self.dst.x_coord());
    let hi_x = self.src.x_coord().max(self.dst.x_coord());
    let lo_y = self.src.y_coord().min(self.dst.y_coord());
    let hi_y = self.src.y_coord().max(self.dst.y_coord());
    lo_x <= pt.x_coord() && pt.x_coord() <= hi_x && lo_y <= pt.y_coord() && pt.y_coord() <= hi_y
  }
}
