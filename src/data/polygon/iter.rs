use crate::data::DirectedEdge;
use crate::data::Point;

/// Edges of a closed vertex ring, `v[0] -> v[1]`, ..., `v[n-1] -> v[0]`.
#[derive(Debug, Clone)]
pub struct EdgeIter<'a> {
  pub(crate) vertices: &'a [Point],
  pub(crate) head: usize,
  pub(crate) tail: usize, // exclusive
}

impl<'a> EdgeIter<'a> {
  pub fn new(vertices: &'a [Point]) -> EdgeIter<'a> {
    EdgeIter {
      vertices,
      head: 0,
      tail: vertices.len(),
    }
  }

  fn edge(&self, idx: usize) -> DirectedEdge<'a> {
    let len = self.vertices.len();
    DirectedEdge {
      src: &self.vertices[idx],
      dst: &self.vertices[(idx + 1) % len],
    }
  }
}

impl<'a> Iterator for EdgeIter<'a> {
  type Item = DirectedEdge<'a>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.head == self.tail {
      None
    } else {
      let out = self.edge(self.head);
      self.head += 1;
      Some(out)
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len(), Some(self.len()))
  }
}

impl ExactSizeIterator for EdgeIter<'_> {
  fn len(&self) -> usize {
    self.tail - self.head
  }
}

impl DoubleEndedIterator for EdgeIter<'_> {
  fn next_back(&mut self) -> Option<Self::Item> {
    if self.head == self.tail {
      None
    } else {
      self.tail -= 1;
      Some(self.edge(self.tail))
    }
  }
}
