/// Closed range `[min, max]` of a polygon projected onto an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionInterval {
  pub min: f64,
  pub max: f64,
}

impl ProjectionInterval {
  pub fn new(min: f64, max: f64) -> ProjectionInterval {
    debug_assert!(min <= max);
    ProjectionInterval { min, max }
  }

  /// Smallest interval covering every value. `None` if there are no values.
  pub fn covering<I>(values: I) -> Option<ProjectionInterval>
  where
    I: IntoIterator<Item = f64>,
  {
    values.into_iter().fold(None, |acc, value| match acc {
      None => Some(ProjectionInterval {
        min: value,
        max: value,
      }),
      Some(ProjectionInterval { min, max }) => Some(ProjectionInterval {
        min: min.min(value),
        max: max.max(value),
      }),
    })
  }

  /// Closed overlap test. Intervals that merely touch overlap.
  pub fn overlaps(&self, other: &ProjectionInterval) -> bool {
    self.max >= other.min && other.max >= self.min
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn touching_overlaps() {
    let a = ProjectionInterval::new(-1.0, 1.0);
    let b = ProjectionInterval::new(1.0, 2.0);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
  }

  #[test]
  fn disjoint() {
    let a = ProjectionInterval::new(-1.0, 1.0);
    let b = ProjectionInterval::new(1.5, 2.5);
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
  }

  #[test]
  fn covering_values() {
    assert_eq!(ProjectionInterval::covering(vec![]), None);
    assert_eq!(
      ProjectionInterval::covering(vec![3.0, -1.0, 2.0]),
      Some(ProjectionInterval::new(-1.0, 3.0))
    );
  }
}
