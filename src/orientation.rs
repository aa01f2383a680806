use crate::data::Point;
use crate::Error;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// # Errors
  /// Returns [`Error::DegenerateTriple`] if any two of the three points are
  /// identical; the turn is undefined for repeated points.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use convex2d::data::Point;
  /// # use convex2d::Orientation;
  /// let p1 = Point::new([0.0, 0.0]);
  /// let p2 = Point::new([0.0, 1.0]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([0.0, 2.0])).unwrap().is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([-1.0, 2.0])).unwrap().is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([1.0, 2.0])).unwrap().is_cw());
  /// ```
  pub fn new(p1: &Point, p2: &Point, p3: &Point) -> Result<Orientation, Error> {
    if p1 == p2 || p2 == p3 || p3 == p1 {
      return Err(Error::DegenerateTriple {
        points: [*p1, *p2, *p3],
      });
    }
    Ok(Orientation::new_unchecked(p1, p2, p3))
  }

  /// Same as [`Orientation::new`] but without the check for repeated points.
  /// Repeated points always come out as [`Orientation::CoLinear`].
  pub fn new_unchecked(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    // Negated cross product of (p2 - p1) and (p3 - p2).
    let value = (p2.y_coord() - p1.y_coord()) * (p3.x_coord() - p2.x_coord())
      - (p2.x_coord() - p1.x_coord()) * (p3.y_coord() - p2.y_coord());
    if value == 0.0 {
      Orientation::CoLinear
    } else if value > 0.0 {
      Orientation::ClockWise
    } else {
      Orientation::CounterClockWise
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}
