use array_init::array_init;
use std::ops::Neg;
use std::ops::Sub;

use super::Vector;

// &vector - &vector = vector
impl<'a, 'b> Sub<&'a Vector> for &'b Vector {
  type Output = Vector;

  fn sub(self: &'b Vector, other: &'a Vector) -> Self::Output {
    Vector(array_init(|i| self.0[i] - other.0[i]))
  }
}

impl Sub<Vector> for Vector {
  type Output = Vector;

  fn sub(self: Vector, other: Vector) -> Self::Output {
    Sub::sub(&self, &other)
  }
}

impl Neg for Vector {
  type Output = Vector;

  fn neg(self) -> Self::Output {
    Vector(array_init(|i| -self.0[i]))
  }
}
