use array_init::array_init;
use std::ops::Mul;

use super::Vector;

impl Mul<f64> for Vector {
  type Output = Vector;

  fn mul(self: Vector, other: f64) -> Self::Output {
    Vector(array_init(|i| self.0[i] * other))
  }
}

impl Mul<f64> for &Vector {
  type Output = Vector;

  fn mul(self, other: f64) -> Vector {
    Vector(array_init(|i| self.0[i] * other))
  }
}
