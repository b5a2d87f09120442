use array_init::array_init;
use std::ops::Mul;

use super::Point;

// Scales the position vector.
impl<T, const N: usize> Mul<T> for Point<T, N>
where
  T: Mul<T, Output = T> + Clone,
{
  type Output = Point<T, N>;

  fn mul(self: Point<T, N>, other: T) -> Self::Output {
    Point {
      array: array_init(|i| self.array[i].clone() * other.clone()),
    }
  }
}
