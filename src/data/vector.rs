use array_init::array_init;
use num_traits::identities::Zero;
use num_traits::NumOps;
use std::ops::Index;
use std::ops::Neg;

use crate::data::Point;
use crate::GeometryScalar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize = 2>(pub [T; N]);

impl<T, const N: usize> Vector<T, N>
where
  T: Clone,
{
  pub fn dot(&self, other: &Vector<T, N>) -> T
  where
    T: Zero + NumOps,
  {
    self
      .0
      .iter()
      .zip(other.0.iter())
      .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
  }

  pub fn squared_magnitude(&self) -> T
  where
    T: Zero + NumOps,
  {
    self.dot(self)
  }

  /// Euclidean length, computed in the floating accumulator.
  pub fn norm(&self) -> f64
  where
    T: GeometryScalar,
  {
    self
      .0
      .iter()
      .map(|elt| {
        let elt = elt.to_f64();
        elt * elt
      })
      .sum::<f64>()
      .sqrt()
  }
}

impl<T> Vector<T, 2> {
  /// The z component of the 3D cross product, also known as the perp-dot
  /// product. Positive when `other` points counter-clockwise of `self`.
  pub fn cross(&self, other: &Vector<T, 2>) -> T
  where
    T: NumOps + Clone,
  {
    let [ux, uy] = self.0.clone();
    let [vx, vy] = other.0.clone();
    ux * vy - uy * vx
  }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

impl<T, const N: usize> From<Point<T, N>> for Vector<T, N> {
  fn from(point: Point<T, N>) -> Vector<T, N> {
    Vector(point.array)
  }
}

mod add;
mod mul;
mod sub;

impl<T, const N: usize> Zero for Vector<T, N>
where
  T: NumOps + Zero + Clone,
{
  fn zero() -> Vector<T, N> {
    Vector(array_init(|_| Zero::zero()))
  }
  fn is_zero(&self) -> bool {
    self.0.iter().all(Zero::is_zero)
  }
}

impl<T, const N: usize> Neg for Vector<T, N>
where
  T: Neg<Output = T> + Clone,
{
  type Output = Self;
  fn neg(self) -> Self {
    Vector(array_init(|i| self.0.index(i).clone().neg()))
  }
}
