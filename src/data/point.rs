use array_init::{array_init, try_array_init};
use num_traits::{NumOps, Zero};
use ordered_float::{FloatIsNan, NotNan};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;
use std::ops::Index;

use super::Vector;
use crate::{GeometryScalar, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point<T, const N: usize = 2> {
  pub array: [T; N],
}

// Random sampling.
impl<T, const N: usize> Distribution<Point<T, N>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T, N> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

// Methods on N-dimensional points.
impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U, N>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }

  /// The same point in the floating accumulator.
  pub fn to_f64(&self) -> Point<f64, N>
  where
    T: GeometryScalar,
  {
    Point {
      array: array_init(|i| self.array[i].to_f64()),
    }
  }

  /// The position vector of this point.
  pub fn to_vector(&self) -> Vector<T, N>
  where
    T: Clone,
  {
    Vector(self.array.clone())
  }

  /// Dot product of the position vectors.
  pub fn dot(&self, other: &Point<T, N>) -> T
  where
    T: Zero + NumOps + Clone,
  {
    self.to_vector().dot(&other.to_vector())
  }

  /// Euclidean length of the position vector.
  pub fn norm(&self) -> f64
  where
    T: GeometryScalar,
  {
    self.to_f64().to_vector().norm()
  }

  pub fn distance(&self, rhs: &Point<T, N>) -> f64
  where
    T: GeometryScalar,
  {
    (rhs.to_f64() - self.to_f64()).norm()
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<const N: usize> TryFrom<Point<f64, N>> for Point<NotNan<f64>, N> {
  type Error = FloatIsNan;
  fn try_from(point: Point<f64, N>) -> Result<Point<NotNan<f64>, N>, FloatIsNan> {
    Ok(Point {
      array: try_array_init(|i| NotNan::try_from(point.array[i]))?,
    })
  }
}

impl<T> From<(T, T)> for Point<T, 2> {
  fn from(point: (T, T)) -> Point<T, 2> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T, const N: usize> From<Vector<T, N>> for Point<T, N> {
  fn from(vector: Vector<T, N>) -> Point<T, N> {
    Point { array: vector.0 }
  }
}

// Methods on two-dimensional points.
impl<T> Point<T, 2> {
  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn orientation(&self, q: &Point<T, 2>, r: &Point<T, 2>) -> Orientation
  where
    T: GeometryScalar,
  {
    Orientation::new(&self.array, &q.array, &r.array)
  }
}

impl<T, const N: usize> Deref for Point<T, N> {
  type Target = [T; N];
  fn deref(&self) -> &[T; N] {
    &self.array
  }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Point<T, N> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "(")?;
    for (i, coord) in self.array.iter().enumerate() {
      if i > 0 {
        write!(f, ",")?;
      }
      write!(f, "{}", coord)?;
    }
    write!(f, ")")
  }
}

mod add;
mod mul;
mod sub;
