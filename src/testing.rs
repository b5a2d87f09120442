// Strategies for:
//  * points
//  * lines and segments
//  * polylines
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Line, Point, Polyline, Segment, Vector};

use core::ops::Range;
use num_bigint::BigInt;
use num_traits::*;
use ordered_float::NotNan;
use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;
use std::convert::TryInto;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary point

impl<T: Arbitrary, const N: usize> Arbitrary for Point<T, N>
where
  T::Strategy: Clone,
  T::Parameters: Clone,
  T: Clone,
{
  type Strategy = Mapped<Vec<T>, Point<T, N>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    vec(any_with::<T>(params), N).prop_map(|vec: Vec<T>| Point {
      array: vec.try_into().unwrap(),
    })
  }
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary Vector

impl<T: Arbitrary, const N: usize> Arbitrary for Vector<T, N>
where
  T::Strategy: Clone,
  T::Parameters: Clone,
  T: Clone,
{
  type Strategy = Mapped<Point<T, N>, Vector<T, N>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    any_with::<Point<T, N>>(params).prop_map(|pt| pt.into())
  }
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary Line

impl<T: Arbitrary> Arbitrary for Line<T>
where
  T::Strategy: Clone,
  T::Parameters: Clone,
  T: Clone,
{
  type Strategy = Mapped<(Point<T, 2>, Point<T, 2>), Line<T>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    any_with::<(Point<T, 2>, Point<T, 2>)>((params.clone(), params))
      .prop_map(|(p1, p2)| Line::new(p1, p2))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary Segment

impl<T: Arbitrary> Arbitrary for Segment<T>
where
  T::Strategy: Clone,
  T::Parameters: Clone,
  T: Clone,
{
  type Strategy = Mapped<(Point<T, 2>, Point<T, 2>), Segment<T>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    any_with::<(Point<T, 2>, Point<T, 2>)>((params.clone(), params))
      .prop_map(|(start, end)| Segment::new(start, end))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary Polyline

impl<T: Arbitrary> Arbitrary for Polyline<T>
where
  T::Strategy: Clone,
  T::Parameters: Clone,
  T: Clone,
{
  type Strategy = Mapped<Vec<Point<T, 2>>, Polyline<T>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    vec(any_with::<Point<T, 2>>(params), 0..32).prop_map(Polyline::from)
  }
}

// Small coordinates make duplicates and colinear runs likely.
pub fn any_point(range: Range<i32>) -> impl Strategy<Value = Point<i32>> {
  (range.clone(), range).prop_map(|(x, y)| Point::new([x, y]))
}

pub fn any_polyline(range: Range<i32>, len: Range<usize>) -> impl Strategy<Value = Polyline<i32>> {
  vec(any_point(range), len).prop_map(Polyline::<i32>::from)
}

// Arbitrary isn't defined for NotNan.
pub fn any_nn<const N: usize>() -> impl Strategy<Value = Point<NotNan<f64>, N>> {
  any::<Point<f64, N>>().prop_filter_map("Check for NaN", |pt| {
    pt.cast(rem_float).try_into().ok()
  })
}

// Float representation: mantissa * 2^exponent * sign
// This function changes the exponent modulo 250. This rules out extreme
// numbers (very large, very small, very close to zero). Such extremes
// are likely to overflow since the arbitrary precision machinery we're
// using cannot compute answers with an exponent larger than 1024.
fn rem_float(f: f64) -> f64 {
  let (mantissa, exponent, sign) = f.integer_decode();
  ((mantissa as f64) * 2f64.powi(exponent as i32 % 250)).copysign(sign as f64)
}

// Arbitrary isn't defined for BigInt.
pub fn any_r<const N: usize>() -> impl Strategy<Value = Point<BigInt, N>> {
  any::<Point<i64, N>>().prop_map(|pt| pt.cast(BigInt::from))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::GeometryScalar;

  use test_strategy::proptest;

  #[proptest]
  fn nn_points_are_finite(#[strategy(any_nn::<2>())] pt: Point<NotNan<f64>>) {
    prop_assert!(pt.iter().all(|v| v.is_finite()));
  }

  #[proptest]
  fn small_points_stay_in_range(#[strategy(any_point(-3..3))] pt: Point<i32>) {
    prop_assert!((-3..3).contains(pt.x_coord()));
    prop_assert!((-3..3).contains(pt.y_coord()));
  }

  #[proptest]
  fn big_points_match(pt: Point<i64>) {
    let big = pt.cast(BigInt::from);
    prop_assert_eq!(big.to_f64(), pt.to_f64());
    prop_assert_eq!(BigInt::from_constant(1), BigInt::one());
  }
}
