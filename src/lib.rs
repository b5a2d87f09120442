//! Geometry kernel for graph drawing.
//!
//! Points, lines, segments and polylines over a generic coordinate type, with
//! the two operations edge routing leans on: [`Polyline::normalize`] to strip
//! bend points that do not change direction, and [`Line::intersection`] to
//! classify how two infinite lines meet.
//!
//! ```rust
//! # use drawgeom::data::{Point, Polyline};
//! let mut route = Polyline::from(vec![
//!   Point::new([1, 1]),
//!   Point::new([2, 2]),
//!   Point::new([3, 3]),
//! ]);
//! route.normalize();
//! assert_eq!(route.points(), &[Point::new([1, 1]), Point::new([3, 3])]);
//! ```
//!
//! [`Polyline::normalize`]: data::Polyline::normalize
//! [`Line::intersection`]: data::Line::intersection
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
use array_init::try_array_init;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{NumAssignOps, NumOps, ToPrimitive};
use ordered_float::{NotNan, OrderedFloat};
use std::cmp::Ordering;
use std::ops::BitXor;

mod angle;
pub mod data;
mod intersection;
mod orientation;

pub use angle::Angle;
pub use intersection::Intersects;
pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// A NaN was given where a number was required.
  NotANumber,
  /// An angle outside of `[0, π]`.
  AngleOutOfRange,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::NotANumber => write!(f, "Not a number"),
      Error::AngleOutOfRange => write!(f, "Angle must lie between 0 and pi radians"),
    }
  }
}

impl std::error::Error for Error {}

/// Coordinate types usable by the kernel.
///
/// Signs of cross products are computed exactly: fixed-precision integers
/// widen internally and never overflow, arbitrary-precision types are exact by
/// construction and floats are lifted into rationals. Everything involving
/// square roots or trigonometry goes through [`GeometryScalar::to_f64`].
pub trait GeometryScalar:
  std::fmt::Debug + NumAssignOps + NumOps<Self, Self> + PartialOrd + Clone
{
  fn from_constant(val: i8) -> Self;

  /// Conversion into the floating accumulator. May round.
  fn to_f64(&self) -> f64;

  /// Exact rational value. `None` for NaN and infinities.
  fn to_rational(&self) -> Option<BigRational>;

  /// Sign of the cross product `(a2 - a1) × (b2 - b1)`.
  fn cmp_cross(a1: &[Self; 2], a2: &[Self; 2], b1: &[Self; 2], b2: &[Self; 2]) -> Ordering;

  /// Sign of `(q - p) × (r - p)`. `Greater` when `p -> q -> r` turns
  /// counter-clockwise.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
    Self::cmp_cross(p, q, p, r)
  }
}

macro_rules! fixed_precision {
  ( $ty:ty, $uty:ty, $ulong:ty ) => {
    impl GeometryScalar for $ty {
      fn from_constant(val: i8) -> Self {
        <$ty>::from(val)
      }

      fn to_f64(&self) -> f64 {
        ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
      }

      fn to_rational(&self) -> Option<BigRational> {
        Some(BigRational::from_integer(BigInt::from(*self)))
      }

      fn cmp_cross(a1: &[Self; 2], a2: &[Self; 2], b1: &[Self; 2], b2: &[Self; 2]) -> Ordering {
        // Return the absolute difference along with its sign.
        // diff(0, 10) => (10, true)
        // diff(10, 0) => (10, false)
        // diff(i8::MIN,i8:MAX) => (255_u16, true)
        // diff(a,b) = (c, sign) where a = if sign { b-c } else { b+c }
        #[allow(clippy::cast_lossless)]
        fn diff(a: $ty, b: $ty) -> ($ulong, bool) {
          if b > a {
            (b.wrapping_sub(a) as $uty as $ulong, true)
          } else {
            (a.wrapping_sub(b) as $uty as $ulong, false)
          }
        }
        let (ux, ux_neg) = diff(a2[0], a1[0]);
        let (uy, uy_neg) = diff(a2[1], a1[1]);
        let (vx, vx_neg) = diff(b2[0], b1[0]);
        let (vy, vy_neg) = diff(b2[1], b1[1]);
        // neg xor neg = pos = 0
        // neg xor pos = neg = 1
        // pos xor neg = neg = 1
        // pos xor pos = pos = 0
        let ux_vy_neg = ux_neg.bitxor(vy_neg) && ux != 0 && vy != 0;
        let uy_vx_neg = uy_neg.bitxor(vx_neg) && uy != 0 && vx != 0;
        match (ux_vy_neg, uy_vx_neg) {
          (true, false) => Ordering::Less,
          (false, true) => Ordering::Greater,
          (true, true) => (uy * vx).cmp(&(ux * vy)),
          (false, false) => (ux * vy).cmp(&(uy * vx)),
        }
      }
    }
  };
}

macro_rules! arbitrary_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl GeometryScalar for $ty {
        fn from_constant(val: i8) -> Self {
          <$ty>::from(BigInt::from(val))
        }

        fn to_f64(&self) -> f64 {
          ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
        }

        fn to_rational(&self) -> Option<BigRational> {
          Some(BigRational::from(self.clone()))
        }

        fn cmp_cross(a1: &[Self; 2], a2: &[Self; 2], b1: &[Self; 2], b2: &[Self; 2]) -> Ordering {
          let lhs: Self = (&a2[0] - &a1[0]) * (&b2[1] - &b1[1]);
          let rhs: Self = (&a2[1] - &a1[1]) * (&b2[0] - &b1[0]);
          lhs.cmp(&rhs)
        }
      }
    )*
  };
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl GeometryScalar for $ty {
        fn from_constant(val: i8) -> Self {
          <$ty>::from(val)
        }

        fn to_f64(&self) -> f64 {
          f64::from(*self)
        }

        fn to_rational(&self) -> Option<BigRational> {
          BigRational::from_float(f64::from(*self))
        }

        fn cmp_cross(a1: &[Self; 2], a2: &[Self; 2], b1: &[Self; 2], b2: &[Self; 2]) -> Ordering {
          float_cmp_cross(
            [f64::from(a1[0]), f64::from(a1[1])],
            [f64::from(a2[0]), f64::from(a2[1])],
            [f64::from(b1[0]), f64::from(b1[1])],
            [f64::from(b2[0]), f64::from(b2[1])],
          )
        }

        // This function uses the arbitrary precision machinery of `geometry_predicates` to
        // quickly compute the orientation of three 2D points.
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          float_orient(
            [f64::from(p[0]), f64::from(p[1])],
            [f64::from(q[0]), f64::from(q[1])],
            [f64::from(r[0]), f64::from(r[1])],
          )
        }
      }
    )*
  };
}

macro_rules! wrapped_floating_precision {
  ( $( $ty:ty => $wrap:expr ),* ) => {
    $(
      impl GeometryScalar for $ty {
        fn from_constant(val: i8) -> Self {
          ($wrap)(val)
        }

        fn to_f64(&self) -> f64 {
          f64::from(self.into_inner())
        }

        fn to_rational(&self) -> Option<BigRational> {
          BigRational::from_float(f64::from(self.into_inner()))
        }

        fn cmp_cross(a1: &[Self; 2], a2: &[Self; 2], b1: &[Self; 2], b2: &[Self; 2]) -> Ordering {
          float_cmp_cross(
            [f64::from(a1[0].into_inner()), f64::from(a1[1].into_inner())],
            [f64::from(a2[0].into_inner()), f64::from(a2[1].into_inner())],
            [f64::from(b1[0].into_inner()), f64::from(b1[1].into_inner())],
            [f64::from(b2[0].into_inner()), f64::from(b2[1].into_inner())],
          )
        }

        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          float_orient(
            [f64::from(p[0].into_inner()), f64::from(p[1].into_inner())],
            [f64::from(q[0].into_inner()), f64::from(q[1].into_inner())],
            [f64::from(r[0].into_inner()), f64::from(r[1].into_inner())],
          )
        }
      }
    )*
  };
}

fixed_precision!(i8, u8, u16);
fixed_precision!(i16, u16, u32);
fixed_precision!(i32, u32, u64);
fixed_precision!(i64, u64, u128);
arbitrary_precision!(BigInt, BigRational);
floating_precision!(f32, f64);
wrapped_floating_precision!(
  OrderedFloat<f32> => |val: i8| OrderedFloat(f32::from(val)),
  OrderedFloat<f64> => |val: i8| OrderedFloat(f64::from(val)),
  NotNan<f32> => |val: i8| NotNan::new(f32::from(val)).unwrap_or_default(),
  NotNan<f64> => |val: i8| NotNan::new(f64::from(val)).unwrap_or_default()
);

#[cfg(feature = "rug")]
impl GeometryScalar for rug::Integer {
  fn from_constant(val: i8) -> Self {
    rug::Integer::from(val)
  }

  fn to_f64(&self) -> f64 {
    rug::Integer::to_f64(self)
  }

  fn to_rational(&self) -> Option<BigRational> {
    let digits = self.to_string_radix(16);
    BigInt::parse_bytes(digits.as_bytes(), 16).map(BigRational::from_integer)
  }

  fn cmp_cross(a1: &[Self; 2], a2: &[Self; 2], b1: &[Self; 2], b2: &[Self; 2]) -> Ordering {
    let ux = rug::Integer::from(&a2[0] - &a1[0]);
    let uy = rug::Integer::from(&a2[1] - &a1[1]);
    let vx = rug::Integer::from(&b2[0] - &b1[0]);
    let vy = rug::Integer::from(&b2[1] - &b1[1]);
    let lhs = ux * vy;
    let rhs = uy * vx;
    lhs.cmp(&rhs)
  }
}

// Exact sign of a cross product between two float vectors. Coordinates that
// cannot be lifted into rationals (NaN, infinities) fall back to plain
// floating arithmetic, where NaN compares as zero.
fn float_cmp_cross(a1: [f64; 2], a2: [f64; 2], b1: [f64; 2], b2: [f64; 2]) -> Ordering {
  let coords = [a1[0], a1[1], a2[0], a2[1], b1[0], b1[1], b2[0], b2[1]];
  let exact: Result<[BigRational; 8], ()> =
    try_array_init(|i| BigRational::from_float(coords[i]).ok_or(()));
  match exact {
    Ok([a1x, a1y, a2x, a2y, b1x, b1y, b2x, b2y]) => {
      let lhs = (a2x - a1x) * (b2y - b1y);
      let rhs = (a2y - a1y) * (b2x - b1x);
      lhs.cmp(&rhs)
    }
    Err(()) => {
      let cross = (a2[0] - a1[0]) * (b2[1] - b1[1]) - (a2[1] - a1[1]) * (b2[0] - b1[0]);
      cross.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
    }
  }
}

fn float_orient(p: [f64; 2], q: [f64; 2], r: [f64; 2]) -> Ordering {
  let orient = geometry_predicates::predicates::orient2d(p, q, r);
  if orient > 0.0 {
    Ordering::Greater
  } else if orient < 0.0 {
    Ordering::Less
  } else {
    Ordering::Equal
  }
}

#[cfg(test)]
pub mod testing;

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::Point;
  use crate::testing::any_r;

  use proptest::prelude::*;

  proptest! {
    #[test]
    fn cmp_cross_i8_matches_wide(pts: [i8; 8]) {
      let [a, b, c, d, e, f, g, h] = pts;
      let wide = |v: i8| i64::from(v);
      let cross = (wide(c) - wide(a)) * (wide(h) - wide(f)) - (wide(d) - wide(b)) * (wide(g) - wide(e));
      prop_assert_eq!(
        i8::cmp_cross(&[a, b], &[c, d], &[e, f], &[g, h]),
        cross.cmp(&0)
      );
    }

    #[test]
    fn cmp_cross_antisymmetric(pts: [i64; 8]) {
      let [a, b, c, d, e, f, g, h] = pts;
      prop_assert_eq!(
        i64::cmp_cross(&[a, b], &[c, d], &[e, f], &[g, h]),
        i64::cmp_cross(&[e, f], &[g, h], &[a, b], &[c, d]).reverse()
      );
    }

    #[test]
    fn cmp_cross_f64_matches_bigint(pts: [i32; 8]) {
      let [a, b, c, d, e, f, g, h] = pts.map(f64::from);
      let [ia, ib, ic, id, ie, if_, ig, ih] = pts.map(BigInt::from);
      prop_assert_eq!(
        f64::cmp_cross(&[a, b], &[c, d], &[e, f], &[g, h]),
        BigInt::cmp_cross(&[ia, ib], &[ic, id], &[ie, if_], &[ig, ih])
      );
    }

    #[test]
    fn cmp_slope_bigint_matches_rational(p in any_r::<2>(), q in any_r::<2>(), r in any_r::<2>()) {
      let lift = |pt: &Point<BigInt>| pt.cast(BigRational::from_integer);
      prop_assert_eq!(
        BigInt::cmp_slope(&p, &q, &r),
        BigRational::cmp_slope(&lift(&p), &lift(&q), &lift(&r))
      );
    }
  }

  #[test]
  fn cmp_cross_extremes() {
    assert_eq!(
      i8::cmp_cross(&[i8::MIN, i8::MIN], &[i8::MAX, i8::MAX], &[i8::MIN, i8::MAX], &[i8::MAX, i8::MIN]),
      Ordering::Less
    );
    assert_eq!(
      i64::cmp_cross(&[0, 0], &[i64::MAX, i64::MAX], &[i64::MIN, i64::MIN], &[0, 0]),
      Ordering::Equal
    );
  }

  #[test]
  fn float_cross_is_exact() {
    // 0.6000000000000001 is one ulp above 2 * 0.3.
    assert_ne!(
      f64::cmp_cross(&[0.0, 0.0], &[0.1, 0.2], &[0.0, 0.0], &[0.3, 0.6000000000000001]),
      Ordering::Equal
    );
    assert_eq!(
      f64::cmp_cross(&[0.0, 0.0], &[0.5, 0.25], &[1.0, 1.0], &[2.0, 1.5]),
      Ordering::Equal
    );
  }

  #[test]
  fn float_cross_nan_is_total() {
    assert_eq!(
      f64::cmp_cross(&[f64::NAN, 0.0], &[1.0, 1.0], &[0.0, 0.0], &[1.0, 0.0]),
      Ordering::Equal
    );
  }

  #[test]
  fn rational_lift_is_exact() {
    assert_eq!(
      i64::MAX.to_rational(),
      Some(BigRational::from_integer(BigInt::from(i64::MAX)))
    );
    assert_eq!(0.5f64.to_rational(), Some(BigRational::new(1.into(), 2.into())));
    assert_eq!(f64::NAN.to_rational(), None);
    assert_eq!(f32::INFINITY.to_rational(), None);
    assert_eq!(
      BigInt::from(-7).to_rational(),
      Some(BigRational::from_integer((-7).into()))
    );
  }

  #[test]
  fn constants() {
    assert_eq!(NotNan::<f64>::from_constant(-3).into_inner(), -3.0);
    assert_eq!(BigRational::from_constant(7), BigRational::from_integer(7.into()));
    assert_eq!(i16::from_constant(-128), -128);
  }
}
