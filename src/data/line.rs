use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};
use std::cmp::Ordering;

use super::Point;
use super::Vector;
use crate::Intersects;
use crate::{GeometryScalar, Orientation};

///////////////////////////////////////////////////////////////////////////////
// Line

/// Infinite line through two points.
///
/// The points are allowed to coincide. Such a degenerate line has no
/// direction; it is simultaneously [horizontal](Line::is_horizontal) and
/// [vertical](Line::is_vertical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line<T> {
  pub p1: Point<T, 2>,
  pub p2: Point<T, 2>,
}

/// How two infinite lines relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntersectionType {
  /// The lines cross in exactly one point.
  Point,
  /// The lines never meet.
  Parallel,
  /// The lines share infinitely many points.
  Overlapping,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ILine {
  Crossing(Point<f64, 2>), // Lines meet in a single point.
  Overlap,                 // Lines are colinear.
}

impl<T> Line<T> {
  pub fn new(p1: Point<T, 2>, p2: Point<T, 2>) -> Line<T> {
    Line { p1, p2 }
  }

  pub fn is_degenerate(&self) -> bool
  where
    T: PartialEq,
  {
    self.p1 == self.p2
  }

  pub fn is_horizontal(&self) -> bool
  where
    T: PartialEq,
  {
    self.p1.y_coord() == self.p2.y_coord()
  }

  pub fn is_vertical(&self) -> bool
  where
    T: PartialEq,
  {
    self.p1.x_coord() == self.p2.x_coord()
  }

  pub fn dx(&self) -> T
  where
    T: GeometryScalar,
  {
    self.p2.x_coord().clone() - self.p1.x_coord().clone()
  }

  pub fn dy(&self) -> T
  where
    T: GeometryScalar,
  {
    self.p2.y_coord().clone() - self.p1.y_coord().clone()
  }

  pub fn direction(&self) -> Vector<T, 2>
  where
    T: GeometryScalar,
  {
    &self.p2 - &self.p1
  }

  /// Distance between the two defining points.
  pub fn length(&self) -> f64
  where
    T: GeometryScalar,
  {
    self.p1.distance(&self.p2)
  }

  /// `dy / dx`, or `None` for vertical lines.
  pub fn slope(&self) -> Option<f64>
  where
    T: GeometryScalar,
  {
    if self.is_vertical() {
      None
    } else {
      Some(self.dy().to_f64() / self.dx().to_f64())
    }
  }

  /// The y coordinate where the line crosses the y axis, or `None` for
  /// vertical lines.
  pub fn y_intercept(&self) -> Option<f64>
  where
    T: GeometryScalar,
  {
    let slope = self.slope()?;
    Some(self.p1.y_coord().to_f64() - slope * self.p1.x_coord().to_f64())
  }

  /// Exact test whether `pt` lies on the line. A degenerate line only
  /// contains its own point.
  pub fn contains(&self, pt: &Point<T, 2>) -> bool
  where
    T: GeometryScalar,
  {
    if self.is_degenerate() {
      &self.p1 == pt
    } else {
      self.p1.orientation(&self.p2, pt).is_colinear()
    }
  }

  /// The x coordinate where the line crosses the horizontal line at height
  /// `y`. `None` if the line is itself horizontal.
  pub fn horizontal_intersection(&self, y: f64) -> Option<f64>
  where
    T: GeometryScalar,
  {
    if self.is_horizontal() {
      return None;
    }
    let [x1, y1] = self.p1.to_f64().array;
    let [x2, y2] = self.p2.to_f64().array;
    Some(x1 + (y - y1) * (x2 - x1) / (y2 - y1))
  }

  /// The y coordinate where the line crosses the vertical line at `x`.
  /// `None` if the line is itself vertical.
  pub fn vertical_intersection(&self, x: f64) -> Option<f64>
  where
    T: GeometryScalar,
  {
    if self.is_vertical() {
      return None;
    }
    let [x1, y1] = self.p1.to_f64().array;
    let [x2, y2] = self.p2.to_f64().array;
    Some(y1 + (x - x1) * (y2 - y1) / (x2 - x1))
  }

  /// Classify how `self` and `other` meet. The crossing point, if any, is
  /// reported in the floating accumulator since it generally does not lie on
  /// the coordinate grid of `T`.
  ///
  /// ```rust
  /// # use drawgeom::data::{IntersectionType, Line, Point};
  /// let a = Line::new(Point::new([0, 0]), Point::new([2, 2]));
  /// let b = Line::new(Point::new([0, 2]), Point::new([2, 0]));
  /// assert_eq!(
  ///   a.intersection(&b),
  ///   (IntersectionType::Point, Some(Point::new([1.0, 1.0])))
  /// );
  /// ```
  pub fn intersection(&self, other: &Line<T>) -> (IntersectionType, Option<Point<f64, 2>>)
  where
    T: GeometryScalar,
  {
    match self.intersect(other) {
      Some(ILine::Crossing(pt)) => (IntersectionType::Point, Some(pt)),
      Some(ILine::Overlap) => (IntersectionType::Overlapping, None),
      None => (IntersectionType::Parallel, None),
    }
  }
}

impl<T> From<(Point<T, 2>, Point<T, 2>)> for Line<T> {
  fn from((p1, p2): (Point<T, 2>, Point<T, 2>)) -> Line<T> {
    Line { p1, p2 }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Intersects

impl<T> Intersects for &Line<T>
where
  T: GeometryScalar,
{
  type Result = ILine;
  fn intersect(self, other: &Line<T>) -> Option<Self::Result> {
    let parallel = T::cmp_cross(&self.p1, &self.p2, &other.p1, &other.p2) == Ordering::Equal;
    if !parallel {
      return Some(ILine::Crossing(crossing(self, other)));
    }
    // A zero direction is parallel to everything, so the colinearity test
    // has to be anchored on a line that actually has a direction.
    let colinear = match (self.is_degenerate(), other.is_degenerate()) {
      (true, true) => self.p1 == other.p1,
      (true, false) => Orientation::new(&other.p1, &other.p2, &self.p1).is_colinear(),
      (false, _) => Orientation::new(&self.p1, &self.p2, &other.p1).is_colinear(),
    };
    if colinear {
      Some(ILine::Overlap)
    } else {
      None
    }
  }
}

// Solve `a.p1 + t * d1 = b.p1 + s * d2` for non-parallel lines. Nearly
// parallel lines can lose the denominator to rounding, in which case the
// solve is repeated in exact arithmetic.
fn crossing<T: GeometryScalar>(a: &Line<T>, b: &Line<T>) -> Point<f64, 2> {
  let origin = a.p1.to_f64();
  let d1 = a.p2.to_f64() - origin;
  let d2 = b.p2.to_f64() - b.p1.to_f64();
  let denom = d1.cross(&d2);
  let t = (b.p1.to_f64() - origin).cross(&d2) / denom;
  let pt = &origin + &(d1 * t);
  if denom != 0.0 && pt.iter().all(|v| v.is_finite()) {
    return pt;
  }
  exact_crossing(a, b).unwrap_or(pt)
}

fn exact_crossing<T: GeometryScalar>(a: &Line<T>, b: &Line<T>) -> Option<Point<f64, 2>> {
  let lift = |pt: &Point<T, 2>| -> Option<[BigRational; 2]> {
    Some([pt.x_coord().to_rational()?, pt.y_coord().to_rational()?])
  };
  let [ax, ay] = lift(&a.p1)?;
  let [a2x, a2y] = lift(&a.p2)?;
  let [bx, by] = lift(&b.p1)?;
  let [b2x, b2y] = lift(&b.p2)?;
  let (d1x, d1y) = (a2x - &ax, a2y - &ay);
  let (d2x, d2y) = (b2x - &bx, b2y - &by);
  let denom = &d1x * &d2y - &d1y * &d2x;
  if denom.is_zero() {
    return None;
  }
  let t = ((bx - &ax) * &d2y - (by - &ay) * &d2x) / denom;
  let x = ax + &t * d1x;
  let y = ay + t * d1y;
  Some(Point::new([ToPrimitive::to_f64(&x)?, ToPrimitive::to_f64(&y)?]))
}

///////////////////////////////////////////////////////////////////////////////
// Tests
