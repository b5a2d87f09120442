use std::ops::Range;

use super::Line;
use super::Point;
use crate::GeometryScalar;

///////////////////////////////////////////////////////////////////////////////
// Segment

/// The part of a line between `start` and `end`, both included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<T> {
  pub start: Point<T, 2>,
  pub end: Point<T, 2>,
}

impl<T> Segment<T> {
  pub fn new(start: Point<T, 2>, end: Point<T, 2>) -> Segment<T> {
    Segment { start, end }
  }

  /// The infinite line this segment lies on.
  pub fn line(&self) -> Line<T>
  where
    T: Clone,
  {
    Line::new(self.start.clone(), self.end.clone())
  }

  #[must_use]
  pub fn reversed(self) -> Segment<T> {
    Segment {
      start: self.end,
      end: self.start,
    }
  }

  pub fn is_degenerate(&self) -> bool
  where
    T: PartialEq,
  {
    self.start == self.end
  }

  pub fn dx(&self) -> T
  where
    T: GeometryScalar,
  {
    self.end.x_coord().clone() - self.start.x_coord().clone()
  }

  pub fn dy(&self) -> T
  where
    T: GeometryScalar,
  {
    self.end.y_coord().clone() - self.start.y_coord().clone()
  }

  pub fn length(&self) -> f64
  where
    T: GeometryScalar,
  {
    self.start.distance(&self.end)
  }

  pub fn contains(&self, pt: &Point<T, 2>) -> bool
  where
    T: GeometryScalar,
  {
    self.start.orientation(&self.end, pt).is_colinear()
      && inner_between(pt.x_coord(), self.start.x_coord(), self.end.x_coord())
      && inner_between(pt.y_coord(), self.start.y_coord(), self.end.y_coord())
  }
}

fn inner_between<T: PartialOrd>(inner: &T, a: &T, b: &T) -> bool {
  let (left, right) = if a < b { (a, b) } else { (b, a) };
  left <= inner && inner <= right
}

impl<T> From<Range<Point<T, 2>>> for Segment<T> {
  fn from(range: Range<Point<T, 2>>) -> Segment<T> {
    Segment::new(range.start, range.end)
  }
}

impl<T> From<Range<(T, T)>> for Segment<T> {
  fn from(range: Range<(T, T)>) -> Segment<T> {
    Segment::new(range.start.into(), range.end.into())
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests

#[cfg(test)]
mod tests {
  use super::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  #[proptest]
  fn contains_endpoints(seg: Segment<i8>) {
    prop_assert!(seg.contains(&seg.start));
    prop_assert!(seg.contains(&seg.end));
  }

  #[proptest]
  fn reversal_keeps_points(seg: Segment<i8>, pt: Point<i8>) {
    prop_assert_eq!(seg.contains(&pt), seg.reversed().contains(&pt));
  }

  #[test]
  fn contains() {
    let seg = Segment::from((0, 0)..(4, 2));
    assert!(seg.contains(&Point::new([2, 1])));
    assert!(!seg.contains(&Point::new([6, 3])));
    assert!(!seg.contains(&Point::new([-2, -1])));
    assert!(!seg.contains(&Point::new([2, 2])));
  }

  #[test]
  fn vertical_contains() {
    let seg = Segment::from((1, 5)..(1, 0));
    assert!(seg.contains(&Point::new([1, 3])));
    assert!(!seg.contains(&Point::new([1, 6])));
  }

  #[test]
  fn degenerate() {
    let seg = Segment::from((3, 3)..(3, 3));
    assert!(seg.is_degenerate());
    assert!(seg.contains(&Point::new([3, 3])));
    assert!(!seg.contains(&Point::new([3, 4])));
    assert_eq!(seg.length(), 0.0);
  }

  #[test]
  fn measurements() {
    let seg = Segment::from((1, 1)..(4, 5));
    assert_eq!((seg.dx(), seg.dy()), (3, 4));
    assert_eq!(seg.length(), 5.0);
    assert_eq!(seg.line(), Line::new(Point::new([1, 1]), Point::new([4, 5])));
  }
}
