use log::{debug, trace};
use std::f64::consts::PI;
use std::fmt;
use std::ops::Index;

use super::Point;
use super::Segment;
use crate::{Angle, GeometryScalar};

///////////////////////////////////////////////////////////////////////////////
// Polyline

/// Open polygonal chain, typically the bend points of an edge route.
///
/// Points are kept in traversal order. Consecutive duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polyline<T> {
  points: Vec<Point<T, 2>>,
}

impl<T> Default for Polyline<T> {
  fn default() -> Self {
    Polyline { points: Vec::new() }
  }
}

impl<T> Polyline<T> {
  pub fn new() -> Polyline<T> {
    Polyline::default()
  }

  pub fn push(&mut self, pt: Point<T, 2>) {
    self.points.push(pt)
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn points(&self) -> &[Point<T, 2>] {
    &self.points
  }

  pub fn into_points(self) -> Vec<Point<T, 2>> {
    self.points
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T, 2>> {
    self.points.iter()
  }

  pub fn first(&self) -> Option<&Point<T, 2>> {
    self.points.first()
  }

  pub fn last(&self) -> Option<&Point<T, 2>> {
    self.points.last()
  }

  pub fn reverse(&mut self) {
    self.points.reverse()
  }

  /// Remove consecutive duplicate points.
  pub fn unify(&mut self)
  where
    T: PartialEq,
  {
    self.points.dedup()
  }

  pub fn segments(&self) -> impl Iterator<Item = Segment<T>> + '_
  where
    T: Clone,
  {
    self
      .points
      .windows(2)
      .map(|pair| Segment::new(pair[0].clone(), pair[1].clone()))
  }

  /// Sum of the segment lengths.
  pub fn length(&self) -> f64
  where
    T: GeometryScalar,
  {
    self.segments().map(|seg| seg.length()).sum()
  }

  /// The point at `fraction` of the way along the chain. `fraction` is
  /// clamped to `[0, 1]`.
  pub fn position(&self, fraction: f64) -> Option<Point<f64, 2>>
  where
    T: GeometryScalar,
  {
    if self.points.is_empty() {
      return None;
    }
    let mut remaining = fraction.clamp(0.0, 1.0) * self.length();
    for seg in self.segments() {
      let len = seg.length();
      if len > 0.0 && remaining <= len {
        let start = seg.start.to_f64();
        let dir = seg.end.to_f64() - start;
        return Some(&start + &(dir * (remaining / len)));
      }
      remaining -= len;
    }
    self.points.last().map(Point::to_f64)
  }

  /// Remove every bend point that keeps the chain perfectly straight.
  ///
  /// Shorthand for [`Polyline::normalize_with`] with the default
  /// [`Normalization`].
  pub fn normalize(&mut self)
  where
    T: GeometryScalar,
  {
    self.normalize_with(&Normalization::default())
  }

  /// Remove bend points whose interior angle is at least
  /// `params.min_angle`.
  ///
  /// The interior angle at a point is `π` minus the angle the chain turns by
  /// there, so `π` means the chain continues straight on. Angles are always
  /// measured against the current neighbours: removing a point changes the
  /// angles of the points next to it, and scanning repeats until a full pass
  /// removes nothing.
  ///
  /// Without anchors the first and last point are kept. A source anchor acts
  /// as the predecessor of the first point, and a target anchor as the
  /// successor of the last point, which makes those end points removable as
  /// well. Anchors are never added to the chain.
  ///
  /// Chains with fewer than two points are left alone.
  ///
  /// ```rust
  /// # use drawgeom::data::{Normalization, Point, Polyline};
  /// # use drawgeom::Angle;
  /// let mut route: Polyline<i32> = vec![(0, 0), (1, 0), (2, 1), (3, 3)].into_iter().collect();
  /// route.normalize_with(&Normalization::new().with_min_angle(Angle::new(2.0)?));
  /// assert_eq!(route.points(), &[Point::new([0, 0]), Point::new([3, 3])]);
  /// # Ok::<(), drawgeom::Error>(())
  /// ```
  pub fn normalize_with(&mut self, params: &Normalization<T>)
  where
    T: GeometryScalar,
  {
    if self.points.len() < 2 {
      return;
    }
    let before = self.points.len();
    let mut chain = Chain::new(
      params.source.as_ref(),
      &self.points,
      params.target.as_ref(),
    );
    let passes = chain.simplify(params.min_angle);
    let mut keep = chain.survivors().into_iter();
    self.points.retain(|_| keep.next().unwrap_or(true));
    debug!(
      "normalized polyline from {} to {} points in {} passes ({})",
      before,
      self.points.len(),
      passes,
      params.min_angle
    );
  }
}

impl<T> From<Vec<Point<T, 2>>> for Polyline<T> {
  fn from(points: Vec<Point<T, 2>>) -> Polyline<T> {
    Polyline { points }
  }
}

impl<T> From<Polyline<T>> for Vec<Point<T, 2>> {
  fn from(polyline: Polyline<T>) -> Vec<Point<T, 2>> {
    polyline.points
  }
}

impl<T, P: Into<Point<T, 2>>> FromIterator<P> for Polyline<T> {
  fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Polyline<T> {
    Polyline {
      points: iter.into_iter().map(Into::into).collect(),
    }
  }
}

impl<T> Extend<Point<T, 2>> for Polyline<T> {
  fn extend<I: IntoIterator<Item = Point<T, 2>>>(&mut self, iter: I) {
    self.points.extend(iter)
  }
}

impl<T> IntoIterator for Polyline<T> {
  type Item = Point<T, 2>;
  type IntoIter = std::vec::IntoIter<Point<T, 2>>;
  fn into_iter(self) -> Self::IntoIter {
    self.points.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a Polyline<T> {
  type Item = &'a Point<T, 2>;
  type IntoIter = std::slice::Iter<'a, Point<T, 2>>;
  fn into_iter(self) -> Self::IntoIter {
    self.points.iter()
  }
}

impl<T> Index<usize> for Polyline<T> {
  type Output = Point<T, 2>;
  fn index(&self, idx: usize) -> &Point<T, 2> {
    self.points.index(idx)
  }
}

impl<T: fmt::Display> fmt::Display for Polyline<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[")?;
    for (i, pt) in self.points.iter().enumerate() {
      if i > 0 {
        write!(f, ", ")?;
      }
      write!(f, "{}", pt)?;
    }
    write!(f, "]")
  }
}

///////////////////////////////////////////////////////////////////////////////
// Normalization

/// Parameters for [`Polyline::normalize_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct Normalization<T> {
  /// Virtual predecessor of the first point.
  pub source: Option<Point<T, 2>>,
  /// Virtual successor of the last point.
  pub target: Option<Point<T, 2>>,
  /// Points with an interior angle of at least this much are removed.
  pub min_angle: Angle,
}

impl<T> Default for Normalization<T> {
  fn default() -> Self {
    Normalization {
      source: None,
      target: None,
      min_angle: Angle::STRAIGHT,
    }
  }
}

impl<T> Normalization<T> {
  pub fn new() -> Normalization<T> {
    Normalization::default()
  }

  #[must_use]
  pub fn with_source(mut self, source: Point<T, 2>) -> Self {
    self.source = Some(source);
    self
  }

  #[must_use]
  pub fn with_target(mut self, target: Point<T, 2>) -> Self {
    self.target = Some(target);
    self
  }

  #[must_use]
  pub fn with_anchors(self, source: Point<T, 2>, target: Point<T, 2>) -> Self {
    self.with_source(source).with_target(target)
  }

  #[must_use]
  pub fn with_min_angle(mut self, min_angle: Angle) -> Self {
    self.min_angle = min_angle;
    self
  }
}

///////////////////////////////////////////////////////////////////////////////
// Chain

#[derive(Copy, Clone, Debug)]
struct Link {
  prev: Option<usize>,
  next: Option<usize>,
}

// Doubly linked view over the anchors and points of a polyline. Removal
// unlinks a node so neighbour lookups stay O(1) while the order is kept.
struct Chain<'a, T> {
  nodes: Vec<&'a Point<T, 2>>,
  links: Vec<Link>,
  removed: Vec<bool>,
  has_source: bool,
  has_target: bool,
  alive: usize,
}

impl<'a, T: GeometryScalar> Chain<'a, T> {
  fn new(
    source: Option<&'a Point<T, 2>>,
    points: &'a [Point<T, 2>],
    target: Option<&'a Point<T, 2>>,
  ) -> Chain<'a, T> {
    let nodes: Vec<&Point<T, 2>> = source
      .into_iter()
      .chain(points.iter())
      .chain(target)
      .collect();
    let len = nodes.len();
    let links = (0..len)
      .map(|idx| Link {
        prev: idx.checked_sub(1),
        next: Some(idx + 1).filter(|&next| next < len),
      })
      .collect();
    Chain {
      nodes,
      links,
      removed: vec![false; len],
      has_source: source.is_some(),
      has_target: target.is_some(),
      alive: len,
    }
  }

  fn is_anchor(&self, idx: usize) -> bool {
    (self.has_source && idx == 0) || (self.has_target && idx + 1 == self.nodes.len())
  }

  fn unlink(&mut self, idx: usize) {
    let Link { prev, next } = self.links[idx];
    if let Some(prev) = prev {
      self.links[prev].next = next;
    }
    if let Some(next) = next {
      self.links[next].prev = prev;
    }
    self.removed[idx] = true;
    self.alive -= 1;
  }

  // Returns the number of passes made.
  fn simplify(&mut self, min_angle: Angle) -> usize {
    let mut passes = 0;
    // The first node is either an anchor or an end point without a
    // predecessor. Neither is ever removed, so it stays the head.
    while self.alive >= 3 {
      passes += 1;
      let mut changed = false;
      let mut at = Some(0);
      while let Some(idx) = at {
        let Link { prev, next } = self.links[idx];
        at = next;
        let (Some(prev), Some(next)) = (prev, next) else {
          continue;
        };
        if self.is_anchor(idx) {
          continue;
        }
        let angle = interior_angle(self.nodes[prev], self.nodes[idx], self.nodes[next]);
        if angle >= min_angle.radians() {
          trace!(
            "removing bend point {:?} with interior angle {}",
            self.nodes[idx],
            angle
          );
          self.unlink(idx);
          changed = true;
        }
      }
      if !changed {
        break;
      }
    }
    passes
  }

  // One flag per polyline point, anchors excluded.
  fn survivors(&self) -> Vec<bool> {
    let start = usize::from(self.has_source);
    let end = self.nodes.len() - usize::from(self.has_target);
    self.removed[start..end].iter().map(|&gone| !gone).collect()
  }
}

/// Interior angle at `p` on the path `a -> p -> b`, in radians. `π` when the
/// path goes straight through `p` or when either adjacent segment has zero
/// length, `0` when it doubles back. Paths that turn, however slightly, stay
/// strictly below `π`.
fn interior_angle<T: GeometryScalar>(a: &Point<T, 2>, p: &Point<T, 2>, b: &Point<T, 2>) -> f64 {
  if a == p || p == b {
    return PI;
  }
  if T::cmp_cross(a, p, p, b).is_eq() {
    // Colinear: straight on iff both steps move the same way along each axis.
    let same_way = |i: usize| p[i].partial_cmp(&a[i]) == b[i].partial_cmp(&p[i]);
    return if same_way(0) && same_way(1) { PI } else { 0.0 };
  }
  let incoming = p.to_f64() - a.to_f64();
  let outgoing = b.to_f64() - p.to_f64();
  let angle = PI - incoming.cross(&outgoing).abs().atan2(incoming.dot(&outgoing));
  // Tiny turns, or steps that vanish in the accumulator, round up to π.
  angle.min(below_straight())
}

// The largest f64 below π.
fn below_straight() -> f64 {
  f64::from_bits(PI.to_bits() - 1)
}

///////////////////////////////////////////////////////////////////////////////
// Tests
