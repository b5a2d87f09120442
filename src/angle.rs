use std::convert::TryFrom;
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use crate::Error;

/// An unsigned angle between two directions, stored in radians and
/// guaranteed to lie in `[0, π]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
  pub const ZERO: Angle = Angle(0.0);
  pub const RIGHT: Angle = Angle(FRAC_PI_2);
  /// Two directions continuing straight through a point.
  pub const STRAIGHT: Angle = Angle(PI);

  pub fn new(radians: f64) -> Result<Angle, Error> {
    if radians.is_nan() {
      Err(Error::NotANumber)
    } else if !(0.0..=PI).contains(&radians) {
      Err(Error::AngleOutOfRange)
    } else {
      Ok(Angle(radians))
    }
  }

  pub fn radians(self) -> f64 {
    self.0
  }

  pub fn degrees(self) -> f64 {
    self.0.to_degrees()
  }
}

impl Default for Angle {
  fn default() -> Angle {
    Angle::STRAIGHT
  }
}

impl TryFrom<f64> for Angle {
  type Error = Error;
  fn try_from(radians: f64) -> Result<Angle, Error> {
    Angle::new(radians)
  }
}

impl fmt::Display for Angle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Angle({} degrees)", self.degrees())
  }
}
