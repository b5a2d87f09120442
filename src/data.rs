mod line;
pub(crate) mod point;
mod polyline;
mod segment;
mod vector;

pub use line::*;
pub use point::Point;
pub use polyline::*;
pub use segment::*;
pub use vector::Vector;
