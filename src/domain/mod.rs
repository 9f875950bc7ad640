mod bb;
mod core;
mod polygon;

pub use self::core::{Point, PtF, PtI, Shape};
pub use bb::BB;
pub use polygon::{reduce_to_hull, Polygon};
