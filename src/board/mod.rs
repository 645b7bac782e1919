pub mod geometry;
pub mod square;

pub use geometry::BoardGeometry;
pub use square::{Square, SquareError};
