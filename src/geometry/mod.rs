pub mod direction;
pub mod rectangle;
pub mod segment;

pub use direction::{Direction, Orientation, PerOrientation};
pub use rectangle::Rectangle;
pub use segment::LineSegment;
