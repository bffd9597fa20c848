use std::ops::{Index, IndexMut};

use crate::math::{div_or_zero, Vec2d};

use super::Rectangle;

/// One of the four axis-aligned travel directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Axis of a guide or a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Direction {
    /// All directions, in [`Direction::index`] order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the axis this direction travels along.
    #[must_use]
    pub fn orientation(self) -> Orientation {
        match self {
            Direction::Up | Direction::Down => Orientation::Vertical,
            Direction::Left | Direction::Right => Orientation::Horizontal,
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit vector pointing in this direction (y grows downward).
    #[must_use]
    pub fn unit(self) -> Vec2d {
        match self {
            Direction::Up => Vec2d::new(0.0, -1.0),
            Direction::Down => Vec2d::new(0.0, 1.0),
            Direction::Left => Vec2d::new(-1.0, 0.0),
            Direction::Right => Vec2d::new(1.0, 0.0),
        }
    }

    /// Stable slot index in `0..4`, matching [`Direction::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// Side of `shape` nearest to a point given relative to the shape's
    /// top-left corner.
    ///
    /// The shape is split along both diagonals; the triangle containing the
    /// point names the side a connector should leave through.
    #[must_use]
    pub fn outside(shape: &Rectangle, relative_position: &Vec2d) -> Self {
        let fraction = div_or_zero(relative_position, &shape.size());
        let upper_right = fraction.x > fraction.y;
        let lower_right = fraction.x + fraction.y > 1.0;
        match (upper_right, lower_right) {
            (true, true) => Direction::Right,
            (true, false) => Direction::Up,
            (false, true) => Direction::Down,
            (false, false) => Direction::Left,
        }
    }

    /// Direction a connector travels when entering `shape` through the side
    /// nearest to the point.
    #[must_use]
    pub fn inside(shape: &Rectangle, relative_position: &Vec2d) -> Self {
        Self::outside(shape, relative_position).reversed()
    }
}

/// A value stored once per [`Orientation`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PerOrientation<T> {
    pub horizontal: T,
    pub vertical: T,
}

impl<T> Index<Orientation> for PerOrientation<T> {
    type Output = T;

    fn index(&self, orientation: Orientation) -> &T {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }
}

impl<T> IndexMut<Orientation> for PerOrientation<T> {
    fn index_mut(&mut self, orientation: Orientation) -> &mut T {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        }
    }
}
