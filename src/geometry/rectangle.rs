use crate::error::{GeometryError, Result};
use crate::math::Vec2d;

use super::LineSegment;

/// An axis-aligned rectangle given by its top-left corner and size.
///
/// Used both for obstacle bounding boxes and for the shapes that own
/// connector endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    /// Creates a rectangle without validating its extent.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle, rejecting negative or non-finite values.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] if any value is NaN or infinite,
    /// and [`GeometryError::NegativeExtent`] if the width or height is negative.
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        for (name, value) in [("x", x), ("y", y), ("width", width), ("height", height)] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite(name).into());
            }
        }
        if width < 0.0 || height < 0.0 {
            return Err(GeometryError::NegativeExtent { width, height }.into());
        }
        Ok(Self::new(x, y, width, height))
    }

    /// Smallest rectangle containing all `points`; the zero rectangle when empty.
    #[must_use]
    pub fn bounding_box(points: &[Vec2d]) -> Self {
        let Some(first) = points.first() else {
            return Self::new(0.0, 0.0, 0.0, 0.0);
        };
        let (min, max) = points
            .iter()
            .fold((*first, *first), |(min, max), p| (min.inf(p), max.sup(p)));
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn position(&self) -> Vec2d {
        Vec2d::new(self.x, self.y)
    }

    #[must_use]
    pub fn size(&self) -> Vec2d {
        Vec2d::new(self.width, self.height)
    }

    #[must_use]
    pub fn top_left(&self) -> Vec2d {
        Vec2d::new(self.left(), self.top())
    }

    #[must_use]
    pub fn top_right(&self) -> Vec2d {
        Vec2d::new(self.right(), self.top())
    }

    #[must_use]
    pub fn bottom_left(&self) -> Vec2d {
        Vec2d::new(self.left(), self.bottom())
    }

    #[must_use]
    pub fn bottom_right(&self) -> Vec2d {
        Vec2d::new(self.right(), self.bottom())
    }

    /// The four boundary segments, clockwise from the top edge.
    #[must_use]
    pub fn segments(&self) -> [LineSegment; 4] {
        [
            LineSegment::new(self.top_left(), self.top_right()),
            LineSegment::new(self.top_right(), self.bottom_right()),
            LineSegment::new(self.bottom_right(), self.bottom_left()),
            LineSegment::new(self.bottom_left(), self.top_left()),
        ]
    }

    /// Returns whether `point` lies inside or on the boundary.
    #[must_use]
    pub fn contains_point(&self, point: &Vec2d) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Returns whether `other` lies entirely within this rectangle.
    #[must_use]
    pub fn fully_contains(&self, other: &Rectangle) -> bool {
        self.left() <= other.left()
            && self.right() >= other.right()
            && self.top() <= other.top()
            && self.bottom() >= other.bottom()
    }

    /// Grows the rectangle by `margin` on every side.
    #[must_use]
    pub fn inflate(&self, margin: f64) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }

    /// Length of the part of `segment` that runs through this rectangle.
    ///
    /// Gathers the segment endpoints lying in the rectangle and the strict
    /// crossings with the four sides. Only when exactly two points were found
    /// is a length returned; segments merely touching a corner or running
    /// along a side yield `None`.
    #[must_use]
    pub fn intersection_length(&self, segment: &LineSegment) -> Option<f64> {
        let mut points: Vec<Vec2d> = Vec::with_capacity(6);
        if self.contains_point(&segment.a) {
            points.push(segment.a);
        }
        if self.contains_point(&segment.b) {
            points.push(segment.b);
        }
        points.extend(
            self.segments()
                .iter()
                .filter_map(|side| side.intersection_point(segment)),
        );

        match points.as_slice() {
            [p, q] => Some((p - q).norm()),
            _ => None,
        }
    }
}
