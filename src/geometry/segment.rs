use crate::math::intersect_2d::segment_segment_crossing_2d;
use crate::math::Vec2d;

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub a: Vec2d,
    pub b: Vec2d,
}

impl LineSegment {
    /// Creates a segment from `a` to `b`.
    #[must_use]
    pub fn new(a: Vec2d, b: Vec2d) -> Self {
        Self { a, b }
    }

    /// Returns the vector from `a` to `b`.
    #[must_use]
    pub fn vector(&self) -> Vec2d {
        self.b - self.a
    }

    /// Returns the length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    /// Point where this segment strictly crosses `other`, if any.
    ///
    /// Touching at an endpoint and overlapping colinear segments do not count.
    #[must_use]
    pub fn intersection_point(&self, other: &LineSegment) -> Option<Vec2d> {
        segment_segment_crossing_2d(&self.a, &self.b, &other.a, &other.b).map(|(pt, _, _)| pt)
    }
}
