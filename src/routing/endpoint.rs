use crate::geometry::{Direction, Rectangle};
use crate::math::Vec2d;

/// How a connector attaches at one of its ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EndpointConfig {
    /// A bare point; the connector may approach from any side.
    Free { point: Vec2d },
    /// A point on a shape with a mandatory travel direction.
    Directed {
        point: Vec2d,
        /// Direction the connector travels when leaving (source) or along
        /// which it attaches (target).
        direction: Direction,
        /// `true` when `point` is an interior anchor of `rectangle` rather
        /// than a point just outside it.
        inside: bool,
        /// Bounding box of the owning shape.
        rectangle: Rectangle,
    },
}

impl EndpointConfig {
    /// Creates a free endpoint.
    #[must_use]
    pub fn free(point: Vec2d) -> Self {
        Self::Free { point }
    }

    /// Creates an endpoint just outside `rectangle`.
    #[must_use]
    pub fn outside(point: Vec2d, direction: Direction, rectangle: Rectangle) -> Self {
        Self::Directed {
            point,
            direction,
            inside: false,
            rectangle,
        }
    }

    /// Creates an endpoint anchored inside `rectangle`.
    #[must_use]
    pub fn inside(point: Vec2d, direction: Direction, rectangle: Rectangle) -> Self {
        Self::Directed {
            point,
            direction,
            inside: true,
            rectangle,
        }
    }

    /// Returns the anchor point.
    #[must_use]
    pub fn point(&self) -> Vec2d {
        match *self {
            Self::Free { point } | Self::Directed { point, .. } => point,
        }
    }

    /// Returns the mandatory direction, if any.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        match *self {
            Self::Free { .. } => None,
            Self::Directed { direction, .. } => Some(direction),
        }
    }

    /// Owning rectangle that counts as an obstacle for the route.
    ///
    /// Interior anchors start inside their shape, so their rectangle never
    /// obstructs the route.
    #[must_use]
    pub fn obstacle(&self) -> Option<Rectangle> {
        match *self {
            Self::Directed {
                inside: false,
                rectangle,
                ..
            } => Some(rectangle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_endpoint_has_no_direction_or_obstacle() {
        let ep = EndpointConfig::free(Vec2d::new(1.0, 2.0));
        assert_eq!(ep.point(), Vec2d::new(1.0, 2.0));
        assert_eq!(ep.direction(), None);
        assert_eq!(ep.obstacle(), None);
    }

    #[test]
    fn only_outside_anchors_are_obstacles() {
        let rect = Rectangle::new(0.0, 0.0, 40.0, 40.0);
        let outside = EndpointConfig::outside(Vec2d::new(40.0, 20.0), Direction::Right, rect);
        let inside = EndpointConfig::inside(Vec2d::new(20.0, 20.0), Direction::Right, rect);
        assert_eq!(outside.obstacle(), Some(rect));
        assert_eq!(inside.obstacle(), None);
        assert_eq!(inside.direction(), Some(Direction::Right));
    }
}
