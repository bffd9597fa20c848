use crate::geometry::{Direction, Orientation};
use crate::math::Vec2d;

/// Which connector end a guide was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Source,
    Target,
}

/// Geometric shape of a guide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuideShape {
    /// Unbounded axis-parallel line at a fixed ordinate.
    Line {
        orientation: Orientation,
        ordinate: f64,
    },
    /// Half-line starting at `origin` (exclusive) and running in `direction`.
    Ray { origin: Vec2d, direction: Direction },
}

/// A candidate horizontal or vertical track the route may run along.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guide {
    shape: GuideShape,
    role: Option<Role>,
    weight_factor: f64,
}

impl Guide {
    /// Horizontal line at `y`.
    #[must_use]
    pub fn horizontal(y: f64) -> Self {
        Self::line(Orientation::Horizontal, y)
    }

    /// Vertical line at `x`.
    #[must_use]
    pub fn vertical(x: f64) -> Self {
        Self::line(Orientation::Vertical, x)
    }

    #[must_use]
    pub fn line(orientation: Orientation, ordinate: f64) -> Self {
        Self {
            shape: GuideShape::Line {
                orientation,
                ordinate,
            },
            role: None,
            weight_factor: 1.0,
        }
    }

    #[must_use]
    pub fn ray(origin: Vec2d, direction: Direction) -> Self {
        Self {
            shape: GuideShape::Ray { origin, direction },
            role: None,
            weight_factor: 1.0,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    #[must_use]
    pub fn with_weight_factor(mut self, factor: f64) -> Self {
        self.weight_factor = factor;
        self
    }

    #[must_use]
    pub fn shape(&self) -> &GuideShape {
        &self.shape
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Multiplier applied to the length of edges along this guide.
    #[must_use]
    pub fn weight_factor(&self) -> f64 {
        self.weight_factor
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        match self.shape {
            GuideShape::Line { orientation, .. } => orientation,
            GuideShape::Ray { direction, .. } => direction.orientation(),
        }
    }

    /// The fixed coordinate: `y` for horizontal guides, `x` for vertical ones.
    #[must_use]
    pub fn ordinate(&self) -> f64 {
        match self.shape {
            GuideShape::Line { ordinate, .. } => ordinate,
            GuideShape::Ray { origin, direction } => match direction.orientation() {
                Orientation::Horizontal => origin.y,
                Orientation::Vertical => origin.x,
            },
        }
    }

    /// Origin and direction if this guide is a ray.
    #[must_use]
    pub fn as_ray(&self) -> Option<(Vec2d, Direction)> {
        match self.shape {
            GuideShape::Ray { origin, direction } => Some((origin, direction)),
            GuideShape::Line { .. } => None,
        }
    }

    /// Returns whether `point` lies on this guide.
    ///
    /// Lines accept any point with the matching ordinate. Rays additionally
    /// require the point to be strictly ahead of the origin.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn contains(&self, point: &Vec2d) -> bool {
        // Exact comparison: intersection coordinates are copied from ordinates.
        match self.shape {
            GuideShape::Line {
                orientation: Orientation::Horizontal,
                ordinate,
            } => point.y == ordinate,
            GuideShape::Line {
                orientation: Orientation::Vertical,
                ordinate,
            } => point.x == ordinate,
            GuideShape::Ray { origin, direction } => match direction {
                Direction::Up => point.x == origin.x && point.y < origin.y,
                Direction::Down => point.x == origin.x && point.y > origin.y,
                Direction::Left => point.y == origin.y && point.x < origin.x,
                Direction::Right => point.y == origin.y && point.x > origin.x,
            },
        }
    }

    /// Crossing point of two perpendicular guides.
    ///
    /// `None` for parallel guides, and when the crossing falls on or behind
    /// the origin of a ray.
    #[must_use]
    pub fn intersection(&self, other: &Guide) -> Option<Vec2d> {
        let point = match (self.orientation(), other.orientation()) {
            (Orientation::Horizontal, Orientation::Vertical) => {
                Vec2d::new(other.ordinate(), self.ordinate())
            }
            (Orientation::Vertical, Orientation::Horizontal) => {
                Vec2d::new(self.ordinate(), other.ordinate())
            }
            _ => return None,
        };
        (self.contains(&point) && other.contains(&point)).then_some(point)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn line_orientation_and_ordinate() {
        let h = Guide::horizontal(5.0);
        assert_eq!(h.orientation(), Orientation::Horizontal);
        assert!((h.ordinate() - 5.0).abs() < f64::EPSILON);
        assert!(h.role().is_none());
        assert!((h.weight_factor() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ray_ordinate_comes_from_origin() {
        let right = Guide::ray(Vec2d::new(3.0, 7.0), Direction::Right);
        assert_eq!(right.orientation(), Orientation::Horizontal);
        assert!((right.ordinate() - 7.0).abs() < f64::EPSILON);

        let down = Guide::ray(Vec2d::new(3.0, 7.0), Direction::Down);
        assert_eq!(down.orientation(), Orientation::Vertical);
        assert!((down.ordinate() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parallel_guides_do_not_intersect() {
        assert!(Guide::horizontal(1.0)
            .intersection(&Guide::horizontal(2.0))
            .is_none());
    }

    #[test]
    fn lines_intersect_in_either_order() {
        let h = Guide::horizontal(4.0);
        let v = Guide::vertical(9.0);
        assert_eq!(h.intersection(&v).unwrap(), Vec2d::new(9.0, 4.0));
        assert_eq!(v.intersection(&h).unwrap(), Vec2d::new(9.0, 4.0));
    }

    #[test]
    fn ray_only_intersects_ahead_of_origin() {
        let ray = Guide::ray(Vec2d::new(40.0, 20.0), Direction::Right);
        assert_eq!(
            ray.intersection(&Guide::vertical(80.0)).unwrap(),
            Vec2d::new(80.0, 20.0)
        );
        assert!(ray.intersection(&Guide::vertical(0.0)).is_none());
        // The origin itself is not part of the ray.
        assert!(ray.intersection(&Guide::vertical(40.0)).is_none());
    }

    #[test]
    fn upward_ray_points_to_smaller_y() {
        let ray = Guide::ray(Vec2d::new(0.0, 100.0), Direction::Up);
        assert!(ray.intersection(&Guide::horizontal(50.0)).is_some());
        assert!(ray.intersection(&Guide::horizontal(150.0)).is_none());
    }

    #[test]
    fn two_rays_must_both_reach_the_crossing() {
        let a = Guide::ray(Vec2d::new(0.0, 0.0), Direction::Right);
        let b = Guide::ray(Vec2d::new(10.0, 10.0), Direction::Up);
        assert_eq!(a.intersection(&b).unwrap(), Vec2d::new(10.0, 0.0));

        let c = Guide::ray(Vec2d::new(10.0, 10.0), Direction::Down);
        assert!(a.intersection(&c).is_none());
    }

    #[test]
    fn builders_set_role_and_weight() {
        let g = Guide::vertical(1.0)
            .with_role(Role::Target)
            .with_weight_factor(0.9);
        assert_eq!(g.role(), Some(Role::Target));
        assert!((g.weight_factor() - 0.9).abs() < f64::EPSILON);
        assert!(g.as_ray().is_none());
    }
}
