use std::cmp::Ordering;
use std::ops::Add;

use crate::math::relative_compare;

/// Composite route cost.
///
/// Costs add component-wise and compare lexicographically by collision
/// length, corner count, missing stem fraction and finally metric length.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Distance {
    /// Euclidean length scaled by the guide's weight factor.
    pub metric_distance: f64,
    /// Number of direction changes.
    pub number_of_corners: f64,
    /// Length running through obstacle interiors.
    pub collision_length: f64,
    /// Sum of the stem penalties at the traversed vertices.
    pub missing_stem_fraction: f64,
}

impl Distance {
    pub const ZERO: Distance = Distance::new(0.0, 0.0, 0.0, 0.0);

    /// A single direction change.
    pub const CORNER: Distance = Distance::new(0.0, 1.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(
        metric_distance: f64,
        number_of_corners: f64,
        collision_length: f64,
        missing_stem_fraction: f64,
    ) -> Self {
        Self {
            metric_distance,
            number_of_corners,
            collision_length,
            missing_stem_fraction,
        }
    }

    /// Lexicographic comparison with a relative tolerance per component.
    ///
    /// The tolerance is not transitive, so this is not a total order and
    /// there is no `Ord` impl.
    #[must_use]
    pub fn compare(&self, other: &Distance) -> Ordering {
        relative_compare(self.collision_length, other.collision_length)
            .then_with(|| relative_compare(self.number_of_corners, other.number_of_corners))
            .then_with(|| {
                relative_compare(self.missing_stem_fraction, other.missing_stem_fraction)
            })
            .then_with(|| relative_compare(self.metric_distance, other.metric_distance))
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, other: Distance) -> Distance {
        Distance::new(
            self.metric_distance + other.metric_distance,
            self.number_of_corners + other.number_of_corners,
            self.collision_length + other.collision_length,
            self.missing_stem_fraction + other.missing_stem_fraction,
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn addition_is_component_wise() {
        let sum = Distance::new(1.0, 2.0, 3.0, 4.0) + Distance::new(10.0, 20.0, 30.0, 40.0);
        assert_relative_eq!(sum.metric_distance, 11.0);
        assert_relative_eq!(sum.number_of_corners, 22.0);
        assert_relative_eq!(sum.collision_length, 33.0);
        assert_relative_eq!(sum.missing_stem_fraction, 44.0);
    }

    #[test]
    fn collision_dominates_everything() {
        let clipping = Distance::new(10.0, 0.0, 1.0, 0.0);
        let detour = Distance::new(1000.0, 5.0, 0.0, 2.0);
        assert_eq!(detour.compare(&clipping), Ordering::Less);
    }

    #[test]
    fn corners_dominate_stem_and_length() {
        let bendy = Distance::new(10.0, 3.0, 0.0, 0.0);
        let straight = Distance::new(500.0, 1.0, 0.0, 1.5);
        assert_eq!(straight.compare(&bendy), Ordering::Less);
    }

    #[test]
    fn stem_dominates_length() {
        let early_bend = Distance::new(10.0, 2.0, 0.0, 0.5);
        let late_bend = Distance::new(20.0, 2.0, 0.0, 0.0);
        assert_eq!(late_bend.compare(&early_bend), Ordering::Less);
    }

    #[test]
    fn length_breaks_remaining_ties() {
        let short = Distance::new(10.0, 2.0, 0.0, 0.0);
        let long = Distance::new(20.0, 2.0, 0.0, 0.0);
        assert_eq!(short.compare(&long), Ordering::Less);
        assert_eq!(long.compare(&short), Ordering::Greater);
    }

    #[test]
    fn nearly_equal_costs_compare_equal() {
        let a = Distance::new(100.0, 1.0, 0.0, 0.0);
        let b = Distance::new(100.000_000_01, 1.0, 0.0, 0.0);
        assert_eq!(a.compare(&b), Ordering::Equal);
    }
}
