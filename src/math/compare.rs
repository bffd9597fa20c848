use std::cmp::Ordering;

use super::RELATIVE_EPSILON;

/// Compares two scalars with a relative tolerance.
///
/// When `second` is finite and non-zero the relative difference
/// `first / second - 1` decides, and magnitudes up to [`RELATIVE_EPSILON`]
/// count as equal. Otherwise the plain difference `first - second` decides.
/// Note that the sign of the relative difference follows the sign of
/// `second`; route costs are never negative.
#[must_use]
pub fn relative_compare(first: f64, second: f64) -> Ordering {
    let diff = if second.is_finite() && second != 0.0 {
        let relative = first / second - 1.0;
        if relative.abs() > RELATIVE_EPSILON {
            relative
        } else {
            0.0
        }
    } else {
        first - second
    };
    diff.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}
