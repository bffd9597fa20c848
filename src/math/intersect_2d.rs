use super::{determinant, Vec2d, TOLERANCE};

/// Strict segment-segment crossing in 2D.
///
/// Segment `a` runs from `a0` to `a1`, segment `b` from `b0` to `b1`.
/// Returns `(point, t, u)` where `point = a0 + t * (a1 - a0)` and
/// `point = b1 - u * (b1 - b0)`. Both parameters must lie strictly inside
/// `(0, 1)`: touching at an endpoint is not a crossing. Parallel (and
/// degenerate) segments never cross.
#[must_use]
pub fn segment_segment_crossing_2d(
    a0: &Vec2d,
    a1: &Vec2d,
    b0: &Vec2d,
    b1: &Vec2d,
) -> Option<(Vec2d, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;

    let det = determinant(&da, &db);
    if det.abs() < TOLERANCE {
        return None;
    }

    let ab = b1 - a0;
    let t = determinant(&ab, &db) / det;
    let u = determinant(&da, &ab) / det;

    if 0.0 < t && t < 1.0 && 0.0 < u && u < 1.0 {
        Some((a0 + da * t, t, u))
    } else {
        None
    }
}
