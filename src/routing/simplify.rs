use crate::math::Vec2d;

/// Drops interior points that lie on a straight run.
///
/// A point is removed when it, the last kept point and the next point share
/// an x coordinate or share a y coordinate. The first and last points are
/// always kept.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn simplify_path(points: &[Vec2d]) -> Vec<Vec2d> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };

    let mut result = Vec::with_capacity(points.len());
    result.push(first);
    let mut previous = first;

    for window in points.windows(3) {
        let (point, next) = (window[1], window[2]);
        // Exact comparison: route points are copied from guide ordinates.
        if previous.x == point.x && point.x == next.x {
            continue;
        }
        if previous.y == point.y && point.y == next.y {
            continue;
        }
        result.push(point);
        previous = point;
    }

    if let Some(&last) = rest.last() {
        result.push(last);
    }
    result
}

/// [`simplify_path`] that passes the no-route marker through unchanged.
#[must_use]
pub fn simplify_route(points: Option<Vec<Vec2d>>) -> Option<Vec<Vec2d>> {
    points.map(|p| simplify_path(&p))
}
