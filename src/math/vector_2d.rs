use super::Vec2d;

/// 2D determinant (cross product) `a.x * b.y - b.x * a.y`.
#[must_use]
pub fn determinant(a: &Vec2d, b: &Vec2d) -> f64 {
    a.perp(b)
}

/// Returns `v` scaled to unit length, or `(1, 0)` for the zero vector.
#[must_use]
pub fn normalize_or_x(v: &Vec2d) -> Vec2d {
    v.try_normalize(0.0).unwrap_or_else(Vec2d::x)
}

/// Component-wise division where a zero divisor component yields zero.
#[must_use]
pub fn div_or_zero(v: &Vec2d, size: &Vec2d) -> Vec2d {
    let div = |a: f64, b: f64| if b == 0.0 { 0.0 } else { a / b };
    Vec2d::new(div(v.x, size.x), div(v.y, size.y))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn determinant_of_axes() {
        assert_relative_eq!(determinant(&Vec2d::x(), &Vec2d::y()), 1.0);
        assert_relative_eq!(determinant(&Vec2d::y(), &Vec2d::x()), -1.0);
    }

    #[test]
    fn determinant_of_parallel_vectors_is_zero() {
        let a = Vec2d::new(2.0, 3.0);
        assert_relative_eq!(determinant(&a, &(a * 4.0)), 0.0);
    }

    #[test]
    fn normalize_keeps_direction() {
        let n = normalize_or_x(&Vec2d::new(3.0, 4.0));
        assert_relative_eq!(n.x, 0.6);
        assert_relative_eq!(n.y, 0.8);
    }

    #[test]
    fn normalize_zero_falls_back_to_x_axis() {
        assert_eq!(normalize_or_x(&Vec2d::zeros()), Vec2d::new(1.0, 0.0));
    }

    #[test]
    fn div_by_zero_component_is_zero() {
        let r = div_or_zero(&Vec2d::new(10.0, 6.0), &Vec2d::new(0.0, 3.0));
        assert_relative_eq!(r.x, 0.0);
        assert_relative_eq!(r.y, 2.0);
    }
}
