pub mod compare;
pub mod intersect_2d;
pub mod vector_2d;

pub use compare::relative_compare;
pub use vector_2d::{determinant, div_or_zero, normalize_or_x};

/// Immutable 2D point / vector used throughout the router.
///
/// Canvas coordinates: `x` grows to the right, `y` grows downward.
pub type Vec2d = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Relative difference below which two cost components compare equal.
pub const RELATIVE_EPSILON: f64 = 1e-6;
