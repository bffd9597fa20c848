use crate::error::{Result, RoutingError};

/// Tuning parameters for the router.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingParams {
    line_offset: f64,
    stem_length: f64,
    center_line_weight: f64,
    obstacle_margins: bool,
}

impl Default for RoutingParams {
    fn default() -> Self {
        Self {
            line_offset: 40.0,
            stem_length: 40.0,
            center_line_weight: 0.9,
            obstacle_margins: false,
        }
    }
}

impl RoutingParams {
    /// Creates routing parameters.
    ///
    /// - `line_offset`: clearance between a shape and its margin guides.
    /// - `stem_length`: straight run expected before the first bend.
    /// - `center_line_weight`: length multiplier for the midpoint guides.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidParameters`] if `line_offset` or
    /// `stem_length` is not a positive finite number, or if
    /// `center_line_weight` is outside `(0, 1]`.
    pub fn new(line_offset: f64, stem_length: f64, center_line_weight: f64) -> Result<Self> {
        if !(line_offset.is_finite() && line_offset > 0.0) {
            return Err(RoutingError::InvalidParameters(format!(
                "line offset must be positive, got {line_offset}"
            ))
            .into());
        }
        if !(stem_length.is_finite() && stem_length > 0.0) {
            return Err(RoutingError::InvalidParameters(format!(
                "stem length must be positive, got {stem_length}"
            ))
            .into());
        }
        if !(center_line_weight > 0.0 && center_line_weight <= 1.0) {
            return Err(RoutingError::InvalidParameters(format!(
                "center line weight must be in (0, 1], got {center_line_weight}"
            ))
            .into());
        }
        Ok(Self {
            line_offset,
            stem_length,
            center_line_weight,
            obstacle_margins: false,
        })
    }

    /// Also emit margin guides around caller-supplied obstacles.
    #[must_use]
    pub fn with_obstacle_margins(mut self, enabled: bool) -> Self {
        self.obstacle_margins = enabled;
        self
    }

    #[must_use]
    pub fn line_offset(&self) -> f64 {
        self.line_offset
    }

    #[must_use]
    pub fn stem_length(&self) -> f64 {
        self.stem_length
    }

    #[must_use]
    pub fn center_line_weight(&self) -> f64 {
        self.center_line_weight
    }

    #[must_use]
    pub fn obstacle_margins(&self) -> bool {
        self.obstacle_margins
    }
}
