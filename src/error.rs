use thiserror::Error;

/// Top-level error type for the elbow router.
#[derive(Debug, Error)]
pub enum ElbowError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Routing(#[from] RoutingError),
}

/// Errors raised while constructing geometric values.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("rectangle extent must not be negative (width = {width}, height = {height})")]
    NegativeExtent { width: f64, height: f64 },

    #[error("non-finite coordinate: {0}")]
    NonFinite(&'static str),
}

/// Errors related to router configuration.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("invalid routing parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`ElbowError`].
pub type Result<T> = std::result::Result<T, ElbowError>;
