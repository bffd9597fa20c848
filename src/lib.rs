pub mod error;
pub mod geometry;
pub mod math;
pub mod routing;

pub use error::{ElbowError, Result};
pub use routing::{route_points, ConnectionRouter, EndpointConfig, RoutingParams};
