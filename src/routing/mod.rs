mod collect;
mod cost;
mod endpoint;
mod graph;
mod guide;
mod params;
mod search;
mod simplify;

pub use collect::collect_guides;
pub use cost::Distance;
pub use endpoint::EndpointConfig;
pub use graph::{Edge, RoutingGraph, Vertex, VertexId};
pub use guide::{Guide, GuideShape, Role};
pub use params::RoutingParams;
pub use search::shortest_path;
pub use simplify::{simplify_path, simplify_route};

use tracing::debug;

use crate::geometry::Rectangle;
use crate::math::Vec2d;

/// Routes an orthogonal connector between two endpoints.
///
/// # Algorithm
///
/// 1. Collect candidate guides: lines around each endpoint, rays along the
///    mandatory directions, and midpoint guides when the directions differ.
/// 2. Build a graph from the guide crossings, costing each edge by weighted
///    length, obstacle collision and missing stem.
/// 3. Search the graph over (vertex, arrival direction) pairs so that
///    corners are counted per path, then simplify the polyline.
///
/// Obstacles are the owning rectangles of endpoints attached from outside
/// plus anything passed to [`ConnectionRouter::with_obstacles`].
#[derive(Debug, Clone)]
pub struct ConnectionRouter {
    source: EndpointConfig,
    target: EndpointConfig,
    obstacles: Vec<Rectangle>,
    params: RoutingParams,
}

impl ConnectionRouter {
    /// Creates a router with default parameters and no extra obstacles.
    #[must_use]
    pub fn new(source: EndpointConfig, target: EndpointConfig) -> Self {
        Self {
            source,
            target,
            obstacles: Vec::new(),
            params: RoutingParams::default(),
        }
    }

    /// Adds rectangles the route should avoid.
    ///
    /// Do not include the shapes of endpoints anchored inside them.
    #[must_use]
    pub fn with_obstacles(mut self, obstacles: impl IntoIterator<Item = Rectangle>) -> Self {
        self.obstacles.extend(obstacles);
        self
    }

    #[must_use]
    pub fn with_params(mut self, params: RoutingParams) -> Self {
        self.params = params;
        self
    }

    /// Computes the route.
    ///
    /// Returns the polyline from the source point to the target point, or
    /// `None` if the candidate graph does not connect the two endpoints.
    #[must_use]
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn execute(&self) -> Option<Vec<Vec2d>> {
        let guides = collect_guides(&self.source, &self.target, &self.obstacles, &self.params);
        let obstacles = self.all_obstacles();
        let graph = RoutingGraph::build(&guides, &obstacles, self.params.stem_length());

        let (Some(source), Some(target)) = (graph.source(), graph.target()) else {
            debug!("no source or target vertex in routing graph");
            return None;
        };
        shortest_path(&graph, source, target)
    }

    /// Endpoint obstacles followed by caller obstacles, without duplicates.
    fn all_obstacles(&self) -> Vec<Rectangle> {
        let mut all: Vec<Rectangle> = Vec::with_capacity(self.obstacles.len() + 2);
        let endpoint_obstacles = [self.source.obstacle(), self.target.obstacle()];
        for rect in endpoint_obstacles
            .into_iter()
            .flatten()
            .chain(self.obstacles.iter().copied())
        {
            if !all.contains(&rect) {
                all.push(rect);
            }
        }
        all
    }
}

/// Routes a connector with default parameters.
///
/// Shorthand for [`ConnectionRouter`] with `obstacles` added.
#[must_use]
pub fn route_points(
    source: EndpointConfig,
    target: EndpointConfig,
    obstacles: &[Rectangle],
) -> Option<Vec<Vec2d>> {
    ConnectionRouter::new(source, target)
        .with_obstacles(obstacles.iter().copied())
        .execute()
}
