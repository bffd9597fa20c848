use slotmap::SlotMap;
use tracing::debug;

use crate::geometry::{Direction, LineSegment, Orientation, PerOrientation, Rectangle};
use crate::math::Vec2d;

use super::cost::Distance;
use super::guide::{Guide, Role};

slotmap::new_key_type! {
    /// Identifier of a vertex in a [`RoutingGraph`].
    pub struct VertexId;
}

/// Directed edge along a guide.
#[derive(Debug, Clone)]
pub struct Edge {
    pub target: VertexId,
    /// Travel direction from the owning vertex to `target`.
    pub direction: Direction,
    pub cost: Distance,
}

/// Graph node at a guide crossing or at a ray origin.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub point: Vec2d,
    /// Penalty for leaving or entering this vertex along an orientation,
    /// rising towards 1 the closer the vertex is to an endpoint's anchor.
    pub missing_stem_fraction: PerOrientation<f64>,
    pub edges: Vec<Edge>,
}

impl Vertex {
    fn new(point: Vec2d) -> Self {
        Self {
            point,
            missing_stem_fraction: PerOrientation::default(),
            edges: Vec::new(),
        }
    }
}

/// Routing graph built from the crossings of the candidate guides.
///
/// Vertices live in an arena and reference each other by [`VertexId`].
#[derive(Debug, Default)]
pub struct RoutingGraph {
    vertices: SlotMap<VertexId, Vertex>,
    source: Option<VertexId>,
    target: Option<VertexId>,
}

impl RoutingGraph {
    /// Builds the graph for `guides`, costing edges against `obstacles`.
    #[must_use]
    pub fn build(guides: &[Guide], obstacles: &[Rectangle], stem_length: f64) -> Self {
        let mut horizontal: Vec<&Guide> = guides
            .iter()
            .filter(|g| g.orientation() == Orientation::Horizontal)
            .collect();
        let mut vertical: Vec<&Guide> = guides
            .iter()
            .filter(|g| g.orientation() == Orientation::Vertical)
            .collect();
        horizontal.sort_by(|a, b| a.ordinate().total_cmp(&b.ordinate()));
        vertical.sort_by(|a, b| a.ordinate().total_cmp(&b.ordinate()));

        let mut builder = GraphBuilder {
            graph: RoutingGraph::default(),
            obstacles,
        };
        let grid = builder.add_crossings(&vertical, &horizontal, stem_length);

        for (i, guide) in vertical.iter().enumerate() {
            let column = grid[i].iter().copied();
            builder.link_along(guide, column, Direction::Down);
        }
        for (j, guide) in horizontal.iter().enumerate() {
            let row = grid.iter().map(|column| column[j]);
            builder.link_along(guide, row, Direction::Right);
        }

        let graph = builder.graph;
        debug!(
            guides = guides.len(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            has_source = graph.source.is_some(),
            has_target = graph.target.is_some(),
            "built routing graph"
        );
        graph
    }

    /// Returns the vertex with the given id.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Iterates over all vertices.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices.iter()
    }

    /// The vertex the route starts from, if one was tagged.
    #[must_use]
    pub fn source(&self) -> Option<VertexId> {
        self.source
    }

    /// The vertex the route ends at, if one was tagged.
    #[must_use]
    pub fn target(&self) -> Option<VertexId> {
        self.target
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|v| v.edges.len()).sum()
    }

    fn assign_role(&mut self, id: VertexId, role: Role) {
        match role {
            Role::Source => self.source = Some(id),
            Role::Target => self.target = Some(id),
        }
    }
}

struct GraphBuilder<'a> {
    graph: RoutingGraph,
    obstacles: &'a [Rectangle],
}

impl GraphBuilder<'_> {
    /// Creates a vertex for every valid crossing, indexed `[vertical][horizontal]`.
    fn add_crossings(
        &mut self,
        vertical: &[&Guide],
        horizontal: &[&Guide],
        stem_length: f64,
    ) -> Vec<Vec<Option<VertexId>>> {
        let mut grid = Vec::with_capacity(vertical.len());
        for v_guide in vertical {
            let mut column = Vec::with_capacity(horizontal.len());
            for h_guide in horizontal {
                let Some(point) = v_guide.intersection(h_guide) else {
                    column.push(None);
                    continue;
                };

                let mut vertex = Vertex::new(point);

                // A bend off a vertical stem leaves horizontally, and vice versa.
                if let Some((origin, _)) = v_guide.as_ray() {
                    let dist = (origin.y - point.y).abs();
                    if dist < stem_length {
                        vertex.missing_stem_fraction[Orientation::Horizontal] =
                            (stem_length - dist) / stem_length;
                    }
                }
                if let Some((origin, _)) = h_guide.as_ray() {
                    let dist = (origin.x - point.x).abs();
                    if dist < stem_length {
                        vertex.missing_stem_fraction[Orientation::Vertical] =
                            (stem_length - dist) / stem_length;
                    }
                }

                let id = self.graph.vertices.insert(vertex);

                // Both lines of a free endpoint cross exactly at its point.
                if let Some(role) = v_guide.role() {
                    if h_guide.role() == Some(role) {
                        self.graph.assign_role(id, role);
                    }
                }

                column.push(Some(id));
            }
            grid.push(column);
        }
        grid
    }

    /// Connects consecutive vertices along `guide`.
    ///
    /// `forward` is the travel direction in ascending grid order (`Down` for
    /// vertical guides, `Right` for horizontal ones). A role-bearing ray also
    /// gets a vertex at its origin, linked to the nearest crossing: the first
    /// one when the ray points `forward`, the last one otherwise.
    fn link_along(
        &mut self,
        guide: &Guide,
        cells: impl Iterator<Item = Option<VertexId>>,
        forward: Direction,
    ) {
        let anchor = match (guide.as_ray(), guide.role()) {
            (Some((origin, direction)), Some(role)) => Some((origin, direction, role)),
            _ => None,
        };

        let mut previous: Option<VertexId> = None;
        for id in cells.flatten() {
            match previous {
                Some(prev) => self.link(guide, prev, id, forward),
                None => {
                    if let Some((origin, direction, role)) = anchor {
                        if direction == forward {
                            self.link_anchor(guide, origin, id, direction, role);
                        }
                    }
                }
            }
            previous = Some(id);
        }

        if let (Some((origin, direction, role)), Some(last)) = (anchor, previous) {
            if direction != forward {
                self.link_anchor(guide, origin, last, direction, role);
            }
        }
    }

    /// Adds a role vertex at a ray origin and links it to `nearest`.
    fn link_anchor(
        &mut self,
        guide: &Guide,
        origin: Vec2d,
        nearest: VertexId,
        direction: Direction,
        role: Role,
    ) {
        let anchor = self.graph.vertices.insert(Vertex::new(origin));
        self.link(guide, anchor, nearest, direction);
        self.graph.assign_role(anchor, role);
    }

    /// Adds `from → to` travelling `direction` and the reverse edge.
    fn link(&mut self, guide: &Guide, from: VertexId, to: VertexId, direction: Direction) {
        let cost = self.edge_cost(guide, from, to);
        if let Some(v) = self.graph.vertices.get_mut(from) {
            v.edges.push(Edge {
                target: to,
                direction,
                cost,
            });
        }
        if let Some(v) = self.graph.vertices.get_mut(to) {
            v.edges.push(Edge {
                target: from,
                direction: direction.reversed(),
                cost,
            });
        }
    }

    fn edge_cost(&self, guide: &Guide, a: VertexId, b: VertexId) -> Distance {
        let (Some(a), Some(b)) = (self.graph.vertices.get(a), self.graph.vertices.get(b)) else {
            return Distance::ZERO;
        };
        let segment = LineSegment::new(a.point, b.point);
        let collision_length: f64 = self
            .obstacles
            .iter()
            .filter_map(|obstacle| obstacle.intersection_length(&segment))
            .sum();
        let orientation = guide.orientation();
        Distance::new(
            segment.length() * guide.weight_factor(),
            0.0,
            collision_length,
            a.missing_stem_fraction[orientation] + b.missing_stem_fraction[orientation],
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn point_of(graph: &RoutingGraph, id: Option<VertexId>) -> Vec2d {
        graph.vertex(id.unwrap()).unwrap().point
    }

    fn edges_from(graph: &RoutingGraph, point: Vec2d) -> Vec<(Vec2d, Direction, Distance)> {
        let (_, vertex) = graph.vertices().find(|(_, v)| v.point == point).unwrap();
        vertex
            .edges
            .iter()
            .map(|e| (graph.vertex(e.target).unwrap().point, e.direction, e.cost))
            .collect()
    }

    #[test]
    fn free_endpoints_tag_their_crossings() {
        let guides = [
            Guide::horizontal(0.0).with_role(Role::Source),
            Guide::vertical(0.0).with_role(Role::Source),
            Guide::horizontal(50.0).with_role(Role::Target),
            Guide::vertical(100.0).with_role(Role::Target),
        ];
        let graph = RoutingGraph::build(&guides, &[], 40.0);
        assert_eq!(graph.vertex_count(), 4);
        // Each of the four vertices has one horizontal and one vertical neighbour.
        assert_eq!(graph.edge_count(), 8);
        assert_eq!(point_of(&graph, graph.source()), Vec2d::new(0.0, 0.0));
        assert_eq!(point_of(&graph, graph.target()), Vec2d::new(100.0, 50.0));
    }

    #[test]
    fn edges_run_both_ways_with_directions() {
        let guides = [
            Guide::horizontal(0.0),
            Guide::horizontal(10.0),
            Guide::vertical(5.0),
        ];
        let graph = RoutingGraph::build(&guides, &[], 40.0);
        let edges = edges_from(&graph, Vec2d::new(5.0, 0.0));
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].0, Vec2d::new(5.0, 10.0));
        assert_eq!(edges[0].1, Direction::Down);
        assert_relative_eq!(edges[0].2.metric_distance, 10.0);

        let back = edges_from(&graph, Vec2d::new(5.0, 10.0));
        assert_eq!(back[0].1, Direction::Up);
    }

    #[test]
    fn weight_factor_scales_metric_distance() {
        let guides = [
            Guide::horizontal(0.0).with_weight_factor(0.9),
            Guide::vertical(0.0),
            Guide::vertical(10.0),
        ];
        let graph = RoutingGraph::build(&guides, &[], 40.0);
        let edges = edges_from(&graph, Vec2d::new(0.0, 0.0));
        assert_relative_eq!(edges[0].2.metric_distance, 9.0);
    }

    #[test]
    fn ray_origin_becomes_role_vertex() {
        let guides = [
            Guide::ray(Vec2d::new(40.0, 20.0), Direction::Right).with_role(Role::Source),
            Guide::vertical(80.0),
            Guide::vertical(0.0),
        ];
        let graph = RoutingGraph::build(&guides, &[], 40.0);
        // The line at x = 0 lies behind the ray and does not cross it.
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(point_of(&graph, graph.source()), Vec2d::new(40.0, 20.0));
        let edges = edges_from(&graph, Vec2d::new(40.0, 20.0));
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].0, Vec2d::new(80.0, 20.0));
        assert_eq!(edges[0].1, Direction::Right);
    }

    #[test]
    fn upward_ray_origin_links_to_last_crossing() {
        let guides = [
            Guide::ray(Vec2d::new(10.0, 100.0), Direction::Up).with_role(Role::Target),
            Guide::horizontal(20.0),
            Guide::horizontal(60.0),
        ];
        let graph = RoutingGraph::build(&guides, &[], 40.0);
        assert_eq!(point_of(&graph, graph.target()), Vec2d::new(10.0, 100.0));
        let edges = edges_from(&graph, Vec2d::new(10.0, 100.0));
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].0, Vec2d::new(10.0, 60.0));
        assert_eq!(edges[0].1, Direction::Up);
    }

    #[test]
    fn ray_without_crossings_gets_no_origin_vertex() {
        let guides =
            [Guide::ray(Vec2d::new(0.0, 0.0), Direction::Left).with_role(Role::Source)];
        let graph = RoutingGraph::build(&guides, &[], 40.0);
        assert_eq!(graph.vertex_count(), 0);
        assert!(graph.source().is_none());
    }

    #[test]
    fn stem_penalty_near_ray_origin() {
        let guides = [
            Guide::ray(Vec2d::new(0.0, 0.0), Direction::Down).with_role(Role::Source),
            Guide::horizontal(10.0),
            Guide::horizontal(50.0),
        ];
        let graph = RoutingGraph::build(&guides, &[], 40.0);
        let (_, near) = graph
            .vertices()
            .find(|(_, v)| v.point == Vec2d::new(0.0, 10.0))
            .unwrap();
        assert_relative_eq!(near.missing_stem_fraction[Orientation::Horizontal], 0.75);
        assert_relative_eq!(near.missing_stem_fraction[Orientation::Vertical], 0.0);

        let (_, far) = graph
            .vertices()
            .find(|(_, v)| v.point == Vec2d::new(0.0, 50.0))
            .unwrap();
        assert_relative_eq!(far.missing_stem_fraction[Orientation::Horizontal], 0.0);
    }

    #[test]
    fn collision_length_sums_over_obstacles() {
        let guides = [
            Guide::horizontal(5.0),
            Guide::vertical(0.0),
            Guide::vertical(100.0),
        ];
        let obstacles = [
            Rectangle::new(10.0, 0.0, 10.0, 10.0),
            Rectangle::new(50.0, 0.0, 20.0, 10.0),
            Rectangle::new(50.0, 50.0, 20.0, 10.0),
        ];
        let graph = RoutingGraph::build(&guides, &obstacles, 40.0);
        let edges = edges_from(&graph, Vec2d::new(0.0, 5.0));
        assert_relative_eq!(edges[0].2.collision_length, 30.0);
        assert_relative_eq!(edges[0].2.number_of_corners, 0.0);
    }
}
