use crate::geometry::{Orientation, Rectangle};

use super::endpoint::EndpointConfig;
use super::guide::{Guide, Role};
use super::params::RoutingParams;

/// Collects the candidate guides for a connector between `source` and `target`.
///
/// `obstacles` only contribute guides when
/// [`RoutingParams::obstacle_margins`] is enabled.
#[must_use]
pub fn collect_guides(
    source: &EndpointConfig,
    target: &EndpointConfig,
    obstacles: &[Rectangle],
    params: &RoutingParams,
) -> Vec<Guide> {
    let mut guides = Vec::new();

    collect_endpoint_guides(&mut guides, source, Role::Source, params);
    collect_endpoint_guides(&mut guides, target, Role::Target, params);

    // Midpoint guides only help when the ends face different ways; for equal
    // directions the route should run alongside, not across.
    if let (Some(a), Some(b)) = (source.direction(), target.direction()) {
        if a != b {
            let mid = (source.point() + target.point()) / 2.0;
            let weight = params.center_line_weight();
            guides.push(Guide::vertical(mid.x).with_weight_factor(weight));
            guides.push(Guide::horizontal(mid.y).with_weight_factor(weight));
        }
    }

    if params.obstacle_margins() {
        for obstacle in obstacles {
            push_margin_guides(&mut guides, obstacle, params.line_offset());
        }
    }

    guides
}

fn collect_endpoint_guides(
    guides: &mut Vec<Guide>,
    endpoint: &EndpointConfig,
    role: Role,
    params: &RoutingParams,
) {
    match *endpoint {
        EndpointConfig::Free { point } => {
            guides.push(Guide::horizontal(point.y).with_role(role));
            guides.push(Guide::vertical(point.x).with_role(role));
        }
        EndpointConfig::Directed {
            point,
            direction,
            inside: true,
            ..
        } => {
            guides.push(Guide::ray(point, direction).with_role(role));
            let turn = point + direction.unit() * params.line_offset();
            guides.push(match direction.orientation() {
                Orientation::Horizontal => Guide::vertical(turn.x),
                Orientation::Vertical => Guide::horizontal(turn.y),
            });
        }
        EndpointConfig::Directed {
            point,
            direction,
            inside: false,
            rectangle,
        } => {
            push_margin_guides(guides, &rectangle, params.line_offset());
            guides.push(Guide::ray(point, direction).with_role(role));
        }
    }
}

fn push_margin_guides(guides: &mut Vec<Guide>, rectangle: &Rectangle, offset: f64) {
    guides.push(Guide::horizontal(rectangle.top() - offset));
    guides.push(Guide::horizontal(rectangle.bottom() + offset));
    guides.push(Guide::vertical(rectangle.left() - offset));
    guides.push(Guide::vertical(rectangle.right() + offset));
}
