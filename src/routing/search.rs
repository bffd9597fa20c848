use std::cmp::Ordering;

use slotmap::SecondaryMap;
use tracing::{debug, trace};

use crate::geometry::Direction;
use crate::math::Vec2d;

use super::cost::Distance;
use super::graph::{RoutingGraph, VertexId};
use super::simplify::simplify_path;

/// A vertex together with the direction the search arrived from.
type SubVertexKey = (VertexId, Direction);

/// Search bookkeeping for one (vertex, arrival direction) pair.
#[derive(Debug, Clone, Copy, Default)]
struct SubVertex {
    distance: Option<Distance>,
    previous: Option<SubVertexKey>,
    processed: bool,
}

/// Per-vertex sub-vertices, indexed by [`Direction::index`].
type SubVertices = SecondaryMap<VertexId, [SubVertex; 4]>;

/// Finds the cheapest route from `source` to `target`.
///
/// Uniform-cost search over (vertex, arrival direction) pairs, so a corner
/// is counted whenever a path changes direction, even at a vertex another
/// path already passed straight through. The returned polyline is
/// simplified; `None` means the target is unreachable.
#[must_use]
pub fn shortest_path(
    graph: &RoutingGraph,
    source: VertexId,
    target: VertexId,
) -> Option<Vec<Vec2d>> {
    let mut states = SubVertices::with_capacity(graph.vertex_count());

    // Seeded with an `Up` arrival: a first edge in any other direction
    // counts as a corner.
    let seed = (source, Direction::Up);
    sub_vertex_mut(&mut states, seed)?.distance = Some(Distance::ZERO);
    let mut frontier = vec![seed];

    while let Some(index) = cheapest(&frontier, &states) {
        let current = frontier.remove(index);
        let (vertex_id, arrival) = current;

        let state = sub_vertex_mut(&mut states, current)?;
        state.processed = true;
        let current_distance = state.distance?;
        trace!(?vertex_id, ?arrival, ?current_distance, "processing sub-vertex");

        if vertex_id == target {
            let path = reconstruct(graph, &states, source, current)?;
            debug!(
                points = path.len(),
                corners = current_distance.number_of_corners,
                "route found"
            );
            return Some(simplify_path(&path));
        }

        let vertex = graph.vertex(vertex_id)?;
        for edge in &vertex.edges {
            let next = (edge.target, edge.direction);
            let Some(next_state) = sub_vertex_mut(&mut states, next) else {
                continue;
            };
            if next_state.processed {
                continue;
            }

            let mut candidate = current_distance + edge.cost;
            if edge.direction != arrival {
                candidate = candidate + Distance::CORNER;
            }

            let improves = match next_state.distance {
                None => true,
                Some(best) => best.compare(&candidate) == Ordering::Greater,
            };
            if improves {
                next_state.distance = Some(candidate);
                next_state.previous = Some(current);
            }

            if !frontier.contains(&next) {
                frontier.push(next);
            }
        }
    }

    debug!("frontier exhausted without reaching the target");
    None
}

fn sub_vertex_mut(states: &mut SubVertices, (id, direction): SubVertexKey) -> Option<&mut SubVertex> {
    let slots = states.entry(id)?.or_default();
    Some(&mut slots[direction.index()])
}

fn sub_vertex(states: &SubVertices, (id, direction): SubVertexKey) -> Option<&SubVertex> {
    states.get(id).map(|slots| &slots[direction.index()])
}

/// Index of the frontier entry with the smallest distance; the earliest
/// inserted entry wins ties.
fn cheapest(frontier: &[SubVertexKey], states: &SubVertices) -> Option<usize> {
    let mut best: Option<(usize, Distance)> = None;
    for (index, key) in frontier.iter().enumerate() {
        let Some(distance) = sub_vertex(states, *key).and_then(|s| s.distance) else {
            continue;
        };
        match best {
            Some((_, current)) if distance.compare(&current) != Ordering::Less => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Walks predecessor links back from `end` and returns the points from the
/// source onward.
fn reconstruct(
    graph: &RoutingGraph,
    states: &SubVertices,
    source: VertexId,
    end: SubVertexKey,
) -> Option<Vec<Vec2d>> {
    let mut path = Vec::new();
    let mut key = end;
    while let Some(previous) = sub_vertex(states, key)?.previous {
        path.push(graph.vertex(key.0)?.point);
        key = previous;
    }
    path.push(graph.vertex(source)?.point);
    path.reverse();
    Some(path)
}
