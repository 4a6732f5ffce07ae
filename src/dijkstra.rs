use tracing::debug;

use crate::error::Result;
use crate::graph::{Cost, Graph, VertexId};
use crate::queue::QueueKind;
use crate::relax::{relax_with, Relaxation};

/// Path cost is the sum of edge costs.
#[derive(Copy, Clone, Debug, Default)]
pub struct Additive;

impl Relaxation for Additive {
    type Label = u64;

    fn origin(&self) -> u64 {
        0
    }

    fn combine(&self, from: u64, cost: Cost) -> u64 {
        from.saturating_add(cost as u64)
    }
}

/// Dijkstra from `start` to all vertices. `None` where unreachable.
pub fn distances(graph: &Graph, start: VertexId, queue: QueueKind) -> Result<Vec<Option<u64>>> {
    graph.check_vertex(start)?;
    let relaxed = relax_with(graph.adjacency(), start, &Additive, queue);
    debug!(
        start,
        settled = relaxed.settled_count(),
        stale = relaxed.stale_extractions(),
        "dijkstra finished"
    );
    Ok(relaxed.labels().to_vec())
}

/// Minimum total edge cost from `start` to `goal`, `None` if `goal` is unreachable.
pub fn shortest_cost(graph: &Graph, start: VertexId, goal: VertexId) -> Result<Option<u64>> {
    shortest_cost_with(graph, start, goal, QueueKind::default())
}

pub fn shortest_cost_with(
    graph: &Graph,
    start: VertexId,
    goal: VertexId,
    queue: QueueKind,
) -> Result<Option<u64>> {
    graph.check_vertex(goal)?;
    Ok(distances(graph, start, queue)?[goal])
}
