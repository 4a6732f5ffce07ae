use ordered_float::OrderedFloat;
use tracing::debug;

use crate::error::Result;
use crate::graph::{Cost, Graph, VertexId};
use crate::queue::QueueKind;
use crate::relax::{relax_with, Relaxation};

/// Edge costs are percentages out of this scale.
pub const PERCENT: f64 = 100.0;

/// Path value is the product of `1 + cost / 100` over its edges.
///
/// Every factor is at least 1, so a settled multiplier can never be beaten later.
#[derive(Copy, Clone, Debug, Default)]
pub struct Compounding;

impl Compounding {
    pub fn factor(cost: Cost) -> f64 {
        1.0 + cost as f64 / PERCENT
    }
}

impl Relaxation for Compounding {
    type Label = OrderedFloat<f64>;

    fn origin(&self) -> OrderedFloat<f64> {
        OrderedFloat(1.0)
    }

    fn combine(&self, from: OrderedFloat<f64>, cost: Cost) -> OrderedFloat<f64> {
        OrderedFloat(from.into_inner() * Self::factor(cost))
    }
}

/// Cheapest compounded multiplier from `start` to every vertex.
pub fn multipliers(graph: &Graph, start: VertexId, queue: QueueKind) -> Result<Vec<Option<f64>>> {
    graph.check_vertex(start)?;
    let relaxed = relax_with(graph.adjacency(), start, &Compounding, queue);
    debug!(
        start,
        settled = relaxed.settled_count(),
        stale = relaxed.stale_extractions(),
        "multiplicative dijkstra finished"
    );
    Ok(relaxed
        .labels()
        .iter()
        .copied()
        .map(|label| label.map(OrderedFloat::into_inner))
        .collect())
}

/// Net percentage change along the cheapest compounded path, `(multiplier - 1) * 100`.
///
/// `None` if `goal` is unreachable.
pub fn shortest_percentage(graph: &Graph, start: VertexId, goal: VertexId) -> Result<Option<f64>> {
    shortest_percentage_with(graph, start, goal, QueueKind::default())
}

pub fn shortest_percentage_with(
    graph: &Graph,
    start: VertexId,
    goal: VertexId,
    queue: QueueKind,
) -> Result<Option<f64>> {
    graph.check_vertex(goal)?;
    let multiplier = multipliers(graph, start, queue)?[goal];
    Ok(multiplier.map(|m| (m - 1.0) * PERCENT))
}
