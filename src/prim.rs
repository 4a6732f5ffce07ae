use tracing::debug;

use crate::error::Result;
use crate::graph::{Cost, Graph, VertexId};
use crate::queue::QueueKind;
use crate::relax::{relax_with, Relaxation};

/// A vertex's label is the cost of the cheapest edge connecting it to the growing tree.
#[derive(Copy, Clone, Debug, Default)]
pub struct Attachment;

impl Relaxation for Attachment {
    type Label = u64;

    fn origin(&self) -> u64 {
        0
    }

    fn combine(&self, _from: u64, cost: Cost) -> u64 {
        cost as u64
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MstCost {
    /// Sum of the connection costs of every vertex in the tree.
    pub total: u64,
    /// Vertices in the tree, including the root.
    pub spanned: usize,
    pub num_vertices: usize,
}

impl MstCost {
    /// False when some vertex is in a different component from the root.
    pub fn spans_all(&self) -> bool {
        self.spanned == self.num_vertices
    }
}

/// Total weight of the minimum spanning tree grown by Prim's algorithm from `start`.
///
/// Only the component containing `start` is spanned; vertices outside it add nothing
/// to `total` and are reported through `spanned`.
pub fn mst_cost(graph: &Graph, start: VertexId) -> Result<MstCost> {
    mst_cost_with(graph, start, QueueKind::default())
}

pub fn mst_cost_with(graph: &Graph, start: VertexId, queue: QueueKind) -> Result<MstCost> {
    graph.check_vertex(start)?;
    let relaxed = relax_with(graph.adjacency(), start, &Attachment, queue);

    let mut total: u64 = 0;
    let mut spanned = 0;
    for (_, cost) in relaxed.settled() {
        total = total.saturating_add(cost);
        spanned += 1;
    }

    let result = MstCost {
        total,
        spanned,
        num_vertices: graph.num_vertices(),
    };
    debug!(
        start,
        total,
        spanned,
        stale = relaxed.stale_extractions(),
        "prim finished"
    );
    if !result.spans_all() {
        debug!(
            unreached = result.num_vertices - spanned,
            "graph is disconnected, unreached vertices left out of the tree"
        );
    }
    Ok(result)
}
