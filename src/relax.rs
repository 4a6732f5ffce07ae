// Priority-driven relaxation shared by Dijkstra, Prim and the multiplicative solver.
// The solvers differ only in how a neighbor's candidate label is formed from the
// settled vertex's label and the edge cost.
use std::fmt::Debug;

use tracing::trace;

use crate::adjacency::AdjacencyList;
use crate::graph::{Cost, VertexId};
use crate::queue::{DecreaseKeyQueue, FrontierQueue, LazyQueue, QueueKind};

pub trait Relaxation {
    type Label: Copy + PartialOrd + Debug;

    /// Label carried by the start vertex.
    fn origin(&self) -> Self::Label;

    /// Candidate label for a neighbor reached from a settled vertex labelled `from`
    /// over an edge of `cost`.
    fn combine(&self, from: Self::Label, cost: Cost) -> Self::Label;
}

/// Per-vertex progress through a solve.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VertexState {
    Unvisited,
    Queued,
    Settled,
}

#[derive(Clone, Debug)]
pub struct Relaxed<L> {
    labels: Vec<Option<L>>,
    states: Vec<VertexState>,
    stale: usize,
}

impl<L: Copy> Relaxed<L> {
    pub fn state(&self, vertex: VertexId) -> VertexState {
        self.states[vertex]
    }

    pub fn labels(&self) -> &[Option<L>] {
        &self.labels
    }

    /// Settled vertices with their labels, in vertex order.
    pub fn settled(&self) -> impl Iterator<Item = (VertexId, L)> + '_ {
        self.labels
            .iter()
            .zip(&self.states)
            .enumerate()
            .filter_map(|(vertex, (label, state))| match (label, state) {
                (Some(label), VertexState::Settled) => Some((vertex, *label)),
                _ => None,
            })
    }

    pub fn settled_count(&self) -> usize {
        self.states
            .iter()
            .filter(|&&state| state == VertexState::Settled)
            .count()
    }

    /// Queue entries that came out after their vertex was already settled.
    pub fn stale_extractions(&self) -> usize {
        self.stale
    }
}

/// Settles every vertex reachable from `start`, smallest label first.
///
/// A vertex is settled on its first extraction and its label is frozen from then on;
/// later entries for it are counted as stale and dropped. Neighbors that are already
/// settled are never relaxed again.
pub fn relax<R, Q>(adj: &AdjacencyList, start: VertexId, rule: &R, mut queue: Q) -> Relaxed<R::Label>
where
    R: Relaxation,
    Q: FrontierQueue<R::Label>,
{
    let n = adj.num_vertices();
    let mut labels: Vec<Option<R::Label>> = vec![None; n];
    let mut states = vec![VertexState::Unvisited; n];
    let mut stale = 0;

    let origin = rule.origin();
    labels[start] = Some(origin);
    states[start] = VertexState::Queued;
    queue.insert(start, origin);

    while !queue.is_empty() {
        let (vertex, label) = queue.extract_min();
        if states[vertex] == VertexState::Settled {
            stale += 1;
            continue;
        }
        states[vertex] = VertexState::Settled;
        trace!(vertex, ?label, "settled");

        for neighbor in adj.neighbors(vertex) {
            let next = neighbor.vertex;
            if states[next] == VertexState::Settled {
                continue;
            }
            let candidate = rule.combine(label, neighbor.cost);
            let improves = match labels[next] {
                Some(current) => candidate < current,
                None => true,
            };
            if improves {
                labels[next] = Some(candidate);
                states[next] = VertexState::Queued;
                queue.insert(next, candidate);
            }
        }
    }

    Relaxed {
        labels,
        states,
        stale,
    }
}

pub fn relax_with<R: Relaxation>(
    adj: &AdjacencyList,
    start: VertexId,
    rule: &R,
    kind: QueueKind,
) -> Relaxed<R::Label> {
    match kind {
        QueueKind::Lazy => relax(adj, start, rule, LazyQueue::with_capacity(adj.num_vertices())),
        QueueKind::DecreaseKey => relax(adj, start, rule, DecreaseKeyQueue::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    struct HopCount;

    impl Relaxation for HopCount {
        type Label = u32;

        fn origin(&self) -> u32 {
            0
        }

        fn combine(&self, from: u32, _cost: Cost) -> u32 {
            from + 1
        }
    }

    fn path_graph() -> AdjacencyList {
        AdjacencyList::build(
            5,
            &[Edge::new(0, 1, 1), Edge::new(1, 2, 1), Edge::new(2, 3, 1)],
        )
    }

    #[test]
    fn settles_reachable_vertices_only() {
        let relaxed = relax_with(&path_graph(), 0, &HopCount, QueueKind::Lazy);
        assert_eq!(relaxed.labels(), &[Some(0), Some(1), Some(2), Some(3), None]);
        assert_eq!(relaxed.settled_count(), 4);
        assert_eq!(relaxed.state(4), VertexState::Unvisited);
        assert_eq!(
            relaxed.settled().collect::<Vec<_>>(),
            vec![(0, 0), (1, 1), (2, 2), (3, 3)]
        );
    }

    #[test]
    fn stale_entries_are_skipped() {
        // The direct edge queues 2 at 10 before the path through 1 lowers it to 2.
        struct Additive;
        impl Relaxation for Additive {
            type Label = i64;
            fn origin(&self) -> i64 {
                0
            }
            fn combine(&self, from: i64, cost: Cost) -> i64 {
                from + cost
            }
        }
        let adj = AdjacencyList::build(3, &[Edge::new(0, 2, 10), Edge::new(0, 1, 1), Edge::new(1, 2, 1)]);
        let relaxed = relax_with(&adj, 0, &Additive, QueueKind::Lazy);
        assert_eq!(relaxed.labels(), &[Some(0), Some(1), Some(2)]);
        assert_eq!(relaxed.stale_extractions(), 1);

        let relaxed = relax_with(&adj, 0, &Additive, QueueKind::DecreaseKey);
        assert_eq!(relaxed.labels(), &[Some(0), Some(1), Some(2)]);
        assert_eq!(relaxed.stale_extractions(), 0);
    }
}
