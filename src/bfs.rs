use std::collections::VecDeque;

use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, VertexId};

/// Hop distance from the nearest of `sources` to every vertex, `None` where unreachable.
///
/// Walks the raw edge list for each dequeued vertex and follows every edge in both
/// directions, so no adjacency list is built. A vertex is marked visited exactly once,
/// at the hop count of the vertex that discovered it plus one.
pub fn hop_distances(graph: &Graph, sources: &[VertexId]) -> Result<Vec<Option<u64>>> {
    for &source in sources {
        graph.check_vertex(source)?;
    }

    let mut hops: Vec<Option<u64>> = vec![None; graph.num_vertices()];
    let mut queue: VecDeque<VertexId> = VecDeque::new();
    for &source in sources {
        if hops[source].is_none() {
            hops[source] = Some(0);
            queue.push_back(source);
        }
    }

    let mut visited = queue.len();
    while let Some(vertex) = queue.pop_front() {
        let next_hops = hops[vertex].map(|h| h + 1);
        for edge in graph.edges() {
            let other = if edge.start == vertex {
                edge.end
            } else if edge.end == vertex {
                edge.start
            } else {
                continue;
            };
            if hops[other].is_none() {
                hops[other] = next_hops;
                queue.push_back(other);
                visited += 1;
            }
        }
    }

    debug!(sources = sources.len(), visited, "bfs finished");
    Ok(hops)
}

/// Number of edges on a shortest path from `start` to `goal`, `None` if `goal` is unreachable.
pub fn shortest_hops(graph: &Graph, start: VertexId, goal: VertexId) -> Result<Option<u64>> {
    graph.check_vertex(goal)?;
    let hops = hop_distances(graph, &[start])?;
    Ok(hops[goal])
}
