use crate::graph::{Cost, Edge, VertexId};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Neighbor {
    pub vertex: VertexId,
    pub cost: Cost,
}

/// Vertex-indexed neighbor lists of an undirected graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    lists: Vec<Vec<Neighbor>>,
}

impl AdjacencyList {
    /// Every edge lands in both endpoints' lists, in edge-list order.
    /// Endpoints are trusted to be below `num_vertices`.
    pub fn build(num_vertices: usize, edges: &[Edge]) -> Self {
        let mut lists: Vec<Vec<Neighbor>> = vec![Vec::new(); num_vertices];
        for &Edge { start, end, cost } in edges {
            lists[start].push(Neighbor { vertex: end, cost });
            lists[end].push(Neighbor { vertex: start, cost });
        }
        Self { lists }
    }

    pub fn num_vertices(&self) -> usize {
        self.lists.len()
    }

    pub fn neighbors(&self, vertex: VertexId) -> &[Neighbor] {
        &self.lists[vertex]
    }

    /// Number of directed entries, twice the undirected edge count.
    pub fn len(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_inserted_both_ways() {
        let edges = [Edge::new(0, 1, 5), Edge::new(1, 2, 3), Edge::new(0, 2, 10)];
        let adj = AdjacencyList::build(4, &edges);

        assert_eq!(adj.num_vertices(), 4);
        assert_eq!(adj.len(), 6);
        assert_eq!(
            adj.neighbors(0),
            &[
                Neighbor { vertex: 1, cost: 5 },
                Neighbor { vertex: 2, cost: 10 }
            ]
        );
        assert_eq!(
            adj.neighbors(2),
            &[
                Neighbor { vertex: 1, cost: 3 },
                Neighbor { vertex: 0, cost: 10 }
            ]
        );
        assert!(adj.neighbors(3).is_empty());
    }

    #[test]
    fn self_loop_appears_twice() {
        let adj = AdjacencyList::build(1, &[Edge::new(0, 0, 2)]);
        assert_eq!(adj.neighbors(0).len(), 2);
    }

    #[test]
    fn no_edges() {
        let adj = AdjacencyList::build(3, &[]);
        assert!(adj.is_empty());
        assert_eq!(adj.num_vertices(), 3);
    }
}
