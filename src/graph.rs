use std::sync::OnceLock;

use crate::adjacency::AdjacencyList;
use crate::error::{GraphError, Result};

pub type VertexId = usize;
pub type Cost = i64;

/// An undirected edge. Which endpoint is `start` carries no meaning.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub start: VertexId,
    pub end: VertexId,
    pub cost: Cost,
}

impl Edge {
    pub fn new(start: VertexId, end: VertexId, cost: Cost) -> Self {
        Self { start, end, cost }
    }
}

impl From<(VertexId, VertexId, Cost)> for Edge {
    fn from((start, end, cost): (VertexId, VertexId, Cost)) -> Self {
        Self::new(start, end, cost)
    }
}

/// Immutable vertex count plus edge list.
///
/// Every edge endpoint is in `[0, num_vertices)` and every cost is non-negative;
/// both are checked once in [`Graph::new`]. The symmetric adjacency list is built
/// on first use and kept for the lifetime of the graph.
#[derive(Debug)]
pub struct Graph {
    num_vertices: usize,
    edges: Vec<Edge>,
    adjacency: OnceLock<AdjacencyList>,
}

impl Graph {
    pub fn new(num_vertices: usize, edges: Vec<Edge>) -> Result<Self> {
        for (index, edge) in edges.iter().enumerate() {
            for vertex in [edge.start, edge.end] {
                if vertex >= num_vertices {
                    return Err(GraphError::VertexOutOfRange {
                        vertex,
                        num_vertices,
                    });
                }
            }
            if edge.cost < 0 {
                return Err(GraphError::NegativeCost {
                    index,
                    cost: edge.cost,
                });
            }
        }
        Ok(Self {
            num_vertices,
            edges,
            adjacency: OnceLock::new(),
        })
    }

    /// Convenience constructor from `(start, end, cost)` triples.
    pub fn from_triples(num_vertices: usize, triples: &[(VertexId, VertexId, Cost)]) -> Result<Self> {
        Self::new(num_vertices, triples.iter().copied().map(Edge::from).collect())
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Symmetric adjacency list, built from the edge list on the first call.
    pub fn adjacency(&self) -> &AdjacencyList {
        self.adjacency
            .get_or_init(|| AdjacencyList::build(self.num_vertices, &self.edges))
    }

    /// Checks a solver argument against the vertex range.
    pub fn check_vertex(&self, vertex: VertexId) -> Result<VertexId> {
        if vertex < self.num_vertices {
            Ok(vertex)
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                num_vertices: self.num_vertices,
            })
        }
    }
}

impl Clone for Graph {
    fn clone(&self) -> Self {
        Self {
            num_vertices: self.num_vertices,
            edges: self.edges.clone(),
            adjacency: OnceLock::new(),
        }
    }
}
