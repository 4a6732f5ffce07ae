//! Shortest path, minimum spanning tree and multiplicative path cost over small undirected graphs.
//!
//! Build a [`Graph`] once, then call one solver per question:
//!
//! ```
//! use pathcost::{dijkstra, Graph};
//!
//! let graph = Graph::from_triples(4, &[(0, 1, 5), (1, 2, 3), (0, 2, 10)]).unwrap();
//! assert_eq!(dijkstra::shortest_cost(&graph, 0, 2).unwrap(), Some(8));
//! ```

pub mod adjacency;
pub mod bfs;
pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod load;
pub mod multiplicative;
pub mod prim;
pub mod queue;
pub mod relax;
pub mod solve;

pub use error::{GraphError, Result};
pub use graph::{Cost, Edge, Graph, VertexId};
pub use queue::QueueKind;
pub use solve::{solve, Algorithm, Request, Solution};
