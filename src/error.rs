use thiserror::Error;

use crate::graph::{Cost, VertexId};

pub type Result<T> = std::result::Result<T, GraphError>;

/// Precondition violations reported by graph construction, the solvers and the edge loader.
///
/// An unreachable goal is not an error; solvers report it as `None`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph with {num_vertices} vertices")]
    VertexOutOfRange { vertex: VertexId, num_vertices: usize },

    #[error("edge {index} has negative cost {cost}")]
    NegativeCost { index: usize, cost: Cost },

    #[error("{algorithm} needs a goal vertex")]
    MissingGoal { algorithm: String },

    #[error("line {line}: could not parse {field} from {value:?}")]
    Parse {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: expected 3 fields (start,end,cost), found {found}")]
    FieldCount { line: u64, found: usize },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
