use std::fmt;

use clap::ValueEnum;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};
use crate::prim::MstCost;
use crate::queue::QueueKind;
use crate::{bfs, dijkstra, multiplicative, prim};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Fewest edges between start and goal.
    Bfs,
    /// Smallest total edge cost between start and goal.
    Dijkstra,
    /// Minimum spanning tree cost grown from start.
    Prim,
    /// Smallest compounded percentage between start and goal.
    Multiplicative,
}

impl Algorithm {
    /// The spelling accepted on the command line.
    pub fn name(&self) -> String {
        self.to_possible_value()
            .map_or_else(|| format!("{self:?}"), |value| value.get_name().to_string())
    }

    pub fn needs_goal(&self) -> bool {
        !matches!(self, Algorithm::Prim)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub algorithm: Algorithm,
    pub start: VertexId,
    pub goal: Option<VertexId>,
    pub queue: QueueKind,
}

impl Request {
    pub fn new(algorithm: Algorithm, start: VertexId, goal: Option<VertexId>) -> Self {
        Self {
            algorithm,
            start,
            goal,
            queue: QueueKind::default(),
        }
    }

    pub fn with_queue(mut self, queue: QueueKind) -> Self {
        self.queue = queue;
        self
    }
}

/// One result shape per solver. `None` means the goal was unreachable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Solution {
    Hops(Option<u64>),
    Cost(Option<u64>),
    Mst(MstCost),
    Percentage(Option<f64>),
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Hops(Some(hops)) => write!(f, "{hops}"),
            Solution::Cost(Some(cost)) => write!(f, "{cost}"),
            Solution::Percentage(Some(pct)) => write!(f, "{pct:.2}"),
            Solution::Hops(None) | Solution::Cost(None) | Solution::Percentage(None) => {
                write!(f, "unreachable")
            }
            Solution::Mst(mst) => write!(f, "{}", mst.total),
        }
    }
}

pub fn solve(graph: &Graph, request: &Request) -> Result<Solution> {
    let algorithm = request.algorithm;
    let goal = || {
        request.goal.ok_or_else(|| GraphError::MissingGoal {
            algorithm: algorithm.name(),
        })
    };
    let solution = match algorithm {
        Algorithm::Bfs => Solution::Hops(bfs::shortest_hops(graph, request.start, goal()?)?),
        Algorithm::Dijkstra => Solution::Cost(dijkstra::shortest_cost_with(
            graph,
            request.start,
            goal()?,
            request.queue,
        )?),
        Algorithm::Prim => Solution::Mst(prim::mst_cost_with(graph, request.start, request.queue)?),
        Algorithm::Multiplicative => Solution::Percentage(multiplicative::shortest_percentage_with(
            graph,
            request.start,
            goal()?,
            request.queue,
        )?),
    };
    Ok(solution)
}
