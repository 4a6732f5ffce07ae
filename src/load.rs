use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph};

fn parse_field<T: std::str::FromStr>(record: &StringRecord, index: usize, field: &'static str, line: u64) -> Result<T> {
    let value = &record[index];
    value.parse().map_err(|_| GraphError::Parse {
        line,
        field,
        value: value.to_string(),
    })
}

/// Reads `start,end,cost` rows. The first row is a header and is skipped.
pub fn read_edges<R: Read>(reader: R) -> Result<Vec<Edge>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut edges = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        if record.len() != 3 {
            return Err(GraphError::FieldCount {
                line,
                found: record.len(),
            });
        }
        let start = parse_field(&record, 0, "start", line)?;
        let end = parse_field(&record, 1, "end", line)?;
        let cost = parse_field(&record, 2, "cost", line)?;
        edges.push(Edge::new(start, end, cost));
    }
    Ok(edges)
}

/// Builds a graph from parsed edges. Without an explicit count the graph has
/// one vertex past the largest endpoint.
pub fn graph_from_edges(edges: Vec<Edge>, num_vertices: Option<usize>) -> Result<Graph> {
    let num_vertices = match num_vertices {
        Some(n) => n,
        None => match edges.iter().map(|e| std::cmp::max(e.start, e.end)).max() {
            Some(vertex) => vertex.checked_add(1).ok_or(GraphError::VertexOutOfRange {
                vertex,
                num_vertices: usize::MAX,
            })?,
            None => 0,
        },
    };
    debug!(num_vertices, num_edges = edges.len(), "building graph");
    Graph::new(num_vertices, edges)
}

pub fn graph_from_path(path: impl AsRef<Path>, num_vertices: Option<usize>) -> Result<Graph> {
    let file = std::fs::File::open(path)?;
    graph_from_edges(read_edges(file)?, num_vertices)
}
