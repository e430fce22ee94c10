//! Reader for the plain-text edge list format.
//!
//! Each non-blank line that does not start with `#` holds three whitespace
//! separated integers `from to weight`. The vertex count is the largest id seen
//! plus one. Node ids are capped at [`MAX_NODE_ID`].

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use log::debug;

use crate::graph::directed::DirectedGraph;
use crate::graph::traits::Graph;
use crate::{Error, Result};

/// Largest node id accepted in an edge list
///
/// Ids beyond the `i32` range would need per-vertex tables far larger than any
/// benchmark graph.
pub const MAX_NODE_ID: i64 = i32::MAX as i64;

/// Loads a graph from an edge list file
pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<DirectedGraph> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_edge_list(BufReader::new(file), path)
}

/// Parses an edge list held in memory
pub fn parse_edge_list(text: &str) -> Result<DirectedGraph> {
    read_edge_list(Cursor::new(text), Path::new("<memory>"))
}

/// Reads an edge list from any buffered reader; `origin` names it in I/O errors
pub fn read_edge_list<R: BufRead>(reader: R, origin: &Path) -> Result<DirectedGraph> {
    let mut edges = Vec::new();
    let mut max_node: Option<usize> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| Error::Io {
            path: origin.to_path_buf(),
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (from, to, weight) = parse_line(trimmed, index + 1)?;
        max_node = Some(max_node.map_or(from.max(to), |m| m.max(from).max(to)));
        edges.push((from, to, weight));
    }

    let vertex_count = match max_node {
        Some(max) => max + 1,
        None => return Err(Error::EmptyGraph),
    };

    let graph = DirectedGraph::from_edges(vertex_count, &edges)?;
    debug!(
        "loaded {} edges over {} vertices from {}",
        graph.edge_count(),
        graph.vertex_count(),
        origin.display()
    );
    Ok(graph)
}

fn parse_line(line: &str, line_number: usize) -> Result<(usize, usize, u64)> {
    let malformed = |reason: &str| Error::MalformedLine {
        line_number,
        line: line.to_string(),
        reason: reason.to_string(),
    };

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(malformed("expected 'from to weight'"));
    }

    let from: i64 = tokens[0].parse().map_err(|_| malformed("node id is not an integer"))?;
    let to: i64 = tokens[1].parse().map_err(|_| malformed("node id is not an integer"))?;
    let weight: i128 = tokens[2].parse().map_err(|_| malformed("weight is not an integer"))?;

    if from < 0 || to < 0 {
        return Err(Error::NegativeNodeId {
            line_number,
            line: line.to_string(),
        });
    }
    if weight < 0 {
        return Err(Error::NegativeWeight {
            line_number,
            line: line.to_string(),
        });
    }

    if from > MAX_NODE_ID || to > MAX_NODE_ID {
        return Err(malformed("node id too large"));
    }

    let from = usize::try_from(from).map_err(|_| malformed("node id too large"))?;
    let to = usize::try_from(to).map_err(|_| malformed("node id too large"))?;
    let weight = u64::try_from(weight).map_err(|_| malformed("weight does not fit in 64 bits"))?;
    Ok((from, to, weight))
}
