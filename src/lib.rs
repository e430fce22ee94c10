//! Radix SSSP - Dijkstra versus a monotone radix heap
//!
//! This library computes single-source shortest paths on directed graphs with
//! non-negative integer edge weights using two engines: classic Dijkstra driven by
//! a binary heap, and the same relaxation loop driven by a radix heap that groups
//! keys by their highest differing bit from the last extracted minimum instead of
//! keeping them fully ordered.
//!
//! Both engines share the lazy-deletion discipline: stale queue entries are
//! discarded at pop time by comparing against the authoritative distance vector.

pub mod algorithm;
pub mod benchmark;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod verify;

use std::path::PathBuf;

/// Re-export main types for convenient use
pub use algorithm::{
    dijkstra::Dijkstra, radix_dijkstra::RadixDijkstra, ShortestPathAlgorithm, ShortestPathResult,
};
pub use benchmark::{BenchmarkHarness, BenchmarkOutcome, Comparison};
pub use config::BenchConfig;
pub use data_structures::RadixHeap;
pub use graph::directed::{DirectedGraph, Edge};
pub use verify::verify_distances;

/// Distance assigned to vertices that cannot be reached from the source
pub const INF: u64 = u64::MAX;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to read input file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid line {line_number} in input file ({reason}): {line}")]
    MalformedLine {
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error("Node ids must be non-negative (line {line_number}): {line}")]
    NegativeNodeId { line_number: usize, line: String },

    #[error("Edge weights must be non-negative (line {line_number}): {line}")]
    NegativeWeight { line_number: usize, line: String },

    #[error("Input graph is empty; provide at least one edge.")]
    EmptyGraph,

    #[error("Source node {node} is out of range for a graph with {vertex_count} nodes")]
    SourceOutOfRange { node: i64, vertex_count: usize },

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Graph with {0} vertices does not fit in memory")]
    GraphTooLarge(usize),

    #[error("Priority queue is empty")]
    QueueUnderflow,

    #[error("Result vectors have different sizes: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Mismatch at node {vertex}: {left} vs {right}")]
    DistanceMismatch { vertex: usize, left: u64, right: u64 },

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
