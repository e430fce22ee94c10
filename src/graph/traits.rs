use std::fmt::Debug;

use crate::graph::directed::Edge;

/// Trait representing a read-only weighted directed graph
///
/// Vertices are the contiguous ids `0..vertex_count()`. Asking for the edges of a
/// vertex outside that range is a programming error and panics.
pub trait Graph: Debug {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the outgoing edges of a vertex
    fn outgoing_edges(&self, vertex: usize) -> &[Edge];

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Gets the smallest weight among the parallel edges `from -> to`, if any
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<u64> {
        if !self.has_vertex(from) {
            return None;
        }
        self.outgoing_edges(from)
            .iter()
            .filter(|e| e.to == to)
            .map(|e| e.weight)
            .min()
    }
}
