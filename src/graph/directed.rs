use crate::graph::traits::Graph;
use crate::{Error, Result};

/// A weighted directed edge stored in the adjacency list of its tail vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Head vertex
    pub to: usize,
    /// Non-negative edge weight
    pub weight: u64,
}

/// An immutable directed graph using adjacency lists
///
/// Self-loops and parallel edges are kept as given; shortest path relaxation
/// handles both without special casing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    /// Outgoing edges for each vertex, indexed by vertex id
    adjacency: Vec<Vec<Edge>>,

    /// Total number of edges across all adjacency lists
    edge_count: usize,
}

impl DirectedGraph {
    /// Creates a graph with `vertex_count` isolated vertices
    pub fn with_vertices(vertex_count: usize) -> Self {
        DirectedGraph {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Builds a graph from `(from, to, weight)` triples
    ///
    /// Edges keep their input order within each adjacency list. A vertex count
    /// whose per-vertex tables cannot be allocated yields [`Error::GraphTooLarge`].
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize, u64)]) -> Result<Self> {
        let too_large = |_| Error::GraphTooLarge(vertex_count);

        let mut out_degree: Vec<usize> = Vec::new();
        out_degree.try_reserve_exact(vertex_count).map_err(too_large)?;
        out_degree.resize(vertex_count, 0);
        for &(from, to, _) in edges {
            if from >= vertex_count || to >= vertex_count {
                return Err(Error::InvalidEdge(from, to));
            }
            out_degree[from] += 1;
        }

        let mut adjacency: Vec<Vec<Edge>> = Vec::new();
        adjacency.try_reserve_exact(vertex_count).map_err(too_large)?;
        adjacency.extend(out_degree.into_iter().map(Vec::with_capacity));
        for &(from, to, weight) in edges {
            adjacency[from].push(Edge { to, weight });
        }

        Ok(DirectedGraph {
            adjacency,
            edge_count: edges.len(),
        })
    }

    /// Iterates over every edge as a `(from, to, weight)` triple
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |e| (from, e.to, e.weight)))
    }

    /// Out-degree of a vertex
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.adjacency[vertex].len()
    }
}

impl Graph for DirectedGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> &[Edge] {
        &self.adjacency[vertex]
    }
}
