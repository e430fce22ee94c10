use log::warn;

use crate::graph::Graph;
use crate::{Result, INF};

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult {
    /// Distances from source to each vertex, [`INF`] when unreachable
    pub distances: Vec<u64>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl ShortestPathResult {
    /// Distance to `vertex`, or `None` if it is unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<u64> {
        self.distances.get(vertex).copied().filter(|&d| d != INF)
    }

    /// Returns true if `vertex` has a finite distance
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|&&d| d != INF).count()
    }

    /// Get the shortest path from source to target as a sequence of vertices
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            // A tree path never revisits a vertex
            if path.len() > self.predecessors.len() {
                warn!("predecessor chain from {} does not reach the source", target);
                return None;
            }
            current = self.predecessors[current]?;
            path.push(current);
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<G: Graph> {
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
