use crate::algorithm::dijkstra::lazy_dijkstra;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::RadixHeap;
use crate::graph::Graph;
use crate::Result;

/// Dijkstra's relaxation loop driven by a monotone [`RadixHeap`]
///
/// Non-negative weights mean every relaxed distance is at least the distance just
/// popped, which is the heap's `last`. That is exactly the monotone precondition
/// the heap needs, so no key ever has to be compared against anything but `last`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RadixDijkstra;

impl RadixDijkstra {
    /// Creates a new radix heap SSSP instance
    pub fn new() -> Self {
        RadixDijkstra
    }
}

impl<G: Graph> ShortestPathAlgorithm<G> for RadixDijkstra {
    fn name(&self) -> &'static str {
        "Radix heap SSSP"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult> {
        lazy_dijkstra(graph, source, RadixHeap::<u64, usize>::new())
    }
}
