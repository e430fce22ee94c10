use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{BinaryHeapWrapper, DistanceQueue};
use crate::graph::Graph;
use crate::{Error, Result, INF};

/// Classic Dijkstra's algorithm driven by a binary heap
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<G: Graph> ShortestPathAlgorithm<G> for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra (binary heap)"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult> {
        let queue = BinaryHeapWrapper::<usize, u64>::with_capacity(graph.vertex_count());
        lazy_dijkstra(graph, source, queue)
    }
}

/// Dijkstra's relaxation loop over any [`DistanceQueue`]
///
/// The queue never sees a decrease-key. Every improvement pushes a new entry,
/// and an entry whose distance no longer matches `distances[u]` is skipped on
/// pop. Only the first entry popped for a vertex at its final distance is
/// expanded.
pub(crate) fn lazy_dijkstra<G, Q>(
    graph: &G,
    source: usize,
    mut queue: Q,
) -> Result<ShortestPathResult>
where
    G: Graph,
    Q: DistanceQueue,
{
    if !graph.has_vertex(source) {
        return Err(Error::InvalidVertex(source));
    }

    let n = graph.vertex_count();
    let mut distances = vec![INF; n];
    let mut predecessors = vec![None; n];

    distances[source] = 0;
    queue.push(0, source);

    while !queue.is_empty() {
        let (d, u) = queue.pop()?;
        if d != distances[u] {
            continue;
        }

        for edge in graph.outgoing_edges(u) {
            let candidate = d.saturating_add(edge.weight);
            if candidate < distances[edge.to] {
                distances[edge.to] = candidate;
                predecessors[edge.to] = Some(u);
                queue.push(candidate, edge.to);
            }
        }
    }

    Ok(ShortestPathResult {
        distances,
        predecessors,
        source,
    })
}
