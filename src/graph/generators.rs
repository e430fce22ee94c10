use std::collections::HashSet;
use std::io::{self, Write};

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::DirectedGraph;
use crate::{Error, Result};

/// Parameters for a random benchmark graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomGraphConfig {
    /// Number of vertices
    pub nodes: usize,
    /// Number of directed edges, including the backbone path
    pub edges: usize,
    /// Weights are drawn uniformly from `1..=max_weight`
    pub max_weight: u64,
    /// Seed for the deterministic generator
    pub seed: u64,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        RandomGraphConfig {
            nodes: 50_000,
            edges: 300_000,
            max_weight: 1_000,
            seed: 42,
        }
    }
}

impl RandomGraphConfig {
    /// Checks that the requested graph can be built
    pub fn validate(&self) -> Result<()> {
        if self.nodes < 2 {
            return Err(Error::InvalidParameters(
                "nodes must be >= 2 to build an interesting graph".to_string(),
            ));
        }
        if self.edges < self.nodes - 1 {
            return Err(Error::InvalidParameters(
                "edges must be at least nodes-1 to keep the graph connected".to_string(),
            ));
        }
        let max_possible = self.nodes.saturating_mul(self.nodes - 1);
        if self.edges > max_possible {
            return Err(Error::InvalidParameters(format!(
                "edges must be <= {} for {} nodes (no self-loops)",
                max_possible, self.nodes
            )));
        }
        if self.max_weight == 0 {
            return Err(Error::InvalidParameters(
                "max-weight must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Comment line written at the top of generated files
    pub fn header(&self) -> String {
        format!(
            "Random graph generated with nodes={}, edges={}, max_weight={}, seed={}",
            self.nodes, self.edges, self.max_weight, self.seed
        )
    }
}

/// Generates the edge triples of a random directed graph
///
/// A backbone path `0 -> 1 -> ... -> n-1` makes every vertex reachable from 0.
/// The remaining edges are uniform over ordered pairs without self-loops or
/// repeated pairs.
pub fn generate_edges(config: &RandomGraphConfig) -> Result<Vec<(usize, usize, u64)>> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut used = HashSet::with_capacity(config.edges);
    let mut edges = Vec::with_capacity(config.edges);

    for u in 0..config.nodes - 1 {
        let v = u + 1;
        let w = rng.gen_range(1..=config.max_weight);
        used.insert((u, v));
        edges.push((u, v, w));
    }

    while edges.len() < config.edges {
        let u = rng.gen_range(0..config.nodes);
        let v = rng.gen_range(0..config.nodes);
        if u == v || !used.insert((u, v)) {
            continue;
        }
        let w = rng.gen_range(1..=config.max_weight);
        edges.push((u, v, w));
    }

    Ok(edges)
}

/// Generates a random graph directly
pub fn random_graph(config: &RandomGraphConfig) -> Result<DirectedGraph> {
    let edges = generate_edges(config)?;
    DirectedGraph::from_edges(config.nodes, &edges)
}

/// Writes edges in the `from to weight` text format, with an optional `#` header
pub fn write_edge_list<W: Write>(
    mut writer: W,
    header: Option<&str>,
    edges: &[(usize, usize, u64)],
) -> io::Result<()> {
    if let Some(header) = header {
        writeln!(writer, "# {}", header)?;
    }
    for &(u, v, w) in edges {
        writeln!(writer, "{} {} {}", u, v, w)?;
    }
    writer.flush()
}
