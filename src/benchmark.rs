//! Repeated timed runs of the shortest path engines.

use std::fmt;
use std::time::Instant;

use chrono::{DateTime, Utc};
use log::{debug, info};
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::config::BenchConfig;
use crate::graph::Graph;
use crate::verify::verify_distances;
use crate::{Dijkstra, RadixDijkstra, Result};

/// Runs an algorithm a fixed number of times and records wall-clock timings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkHarness {
    runs: usize,
}

/// Timings and the representative result of one algorithm
#[derive(Debug, Clone)]
pub struct BenchmarkOutcome {
    /// Algorithm name as reported by [`ShortestPathAlgorithm::name`]
    pub algorithm: &'static str,

    /// Result of the first run; later runs are identical and dropped
    pub result: ShortestPathResult,

    /// Elapsed milliseconds per run, in run order
    pub samples_ms: Vec<f64>,
}

/// Serializable timing line for one algorithm
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingSummary {
    pub algorithm: String,
    pub runs: usize,
    pub average_ms: f64,
    pub best_ms: f64,
}

/// Both engines benchmarked on the same graph and source
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Binary heap Dijkstra
    pub baseline: BenchmarkOutcome,

    /// Radix heap SSSP
    pub candidate: BenchmarkOutcome,
}

/// JSON document describing a comparison
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub vertices: usize,
    pub edges: usize,
    pub source: usize,
    pub reachable: usize,
    pub timings: Vec<TimingSummary>,
    pub results_match: bool,
    pub generated_at: DateTime<Utc>,
}

impl BenchmarkHarness {
    /// Creates a harness; `runs` below 1 is raised to 1
    pub fn new(runs: usize) -> Self {
        BenchmarkHarness { runs: runs.max(1) }
    }

    /// Creates a harness with the repetition count of a configuration
    pub fn from_config(config: &BenchConfig) -> Self {
        Self::new(config.runs)
    }

    /// Number of repetitions per algorithm
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Invokes `algorithm` `runs` times in sequence, keeping the first result
    pub fn run<G, A>(&self, algorithm: &A, graph: &G, source: usize) -> Result<BenchmarkOutcome>
    where
        G: Graph,
        A: ShortestPathAlgorithm<G>,
    {
        // `runs` is user input and may be huge
        let mut samples_ms = Vec::new();
        let (result, first_ms) = timed_run(algorithm, graph, source)?;
        samples_ms.push(first_ms);
        for _ in 1..self.runs {
            let (_, elapsed_ms) = timed_run(algorithm, graph, source)?;
            samples_ms.push(elapsed_ms);
        }

        let outcome = BenchmarkOutcome {
            algorithm: algorithm.name(),
            result,
            samples_ms,
        };
        info!(
            "{}: avg {:.3} ms, best {:.3} ms",
            outcome.algorithm,
            outcome.average_ms(),
            outcome.best_ms()
        );
        Ok(outcome)
    }

    /// Benchmarks binary heap Dijkstra against radix heap SSSP
    ///
    /// With `parallel` the two loops run on separate rayon workers. Each engine
    /// still allocates its own distances and queue; only the graph is shared.
    pub fn compare<G>(&self, graph: &G, source: usize, parallel: bool) -> Result<Comparison>
    where
        G: Graph + Sync,
    {
        self.compare_with(graph, source, parallel, |_| {})
    }

    /// Like [`compare`](Self::compare), calling `on_outcome` as soon as each
    /// algorithm finishes all of its runs
    ///
    /// Sequentially the baseline is reported first and an error stops the
    /// comparison before the candidate starts. In parallel mode outcomes are
    /// reported in completion order.
    pub fn compare_with<G, F>(
        &self,
        graph: &G,
        source: usize,
        parallel: bool,
        on_outcome: F,
    ) -> Result<Comparison>
    where
        G: Graph + Sync,
        F: Fn(&BenchmarkOutcome) + Sync,
    {
        let report = |outcome: BenchmarkOutcome| {
            on_outcome(&outcome);
            outcome
        };

        if parallel {
            let (baseline, candidate) = rayon::join(
                || self.run(&Dijkstra::new(), graph, source).map(report),
                || self.run(&RadixDijkstra::new(), graph, source).map(report),
            );
            return Ok(Comparison {
                baseline: baseline?,
                candidate: candidate?,
            });
        }

        let baseline = self.run(&Dijkstra::new(), graph, source).map(report)?;
        let candidate = self.run(&RadixDijkstra::new(), graph, source).map(report)?;
        Ok(Comparison {
            baseline,
            candidate,
        })
    }
}

fn timed_run<G, A>(algorithm: &A, graph: &G, source: usize) -> Result<(ShortestPathResult, f64)>
where
    G: Graph,
    A: ShortestPathAlgorithm<G>,
{
    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, source)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1_000.0;
    debug!("{} took {:.3} ms", algorithm.name(), elapsed_ms);
    Ok((result, elapsed_ms))
}

impl BenchmarkOutcome {
    /// Arithmetic mean of the samples in milliseconds
    pub fn average_ms(&self) -> f64 {
        if self.samples_ms.is_empty() {
            return 0.0;
        }
        self.samples_ms.iter().sum::<f64>() / self.samples_ms.len() as f64
    }

    /// Fastest sample in milliseconds
    pub fn best_ms(&self) -> f64 {
        self.samples_ms
            .iter()
            .copied()
            .map(OrderedFloat)
            .min()
            .map_or(0.0, OrderedFloat::into_inner)
    }

    /// Condensed timing line
    pub fn summary(&self) -> TimingSummary {
        TimingSummary {
            algorithm: self.algorithm.to_string(),
            runs: self.samples_ms.len(),
            average_ms: self.average_ms(),
            best_ms: self.best_ms(),
        }
    }
}

impl fmt::Display for TimingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<30}: avg={:.3} ms, best={:.3} ms over {} run(s)",
            self.algorithm, self.average_ms, self.best_ms, self.runs
        )
    }
}

impl Comparison {
    /// Checks that both engines produced the same distance vector
    pub fn verify(&self) -> Result<()> {
        verify_distances(&self.baseline.result.distances, &self.candidate.result.distances)
    }

    /// Builds the JSON report for this comparison
    pub fn report<G: Graph>(&self, graph: &G) -> ComparisonReport {
        ComparisonReport {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            source: self.baseline.result.source,
            reachable: self.baseline.result.reachable_count(),
            timings: vec![self.baseline.summary(), self.candidate.summary()],
            results_match: self.verify().is_ok(),
            generated_at: Utc::now(),
        }
    }
}
