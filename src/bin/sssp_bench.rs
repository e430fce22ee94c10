//! Benchmark CLI
//!
//! Loads an edge list, runs binary heap Dijkstra and radix heap SSSP from the
//! given source, reports timings and checks that both agree.
//!
//! ```bash
//! sssp_bench graph.txt 0 5
//! RUST_LOG=debug sssp_bench graph.txt 0 --parallel --json
//! ```

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use radix_sssp::graph::{load_edge_list, Graph};
use radix_sssp::{BenchConfig, BenchmarkHarness};

/// Compare Dijkstra (binary heap) with radix heap SSSP
///
/// Input file format: each line has 'from to weight' (space or tab separated).
/// Nodes are zero-indexed. Lines starting with # are ignored.
#[derive(Parser, Debug)]
#[command(name = "sssp_bench")]
#[command(version, about, long_about = None)]
struct Args {
    /// Edge list file
    input_file: PathBuf,

    /// Source node id
    #[arg(allow_negative_numbers = true)]
    source_node: i64,

    /// Repeat each algorithm to smooth timings (values below 1 count as 1)
    #[arg(allow_negative_numbers = true, default_value = "1")]
    runs: i64,

    /// Run both algorithms concurrently on separate threads
    #[arg(long)]
    parallel: bool,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,
}

impl Args {
    fn into_config(self) -> BenchConfig {
        BenchConfig::new(self.input_file, self.source_node)
            .with_runs(self.runs)
            .with_parallel(self.parallel)
            .with_json(self.json)
    }
}

fn run(config: &BenchConfig) -> Result<(), Box<dyn Error>> {
    let graph = load_edge_list(&config.input)?;
    let source = config.resolve_source(graph.vertex_count())?;
    let harness = BenchmarkHarness::from_config(config);

    if config.json {
        let comparison = harness.compare(&graph, source, config.parallel)?;
        let report = comparison.report(&graph);
        println!("{}", serde_json::to_string_pretty(&report)?);
        comparison.verify()?;
    } else {
        println!("Loaded graph with {} nodes.", graph.vertex_count());
        let comparison = harness.compare_with(&graph, source, config.parallel, |outcome| {
            println!("{}", outcome.summary());
        })?;
        comparison.verify()?;
        println!("Results match for both algorithms.");
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&args.into_config()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
