//! Random benchmark graph generator
//!
//! ```bash
//! generate_graph data/large.txt --nodes 100000 --edges 600000 --seed 7
//! ```

use std::error::Error;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use radix_sssp::graph::{generate_edges, write_edge_list, RandomGraphConfig};

/// Generate a large random graph file for the SSSP benchmark
#[derive(Parser, Debug)]
#[command(name = "generate_graph")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to write the generated graph (text file)
    output: PathBuf,

    /// Number of nodes to generate
    #[arg(long, default_value = "50000")]
    nodes: usize,

    /// Number of directed edges
    #[arg(long, default_value = "300000")]
    edges: usize,

    /// Maximum edge weight
    #[arg(long, default_value = "1000")]
    max_weight: u64,

    /// Random seed for reproducibility
    #[arg(long, default_value = "42")]
    seed: u64,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = RandomGraphConfig {
        nodes: args.nodes,
        edges: args.edges,
        max_weight: args.max_weight,
        seed: args.seed,
    };
    let edges = generate_edges(&config)?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(&args.output)?);
    write_edge_list(writer, Some(&config.header()), &edges)?;

    println!(
        "Wrote {} edges covering {} nodes to {}",
        edges.len(),
        config.nodes,
        args.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
