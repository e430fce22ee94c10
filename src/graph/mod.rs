pub mod traits;
pub mod directed;
pub mod loader;
pub mod generators;

pub use traits::Graph;
pub use directed::{DirectedGraph, Edge};
pub use loader::{load_edge_list, parse_edge_list, read_edge_list, MAX_NODE_ID};
pub use generators::{generate_edges, random_graph, write_edge_list, RandomGraphConfig};
