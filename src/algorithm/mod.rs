pub mod traits;
pub mod dijkstra;
pub mod radix_dijkstra;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
