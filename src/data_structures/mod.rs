pub mod priority_queue;
pub mod radix_heap;

pub use priority_queue::{BinaryHeapWrapper, DistanceQueue};
pub use radix_heap::{bucket_index, RadixHeap, RadixKey};
