use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use crate::{Error, Result};

/// Minimum priority queue of `(distance, vertex)` entries as seen by the
/// shortest path engines
///
/// There is no decrease-key. Callers push a fresh entry whenever a distance
/// improves and discard stale entries when they come out.
pub trait DistanceQueue: Debug {
    /// Inserts a vertex with its tentative distance
    fn push(&mut self, distance: u64, vertex: usize);

    /// Removes an entry with the smallest distance
    ///
    /// Fails with [`Error::QueueUnderflow`] when the queue is empty.
    fn pop(&mut self) -> Result<(u64, usize)>;

    /// Returns true if the queue holds no entries
    fn is_empty(&self) -> bool;

    /// Returns the number of entries, stale ones included
    fn len(&self) -> usize;
}

/// A comparison-based priority queue backed by [`BinaryHeap`]
#[derive(Debug)]
pub struct BinaryHeapWrapper<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// The underlying max-heap, inverted with `Reverse`
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> Default for BinaryHeapWrapper<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> BinaryHeapWrapper<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a value with the given priority
    pub fn push(&mut self, value: V, priority: P) {
        self.heap.push(Reverse((priority, value)));
    }

    /// Removes the value with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, value))| (value, priority))
    }
}

impl DistanceQueue for BinaryHeapWrapper<usize, u64> {
    fn push(&mut self, distance: u64, vertex: usize) {
        BinaryHeapWrapper::push(self, vertex, distance);
    }

    fn pop(&mut self) -> Result<(u64, usize)> {
        BinaryHeapWrapper::pop(self)
            .map(|(vertex, distance)| (distance, vertex))
            .ok_or(Error::QueueUnderflow)
    }

    fn is_empty(&self) -> bool {
        BinaryHeapWrapper::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeapWrapper::len(self)
    }
}
