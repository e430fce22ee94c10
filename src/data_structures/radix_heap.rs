//! Monotone radix heap over unsigned integer keys.
//!
//! Entries are grouped into `BITS + 1` buckets by the position of the highest bit
//! in which their key differs from `last`, the most recently extracted minimum.
//! Bucket 0 holds exactly the entries whose key equals `last`; bucket `i > 0` holds
//! entries whose highest differing bit is bit `i - 1`.
//!
//! The heap is *monotone*: a pushed key must never be smaller than `last`. Dijkstra
//! with non-negative weights satisfies this for free, since a relaxed distance is
//! at least the distance of the vertex it was relaxed from.
//!
//! When bucket 0 runs dry, the lowest non-empty bucket is emptied: its minimum
//! becomes the new `last` and every entry in it is redistributed. Each entry
//! moves to a strictly lower bucket every time it is redistributed, so it is
//! touched at most `BITS` times over its lifetime. The amortized cost therefore
//! depends on key width, not on the number of entries.

use std::fmt::Debug;

use log::trace;
use num_traits::{PrimInt, Unsigned};

use crate::data_structures::priority_queue::DistanceQueue;
use crate::{Error, Result};

/// Keys usable in a [`RadixHeap`]: any unsigned primitive integer
pub trait RadixKey: PrimInt + Unsigned + Debug {}

impl<T: PrimInt + Unsigned + Debug> RadixKey for T {}

/// Number of bits in the key type
#[inline]
fn key_bits<K: RadixKey>() -> usize {
    K::zero().count_zeros() as usize
}

/// Bucket for an entry whose key differs from `last` by `diff = key ^ last`
///
/// `0` maps to bucket 0; otherwise the result is one plus the index of the
/// highest set bit, counted from the least significant bit.
#[inline]
pub fn bucket_index<K: RadixKey>(diff: K) -> usize {
    if diff.is_zero() {
        0
    } else {
        key_bits::<K>() - diff.leading_zeros() as usize
    }
}

/// A monotone minimum priority queue with bucket relocation
///
/// Ties inside bucket 0 come out in unspecified order.
#[derive(Debug, Clone)]
pub struct RadixHeap<K = u64, V = usize>
where
    K: RadixKey,
{
    /// `BITS + 1` unordered buckets
    buckets: Vec<Vec<(K, V)>>,

    /// Most recently extracted minimum; never decreases
    last: K,

    /// Number of entries across all buckets
    len: usize,
}

impl<K: RadixKey, V> Default for RadixHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RadixKey, V> RadixHeap<K, V> {
    /// Creates an empty heap with `last = 0`
    pub fn new() -> Self {
        RadixHeap {
            buckets: (0..=key_bits::<K>()).map(|_| Vec::new()).collect(),
            last: K::zero(),
            len: 0,
        }
    }

    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of entries in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// The most recently extracted minimum, or zero before the first relocation
    pub fn last(&self) -> K {
        self.last
    }

    /// Inserts an entry
    ///
    /// `key` must be at least [`last`](Self::last). This is the caller's contract and
    /// is only checked in debug builds.
    pub fn push(&mut self, key: K, value: V) {
        debug_assert!(key >= self.last, "radix heap keys must be monotone");
        let b = bucket_index(key ^ self.last);
        self.buckets[b].push((key, value));
        self.len += 1;
    }

    /// Removes an entry with the minimum key
    ///
    /// Fails with [`Error::QueueUnderflow`] if the heap is empty.
    pub fn pop(&mut self) -> Result<(K, V)> {
        if self.buckets[0].is_empty() {
            self.relocate()?;
        }
        let entry = self.buckets[0].pop().ok_or(Error::QueueUnderflow)?;
        self.len -= 1;
        Ok(entry)
    }

    /// Removes every entry and resets `last` to zero
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.last = K::zero();
        self.len = 0;
    }

    /// Checks that every entry sits in the bucket its key dictates
    pub fn is_consistent(&self) -> bool {
        let counted: usize = self.buckets.iter().map(Vec::len).sum();
        counted == self.len
            && self.buckets.iter().enumerate().all(|(i, bucket)| {
                bucket
                    .iter()
                    .all(|&(key, _)| key >= self.last && bucket_index(key ^ self.last) == i)
            })
    }

    /// Moves the lowest non-empty bucket's minimum into `last` and spreads that
    /// bucket's entries over the lower buckets
    fn relocate(&mut self) -> Result<()> {
        let i = self
            .buckets
            .iter()
            .skip(1)
            .position(|bucket| !bucket.is_empty())
            .map(|offset| offset + 1)
            .ok_or(Error::QueueUnderflow)?;

        let entries = std::mem::take(&mut self.buckets[i]);
        let new_last = entries
            .iter()
            .map(|&(key, _)| key)
            .min()
            .ok_or(Error::QueueUnderflow)?;
        trace!(
            "relocating {} entries from bucket {}, last {:?} -> {:?}",
            entries.len(),
            i,
            self.last,
            new_last
        );
        self.last = new_last;

        for (key, value) in entries {
            let b = bucket_index(key ^ self.last);
            self.buckets[b].push((key, value));
        }
        Ok(())
    }
}

impl DistanceQueue for RadixHeap<u64, usize> {
    fn push(&mut self, distance: u64, vertex: usize) {
        RadixHeap::push(self, distance, vertex);
    }

    fn pop(&mut self) -> Result<(u64, usize)> {
        RadixHeap::pop(self)
    }

    fn is_empty(&self) -> bool {
        RadixHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        RadixHeap::len(self)
    }
}
