use radix_sssp::data_structures::{bucket_index, BinaryHeapWrapper, DistanceQueue, RadixHeap};
use radix_sssp::Error;
use rand::prelude::*;
use rand::rngs::StdRng;

#[test]
fn test_pops_in_key_order() {
    let mut heap: RadixHeap<u64, &str> = RadixHeap::new();
    heap.push(40, "d");
    heap.push(7, "b");
    heap.push(0, "a");
    heap.push(300, "e");
    heap.push(7, "c");
    assert_eq!(heap.len(), 5);

    let keys: Vec<u64> = std::iter::from_fn(|| heap.pop().ok()).map(|(k, _)| k).collect();
    assert_eq!(keys, vec![0, 7, 7, 40, 300]);
    assert!(heap.is_empty());
}

#[test]
fn test_interleaved_monotone_pushes_pop_non_decreasing() {
    for seed in 0..20_u64 {
        let mut rng = StdRng::seed_from_u64(0x4AD1_0000 + seed);
        let mut heap: RadixHeap<u64, usize> = RadixHeap::new();
        let mut previous = 0_u64;
        let mut pushed = 0;
        let mut popped = 0;

        for step in 0..3_000 {
            if heap.is_empty() || rng.gen_bool(0.55) {
                let key = heap.last() + rng.gen_range(0..=1_000_000_u64);
                heap.push(key, step);
                pushed += 1;
            } else {
                let (key, _) = heap.pop().unwrap();
                assert!(key >= previous, "seed={seed} step={step}");
                previous = key;
                popped += 1;
            }
            assert!(heap.is_consistent(), "seed={seed} step={step}");
        }

        while !heap.is_empty() {
            let (key, _) = heap.pop().unwrap();
            assert!(key >= previous, "seed={seed}");
            previous = key;
            popped += 1;
        }
        assert_eq!(pushed, popped);
    }
}

#[test]
fn test_matches_binary_heap_key_sequence() {
    let mut rng = StdRng::seed_from_u64(0x5EED_B1A5);
    let mut radix: RadixHeap<u64, usize> = RadixHeap::new();
    let mut binary: BinaryHeapWrapper<usize, u64> = BinaryHeapWrapper::new();

    for value in 0..500 {
        let key = rng.gen_range(0..u64::MAX / 2);
        radix.push(key, value);
        binary.push(value, key);
    }

    while let Some((_, expected)) = binary.pop() {
        let (key, _) = radix.pop().unwrap();
        assert_eq!(key, expected);
    }
    assert!(radix.is_empty());
}

#[test]
fn test_duplicate_entries_are_all_returned() {
    let mut heap: RadixHeap<u64, usize> = RadixHeap::new();
    for vertex in 0..4 {
        heap.push(10, vertex);
    }
    heap.push(10, 0);

    let mut vertices = Vec::new();
    while !heap.is_empty() {
        let (key, vertex) = heap.pop().unwrap();
        assert_eq!(key, 10);
        vertices.push(vertex);
    }
    vertices.sort_unstable();
    assert_eq!(vertices, vec![0, 0, 1, 2, 3]);
}

#[test]
fn test_pop_on_empty_queue_is_an_error() {
    let mut heap: RadixHeap<u64, usize> = RadixHeap::new();
    assert!(matches!(heap.pop(), Err(Error::QueueUnderflow)));

    let mut binary: BinaryHeapWrapper<usize, u64> = BinaryHeapWrapper::new();
    assert!(matches!(DistanceQueue::pop(&mut binary), Err(Error::QueueUnderflow)));
    assert_eq!(Error::QueueUnderflow.to_string(), "Priority queue is empty");
}

#[test]
fn test_clear_resets_last() {
    let mut heap: RadixHeap<u64, usize> = RadixHeap::new();
    heap.push(1_000, 1);
    heap.push(2_000, 2);
    heap.pop().unwrap();
    assert_eq!(heap.last(), 1_000);

    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.last(), 0);
    heap.push(5, 3);
    assert_eq!(heap.pop().unwrap(), (5, 3));
}

#[test]
fn test_narrow_keys() {
    let mut heap: RadixHeap<u8, char> = RadixHeap::new();
    for (key, value) in [(200, 'c'), (3, 'a'), (255, 'd'), (17, 'b')] {
        heap.push(key, value);
    }
    let values: Vec<char> = std::iter::from_fn(|| heap.pop().ok()).map(|(_, v)| v).collect();
    assert_eq!(values, vec!['a', 'b', 'c', 'd']);
}

#[test]
fn test_bucket_index_boundaries() {
    assert_eq!(bucket_index(0_u64), 0);
    assert_eq!(bucket_index(1_u64), 1);
    assert_eq!(bucket_index(0b1000_u64), 4);
    assert_eq!(bucket_index(0b1111_u64), 4);
    assert_eq!(bucket_index(1_u64 << 63), 64);
    assert_eq!(bucket_index(u64::MAX), 64);
}
