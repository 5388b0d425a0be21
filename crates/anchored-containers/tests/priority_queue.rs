#![allow(unused_crate_dependencies, reason = "These are tests, not the main crate.")]
#![allow(unused_macros, reason = "Each test file uses only some of the shared suites.")]

mod all;


use std::cmp::Ordering;

use oorandom::Rand32;

use anchored_containers::{
    Collection, CollectionError, Membership, OrdComparator, PriorityCollection, PriorityQueue,
    Reversed,
};


all::tests_for_min_priority_collections!(PriorityQueue::new(OrdComparator));


fn assert_heap_invariant<T, C: anchored_containers::Comparator<T>>(queue: &PriorityQueue<T, C>) {
    let heap = queue.as_slice();
    for (index, entry) in heap.iter().enumerate().skip(1) {
        let parent = &heap[(index - 1) / 2];
        assert_ne!(queue.comparator().cmp(parent, entry), Ordering::Greater, "index {index}");
    }
}

#[test]
fn heap_invariant_under_random_operations() {
    let mut prng = Rand32::new(0xfeed);
    let mut queue = PriorityQueue::with_capacity(Reversed(OrdComparator), 64);

    for _ in 0..1_000 {
        if prng.rand_range(0..4) == 0 {
            let _ = queue.poll();
        } else {
            queue.offer(prng.rand_range(0..500));
        }
        assert_heap_invariant(&queue);
    }

    let sorted = queue.into_sorted_vec();
    assert!(sorted.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn closure_comparator_by_key() {
    let by_len = |lhs: &String, rhs: &String| lhs.len().cmp(&rhs.len());
    let mut queue = PriorityQueue::new(by_len);
    queue.offer_all(["three", "a", "to"].map(String::from));

    assert_eq!(queue.poll().as_deref(), Ok("a"));
    assert_eq!(queue.poll().as_deref(), Ok("to"));
    assert_eq!(queue.poll().as_deref(), Ok("three"));
}

#[test]
fn values_are_in_heap_order() {
    let mut queue = PriorityQueue::new(OrdComparator);
    queue.offer_all([5, 4, 3, 2, 1]);

    let values = queue.values();
    assert_eq!(values.len(), 5);
    assert_eq!(values[0], 1);
    assert_eq!(queue.iter().count(), 5);
    assert_heap_invariant(&queue);
}
