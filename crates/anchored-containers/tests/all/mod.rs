/// Tests for the containers which serve their minimum entry under an `OrdComparator`.
///
/// Expects `CollectionError`, `Collection`, `PriorityCollection`, `Membership`, and `Rand32` to
/// be in scope.
macro_rules! tests_for_min_priority_collections {
    ($new:expr $(,)?) => {
        // ================================
        //  Empty Container
        // ================================

        #[test]
        fn empty_container() {
            let mut container = $new;
            container.offer(0_u32);
            assert_eq!(container.poll(), Ok(0));

            assert!(container.is_empty());
            assert_eq!(container.len(), 0);
            assert_eq!(container.peek(), Err(CollectionError::EmptyContainer));
            assert_eq!(container.poll(), Err(CollectionError::EmptyContainer));
            assert!(!container.contains(&0));
            assert!(container.values().is_empty());

            let _check_that_debug_works = format!("{container:?}");
        }

        // ================================
        //  Poll Order
        // ================================

        #[test]
        fn poll_order_scenario() {
            let mut container = $new;
            container.offer_all([3_u32, 1, 2]);

            let mut polled = vec![container.poll().unwrap()];
            polled.push(container.poll().unwrap());
            container.offer_all([5, 4]);
            while let Ok(value) = container.poll() {
                polled.push(value);
            }

            assert_eq!(polled, [1, 2, 3, 4, 5]);
        }

        #[test]
        fn duplicates_are_kept() {
            let mut container = $new;
            container.offer_all([2_u32, 2, 1, 2, 1]);
            assert_eq!(container.len(), 5);

            let mut polled = Vec::new();
            while let Ok(value) = container.poll() {
                polled.push(value);
            }
            assert_eq!(polled, [1, 1, 2, 2, 2]);
        }

        #[test]
        fn random_poll_order() {
            let mut prng = Rand32::new(0xc0ffee);

            for round in 0..20 {
                let mut container = $new;
                let len = prng.rand_range(0..300);
                let mut reference: Vec<u32> = (0..len).map(|_| prng.rand_range(0..100)).collect();
                container.offer_all(reference.iter().copied());
                reference.sort_unstable();

                let mut polled = Vec::with_capacity(reference.len());
                while let Ok(value) = container.poll() {
                    polled.push(value);
                }
                assert_eq!(polled, reference, "round {round}");
            }
        }

        #[test]
        fn interleaved_offers_and_polls() {
            let mut prng = Rand32::new(17);
            let mut container = $new;
            // Kept sorted in descending order, so that the minimum is last.
            let mut reference: Vec<u32> = Vec::new();

            for _ in 0..2_000 {
                if prng.rand_range(0..3) == 0 {
                    assert_eq!(container.poll().ok(), reference.pop());
                } else {
                    let value = prng.rand_range(0..1_000);
                    container.offer(value);
                    let position = reference.partition_point(|&entry| entry > value);
                    reference.insert(position, value);
                }

                assert_eq!(container.len(), reference.len());
                assert_eq!(container.peek().ok(), reference.last());
            }
        }

        // ================================
        //  Other Operations
        // ================================

        #[test]
        fn clone_is_independent() {
            let mut container = $new;
            container.offer_all([8_u32, 3, 5]);
            let mut copy = container.clone();

            assert_eq!(copy.poll(), Ok(3));
            copy.offer(1);
            assert_eq!(container.peek(), Ok(&3));
            assert_eq!(container.len(), 3);
            assert!(!container.contains(&1));
            assert_eq!(copy.peek(), Ok(&1));
        }

        #[test]
        fn clear_then_reuse() {
            let mut container = $new;
            container.offer_all(0_u32..50);
            container.clear();
            assert!(container.is_empty());
            assert_eq!(container.peek(), Err(CollectionError::EmptyContainer));

            container.offer(7);
            assert_eq!(container.values(), [7]);
        }
    };
}

/// Tests for the index-addressable containers.
///
/// Expects `CollectionError`, `Collection`, `Sequence`, `Membership`, `OrdComparator`, and
/// `Rand32` to be in scope.
macro_rules! tests_for_all_sequences {
    ($new:expr $(,)?) => {
        // ================================
        //  Boundaries
        // ================================

        #[test]
        fn out_of_range_indices() {
            let mut sequence = $new;
            assert_eq!(
                sequence.get(0),
                Err(CollectionError::IndexOutOfRange { index: 0, len: 0 }),
            );
            assert!(sequence.remove_at(0).is_err());

            sequence.add_all([1_u32, 2, 3]);
            for index in [3, 4, usize::MAX] {
                assert_eq!(
                    sequence.get(index),
                    Err(CollectionError::IndexOutOfRange { index, len: 3 }),
                );
                assert_eq!(
                    sequence.remove_at(index),
                    Err(CollectionError::IndexOutOfRange { index, len: 3 }),
                );
            }
            assert_eq!(sequence.values(), [1, 2, 3]);

            let _check_that_debug_works = format!("{sequence:?}");
        }

        // ================================
        //  Positional Operations
        // ================================

        #[test]
        fn random_operations_match_vec() {
            let mut prng = Rand32::new(99);
            let mut sequence = $new;
            let mut reference: Vec<u32> = Vec::new();

            for step in 0..3_000_u32 {
                match prng.rand_range(0..4) {
                    0 => {
                        sequence.add(step);
                        reference.push(step);
                    }
                    1 => {
                        let index = prng.rand_range(0..reference.len() as u32 + 1) as usize;
                        Sequence::insert_at(&mut sequence, index, step).unwrap();
                        reference.insert(index, step);
                    }
                    2 if !reference.is_empty() => {
                        let index = prng.rand_range(0..reference.len() as u32) as usize;
                        assert_eq!(sequence.remove_at(index), Ok(reference.remove(index)));
                    }
                    _ => {
                        let index = prng.rand_range(0..reference.len() as u32 + 1) as usize;
                        assert_eq!(sequence.get(index).ok(), reference.get(index));
                    }
                }
                assert_eq!(sequence.len(), reference.len());
            }

            assert_eq!(sequence.values(), reference);
            assert!(sequence.iter().eq(reference.iter()));
        }

        #[test]
        fn reverse_twice_is_identity() {
            let mut sequence = $new;
            sequence.add_all(0_u32..9);
            sequence.reverse();
            assert_eq!(sequence.values(), [8, 7, 6, 5, 4, 3, 2, 1, 0]);
            sequence.reverse();
            assert_eq!(sequence.values(), [0, 1, 2, 3, 4, 5, 6, 7, 8]);
        }

        // ================================
        //  Sorting
        // ================================

        #[test]
        fn sort_is_ordered_and_idempotent() {
            let mut prng = Rand32::new(3);

            for round in 0..20 {
                let mut sequence = $new;
                let len = prng.rand_range(0..250);
                sequence.add_all((0..len).map(|_| prng.rand_range(0..50)));

                sequence.sort_by(&OrdComparator);
                let once = sequence.values();
                assert!(once.windows(2).all(|pair| pair[0] <= pair[1]), "round {round}");

                sequence.sort_by(&OrdComparator);
                assert_eq!(sequence.values(), once, "round {round}");
            }
        }

        #[test]
        fn sort_is_stable() {
            let mut sequence = $new;
            // Sort by the tens digit only.
            sequence.add_all([31_u32, 12, 35, 10, 33, 17]);
            sequence.sort_by(&|lhs: &u32, rhs: &u32| (lhs / 10).cmp(&(rhs / 10)));
            assert_eq!(sequence.values(), [12, 10, 17, 31, 35, 33]);
        }

        // ================================
        //  Whole-Sequence Operations
        // ================================

        #[test]
        fn clone_round_trip() {
            let mut original = $new;
            original.add_all([4_u32, 5, 6]);
            let mut copy = original.clone();
            assert_eq!(copy.values(), original.values());

            copy.add(7);
            original.remove_at(0).unwrap();
            assert_eq!(original.values(), [5, 6]);
            assert_eq!(copy.values(), [4, 5, 6, 7]);
        }

        #[test]
        fn merge_filter_contains() {
            let mut sequence = $new;
            sequence.add_all([1_u32, 2, 3]);
            let mut other = $new;
            other.add_all([4, 5]);

            sequence.merge(&other);
            assert_eq!(sequence.values(), [1, 2, 3, 4, 5]);
            assert_eq!(other.values(), [4, 5]);

            let odd = sequence.filter(|value| value % 2 == 1);
            assert_eq!(odd.values(), [1, 3, 5]);
            assert_eq!(sequence.len(), 5);

            assert!(sequence.contains(&4));
            assert!(!odd.contains(&4));

            sequence.clear();
            assert!(sequence.is_empty());
            assert!(!sequence.contains(&1));
        }
    };
}

#[allow(unused_imports, reason = "not every test file uses both suites")]
pub(crate) use tests_for_all_sequences as tests_for_all_sequences;
#[allow(unused_imports, reason = "not every test file uses both suites")]
pub(crate) use tests_for_min_priority_collections as tests_for_min_priority_collections;
