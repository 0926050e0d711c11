//! Property-based tests for the sorters.
//!
//! Every correct sorter must return a non-decreasing permutation of its input and leave
//! sorted input unchanged.

use proptest::prelude::*;
use sortbench::prelude::*;
use std::collections::HashMap;

type SortFn = fn(&mut [i32]);

const SORTERS: [SortFn; 7] = [
    bubble_sort,
    insertion_sort,
    selection_sort,
    quick_sort,
    merge_sort,
    heap_sort,
    lsd_radix_sort,
];

fn multiset(data: &[i32]) -> HashMap<i32, usize> {
    let mut counts = HashMap::new();
    for &v in data {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Bounded values to force plenty of duplicates, or the full i32 domain.
fn values_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop_oneof![
        prop::collection::vec(-128i32..=128, 0..300),
        prop::collection::vec(any::<i32>(), 0..300),
    ]
}

proptest! {
    #[test]
    fn prop_sorted_permutation(input in values_strategy()) {
        for sort in SORTERS {
            let mut data = input.clone();
            sort(&mut data);
            prop_assert!(is_sorted(&data));
            prop_assert_eq!(multiset(&data), multiset(&input));
        }
    }

    #[test]
    fn prop_idempotent(input in values_strategy()) {
        let mut sorted = input.clone();
        sorted.sort();
        for sort in SORTERS {
            let mut data = sorted.clone();
            sort(&mut data);
            prop_assert_eq!(&data, &sorted);
        }
    }

    #[test]
    fn prop_verifier_matches_windows(input in values_strategy()) {
        let expected = (1..input.len()).all(|i| input[i - 1] <= input[i]);
        prop_assert_eq!(is_sorted(&input), expected);
    }

    #[test]
    fn prop_radix_stub_touches_only_first(input in prop::collection::vec(any::<i32>(), 1..100)) {
        let mut data = input.clone();
        radix_sort(&mut data);
        prop_assert_eq!(data[0], input[0].wrapping_add(1));
        prop_assert_eq!(&data[1..], &input[1..]);
    }
}
