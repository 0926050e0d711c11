use rand::Rng;
use sortbench::prelude::*;

type SortFn = fn(&mut [i32]);

const CORRECT_SORTERS: [(&str, SortFn); 7] = [
    ("bubble", bubble_sort),
    ("insertion", insertion_sort),
    ("selection", selection_sort),
    ("quick", quick_sort),
    ("merge", merge_sort),
    ("heap", heap_sort),
    ("lsd_radix", lsd_radix_sort),
];

fn check_against_std(name: &str, sort: SortFn, input: &[i32]) {
    let mut expected = input.to_vec();
    expected.sort();

    let mut actual = input.to_vec();
    sort(&mut actual);
    assert_eq!(actual, expected, "{} failed on {:?}", name, input);
}

#[test]
fn test_end_to_end_scenario() {
    let input = [3, 1, 4, 1, 5];

    let mut data = input;
    bubble_sort(&mut data);
    assert_eq!(data, [1, 1, 3, 4, 5]);
    assert!(is_sorted(&data));

    let mut data = input;
    heap_sort(&mut data);
    assert_eq!(data, [1, 1, 3, 4, 5]);
}

#[test]
fn test_edge_cases() {
    for (name, sort) in CORRECT_SORTERS {
        // 1. Empty
        let mut empty: Vec<i32> = vec![];
        sort(&mut empty);
        assert!(empty.is_empty(), "{}", name);

        // 2. Single
        let mut single = vec![42];
        sort(&mut single);
        assert_eq!(single, vec![42], "{}", name);

        // 3. Two, both orders
        check_against_std(name, sort, &[2, 1]);
        check_against_std(name, sort, &[1, 2]);
        check_against_std(name, sort, &[7, 7]);

        // 4. Three
        check_against_std(name, sort, &[3, 2, 1]);
        check_against_std(name, sort, &[2, 3, 1]);

        // 5. All same
        check_against_std(name, sort, &[9; 50]);

        // 6. Reversed
        let reversed: Vec<i32> = (0..50).rev().collect();
        check_against_std(name, sort, &reversed);

        // 7. Full i32 domain
        check_against_std(
            name,
            sort,
            &[i32::MAX, 0, i32::MIN, -1, 1, i32::MIN, i32::MAX - 1],
        );
    }
}

#[test]
fn test_already_sorted_is_unchanged() {
    let sorted: Vec<i32> = (-100..100).map(|v| v / 3).collect();
    for (name, sort) in CORRECT_SORTERS {
        let mut data = sorted.clone();
        sort(&mut data);
        assert_eq!(data, sorted, "{}", name);
    }
}

#[test]
fn test_quick_sort_small_ranges() {
    let mut one = [5];
    quick_sort(&mut one);
    assert_eq!(one, [5]);

    let mut two = [5, 3];
    quick_sort(&mut two);
    assert_eq!(two, [3, 5]);
}

#[test]
fn test_merge_sort_pair() {
    let mut data = [2, 1];
    merge_sort(&mut data);
    assert_eq!(data, [1, 2]);
}

#[test]
fn test_algorithm_dispatch() {
    for algorithm in Algorithm::ALL {
        if algorithm == Algorithm::Radix {
            continue;
        }
        let mut data = vec![4, -2, 8, 0, -2, 16];
        algorithm.sort(&mut data);
        assert_eq!(data, vec![-2, -2, 0, 4, 8, 16], "{}", algorithm);
    }
}

#[test]
fn test_fuzz_random() {
    let mut rng = rand::rng();

    for _ in 0..500 {
        let len = rng.random_range(0..200);
        let input: Vec<i32> = (0..len).map(|_| rng.random_range(-128..=128)).collect();
        for (name, sort) in CORRECT_SORTERS {
            check_against_std(name, sort, &input);
        }
    }
}

#[test]
fn test_fuzz_full_domain() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let len = rng.random_range(0..300);
        let input: Vec<i32> = (0..len).map(|_| rng.random()).collect();
        for (name, sort) in CORRECT_SORTERS {
            check_against_std(name, sort, &input);
        }
    }
}

#[test]
fn test_random_source_buffer() {
    let mut source = RandomSource::from_clock();
    let mut data = vec![0; 4096];
    source.fill(&mut data);

    assert!(data.iter().all(|v| (-128..=128).contains(v)));
    for (name, sort) in CORRECT_SORTERS {
        let mut copy = data.clone();
        sort(&mut copy);
        assert!(is_sorted(&copy), "{}", name);
    }
}
