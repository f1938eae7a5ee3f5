use classic_algos::prelude::*;
use classic_algos::sorting::{heap_sort, is_sorted};
use rand::Rng;
use std::time::Instant;

#[test]
fn test_radix_sort_1m() {
    let count = 1_000_000;
    println!("Generating {count} random elements...");

    let mut rng = rand::rng();
    let mut input: Vec<Vec<u8>> = Vec::with_capacity(count);
    for _ in 0..count {
        let len = rng.random_range(4..16);
        let mut row = vec![0u8; len];
        rng.fill(&mut row[..]);
        input.push(row);
    }

    println!("Sorting {count} elements...");
    let start = Instant::now();
    let indices = sorted_indices(&input);
    println!("Sorted 1M elements in {:?}", start.elapsed());

    assert_eq!(indices.len(), count);
    for i in 0..count - 1 {
        let a = &input[indices[i]];
        let b = &input[indices[i + 1]];
        assert!(a <= b, "Sort failed at index {i}");
    }
}

#[test]
fn test_comparison_sorts_1m() {
    let mut rng = rand::rng();
    let input: Vec<i64> = (0..1_000_000).map(|_| rng.random()).collect();

    let sorts: [(&str, fn(&mut [i64])); 3] = [
        ("merge", merge_sort),
        ("quick", quick_sort),
        ("heap", heap_sort),
    ];
    for (name, sort) in sorts {
        let mut data = input.clone();
        let start = Instant::now();
        sort(&mut data);
        println!("{name} sort of 1M integers took {:?}", start.elapsed());
        assert!(is_sorted(&data), "{name} sort failed");
    }
}

#[test]
fn test_quick_sort_adversarial_inputs() {
    // Sorted, reversed and constant inputs must not degrade into deep recursion.
    let ascending: Vec<u32> = (0..200_000).collect();
    let cases = [
        ascending.clone(),
        ascending.iter().rev().copied().collect(),
        vec![7; 200_000],
        (0..200_000).map(|i| i % 3).collect(),
    ];
    for mut data in cases {
        quick_sort(&mut data);
        assert!(is_sorted(&data));
    }
}
