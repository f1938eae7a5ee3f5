//! Classic in-place comparison sorts.

use crate::heap::{heapify_max, sift_down};

/// Bubble sort with early exit once a pass makes no swaps.
pub fn bubble_sort<T: Ord>(data: &mut [T]) {
    let mut unsorted = data.len();
    while unsorted > 1 {
        let mut last_swap = 0;
        for i in 1..unsorted {
            if data[i - 1] > data[i] {
                data.swap(i - 1, i);
                last_swap = i;
            }
        }
        // Everything past the last swap is already in place.
        unsorted = last_swap;
    }
}

/// Selection sort. Not stable.
pub fn selection_sort<T: Ord>(data: &mut [T]) {
    for i in 0..data.len() {
        let mut smallest = i;
        for j in i + 1..data.len() {
            if data[j] < data[smallest] {
                smallest = j;
            }
        }
        if smallest != i {
            data.swap(i, smallest);
        }
    }
}

/// Insertion sort. Stable, and linear on already sorted input.
pub fn insertion_sort<T: Ord>(data: &mut [T]) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && data[j - 1] > data[j] {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Shell sort over the gap sequence n/2, n/4, ..., 1.
pub fn shell_sort<T: Ord>(data: &mut [T]) {
    let mut gap = data.len() / 2;
    while gap > 0 {
        for i in gap..data.len() {
            let mut j = i;
            while j >= gap && data[j - gap] > data[j] {
                data.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

/// Quicksort with Lomuto partitioning and a median-of-three pivot.
///
/// Recurses into the smaller side and loops on the larger one, so stack
/// depth stays logarithmic. Keys equal to the pivot are gathered next to it
/// and never revisited, which keeps inputs with few distinct keys linear
/// per level.
pub fn quick_sort<T: Ord>(mut data: &mut [T]) {
    while data.len() > 1 {
        let (start, end) = partition(data);
        let (left, rest) = std::mem::take(&mut data).split_at_mut(start);
        let right = &mut rest[end - start..];
        if left.len() < right.len() {
            quick_sort(left);
            data = right;
        } else {
            quick_sort(right);
            data = left;
        }
    }
}

/// Partitions around a median-of-three pivot. Returns the range
/// `start..end` holding the pivot and every key equal to it.
fn partition<T: Ord>(data: &mut [T]) -> (usize, usize) {
    let last = data.len() - 1;
    let mid = last / 2;

    // Order first/mid/last, then park the median at the end as the pivot.
    if data[mid] < data[0] {
        data.swap(mid, 0);
    }
    if data[last] < data[0] {
        data.swap(last, 0);
    }
    if data[last] < data[mid] {
        data.swap(last, mid);
    }
    data.swap(mid, last);

    let mut store = 0;
    for i in 0..last {
        if data[i] < data[last] {
            data.swap(i, store);
            store += 1;
        }
    }
    data.swap(store, last);

    let mut end = store + 1;
    for i in end..data.len() {
        if data[i] == data[store] {
            data.swap(i, end);
            end += 1;
        }
    }
    (store, end)
}

/// Heap sort: build a max-heap, then repeatedly move the root behind the heap.
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    heapify_max(data);
    for end in (1..data.len()).rev() {
        data.swap(0, end);
        sift_down(data, 0, end);
    }
}
