//! Binary heaps: an array-backed min-heap, the max-heap sift routines used by
//! heap sort, and the usual heap-driven selection problems.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::io::{self, Write};
use tracing::instrument;

/// Array-backed binary min-heap.
///
/// The children of slot `i` live at `2i + 1` and `2i + 2`.
#[derive(Debug, Clone, Default)]
pub struct MinHeap<T> {
    items: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Builds a heap from arbitrary items in O(n).
    pub fn from_vec(items: Vec<T>) -> Self {
        let mut heap = Self { items };
        for start in (0..heap.items.len() / 2).rev() {
            heap.sift_down(start);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let top = self.items.swap_remove(0);
        self.sift_down(0);
        Some(top)
    }

    /// Drains the heap in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.items[child] >= self.items[parent] {
                break;
            }
            self.items.swap(child, parent);
            child = parent;
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * parent + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smaller = if right < len && self.items[right] < self.items[left] {
                right
            } else {
                left
            };
            if self.items[parent] <= self.items[smaller] {
                break;
            }
            self.items.swap(parent, smaller);
            parent = smaller;
        }
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

/// Restores max-heap order for the subtree at `start`, considering only `data[..end]`.
pub fn sift_down<T: Ord>(data: &mut [T], mut start: usize, end: usize) {
    loop {
        let left = 2 * start + 1;
        if left >= end {
            return;
        }
        let right = left + 1;
        let larger = if right < end && data[right] > data[left] {
            right
        } else {
            left
        };
        if data[start] >= data[larger] {
            return;
        }
        data.swap(start, larger);
        start = larger;
    }
}

/// Rearranges `data` into a max-heap in O(n).
pub fn heapify_max<T: Ord>(data: &mut [T]) {
    let len = data.len();
    for start in (0..len / 2).rev() {
        sift_down(data, start, len);
    }
}

/// The `k` largest values, largest first.
pub fn k_largest<T: Ord + Clone>(data: &[T], k: usize) -> Vec<T> {
    if k == 0 {
        return vec![];
    }

    // Min-heap of the best k seen so far; the root is the weakest survivor.
    let mut best: BinaryHeap<Reverse<T>> = BinaryHeap::with_capacity(k + 1);
    for value in data {
        best.push(Reverse(value.clone()));
        if best.len() > k {
            best.pop();
        }
    }

    let mut result: Vec<T> = best.into_iter().map(|Reverse(v)| v).collect();
    result.sort_by(|a, b| b.cmp(a));
    result
}

/// The `k`-th smallest value (1-based), or `None` when `k` is out of range.
pub fn kth_smallest<T: Ord + Clone>(data: &[T], k: usize) -> Option<T> {
    if k == 0 || k > data.len() {
        return None;
    }

    let mut worst: BinaryHeap<T> = BinaryHeap::with_capacity(k + 1);
    for value in data {
        worst.push(value.clone());
        if worst.len() > k {
            worst.pop();
        }
    }
    worst.peek().cloned()
}

/// Merges already sorted lists into one sorted list.
///
/// Ties are taken from the earlier list first.
pub fn merge_k_sorted<T: Ord + Clone>(lists: &[Vec<T>]) -> Vec<T> {
    let total = lists.iter().map(Vec::len).sum();
    let mut merged = Vec::with_capacity(total);

    // (value, list, position), reversed for min-heap order.
    let mut frontier: BinaryHeap<Reverse<(T, usize, usize)>> = lists
        .iter()
        .enumerate()
        .filter_map(|(list, items)| items.first().map(|v| Reverse((v.clone(), list, 0))))
        .collect();

    while let Some(Reverse((value, list, pos))) = frontier.pop() {
        merged.push(value);
        if let Some(next) = lists[list].get(pos + 1) {
            frontier.push(Reverse((next.clone(), list, pos + 1)));
        }
    }
    merged
}

/// Median after each element of `stream`, using a max-heap of the lower half
/// and a min-heap of the upper half.
///
/// Even-sized prefixes report the mean of the two middle values.
pub fn running_median(stream: &[i64]) -> Vec<f64> {
    let mut lower: BinaryHeap<i64> = BinaryHeap::new();
    let mut upper: BinaryHeap<Reverse<i64>> = BinaryHeap::new();
    let mut medians = Vec::with_capacity(stream.len());

    for &value in stream {
        match lower.peek() {
            Some(&top) if value > top => upper.push(Reverse(value)),
            _ => lower.push(value),
        }

        // Keep lower.len() == upper.len() or upper.len() + 1.
        if lower.len() > upper.len() + 1 {
            if let Some(moved) = lower.pop() {
                upper.push(Reverse(moved));
            }
        } else if upper.len() > lower.len() {
            if let Some(Reverse(moved)) = upper.pop() {
                lower.push(moved);
            }
        }

        let Some(&lo) = lower.peek() else {
            continue;
        };
        let median = match upper.peek() {
            Some(&Reverse(hi)) if lower.len() == upper.len() => (lo as f64 + hi as f64) / 2.0,
            _ => lo as f64,
        };
        medians.push(median);
    }
    medians
}

#[instrument(level = "trace", skip_all)]
pub fn demonstrate<W: Write>(out: &mut W) -> io::Result<()> {
    let sample = vec![5, 3, 8, 1, 9, 2, 7];
    writeln!(out, "input:            {sample:?}")?;

    let mut heap = MinHeap::from_vec(sample.clone());
    writeln!(out, "min-heap peek:    {:?}", heap.peek())?;
    heap.push(0);
    writeln!(out, "after push(0):    {:?}", heap.peek())?;
    writeln!(out, "pop:              {:?}", heap.pop())?;
    writeln!(out, "drained:          {:?}", heap.into_sorted_vec())?;

    let mut max_heap = sample.clone();
    heapify_max(&mut max_heap);
    writeln!(out, "max-heap layout:  {max_heap:?}")?;

    writeln!(out, "3 largest:        {:?}", k_largest(&sample, 3))?;
    writeln!(out, "2nd smallest:     {:?}", kth_smallest(&sample, 2))?;

    let lists = vec![vec![1, 4, 7], vec![2, 5, 8], vec![0, 3, 6, 9]];
    writeln!(out, "merge {lists:?}: {:?}", merge_k_sorted(&lists))?;

    let stream = [5, 15, 1, 3];
    writeln!(
        out,
        "running median of {stream:?}: {:?}",
        running_median(&stream)
    )?;
    Ok(())
}
