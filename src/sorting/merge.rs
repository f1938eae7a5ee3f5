//! Top-down merge sort and the merge-based inversion count.
//!
//! The merge step needs temporary storage. Every entry point either takes a
//! caller-owned scratch vector or allocates one for the duration of the call;
//! nothing is kept between calls.

use std::cmp::Ordering;

/// Stable merge sort.
///
/// ```
/// use classic_algos::sorting::merge_sort;
///
/// let mut data = vec![64, 34, 25, 12, 22, 11, 90];
/// merge_sort(&mut data);
/// assert_eq!(data, vec![11, 12, 22, 25, 34, 64, 90]);
/// ```
pub fn merge_sort<T: Ord + Clone>(data: &mut [T]) {
    let mut scratch = Vec::with_capacity(data.len());
    merge_sort_with_buffer(data, &mut scratch);
}

/// Stable merge sort using `scratch` for the merge step.
///
/// `scratch` is cleared on entry; its capacity is reused across calls.
pub fn merge_sort_with_buffer<T: Ord + Clone>(data: &mut [T], scratch: &mut Vec<T>) {
    sort_range(data, scratch, &mut |a: &T, b: &T| a.cmp(b));
}

/// Stable merge sort ordering elements by `key`.
pub fn merge_sort_by_key<T, K, F>(data: &mut [T], mut key: F)
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut scratch = Vec::with_capacity(data.len());
    sort_range(data, &mut scratch, &mut |a: &T, b: &T| key(a).cmp(&key(b)));
}

fn sort_range<T, F>(data: &mut [T], scratch: &mut Vec<T>, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if data.len() <= 1 {
        return;
    }

    let mid = data.len() / 2;
    sort_range(&mut data[..mid], scratch, compare);
    sort_range(&mut data[mid..], scratch, compare);

    // Halves already in order: nothing to merge.
    if compare(&data[mid - 1], &data[mid]) != Ordering::Greater {
        return;
    }

    merge_halves(data, mid, scratch, compare);
}

/// Merges the sorted runs `data[..mid]` and `data[mid..]`.
///
/// On ties the left run wins, which is what makes the sort stable.
fn merge_halves<T, F>(data: &mut [T], mid: usize, scratch: &mut Vec<T>, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    scratch.clear();
    let (left, right) = data.split_at(mid);
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if compare(&right[j], &left[i]) == Ordering::Less {
            scratch.push(right[j].clone());
            j += 1;
        } else {
            scratch.push(left[i].clone());
            i += 1;
        }
    }
    scratch.extend_from_slice(&left[i..]);
    scratch.extend_from_slice(&right[j..]);

    data.clone_from_slice(scratch);
}

/// Counts pairs `(i, j)` with `i < j` and `data[i] > data[j]`.
///
/// Runs a merge sort on a copy; every time an element is taken from the
/// right run, it jumps over all elements still waiting in the left run.
pub fn count_inversions<T: Ord + Clone>(data: &[T]) -> u64 {
    let mut work = data.to_vec();
    let mut scratch = Vec::with_capacity(work.len());
    count_range(&mut work, &mut scratch)
}

fn count_range<T: Ord + Clone>(data: &mut [T], scratch: &mut Vec<T>) -> u64 {
    if data.len() <= 1 {
        return 0;
    }

    let mid = data.len() / 2;
    let mut inversions = count_range(&mut data[..mid], scratch);
    inversions += count_range(&mut data[mid..], scratch);

    scratch.clear();
    let (left, right) = data.split_at(mid);
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if right[j] < left[i] {
            inversions += (left.len() - i) as u64;
            scratch.push(right[j].clone());
            j += 1;
        } else {
            scratch.push(left[i].clone());
            i += 1;
        }
    }
    scratch.extend_from_slice(&left[i..]);
    scratch.extend_from_slice(&right[j..]);
    data.clone_from_slice(scratch);

    inversions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario() {
        let mut data = vec![64, 34, 25, 12, 22, 11, 90];
        merge_sort(&mut data);
        assert_eq!(data, vec![11, 12, 22, 25, 34, 64, 90]);
    }

    #[test]
    fn test_base_cases() {
        let mut empty: Vec<i32> = vec![];
        merge_sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![7];
        merge_sort(&mut single);
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn test_scratch_is_reused() {
        let mut scratch = Vec::new();
        let mut a = vec![3, 1, 2];
        merge_sort_with_buffer(&mut a, &mut scratch);
        let mut b = vec![9, 8, 7, 6, 5];
        merge_sort_with_buffer(&mut b, &mut scratch);
        assert_eq!(a, vec![1, 2, 3]);
        assert_eq!(b, vec![5, 6, 7, 8, 9]);
        assert!(scratch.capacity() >= 5);
    }

    #[test]
    fn test_stability_by_key() {
        let mut data = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
        merge_sort_by_key(&mut data, |&(k, _)| k);
        assert_eq!(data, vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_inversions() {
        assert_eq!(count_inversions(&[1, 2, 3]), 0);
        assert_eq!(count_inversions(&[3, 2, 1]), 3);
        assert_eq!(count_inversions(&[8, 4, 2, 1]), 6);
        assert_eq!(count_inversions(&[1, 20, 6, 4, 5]), 5);
        assert_eq!(count_inversions::<i32>(&[]), 0);
    }
}
