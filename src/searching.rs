//! Searching over sequences.
//!
//! Every function that can miss returns `Option<usize>`; `None` is the
//! not-found value. The binary searches keep the closed interval
//! `[low, high]` and loop while `low <= high`, computing the midpoint as
//! `low + (high - low) / 2`. Bounds are `isize` so that `high = mid - 1`
//! can step below zero on the left edge.
//!
//! Variants differ only in what they do on a match:
//! - [`binary_search`] returns the first match it lands on.
//! - [`first_occurrence`] records the match and keeps searching left.
//! - [`last_occurrence`] records the match and keeps searching right.
//! - [`ceiling_index`] / [`floor_index`] fall back to the nearest element
//!   above / below a missing target.

use std::cmp::Ordering;
use std::io::{self, Write};
use tracing::instrument;

/// Index of the first element equal to `target`, scanning left to right.
pub fn linear_search<T: PartialEq>(data: &[T], target: &T) -> Option<usize> {
    data.iter().position(|v| v == target)
}

/// Index of some element equal to `target` in sorted `data`.
///
/// ```
/// use classic_algos::searching::binary_search;
///
/// assert_eq!(binary_search(&[1, 3, 5, 7, 9, 11, 13, 15], &7), Some(3));
/// assert_eq!(binary_search(&[1, 3, 5], &4), None);
/// ```
pub fn binary_search<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    let (mut low, mut high) = (0isize, data.len() as isize - 1);
    while low <= high {
        let mid = low + (high - low) / 2;
        match data[mid as usize].cmp(target) {
            Ordering::Equal => return Some(mid as usize),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid - 1,
        }
    }
    None
}

/// Index of the first element equal to `target` in sorted `data`.
pub fn first_occurrence<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    let (mut low, mut high) = (0isize, data.len() as isize - 1);
    let mut found = None;
    while low <= high {
        let mid = low + (high - low) / 2;
        match data[mid as usize].cmp(target) {
            Ordering::Equal => {
                found = Some(mid as usize);
                high = mid - 1;
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid - 1,
        }
    }
    found
}

/// Index of the last element equal to `target` in sorted `data`.
pub fn last_occurrence<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    let (mut low, mut high) = (0isize, data.len() as isize - 1);
    let mut found = None;
    while low <= high {
        let mid = low + (high - low) / 2;
        match data[mid as usize].cmp(target) {
            Ordering::Equal => {
                found = Some(mid as usize);
                low = mid + 1;
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid - 1,
        }
    }
    found
}

/// Number of elements equal to `target` in sorted `data`.
pub fn count_occurrences<T: Ord>(data: &[T], target: &T) -> usize {
    match (first_occurrence(data, target), last_occurrence(data, target)) {
        (Some(first), Some(last)) => last - first + 1,
        _ => 0,
    }
}

/// Smallest index with `data[i] >= target`, or `None` if every element is smaller.
pub fn ceiling_index<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    let (mut low, mut high) = (0isize, data.len() as isize - 1);
    let mut found = None;
    while low <= high {
        let mid = low + (high - low) / 2;
        match data[mid as usize].cmp(target) {
            Ordering::Equal => return Some(mid as usize),
            Ordering::Greater => {
                found = Some(mid as usize);
                high = mid - 1;
            }
            Ordering::Less => low = mid + 1,
        }
    }
    found
}

/// Largest index with `data[i] <= target`, or `None` if every element is larger.
pub fn floor_index<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    let (mut low, mut high) = (0isize, data.len() as isize - 1);
    let mut found = None;
    while low <= high {
        let mid = low + (high - low) / 2;
        match data[mid as usize].cmp(target) {
            Ordering::Equal => return Some(mid as usize),
            Ordering::Less => {
                found = Some(mid as usize);
                low = mid + 1;
            }
            Ordering::Greater => high = mid - 1,
        }
    }
    found
}

/// First index in `[low, high)` where the monotonic predicate holds, or `high`.
///
/// `pred` must be `false` on a prefix of the range and `true` on the rest.
pub fn partition_point_by<F>(mut low: usize, mut high: usize, mut pred: F) -> usize
where
    F: FnMut(usize) -> bool,
{
    while low < high {
        let mid = low + (high - low) / 2;
        if pred(mid) {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    low
}

/// Where `target` would be inserted to keep `data` sorted, before any equal elements.
pub fn insertion_point<T: Ord>(data: &[T], target: &T) -> usize {
    partition_point_by(0, data.len(), |i| data[i] >= *target)
}

/// Index one past the last element `<= target`.
pub fn upper_bound<T: Ord>(data: &[T], target: &T) -> usize {
    partition_point_by(0, data.len(), |i| data[i] > *target)
}

/// Searches an ascending array that was rotated at an unknown pivot.
///
/// Elements must be distinct.
pub fn search_rotated<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    let (mut low, mut high) = (0isize, data.len() as isize - 1);
    while low <= high {
        let mid = low + (high - low) / 2;
        let (lo, mi, hi) = (&data[low as usize], &data[mid as usize], &data[high as usize]);
        if mi == target {
            return Some(mid as usize);
        }
        if lo <= mi {
            // Left half is in order.
            if lo <= target && target < mi {
                high = mid - 1;
            } else {
                low = mid + 1;
            }
        } else if mi < target && target <= hi {
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }
    None
}

/// Index of some element not smaller than its neighbours.
pub fn find_peak<T: Ord>(data: &[T]) -> Option<usize> {
    if data.is_empty() {
        return None;
    }
    let (mut low, mut high) = (0, data.len() - 1);
    while low < high {
        let mid = low + (high - low) / 2;
        if data[mid] < data[mid + 1] {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    Some(low)
}

/// Floor of the square root, found by binary search on the answer.
pub fn integer_sqrt(n: u64) -> u64 {
    let (mut low, mut high) = (0u64, n.min(u32::MAX as u64));
    let mut answer = 0;
    while low <= high {
        let mid = low + (high - low) / 2;
        if mid * mid <= n {
            answer = mid;
            low = mid + 1;
        } else {
            // mid >= 1 here since 0 * 0 <= n.
            high = mid - 1;
        }
    }
    answer
}

/// Doubles a bound until it passes `target`, then binary searches that window.
pub fn exponential_search<T: Ord>(data: &[T], target: &T) -> Option<usize> {
    if data.is_empty() {
        return None;
    }
    let mut bound = 1;
    while bound < data.len() && data[bound] < *target {
        bound *= 2;
    }
    let start = bound / 2;
    let end = (bound + 1).min(data.len());
    binary_search(&data[start..end], target).map(|i| i + start)
}

#[instrument(level = "trace", skip_all)]
pub fn demonstrate<W: Write>(out: &mut W) -> io::Result<()> {
    let sorted = [1, 3, 5, 7, 9, 11, 13, 15];
    writeln!(out, "sorted:               {sorted:?}")?;
    writeln!(
        out,
        "linear search 9:      {:?}",
        linear_search(&sorted, &9)
    )?;
    writeln!(
        out,
        "binary search 7:      {:?}",
        binary_search(&sorted, &7)
    )?;
    writeln!(
        out,
        "binary search 8:      {:?}",
        binary_search(&sorted, &8)
    )?;
    writeln!(
        out,
        "exponential search 13: {:?}",
        exponential_search(&sorted, &13)
    )?;
    writeln!(
        out,
        "ceiling of 8:         {:?}",
        ceiling_index(&sorted, &8)
    )?;
    writeln!(out, "floor of 8:           {:?}", floor_index(&sorted, &8))?;
    writeln!(
        out,
        "insertion point of 8: {}",
        insertion_point(&sorted, &8)
    )?;

    let dups = [1, 2, 2, 2, 3, 4, 4, 5];
    writeln!(out, "with duplicates:      {dups:?}")?;
    writeln!(
        out,
        "first 2:              {:?}",
        first_occurrence(&dups, &2)
    )?;
    writeln!(
        out,
        "last 2:               {:?}",
        last_occurrence(&dups, &2)
    )?;
    writeln!(
        out,
        "count of 4:           {}",
        count_occurrences(&dups, &4)
    )?;
    writeln!(out, "upper bound of 2:     {}", upper_bound(&dups, &2))?;

    let rotated = [15, 18, 2, 3, 6, 12];
    writeln!(
        out,
        "rotated {rotated:?}, find 3: {:?}",
        search_rotated(&rotated, &3)
    )?;

    let hills = [1, 3, 20, 4, 1, 0];
    writeln!(out, "peak of {hills:?}: {:?}", find_peak(&hills))?;
    writeln!(out, "isqrt(99): {}", integer_sqrt(99))?;

    let first_big = partition_point_by(0, 100, |x| x * x > 50);
    writeln!(out, "first x with x*x > 50: {first_big}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SORTED: [i32; 8] = [1, 3, 5, 7, 9, 11, 13, 15];

    #[test]
    fn test_reference_scenario() {
        assert_eq!(binary_search(&SORTED, &7), Some(3));
    }

    #[test]
    fn test_not_found_at_edges() {
        assert_eq!(binary_search(&SORTED, &0), None);
        assert_eq!(binary_search(&SORTED, &16), None);
        assert_eq!(binary_search::<i32>(&[], &1), None);
        assert_eq!(linear_search(&SORTED, &4), None);
    }

    #[test]
    fn test_occurrences() {
        let dups = [1, 2, 2, 2, 3, 4, 4, 5];
        assert_eq!(first_occurrence(&dups, &2), Some(1));
        assert_eq!(last_occurrence(&dups, &2), Some(3));
        assert_eq!(count_occurrences(&dups, &4), 2);
        assert_eq!(count_occurrences(&dups, &9), 0);
        assert_eq!(first_occurrence(&dups, &0), None);
    }

    #[test]
    fn test_ceiling_and_floor() {
        assert_eq!(ceiling_index(&SORTED, &8), Some(4));
        assert_eq!(floor_index(&SORTED, &8), Some(3));
        assert_eq!(ceiling_index(&SORTED, &7), Some(3));
        assert_eq!(ceiling_index(&SORTED, &16), None);
        assert_eq!(floor_index(&SORTED, &0), None);
        assert_eq!(ceiling_index(&SORTED, &-5), Some(0));
    }

    #[test]
    fn test_bounds() {
        let dups = [1, 2, 2, 2, 3];
        assert_eq!(insertion_point(&dups, &2), 1);
        assert_eq!(upper_bound(&dups, &2), 4);
        assert_eq!(insertion_point(&dups, &9), 5);
        assert_eq!(insertion_point::<i32>(&[], &9), 0);
    }

    #[test]
    fn test_rotated() {
        let rotated = [15, 18, 2, 3, 6, 12];
        for (i, v) in rotated.iter().enumerate() {
            assert_eq!(search_rotated(&rotated, v), Some(i));
        }
        assert_eq!(search_rotated(&rotated, &5), None);
    }

    #[test]
    fn test_peak_and_sqrt() {
        assert_eq!(find_peak(&[1, 3, 20, 4, 1, 0]), Some(2));
        assert_eq!(find_peak(&[5, 4, 3]), Some(0));
        assert_eq!(find_peak::<i32>(&[]), None);
        assert_eq!(integer_sqrt(0), 0);
        assert_eq!(integer_sqrt(1), 1);
        assert_eq!(integer_sqrt(99), 9);
        assert_eq!(integer_sqrt(100), 10);
        assert_eq!(integer_sqrt(u64::MAX), u32::MAX as u64);
    }

    #[test]
    fn test_exponential() {
        for (i, v) in SORTED.iter().enumerate() {
            assert_eq!(exponential_search(&SORTED, v), Some(i));
        }
        assert_eq!(exponential_search(&SORTED, &4), None);
    }
}
