//! Set algebra and set-backed membership tricks.
//!
//! Results of the algebra operations come back as sorted vectors so they
//! print and compare deterministically.

use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;
use std::io::{self, Write};
use tracing::instrument;

pub fn union<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let left: BTreeSet<&T> = a.iter().collect();
    let right: BTreeSet<&T> = b.iter().collect();
    left.union(&right).map(|&v| v.clone()).collect()
}

pub fn intersection<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let left: BTreeSet<&T> = a.iter().collect();
    let right: BTreeSet<&T> = b.iter().collect();
    left.intersection(&right).map(|&v| v.clone()).collect()
}

/// Elements of `a` not in `b`.
pub fn difference<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let left: BTreeSet<&T> = a.iter().collect();
    let right: BTreeSet<&T> = b.iter().collect();
    left.difference(&right).map(|&v| v.clone()).collect()
}

/// Elements in exactly one of `a` and `b`.
pub fn symmetric_difference<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let left: BTreeSet<&T> = a.iter().collect();
    let right: BTreeSet<&T> = b.iter().collect();
    left.symmetric_difference(&right)
        .map(|&v| v.clone())
        .collect()
}

/// `true` when every element of `a` also occurs in `b`.
pub fn is_subset<T: Eq + Hash>(a: &[T], b: &[T]) -> bool {
    let container: HashSet<&T> = b.iter().collect();
    a.iter().all(|v| container.contains(v))
}

pub fn has_duplicates<T: Eq + Hash>(data: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(data.len());
    !data.iter().all(|v| seen.insert(v))
}

/// Distinct values in ascending order.
pub fn unique_sorted<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    data.iter().collect::<BTreeSet<_>>().into_iter().cloned().collect()
}

/// Length of the longest run of consecutive integers present, in O(n).
///
/// Only values with no predecessor in the set start a count, so every
/// value is visited at most twice.
pub fn longest_consecutive_run(data: &[i64]) -> usize {
    let values: HashSet<i64> = data.iter().copied().collect();
    let mut best = 0;
    for &start in &values {
        if start != i64::MIN && values.contains(&(start - 1)) {
            continue;
        }
        let mut length = 1;
        let mut current = start;
        while let Some(next) = current.checked_add(1) {
            if !values.contains(&next) {
                break;
            }
            current = next;
            length += 1;
        }
        best = best.max(length);
    }
    best
}

#[instrument(level = "trace", skip_all)]
pub fn demonstrate<W: Write>(out: &mut W) -> io::Result<()> {
    let a = [1, 2, 3, 4, 5];
    let b = [4, 5, 6, 7];
    writeln!(out, "a = {a:?}, b = {b:?}")?;
    writeln!(out, "union:                {:?}", union(&a, &b))?;
    writeln!(out, "intersection:         {:?}", intersection(&a, &b))?;
    writeln!(out, "a - b:                {:?}", difference(&a, &b))?;
    writeln!(
        out,
        "symmetric difference: {:?}",
        symmetric_difference(&a, &b)
    )?;
    writeln!(out, "[4, 5] subset of a:   {}", is_subset(&[4, 5], &a))?;
    writeln!(out, "[3, 1, 3] has dups:   {}", has_duplicates(&[3, 1, 3]))?;
    writeln!(
        out,
        "unique sorted:        {:?}",
        unique_sorted(&[3, 1, 3, 2, 1])
    )?;

    let scattered = [100, 4, 200, 1, 3, 2];
    writeln!(
        out,
        "longest consecutive run in {scattered:?}: {}",
        longest_consecutive_run(&scattered)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algebra() {
        let a = [3, 1, 2, 2];
        let b = [2, 4, 3];
        assert_eq!(union(&a, &b), vec![1, 2, 3, 4]);
        assert_eq!(intersection(&a, &b), vec![2, 3]);
        assert_eq!(difference(&a, &b), vec![1]);
        assert_eq!(symmetric_difference(&a, &b), vec![1, 4]);
    }

    #[test]
    fn test_membership() {
        assert!(is_subset(&[1, 2], &[2, 1, 0]));
        assert!(is_subset::<i32>(&[], &[]));
        assert!(!is_subset(&[5], &[1]));
        assert!(has_duplicates(&["a", "b", "a"]));
        assert!(!has_duplicates(&[1, 2, 3]));
        assert_eq!(unique_sorted(&[3, 1, 3, 2, 1]), vec![1, 2, 3]);
    }

    #[test]
    fn test_longest_run() {
        assert_eq!(longest_consecutive_run(&[100, 4, 200, 1, 3, 2]), 4);
        assert_eq!(longest_consecutive_run(&[]), 0);
        assert_eq!(longest_consecutive_run(&[7, 7, 7]), 1);
        assert_eq!(
            longest_consecutive_run(&[i64::MAX, i64::MAX - 1, i64::MIN]),
            2
        );
    }
}
