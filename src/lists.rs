//! Growable list operations on `Vec<T>`.

use std::collections::HashSet;
use std::hash::Hash;
use std::io::{self, Write};
use tracing::instrument;

/// Inserts `value` before position `index`. Returns `false`, leaving the list
/// unchanged, when `index > list.len()`.
pub fn insert_at<T>(list: &mut Vec<T>, index: usize, value: T) -> bool {
    if index > list.len() {
        return false;
    }
    list.insert(index, value);
    true
}

pub fn remove_at<T>(list: &mut Vec<T>, index: usize) -> Option<T> {
    (index < list.len()).then(|| list.remove(index))
}

/// Removes adjacent repeats from a sorted list in place (two-pointer compaction).
pub fn dedup_sorted<T: PartialEq>(list: &mut Vec<T>) {
    if list.len() < 2 {
        return;
    }
    let mut write = 1;
    for read in 1..list.len() {
        if list[read] != list[write - 1] {
            list.swap(write, read);
            write += 1;
        }
    }
    list.truncate(write);
}

/// Drops repeated values from an unsorted list, keeping each first occurrence.
pub fn remove_duplicates<T: Eq + Hash + Clone>(list: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(list.len());
    list.iter()
        .filter(|v| seen.insert(*v))
        .cloned()
        .collect()
}

/// Merges two sorted lists. Equal elements from `a` come before those from `b`.
pub fn merge_sorted<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if b[j] < a[i] {
            merged.push(b[j].clone());
            j += 1;
        } else {
            merged.push(a[i].clone());
            i += 1;
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);
    merged
}

/// Elements present in both sorted lists, with multiplicity.
pub fn intersect_sorted<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut common = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                common.push(a[i].clone());
                i += 1;
                j += 1;
            }
        }
    }
    common
}

/// Reverses with two converging indices.
pub fn reverse_in_place<T>(list: &mut [T]) {
    if list.is_empty() {
        return;
    }
    let (mut i, mut j) = (0, list.len() - 1);
    while i < j {
        list.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Positions of all elements matching `pred`.
pub fn find_all<T, F: FnMut(&T) -> bool>(list: &[T], mut pred: F) -> Vec<usize> {
    list.iter()
        .enumerate()
        .filter(|(_, v)| pred(v))
        .map(|(i, _)| i)
        .collect()
}

#[instrument(level = "trace", skip_all)]
pub fn demonstrate<W: Write>(out: &mut W) -> io::Result<()> {
    let mut list = vec![10, 20, 30];
    writeln!(out, "list:                 {list:?}")?;
    insert_at(&mut list, 1, 15);
    writeln!(out, "insert 15 at 1:       {list:?}")?;
    writeln!(out, "insert at 9 accepted: {}", insert_at(&mut list, 9, 99))?;
    let removed = remove_at(&mut list, 2);
    writeln!(out, "remove at 2:          {removed:?} -> {list:?}")?;

    let mut sorted = vec![1, 1, 2, 3, 3, 3, 4];
    dedup_sorted(&mut sorted);
    writeln!(out, "dedup sorted:         {sorted:?}")?;
    writeln!(
        out,
        "remove duplicates:    {:?}",
        remove_duplicates(&[3, 1, 3, 2, 1])
    )?;
    writeln!(
        out,
        "merge sorted:         {:?}",
        merge_sorted(&[1, 4, 6], &[2, 3, 7])
    )?;
    writeln!(
        out,
        "intersect sorted:     {:?}",
        intersect_sorted(&[1, 2, 2, 3], &[2, 2, 4])
    )?;

    let mut letters = vec!['a', 'b', 'c', 'd'];
    reverse_in_place(&mut letters);
    writeln!(out, "reversed:             {letters:?}")?;
    writeln!(
        out,
        "indices of odd:       {:?}",
        find_all(&[1, 2, 3, 5, 8], |v| v % 2 == 1)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove() {
        let mut list = vec![1, 3];
        assert!(insert_at(&mut list, 1, 2));
        assert!(insert_at(&mut list, 3, 4));
        assert!(!insert_at(&mut list, 9, 9));
        assert_eq!(list, vec![1, 2, 3, 4]);
        assert_eq!(remove_at(&mut list, 0), Some(1));
        assert_eq!(remove_at(&mut list, 3), None);
        assert_eq!(list, vec![2, 3, 4]);
    }

    #[test]
    fn test_dedup() {
        let mut list = vec![1, 1, 2, 3, 3, 3, 4];
        dedup_sorted(&mut list);
        assert_eq!(list, vec![1, 2, 3, 4]);
        assert_eq!(
            remove_duplicates(&["b", "a", "b", "c", "a"]),
            vec!["b", "a", "c"]
        );
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Tagged(u8, char);

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn test_merge_is_stable() {
        let a = [Tagged(1, 'a'), Tagged(2, 'a')];
        let b = [Tagged(1, 'b'), Tagged(2, 'b')];
        let tags: Vec<char> = merge_sorted(&a, &b).iter().map(|t| t.1).collect();
        assert_eq!(tags, vec!['a', 'b', 'a', 'b']);
        assert_eq!(merge_sorted::<i32>(&[], &[1]), vec![1]);
    }

    #[test]
    fn test_intersect_and_reverse() {
        assert_eq!(intersect_sorted(&[1, 2, 2, 3], &[2, 2, 4]), vec![2, 2]);
        let mut odd = [1, 2, 3];
        reverse_in_place(&mut odd);
        assert_eq!(odd, [3, 2, 1]);
        let mut empty: [u8; 0] = [];
        reverse_in_place(&mut empty);
        assert_eq!(find_all(&[1, 2, 3, 5, 8], |v| v % 2 == 1), vec![0, 2, 3]);
    }
}
