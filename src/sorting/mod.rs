//! Sorting algorithms.
//!
//! - Comparison sorts on `&mut [T]`: bubble, selection, insertion, shell,
//!   quick, heap, and a stable merge sort with caller-owned scratch storage.
//! - Non-comparison sorts: counting sort and LSD radix sort for `u32`, and an
//!   MSD radix sort for byte strings driven through the [`ByteKeys`] trait.
//!
//! Every sort leaves empty and single-element inputs untouched.

mod comparison;
mod keys;
mod merge;
mod radix;

pub use comparison::{bubble_sort, heap_sort, insertion_sort, quick_sort, selection_sort, shell_sort};
pub use keys::{ByteKeys, PREFIX_BYTES};
pub use merge::{count_inversions, merge_sort, merge_sort_by_key, merge_sort_with_buffer};
pub use radix::{counting_sort, radix_sort_bytes, radix_sort_lsd, sorted_indices};

use std::io::{self, Write};
use tracing::instrument;

/// Returns `true` if `data` is non-decreasing.
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[instrument(level = "trace", skip_all)]
pub fn demonstrate<W: Write>(out: &mut W) -> io::Result<()> {
    let sample = [64, 34, 25, 12, 22, 11, 90];
    writeln!(out, "input:          {sample:?}")?;

    let sorts: [(&str, fn(&mut [i32])); 7] = [
        ("bubble sort", bubble_sort),
        ("selection sort", selection_sort),
        ("insertion sort", insertion_sort),
        ("shell sort", shell_sort),
        ("quick sort", quick_sort),
        ("heap sort", heap_sort),
        ("merge sort", merge_sort),
    ];
    for (name, sort) in sorts {
        let mut data = sample;
        sort(&mut data);
        writeln!(out, "{name:<15} {data:?}")?;
    }

    let mut pairs = [(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd'), (1, 'e')];
    merge_sort_by_key(&mut pairs, |&(k, _)| k);
    writeln!(out, "stable by key:  {pairs:?}")?;

    writeln!(
        out,
        "inversions in {:?}: {}",
        [8, 4, 2, 1],
        count_inversions(&[8, 4, 2, 1])
    )?;

    let mut counts = [4u32, 2, 2, 8, 3, 3, 1];
    counting_sort(&mut counts);
    writeln!(out, "counting sort:  {counts:?}")?;

    let mut wide = [170u32, 45, 75, 90, 802, 24, 2, 66];
    radix_sort_lsd(&mut wide);
    writeln!(out, "LSD radix sort: {wide:?}")?;

    let mut words = ["banana", "apple", "cherry", "apricot", "date"];
    radix_sort_bytes(&mut words);
    writeln!(out, "MSD radix sort: {words:?}")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted::<i32>(&[]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }

    #[test]
    fn test_demonstrate_output() {
        let mut out = Vec::new();
        demonstrate(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(
            text.contains("merge sort      [11, 12, 22, 25, 34, 64, 90]")
        );
        assert!(text.contains("inversions in [8, 4, 2, 1]: 6"));
        assert!(
            text.contains(r#"["apple", "apricot", "banana", "cherry", "date"]"#)
        );
    }
}
