//! Fixed-size sequence and matrix transformations.
//!
//! Reshaping is the only operation here that can reject its input: the
//! requested dimensions must cover exactly the elements given. [`reshape`]
//! reports a mismatch as `None`, [`try_reshape`] as an [`AlgoError`].

use crate::error::{AlgoError, Result};
use std::io::{self, Write};
use tracing::{debug, instrument};

pub fn map<T, U, F: FnMut(&T) -> U>(data: &[T], f: F) -> Vec<U> {
    data.iter().map(f).collect()
}

pub fn filter<T: Clone, F: FnMut(&T) -> bool>(data: &[T], mut pred: F) -> Vec<T> {
    data.iter().filter(|v| pred(v)).cloned().collect()
}

/// Row-major concatenation of the rows of a matrix.
pub fn flatten<T: Clone>(matrix: &[Vec<T>]) -> Vec<T> {
    matrix.iter().flatten().cloned().collect()
}

pub fn concat<T: Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let mut joined = Vec::with_capacity(first.len() + second.len());
    joined.extend_from_slice(first);
    joined.extend_from_slice(second);
    joined
}

/// Splits into `data[..index]` and `data[index..]`, clamping `index` to the length.
pub fn split_at_index<T: Clone>(data: &[T], index: usize) -> (Vec<T>, Vec<T>) {
    let (head, tail) = data.split_at(index.min(data.len()));
    (head.to_vec(), tail.to_vec())
}

/// Consecutive chunks of `size` elements; the last may be shorter. `size == 0` yields nothing.
pub fn chunk<T: Clone>(data: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return vec![];
    }
    data.chunks(size).map(<[T]>::to_vec).collect()
}

/// Reshapes `data` into `rows` rows of `cols` elements, row-major.
///
/// ```
/// use classic_algos::arrays::{flatten, reshape};
///
/// let data = [1, 2, 3, 4, 5, 6];
/// let matrix = reshape(&data, 2, 3).unwrap();
/// assert_eq!(matrix, vec![vec![1, 2, 3], vec![4, 5, 6]]);
/// assert_eq!(flatten(&matrix), data);
/// assert!(reshape(&data, 4, 2).is_none());
/// ```
pub fn reshape<T: Clone>(data: &[T], rows: usize, cols: usize) -> Option<Vec<Vec<T>>> {
    try_reshape(data, rows, cols).ok()
}

pub fn try_reshape<T: Clone>(data: &[T], rows: usize, cols: usize) -> Result<Vec<Vec<T>>> {
    if rows.checked_mul(cols) != Some(data.len()) {
        debug!(rows, cols, len = data.len(), "reshape rejected");
        return Err(AlgoError::ShapeMismatch {
            rows,
            cols,
            len: data.len(),
        });
    }

    if cols == 0 {
        return Ok(vec![Vec::new(); rows]);
    }
    Ok(data.chunks(cols).map(<[T]>::to_vec).collect())
}

/// Transposes a rectangular matrix; `None` if the rows differ in length.
pub fn transpose<T: Clone>(matrix: &[Vec<T>]) -> Option<Vec<Vec<T>>> {
    let Some(width) = matrix.first().map(Vec::len) else {
        return Some(vec![]);
    };
    if matrix.iter().any(|row| row.len() != width) {
        return None;
    }

    Some(
        (0..width)
            .map(|col| matrix.iter().map(|row| row[col].clone()).collect())
            .collect(),
    )
}

/// Rotates left by `k` positions in place using three reversals.
pub fn rotate_left<T>(data: &mut [T], k: usize) {
    if data.is_empty() {
        return;
    }
    let k = k % data.len();
    data[..k].reverse();
    data[k..].reverse();
    data.reverse();
}

/// Rotates right by `k` positions in place.
pub fn rotate_right<T>(data: &mut [T], k: usize) {
    if data.is_empty() {
        return;
    }
    let k = k % data.len();
    rotate_left(data, data.len() - k);
}

/// `sums[i]` is the total of `data[..i]`; the result has one more element than the input.
/// `None` if a running total overflows `i64`.
pub fn prefix_sums(data: &[i64]) -> Option<Vec<i64>> {
    let mut sums = Vec::with_capacity(data.len() + 1);
    sums.push(0);
    let mut total = 0i64;
    for &v in data {
        total = total.checked_add(v)?;
        sums.push(total);
    }
    Some(sums)
}

/// Largest sum of a non-empty contiguous run (Kadane). Saturates at `i64::MAX`.
pub fn max_subarray_sum(data: &[i64]) -> Option<i64> {
    let (&first, rest) = data.split_first()?;
    let (mut best, mut current) = (first, first);
    for &v in rest {
        current = v.max(current.saturating_add(v));
        best = best.max(current);
    }
    Some(best)
}

/// Indices `(i, j)`, `i < j`, of two elements of sorted `data` summing to `target`.
pub fn two_sum_sorted(data: &[i64], target: i64) -> Option<(usize, usize)> {
    if data.len() < 2 {
        return None;
    }
    let target = i128::from(target);
    let (mut i, mut j) = (0, data.len() - 1);
    while i < j {
        let sum = i128::from(data[i]) + i128::from(data[j]);
        if sum == target {
            return Some((i, j));
        } else if sum < target {
            i += 1;
        } else {
            j -= 1;
        }
    }
    None
}

/// Moves zeros to the end, keeping the order of the other elements.
pub fn move_zeros(data: &mut [i64]) {
    let mut write = 0;
    for read in 0..data.len() {
        if data[read] != 0 {
            data.swap(write, read);
            write += 1;
        }
    }
}

/// Three-way partition around `pivot`: smaller, equal, larger.
///
/// Returns the bounds `(lt, gt)` of the equal block `data[lt..gt]`.
pub fn dutch_flag_partition<T: Ord>(data: &mut [T], pivot: &T) -> (usize, usize) {
    let (mut lt, mut i, mut gt) = (0, 0, data.len());
    while i < gt {
        if data[i] < *pivot {
            data.swap(lt, i);
            lt += 1;
            i += 1;
        } else if data[i] > *pivot {
            gt -= 1;
            data.swap(i, gt);
        } else {
            i += 1;
        }
    }
    (lt, gt)
}

#[instrument(level = "trace", skip_all)]
pub fn demonstrate<W: Write>(out: &mut W) -> io::Result<()> {
    let data = [1, 2, 3, 4, 5, 6];
    writeln!(out, "data:            {data:?}")?;
    writeln!(out, "map x*x:         {:?}", map(&data, |x| x * x))?;
    writeln!(out, "filter even:     {:?}", filter(&data, |x| x % 2 == 0))?;
    writeln!(out, "concat [7, 8]:   {:?}", concat(&data, &[7, 8]))?;
    writeln!(out, "split at 2:      {:?}", split_at_index(&data, 2))?;
    writeln!(out, "chunks of 4:     {:?}", chunk(&data, 4))?;

    let matrix = reshape(&data, 2, 3);
    writeln!(out, "reshape 2x3:     {matrix:?}")?;
    writeln!(out, "reshape 4x2:     {:?}", reshape(&data, 4, 2))?;
    if let Some(matrix) = &matrix {
        writeln!(out, "transpose:       {:?}", transpose(matrix))?;
        writeln!(out, "flatten:         {:?}", flatten(matrix))?;
    }

    let mut rotated = data;
    rotate_left(&mut rotated, 2);
    writeln!(out, "rotate left 2:   {rotated:?}")?;
    rotate_right(&mut rotated, 2);
    writeln!(out, "rotate right 2:  {rotated:?}")?;

    let signal = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
    writeln!(out, "prefix sums of {signal:?}: {:?}", prefix_sums(&signal))?;
    writeln!(out, "max subarray sum: {:?}", max_subarray_sum(&signal))?;
    writeln!(
        out,
        "two sum = 9 in [1, 2, 4, 5, 7]: {:?}",
        two_sum_sorted(&[1, 2, 4, 5, 7], 9)
    )?;

    let mut zeros = [0, 1, 0, 3, 12];
    move_zeros(&mut zeros);
    writeln!(out, "move zeros:      {zeros:?}")?;

    let mut flags = [2, 0, 2, 1, 1, 0];
    let bounds = dutch_flag_partition(&mut flags, &1);
    writeln!(out, "dutch flag:      {flags:?} equal block {bounds:?}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reshape_mismatch() {
        let data = [1, 2, 3, 4, 5, 6];
        assert!(reshape(&data, 4, 2).is_none());
        assert!(reshape(&data, usize::MAX, 2).is_none());
        assert_eq!(
            try_reshape(&data, 5, 1),
            Err(AlgoError::ShapeMismatch {
                rows: 5,
                cols: 1,
                len: 6
            })
        );
    }

    #[test]
    fn test_reshape_round_trip() {
        let data: Vec<i32> = (0..12).collect();
        for (rows, cols) in [(1, 12), (2, 6), (3, 4), (4, 3), (6, 2), (12, 1)] {
            let matrix = reshape(&data, rows, cols).unwrap();
            assert_eq!(matrix.len(), rows);
            assert!(matrix.iter().all(|row| row.len() == cols));
            assert_eq!(flatten(&matrix), data);
        }
    }

    #[test]
    fn test_reshape_empty() {
        let empty: [u8; 0] = [];
        assert_eq!(reshape(&empty, 3, 0), Some(vec![vec![], vec![], vec![]]));
        assert_eq!(reshape(&empty, 0, 5), Some(vec![]));
    }

    #[test]
    fn test_transpose() {
        let matrix = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert_eq!(
            transpose(&matrix),
            Some(vec![vec![1, 4], vec![2, 5], vec![3, 6]])
        );
        assert_eq!(transpose(&[vec![1], vec![2, 3]]), None);
        assert_eq!(transpose::<i32>(&[]), Some(vec![]));
    }

    #[test]
    fn test_rotations() {
        let mut data = [1, 2, 3, 4, 5];
        rotate_left(&mut data, 7);
        assert_eq!(data, [3, 4, 5, 1, 2]);
        rotate_right(&mut data, 2);
        assert_eq!(data, [1, 2, 3, 4, 5]);
        let mut empty: [i32; 0] = [];
        rotate_left(&mut empty, 3);
    }

    #[test]
    fn test_split_and_chunk() {
        assert_eq!(split_at_index(&[1, 2, 3], 10), (vec![1, 2, 3], vec![]));
        assert_eq!(chunk(&[1, 2, 3], 2), vec![vec![1, 2], vec![3]]);
        assert!(chunk(&[1, 2, 3], 0).is_empty());
    }

    #[test]
    fn test_sums() {
        assert_eq!(prefix_sums(&[1, 2, 3]), Some(vec![0, 1, 3, 6]));
        assert_eq!(prefix_sums(&[]), Some(vec![0]));
        assert_eq!(prefix_sums(&[i64::MAX, 1]), None);
        assert_eq!(
            prefix_sums(&[i64::MAX, i64::MIN]),
            Some(vec![0, i64::MAX, -1])
        );
        assert_eq!(max_subarray_sum(&[i64::MAX, i64::MAX]), Some(i64::MAX));
        assert_eq!(max_subarray_sum(&[i64::MIN, i64::MIN]), Some(i64::MIN));
        assert_eq!(max_subarray_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), Some(6));
        assert_eq!(max_subarray_sum(&[-3, -1, -2]), Some(-1));
        assert_eq!(max_subarray_sum(&[]), None);
        assert_eq!(two_sum_sorted(&[1, 2, 4, 5, 7], 9), Some((1, 4)));
        assert_eq!(two_sum_sorted(&[1, 2], 9), None);
        assert_eq!(two_sum_sorted(&[i64::MIN, 0, i64::MAX], -1), Some((0, 2)));
        assert_eq!(two_sum_sorted(&[1, i64::MAX - 1, i64::MAX], 1), None);
    }

    #[test]
    fn test_partitions() {
        let mut zeros = [0, 1, 0, 3, 12];
        move_zeros(&mut zeros);
        assert_eq!(zeros, [1, 3, 12, 0, 0]);

        let mut flags = [2, 0, 2, 1, 1, 0];
        assert_eq!(dutch_flag_partition(&mut flags, &1), (2, 4));
        assert_eq!(flags, [0, 0, 1, 1, 2, 2]);
    }
}
