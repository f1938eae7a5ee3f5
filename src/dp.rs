//! Dynamic programming: counting, optimisation and sequence alignment.
//!
//! Counting problems grow quickly, so they return `Option<u128>` and give
//! `None` once the count no longer fits.

use std::collections::HashMap;
use std::io::{self, Write};
use tracing::{instrument, trace};

/// `F(n)` with `F(0) = 0, F(1) = 1`, computed bottom-up. `None` past `F(186)`.
pub fn fibonacci(n: u32) -> Option<u128> {
    // `next` may overflow one step before `current` does.
    let (mut current, mut next) = (0u128, Some(1u128));
    for _ in 0..n {
        let value = next?;
        next = current.checked_add(value);
        current = value;
    }
    Some(current)
}

/// Largest `n` whose Fibonacci number fits in a `u128`.
const LARGEST_FIBONACCI: u32 = 186;

/// Fibonacci sharing results through a caller-owned memo. Missing entries up
/// to `n` are filled in ascending order, so the memo stays valid between calls.
pub fn fibonacci_memo(n: u32, memo: &mut HashMap<u32, u128>) -> Option<u128> {
    if n < 2 {
        return Some(u128::from(n));
    }
    if n > LARGEST_FIBONACCI {
        return None;
    }
    if let Some(&cached) = memo.get(&n) {
        return Some(cached);
    }
    let (mut before, mut last) = (0u128, 1u128);
    for k in 2..=n {
        let value = match memo.get(&k) {
            Some(&cached) => cached,
            None => {
                let value = before.checked_add(last)?;
                memo.insert(k, value);
                value
            }
        };
        (before, last) = (last, value);
    }
    Some(last)
}

/// Ways to climb `n` steps taking one or two at a time.
pub fn climb_stairs(n: u32) -> Option<u128> {
    fibonacci(n.checked_add(1)?)
}

/// Fewest coins summing to `amount`, or `None` if it cannot be made.
pub fn coin_change_min(coins: &[usize], amount: usize) -> Option<usize> {
    let mut fewest: Vec<Option<usize>> = vec![None; amount + 1];
    fewest[0] = Some(0);
    for total in 1..=amount {
        fewest[total] = coins
            .iter()
            .filter(|&&coin| coin > 0 && coin <= total)
            .filter_map(|&coin| fewest[total - coin])
            .min()
            .map(|count| count + 1);
    }
    fewest[amount]
}

/// Number of coin multisets summing to `amount` (order does not matter).
pub fn coin_change_ways(coins: &[usize], amount: usize) -> Option<u128> {
    let mut ways: Vec<u128> = vec![0; amount + 1];
    ways[0] = 1;
    for &coin in coins.iter().filter(|&&c| c > 0) {
        for total in coin..=amount {
            ways[total] = ways[total].checked_add(ways[total - coin])?;
        }
    }
    Some(ways[amount])
}

/// Best total value of items fitting in `capacity`, each used at most once.
///
/// Items are `weights[i]`/`values[i]` pairs; extra entries in the longer
/// slice are ignored.
pub fn knapsack_01(weights: &[usize], values: &[u64], capacity: usize) -> u64 {
    let mut best = vec![0u64; capacity + 1];
    for (&weight, &value) in weights.iter().zip(values) {
        // Walk capacities downwards so each item is counted once.
        for room in (weight..=capacity).rev() {
            best[room] = best[room].max(best[room - weight].saturating_add(value));
        }
    }
    best[capacity]
}

/// Length of the longest strictly increasing subsequence, by patience sorting.
///
/// `tails[k]` holds the smallest tail of any increasing run of length `k + 1`.
pub fn longest_increasing_subsequence<T: Ord + Clone>(data: &[T]) -> usize {
    let mut tails: Vec<T> = Vec::new();
    for value in data {
        let slot = tails.partition_point(|tail| tail < value);
        if slot == tails.len() {
            tails.push(value.clone());
        } else {
            tails[slot] = value.clone();
        }
    }
    tails.len()
}

/// One longest common subsequence of `a` and `b`, reconstructed from the
/// full table.
pub fn longest_common_subsequence(a: &str, b: &str) -> String {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let cols = b.len() + 1;
    let mut table = vec![0usize; (a.len() + 1) * cols];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            table[i * cols + j] = if a[i - 1] == b[j - 1] {
                table[(i - 1) * cols + j - 1] + 1
            } else {
                table[(i - 1) * cols + j].max(table[i * cols + j - 1])
            };
        }
    }
    trace!(length = table[a.len() * cols + b.len()], "lcs table filled");

    let mut common = Vec::new();
    let (mut i, mut j) = (a.len(), b.len());
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            common.push(a[i - 1]);
            i -= 1;
            j -= 1;
        } else if table[(i - 1) * cols + j] >= table[i * cols + j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    common.iter().rev().collect()
}

/// Levenshtein distance: insertions, deletions and substitutions cost one.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];
    for i in 1..=a.len() {
        current[0] = i;
        for j in 1..=b.len() {
            let substitution = previous[j - 1] + usize::from(a[i - 1] != b[j - 1]);
            current[j] = substitution.min(previous[j] + 1).min(current[j - 1] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

/// Largest sum of non-adjacent houses.
pub fn house_robber(houses: &[u64]) -> u64 {
    let (mut skip, mut take) = (0u64, 0u64);
    for &loot in houses {
        (skip, take) = (skip.max(take), skip.saturating_add(loot));
    }
    skip.max(take)
}

/// Monotone lattice paths from the top-left to the bottom-right cell of a
/// `rows` x `cols` grid, moving only right or down.
pub fn unique_paths(rows: usize, cols: usize) -> Option<u128> {
    if rows == 0 || cols == 0 {
        return Some(0);
    }
    let mut row = vec![1u128; cols];
    for _ in 1..rows {
        for c in 1..cols {
            row[c] = row[c].checked_add(row[c - 1])?;
        }
    }
    Some(row[cols - 1])
}

#[instrument(level = "trace", skip_all)]
pub fn demonstrate<W: Write>(out: &mut W) -> io::Result<()> {
    let first: Vec<u128> = (0..10).filter_map(fibonacci).collect();
    writeln!(out, "fibonacci 0..10:      {first:?}")?;
    let mut memo = HashMap::new();
    writeln!(
        out,
        "fibonacci(90) memo:   {:?}",
        fibonacci_memo(90, &mut memo)
    )?;
    writeln!(out, "fibonacci(186):       {:?}", fibonacci(186))?;
    writeln!(out, "fibonacci(187):       {:?}", fibonacci(187))?;
    writeln!(out, "climb 10 stairs:      {:?}", climb_stairs(10))?;

    let coins = [1, 5, 10, 25];
    writeln!(out, "coins {coins:?}")?;
    writeln!(
        out,
        "  fewest for 63:      {:?}",
        coin_change_min(&coins, 63)
    )?;
    writeln!(
        out,
        "  ways to make 100:   {:?}",
        coin_change_ways(&coins, 100)
    )?;
    writeln!(out, "fewest of [2] for 3:  {:?}", coin_change_min(&[2], 3))?;

    let (weights, values) = ([1, 3, 4, 5], [1, 4, 5, 7]);
    writeln!(
        out,
        "knapsack w={weights:?} v={values:?} cap 7: {}",
        knapsack_01(&weights, &values, 7)
    )?;

    let sequence = [10, 9, 2, 5, 3, 7, 101, 18];
    writeln!(
        out,
        "LIS of {sequence:?}: {}",
        longest_increasing_subsequence(&sequence)
    )?;
    writeln!(
        out,
        "LCS of ABCBDAB/BDCABA:  {:?}",
        longest_common_subsequence("ABCBDAB", "BDCABA")
    )?;
    writeln!(
        out,
        "edit kitten->sitting: {}",
        edit_distance("kitten", "sitting")
    )?;
    writeln!(
        out,
        "rob [2, 7, 9, 3, 1]:  {}",
        house_robber(&[2, 7, 9, 3, 1])
    )?;
    writeln!(out, "paths in 3x7 grid:    {:?}", unique_paths(3, 7))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci() {
        assert_eq!(fibonacci(0), Some(0));
        assert_eq!(fibonacci(1), Some(1));
        assert_eq!(fibonacci(10), Some(55));
        assert_eq!(
            fibonacci(186),
            Some(332825110087067562321196029789634457848)
        );
        assert_eq!(fibonacci(187), None);

        let mut memo = HashMap::new();
        assert_eq!(fibonacci_memo(50, &mut memo), fibonacci(50));
        assert!(memo.contains_key(&49));
        assert_eq!(fibonacci_memo(186, &mut memo), fibonacci(186));
        assert_eq!(fibonacci_memo(187, &mut memo), None);
        assert_eq!(fibonacci_memo(1_000_000, &mut memo), None);
        assert_eq!(fibonacci_memo(u32::MAX, &mut HashMap::new()), None);
    }

    #[test]
    fn test_climb_stairs() {
        assert_eq!(climb_stairs(0), Some(1));
        assert_eq!(climb_stairs(3), Some(3));
        assert_eq!(climb_stairs(10), Some(89));
    }

    #[test]
    fn test_coin_change() {
        assert_eq!(coin_change_min(&[1, 2, 5], 11), Some(3));
        assert_eq!(coin_change_min(&[2], 3), None);
        assert_eq!(coin_change_min(&[], 0), Some(0));
        assert_eq!(coin_change_min(&[0, 3], 6), Some(2));
        assert_eq!(coin_change_ways(&[1, 2, 5], 5), Some(4));
        assert_eq!(coin_change_ways(&[1, 5, 10, 25], 100), Some(242));
        assert_eq!(coin_change_ways(&[2], 3), Some(0));
    }

    #[test]
    fn test_knapsack() {
        assert_eq!(knapsack_01(&[1, 3, 4, 5], &[1, 4, 5, 7], 7), 9);
        assert_eq!(knapsack_01(&[10], &[5], 9), 0);
        assert_eq!(knapsack_01(&[], &[], 4), 0);
    }

    #[test]
    fn test_subsequences() {
        assert_eq!(
            longest_increasing_subsequence(&[10, 9, 2, 5, 3, 7, 101, 18]),
            4
        );
        assert_eq!(longest_increasing_subsequence(&[7, 7, 7]), 1);
        assert_eq!(longest_increasing_subsequence::<i32>(&[]), 0);

        let lcs = longest_common_subsequence("ABCBDAB", "BDCABA");
        assert_eq!(lcs.len(), 4);
        assert_eq!(lcs, "BCBA");
        assert_eq!(longest_common_subsequence("abc", "xyz"), "");
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("flaw", "flaw"), 0);
        assert_eq!(edit_distance("intention", "execution"), 5);
    }

    #[test]
    fn test_house_robber_and_paths() {
        assert_eq!(house_robber(&[2, 7, 9, 3, 1]), 12);
        assert_eq!(house_robber(&[]), 0);
        assert_eq!(unique_paths(3, 7), Some(28));
        assert_eq!(unique_paths(1, 1), Some(1));
        assert_eq!(unique_paths(0, 5), Some(0));
    }
}
