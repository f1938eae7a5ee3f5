//! Hash-map counting and lookup patterns.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::io::{self, Write};
use tracing::instrument;

/// Counts lowercase words, splitting on anything that is not alphanumeric.
pub fn word_frequencies(text: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for word in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        *counts.entry(word.to_lowercase()).or_insert(0) += 1;
    }
    counts
}

/// Indices `(i, j)`, `i < j`, of two elements summing to `target`, in one pass.
pub fn two_sum(data: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(data.len());
    for (j, &value) in data.iter().enumerate() {
        if let Some(&i) = target.checked_sub(value).and_then(|want| seen.get(&want)) {
            return Some((i, j));
        }
        seen.entry(value).or_insert(j);
    }
    None
}

/// Groups words that are anagrams of each other.
///
/// Groups appear in the order their first member appears, and words keep
/// their input order within a group.
pub fn group_anagrams<S: AsRef<str>>(words: &[S]) -> Vec<Vec<String>> {
    let mut slot_of: HashMap<Vec<char>, usize> = HashMap::new();
    let mut groups: Vec<Vec<String>> = Vec::new();
    for word in words {
        let word = word.as_ref();
        let mut signature: Vec<char> = word.chars().collect();
        signature.sort_unstable();
        let slot = *slot_of.entry(signature).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(word.to_string());
    }
    groups
}

/// Position and value of the first character that occurs exactly once.
pub fn first_unique_char(text: &str) -> Option<(usize, char)> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for ch in text.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    text.chars()
        .enumerate()
        .find(|(_, ch)| counts.get(ch) == Some(&1))
}

/// Number of contiguous runs summing to `k`, via counts of prefix sums.
///
/// Prefix sums are kept as `i128`, which cannot overflow for any slice of `i64`.
pub fn subarray_sum_count(data: &[i64], k: i64) -> usize {
    let mut prefix_counts: HashMap<i128, usize> = HashMap::from([(0, 1)]);
    let mut running = 0i128;
    let mut total = 0;
    for &value in data {
        running += i128::from(value);
        total += prefix_counts
            .get(&(running - i128::from(k)))
            .copied()
            .unwrap_or(0);
        *prefix_counts.entry(running).or_insert(0) += 1;
    }
    total
}

/// Most common value; ties go to the value seen first.
pub fn most_frequent<T: Eq + Hash + Clone>(data: &[T]) -> Option<T> {
    let mut counts: HashMap<&T, (usize, usize)> = HashMap::new();
    for (position, value) in data.iter().enumerate() {
        counts.entry(value).or_insert((0, position)).0 += 1;
    }
    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(value, _)| value.clone())
}

#[instrument(level = "trace", skip_all)]
pub fn demonstrate<W: Write>(out: &mut W) -> io::Result<()> {
    let text = "the quick brown fox jumps over the lazy dog. The dog sleeps.";
    writeln!(out, "word frequencies: {:?}", word_frequencies(text))?;

    let nums = [2, 7, 11, 15];
    writeln!(out, "two sum = 9 in {nums:?}: {:?}", two_sum(&nums, 9))?;

    let words = ["eat", "tea", "tan", "ate", "nat", "bat"];
    writeln!(out, "anagram groups: {:?}", group_anagrams(&words))?;
    writeln!(
        out,
        "first unique in 'swiss': {:?}",
        first_unique_char("swiss")
    )?;
    writeln!(
        out,
        "subarrays of [1, 1, 1] summing to 2: {}",
        subarray_sum_count(&[1, 1, 1], 2)
    )?;
    writeln!(
        out,
        "most frequent in [3, 1, 3, 2, 1]: {:?}",
        most_frequent(&[3, 1, 3, 2, 1])
    )?;
    Ok(())
}
