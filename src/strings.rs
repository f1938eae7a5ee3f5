//! String algorithms: reversal, palindromes, anagrams, run-length coding and
//! KMP pattern search.
//!
//! Functions work on Unicode scalar values (`char`) unless stated otherwise.

use crate::error::{AlgoError, Result};
use std::io::{self, Write};
use tracing::instrument;

pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Reverses word order, collapsing runs of whitespace to single spaces.
pub fn reverse_words(text: &str) -> String {
    text.split_whitespace().rev().collect::<Vec<_>>().join(" ")
}

/// Palindrome check over alphanumeric characters, ignoring case.
pub fn is_palindrome(text: &str) -> bool {
    let mut forward = text
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase);
    let mut backward = text
        .chars()
        .rev()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase);
    loop {
        match (forward.next(), backward.next()) {
            (Some(a), Some(b)) if a == b => {}
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// Same multiset of characters, ignoring case and whitespace.
pub fn is_anagram(a: &str, b: &str) -> bool {
    let normalise = |s: &str| {
        let mut chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        chars.sort_unstable();
        chars
    };
    normalise(a) == normalise(b)
}

/// Longest prefix shared by every word; empty for no words.
pub fn longest_common_prefix<S: AsRef<str>>(words: &[S]) -> String {
    let Some((first, rest)) = words.split_first() else {
        return String::new();
    };
    let mut prefix = first.as_ref();
    for word in rest {
        let word = word.as_ref();
        let shared: usize = prefix
            .char_indices()
            .zip(word.chars())
            .take_while(|((_, a), b)| a == b)
            .map(|((_, a), _)| a.len_utf8())
            .sum();
        prefix = &prefix[..shared];
    }
    prefix.to_string()
}

/// Encodes runs as count followed by character: `"aaab"` becomes `"3a1b"`.
pub fn run_length_encode(text: &str) -> String {
    let mut encoded = String::new();
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        let mut run = 1;
        while chars.next_if_eq(&ch).is_some() {
            run += 1;
        }
        encoded.push_str(&run.to_string());
        encoded.push(ch);
    }
    encoded
}

/// Inverse of [`run_length_encode`]. Digits cannot be run characters.
pub fn run_length_decode(encoded: &str) -> Result<String> {
    let mut decoded = String::new();
    let mut count: Option<usize> = None;
    for ch in encoded.chars() {
        if let Some(digit) = ch.to_digit(10) {
            let next = count
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|c| c.checked_add(digit as usize))
                .ok_or_else(|| AlgoError::InvalidExpression("run length overflows".into()))?;
            count = Some(next);
            continue;
        }
        let run = count.take().ok_or_else(|| {
            AlgoError::InvalidExpression(format!("character '{ch}' has no run length"))
        })?;
        decoded.extend(std::iter::repeat_n(ch, run));
    }
    if count.is_some() {
        return Err(AlgoError::InvalidExpression(
            "trailing run length without a character".into(),
        ));
    }
    Ok(decoded)
}

/// KMP failure table: `table[i]` is the length of the longest proper prefix
/// of `pattern[..=i]` that is also a suffix of it.
pub fn prefix_function(pattern: &[u8]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];
    let mut matched = 0;
    for i in 1..pattern.len() {
        while matched > 0 && pattern[i] != pattern[matched] {
            matched = table[matched - 1];
        }
        if pattern[i] == pattern[matched] {
            matched += 1;
        }
        table[i] = matched;
    }
    table
}

/// Byte offsets of every (possibly overlapping) occurrence of `pattern` in `text`.
///
/// ```
/// use classic_algos::strings::kmp_search;
///
/// assert_eq!(kmp_search("abababa", "aba"), vec![0, 2, 4]);
/// assert!(kmp_search("abc", "").is_empty());
/// ```
pub fn kmp_search(text: &str, pattern: &str) -> Vec<usize> {
    let (text, pattern) = (text.as_bytes(), pattern.as_bytes());
    if pattern.is_empty() || pattern.len() > text.len() {
        return vec![];
    }

    let table = prefix_function(pattern);
    let mut matches = Vec::new();
    let mut matched = 0;
    for (i, &byte) in text.iter().enumerate() {
        while matched > 0 && byte != pattern[matched] {
            matched = table[matched - 1];
        }
        if byte == pattern[matched] {
            matched += 1;
        }
        if matched == pattern.len() {
            matches.push(i + 1 - matched);
            matched = table[matched - 1];
        }
    }
    matches
}

/// Longest palindromic substring, found by expanding around each centre.
///
/// The first one wins among equally long candidates.
pub fn longest_palindromic_substring(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let expand = |mut lo: usize, mut hi: usize| -> (usize, usize) {
        // Returns the half-open bounds of the widest palindrome around the centre.
        while hi < chars.len() && chars[lo] == chars[hi] {
            if lo == 0 {
                return (0, hi + 1);
            }
            lo -= 1;
            hi += 1;
        }
        (lo + 1, hi)
    };

    let mut best = (0, 0);
    for centre in 0..chars.len() {
        for (lo, hi) in [expand(centre, centre), expand(centre, centre + 1)] {
            if hi.saturating_sub(lo) > best.1 - best.0 {
                best = (lo, hi);
            }
        }
    }
    chars[best.0..best.1].iter().collect()
}

/// Shifts ASCII letters by `shift` places, wrapping within the alphabet.
pub fn caesar_shift(text: &str, shift: i32) -> String {
    let shift = shift.rem_euclid(26) as u8;
    text.chars()
        .map(|c| match c {
            'a'..='z' => ((c as u8 - b'a' + shift) % 26 + b'a') as char,
            'A'..='Z' => ((c as u8 - b'A' + shift) % 26 + b'A') as char,
            _ => c,
        })
        .collect()
}

pub fn count_vowels(text: &str) -> usize {
    text.chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}

#[instrument(level = "trace", skip_all)]
pub fn demonstrate<W: Write>(out: &mut W) -> io::Result<()> {
    let sentence = "the sky is blue";
    writeln!(out, "reverse:            {:?}", reverse(sentence))?;
    writeln!(out, "reverse words:      {:?}", reverse_words(sentence))?;

    let phrase = "A man, a plan, a canal: Panama";
    writeln!(out, "palindrome {phrase:?}: {}", is_palindrome(phrase))?;
    writeln!(
        out,
        "anagram listen/silent: {}",
        is_anagram("listen", "silent")
    )?;
    writeln!(
        out,
        "common prefix:      {:?}",
        longest_common_prefix(&["flower", "flow", "flight"])
    )?;

    let encoded = run_length_encode("aaabccdddd");
    writeln!(out, "run-length encode:  {encoded}")?;
    match run_length_decode(&encoded) {
        Ok(decoded) => writeln!(out, "run-length decode:  {decoded}")?,
        Err(e) => writeln!(out, "run-length decode failed: {e}")?,
    }

    writeln!(
        out,
        "prefix function of 'aabaaab': {:?}",
        prefix_function(b"aabaaab")
    )?;
    writeln!(
        out,
        "KMP 'abab' in 'abababcabab': {:?}",
        kmp_search("abababcabab", "abab")
    )?;
    writeln!(
        out,
        "longest palindrome in 'forgeeksskeegfor': {:?}",
        longest_palindromic_substring("forgeeksskeegfor")
    )?;
    writeln!(
        out,
        "caesar +3:          {}",
        caesar_shift("Hello, World", 3)
    )?;
    writeln!(out, "vowels in 'Education': {}", count_vowels("Education"))?;
    Ok(())
}
