//! Prefix tree over `char`s.
//!
//! Nodes live in a generational arena and refer to their children by index,
//! so the tree needs no reference counting. Removing a word clears its
//! terminal mark and decrements the pass-through counts along its path; a
//! branch whose count drops to zero is detached and its nodes are released
//! back to the arena.

use generational_arena::{Arena, Index};
use std::collections::BTreeMap;
use std::io::{self, Write};
use tracing::{debug, instrument};

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: BTreeMap<char, Index>,
    /// Number of stored words passing through (or ending at) this node.
    prefix_count: usize,
    terminal: bool,
}

#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Arena<TrieNode>,
    root: Index,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        let mut nodes = Arena::new();
        let root = nodes.insert(TrieNode::default());
        Self {
            nodes,
            root,
            words: 0,
        }
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Adds `word`. Returns `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        if self.contains(word) {
            return false;
        }

        let mut node = self.root;
        self.nodes[node].prefix_count += 1;
        for ch in word.chars() {
            node = match self.nodes[node].children.get(&ch).copied() {
                Some(child) => child,
                None => {
                    let child = self.nodes.insert(TrieNode::default());
                    self.nodes[node].children.insert(ch, child);
                    child
                }
            };
            self.nodes[node].prefix_count += 1;
        }
        self.nodes[node].terminal = true;
        self.words += 1;
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| self.nodes[node].terminal)
    }

    /// `true` if some stored word starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.count_prefix(prefix) > 0
    }

    /// Number of stored words starting with `prefix`.
    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.find(prefix)
            .map_or(0, |node| self.nodes[node].prefix_count)
    }

    /// Stored words starting with `prefix`, in lexicographic order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut words = Vec::new();
        if let Some(node) = self.find(prefix) {
            let mut path = prefix.to_string();
            self.collect(node, &mut path, &mut words);
        }
        words
    }

    /// Removes `word`. Returns `false` if it was not present.
    pub fn remove(&mut self, word: &str) -> bool {
        if !self.contains(word) {
            return false;
        }

        let mut node = self.root;
        self.nodes[node].prefix_count -= 1;
        for ch in word.chars() {
            let Some(&child) = self.nodes[node].children.get(&ch) else {
                break;
            };
            self.nodes[child].prefix_count -= 1;
            if self.nodes[child].prefix_count == 0 {
                // Nothing else passes through here: detach the whole branch.
                self.nodes[node].children.remove(&ch);
                let released = self.release_branch(child);
                debug!(word, released, "detached trie branch");
                self.words -= 1;
                return true;
            }
            node = child;
        }
        self.nodes[node].terminal = false;
        self.words -= 1;
        true
    }

    /// Longest prefix shared by every stored word.
    pub fn longest_common_prefix(&self) -> String {
        let mut prefix = String::new();
        if self.is_empty() {
            return prefix;
        }
        let mut node = self.root;
        loop {
            let current = &self.nodes[node];
            if current.terminal || current.children.len() != 1 {
                return prefix;
            }
            let Some((&ch, &child)) = current.children.iter().next() else {
                return prefix;
            };
            prefix.push(ch);
            node = child;
        }
    }

    /// Frees `start` and everything below it. Returns the number of nodes freed.
    fn release_branch(&mut self, start: Index) -> usize {
        let mut pending = vec![start];
        let mut released = 0;
        while let Some(index) = pending.pop() {
            if let Some(node) = self.nodes.remove(index) {
                pending.extend(node.children.into_values());
                released += 1;
            }
        }
        released
    }

    fn find(&self, prefix: &str) -> Option<Index> {
        prefix.chars().try_fold(self.root, |node, ch| {
            self.nodes[node].children.get(&ch).copied()
        })
    }

    fn collect(&self, node: Index, path: &mut String, words: &mut Vec<String>) {
        let current = &self.nodes[node];
        if current.terminal {
            words.push(path.clone());
        }
        for (&ch, &child) in &current.children {
            path.push(ch);
            self.collect(child, path, words);
            path.pop();
        }
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        for word in iter {
            trie.insert(word);
        }
        trie
    }
}

#[instrument(level = "trace", skip_all)]
pub fn demonstrate<W: Write>(out: &mut W) -> io::Result<()> {
    let words = ["apple", "app", "application", "apt", "banana", "band"];
    let mut trie: Trie = words.into_iter().collect();
    writeln!(out, "stored {} words: {words:?}", trie.len())?;
    writeln!(out, "contains 'app':       {}", trie.contains("app"))?;
    writeln!(out, "contains 'appl':      {}", trie.contains("appl"))?;
    writeln!(out, "starts with 'ban':    {}", trie.starts_with("ban"))?;
    writeln!(out, "count prefix 'ap':    {}", trie.count_prefix("ap"))?;
    writeln!(
        out,
        "words with 'app':     {:?}",
        trie.words_with_prefix("app")
    )?;
    trie.remove("apple");
    writeln!(
        out,
        "after removing apple: {:?}",
        trie.words_with_prefix("app")
    )?;

    let flowers: Trie = ["flower", "flow", "flight"].into_iter().collect();
    writeln!(
        out,
        "common prefix of flower/flow/flight: {:?}",
        flowers.longest_common_prefix()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie {
        ["apple", "app", "application", "apt", "banana", "band"]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_lookup() {
        let trie = sample();
        assert_eq!(trie.len(), 6);
        assert!(trie.contains("app"));
        assert!(!trie.contains("appl"));
        assert!(!trie.contains(""));
        assert!(trie.starts_with("appl"));
        assert!(trie.starts_with(""));
        assert!(!trie.starts_with("c"));
        assert_eq!(trie.count_prefix("ap"), 4);
        assert_eq!(trie.count_prefix(""), 6);
    }

    #[test]
    fn test_prefix_listing_is_sorted() {
        let trie = sample();
        assert_eq!(
            trie.words_with_prefix("app"),
            vec!["app", "apple", "application"]
        );
        assert_eq!(trie.words_with_prefix("ban"), vec!["banana", "band"]);
        assert!(trie.words_with_prefix("x").is_empty());
    }

    #[test]
    fn test_duplicate_insert() {
        let mut trie = Trie::new();
        assert!(trie.insert("a"));
        assert!(!trie.insert("a"));
        assert_eq!(trie.count_prefix("a"), 1);
    }

    #[test]
    fn test_remove() {
        let mut trie = sample();
        assert!(trie.remove("apple"));
        assert!(!trie.remove("apple"));
        assert!(!trie.contains("apple"));
        assert!(trie.contains("application"));
        assert_eq!(trie.count_prefix("appl"), 1);

        assert!(trie.remove("app"));
        assert!(trie.starts_with("app"));
        assert!(!trie.contains("app"));

        assert!(trie.remove("band"));
        assert!(!trie.starts_with("band"));
        assert_eq!(
            trie.words_with_prefix(""),
            vec!["application", "apt", "banana"]
        );
        assert_eq!(trie.len(), 3);

        // Re-inserting a detached word rebuilds its branch.
        assert!(trie.insert("band"));
        assert!(trie.contains("band"));
    }

    #[test]
    fn test_remove_releases_nodes() {
        let mut trie = Trie::new();
        for _ in 0..10_000 {
            assert!(trie.insert("abcdef"));
            assert!(trie.remove("abcdef"));
        }
        assert!(trie.is_empty());
        assert_eq!(trie.nodes.len(), 1);
        assert!(trie.nodes.capacity() < 16);

        let mut trie = sample();
        let before = trie.nodes.len();
        assert!(trie.remove("banana"));
        // "banana" and "band" share "ban"; only "ana" is released.
        assert_eq!(trie.nodes.len(), before - 3);
        assert!(trie.contains("band"));
    }

    #[test]
    fn test_empty_word() {
        let mut trie = Trie::new();
        assert!(trie.insert(""));
        assert!(trie.contains(""));
        assert!(trie.remove(""));
        assert!(trie.is_empty());
    }

    #[test]
    fn test_common_prefix() {
        let trie: Trie = ["flower", "flow", "flight"].into_iter().collect();
        assert_eq!(trie.longest_common_prefix(), "fl");
        let trie: Trie = ["flow", "flower"].into_iter().collect();
        assert_eq!(trie.longest_common_prefix(), "flow");
        assert_eq!(Trie::new().longest_common_prefix(), "");
    }
}
