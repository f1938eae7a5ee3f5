//! # classic-algos
//!
//! `classic_algos` is a reference collection of textbook data structures and algorithms:
//! arrays, lists, stacks, queues, heaps, sets, maps, strings, tries, linked lists,
//! union-find, binary search trees, graphs, dynamic programming, sorting, searching,
//! bit manipulation and number theory.
//!
//! Every topic lives in its own module as a set of plain functions (or a small container
//! type) plus a `demonstrate` entry point that runs the algorithms on fixed sample data and
//! writes labelled results to any [`std::io::Write`]. The `classic-algos` binary strings
//! those demonstrations together.
//!
//! ## Key Features
//!
//! - **Explicit absence**: lookups that can miss return [`Option`], never a `-1` sentinel.
//! - **Typed failures**: the few operations that can fail on bad input (reshaping,
//!   fixed-capacity queues, modular inverses, cyclic graphs) return [`Result`] with an
//!   [`AlgoError`].
//! - **Byte-string radix sort**: [`sorting::radix_sort_bytes`] caches an 8-byte key prefix
//!   next to each index, so most comparisons never touch the key data. Arbitrary storage
//!   can be sorted through the [`ByteKeys`] trait.
//! - **No hidden recursion limits**: traversals, DFS and quicksort use explicit stacks or
//!   bounded recursion depth.
//!
//! ## Usage
//!
//! ```rust
//! use classic_algos::prelude::*;
//!
//! let mut data = vec![64, 34, 25, 12, 22, 11, 90];
//! merge_sort(&mut data);
//! assert_eq!(data, vec![11, 12, 22, 25, 34, 64, 90]);
//!
//! assert_eq!(binary_search(&data, &25), Some(3));
//! assert_eq!(binary_search(&data, &26), None);
//! ```
//!
//! ### Sorting byte strings
//!
//! ```rust
//! use classic_algos::sorting::{radix_sort_bytes, sorted_indices};
//!
//! let words = vec!["banana", "apple", "cherry", "date"];
//! assert_eq!(sorted_indices(&words), vec![1, 0, 2, 3]);
//!
//! let mut words = words;
//! radix_sort_bytes(&mut words);
//! assert_eq!(words, vec!["apple", "banana", "cherry", "date"]);
//! ```
//!
//! ### Running demonstrations
//!
//! ```rust
//! use classic_algos::demo::{run_all, Topic};
//!
//! let mut out = Vec::new();
//! run_all(&[Topic::Bits], &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("== bits =="));
//! ```

pub mod arrays;
pub mod bits;
pub mod demo;
pub mod dp;
pub mod error;
pub mod graph;
pub mod heap;
pub mod linked_list;
pub mod lists;
pub mod maps;
pub mod number_theory;
pub mod queue;
pub mod searching;
pub mod sets;
pub mod sorting;
pub mod stack;
pub mod strings;
pub mod tree;
pub mod trie;
pub mod union_find;

pub use error::{AlgoError, Result};
pub use sorting::ByteKeys;

pub mod prelude {
    pub use crate::error::{AlgoError, Result};
    pub use crate::graph::Graph;
    pub use crate::heap::MinHeap;
    pub use crate::linked_list::LinkedList;
    pub use crate::queue::{CircularQueue, Queue};
    pub use crate::searching::binary_search;
    pub use crate::sorting::{ByteKeys, merge_sort, quick_sort, radix_sort_bytes, sorted_indices};
    pub use crate::stack::Stack;
    pub use crate::tree::BinarySearchTree;
    pub use crate::trie::Trie;
    pub use crate::union_find::DisjointSet;
}
