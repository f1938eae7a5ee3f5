//! Singly linked list stored as an arena of nodes.
//!
//! Links are `Option<Index>` handles into a generational arena instead of
//! owning pointers, so relinking (reversal, merging, sorting) only rewrites
//! handles and never moves values. Popped nodes are released back to the
//! arena and their slots are reused by later pushes.

use generational_arena::{Arena, Index};
use std::io::{self, Write};
use tracing::instrument;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<Index>,
}

#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    nodes: Arena<Node<T>>,
    head: Option<Index>,
    tail: Option<Index>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn alloc(&mut self, value: T, next: Option<Index>) -> Index {
        self.len += 1;
        self.nodes.insert(Node { value, next })
    }

    fn value_at(&self, index: Index) -> Option<&T> {
        self.nodes.get(index).map(|node| &node.value)
    }

    fn next_of(&self, index: Index) -> Option<Index> {
        self.nodes.get(index)?.next
    }

    fn set_next(&mut self, index: Index, next: Option<Index>) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.next = next;
        }
    }

    pub fn push_front(&mut self, value: T) {
        let index = self.alloc(value, self.head);
        self.head = Some(index);
        if self.tail.is_none() {
            self.tail = Some(index);
        }
    }

    pub fn push_back(&mut self, value: T) {
        let index = self.alloc(value, None);
        match self.tail {
            Some(tail) => self.set_next(tail, Some(index)),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let node = self.nodes.remove(head)?;
        self.head = node.next;
        self.len -= 1;
        if self.head.is_none() {
            self.tail = None;
        }
        Some(node.value)
    }

    pub fn front(&self) -> Option<&T> {
        self.value_at(self.head?)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Reverses the list by flipping every link.
    pub fn reverse(&mut self) {
        let mut previous = None;
        let mut current = self.head;
        self.tail = self.head;
        while let Some(index) = current {
            let next = self.next_of(index);
            self.set_next(index, previous);
            previous = Some(index);
            current = next;
        }
        self.head = previous;
    }

    /// Middle element via slow/fast cursors; the second middle for even lengths.
    pub fn middle(&self) -> Option<&T> {
        let mut slow = self.head?;
        let mut fast = self.head;
        while let Some(two_ahead) = fast.and_then(|f| self.next_of(f)) {
            slow = self.next_of(slow)?;
            fast = self.next_of(two_ahead);
        }
        self.value_at(slow)
    }

    /// Element `n` places from the end (`n == 1` is the last), using two cursors `n` apart.
    pub fn nth_from_end(&self, n: usize) -> Option<&T> {
        self.value_at(self.nth_from_end_index(n)?)
    }

    fn nth_from_end_index(&self, n: usize) -> Option<Index> {
        if n == 0 || n > self.len {
            return None;
        }
        let mut lead = self.head;
        for _ in 0..n {
            lead = self.next_of(lead?);
        }
        let mut trail = self.head?;
        while let Some(index) = lead {
            trail = self.next_of(trail)?;
            lead = self.next_of(index);
        }
        Some(trail)
    }

    /// Unlinks and returns element `n` places from the end.
    pub fn remove_nth_from_end(&mut self, n: usize) -> Option<T> {
        let target = self.nth_from_end_index(n)?;
        if Some(target) == self.head {
            return self.pop_front();
        }

        // Walk to the predecessor of the target.
        let mut previous = self.head?;
        while self.next_of(previous) != Some(target) {
            previous = self.next_of(previous)?;
        }
        let node = self.nodes.remove(target)?;
        self.set_next(previous, node.next);
        if self.tail == Some(target) {
            self.tail = Some(previous);
        }
        self.len -= 1;
        Some(node.value)
    }
}

impl<T: Ord> LinkedList<T> {
    /// Stable merge sort over the links.
    pub fn sort(&mut self) {
        self.head = self.sort_run(self.head, self.len);
        self.tail = self.last_index();
    }

    /// Sorts the `len` nodes starting at `start` and returns the new head.
    /// The returned run is terminated with `None`.
    fn sort_run(&mut self, start: Option<Index>, len: usize) -> Option<Index> {
        if len <= 1 {
            if let Some(index) = start {
                self.set_next(index, None);
            }
            return start;
        }

        let half = len / 2;
        let mut split = start;
        for _ in 0..half {
            split = split.and_then(|i| self.next_of(i));
        }
        // `split` must be read before the left run is cut off.
        let left = self.sort_run(start, half);
        let right = self.sort_run(split, len - half);
        self.merge_runs(left, right)
    }

    /// Merges two sorted, `None`-terminated runs. Ties take the left node first.
    fn merge_runs(&mut self, mut left: Option<Index>, mut right: Option<Index>) -> Option<Index> {
        let mut head = None;
        let mut tail: Option<Index> = None;
        loop {
            let take = match (left, right) {
                (Some(l), Some(r)) => {
                    let right_first = match (self.value_at(l), self.value_at(r)) {
                        (Some(lv), Some(rv)) => rv < lv,
                        _ => false,
                    };
                    if right_first {
                        right = self.next_of(r);
                        r
                    } else {
                        left = self.next_of(l);
                        l
                    }
                }
                (Some(rest), None) | (None, Some(rest)) => {
                    match tail {
                        Some(t) => self.set_next(t, Some(rest)),
                        None => head = Some(rest),
                    }
                    return head;
                }
                (None, None) => return head,
            };
            match tail {
                Some(t) => self.set_next(t, Some(take)),
                None => head = Some(take),
            }
            tail = Some(take);
        }
    }

    fn last_index(&self) -> Option<Index> {
        let mut current = self.head?;
        while let Some(next) = self.next_of(current) {
            current = next;
        }
        Some(current)
    }
}

impl<T: Ord + Clone> LinkedList<T> {
    /// Merges two sorted lists into a new sorted list. Ties come from `a` first.
    pub fn merge_sorted(a: &Self, b: &Self) -> Self {
        let mut merged = Self::new();
        let mut left = a.iter().peekable();
        let mut right = b.iter().peekable();
        loop {
            let next = match (left.peek(), right.peek()) {
                (Some(l), Some(r)) if r < l => right.next(),
                (Some(_), _) => left.next(),
                (None, _) => right.next(),
            };
            let Some(value) = next else {
                break;
            };
            merged.push_back(value.clone());
        }
        merged
    }
}

impl<T: Clone> LinkedList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    cursor: Option<Index>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.nodes.get(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.value)
    }
}

/// Floyd's cycle detection over a raw successor table, where `links[i]` is
/// the node after `i`.
pub fn has_cycle(links: &[Option<usize>], head: Option<usize>) -> bool {
    meeting_point(links, head).is_some()
}

/// First node of the cycle reachable from `head`, if there is one.
///
/// After the cursors meet, one restarts from `head`; stepping both one node
/// at a time, they meet again at the cycle's entry.
pub fn cycle_start(links: &[Option<usize>], head: Option<usize>) -> Option<usize> {
    let mut meet = meeting_point(links, head)?;
    let mut from_head = head?;
    while from_head != meet {
        from_head = step(links, from_head)?;
        meet = step(links, meet)?;
    }
    Some(from_head)
}

fn step(links: &[Option<usize>], node: usize) -> Option<usize> {
    links.get(node).copied().flatten()
}

fn meeting_point(links: &[Option<usize>], head: Option<usize>) -> Option<usize> {
    let mut slow = head?;
    let mut fast = head?;
    loop {
        slow = step(links, slow)?;
        fast = step(links, step(links, fast)?)?;
        if slow == fast {
            return Some(slow);
        }
    }
}

#[instrument(level = "trace", skip_all)]
pub fn demonstrate<W: Write>(out: &mut W) -> io::Result<()> {
    let mut list: LinkedList<i32> = [4, 2, 5, 1, 3].into_iter().collect();
    writeln!(out, "list:             {:?}", list.to_vec())?;
    writeln!(out, "middle:           {:?}", list.middle())?;
    writeln!(out, "2nd from end:     {:?}", list.nth_from_end(2))?;

    list.reverse();
    writeln!(out, "reversed:         {:?}", list.to_vec())?;
    list.sort();
    writeln!(out, "sorted:           {:?}", list.to_vec())?;

    let removed = list.remove_nth_from_end(2);
    writeln!(
        out,
        "remove 2nd from end: {removed:?} -> {:?}",
        list.to_vec()
    )?;
    list.push_front(0);
    writeln!(out, "push_front 0:     {:?}", list.to_vec())?;

    let evens: LinkedList<i32> = [2, 6, 8].into_iter().collect();
    let merged = LinkedList::merge_sorted(&list, &evens);
    writeln!(out, "merged with [2, 6, 8]: {:?}", merged.to_vec())?;

    // 0 -> 1 -> 2 -> 3 -> 4 -> 2
    let links = [Some(1), Some(2), Some(3), Some(4), Some(2)];
    writeln!(
        out,
        "cycle in {links:?}: {} (starts at {:?})",
        has_cycle(&links, Some(0)),
        cycle_start(&links, Some(0))
    )?;
    Ok(())
}
