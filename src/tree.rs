//! Unbalanced binary search tree with owned child links.
//!
//! Values are unique: inserting a value already present leaves the tree
//! untouched. Traversals, removal, cloning and dropping all walk the tree with
//! loops or explicit stacks, so a degenerate (list-shaped) tree does not
//! recurse deeply.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::io::{self, Write};
use tracing::instrument;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Re-inserting in preorder rebuilds the same shape.
impl<T: Ord + Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        self.preorder().into_iter().cloned().collect()
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<T: Ord> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value`. Returns `false` if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *link = Some(Node::leaf(value));
        self.len += 1;
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Removes `value`. Returns `false` if it was not present.
    ///
    /// A node with two children takes the value of its in-order successor,
    /// which is then unlinked from the right subtree.
    pub fn remove(&mut self, value: &T) -> bool {
        let removed = remove_from(&mut self.root, value);
        if removed {
            self.len -= 1;
        }
        removed
    }

    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.level_order().len()
    }

    pub fn inorder(&self) -> Vec<&T> {
        let mut visited = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            visited.push(&node.value);
            current = node.right.as_deref();
        }
        visited
    }

    pub fn preorder(&self) -> Vec<&T> {
        let mut visited = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            visited.push(&node.value);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        visited
    }

    /// Left, right, node. Built as a mirrored preorder and reversed.
    pub fn postorder(&self) -> Vec<&T> {
        let mut visited = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            visited.push(&node.value);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        visited.reverse();
        visited
    }

    /// Values grouped by depth, left to right within a level.
    pub fn level_order(&self) -> Vec<Vec<&T>> {
        let mut levels = Vec::new();
        let mut queue: VecDeque<&Node<T>> = self.root.as_deref().into_iter().collect();
        while !queue.is_empty() {
            let mut level = Vec::with_capacity(queue.len());
            for _ in 0..queue.len() {
                let Some(node) = queue.pop_front() else {
                    break;
                };
                level.push(&node.value);
                queue.extend(node.left.as_deref());
                queue.extend(node.right.as_deref());
            }
            levels.push(level);
        }
        levels
    }

    /// Checks the ordering invariant: an in-order walk is strictly increasing.
    pub fn is_valid(&self) -> bool {
        self.inorder().windows(2).all(|w| w[0] < w[1])
    }

    /// Deepest node having both `a` and `b` in its subtree (a node counts as
    /// its own descendant). `None` unless both values are stored.
    pub fn lowest_common_ancestor(&self, a: &T, b: &T) -> Option<&T> {
        if !self.contains(a) || !self.contains(b) {
            return None;
        }
        let mut node = self.root.as_deref()?;
        loop {
            if a < &node.value && b < &node.value {
                node = node.left.as_deref()?;
            } else if a > &node.value && b > &node.value {
                node = node.right.as_deref()?;
            } else {
                return Some(&node.value);
            }
        }
    }

    /// Largest stored value `<= value`.
    pub fn floor(&self, value: &T) -> Option<&T> {
        let mut best = None;
        let mut link = &self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => {
                    best = Some(&node.value);
                    &node.right
                }
            };
        }
        best
    }

    /// Smallest stored value `>= value`.
    pub fn ceiling(&self, value: &T) -> Option<&T> {
        let mut best = None;
        let mut link = &self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Greater => &node.right,
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => {
                    best = Some(&node.value);
                    &node.left
                }
            };
        }
        best
    }
}

fn remove_from<T: Ord>(mut link: &mut Link<T>, value: &T) -> bool {
    loop {
        let ordering = match link.as_deref() {
            Some(node) => value.cmp(&node.value),
            None => return false,
        };
        if ordering == Ordering::Equal {
            break;
        }
        let Some(node) = link.as_mut() else {
            return false;
        };
        link = if ordering == Ordering::Less {
            &mut node.left
        } else {
            &mut node.right
        };
    }

    let Some(mut node) = link.take() else {
        return false;
    };
    *link = match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(left), Some(right)) => {
            let mut right = Some(right);
            if let Some(successor) = take_min(&mut right) {
                node.value = successor;
            }
            node.left = Some(left);
            node.right = right;
            Some(node)
        }
    };
    true
}

/// Unlinks the minimum of the subtree at `link` and returns its value.
fn take_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref().is_some_and(|node| node.left.is_some()) {
        let Some(node) = link.as_mut() else {
            return None;
        };
        link = &mut node.left;
    }
    let node = link.take()?;
    let Node { value, right, .. } = *node;
    *link = right;
    Some(value)
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

#[instrument(level = "trace", skip_all)]
pub fn demonstrate<W: Write>(out: &mut W) -> io::Result<()> {
    let values = [50, 30, 70, 20, 40, 60, 80];
    let mut tree: BinarySearchTree<i32> = values.into_iter().collect();
    writeln!(out, "inserted:     {values:?}")?;
    writeln!(out, "inorder:      {:?}", tree.inorder())?;
    writeln!(out, "preorder:     {:?}", tree.preorder())?;
    writeln!(out, "postorder:    {:?}", tree.postorder())?;
    writeln!(out, "level order:  {:?}", tree.level_order())?;
    writeln!(out, "height:       {}", tree.height())?;
    writeln!(out, "min / max:    {:?} / {:?}", tree.min(), tree.max())?;
    writeln!(out, "contains 60:  {}", tree.contains(&60))?;
    writeln!(out, "floor(45):    {:?}", tree.floor(&45))?;
    writeln!(out, "ceiling(45):  {:?}", tree.ceiling(&45))?;
    writeln!(
        out,
        "LCA(20, 40):  {:?}",
        tree.lowest_common_ancestor(&20, &40)
    )?;
    writeln!(
        out,
        "LCA(20, 60):  {:?}",
        tree.lowest_common_ancestor(&20, &60)
    )?;

    let removed = tree.remove(&50);
    writeln!(out, "remove 50:    {removed}")?;
    writeln!(out, "inorder:      {:?}", tree.inorder())?;
    writeln!(out, "valid BST:    {}", tree.is_valid())?;
    Ok(())
}
