//! FIFO queues: a `VecDeque` wrapper, a fixed-capacity ring buffer, a queue
//! built from two stacks, and the monotonic-deque sliding window maximum.

use crate::error::{AlgoError, Result};
use crate::stack::Stack;
use std::collections::VecDeque;
use std::io::{self, Write};
use tracing::instrument;

#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Fixed-capacity ring buffer queue.
///
/// `head` is the slot of the oldest item; the next free slot is
/// `(head + len) % capacity`.
#[derive(Debug, Clone)]
pub struct CircularQueue<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> CircularQueue<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Appends `item`, failing with [`AlgoError::CapacityExceeded`] when full.
    pub fn enqueue(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(AlgoError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        let tail = (self.head + self.len) % self.capacity();
        self.slots[tail] = Some(item);
        self.len += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        item
    }

    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }
}

/// Queue made of two stacks: pushes go to `inbox`, pops come from `outbox`,
/// which is refilled by reversing `inbox` only when it runs dry.
#[derive(Debug, Clone)]
pub struct StackQueue<T> {
    inbox: Stack<T>,
    outbox: Stack<T>,
}

impl<T> Default for StackQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StackQueue<T> {
    pub fn new() -> Self {
        Self {
            inbox: Stack::new(),
            outbox: Stack::new(),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.inbox.push(item);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.refill();
        self.outbox.pop()
    }

    pub fn front(&mut self) -> Option<&T> {
        self.refill();
        self.outbox.peek()
    }

    pub fn len(&self) -> usize {
        self.inbox.len() + self.outbox.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn refill(&mut self) {
        if self.outbox.is_empty() {
            while let Some(item) = self.inbox.pop() {
                self.outbox.push(item);
            }
        }
    }
}

/// Maximum of every window of `k` consecutive elements.
///
/// Empty when `k` is zero or larger than the input.
pub fn sliding_window_max<T: Ord + Clone>(data: &[T], k: usize) -> Vec<T> {
    if k == 0 || k > data.len() {
        return vec![];
    }

    // Indices whose values decrease from front to back.
    let mut window: VecDeque<usize> = VecDeque::with_capacity(k);
    let mut maxima = Vec::with_capacity(data.len() - k + 1);
    for (i, value) in data.iter().enumerate() {
        if window.front().is_some_and(|&front| front + k <= i) {
            window.pop_front();
        }
        while window.back().is_some_and(|&back| data[back] <= *value) {
            window.pop_back();
        }
        window.push_back(i);

        if i + 1 >= k {
            if let Some(&front) = window.front() {
                maxima.push(data[front].clone());
            }
        }
    }
    maxima
}

/// Palindrome check that consumes characters from both ends of a deque.
pub fn is_palindrome_deque(text: &str) -> bool {
    let mut chars: VecDeque<char> = text
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    while chars.len() > 1 {
        if chars.pop_front() != chars.pop_back() {
            return false;
        }
    }
    true
}

#[instrument(level = "trace", skip_all)]
pub fn demonstrate<W: Write>(out: &mut W) -> io::Result<()> {
    let mut queue = Queue::new();
    for v in ["first", "second", "third"] {
        queue.enqueue(v);
    }
    writeln!(out, "queue front:       {:?}", queue.front())?;
    let served = queue.dequeue();
    writeln!(out, "dequeue:           {served:?} ({} left)", queue.len())?;

    let mut ring = CircularQueue::with_capacity(3);
    for v in 1..=3 {
        if let Err(e) = ring.enqueue(v) {
            writeln!(out, "ring enqueue {v}: {e}")?;
        }
    }
    match ring.enqueue(4) {
        Ok(()) => writeln!(out, "ring accepted 4")?,
        Err(e) => writeln!(out, "ring enqueue 4:    {e}")?,
    }
    let oldest = ring.dequeue();
    writeln!(out, "ring dequeue:      {oldest:?}")?;
    let accepted = ring.enqueue(4).is_ok();
    writeln!(out, "ring enqueue 4:    {accepted}, peek {:?}", ring.peek())?;

    let mut two_stacks = StackQueue::new();
    two_stacks.enqueue('x');
    two_stacks.enqueue('y');
    let x = two_stacks.dequeue();
    two_stacks.enqueue('z');
    let y = two_stacks.dequeue();
    writeln!(out, "two-stack queue:   {x:?} then {y:?}")?;

    let data = [1, 3, -1, -3, 5, 3, 6, 7];
    writeln!(
        out,
        "window max k=3 of {data:?}: {:?}",
        sliding_window_max(&data, 3)
    )?;
    writeln!(
        out,
        "deque palindrome 'Never odd or even': {}",
        is_palindrome_deque("Never odd or even")
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_fifo() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.front(), Some(&1));
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_circular_wraps_around() {
        let mut ring = CircularQueue::with_capacity(3);
        for v in 1..=3 {
            ring.enqueue(v).unwrap();
        }
        assert!(ring.is_full());
        assert_eq!(
            ring.enqueue(4),
            Err(AlgoError::CapacityExceeded { capacity: 3 })
        );
        assert_eq!(ring.dequeue(), Some(1));
        ring.enqueue(4).unwrap();
        assert_eq!(ring.peek(), Some(&2));
        let drained: Vec<i32> = std::iter::from_fn(|| ring.dequeue()).collect();
        assert_eq!(drained, vec![2, 3, 4]);
        assert!(ring.is_empty());
    }

    #[test]
    fn test_zero_capacity_ring() {
        let mut ring: CircularQueue<u8> = CircularQueue::with_capacity(0);
        assert!(ring.is_full());
        assert!(ring.enqueue(1).is_err());
        assert_eq!(ring.dequeue(), None);
    }

    #[test]
    fn test_stack_queue() {
        let mut queue = StackQueue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), Some(1));
        queue.enqueue(3);
        assert_eq!(queue.front(), Some(&2));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_sliding_window() {
        assert_eq!(
            sliding_window_max(&[1, 3, -1, -3, 5, 3, 6, 7], 3),
            vec![3, 3, 5, 5, 6, 7]
        );
        assert_eq!(sliding_window_max(&[4, 2], 1), vec![4, 2]);
        assert!(sliding_window_max(&[1, 2], 3).is_empty());
        assert!(sliding_window_max(&[1, 2], 0).is_empty());
    }

    #[test]
    fn test_palindrome_deque() {
        assert!(is_palindrome_deque("Never odd or even"));
        assert!(is_palindrome_deque(""));
        assert!(!is_palindrome_deque("queue"));
    }
}
