//! Priority frontier for uniform-cost searches.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

/// Path cost. Edge weights are never negative.
pub type Cost = u64;

/// A min-priority collection of items awaiting expansion.
///
/// Pushing an item that is already queued does not remove the earlier
/// entry: both coexist and [`pop`](Frontier::pop) hands back the priority
/// each was pushed with, so a search can recognise and skip stale entries.
pub trait Frontier<T> {
    /// Queue `item` with the given priority.
    fn push(&mut self, item: T, priority: Cost);

    /// Remove and return the entry with the smallest priority.
    fn pop(&mut self) -> Result<(T, Cost), FrontierError>;

    /// Whether no entries remain.
    fn is_empty(&self) -> bool;

    /// Number of queued entries, stale ones included.
    fn len(&self) -> usize;
}

/// Error returned when popping from an empty frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierError {
    Empty,
}

impl fmt::Display for FrontierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("frontier: pop from an empty frontier"),
        }
    }
}

impl std::error::Error for FrontierError {}

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// priority first, and the earliest push among equal priorities.
struct Entry<T> {
    priority: Cost,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lazy-deletion frontier backed by a binary heap.
pub struct HeapFrontier<T> {
    heap: BinaryHeap<Entry<T>>,
    seq: u64,
}

impl<T> HeapFrontier<T> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }
}

impl<T> Default for HeapFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for HeapFrontier<T> {
    fn push(&mut self, item: T, priority: Cost) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            item,
        });
    }

    fn pop(&mut self) -> Result<(T, Cost), FrontierError> {
        self.heap
            .pop()
            .map(|e| (e.item, e.priority))
            .ok_or(FrontierError::Empty)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }
}
