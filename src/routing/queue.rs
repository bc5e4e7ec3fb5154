//! Minimum-ordered queue for the cost-ordered searches

use std::{cmp::Ordering, collections::BinaryHeap};

#[derive(Debug, Clone)]
struct Entry<T> {
    element: T,
    priority: f64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<T> Eq for Entry<T> {}

// Implement Ord for Entry to use in BinaryHeap
impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by priority (reversed from standard Rust BinaryHeap)
        other.priority.total_cmp(&self.priority)
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary min-heap over (element, priority) pairs, lower priority first
///
/// The queue does not deduplicate: when a search finds a better cost for an
/// element it enqueues a second entry instead of decreasing a key, and
/// filters the stale entry out at dequeue time (lazy deletion). Tie order
/// among equal priorities is unspecified and must not be relied upon.
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
}

impl<T> MinPriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Insert an element with the given priority; O(log n)
    pub fn enqueue(&mut self, element: T, priority: f64) {
        self.heap.push(Entry { element, priority });
    }

    /// Remove and return the minimum-priority element; O(log n)
    ///
    /// Returns `None` on an empty queue.
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.element)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T> Default for MinPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeues_in_priority_order() {
        let mut queue = MinPriorityQueue::new();
        queue.enqueue("far", 9.5);
        queue.enqueue("near", 1.0);
        queue.enqueue("mid", 4.2);

        assert_eq!(queue.dequeue(), Some("near"));
        assert_eq!(queue.dequeue(), Some("mid"));
        assert_eq!(queue.dequeue(), Some("far"));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn duplicate_elements_are_kept() {
        let mut queue = MinPriorityQueue::new();
        queue.enqueue("n", 5.0);
        queue.enqueue("n", 2.0);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue(), Some("n"));
        assert_eq!(queue.dequeue(), Some("n"));
    }

    #[test]
    fn empty_queue_signals_none() {
        let mut queue: MinPriorityQueue<u32> = MinPriorityQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn clear_discards_all_entries() {
        let mut queue = MinPriorityQueue::new();
        queue.enqueue(1, 1.0);
        queue.enqueue(2, 2.0);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
    }
}
