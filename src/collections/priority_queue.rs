use crate::{Error, Result};
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;
use std::hash::Hash;

/// A min-priority queue addressed by values.
///
/// Values are unique: enqueuing a value which is already queued re-prioritizes it.
/// Among equal priorities, the value whose priority was set earliest comes out first.
///
/// | Operation      | Complexity       |
/// | -------------- | ---------------- |
/// | `enqueue`      | $O(\log n)$      |
/// | `dequeue`      | $O(\log n)$      |
/// | `decrease_key` | $O(\log n)$      |
/// | `peek`         | $O(1)$           |
/// | `priority`     | $O(1)$ expected  |
pub struct PriorityQueue<T, P>
where
    T: Hash + Eq,
    P: Ord,
{
    heap: KeyedPriorityQueue<T, Reverse<(P, u64)>, RandomState>,
    sequence: u64,
}

impl<T, P> Default for PriorityQueue<T, P>
where
    T: Hash + Eq,
    P: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> PriorityQueue<T, P>
where
    T: Hash + Eq,
    P: Ord,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: KeyedPriorityQueue::with_capacity_and_hasher(capacity, RandomState::new()),
            sequence: 0,
        }
    }

    fn next_sequence(&mut self) -> u64 {
        let cur = self.sequence;
        self.sequence += 1;
        cur
    }

    /// Queues `value` with `priority`.
    ///
    /// Returns the previous priority if `value` was already queued.
    pub fn enqueue(&mut self, value: T, priority: P) -> Option<P> {
        let seq = self.next_sequence();
        self.heap
            .push(value, Reverse((priority, seq)))
            .map(|Reverse((p, _))| p)
    }

    /// Removes and returns the value of the least priority.
    pub fn dequeue(&mut self) -> Option<T> {
        self.dequeue_with_priority().map(|(v, _)| v)
    }

    pub fn dequeue_with_priority(&mut self) -> Option<(T, P)> {
        self.heap.pop().map(|(v, Reverse((p, _)))| (v, p))
    }

    pub fn peek(&self) -> Option<(&T, &P)> {
        self.heap.peek().map(|(v, Reverse((p, _)))| (v, p))
    }

    pub fn priority(&self, value: &T) -> Option<&P> {
        self.heap.get_priority(value).map(|Reverse((p, _))| p)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.heap.get_priority(value).is_some()
    }

    /// Lowers the priority of a queued value.
    ///
    /// Setting an equal priority is allowed and moves the value behind others of that priority.
    pub fn decrease_key(&mut self, value: &T, priority: P) -> Result<()> {
        match self.priority(value) {
            None => return Err(Error::NotQueued),
            Some(cur) if *cur < priority => return Err(Error::PriorityIncreased),
            Some(_) => {}
        }
        let seq = self.next_sequence();
        self.heap
            .set_priority(value, Reverse((priority, seq)))
            .map_err(|_| Error::NotQueued)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T, P> Extend<(T, P)> for PriorityQueue<T, P>
where
    T: Hash + Eq,
    P: Ord,
{
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.enqueue(value, priority);
        }
    }
}
