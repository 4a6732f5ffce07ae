/*
Minimum-priority queues over vertex ids.

LazyQueue never updates an entry: a better priority for a queued vertex is a second entry, and the
consumer discards whichever entry for that vertex comes out after the first. DecreaseKeyQueue keeps at
most one entry per queued vertex and lowers its key in place.
*/

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use clap::ValueEnum;
use orx_priority_queue::{BinaryHeapWithMap, PriorityQueue, PriorityQueueDecKey};

use crate::graph::VertexId;

pub trait FrontierQueue<P> {
    fn insert(&mut self, vertex: VertexId, priority: P);

    /// Removes the entry with the smallest priority. Ties come out in an unspecified order.
    ///
    /// Panics when the queue is empty; callers check [`FrontierQueue::is_empty`] first.
    fn extract_min(&mut self) -> (VertexId, P);

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;
}

/// Which queue drives the priority-ordered solvers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum QueueKind {
    /// Duplicate insertion, stale entries skipped on extraction.
    #[default]
    Lazy,
    /// One entry per vertex, keys lowered in place.
    DecreaseKey,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Entry<P> {
    priority: P,
    vertex: VertexId,
}

impl<P: PartialOrd> Eq for Entry<P> {}

// Min-heap by priority
impl<P: PartialOrd> Ord for Entry<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // reverse ordering for min-heap
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl<P: PartialOrd> PartialOrd for Entry<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug)]
pub struct LazyQueue<P> {
    heap: BinaryHeap<Entry<P>>,
}

impl<P: PartialOrd> LazyQueue<P> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }
}

impl<P: PartialOrd> Default for LazyQueue<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PartialOrd> FrontierQueue<P> for LazyQueue<P> {
    fn insert(&mut self, vertex: VertexId, priority: P) {
        self.heap.push(Entry { priority, vertex });
    }

    fn extract_min(&mut self) -> (VertexId, P) {
        match self.heap.pop() {
            Some(Entry { priority, vertex }) => (vertex, priority),
            None => panic!("extract_min called on an empty queue"),
        }
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[derive(Debug)]
pub struct DecreaseKeyQueue<P>
where
    P: PartialOrd + Clone,
{
    pq: BinaryHeapWithMap<VertexId, P>,
}

impl<P: PartialOrd + Clone> DecreaseKeyQueue<P> {
    pub fn new() -> Self {
        Self {
            pq: BinaryHeapWithMap::new(),
        }
    }
}

impl<P: PartialOrd + Clone> Default for DecreaseKeyQueue<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PartialOrd + Clone> FrontierQueue<P> for DecreaseKeyQueue<P> {
    /// Pushes a vertex that is not queued, or lowers its key if `priority` is smaller.
    fn insert(&mut self, vertex: VertexId, priority: P) {
        self.pq.decrease_key_or_push(&vertex, priority);
    }

    fn extract_min(&mut self) -> (VertexId, P) {
        match self.pq.pop() {
            Some(entry) => entry,
            None => panic!("extract_min called on an empty queue"),
        }
    }

    fn is_empty(&self) -> bool {
        self.pq.is_empty()
    }

    fn len(&self) -> usize {
        self.pq.len()
    }
}
