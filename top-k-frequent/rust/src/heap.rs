use std::{
    cmp::Reverse,
    collections::{BinaryHeap, VecDeque},
};

/// Min-heap that retains at most `capacity` of the largest items pushed into it.
///
/// Once full, an item is admitted only if it is strictly greater than the
/// current root, which is then evicted.
///
/// ```
/// use top_k_frequent::heap::BoundedMinHeap;
///
/// let mut heap = BoundedMinHeap::new(2);
/// for n in [5, 1, 9, 3] {
///     heap.push(n);
/// }
///
/// assert_eq!(vec![9, 5], heap.into_descending_vec());
/// ```
#[derive(Debug, Clone)]
pub struct BoundedMinHeap<T: Ord> {
    heap: BinaryHeap<Reverse<T>>,
    capacity: usize,
}

impl<T: Ord> BoundedMinHeap<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            capacity,
        }
    }

    /// Offers `item` to the heap, returning whichever item did not make it:
    /// the evicted root, the rejected `item`, or `None` if there was room.
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(item));
            return None;
        }

        let admit = matches!(self.heap.peek(), Some(Reverse(min)) if item > *min);
        if !admit {
            return Some(item);
        }

        let evicted = self.heap.pop().map(|Reverse(min)| min);
        self.heap.push(Reverse(item));
        evicted
    }

    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(min)| min)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(min)| min)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drains the heap, largest first.
    ///
    /// Each popped minimum goes into the lowest unfilled slot, working from
    /// the back of the output toward the front.
    pub fn into_descending_vec(mut self) -> Vec<T> {
        let mut result = VecDeque::with_capacity(self.heap.len());
        while let Some(min) = self.pop() {
            result.push_front(min);
        }

        result.into()
    }
}
