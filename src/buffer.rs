//! Contiguous element storage with an explicit capacity
//!
//! [`HeapBuffer`] keeps the heap's elements densely packed in `[0, len)` and
//! tracks its own physical capacity rather than relying on `Vec`'s growth
//! strategy. When an insertion would overflow, the buffer is replaced by a
//! fresh allocation of twice the capacity and the elements are moved across
//! in order, so indices are preserved and no storage is ever shared between
//! the old and new allocations.

use std::ops::Index;

use log::debug;

/// Owned, growable, densely packed storage for heap elements
#[derive(Debug, Clone)]
pub struct HeapBuffer<T> {
    items: Vec<T>,
    /// Logical capacity; `items.len() <= capacity` always holds
    capacity: usize,
}

impl<T> HeapBuffer<T> {
    /// Creates an empty buffer able to hold `capacity` elements before growing
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of live elements
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements the buffer holds before it has to grow
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Appends `item` at index `len`, growing first if full
    ///
    /// Returns the index the item was stored at.
    pub fn push(&mut self, item: T) -> usize {
        if self.is_full() {
            self.grow();
        }
        let index = self.items.len();
        self.items.push(item);
        index
    }

    /// Removes the element at `index`, moving the last element into its slot
    ///
    /// Returns `None` if `index` is out of bounds.
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.swap_remove(index))
        } else {
            None
        }
    }

    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// The live elements in storage order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Drops every live element, keeping the capacity
    ///
    /// Returns how many elements were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.items.len();
        self.items.clear();
        dropped
    }

    /// Doubles the capacity (an empty capacity grows to one)
    fn grow(&mut self) {
        let new_capacity = self.capacity.saturating_mul(2).max(1);
        let mut grown = Vec::with_capacity(new_capacity);
        grown.append(&mut self.items);
        debug!(
            "growing heap buffer from {} to {} slots",
            self.capacity, new_capacity
        );
        self.items = grown;
        self.capacity = new_capacity;
    }
}

impl<T> Index<usize> for HeapBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}
