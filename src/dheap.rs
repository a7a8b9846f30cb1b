//! d-ary heap backed by a contiguous buffer
//!
//! A d-ary heap generalizes the binary heap: every node has up to `d`
//! children, laid out level by level in one array. A larger `d` makes the tree
//! shallower, which makes insertion cheaper (fewer levels to bubble up
//! through) and removal more expensive (more children to compare at each
//! level).
//!
//! The same implementation serves max-heaps and min-heaps; the direction is
//! chosen at construction through [`HeapOrder`].
//!
//! # Time Complexity
//!
//! | Operation  | Complexity                 |
//! |------------|----------------------------|
//! | `add`      | O(log_d n), amortized over growth |
//! | `remove`   | O(d · log_d n)             |
//! | `element`  | O(1)                       |
//! | `size`     | O(1)                       |
//! | `clear`    | O(n)                       |
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heap::{DHeap, HeapError, HeapOrder};
//!
//! let mut heap = DHeap::with_config(3, 16, HeapOrder::Min).unwrap();
//! heap.add(10).unwrap();
//! heap.add(5).unwrap();
//! heap.add(15).unwrap();
//!
//! assert_eq!(heap.element(), Ok(&5));
//! assert_eq!(heap.remove(), Ok(5));
//! assert_eq!(heap.element(), Ok(&10));
//!
//! assert_eq!(heap.add(None), Err(HeapError::NullItem));
//! assert_eq!(heap.size(), 2);
//! ```

use std::num::NonZeroUsize;

use log::{debug, trace};

use crate::buffer::HeapBuffer;
use crate::config::{HeapConfig, DEFAULT_BRANCHING_FACTOR, DEFAULT_CAPACITY};
use crate::index;
use crate::order::HeapOrder;
use crate::traits::{Heap, HeapError, Result};

const BINARY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_BRANCHING_FACTOR) {
    Some(d) => d,
    None => panic!("default branching factor must be non-zero"),
};

/// A d-ary heap with configurable branching factor and ordering
///
/// The branching factor and ordering direction are fixed for the lifetime of
/// the heap. Between public calls the heap property always holds: no element
/// is better (per the ordering) than its parent.
#[derive(Debug, Clone)]
pub struct DHeap<T> {
    storage: HeapBuffer<T>,
    branching_factor: NonZeroUsize,
    order: HeapOrder,
}

impl<T: Ord> DHeap<T> {
    /// Binary max-heap with an initial capacity of 10
    pub fn new() -> Self {
        Self::from_parts(BINARY, DEFAULT_CAPACITY, HeapOrder::Max)
    }

    /// Binary max-heap with the given initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(BINARY, capacity, HeapOrder::Max)
    }

    /// Heap with branching factor `d`, the given capacity and ordering
    ///
    /// # Errors
    /// [`HeapError::InvalidBranchingFactor`] if `d < 1`.
    pub fn with_config(d: i64, capacity: usize, order: HeapOrder) -> Result<Self> {
        HeapConfig::new()
            .with_branching_factor(d)
            .with_initial_capacity(capacity)
            .with_order(order)
            .build()
    }

    /// Max-heap with branching factor `d` and the default capacity
    pub fn max_heap(d: i64) -> Result<Self> {
        Self::with_config(d, DEFAULT_CAPACITY, HeapOrder::Max)
    }

    /// Min-heap with branching factor `d` and the default capacity
    pub fn min_heap(d: i64) -> Result<Self> {
        Self::with_config(d, DEFAULT_CAPACITY, HeapOrder::Min)
    }

    /// Builds an empty heap from a [`HeapConfig`]
    ///
    /// # Errors
    /// [`HeapError::InvalidBranchingFactor`] if the configured branching
    /// factor is below one.
    pub fn from_config(config: HeapConfig) -> Result<Self> {
        let d = config.validate()?;
        Ok(Self::from_parts(d, config.initial_capacity(), config.order()))
    }

    fn from_parts(branching_factor: NonZeroUsize, capacity: usize, order: HeapOrder) -> Self {
        debug!(
            "creating {}-ary {} heap with capacity {}",
            branching_factor, order, capacity
        );
        Self {
            storage: HeapBuffer::with_capacity(capacity),
            branching_factor,
            order,
        }
    }

    /// Number of elements in the heap
    pub fn size(&self) -> usize {
        self.storage.len()
    }

    /// The root element: the greatest for a max-heap, the least for a min-heap
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap has no elements.
    pub fn element(&self) -> Result<&T> {
        self.storage.first().ok_or(HeapError::Empty)
    }

    /// Inserts an element
    ///
    /// Accepts either a `T` or an `Option<T>`; `None` is rejected before the
    /// heap is touched.
    ///
    /// # Errors
    /// [`HeapError::NullItem`] if `item` is `None`.
    pub fn add(&mut self, item: impl Into<Option<T>>) -> Result<()> {
        let item = item.into().ok_or(HeapError::NullItem)?;
        self.insert(item);
        Ok(())
    }

    /// Removes and returns the root element
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap has no elements.
    pub fn remove(&mut self) -> Result<T> {
        self.take_root().ok_or(HeapError::Empty)
    }

    /// Drops all elements; capacity, branching factor and ordering are kept
    pub fn clear(&mut self) {
        let dropped = self.storage.clear();
        trace!("cleared {} elements from heap", dropped);
    }

    /// The branching factor `d`
    pub fn branching_factor(&self) -> usize {
        self.branching_factor.get()
    }

    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Number of elements the heap holds before its storage has to grow
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Checks that no element is better than its parent
    ///
    /// Always true between public calls; exposed for tests and verification.
    pub fn is_heap(&self) -> bool {
        (1..self.storage.len()).all(|i| {
            let parent = index::parent(i, self.branching_factor);
            !self.order.is_better(&self.storage[i], &self.storage[parent])
        })
    }

    fn insert(&mut self, item: T) {
        let index = self.storage.push(item);
        self.bubble_up(index);
    }

    fn take_root(&mut self) -> Option<T> {
        let root = self.storage.swap_remove(0)?;
        if !self.storage.is_empty() {
            self.trickle_down(0);
        }
        Some(root)
    }

    /// Moves the element at `index` towards the root while it beats its parent
    fn bubble_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = index::parent(index, self.branching_factor);
            if self
                .order
                .is_better(&self.storage[index], &self.storage[parent])
            {
                self.storage.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the element at `index` towards the leaves while a child beats it
    ///
    /// Among equally good children the one with the lowest index wins.
    fn trickle_down(&mut self, mut index: usize) {
        let len = self.storage.len();
        loop {
            let mut best = index;
            for child in index::children(index, self.branching_factor, len) {
                if self.order.is_better(&self.storage[child], &self.storage[best]) {
                    best = child;
                }
            }

            if best == index {
                break;
            }
            self.storage.swap(index, best);
            index = best;
        }
    }
}

impl<T: Ord> Default for DHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Heap<T> for DHeap<T> {
    fn new() -> Self {
        DHeap::new()
    }

    fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    fn len(&self) -> usize {
        self.size()
    }

    fn push(&mut self, item: T) {
        self.insert(item);
    }

    fn peek(&self) -> Option<&T> {
        self.storage.first()
    }

    fn pop(&mut self) -> Option<T> {
        self.take_root()
    }

    fn clear(&mut self) {
        DHeap::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let heap: DHeap<i32> = DHeap::new();
        assert_eq!(heap.branching_factor(), 2);
        assert_eq!(heap.capacity(), 10);
        assert_eq!(heap.order(), HeapOrder::Max);
        assert_eq!(heap.size(), 0);

        let heap: DHeap<i32> = DHeap::with_capacity(100);
        assert_eq!(heap.branching_factor(), 2);
        assert_eq!(heap.capacity(), 100);
        assert_eq!(heap.order(), HeapOrder::Max);
    }

    #[test]
    fn test_invalid_branching_factor() {
        assert_eq!(
            DHeap::<i32>::with_config(0, 10, HeapOrder::Max).unwrap_err(),
            HeapError::InvalidBranchingFactor(0)
        );
        assert_eq!(
            DHeap::<i32>::min_heap(-1).unwrap_err(),
            HeapError::InvalidBranchingFactor(-1)
        );
        assert!(DHeap::<i32>::with_config(2, 10, HeapOrder::Max).is_ok());
        assert!(DHeap::<i32>::with_config(1, 0, HeapOrder::Min).is_ok());
    }

    #[test]
    fn test_empty_errors() {
        let mut heap: DHeap<i32> = DHeap::new();
        assert_eq!(heap.element(), Err(HeapError::Empty));
        assert_eq!(heap.remove(), Err(HeapError::Empty));
        assert_eq!(heap.size(), 0);
    }

    #[test]
    fn test_null_item_rejected() {
        let mut heap: DHeap<i32> = DHeap::new();
        heap.add(1).unwrap();
        assert_eq!(heap.add(None), Err(HeapError::NullItem));
        assert_eq!(heap.size(), 1);
        assert_eq!(heap.add(Some(4)), Ok(()));
        assert_eq!(heap.element(), Ok(&4));
    }

    #[test]
    fn test_bubble_up_max() {
        let mut heap = DHeap::new();
        let mut roots = Vec::new();
        for value in [25, 35, 15, 45] {
            heap.add(value).unwrap();
            roots.push(*heap.element().unwrap());
        }
        assert_eq!(roots, vec![25, 35, 35, 45]);
        assert_eq!(heap.size(), 4);
        assert_eq!(heap.storage.as_slice(), &[45, 35, 15, 25]);
    }

    #[test]
    fn test_trickle_down_min() {
        let mut heap = DHeap::min_heap(2).unwrap();
        for value in [10, 5, 15] {
            heap.add(value).unwrap();
        }
        assert_eq!(heap.element(), Ok(&5));
        assert_eq!(heap.remove(), Ok(5));
        assert_eq!(heap.element(), Ok(&10));
        assert!(heap.is_heap());
    }

    /// Ordered by `key` only, so equal keys stay distinguishable by `tag`
    #[derive(Debug, Clone, Copy)]
    struct Tagged {
        key: i32,
        tag: char,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.key.cmp(&other.key)
        }
    }

    #[test]
    fn test_trickle_down_prefers_lowest_index_on_ties() {
        let mut heap = DHeap::with_config(3, 8, HeapOrder::Max).unwrap();
        for (key, tag) in [(9, 'r'), (5, 'a'), (5, 'b'), (5, 'c'), (1, 'z')] {
            heap.add(Tagged { key, tag }).unwrap();
        }
        let tags = |heap: &DHeap<Tagged>| -> String {
            heap.storage.as_slice().iter().map(|t| t.tag).collect()
        };
        assert_eq!(tags(&heap), "rabcz");

        assert_eq!(heap.remove().map(|t| t.tag), Ok('r'));
        // 'z' moved to the root and sank into the first of three equal children
        assert_eq!(tags(&heap), "azbc");
        assert!(heap.is_heap());
    }

    #[test]
    fn test_equal_child_does_not_swap() {
        let mut heap = DHeap::max_heap(2).unwrap();
        for value in [7, 7, 7] {
            heap.add(value).unwrap();
        }
        assert_eq!(heap.remove(), Ok(7));
        assert_eq!(heap.storage.as_slice(), &[7, 7]);
    }

    #[test]
    fn test_growth_keeps_contents() {
        let mut heap = DHeap::with_capacity(1);
        for i in 0..33 {
            heap.add(i).unwrap();
            assert!(heap.is_heap());
        }
        assert_eq!(heap.capacity(), 64);
        assert_eq!(heap.size(), 33);
        assert_eq!(heap.element(), Ok(&32));
    }

    #[test]
    fn test_clear_keeps_configuration() {
        let mut heap = DHeap::with_config(5, 4, HeapOrder::Min).unwrap();
        for i in 0..20 {
            heap.add(i).unwrap();
        }
        let capacity = heap.capacity();
        heap.clear();
        assert_eq!(heap.size(), 0);
        assert_eq!(heap.capacity(), capacity);
        assert_eq!(heap.branching_factor(), 5);
        assert_eq!(heap.order(), HeapOrder::Min);
        assert_eq!(heap.element(), Err(HeapError::Empty));

        heap.add(3).unwrap();
        heap.add(1).unwrap();
        assert_eq!(heap.remove(), Ok(1));
    }

    #[test]
    fn test_unary_heap_is_sorted_chain() {
        let mut heap = DHeap::min_heap(1).unwrap();
        for value in [4, 8, 1, 9, 3] {
            heap.add(value).unwrap();
        }
        assert_eq!(heap.storage.as_slice(), &[1, 3, 4, 8, 9]);
        let drained: Vec<_> = std::iter::from_fn(|| heap.remove().ok()).collect();
        assert_eq!(drained, vec![1, 3, 4, 8, 9]);
    }

    #[test]
    fn test_trait_surface() {
        let mut heap: DHeap<&str> = Heap::new();
        assert!(Heap::is_empty(&heap));
        heap.push("banana");
        heap.push("apple");
        heap.push("cherry");
        assert_eq!(Heap::len(&heap), 3);
        assert_eq!(heap.peek(), Some(&"cherry"));
        assert_eq!(heap.pop(), Some("cherry"));
        Heap::clear(&mut heap);
        assert_eq!(heap.pop(), None);
    }
}
