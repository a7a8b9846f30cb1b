//! Common traits and error type for heap data structures
//!
//! - [`Heap`]: the priority-queue surface shared by heap implementations
//! - [`HeapError`]: failures reported by the fallible `DHeap` operations
//!
//! The [`Heap`] trait follows Rust's standard heap API patterns (`push`,
//! `pop`, `peek` returning `Option`), while the inherent `DHeap` methods
//! (`add`, `remove`, `element`) report misuse through [`HeapError`].

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The branching factor was below one (or did not fit in `usize`)
    #[error("invalid branching factor {0}: must be at least 1")]
    InvalidBranchingFactor(i64),
    /// The root was requested from a heap with no elements
    #[error("heap is empty")]
    Empty,
    /// An absent value was offered for insertion
    #[error("cannot add an absent item to the heap")]
    NullItem,
}

/// Result alias for fallible heap operations
pub type Result<T> = std::result::Result<T, HeapError>;

/// Base trait for priority queue data structures
///
/// Elements are their own priority: `T: Ord` decides which element sits at
/// the root. Whether the root is the greatest or the least element is up to
/// the implementation.
///
/// # Example
///
/// ```rust
/// use rust_dary_heap::{DHeap, Heap};
///
/// let mut heap: DHeap<i32> = Heap::new();
/// heap.push(3);
/// heap.push(7);
/// heap.push(5);
///
/// assert_eq!(heap.peek(), Some(&7));
/// assert_eq!(heap.pop(), Some(7));
/// assert_eq!(heap.len(), 2);
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) for array-backed heaps, amortized over buffer growth.
    fn push(&mut self, item: T);

    /// Returns the root element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the root element
    fn pop(&mut self) -> Option<T>;

    /// Removes every element, keeping allocated capacity
    fn clear(&mut self);
}
