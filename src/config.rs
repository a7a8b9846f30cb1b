//! Construction parameters for [`DHeap`](crate::DHeap)
//!
//! [`HeapConfig`] gathers the branching factor, initial capacity and ordering
//! direction, and is the single place where the branching factor is
//! validated. The branching factor is accepted as a signed integer so that
//! zero and negative values are rejected with a [`HeapError`] instead of being
//! unrepresentable.

use std::num::NonZeroUsize;

use crate::dheap::DHeap;
use crate::order::HeapOrder;
use crate::traits::{HeapError, Result};

/// Branching factor used by `DHeap::new` and `DHeap::with_capacity`
pub const DEFAULT_BRANCHING_FACTOR: usize = 2;

/// Initial capacity used by `DHeap::new`
pub const DEFAULT_CAPACITY: usize = 10;

/// Builder-style configuration for a d-ary heap
///
/// # Example
///
/// ```rust
/// use rust_dary_heap::{HeapConfig, HeapOrder};
///
/// let mut heap = HeapConfig::new()
///     .with_branching_factor(4)
///     .with_initial_capacity(32)
///     .with_order(HeapOrder::Min)
///     .build::<u32>()
///     .unwrap();
///
/// heap.add(7).unwrap();
/// heap.add(2).unwrap();
/// assert_eq!(heap.element(), Ok(&2));
/// assert_eq!(heap.branching_factor(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapConfig {
    branching_factor: i64,
    initial_capacity: usize,
    order: HeapOrder,
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            branching_factor: DEFAULT_BRANCHING_FACTOR as i64,
            initial_capacity: DEFAULT_CAPACITY,
            order: HeapOrder::Max,
        }
    }
}

impl HeapConfig {
    /// Binary max-heap with capacity 10
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_branching_factor(mut self, branching_factor: i64) -> Self {
        self.branching_factor = branching_factor;
        self
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_order(mut self, order: HeapOrder) -> Self {
        self.order = order;
        self
    }

    /// The branching factor as configured, before validation
    pub fn branching_factor(&self) -> i64 {
        self.branching_factor
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Checks the branching factor and returns it in validated form
    ///
    /// # Errors
    /// [`HeapError::InvalidBranchingFactor`] if it is below one or does not
    /// fit in `usize`.
    pub fn validate(&self) -> Result<NonZeroUsize> {
        usize::try_from(self.branching_factor)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(HeapError::InvalidBranchingFactor(self.branching_factor))
    }

    /// Builds an empty heap from this configuration
    pub fn build<T: Ord>(self) -> Result<DHeap<T>> {
        DHeap::from_config(self)
    }
}
