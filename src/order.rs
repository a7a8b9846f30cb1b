//! Ordering direction for d-ary heaps
//!
//! A single comparison primitive, [`HeapOrder::is_better`], decides whether one
//! element belongs closer to the root than another. Bubble-up and trickle-down
//! are written only against this primitive, so max-heaps and min-heaps share
//! one code path.

use std::fmt;

/// Which element a heap keeps at its root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeapOrder {
    /// The greatest element is at the root
    #[default]
    Max,
    /// The least element is at the root
    Min,
}

impl HeapOrder {
    /// Maps the classic `is_max_heap` flag onto an ordering direction
    pub fn from_max_flag(is_max: bool) -> Self {
        if is_max {
            HeapOrder::Max
        } else {
            HeapOrder::Min
        }
    }

    /// Returns true for [`HeapOrder::Max`]
    pub fn is_max(self) -> bool {
        self == HeapOrder::Max
    }

    /// Returns true if `a` is strictly better than `b`
    ///
    /// For `Max` this is `a > b`, for `Min` it is `a < b`. Equal elements are
    /// never better than each other.
    #[inline]
    pub fn is_better<T: Ord + ?Sized>(self, a: &T, b: &T) -> bool {
        match self {
            HeapOrder::Max => a > b,
            HeapOrder::Min => a < b,
        }
    }
}

impl fmt::Display for HeapOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapOrder::Max => write!(f, "max-first"),
            HeapOrder::Min => write!(f, "min-first"),
        }
    }
}
