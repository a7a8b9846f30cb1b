//! Index arithmetic for an array-embedded d-ary tree
//!
//! Node `i` has its children at `d*i + 1 ..= d*i + d` and its parent at
//! `(i - 1) / d`. With `d == 1` the tree degenerates into a chain.

use std::num::NonZeroUsize;
use std::ops::Range;

/// Index of the parent of `index`
///
/// `index` must not be the root.
#[inline(always)]
pub fn parent(index: usize, d: NonZeroUsize) -> usize {
    debug_assert!(index > 0, "the root has no parent");
    (index - 1) / d.get()
}

/// Index of the first child of `index`, saturating on overflow
#[inline(always)]
pub fn first_child(index: usize, d: NonZeroUsize) -> usize {
    index.saturating_mul(d.get()).saturating_add(1)
}

/// Indices of the live children of `index` in a heap of `len` elements
///
/// Empty when `index` is a leaf.
#[inline]
pub fn children(index: usize, d: NonZeroUsize, len: usize) -> Range<usize> {
    let first = first_child(index, d).min(len);
    let end = first.saturating_add(d.get()).min(len);
    first..end
}
