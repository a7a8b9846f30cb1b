//! d-ary Heaps for Rust
//!
//! This crate provides [`DHeap`], an array-backed priority queue in which every
//! node has up to `d` children. The branching factor and the ordering direction
//! (max-first or min-first) are chosen at construction and fixed afterwards.
//!
//! # Features
//!
//! - **Configurable branching factor**: any `d >= 1`; `d = 2` is the classic binary heap
//! - **Max or min ordering**: one implementation, direction picked via [`HeapOrder`]
//! - **Explicit capacity**: storage starts at a chosen size and doubles when full
//! - **Typed errors**: empty-heap access, absent items and invalid branching
//!   factors are reported as [`HeapError`]
//!
//! # Example
//!
//! ```rust
//! use rust_dary_heap::{DHeap, HeapError};
//!
//! let mut heap = DHeap::new();
//! heap.add(25).unwrap();
//! heap.add(35).unwrap();
//! heap.add(15).unwrap();
//!
//! assert_eq!(heap.element(), Ok(&35));
//! assert_eq!(heap.remove(), Ok(35));
//! assert_eq!(heap.size(), 2);
//!
//! heap.clear();
//! assert_eq!(heap.remove(), Err(HeapError::Empty));
//! ```

pub mod buffer;
pub mod config;
pub mod dheap;
pub mod index;
pub mod order;
pub mod traits;

pub use config::HeapConfig;
pub use dheap::DHeap;
pub use order::HeapOrder;
pub use traits::{Heap, HeapError, Result};
