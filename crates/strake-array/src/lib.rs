//! Contiguous growable storage: raw blocks and the [`LinearArray`] container.
//!
//! # Architecture
//!
//! ```text
//! LinearArray<T, A>  (len + public contract)
//! └── Block<T, A>    (one contiguous raw region, power-of-two capacity)
//!     └── A: RawAlloc<T>  (allocation capability, strake-alloc)
//! ```
//!
//! The block owns raw slots; the container decides which prefix of them is
//! live. Every crossing between raw and live memory funnels through the
//! helpers in the private `raw` module or through the scoped gap guard used
//! by the inserting mutators, each of which rolls back its own progress if
//! element construction panics mid-range.
//!
//! This crate and `strake-alloc` are the only two in the workspace that
//! contain `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod array;
pub mod block;
mod raw;

pub use array::LinearArray;
pub use block::{round_capacity, Block};
