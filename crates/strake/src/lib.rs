//! strake: a contiguous growable sequence container with pluggable raw
//! allocation, plus an in-place heap sort.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the strake sub-crates. For most users, adding `strake` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strake::prelude::*;
//!
//! # fn main() -> Result<(), AllocError> {
//! let mut arr: LinearArray<i32> = LinearArray::from_slice(&[5, 3, 8, 1, 9])?;
//! arr.push(4)?;
//!
//! heap_sort(arr.as_mut_slice());
//! assert_eq!(arr.as_slice(), &[1, 3, 4, 5, 8, 9]);
//!
//! heap_sort(&mut Reversed::new(arr.as_mut_slice()));
//! assert_eq!(arr.as_slice(), &[9, 8, 5, 4, 3, 1]);
//! # Ok(())
//! # }
//! ```
//!
//! Substituting an allocator is a type parameter away:
//!
//! ```rust
//! use strake::alloc::TallyAlloc;
//! use strake::prelude::*;
//!
//! let tally = TallyAlloc::new();
//! let arr = LinearArray::from_slice_in(&[1, 2, 3], tally.clone()).unwrap();
//! assert_eq!(tally.live_allocations(), 1);
//! drop(arr);
//! assert_eq!(tally.live_allocations(), 0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `strake-array` | [`LinearArray`](array::LinearArray), storage blocks, capacity policy |
//! | [`alloc`] | `strake-alloc` | [`RawAlloc`](alloc::RawAlloc), [`SystemAlloc`](alloc::SystemAlloc), [`TallyAlloc`](alloc::TallyAlloc) |
//! | [`sort`] | `strake-sort` | [`heap_sort`](sort::heap_sort), [`SortRange`](sort::SortRange), [`Reversed`](sort::Reversed) |

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Allocation capability and allocators (`strake-alloc`).
pub use strake_alloc as alloc;

/// The container, storage blocks, and capacity policy (`strake-array`).
pub use strake_array as array;

/// Heap sort over random-access ranges (`strake-sort`).
pub use strake_sort as sort;

/// Common imports for typical strake usage.
///
/// ```rust
/// use strake::prelude::*;
/// ```
pub mod prelude {
    pub use strake_alloc::{AllocError, RawAlloc, SystemAlloc};
    pub use strake_array::LinearArray;
    pub use strake_sort::{heap_sort, Reversed, SortRange};
}
