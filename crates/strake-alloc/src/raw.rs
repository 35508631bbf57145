//! The raw allocation capability trait.

use std::ptr::NonNull;

use crate::error::AllocError;

/// Capability to obtain and return raw memory for elements of type `T`.
///
/// The trait is generic over the element type, so a single allocator type
/// serves every `T` via a blanket implementation, the Rust rendering of a
/// rebindable allocator. Implementors hand out *uninitialized* memory;
/// element construction and destruction are entirely the caller's concern.
///
/// # Equivalence
///
/// Memory obtained from one allocator may be released through another only
/// if the two are [`equivalent`](RawAlloc::equivalent). Handles are expected
/// to be cheap to clone, and a clone must be equivalent to its source; this
/// is what lets an owning container carry one handle per storage block.
pub trait RawAlloc<T> {
    /// Allocate uninitialized memory for exactly `count` elements.
    ///
    /// A zero-size request (zero `count`, or a zero-sized `T`) succeeds
    /// without consuming real memory. On error nothing was allocated.
    fn allocate(&self, count: usize) -> Result<NonNull<T>, AllocError>;

    /// Return memory obtained from a prior [`allocate`](RawAlloc::allocate).
    ///
    /// # Safety
    ///
    /// `ptr` must come from an `allocate(count)` call with this same `count`
    /// on this allocator or one [`equivalent`](RawAlloc::equivalent) to it,
    /// and must not have been released already. The memory must be raw from
    /// the allocator's point of view: any elements constructed in it must
    /// have been destroyed or moved out by the caller.
    unsafe fn release(&self, ptr: NonNull<T>, count: usize);

    /// Whether memory from `self` may be released through `other`.
    fn equivalent(&self, other: &Self) -> bool;
}
