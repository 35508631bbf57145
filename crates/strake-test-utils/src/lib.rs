//! Test fixtures and instrumented types for strake development.
//!
//! Provides element types whose constructions, clones, and drops are
//! observable ([`LiveCounter`]/[`Tracked`]), an element whose clone fails
//! deterministically after N successes ([`CloneFuse`]/[`CloneBomb`]), and an
//! allocator that starts failing after N allocations ([`FailingAlloc`]).

#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cmp::Ordering as CmpOrdering;
use std::ptr::NonNull;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use strake_alloc::{AllocError, RawAlloc, SystemAlloc};

/// Handle that counts live [`Tracked`] instances.
///
/// Every construction and clone of a tracked element increments the count;
/// every drop decrements it. A balanced count after a container is dropped
/// is the construction/destruction balance check.
#[derive(Clone, Debug, Default)]
pub struct LiveCounter {
    live: Arc<AtomicUsize>,
}

impl LiveCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked instances currently alive.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::Relaxed)
    }

    /// Create a tracked element counted by this handle.
    pub fn track(&self, value: i32) -> Tracked {
        self.live.fetch_add(1, Ordering::Relaxed);
        Tracked {
            value,
            live: Arc::clone(&self.live),
        }
    }
}

/// Element whose lifetime is tallied by a [`LiveCounter`].
///
/// Compares and orders by its value only.
#[derive(Debug)]
pub struct Tracked {
    value: i32,
    live: Arc<AtomicUsize>,
}

impl Tracked {
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.live.fetch_add(1, Ordering::Relaxed);
        Self {
            value: self.value,
            live: Arc::clone(&self.live),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::Relaxed);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<CmpOrdering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> CmpOrdering {
        self.value.cmp(&other.value)
    }
}

/// Handle controlling a family of [`CloneBomb`] elements.
///
/// The fuse grants a fixed budget of successful clones; the clone that
/// exceeds it panics. Live instances are tallied like [`Tracked`], so leak
/// checks work across the panic.
#[derive(Clone, Debug)]
pub struct CloneFuse {
    remaining: Arc<AtomicUsize>,
    live: Arc<AtomicUsize>,
}

impl CloneFuse {
    /// Allow `budget` successful clones before panicking.
    pub fn new(budget: usize) -> Self {
        Self {
            remaining: Arc::new(AtomicUsize::new(budget)),
            live: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of bomb instances currently alive.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::Relaxed)
    }

    /// Create an element counted against this fuse.
    pub fn bomb(&self, value: i32) -> CloneBomb {
        self.live.fetch_add(1, Ordering::Relaxed);
        CloneBomb {
            value,
            remaining: Arc::clone(&self.remaining),
            live: Arc::clone(&self.live),
        }
    }
}

/// Element whose clone panics once the shared budget is spent.
#[derive(Debug)]
pub struct CloneBomb {
    value: i32,
    remaining: Arc<AtomicUsize>,
    live: Arc<AtomicUsize>,
}

impl CloneBomb {
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Clone for CloneBomb {
    fn clone(&self) -> Self {
        let spent = self
            .remaining
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1));
        if spent.is_err() {
            panic!("clone budget exhausted");
        }
        self.live.fetch_add(1, Ordering::Relaxed);
        Self {
            value: self.value,
            remaining: Arc::clone(&self.remaining),
            live: Arc::clone(&self.live),
        }
    }
}

impl Drop for CloneBomb {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::Relaxed);
    }
}

impl PartialEq for CloneBomb {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for CloneBomb {}

/// Allocator that starts failing after a fixed number of successful
/// allocations.
///
/// Delegates real memory traffic to [`SystemAlloc`]. Clones share the
/// budget and are equivalent; releases always succeed, so a container can
/// still unwind cleanly after the allocator dries up.
#[derive(Clone, Debug)]
pub struct FailingAlloc {
    remaining: Arc<AtomicUsize>,
}

impl FailingAlloc {
    /// Allow `budget` successful allocations, then fail every request.
    pub fn new(budget: usize) -> Self {
        Self {
            remaining: Arc::new(AtomicUsize::new(budget)),
        }
    }
}

impl<T> RawAlloc<T> for FailingAlloc {
    fn allocate(&self, count: usize) -> Result<NonNull<T>, AllocError> {
        let spent = self
            .remaining
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1));
        if spent.is_err() {
            return Err(AllocError::Exhausted {
                bytes: count.saturating_mul(std::mem::size_of::<T>()),
            });
        }
        SystemAlloc.allocate(count)
    }

    unsafe fn release(&self, ptr: NonNull<T>, count: usize) {
        // SAFETY: forwarded contract; the allocation came from SystemAlloc.
        SystemAlloc.release(ptr, count);
    }

    fn equivalent(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.remaining, &other.remaining)
    }
}
