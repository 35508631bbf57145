//! Allocation-tallying allocator.

use std::ptr::NonNull;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::AllocError;
use crate::raw::RawAlloc;
use crate::system::SystemAlloc;

/// Drop-in allocator that counts outstanding allocations.
///
/// Delegates the actual memory traffic to [`SystemAlloc`] and keeps a tally
/// of live allocations and live bytes. Clones share the tally and are
/// therefore equivalent; two independently created `TallyAlloc` values keep
/// separate books and are **not** equivalent.
///
/// A balanced tally after a container is dropped is the leak check used
/// throughout the workspace tests.
#[derive(Clone, Debug, Default)]
pub struct TallyAlloc {
    stats: Arc<TallyStats>,
}

#[derive(Debug, Default)]
struct TallyStats {
    live_allocations: AtomicUsize,
    live_bytes: AtomicUsize,
}

impl TallyAlloc {
    /// Create an allocator with a fresh, empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of allocations not yet released.
    pub fn live_allocations(&self) -> usize {
        self.stats.live_allocations.load(Ordering::Relaxed)
    }

    /// Number of bytes not yet released.
    pub fn live_bytes(&self) -> usize {
        self.stats.live_bytes.load(Ordering::Relaxed)
    }
}

impl<T> RawAlloc<T> for TallyAlloc {
    fn allocate(&self, count: usize) -> Result<NonNull<T>, AllocError> {
        let ptr = SystemAlloc.allocate(count)?;
        let bytes = count.saturating_mul(std::mem::size_of::<T>());
        self.stats.live_allocations.fetch_add(1, Ordering::Relaxed);
        self.stats.live_bytes.fetch_add(bytes, Ordering::Relaxed);
        Ok(ptr)
    }

    unsafe fn release(&self, ptr: NonNull<T>, count: usize) {
        let bytes = count.saturating_mul(std::mem::size_of::<T>());
        self.stats.live_allocations.fetch_sub(1, Ordering::Relaxed);
        self.stats.live_bytes.fetch_sub(bytes, Ordering::Relaxed);
        // SAFETY: forwarded contract; ptr/count come from our own
        // allocate, which delegated to SystemAlloc.
        SystemAlloc.release(ptr, count);
    }

    fn equivalent(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.stats, &other.stats)
    }
}
