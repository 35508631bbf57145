//! Contiguous raw storage blocks and the capacity policy.

use std::ptr::NonNull;

use strake_alloc::{AllocError, RawAlloc};

/// Round a requested element count up to the block capacity policy: the
/// next power of two, minimum 1.
///
/// Power-of-two capacities keep growth free of fragmentation churn and give
/// back-insertion its amortized O(1) cost. The function is idempotent: a
/// value it returns maps to itself.
///
/// Returns `None` when the next power of two is not representable in
/// `usize`.
pub fn round_capacity(count: usize) -> Option<usize> {
    count.max(1).checked_next_power_of_two()
}

/// One contiguous region of raw, potentially-uninitialized element slots.
///
/// The block owns its memory and the allocator handle that produced it;
/// dropping the block releases exactly [`capacity`](Block::capacity) slots.
/// The block never constructs or destroys elements: from its point of view
/// the whole region is raw. Element lifecycle belongs to
/// [`LinearArray`](crate::LinearArray).
pub struct Block<T, A: RawAlloc<T>> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
}

impl<T, A: RawAlloc<T>> Block<T, A> {
    /// Allocate a block able to hold at least `count` elements.
    ///
    /// The actual capacity is [`round_capacity`]`(count)`; an unrepresentable
    /// capacity is reported as [`AllocError::SizeOverflow`].
    pub fn new(count: usize, alloc: A) -> Result<Self, AllocError> {
        let cap = round_capacity(count).ok_or(AllocError::SizeOverflow { count })?;
        let ptr = alloc.allocate(cap)?;
        Ok(Self { ptr, cap, alloc })
    }

    /// Total slots in the block. Always a power of two, at least 1.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Memory footprint of the block in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.cap * std::mem::size_of::<T>()
    }

    /// The allocator handle this block was obtained from.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Base pointer of the region.
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }
}

impl<T, A: RawAlloc<T>> Drop for Block<T, A> {
    fn drop(&mut self) {
        // SAFETY: ptr/cap come from allocate(cap) on this allocator, and
        // the block treats all of its memory as raw.
        unsafe { self.alloc.release(self.ptr, self.cap) }
    }
}

// SAFETY: the block is a uniquely-owned region; sending it is sending the
// raw memory plus the allocator handle.
unsafe impl<T: Send, A: RawAlloc<T> + Send> Send for Block<T, A> {}
// SAFETY: shared access exposes only capacity queries and raw pointers the
// holder must not dereference without ownership of the slots.
unsafe impl<T: Sync, A: RawAlloc<T> + Sync> Sync for Block<T, A> {}

#[cfg(test)]
mod tests {
    use super::*;
    use strake_alloc::{SystemAlloc, TallyAlloc};

    #[test]
    fn capacity_policy_examples() {
        assert_eq!(round_capacity(0), Some(1));
        assert_eq!(round_capacity(1), Some(1));
        assert_eq!(round_capacity(2), Some(2));
        assert_eq!(round_capacity(3), Some(4));
        assert_eq!(round_capacity(116), Some(128));
        assert_eq!(round_capacity(1 << 20), Some(1 << 20));
        assert_eq!(round_capacity(usize::MAX), None);
    }

    #[test]
    fn block_rounds_its_capacity() {
        let block: Block<u32, _> = Block::new(5, SystemAlloc).unwrap();
        assert_eq!(block.capacity(), 8);
        assert_eq!(block.memory_bytes(), 8 * std::mem::size_of::<u32>());
    }

    #[test]
    fn empty_request_still_owns_one_slot() {
        let block: Block<u64, _> = Block::new(0, SystemAlloc).unwrap();
        assert_eq!(block.capacity(), 1);
    }

    #[test]
    fn drop_releases_exactly_the_capacity() {
        let alloc = TallyAlloc::new();
        {
            let block: Block<u16, _> = Block::new(100, alloc.clone()).unwrap();
            assert_eq!(block.capacity(), 128);
            assert_eq!(alloc.live_bytes(), 128 * std::mem::size_of::<u16>());
        }
        assert_eq!(alloc.live_allocations(), 0);
        assert_eq!(alloc.live_bytes(), 0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn policy_is_minimal_power_of_two(count in 0usize..(1 << 40)) {
                let cap = round_capacity(count).unwrap();
                prop_assert!(cap.is_power_of_two());
                prop_assert!(cap >= count.max(1));
                // Minimality: the next power down no longer covers count.
                if cap > 1 {
                    prop_assert!(cap / 2 < count.max(1));
                }
            }

            #[test]
            fn policy_is_idempotent(count in 0usize..(1 << 40)) {
                let cap = round_capacity(count).unwrap();
                prop_assert_eq!(round_capacity(cap), Some(cap));
            }
        }
    }
}
