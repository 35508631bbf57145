//! In-place heap sort over random-access positional ranges.
//!
//! [`heap_sort`] reorders any [`SortRange`], a position-indexed view with
//! swap and strict greater-than, in O(n log n) worst case with no auxiliary
//! allocation. Slices sort ascending; wrapping a range in [`Reversed`]
//! mirrors every position, so the same sort yields descending order over the
//! underlying sequence. The sort has no dependency on how the range stores
//! its elements, which is what lets it validate any container exposing a
//! slice.
//!
//! Equal keys never swap (comparisons are strictly greater-than only), but
//! the sort is not stable: the relative order of equal elements is not
//! preserved in general.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// A random-access view a comparison sort can reorder.
///
/// Positions are `0..len()`. Implementations decide how positions map onto
/// storage; [`Reversed`] uses exactly that freedom.
pub trait SortRange {
    /// Number of positions in the range.
    fn len(&self) -> usize;

    /// Whether the range has no positions.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exchange the elements at positions `a` and `b`.
    fn swap(&mut self, a: usize, b: usize);

    /// Whether the element at `a` is strictly greater than the one at `b`.
    fn is_greater(&self, a: usize, b: usize) -> bool;
}

impl<T: Ord> SortRange for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }

    fn is_greater(&self, a: usize, b: usize) -> bool {
        self[a] > self[b]
    }
}

/// Position-mirroring adapter: position `i` maps to `len() - 1 - i` of the
/// wrapped range.
///
/// Sorting through the adapter produces descending order over the
/// underlying sequence, the counterpart of sorting a reverse iterator
/// range.
pub struct Reversed<'a, R: ?Sized> {
    inner: &'a mut R,
}

impl<'a, R: SortRange + ?Sized> Reversed<'a, R> {
    /// Wrap a range in mirrored position order.
    pub fn new(inner: &'a mut R) -> Self {
        Self { inner }
    }

    fn mirror(&self, pos: usize) -> usize {
        self.inner.len() - 1 - pos
    }
}

impl<R: SortRange + ?Sized> SortRange for Reversed<'_, R> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn swap(&mut self, a: usize, b: usize) {
        let (a, b) = (self.mirror(a), self.mirror(b));
        self.inner.swap(a, b);
    }

    fn is_greater(&self, a: usize, b: usize) -> bool {
        self.inner.is_greater(self.mirror(a), self.mirror(b))
    }
}

/// Sort `range` in ascending position order.
///
/// Two phases over an implicit binary max-heap: build (sift-down from the
/// last parent up to the root), then extract (swap the root with the last
/// unsorted position and repair the shrunken heap). In-place, O(n log n)
/// worst case, not stable.
pub fn heap_sort<R: SortRange + ?Sized>(range: &mut R) {
    let n = range.len();

    // Build: for i from n/2 down to 1, sift down the element at i - 1.
    for i in (1..=n / 2).rev() {
        sift_down(range, n, i - 1);
    }

    // Extract: the root is the largest of the unsorted region.
    let mut unsorted = n;
    while unsorted > 1 {
        unsorted -= 1;
        range.swap(0, unsorted);
        sift_down(range, unsorted, 0);
    }
}

/// Restore the max-heap property below `index`, within `[0, end)`.
fn sift_down<R: SortRange + ?Sized>(range: &mut R, end: usize, mut index: usize) {
    // `index < end / 2` exactly when a left child exists.
    while index < end / 2 {
        let left = 2 * index + 1;
        let right = left + 1;

        let mut largest = index;
        if range.is_greater(left, largest) {
            largest = left;
        }
        if right < end && range.is_greater(right, largest) {
            largest = right;
        }
        if largest == index {
            return;
        }
        range.swap(index, largest);
        index = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_the_reference_scenario() {
        let mut data = [5, 3, 8, 1, 9];
        heap_sort(&mut data[..]);
        assert_eq!(data, [1, 3, 5, 8, 9]);

        heap_sort(&mut Reversed::new(&mut data[..]));
        assert_eq!(data, [9, 8, 5, 3, 1]);
    }

    #[test]
    fn trivial_sizes_are_untouched() {
        let mut empty: [i32; 0] = [];
        heap_sort(&mut empty[..]);

        let mut single = [42];
        heap_sort(&mut single[..]);
        assert_eq!(single, [42]);

        heap_sort(&mut Reversed::new(&mut single[..]));
        assert_eq!(single, [42]);
    }

    #[test]
    fn duplicates_sort_cleanly() {
        let mut data = [4, 1, 4, 4, 2, 1, 9, 4];
        heap_sort(&mut data[..]);
        assert_eq!(data, [1, 1, 2, 4, 4, 4, 4, 9]);
    }

    #[test]
    fn already_sorted_inputs() {
        let mut ascending: Vec<u32> = (0..100).collect();
        heap_sort(ascending.as_mut_slice());
        assert!(ascending.windows(2).all(|w| w[0] <= w[1]));

        let mut descending: Vec<u32> = (0..100).rev().collect();
        heap_sort(descending.as_mut_slice());
        assert!(descending.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn reversed_adapter_mirrors_positions() {
        let mut data = [10, 20, 30];
        let mut rev = Reversed::new(&mut data[..]);
        assert_eq!(rev.len(), 3);
        // Position 0 of the adapter is the last element.
        assert!(rev.is_greater(0, 2));
        rev.swap(0, 2);
        assert_eq!(data, [30, 20, 10]);
    }

    #[test]
    fn descending_sort_of_shuffled_data() {
        let mut data = vec![3u64, 7, 7, 0, 12, 5, 5, 9, 1];
        heap_sort(&mut Reversed::new(data.as_mut_slice()));
        assert!(data.windows(2).all(|w| w[0] >= w[1]));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn output_is_a_sorted_permutation(
                mut data in proptest::collection::vec(-1000i32..1000, 0..256),
            ) {
                let mut expected = data.clone();
                expected.sort_unstable();
                heap_sort(data.as_mut_slice());
                prop_assert_eq!(data, expected);
            }

            #[test]
            fn reversed_output_is_a_descending_permutation(
                mut data in proptest::collection::vec(-1000i32..1000, 0..256),
            ) {
                let mut expected = data.clone();
                expected.sort_unstable_by(|a, b| b.cmp(a));
                heap_sort(&mut Reversed::new(data.as_mut_slice()));
                prop_assert_eq!(data, expected);
            }
        }
    }
}
