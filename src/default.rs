//! Ready-made predicates.
//!
//! [`OrdLess`] makes a [`Heap`](crate::Heap) behave as a min-heap over the
//! natural [`Ord`] order of its elements, and is what [`Heap::new`](crate::Heap::new)
//! selects. [`Reversed`] flips any other predicate, turning a min-heap into a
//! max-heap.

use crate::Less;
use core::{fmt, marker::PhantomData};

/// A zero-sized predicate that delegates to the [`Ord`] implementation of its
/// type parameter `T`, i.e. `less(a, b) == (a < b)`.
pub struct OrdLess<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> OrdLess<T> {
    /// Creates the natural-order predicate.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Default for OrdLess<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Clone for OrdLess<T> {
    fn clone(&self) -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Copy for OrdLess<T> {}

impl<T: ?Sized> fmt::Debug for OrdLess<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrdLess")
    }
}

impl<T: ?Sized + Ord> Less<T> for OrdLess<T> {
    // Delegate to `T`'s `<`, which agrees with its `Ord` when the two are consistent.
    #[inline]
    fn less(&self, this: &T, that: &T) -> bool {
        this < that
    }
}

/// A predicate adapter that swaps the arguments of the predicate it wraps.
///
/// ```
/// use lessheap::{Heap, OrdLess, Reversed};
///
/// let mut heap: Heap<i32, _> = Heap::with_comparator(Some(Reversed(OrdLess::new()))).unwrap();
/// heap.extend([2, 7, 1]);
/// assert_eq!(heap.into_sorted_vec(), [7, 2, 1]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed<L>(pub L);

impl<T: ?Sized, L: Less<T>> Less<T> for Reversed<L> {
    #[inline]
    fn less(&self, this: &T, that: &T) -> bool {
        self.0.less(that, this)
    }
}
