//! A priority queue implemented with a binary min-heap.
//!
//! The heap is ordered by a [`Less`] predicate fixed at construction: the
//! element at the top is one that no other element strictly precedes. Inserting
//! and removing the top element have *O*(log(*n*)) time complexity, and looking
//! at the top element is *O*(1).
//!
//! # Examples
//!
//! Scheduling jobs by deadline, breaking no ties:
//!
//! ```
//! use lessheap::Heap;
//!
//! struct Job {
//!     deadline: u32,
//!     name: &'static str,
//! }
//!
//! let mut queue: Heap<Job, _> =
//!     Heap::with_comparator(Some(|a: &Job, b: &Job| a.deadline < b.deadline)).unwrap();
//!
//! queue.push(Job { deadline: 30, name: "deploy" });
//! queue.push(Job { deadline: 10, name: "build" });
//! queue.push(Job { deadline: 20, name: "test" });
//!
//! let mut order = Vec::new();
//! while let Some(job) = queue.pop() {
//!     order.push(job.name);
//! }
//! assert_eq!(order, ["build", "test", "deploy"]);
//! ```

use core::fmt;
use core::iter::FusedIterator;
use std::{slice, vec};

use crate::{Error, Less, OrdLess, Result};

#[cfg(test)]
mod tests;

/// A priority queue implemented with a binary min-heap.
///
/// Elements leave the heap in non-decreasing order under the predicate `L`.
/// With the default [`OrdLess`] predicate this is ascending [`Ord`] order; use
/// [`Reversed`](crate::Reversed) or a predicate such as `|a, b| a > b` for a
/// max-heap.
///
/// It is a logic error for an element to be modified in such a way that its
/// ordering relative to any other element, as determined by the predicate,
/// changes while it is in the heap. This is normally only possible through
/// interior mutability, global state, I/O, or unsafe code. The behavior
/// resulting from such a logic error is not specified, but will be
/// encapsulated to the `Heap` that observed the logic error and not result in
/// undefined behavior.
///
/// The heap is not stable: elements that neither precede the other come out
/// in an unspecified order.
///
/// # Examples
///
/// ```
/// use lessheap::Heap;
///
/// let mut heap = Heap::new();
///
/// heap.push(4);
/// heap.push(1);
/// heap.push(3);
///
/// assert_eq!(heap.len(), 3);
/// assert_eq!(*heap.top(), 1);
///
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), Some(3));
/// assert_eq!(heap.pop(), Some(4));
///
/// // Popping an empty heap does nothing.
/// assert_eq!(heap.pop(), None);
/// assert!(heap.is_empty());
/// ```
///
/// # Time complexity
///
/// | [push]        | [pop]         | [top]/[peek] |
/// |---------------|---------------|--------------|
/// | *O*(log(*n*)) | *O*(log(*n*)) | *O*(1)       |
///
/// `push` is amortized: growing the storage occasionally costs *O*(*n*).
///
/// [push]: Heap::push
/// [pop]: Heap::pop
/// [top]: Heap::top
/// [peek]: Heap::peek
pub struct Heap<T, L = OrdLess<T>> {
    data: Vec<T>,
    less: L,
}

impl<T: Clone, L: Clone> Clone for Heap<T, L> {
    fn clone(&self) -> Self {
        Heap { data: self.data.clone(), less: self.less.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.less.clone_from(&source.less);
    }
}

impl<T, L: Default> Default for Heap<T, L> {
    /// Creates an empty `Heap` ordered by `L::default()`.
    #[inline]
    fn default() -> Heap<T, L> {
        Heap { data: Vec::new(), less: L::default() }
    }
}

impl<T: fmt::Debug, L> fmt::Debug for Heap<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord> Heap<T> {
    /// Creates an empty min-heap ordered by `T`'s natural order (`a < b`).
    ///
    /// # Examples
    ///
    /// ```
    /// use lessheap::Heap;
    /// let mut heap = Heap::new();
    /// heap.push(4);
    /// ```
    #[must_use]
    pub fn new() -> Heap<T> {
        Heap { data: Vec::new(), less: OrdLess::new() }
    }

    /// Creates an empty natural-order min-heap with at least the specified
    /// capacity.
    ///
    /// The capacity is only an allocation hint: the heap still grows past it.
    ///
    /// # Examples
    ///
    /// ```
    /// use lessheap::Heap;
    /// let mut heap = Heap::with_capacity(10);
    /// assert!(heap.capacity() >= 10);
    /// heap.push(4);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Heap<T> {
        Heap { data: Vec::with_capacity(capacity), less: OrdLess::new() }
    }
}

impl<T, L: Less<T>> Heap<T, L> {
    /// Creates an empty heap ordered by the predicate `less`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `less` is `None`; no heap is
    /// created.
    ///
    /// # Examples
    ///
    /// ```
    /// use lessheap::{Error, Heap};
    ///
    /// let mut heap: Heap<i32, _> = Heap::with_comparator(Some(|a: &i32, b: &i32| a > b))?;
    /// heap.extend([3, 1, 4, 1, 5]);
    /// assert_eq!(*heap.top(), 5);
    ///
    /// let missing = Heap::<i32, fn(&i32, &i32) -> bool>::with_comparator(None);
    /// assert!(matches!(missing, Err(Error::InvalidArgument(_))));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_comparator(less: Option<L>) -> Result<Heap<T, L>> {
        Self::with_comparator_and_capacity(less, 0)
    }

    /// Creates an empty heap ordered by the predicate `less`, with at least the
    /// specified capacity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `less` is `None`.
    pub fn with_comparator_and_capacity(less: Option<L>, capacity: usize) -> Result<Heap<T, L>> {
        match less {
            Some(less) => Ok(Heap { data: Vec::with_capacity(capacity), less }),
            None => {
                log_warn!("rejected heap construction without an ordering predicate");
                Err(Error::InvalidArgument("less function is required to define heap ordering"))
            }
        }
    }

    /// Pushes an element onto the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use lessheap::Heap;
    /// let mut heap = Heap::new();
    /// heap.push(3);
    /// heap.push(5);
    /// heap.push(1);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(*heap.top(), 1);
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(log(*n*)) comparisons against a heap of *n* elements, plus the
    /// amortized cost of growing the storage.
    pub fn push(&mut self, element: T) {
        self.data.push(element);
        self.sift_up(self.data.len() - 1);
        log_trace!(len = self.data.len(), "pushed onto heap");
    }

    /// Removes the top element of the heap and returns it.
    ///
    /// Popping an empty heap is not an error: it leaves the heap unchanged and
    /// returns `None`, so draining a heap and popping once more is harmless.
    ///
    /// # Examples
    ///
    /// ```
    /// use lessheap::Heap;
    /// let mut heap = Heap::from([1, 3]);
    ///
    /// assert_eq!(heap.pop(), Some(1));
    /// assert_eq!(heap.pop(), Some(3));
    /// assert_eq!(heap.pop(), None);
    /// assert_eq!(heap.pop(), None);
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(log(*n*)) on a heap of *n* elements.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.data.len().checked_sub(1)?;
        self.data.swap(0, last);
        let item = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        log_trace!(len = self.data.len(), "popped from heap");
        item
    }

    /// Consumes the heap and returns its elements in the order they would be
    /// popped, i.e. non-decreasing under the predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use lessheap::Heap;
    ///
    /// let mut heap = Heap::from([7, 2, 4, 5, 1]);
    /// heap.push(6);
    /// heap.push(3);
    ///
    /// assert_eq!(heap.into_sorted_vec(), [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Moves the element at `pos` towards the root while it strictly precedes
    /// its parent.
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less.less(&self.data[pos], &self.data[parent]) {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
    }

    /// Moves the element at `pos` towards the leaves while a child strictly
    /// precedes it, always swapping with the child that wins.
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;

            if left < len && self.less.less(&self.data[left], &self.data[smallest]) {
                smallest = left;
            }
            // against the current winner, which may already be `left`
            if right < len && self.less.less(&self.data[right], &self.data[smallest]) {
                smallest = right;
            }

            if smallest == pos {
                return;
            }
            self.data.swap(pos, smallest);
            pos = smallest;
        }
    }
}

impl<T, L> Heap<T, L> {
    /// Returns the top element of the heap: one that no other element
    /// strictly precedes.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty. Use [`peek`](Heap::peek) when emptiness is
    /// an expected condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use lessheap::Heap;
    /// let mut heap = Heap::new();
    /// heap.push(2);
    /// heap.push(1);
    /// assert_eq!(*heap.top(), 1);
    /// ```
    ///
    /// ```should_panic
    /// use lessheap::Heap;
    /// let heap: Heap<i32> = Heap::new();
    /// heap.top();
    /// ```
    #[must_use]
    #[track_caller]
    pub fn top(&self) -> &T {
        match self.data.first() {
            Some(top) => top,
            None => panic!("cannot retrieve top element from an empty heap"),
        }
    }

    /// Returns the top element of the heap, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use lessheap::Heap;
    /// let mut heap = Heap::new();
    /// assert_eq!(heap.peek(), None);
    ///
    /// heap.push(5);
    /// heap.push(2);
    /// assert_eq!(heap.peek(), Some(&2));
    /// ```
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the predicate this heap is ordered by.
    pub fn less(&self) -> &L {
        &self.less
    }

    /// Returns the number of elements in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use lessheap::Heap;
    /// let mut heap = Heap::new();
    ///
    /// assert!(heap.is_empty());
    /// heap.push(3);
    /// assert!(!heap.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements the heap can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more elements.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows [`usize`].
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Discards as much additional capacity as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Returns an iterator visiting all elements in the underlying storage, in
    /// arbitrary order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lessheap::Heap;
    /// let heap = Heap::from([1, 2, 3, 4]);
    ///
    /// let mut seen: Vec<_> = heap.iter().copied().collect();
    /// seen.sort();
    /// assert_eq!(seen, [1, 2, 3, 4]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: self.data.iter() }
    }

    /// Returns the underlying storage: the complete binary tree laid out level
    /// by level, so the children of index `i` are at `2 * i + 1` and `2 * i + 2`.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Consumes the heap and returns the underlying storage in arbitrary order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.into()
    }

    /// Clears the heap, returning an iterator over the removed elements in
    /// arbitrary order. If the iterator is dropped before being fully
    /// consumed, it drops the remaining elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use lessheap::Heap;
    /// let mut heap = Heap::from([1, 3]);
    ///
    /// assert_eq!(heap.drain().count(), 2);
    /// assert!(heap.is_empty());
    /// ```
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { iter: self.data.drain(..) }
    }

    /// Drops all elements from the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

/// An iterator over the elements of a `Heap`, in storage order.
///
/// This `struct` is created by [`Heap::iter()`].
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a T> {
        self.iter.last()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a `Heap`, in storage order.
///
/// This `struct` is created by [`Heap::into_iter()`] (provided by the
/// [`IntoIterator`] trait).
#[derive(Clone)]
pub struct IntoIter<T> {
    iter: vec::IntoIter<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// A draining iterator over the elements of a `Heap`.
///
/// This `struct` is created by [`Heap::drain()`].
#[derive(Debug)]
pub struct Drain<'a, T: 'a> {
    iter: vec::Drain<'a, T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> FusedIterator for Drain<'_, T> {}

impl<T: Ord, const N: usize> From<[T; N]> for Heap<T> {
    /// ```
    /// use lessheap::Heap;
    ///
    /// let mut h1 = Heap::from([1, 4, 2, 3]);
    /// let mut h2: Heap<_> = [1, 4, 2, 3].into();
    /// while let Some((a, b)) = h1.pop().zip(h2.pop()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T, L> From<Heap<T, L>> for Vec<T> {
    /// Converts a `Heap<T>` into its storage, without moving any element.
    fn from(heap: Heap<T, L>) -> Vec<T> {
        heap.data
    }
}

impl<T, L: Less<T> + Default> FromIterator<T> for Heap<T, L> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Heap<T, L> {
        let mut heap = Heap::default();
        heap.extend(iter);
        heap
    }
}

impl<T, L> IntoIterator for Heap<T, L> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator that moves each element out of the heap
    /// in arbitrary order.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { iter: self.data.into_iter() }
    }
}

impl<'a, T, L> IntoIterator for &'a Heap<T, L> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, L: Less<T>> Extend<T> for Heap<T, L> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        self.reserve(lower);

        iterator.for_each(move |elem| self.push(elem));
    }
}

impl<'a, T: 'a + Copy, L: Less<T>> Extend<&'a T> for Heap<T, L> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}
