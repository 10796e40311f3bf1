//! A binary min-heap that orders its elements by a `less` predicate supplied at
//! construction, rather than (only) by the [`Ord`] trait.
//!
//! ```
//! use lessheap::Heap;
//!
//! // Natural order: a min-heap over `Ord` elements.
//! let mut heap = Heap::new();
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//! assert_eq!(*heap.top(), 1);
//!
//! // Any predicate: here a max-heap.
//! let mut heap: Heap<i32, _> = Heap::with_comparator(Some(|a: &i32, b: &i32| a > b)).unwrap();
//! heap.extend([3, 1, 4, 1, 5]);
//! assert_eq!(*heap.top(), 5);
//! ```
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]

#[macro_use]
mod polyfill;

pub mod default;
mod error;
pub mod heap;

pub use default::{OrdLess, Reversed};
pub use error::{Error, Result};
pub use heap::Heap;

/// An ordering predicate: `less(a, b)` is `true` when `a` must come out of the
/// heap before `b`.
///
/// Implementations must be irreflexive and give the same answer for the same
/// pair of elements for as long as those elements are in a heap. It is a logic
/// error otherwise; the heap will not exhibit undefined behaviour, but the order
/// in which elements are returned is then unspecified.
///
/// Every `Fn(&T, &T) -> bool` is a predicate:
///
/// ```
/// use lessheap::Less;
///
/// let by_len = |a: &&str, b: &&str| a.len() < b.len();
/// assert!(by_len.less(&"ab", &"abc"));
/// assert!(!by_len.less(&"abc", &"xyz"));
/// ```
pub trait Less<T: ?Sized> {
    /// Returns whether `this` strictly precedes `that`.
    fn less(&self, this: &T, that: &T) -> bool;
}

impl<T: ?Sized, F> Less<T> for F
where
    F: ?Sized + Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, this: &T, that: &T) -> bool {
        self(this, that)
    }
}

#[cfg(test)]
#[allow(dead_code)] // Not used in all configurations
pub(crate) mod test_helpers {
    /// Seeded from the caller's location, so each test draws a different but
    /// reproducible-per-run sequence.
    #[track_caller]
    pub(crate) fn test_rng() -> rand_xorshift::XorShiftRng {
        use std::hash::{BuildHasher, Hash, Hasher};
        let mut hasher = std::collections::hash_map::RandomState::new().build_hasher();
        std::panic::Location::caller().hash(&mut hasher);
        let hc64 = hasher.finish();
        let seed_vec = hc64.to_le_bytes().into_iter().chain(0u8..8).collect::<Vec<u8>>();
        let seed: [u8; 16] = seed_vec.as_slice().try_into().unwrap();
        rand::SeedableRng::from_seed(seed)
    }
}
