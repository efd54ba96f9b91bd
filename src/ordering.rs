//! Pluggable orderings for [`Tree`][crate::Tree].
//!
//! A [`Comparator`] is handed to the tree once, at construction, and decides where every key
//! lands. Several trees over the same key type can therefore index it differently.
//!
//! # Examples
//!
//! ```
//! use wordtree::{Comparator, Tree};
//!
//! let mut tree = Tree::with_comparator(Comparator::natural().reversed());
//! tree.extend([1, 3, 2]);
//!
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//! ```

use std::cmp;
use std::fmt;

/// A total order over `K` stored as a function value.
pub struct Comparator<K> {
    compare: Compare<K>,
}

enum Compare<K> {
    // `natural` must not require `K: 'static`.
    Plain(fn(&K, &K) -> cmp::Ordering),
    Boxed(Box<dyn Fn(&K, &K) -> cmp::Ordering>),
}

impl<K> Comparator<K> {
    /// Wraps the given function. It must be a total order (antisymmetric and transitive) or the
    /// tree using it will misplace keys.
    pub fn new<F>(compare: F) -> Self
    where
        F: Fn(&K, &K) -> cmp::Ordering + 'static,
    {
        Self {
            compare: Compare::Boxed(Box::new(compare)),
        }
    }

    /// The natural order of `K`.
    pub fn natural() -> Self
    where
        K: Ord,
    {
        Self {
            compare: Compare::Plain(K::cmp),
        }
    }

    /// Compares `a` against `b`.
    pub fn compare(&self, a: &K, b: &K) -> cmp::Ordering {
        match &self.compare {
            Compare::Plain(compare) => compare(a, b),
            Compare::Boxed(compare) => compare(a, b),
        }
    }

    /// Returns the opposite order.
    pub fn reversed(self) -> Self
    where
        K: 'static,
    {
        match self.compare {
            Compare::Plain(compare) => Self::new(move |a, b| compare(b, a)),
            Compare::Boxed(compare) => Self::new(move |a, b| compare(b, a)),
        }
    }
}

impl<K: Ord> Default for Comparator<K> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<K> fmt::Debug for Comparator<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator").finish_non_exhaustive()
    }
}
