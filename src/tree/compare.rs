//! Injectable three-way key comparison.
//!
//! A comparator answers SMALLER / EQUAL / GREATER as an `Ordering`, or
//! `None` when the two keys cannot be ordered (for example NaN). The tree
//! turns `None` into `TreeError::InvalidKey` before touching any node.

use std::cmp::Ordering;

/// Strategy used by the tree to order keys.
pub trait Comparator<K> {
    /// Compare `a` against `b`, or return None if they cannot be ordered.
    fn compare(&self, a: &K, b: &K) -> Option<Ordering>;
}

/// Orders keys by their `PartialOrd` implementation.
///
/// On `f64` keys this is plain numeric comparison, with NaN unorderable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: PartialOrd> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        a.partial_cmp(b)
    }
}

impl<K, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Option<Ordering>,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        self(a, b)
    }
}
