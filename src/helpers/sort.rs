//! Sorted copies of a [`FluentList`].
//!
//! All sorts are stable: elements with equal keys keep their original
//! relative order. Keyed sorts compute each key once per element
//! ([`slice::sort_by_cached_key`]), so an expensive key function is not
//! re-run on every comparison.
//!
//! - [`FluentList::sorted`] - natural order (`T: Ord`)
//! - [`FluentList::sorted_by`] / [`FluentList::sorted_by_descending`] - by an `Ord` key
//! - [`FluentList::sorted_by_f64`] - by an `f64` key, NaN last
//! - [`FluentList::sorted_with`] - by an explicit comparator

use crate::FluentList;
use ordered_float::OrderedFloat;
use std::cmp::{Ordering, Reverse};
use tracing::trace;

impl<T: Ord> FluentList<T> {
    /// # Example
    /// ```
    /// use fluentlist::FluentList;
    ///
    /// assert_eq!(FluentList::from(vec![3, 1, 2]).sorted().into_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn sorted(self) -> Self {
        let mut items = self.items;
        items.sort();
        FluentList::from_vec(items)
    }
}

impl<T> FluentList<T> {
    /// Sort ascending by the key `f` returns.
    ///
    /// # Example
    /// ```
    /// use fluentlist::FluentList;
    ///
    /// let users = FluentList::from(vec![("mia", 31), ("ann", 25), ("bo", 31)]);
    /// let by_age = users.sorted_by(|u| u.1).map(|u| u.0);
    /// assert_eq!(by_age.into_vec(), vec!["ann", "mia", "bo"]);
    /// ```
    #[must_use]
    pub fn sorted_by<K, F>(self, f: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        trace!(elements = self.items.len(), "sorted_by");
        let mut items = self.items;
        items.sort_by_cached_key(|t| f(t));
        FluentList::from_vec(items)
    }

    /// Sort descending by the key `f` returns. Ties keep their original order.
    #[must_use]
    pub fn sorted_by_descending<K, F>(self, f: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.sorted_by(|t| Reverse(f(t)))
    }

    #[must_use]
    pub fn sorted_by_f64<F>(self, f: F) -> Self
    where
        F: Fn(&T) -> f64,
    {
        self.sorted_by(|t| OrderedFloat(f(t)))
    }

    #[must_use]
    pub fn sorted_with<C>(self, cmp: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering,
    {
        let mut items = self.items;
        items.sort_by(cmp);
        FluentList::from_vec(items)
    }
}
