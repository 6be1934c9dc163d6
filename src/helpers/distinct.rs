//! Order-preserving de-duplication.
//!
//! # Overview
//! - [`FluentList::distinct`] - drop repeated elements
//! - [`FluentList::distinct_by`] - drop elements whose key was already seen
//!
//! Both keep the *first* occurrence and leave survivors in their original
//! order. Neither requires `T: Clone`: a first pass records which indices to
//! keep, a second pass moves the kept elements out.

use crate::FluentList;
use std::collections::HashSet;
use std::hash::Hash;

impl<T: Eq + Hash> FluentList<T> {
    /// Remove duplicate elements, keeping the first occurrence of each.
    ///
    /// # Example
    /// ```
    /// use fluentlist::FluentList;
    ///
    /// let out = FluentList::from(vec![3, 1, 3, 2, 1]).distinct();
    /// assert_eq!(out.into_vec(), vec![3, 1, 2]);
    /// ```
    #[must_use]
    pub fn distinct(self) -> Self {
        let mut seen: HashSet<&T> = HashSet::with_capacity(self.items.len());
        let keep: Vec<bool> = self.items.iter().map(|t| seen.insert(t)).collect();
        drop(seen);
        retain_flagged(self.items, &keep)
    }
}

impl<T> FluentList<T> {
    /// Remove elements whose `key` has already been produced by an earlier element.
    ///
    /// # Example
    /// ```
    /// use fluentlist::FluentList;
    ///
    /// let words = FluentList::from(vec!["apple", "avocado", "banana", "blueberry", "cherry"]);
    /// let one_per_letter = words.distinct_by(|w| w.chars().next());
    /// assert_eq!(one_per_letter.into_vec(), vec!["apple", "banana", "cherry"]);
    /// ```
    #[must_use]
    pub fn distinct_by<K, F>(self, key: F) -> Self
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut seen: HashSet<K> = HashSet::new();
        let keep: Vec<bool> = self.items.iter().map(|t| seen.insert(key(t))).collect();
        retain_flagged(self.items, &keep)
    }
}

fn retain_flagged<T>(items: Vec<T>, keep: &[bool]) -> FluentList<T> {
    items
        .into_iter()
        .zip(keep.iter())
        .filter_map(|(t, &k)| k.then_some(t))
        .collect()
}
