//! Grouping elements by a derived key.
//!
//! - [`FluentList::group_by`] - `HashMap<K, Vec<T>>`, key order unspecified
//! - [`FluentList::group_by_sorted`] - `BTreeMap<K, Vec<T>>`, keys ascending
//! - [`FluentList::associate_by`] - one element per key, last one wins
//!
//! Within each group elements keep the relative order they had in the list.
//!
//! ## Example
//! ```
//! use fluentlist::*;
//!
//! let words = FluentList::from(vec!["text", "table", "jack", "jam", "apple", "tiers"]);
//! let by_letter = words.group_by_sorted(|w| w.chars().next().unwrap_or(' '));
//!
//! assert_eq!(by_letter[&'a'], vec!["apple"]);
//! assert_eq!(by_letter[&'j'], vec!["jack", "jam"]);
//! assert_eq!(by_letter[&'t'], vec!["text", "table", "tiers"]);
//! ```

use crate::FluentList;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use tracing::trace;

impl<T> FluentList<T> {
    /// Group elements by `key`: every element lands in exactly one group.
    pub fn group_by<K, F>(self, key: F) -> HashMap<K, Vec<T>>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let len = self.items.len();
        let mut m: HashMap<K, Vec<T>> = HashMap::new();
        for item in self.items {
            m.entry(key(&item)).or_default().push(item);
        }
        trace!(elements = len, groups = m.len(), "group_by");
        m
    }

    /// Like [`group_by`](FluentList::group_by), with keys in ascending order.
    pub fn group_by_sorted<K, F>(self, key: F) -> BTreeMap<K, Vec<T>>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        let len = self.items.len();
        let mut m: BTreeMap<K, Vec<T>> = BTreeMap::new();
        for item in self.items {
            m.entry(key(&item)).or_default().push(item);
        }
        trace!(elements = len, groups = m.len(), "group_by_sorted");
        m
    }

    /// Index elements by `key`. When several elements share a key the last one is kept.
    pub fn associate_by<K, F>(self, key: F) -> HashMap<K, T>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        self.items.into_iter().map(|t| (key(&t), t)).collect()
    }
}
