use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::ops::{Deref, DerefMut};

/// An owned, ordered list with chainable functional-style operations.
///
/// Chaining operations (`map`, `filter`, `sorted_by`, ...) consume the list
/// and eagerly build a new one. Terminal operations (`reduce`, `any`,
/// `join_to_string`, ...) borrow or consume it and return a plain value.
///
/// The list dereferences to `[T]`, so the whole slice API (`len`, `get`,
/// `contains`, `iter`, indexing, ...) is available directly.
///
/// # Example
/// ```
/// use fluentlist::*;
///
/// let names = FluentList::from(vec!["bob", "alice", "carol", "alice"])
///     .filter(|n| n.len() > 3)
///     .distinct()
///     .sorted()
///     .join_to_string(|n| n.to_uppercase());
/// assert_eq!(names, "ALICE, CAROL");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FluentList<T> {
    pub(crate) items: Vec<T>,
}

impl<T> FluentList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Build a list from the elements of a set, in the set's iteration order.
    pub fn from_set<I>(set: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        set.into_iter().collect()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn insert(&mut self, index: usize, item: T) {
        self.items.insert(index, item);
    }

    pub fn remove(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<K, V> FluentList<(K, V)> {
    /// Build a list of `(key, value)` entries from a map, in the map's iteration order.
    pub fn from_map<M>(map: M) -> Self
    where
        M: IntoIterator<Item = (K, V)>,
    {
        map.into_iter().collect()
    }
}

impl FluentList<i32> {
    /// Integers in `[start, end)`. Empty when `start >= end`.
    ///
    /// ```
    /// use fluentlist::FluentList;
    ///
    /// assert_eq!(FluentList::int_range(2, 5).into_vec(), vec![2, 3, 4]);
    /// assert!(FluentList::int_range(5, 5).is_empty());
    /// ```
    pub fn int_range(start: i32, end: i32) -> Self {
        (start..end).collect()
    }
}

impl<T> Default for FluentList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for FluentList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> DerefMut for FluentList<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T> AsRef<[T]> for FluentList<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for FluentList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T, const N: usize> From<[T; N]> for FluentList<T> {
    fn from(array: [T; N]) -> Self {
        Self {
            items: Vec::from(array),
        }
    }
}

impl<T: Clone> From<&[T]> for FluentList<T> {
    fn from(slice: &[T]) -> Self {
        Self {
            items: slice.to_vec(),
        }
    }
}

impl<T: Eq + Hash> From<HashSet<T>> for FluentList<T> {
    fn from(set: HashSet<T>) -> Self {
        Self::from_set(set)
    }
}

impl<K: Eq + Hash, V> From<HashMap<K, V>> for FluentList<(K, V)> {
    fn from(map: HashMap<K, V>) -> Self {
        Self::from_map(map)
    }
}

impl<T> From<FluentList<T>> for Vec<T> {
    fn from(list: FluentList<T>) -> Self {
        list.items
    }
}

impl<T> FromIterator<T> for FluentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for FluentList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for FluentList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FluentList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut FluentList<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T: fmt::Display> fmt::Display for FluentList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}
