//! Element-wise chaining operations.
//!
//! Every method here consumes the list and eagerly returns a new
//! [`FluentList`], so calls chain:
//!
//! ```
//! use fluentlist::*;
//!
//! let out = FluentList::from(vec![1, 2, 3, 4, 5])
//!     .filter(|x| x % 2 == 1)
//!     .map(|x| x * 10)
//!     .reversed();
//! assert_eq!(out.into_vec(), vec![50, 30, 10]);
//! ```

use crate::FluentList;

impl<T> FluentList<T> {
    /// Transform each element, keeping order and length.
    pub fn map<R, F>(self, f: F) -> FluentList<R>
    where
        F: Fn(&T) -> R,
    {
        let mut out = Vec::with_capacity(self.items.len());
        for item in &self.items {
            out.push(f(item));
        }
        FluentList::from_vec(out)
    }

    pub fn map_indexed<R, F>(self, f: F) -> FluentList<R>
    where
        F: Fn(usize, &T) -> R,
    {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| f(i, item))
            .collect()
    }

    /// Keep the elements matching `pred`, in their original order.
    pub fn filter<P>(self, pred: P) -> FluentList<T>
    where
        P: Fn(&T) -> bool,
    {
        self.items.into_iter().filter(|t| pred(t)).collect()
    }

    /// Keep the elements *not* matching `pred`.
    pub fn filter_not<P>(self, pred: P) -> FluentList<T>
    where
        P: Fn(&T) -> bool,
    {
        self.items.into_iter().filter(|t| !pred(t)).collect()
    }

    /// Map each element to zero or more outputs and concatenate them in order.
    ///
    /// ```
    /// use fluentlist::FluentList;
    ///
    /// let words = FluentList::from(vec!["a b", "c"])
    ///     .flat_map(|s| s.split(' ').map(str::to_string).collect::<Vec<_>>());
    /// assert_eq!(words.into_vec(), vec!["a", "b", "c"]);
    /// ```
    pub fn flat_map<R, I, F>(self, f: F) -> FluentList<R>
    where
        I: IntoIterator<Item = R>,
        F: Fn(&T) -> I,
    {
        let mut out: Vec<R> = Vec::new();
        for item in &self.items {
            out.extend(f(item));
        }
        FluentList::from_vec(out)
    }

    pub fn reversed(self) -> FluentList<T> {
        let mut items = self.items;
        items.reverse();
        FluentList::from_vec(items)
    }

    /// A new list with `item` appended.
    pub fn plus(self, item: T) -> FluentList<T> {
        let mut items = self.items;
        items.push(item);
        FluentList::from_vec(items)
    }

    /// A new list with every element of `other` appended after the existing ones.
    pub fn plus_all<I>(self, other: I) -> FluentList<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = self.items;
        items.extend(other);
        FluentList::from_vec(items)
    }

    /// The first `n` elements (or all of them if the list is shorter).
    pub fn take(self, n: usize) -> FluentList<T> {
        let mut items = self.items;
        items.truncate(n);
        FluentList::from_vec(items)
    }

    /// Everything after the first `n` elements.
    pub fn skip(self, n: usize) -> FluentList<T> {
        self.items.into_iter().skip(n).collect()
    }

    /// Split into `(matching, non_matching)`, both in original order.
    pub fn partition<P>(self, pred: P) -> (FluentList<T>, FluentList<T>)
    where
        P: Fn(&T) -> bool,
    {
        let (yes, no): (Vec<T>, Vec<T>) = self.items.into_iter().partition(|t| pred(t));
        (FluentList::from_vec(yes), FluentList::from_vec(no))
    }
}

impl<I> FluentList<I>
where
    I: IntoIterator,
{
    /// Concatenate nested sequences into one flat list.
    ///
    /// ```
    /// use fluentlist::FluentList;
    ///
    /// let flat = FluentList::from(vec![vec![1, 2], vec![], vec![3]]).flatten();
    /// assert_eq!(flat.into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn flatten(self) -> FluentList<I::Item> {
        self.items.into_iter().flatten().collect()
    }
}
