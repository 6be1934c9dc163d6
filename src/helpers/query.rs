//! Lookups, predicate tests and side-effecting iteration.
//!
//! All of these borrow the list; none of them build a new one.

use crate::FluentList;

impl<T> FluentList<T> {
    pub fn first_or_none(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last_or_none(&self) -> Option<&T> {
        self.items.last()
    }

    /// The first element matching `pred`, if any.
    ///
    /// ```
    /// use fluentlist::FluentList;
    ///
    /// let list = FluentList::from(vec![3, 8, 11, 14]);
    /// assert_eq!(list.find(|x| x % 2 == 0), Some(&8));
    /// assert_eq!(list.find(|x| *x > 100), None);
    /// ```
    pub fn find<P>(&self, pred: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().find(|t| pred(t))
    }

    /// `true` if at least one element matches. `false` for an empty list.
    pub fn any<P>(&self, pred: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().any(pred)
    }

    /// `true` if every element matches. `true` for an empty list.
    pub fn all<P>(&self, pred: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().all(pred)
    }

    /// `true` if no element matches. `true` for an empty list.
    pub fn none<P>(&self, pred: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        !self.any(pred)
    }

    pub fn count_by<P>(&self, pred: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().filter(|t| pred(t)).count()
    }

    pub fn for_each_item<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        for item in &self.items {
            f(item);
        }
    }

    pub fn for_each_indexed<F>(&self, mut f: F)
    where
        F: FnMut(usize, &T),
    {
        for (i, item) in self.items.iter().enumerate() {
            f(i, item);
        }
    }
}
