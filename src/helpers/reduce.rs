//! Terminal aggregations: `reduce`, `fold`, `min_by`/`max_by` and `sum_by`.
//!
//! Seedless reductions (`reduce`, `min_by`, `max_by` and their `f64`
//! variants) fail with [`FluentError::EmptyReduce`] on an empty list.
//! `fold` and `sum_by` have an explicit or implicit zero and never fail.
//!
//! ## Example
//! ```
//! use fluentlist::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let prices = FluentList::from(vec![("tea", 3), ("cake", 7), ("jam", 2)]);
//!
//! assert_eq!(prices.min_by(|p| p.1)?.0, "jam");
//! assert_eq!(prices.max_by(|p| p.1)?.0, "cake");
//! assert_eq!(prices.sum_by(|p| p.1), 12);
//! assert_eq!(prices.map(|p| p.1).reduce(|a, b| a * b)?, 42);
//! # Ok(())
//! # }
//! ```

use crate::error::{FluentError, Result};
use crate::FluentList;
use ordered_float::OrderedFloat;
use std::iter::Sum;
use tracing::debug;

impl<T> FluentList<T> {
    /// Left fold seeded with the first element.
    ///
    /// # Errors
    /// [`FluentError::EmptyReduce`] if the list is empty.
    pub fn reduce<F>(self, f: F) -> Result<T>
    where
        F: Fn(T, T) -> T,
    {
        let mut it = self.items.into_iter();
        let Some(first) = it.next() else {
            return Err(empty("reduce"));
        };
        Ok(it.fold(first, f))
    }

    /// Left fold with an explicit seed.
    pub fn fold<A, F>(self, init: A, f: F) -> A
    where
        F: Fn(A, T) -> A,
    {
        self.items.into_iter().fold(init, f)
    }

    /// Sum of `f` applied to every element. Zero for an empty list.
    pub fn sum_by<N, F>(&self, f: F) -> N
    where
        N: Sum<N>,
        F: Fn(&T) -> N,
    {
        self.items.iter().map(f).sum()
    }

    pub fn sum_by_f64<F>(&self, f: F) -> f64
    where
        F: Fn(&T) -> f64,
    {
        self.sum_by(f)
    }
}

impl<T: Clone> FluentList<T> {
    /// The first element yielding the smallest key.
    ///
    /// # Errors
    /// [`FluentError::EmptyReduce`] if the list is empty.
    pub fn min_by<K, F>(&self, key: F) -> Result<T>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.pick_by("min_by", key, |candidate, best| candidate < best)
    }

    /// The first element yielding the largest key.
    ///
    /// # Errors
    /// [`FluentError::EmptyReduce`] if the list is empty.
    pub fn max_by<K, F>(&self, key: F) -> Result<T>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.pick_by("max_by", key, |candidate, best| candidate > best)
    }

    /// [`min_by`](FluentList::min_by) over `f64` keys. NaN compares greater than every number.
    ///
    /// # Errors
    /// [`FluentError::EmptyReduce`] if the list is empty.
    pub fn min_by_f64<F>(&self, key: F) -> Result<T>
    where
        F: Fn(&T) -> f64,
    {
        self.pick_by("min_by_f64", |t| OrderedFloat(key(t)), |c, b| c < b)
    }

    /// [`max_by`](FluentList::max_by) over `f64` keys.
    ///
    /// # Errors
    /// [`FluentError::EmptyReduce`] if the list is empty.
    pub fn max_by_f64<F>(&self, key: F) -> Result<T>
    where
        F: Fn(&T) -> f64,
    {
        self.pick_by("max_by_f64", |t| OrderedFloat(key(t)), |c, b| c > b)
    }

    // Each key is computed once; ties keep the earlier element.
    fn pick_by<K, F, B>(&self, op: &'static str, key: F, better: B) -> Result<T>
    where
        F: Fn(&T) -> K,
        B: Fn(&K, &K) -> bool,
    {
        let mut it = self.items.iter();
        let Some(first) = it.next() else {
            return Err(empty(op));
        };
        let mut best = (first, key(first));
        for item in it {
            let k = key(item);
            if better(&k, &best.1) {
                best = (item, k);
            }
        }
        Ok(best.0.clone())
    }
}

fn empty(op: &'static str) -> FluentError {
    debug!(op, "reduction requested on an empty list");
    FluentError::EmptyReduce { op }
}
