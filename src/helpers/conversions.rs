use crate::FluentList;
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

impl<T: Eq + Hash> FluentList<T> {
    pub fn into_set(self) -> HashSet<T> {
        self.items.into_iter().collect()
    }
}

impl<T: Eq + Hash + Clone> FluentList<T> {
    pub fn to_set(&self) -> HashSet<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T: Ord + Clone> FluentList<T> {
    pub fn to_sorted_set(&self) -> BTreeSet<T> {
        self.items.iter().cloned().collect()
    }
}
