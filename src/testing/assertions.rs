//! Assertion functions for comparing list and group outputs.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

/// Assert that two lists are equal in order and content.
///
/// # Panics
///
/// Panics if the lists differ in length or at any index.
///
/// # Example
///
/// ```
/// use fluentlist::FluentList;
/// use fluentlist::testing::assert_lists_equal;
///
/// let actual = FluentList::from(vec![1, 2, 3]).map(|x| x * 2);
/// assert_lists_equal(&actual, &[2, 4, 6]);
/// ```
pub fn assert_lists_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "List length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "List mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two lists contain the same elements, ignoring order.
///
/// # Panics
///
/// Panics if the lists differ in length or content.
///
/// # Example
///
/// ```
/// use fluentlist::testing::assert_lists_unordered_equal;
///
/// assert_lists_unordered_equal(&[3, 1, 2], &[1, 2, 3]);
/// ```
pub fn assert_lists_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "List length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    let actual_set: HashSet<_> = actual.iter().collect();
    let expected_set: HashSet<_> = expected.iter().collect();

    if actual_set != expected_set {
        let missing: Vec<_> = expected_set.difference(&actual_set).collect();
        let extra: Vec<_> = actual_set.difference(&expected_set).collect();

        panic!(
            "List content mismatch:\n  Missing elements: {missing:?}\n  Extra elements: {extra:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
        );
    }
}

/// Assert that a `group_by` result has exactly the expected groups.
///
/// Keys are compared as sets. Each group's values are compared in order,
/// since grouping preserves the original relative order of elements.
///
/// # Panics
///
/// Panics on a missing or extra key, or on a group whose values differ.
///
/// # Example
///
/// ```
/// use fluentlist::FluentList;
/// use fluentlist::testing::assert_groups_equal;
///
/// let groups = FluentList::from(vec![1, 2, 3, 4, 5]).group_by(|x| x % 2 == 0);
/// assert_groups_equal(&groups, vec![(false, vec![1, 3, 5]), (true, vec![2, 4])]);
/// ```
pub fn assert_groups_equal<K, V, S>(actual: &HashMap<K, Vec<V>, S>, expected: Vec<(K, Vec<V>)>)
where
    K: Debug + Eq + Hash,
    V: Debug + PartialEq,
    S: BuildHasher,
{
    let expected_keys: HashSet<&K> = expected.iter().map(|(k, _)| k).collect();
    let extra: Vec<&K> = actual.keys().filter(|k| !expected_keys.contains(k)).collect();
    assert!(
        extra.is_empty(),
        "Unexpected group keys: {extra:?}\n  Actual groups: {actual:?}"
    );

    for (k, ev) in &expected {
        let Some(av) = actual.get(k) else {
            panic!("Missing group {k:?}\n  Actual groups: {actual:?}");
        };
        assert_eq!(
            av, ev,
            "Value mismatch for group {k:?}:\n  Expected values: {ev:?}\n  Actual values: {av:?}"
        );
    }
}

/// Assert that every element satisfies `predicate`.
///
/// # Panics
///
/// Panics on the first element that does not.
pub fn assert_all<T: Debug>(list: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in list.iter().enumerate() {
        assert!(
            predicate(item),
            "Predicate failed for element at index {i}:\n  Element: {item:?}\n  List: {list:?}"
        );
    }
}

/// Assert that no element satisfies `predicate`.
///
/// # Panics
///
/// Panics on the first element that does.
pub fn assert_none<T: Debug>(list: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in list.iter().enumerate() {
        assert!(
            !predicate(item),
            "Predicate unexpectedly matched element at index {i}:\n  Element: {item:?}\n  List: {list:?}"
        );
    }
}
